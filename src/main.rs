// CLI binary entry point for flacinfo

mod cli;

use clap::Parser;
use std::process;

use cli::{Config, OutputFormatter};

fn main() {
    let config = Config::parse();
    cli::init_logging(&config);

    if let Err(e) = cli::command_read(&config) {
        OutputFormatter::print_error(&format!("{:#}", e));
        process::exit(1);
    }
}
