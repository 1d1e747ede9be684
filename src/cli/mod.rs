// CLI module for flacinfo
//
// Owns everything around the decoder: argument parsing, file capture,
// logging setup and console rendering.

pub mod commands;
pub mod config;
pub mod output;

pub use commands::command_read;
pub use config::{Config, OutputFormat};
pub use output::OutputFormatter;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over the
/// level derived from the command line.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
