// CLI configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use flacinfo::flac::DEFAULT_CAPTURE_LIMIT;
use flacinfo::ReaderOptions;

/// flacinfo - FLAC metadata block inspector
#[derive(Parser, Debug)]
#[command(name = "flacinfo")]
#[command(about = "Print the metadata blocks of a FLAC file", long_about = None)]
#[command(version)]
pub struct Config {
    /// The input file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Number of leading bytes captured from the file
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CAPTURE_LIMIT)]
    pub buffer_size: usize,

    /// Quiet mode (print nothing unless an error occurs)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (log every block header to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per field, in block order
    #[default]
    Text,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    Pretty,
}

impl Config {
    pub fn reader_options(&self) -> ReaderOptions {
        ReaderOptions {
            capture_limit: self.buffer_size,
        }
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
