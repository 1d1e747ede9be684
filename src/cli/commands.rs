// CLI command implementations
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::{Config, OutputFormatter};

/// Read the metadata blocks of the configured file and print them
pub fn command_read(config: &Config) -> Result<()> {
    let path = &config.file;
    let metadata = flacinfo::read_flac_file(path, &config.reader_options())
        .with_context(|| format!("failed to read FLAC metadata from {}", path.display()))?;
    info!(
        path = %path.display(),
        blocks = metadata.blocks.len(),
        audio_offset = metadata.audio_offset(),
        "decoded metadata"
    );

    let formatter = OutputFormatter::new(config.format, config.quiet);
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    formatter.output_metadata(&metadata, &mut writer)?;
    writer.flush()?;
    Ok(())
}
