// Output formatting for CLI

use std::io::Write;

use anyhow::Result;
use flacinfo::{BlockBody, FlacMetadata, MetadataBlock, StreamInfo, VorbisComment};

use crate::cli::OutputFormat;

/// Format and output data
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Output metadata
    pub fn output_metadata(&self, metadata: &FlacMetadata, writer: &mut impl Write) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        match self.format {
            OutputFormat::Text => {
                for block in &metadata.blocks {
                    self.output_block(block, writer)?;
                }
            }
            OutputFormat::Json => {
                writeln!(writer, "{}", serde_json::to_string(metadata)?)?;
            }
            OutputFormat::Pretty => {
                writeln!(writer, "{}", serde_json::to_string_pretty(metadata)?)?;
            }
        }
        Ok(())
    }

    fn output_block(&self, block: &MetadataBlock, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "METADATA block #{}", block.index)?;
        writeln!(writer, "  type: {}", block.header.block_type)?;
        writeln!(writer, "  is last: {}", block.header.is_last)?;
        writeln!(writer, "  length: {}", block.header.length)?;

        match &block.body {
            BlockBody::StreamInfo(info) => self.output_stream_info(info, writer),
            BlockBody::VorbisComment(comment) => self.output_vorbis_comment(comment, writer),
            BlockBody::Skipped => Ok(()),
        }
    }

    fn output_stream_info(&self, info: &StreamInfo, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "  minimum blocksize: {} samples", info.min_block_size)?;
        writeln!(writer, "  maximum blocksize: {} samples", info.max_block_size)?;
        writeln!(writer, "  minimum framesize: {} bytes", info.min_frame_size)?;
        writeln!(writer, "  maximum framesize: {} bytes", info.max_frame_size)?;
        writeln!(writer, "  sample_rate: {}", info.sample_rate)?;
        writeln!(writer, "  channels: {}", info.channels)?;
        writeln!(writer, "  bits-per-sample: {}", info.bits_per_sample)?;
        writeln!(writer, "  total samples: {}", info.total_samples)?;
        writeln!(writer, "  MD5 signature: {}", info.md5_signature)?;
        Ok(())
    }

    fn output_vorbis_comment(&self, comment: &VorbisComment, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "  vendor string: {}", comment.vendor_string)?;
        writeln!(writer, "  comments: {}", comment.comment_count)?;
        for (i, entry) in comment.comments.iter().enumerate() {
            writeln!(writer, "    comment[{}]: {}", i, entry)?;
        }
        Ok(())
    }

    /// Print error message; shown even in quiet mode
    pub fn print_error(message: &str) {
        eprintln!("error: {}", message);
    }
}
