// Walks the metadata block chain of a captured FLAC stream

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use super::metadata::{FlacMetadataBlockHeader, FlacMetadataBlockType, FLAC_SIGNATURE};
use super::streaminfo::StreamInfo;
use super::vorbis::VorbisComment;
use crate::error::{FlacError, Result};
use crate::utils::ByteCursor;

/// Default number of bytes captured from the start of a file
pub const DEFAULT_CAPTURE_LIMIT: usize = 64 * 1024;

/// Options for reading FLAC files from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Only this many leading bytes of the file are read. Metadata that
    /// extends past the limit fails with [`FlacError::OutOfBounds`].
    pub capture_limit: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            capture_limit: DEFAULT_CAPTURE_LIMIT,
        }
    }
}

/// Decoded contents of a block body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockBody {
    StreamInfo(StreamInfo),
    VorbisComment(VorbisComment),
    /// Body was skipped by length without decoding
    Skipped,
}

/// One metadata block: header plus decoded body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataBlock {
    /// Position in the block chain, starting at 0
    pub index: usize,
    /// Byte offset of the header from the start of the stream
    pub offset: usize,
    pub header: FlacMetadataBlockHeader,
    pub body: BlockBody,
}

/// All metadata blocks of a stream, in stream order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlacMetadata {
    pub blocks: Vec<MetadataBlock>,
    audio_offset: usize,
}

impl FlacMetadata {
    /// First STREAMINFO block, if any
    pub fn stream_info(&self) -> Option<&StreamInfo> {
        self.blocks.iter().find_map(|block| match &block.body {
            BlockBody::StreamInfo(info) => Some(info),
            _ => None,
        })
    }

    /// First VORBIS_COMMENT block, if any
    pub fn vorbis_comment(&self) -> Option<&VorbisComment> {
        self.blocks.iter().find_map(|block| match &block.body {
            BlockBody::VorbisComment(comment) => Some(comment),
            _ => None,
        })
    }

    /// Offset of the first byte after the last metadata block
    pub fn audio_offset(&self) -> usize {
        self.audio_offset
    }
}

/// Check the `fLaC` marker and advance past it.
///
/// Input shorter than the marker is reported as a marker mismatch, not as a
/// bounds error.
pub fn read_signature(cursor: &mut ByteCursor<'_>) -> Result<()> {
    if cursor.remaining() < FLAC_SIGNATURE.len() {
        let present = cursor.read_bytes(cursor.remaining())?;
        return Err(FlacError::invalid_marker(present));
    }
    let marker = cursor.read_bytes(FLAC_SIGNATURE.len())?;
    if marker != FLAC_SIGNATURE {
        return Err(FlacError::invalid_marker(marker));
    }
    Ok(())
}

/// Read the next block header and its body, dispatching on the block type.
///
/// The body is carved out by the declared length first, so decoders can
/// never read into the following block and the cursor always ends up on the
/// next header.
pub fn read_block(cursor: &mut ByteCursor<'_>, index: usize) -> Result<MetadataBlock> {
    let offset = cursor.position();
    let header = FlacMetadataBlockHeader::read(cursor)?;
    debug!(
        index,
        offset,
        block_type = %header.block_type,
        length = header.length,
        is_last = header.is_last,
        "metadata block header"
    );

    let mut body_cursor = cursor.sub_cursor(header.length as usize)?;
    let body = match header.block_type {
        FlacMetadataBlockType::StreamInfo => {
            BlockBody::StreamInfo(StreamInfo::read(&mut body_cursor)?)
        }
        FlacMetadataBlockType::VorbisComment => {
            BlockBody::VorbisComment(VorbisComment::read(&mut body_cursor)?)
        }
        FlacMetadataBlockType::Invalid | FlacMetadataBlockType::Unknown(_) => {
            warn!(
                index,
                offset,
                block_type = %header.block_type,
                "skipping block with unregistered type code"
            );
            BlockBody::Skipped
        }
        _ => {
            debug!(index, length = header.length, "skipping block body");
            BlockBody::Skipped
        }
    };

    Ok(MetadataBlock {
        index,
        offset,
        header,
        body,
    })
}

/// Decode every metadata block of an in-memory FLAC stream.
///
/// Stops after the block flagged as last; anything following (audio frames)
/// is left untouched.
pub fn parse_metadata(data: &[u8]) -> Result<FlacMetadata> {
    let mut cursor = ByteCursor::new(data);
    read_signature(&mut cursor)?;

    let mut blocks = Vec::new();
    loop {
        let block = read_block(&mut cursor, blocks.len())?;
        let is_last = block.header.is_last;
        blocks.push(block);
        if is_last {
            break;
        }
    }

    debug!(blocks = blocks.len(), audio_offset = cursor.position(), "metadata parsed");
    Ok(FlacMetadata {
        blocks,
        audio_offset: cursor.position(),
    })
}

/// Read up to `options.capture_limit` bytes from the start of a file
pub fn capture_file<P: AsRef<Path>>(path: P, options: &ReaderOptions) -> Result<Vec<u8>> {
    let file = File::open(path.as_ref())?;
    // grows with what is actually read; the limit may be far larger than the file
    let mut data = Vec::new();
    file.take(options.capture_limit as u64).read_to_end(&mut data)?;
    debug!(path = %path.as_ref().display(), bytes = data.len(), "captured file prefix");
    Ok(data)
}

/// Capture the start of a file and decode its metadata blocks
pub fn read_flac_file<P: AsRef<Path>>(path: P, options: &ReaderOptions) -> Result<FlacMetadata> {
    let data = capture_file(path, options)?;
    parse_metadata(&data)
}
