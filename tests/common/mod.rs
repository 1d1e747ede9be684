//! Shared fixture builders for integration tests

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Fields packed into a STREAMINFO body by [`streaminfo_body`]
pub struct StreamInfoFields {
    pub min_block_size: u16,
    pub max_block_size: u16,
    pub min_frame_size: u32,
    pub max_frame_size: u32,
    pub sample_rate: u32,
    pub channels: u8,
    pub bits_per_sample: u8,
    pub total_samples: u64,
    pub md5: [u8; 16],
}

impl Default for StreamInfoFields {
    fn default() -> Self {
        Self {
            min_block_size: 4096,
            max_block_size: 4096,
            min_frame_size: 0,
            max_frame_size: 0,
            sample_rate: 44100,
            channels: 2,
            bits_per_sample: 16,
            total_samples: 1000,
            md5: [0; 16],
        }
    }
}

/// Pack a 34-byte STREAMINFO body
pub fn streaminfo_body(fields: &StreamInfoFields) -> Vec<u8> {
    let window1 = (fields.max_block_size as u64) << 48
        | (fields.min_frame_size as u64 & 0xFF_FFFF) << 24
        | (fields.max_frame_size as u64 & 0xFF_FFFF);
    let window2 = (fields.sample_rate as u64 & 0xF_FFFF) << 44
        | ((fields.channels - 1) as u64 & 0x7) << 41
        | ((fields.bits_per_sample - 1) as u64 & 0x1F) << 36
        | (fields.total_samples & 0xF_FFFF_FFFF);

    let mut body = Vec::with_capacity(34);
    body.extend_from_slice(&fields.min_block_size.to_be_bytes());
    body.extend_from_slice(&window1.to_be_bytes());
    body.extend_from_slice(&window2.to_be_bytes());
    body.extend_from_slice(&fields.md5);
    body
}

/// Pack a VORBIS_COMMENT body
pub fn vorbis_body(vendor: &str, comments: &[&str]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    body.extend_from_slice(vendor.as_bytes());
    body.extend_from_slice(&(comments.len() as u32).to_le_bytes());
    for comment in comments {
        body.extend_from_slice(&(comment.len() as u32).to_le_bytes());
        body.extend_from_slice(comment.as_bytes());
    }
    body
}

/// Builder for a complete FLAC metadata section
pub struct FlacBuilder {
    data: Vec<u8>,
}

impl FlacBuilder {
    pub fn new() -> Self {
        Self {
            data: b"fLaC".to_vec(),
        }
    }

    pub fn block(mut self, code: u8, is_last: bool, body: &[u8]) -> Self {
        let word = (if is_last { 0x8000_0000u32 } else { 0 })
            | ((code as u32 & 0x7F) << 24)
            | (body.len() as u32 & 0xFF_FFFF);
        self.data.extend_from_slice(&word.to_be_bytes());
        self.data.extend_from_slice(body);
        self
    }

    /// Append raw bytes after the metadata, e.g. audio frames
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

/// Write bytes to a temporary `.flac` file
pub fn write_temp_flac(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".flac").expect("Failed to create temp file");
    file.write_all(data).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
