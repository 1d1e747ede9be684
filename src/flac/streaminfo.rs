// STREAMINFO block implementation for FLAC

use serde::Serialize;

use crate::error::Result;
use crate::utils::ByteCursor;

/// Decoded STREAMINFO block.
///
/// On-disk layout (bit widths):
///
/// ```text
/// <16>  minimum block size (samples)
/// <16>  maximum block size (samples)
/// <24>  minimum frame size (bytes, 0 = unknown)
/// <24>  maximum frame size (bytes, 0 = unknown)
/// <20>  sample rate (Hz)
/// <3>   channels - 1
/// <5>   bits per sample - 1
/// <36>  total samples (0 = unknown)
/// <128> MD5 signature of the unencoded audio
/// ```
///
/// The body is read as a 16-bit word, two 64-bit windows and a 16-byte tail;
/// the odd-width fields are masked out of the windows. Values are not checked
/// against the ranges the format documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamInfo {
    pub min_block_size: u16,
    pub max_block_size: u16,
    pub min_frame_size: u32,
    pub max_frame_size: u32,
    pub sample_rate: u32,
    pub channels: u8,
    pub bits_per_sample: u8,
    pub total_samples: u64,
    /// Lowercase hex, 32 characters
    pub md5_signature: String,
}

impl StreamInfo {
    /// Size of a STREAMINFO body in bytes
    pub const BLOCK_SIZE: usize = 34;

    // first window: max block size | min frame size | max frame size
    const MAX_BLOCK_SHIFT: u32 = 48;
    const MIN_FRAME_SHIFT: u32 = 24;
    const FRAME_SIZE_MASK: u64 = 0x00FF_FFFF;

    // second window: sample rate | channels | bits per sample | total samples
    const SAMPLE_RATE_SHIFT: u32 = 44;
    const SAMPLE_RATE_MASK: u64 = 0x000F_FFFF;
    const CHANNELS_SHIFT: u32 = 41;
    const CHANNELS_MASK: u64 = 0x07;
    const BITS_PER_SAMPLE_SHIFT: u32 = 36;
    const BITS_PER_SAMPLE_MASK: u64 = 0x1F;
    const TOTAL_SAMPLES_MASK: u64 = 0x0000_000F_FFFF_FFFF;

    /// Read a STREAMINFO body from the cursor, consuming exactly 34 bytes.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let min_block_size = cursor.read_be_u16()?;

        let window = cursor.read_be_u64()?;
        let max_block_size = (window >> Self::MAX_BLOCK_SHIFT) as u16;
        let min_frame_size = ((window >> Self::MIN_FRAME_SHIFT) & Self::FRAME_SIZE_MASK) as u32;
        let max_frame_size = (window & Self::FRAME_SIZE_MASK) as u32;

        let window = cursor.read_be_u64()?;
        let sample_rate = ((window >> Self::SAMPLE_RATE_SHIFT) & Self::SAMPLE_RATE_MASK) as u32;
        let channels = ((window >> Self::CHANNELS_SHIFT) & Self::CHANNELS_MASK) as u8 + 1;
        let bits_per_sample =
            ((window >> Self::BITS_PER_SAMPLE_SHIFT) & Self::BITS_PER_SAMPLE_MASK) as u8 + 1;
        let total_samples = window & Self::TOTAL_SAMPLES_MASK;

        let md5_signature = hex::encode(cursor.read_bytes(16)?);

        Ok(StreamInfo {
            min_block_size,
            max_block_size,
            min_frame_size,
            max_frame_size,
            sample_rate,
            channels,
            bits_per_sample,
            total_samples,
            md5_signature,
        })
    }

    /// Decode a STREAMINFO body from a byte slice
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::read(&mut ByteCursor::new(data))
    }

    /// Minimum and maximum block size are equal
    pub fn is_fixed_blocksize(&self) -> bool {
        self.min_block_size == self.max_block_size
    }

    /// Stream length in seconds, if both sample rate and sample count are known
    pub fn duration_secs(&self) -> Option<f64> {
        if self.sample_rate == 0 || self.total_samples == 0 {
            return None;
        }
        Some(self.total_samples as f64 / self.sample_rate as f64)
    }
}
