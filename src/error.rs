//! Error types for flacinfo

use thiserror::Error;

/// Result type alias for metadata decoding
pub type Result<T> = std::result::Result<T, FlacError>;

/// Errors produced while decoding FLAC metadata
#[derive(Error, Debug)]
pub enum FlacError {
    /// The stream does not start with `fLaC`
    #[error("not a FLAC stream: expected marker 664c6143, found {found}")]
    InvalidMarker { found: String },

    /// A read asked for more bytes than the buffer holds
    #[error("read of {requested} bytes at offset {position} exceeds buffer ({available} bytes remaining)")]
    OutOfBounds {
        requested: usize,
        available: usize,
        position: usize,
    },

    /// IO error while capturing the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FlacError {
    /// Create a marker mismatch error from the bytes actually found
    pub fn invalid_marker(found: &[u8]) -> Self {
        FlacError::InvalidMarker {
            found: hex::encode(found),
        }
    }

    /// Create a bounds error
    pub fn out_of_bounds(requested: usize, available: usize, position: usize) -> Self {
        FlacError::OutOfBounds {
            requested,
            available,
            position,
        }
    }

    /// Whether this error is a bounds violation
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, FlacError::OutOfBounds { .. })
    }
}
