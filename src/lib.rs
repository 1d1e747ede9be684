//! flacinfo - FLAC metadata block decoder
//!
//! Decodes the `fLaC` stream marker, the chain of metadata block headers and
//! the contents of the STREAMINFO and VORBIS_COMMENT blocks. Every other block
//! type is skipped by its declared length.
//!
//! ```
//! let mut data = b"fLaC".to_vec();
//! data.extend_from_slice(&[0x80, 0x00, 0x00, 0x22]);
//! data.extend_from_slice(&[0x10, 0x00, 0x10, 0x00, 0, 0, 0, 0, 0, 0]);
//! data.extend_from_slice(&[0x0A, 0xC4, 0x42, 0xF0, 0x00, 0x00, 0x03, 0xE8]);
//! data.extend_from_slice(&[0u8; 16]);
//!
//! let metadata = flacinfo::parse_metadata(&data)?;
//! let info = metadata.stream_info().unwrap();
//! assert_eq!(info.sample_rate, 44100);
//! assert_eq!(info.channels, 2);
//! # Ok::<(), flacinfo::FlacError>(())
//! ```

pub mod error;
pub mod flac;
pub mod utils;

pub use error::{FlacError, Result};
pub use flac::{
    block_type_name, parse_metadata, read_flac_file, BlockBody, FlacMetadata,
    FlacMetadataBlockHeader, FlacMetadataBlockType, MetadataBlock, ReaderOptions, StreamInfo,
    VorbisComment, VorbisFields, FLAC_SIGNATURE,
};
pub use utils::ByteCursor;
