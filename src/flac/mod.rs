// FLAC metadata handling module

pub mod metadata;
pub mod reader;
pub mod streaminfo;
pub mod vorbis;

pub use metadata::{
    block_type_name, FlacMetadataBlockHeader, FlacMetadataBlockType, BLOCK_TYPE_NAMES,
    FLAC_SIGNATURE, UNKNOWN_BLOCK_NAME,
};
pub use reader::{
    parse_metadata, read_flac_file, BlockBody, FlacMetadata, MetadataBlock, ReaderOptions,
    DEFAULT_CAPTURE_LIMIT,
};
pub use streaminfo::StreamInfo;
pub use vorbis::{VorbisComment, VorbisFields};
