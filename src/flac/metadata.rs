// FLAC metadata block header and block type registry

use serde::ser::SerializeStruct;
use serde::Serialize;

use crate::error::Result;
use crate::utils::ByteCursor;

/// FLAC file signature
pub const FLAC_SIGNATURE: &[u8; 4] = b"fLaC";

/// Name returned for type codes the registry does not know.
pub const UNKNOWN_BLOCK_NAME: &str = "UNKNOWN";

/// Known metadata block type codes and their canonical names.
pub const BLOCK_TYPE_NAMES: [(u8, &str); 8] = [
    (0, "STREAMINFO"),
    (1, "PADDING"),
    (2, "APPLICATION"),
    (3, "SEEKTABLE"),
    (4, "VORBIS_COMMENT"),
    (5, "CUESHEET"),
    (6, "PICTURE"),
    (127, "INVALID"),
];

/// Canonical name for a block type code, or [`UNKNOWN_BLOCK_NAME`].
pub fn block_type_name(code: u8) -> &'static str {
    BLOCK_TYPE_NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_BLOCK_NAME)
}

/// FLAC metadata block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlacMetadataBlockType {
    StreamInfo,
    Padding,
    Application,
    SeekTable,
    VorbisComment,
    CueSheet,
    Picture,
    /// Reserved code 127
    Invalid,
    /// Any code outside the registry; kept so the header can be re-packed
    Unknown(u8),
}

impl FlacMetadataBlockType {
    /// Map a 7-bit type code. Only the low seven bits are considered.
    pub fn from_code(code: u8) -> Self {
        match code & 0x7F {
            0 => FlacMetadataBlockType::StreamInfo,
            1 => FlacMetadataBlockType::Padding,
            2 => FlacMetadataBlockType::Application,
            3 => FlacMetadataBlockType::SeekTable,
            4 => FlacMetadataBlockType::VorbisComment,
            5 => FlacMetadataBlockType::CueSheet,
            6 => FlacMetadataBlockType::Picture,
            127 => FlacMetadataBlockType::Invalid,
            other => FlacMetadataBlockType::Unknown(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            FlacMetadataBlockType::StreamInfo => 0,
            FlacMetadataBlockType::Padding => 1,
            FlacMetadataBlockType::Application => 2,
            FlacMetadataBlockType::SeekTable => 3,
            FlacMetadataBlockType::VorbisComment => 4,
            FlacMetadataBlockType::CueSheet => 5,
            FlacMetadataBlockType::Picture => 6,
            FlacMetadataBlockType::Invalid => 127,
            FlacMetadataBlockType::Unknown(code) => *code,
        }
    }

    pub fn name(&self) -> &'static str {
        block_type_name(self.code())
    }
}

impl std::fmt::Display for FlacMetadataBlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code(), self.name())
    }
}

/// Serialized as `{ "code": <u8>, "name": <registry name> }`
impl Serialize for FlacMetadataBlockType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FlacMetadataBlockType", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("name", self.name())?;
        state.end()
    }
}

/// FLAC metadata block header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlacMetadataBlockHeader {
    pub is_last: bool,
    pub block_type: FlacMetadataBlockType,
    /// Length of the block body in bytes (24 bits)
    pub length: u32,
}

impl FlacMetadataBlockHeader {
    pub const HEADER_SIZE: usize = 4;

    const LAST_BLOCK_MASK: u32 = 0x8000_0000;
    const BLOCK_TYPE_MASK: u32 = 0x7F00_0000;
    const BLOCK_LENGTH_MASK: u32 = 0x00FF_FFFF;

    /// Decode a header from its big-endian 32-bit word. Every word is valid.
    pub fn from_word(word: u32) -> Self {
        FlacMetadataBlockHeader {
            is_last: word & Self::LAST_BLOCK_MASK != 0,
            block_type: FlacMetadataBlockType::from_code(
                ((word & Self::BLOCK_TYPE_MASK) >> 24) as u8,
            ),
            length: word & Self::BLOCK_LENGTH_MASK,
        }
    }

    /// Pack the header back into the on-disk 32-bit word.
    pub fn to_word(&self) -> u32 {
        let last = if self.is_last { Self::LAST_BLOCK_MASK } else { 0 };
        last | (((self.block_type.code() as u32) << 24) & Self::BLOCK_TYPE_MASK)
            | (self.length & Self::BLOCK_LENGTH_MASK)
    }

    /// Read FLAC metadata block header from the cursor
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        cursor.read_be_u32().map(Self::from_word)
    }

    pub fn from_bytes(bytes: [u8; Self::HEADER_SIZE]) -> Self {
        Self::from_word(u32::from_be_bytes(bytes))
    }
}
