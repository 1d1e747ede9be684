// VORBIS_COMMENT implementation for FLAC

use serde::Serialize;

use crate::error::Result;
use crate::utils::encoding::decode_utf8;
use crate::utils::ByteCursor;

/// Vorbis comment structure
///
/// Lengths and the comment count are little-endian, unlike the rest of the
/// FLAC container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VorbisComment {
    pub vendor_string: String,
    /// Count as declared in the block
    pub comment_count: u32,
    /// Comments in stream order, unsplit (`FIELD=value`)
    pub comments: Vec<String>,
}

impl VorbisComment {
    /// Read Vorbis comment from the cursor
    ///
    /// Running out of bytes before the declared number of comments is an
    /// error; no partial list is returned.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let vendor_length = cursor.read_le_u32()? as usize;
        let vendor_string = decode_utf8(cursor.read_bytes(vendor_length)?);

        let comment_count = cursor.read_le_u32()?;

        // every entry carries at least its 4-byte length prefix
        let capacity = (comment_count as usize).min(cursor.remaining() / 4);
        let mut comments = Vec::with_capacity(capacity);
        for _ in 0..comment_count {
            let comment_length = cursor.read_le_u32()? as usize;
            comments.push(decode_utf8(cursor.read_bytes(comment_length)?));
        }

        Ok(VorbisComment {
            vendor_string,
            comment_count,
            comments,
        })
    }

    /// Decode a Vorbis comment body from a byte slice
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::read(&mut ByteCursor::new(data))
    }

    /// Comments split into `(field, value)` at the first `=`.
    /// Entries without a separator are skipped.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.comments.iter().filter_map(|c| c.split_once('='))
    }

    /// Get a comment value by field name
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields()
            .find(|(f, _)| f.eq_ignore_ascii_case(field))
            .map(|(_, v)| v)
    }

    /// All values for a field, in stream order
    pub fn get_all<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields()
            .filter(move |(f, _)| f.eq_ignore_ascii_case(field))
            .map(|(_, v)| v)
    }
}

/// Common Vorbis comment field names
pub struct VorbisFields;
impl VorbisFields {
    pub const TITLE: &'static str = "TITLE";
    pub const ARTIST: &'static str = "ARTIST";
    pub const ALBUM: &'static str = "ALBUM";
    pub const DATE: &'static str = "DATE";
    pub const TRACKNUMBER: &'static str = "TRACKNUMBER";
    pub const GENRE: &'static str = "GENRE";
    pub const COMMENT: &'static str = "COMMENT";
}
