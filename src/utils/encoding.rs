// Text decoding for Vorbis comment strings

use encoding_rs::UTF_8;

/// Decode a UTF-8 byte vector as-is.
///
/// Bytes are passed through without normalization. Malformed sequences are
/// replaced with U+FFFD instead of failing the whole block.
pub fn decode_utf8(data: &[u8]) -> String {
    let (text, _had_errors) = UTF_8.decode_without_bom_handling(data);
    text.into_owned()
}
