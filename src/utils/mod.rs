// Shared helpers for the block decoders

pub mod cursor;
pub mod encoding;

pub use cursor::ByteCursor;
