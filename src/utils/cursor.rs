// Bounds-checked byte cursor shared by all block decoders

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{FlacError, Result};

/// Sequential reader over an in-memory buffer.
///
/// Every read either returns the requested bytes and advances, or fails with
/// [`FlacError::OutOfBounds`] and leaves the position untouched. The cursor
/// only moves forward.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current read position relative to the start of the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Total length of the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes still available to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Borrow the next `count` bytes and advance past them.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(FlacError::out_of_bounds(
                count,
                self.remaining(),
                self.offset,
            ));
        }
        let start = self.offset;
        self.offset += count;
        Ok(&self.data[start..self.offset])
    }

    /// Advance past `count` bytes without looking at them.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.read_bytes(count).map(|_| ())
    }

    /// Read a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read big-endian 16-bit integer
    pub fn read_be_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.read_bytes(2)?))
    }

    /// Read big-endian 32-bit integer
    pub fn read_be_u32(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.read_bytes(4)?))
    }

    /// Read big-endian 64-bit integer
    pub fn read_be_u64(&mut self) -> Result<u64> {
        Ok(BigEndian::read_u64(self.read_bytes(8)?))
    }

    /// Read little-endian 32-bit integer
    pub fn read_le_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    /// Split off a sub-cursor over the next `count` bytes.
    ///
    /// The parent advances past the whole region regardless of how much the
    /// sub-cursor ends up consuming.
    pub fn sub_cursor(&mut self, count: usize) -> Result<ByteCursor<'a>> {
        self.read_bytes(count).map(ByteCursor::new)
    }
}
