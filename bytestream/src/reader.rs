//! Bounded little-endian byte reader.

use crate::error::{StreamError, StreamResult};
use crate::wide::WideInt;

/// Maximum encoded length of a 64-bit varint.
pub const MAX_VARINT64_BYTES: usize = 10;

/// A little-endian byte source.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> StreamResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads `len` bytes, borrowing them from the underlying buffer.
    pub fn read_bytes(&mut self, len: usize) -> StreamResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Reads a fixed-width little-endian `u32`.
    pub fn read_u32_le(&mut self) -> StreamResult<u32> {
        self.read_array::<4>().map(u32::from_le_bytes)
    }

    /// Reads a little-endian IEEE-754 double from its raw bit pattern.
    pub fn read_f64_le(&mut self) -> StreamResult<f64> {
        self.read_array::<8>()
            .map(|bytes| f64::from_bits(u64::from_le_bytes(bytes)))
    }

    /// Reads a varint and keeps its low 32 bits.
    ///
    /// The value is parsed with the full 64-bit grammar, so an encoder that
    /// sign-extended a 32-bit value to ten bytes is still accepted.
    pub fn read_varu32(&mut self) -> StreamResult<u32> {
        self.read_varu64().map(WideInt::low)
    }

    /// Reads a base-128 varint of up to ten bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::MalformedVarint`] if the tenth byte still has
    /// its continuation bit set, or [`StreamError::OutOfData`] if the buffer
    /// ends mid-varint.
    pub fn read_varu64(&mut self) -> StreamResult<WideInt> {
        let mut result = 0u64;
        for index in 0..MAX_VARINT64_BYTES {
            let byte = self.read_u8()?;
            result |= u64::from(byte & 0x7F) << (7 * index);
            if byte & 0x80 == 0 {
                return Ok(WideInt::new(result));
            }
        }
        Err(StreamError::MalformedVarint)
    }

    fn ensure_bytes(&self, len: usize) -> StreamResult<()> {
        let available = self.remaining();
        if len > available {
            return Err(StreamError::OutOfData {
                requested: len,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> StreamResult<[u8; N]> {
        self.ensure_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = ByteReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = ByteReader::new(&[]);
        assert_eq!(
            reader.read_u8(),
            Err(StreamError::OutOfData {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn read_u32_le() {
        let mut reader = ByteReader::new(&[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(reader.read_u32_le().unwrap(), 0x1234_5678);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_u32_le_truncated() {
        let mut reader = ByteReader::new(&[0x78, 0x56]);
        let err = reader.read_u32_le().unwrap_err();
        assert_eq!(
            err,
            StreamError::OutOfData {
                requested: 4,
                available: 2
            }
        );
        assert_eq!(reader.position(), 0, "failed reads must not advance");
    }

    #[test]
    fn read_f64_le() {
        let mut reader = ByteReader::new(&[0, 0, 0, 0, 0, 0, 0xF0, 0xBF]);
        assert_eq!(reader.read_f64_le().unwrap(), -1.0);
    }

    #[test]
    fn read_bytes_borrows() {
        let data = [1u8, 2, 3, 4];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_bytes(3).unwrap(), &[1, 2, 3]);
        assert_eq!(reader.remaining(), 1);
        assert!(reader.read_bytes(2).is_err());
    }

    #[test]
    fn read_varu32() {
        let mut reader = ByteReader::new(&[0xAC, 0x02]);
        assert_eq!(reader.read_varu32().unwrap(), 300);
    }

    #[test]
    fn read_varu32_keeps_low_half_of_long_varint() {
        // -1 sign-extended to 64 bits.
        let mut bytes = [0xFF; 10];
        bytes[9] = 0x01;
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_varu32().unwrap(), u32::MAX);
    }

    #[test]
    fn read_varu64_fifth_byte_straddles_halves() {
        let mut reader = ByteReader::new(&[0x80, 0x80, 0x80, 0x80, 0x7F]);
        let value = reader.read_varu64().unwrap();
        assert_eq!(value.low(), 0xF000_0000);
        assert_eq!(value.high(), 0x7);
    }

    #[test]
    fn read_varu64_rejects_eleventh_byte() {
        let mut reader = ByteReader::new(&[0xFF; 11]);
        assert_eq!(reader.read_varu64(), Err(StreamError::MalformedVarint));
        assert_eq!(reader.position(), MAX_VARINT64_BYTES);
    }

    #[test]
    fn read_varu64_unterminated_is_out_of_data() {
        let mut reader = ByteReader::new(&[0x80, 0x80]);
        assert!(matches!(
            reader.read_varu64(),
            Err(StreamError::OutOfData { .. })
        ));
    }
}
