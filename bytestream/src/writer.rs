//! Growable little-endian byte writer.

use crate::wide::WideInt;

/// A little-endian byte sink.
///
/// Writes are accumulated in an internal buffer whose capacity grows
/// geometrically. Call [`finish`](Self::finish) to get exactly the bytes
/// written so far.
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Writes a byte slice verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Writes a fixed-width little-endian `u32`.
    pub fn write_u32_le(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes the raw IEEE-754 bit pattern of `value`, little-endian.
    pub fn write_f64_le(&mut self, value: f64) {
        self.write_bytes(&value.to_bits().to_le_bytes());
    }

    /// Writes a base-128 varint `u32` (1 to 5 bytes).
    pub fn write_varu32(&mut self, mut value: u32) {
        while value >= 0x80 {
            self.write_u8((value as u8 & 0x7F) | 0x80);
            value >>= 7;
        }
        self.write_u8(value as u8);
    }

    /// Writes a base-128 varint over the full 64 bits (1 to 10 bytes).
    ///
    /// Groups are cut at multiples of 7 bits, so the fifth byte carries the
    /// top four bits of the low half and the bottom three of the high half.
    pub fn write_varu64(&mut self, value: WideInt) {
        let mut value = value.raw();
        while value >= 0x80 {
            self.write_u8((value as u8 & 0x7F) | 0x80);
            value >>= 7;
        }
        self.write_u8(value as u8);
    }

    /// Finishes writing and returns the written bytes.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = ByteWriter::new();
        assert!(writer.is_empty());
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn write_u8_and_bytes() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0xAB);
        writer.write_bytes(&[1, 2, 3]);
        assert_eq!(writer.len(), 4);
        assert_eq!(writer.finish(), vec![0xAB, 1, 2, 3]);
    }

    #[test]
    fn write_u32_le() {
        let mut writer = ByteWriter::new();
        writer.write_u32_le(0x1234_5678);
        assert_eq!(writer.finish(), vec![0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn write_f64_le_keeps_bit_pattern() {
        let mut writer = ByteWriter::new();
        writer.write_f64_le(1.0);
        writer.write_f64_le(-0.0);
        let bytes = writer.finish();
        assert_eq!(&bytes[..8], &[0, 0, 0, 0, 0, 0, 0xF0, 0x3F]);
        assert_eq!(&bytes[8..], &[0, 0, 0, 0, 0, 0, 0, 0x80]);
    }

    #[test]
    fn write_varu32_lengths() {
        let cases: [(u32, &[u8]); 6] = [
            (0, &[0x00]),
            (1, &[0x01]),
            (127, &[0x7F]),
            (128, &[0x80, 0x01]),
            (300, &[0xAC, 0x02]),
            (u32::MAX, &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]),
        ];
        for (value, expected) in cases {
            let mut writer = ByteWriter::new();
            writer.write_varu32(value);
            assert_eq!(writer.finish(), expected, "value {value}");
        }
    }

    #[test]
    fn write_varu64_crosses_half_boundary() {
        let mut writer = ByteWriter::new();
        writer.write_varu64(WideInt::from_halves(0, 1));
        // 2^32 = bit 32, which sits in the fifth group (bits 28..35).
        assert_eq!(writer.finish(), vec![0x80, 0x80, 0x80, 0x80, 0x10]);
    }

    #[test]
    fn write_varu64_max_is_ten_bytes() {
        let mut writer = ByteWriter::new();
        writer.write_varu64(WideInt::new(u64::MAX));
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 10);
        assert_eq!(bytes[9], 0x01);
        assert!(bytes[..9].iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn finish_into_appends() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0xAB);
        let mut buf = vec![0x00, 0x11];
        writer.finish_into(&mut buf);
        assert_eq!(buf, vec![0x00, 0x11, 0xAB]);
    }

    #[test]
    fn with_capacity_does_not_leak_into_output() {
        let mut writer = ByteWriter::with_capacity(1024);
        writer.write_u8(7);
        assert_eq!(writer.finish(), vec![7]);
    }
}
