//! Exact 64-bit values carried through the varint and interleave paths.

use crate::error::{StreamError, StreamResult};

/// An exact 64-bit two's-complement value.
///
/// The wire format reasons about this value as a low and a high 32-bit half
/// (the fixed-width first vertex and the 64-bit varint both split there), so
/// both views are available. Arithmetic is never performed on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WideInt(u64);

impl WideInt {
    /// The zero value.
    pub const ZERO: Self = Self(0);

    /// Creates a wide integer from its raw 64-bit pattern.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Creates a wide integer from its low and high 32-bit halves.
    #[must_use]
    pub const fn from_halves(low: u32, high: u32) -> Self {
        Self(((high as u64) << 32) | low as u64)
    }

    /// Returns the raw 64-bit pattern.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Returns the low 32 bits.
    #[must_use]
    pub const fn low(self) -> u32 {
        self.0 as u32
    }

    /// Returns the high 32 bits.
    #[must_use]
    pub const fn high(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Reads 8 little-endian bytes: the first four form the low half, the
    /// next four the high half.
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(bytes))
    }

    /// Inverse of [`from_le_bytes`](Self::from_le_bytes).
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// Widens an unsigned 32-bit quantity held in a signed 64-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::NotUnsignedInt32`] if `value` is negative or
    /// exceeds `u32::MAX`.
    pub fn from_unsigned_int32(value: i64) -> StreamResult<Self> {
        u32::try_from(value)
            .map(|v| Self(u64::from(v)))
            .map_err(|_| StreamError::NotUnsignedInt32 { value })
    }

    /// Narrows to `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::WideOverflow`] if the high half is non-zero.
    pub const fn to_unsigned_int32(self) -> StreamResult<u32> {
        if self.high() != 0 {
            return Err(StreamError::WideOverflow { value: self.0 });
        }
        Ok(self.low())
    }
}

impl From<u64> for WideInt {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<u32> for WideInt {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl From<WideInt> for u64 {
    fn from(value: WideInt) -> Self {
        value.0
    }
}
