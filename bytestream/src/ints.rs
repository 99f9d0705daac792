//! Reversible integer transforms used ahead of varint coding.
//!
//! Zigzag maps signed values onto unsigned ones so that small magnitudes stay
//! short on the wire. Interleaving merges two 32-bit coordinates into one
//! 64-bit value so a pair of partially filled varint bytes collapses into one.

use crate::wide::WideInt;

/// Zigzag-encodes a signed 32-bit value: `0, -1, 1, -2, ...` become
/// `0, 1, 2, 3, ...`.
#[must_use]
pub const fn encode_zigzag32(n: i32) -> u32 {
    // The right shift is arithmetic.
    ((n << 1) ^ (n >> 31)) as u32
}

/// Inverse of [`encode_zigzag32`].
#[must_use]
pub const fn decode_zigzag32(n: u32) -> i32 {
    ((n >> 1) as i32) ^ -((n & 1) as i32)
}

/// Moves bit `k` of `bits` to bit `2k`, leaving the odd bits clear.
const fn insert_blank_bits(bits: u32) -> u64 {
    let mut v = bits as u64;
    v = (v | (v << 16)) & 0x0000_FFFF_0000_FFFF;
    v = (v | (v << 8)) & 0x00FF_00FF_00FF_00FF;
    v = (v | (v << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    v = (v | (v << 2)) & 0x3333_3333_3333_3333;
    v = (v | (v << 1)) & 0x5555_5555_5555_5555;
    v
}

/// Gathers the even bits of `bits` back into a contiguous 32-bit value.
const fn remove_blank_bits(bits: u64) -> u32 {
    let mut v = bits & 0x5555_5555_5555_5555;
    v = (v | (v >> 1)) & 0x3333_3333_3333_3333;
    v = (v | (v >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    v = (v | (v >> 4)) & 0x00FF_00FF_00FF_00FF;
    v = (v | (v >> 8)) & 0x0000_FFFF_0000_FFFF;
    v = (v | (v >> 16)) & 0x0000_0000_FFFF_FFFF;
    v as u32
}

/// Interleaves two 32-bit values: bit `2k` of the result is bit `k` of `a`
/// and bit `2k + 1` is bit `k` of `b`.
#[must_use]
pub const fn interleave_bits(a: u32, b: u32) -> WideInt {
    WideInt::new(insert_blank_bits(a) | (insert_blank_bits(b) << 1))
}

/// Recovers the first operand of [`interleave_bits`].
#[must_use]
pub const fn deinterleave_bits1(bits: WideInt) -> u32 {
    remove_blank_bits(bits.raw())
}

/// Recovers the second operand of [`interleave_bits`].
#[must_use]
pub const fn deinterleave_bits2(bits: WideInt) -> u32 {
    remove_blank_bits(bits.raw() >> 1)
}
