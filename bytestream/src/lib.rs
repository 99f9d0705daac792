//! Little-endian byte stream and integer coding primitives for the s2poly codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for fixed-width and
//! varint encoding, the [`WideInt`] 64-bit value used on the varint and
//! interleave paths, and the zigzag and bit-interleave transforms.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about points, faces, or polylines.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter, WideInt};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u8(2);
//! writer.write_varu32(300);
//! writer.write_varu64(WideInt::new(1 << 40));
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u8().unwrap(), 2);
//! assert_eq!(reader.read_varu32().unwrap(), 300);
//! assert_eq!(reader.read_varu64().unwrap().raw(), 1 << 40);
//! ```

mod error;
mod ints;
mod reader;
mod wide;
mod writer;

pub use error::{StreamError, StreamResult};
pub use ints::{
    decode_zigzag32, deinterleave_bits1, deinterleave_bits2, encode_zigzag32, interleave_bits,
};
pub use reader::{ByteReader, MAX_VARINT64_BYTES};
pub use wide::WideInt;
pub use writer::ByteWriter;
