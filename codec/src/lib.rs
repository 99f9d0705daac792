//! Compact binary encoding of S2 polylines.
//!
//! Vertices are unit-sphere points. The encoder picks the cell level at which
//! most vertices are exact cell centers and stores them as delta-coded cell
//! indices; anything that does not fit is carried verbatim. Points that are
//! not centers at any level fall back to raw doubles. Both forms are
//! lossless and byte-compatible with the reference S2 encoding.
//!
//! # Example
//!
//! ```
//! use codec::{decode_polyline, encode_polyline, LatLng, Point};
//!
//! let points: Vec<Point> = [(37.77, -122.42), (40.71, -74.01)]
//!     .iter()
//!     .map(|&(lat, lng)| LatLng::from_degrees(lat, lng).to_point())
//!     .collect();
//! let bytes = encode_polyline(&points).unwrap();
//! assert_eq!(decode_polyline(&bytes).unwrap(), points);
//! ```
//!
//! # Design Principles
//!
//! - **Lossless** - Decoded points equal the encoded points component-wise.
//! - **Bounded** - Decoding never allocates past [`CodecLimits`] or the input size.
//! - **Deterministic** - Same inputs produce same outputs.

mod compress;
mod delta;
mod error;
mod faces;
mod latlng;
mod limits;
mod point;
mod polyline;
pub mod projection;
mod text;

pub use compress::{
    decode_compressed_parts, decode_points_compressed, encode_points_compressed,
    CompressedPoints,
};
pub use delta::NthDerivativeCoder;
pub use error::{CodecError, CodecResult, LimitKind};
pub use faces::{FaceIter, FaceRun, FaceRunCoder};
pub use latlng::LatLng;
pub use limits::CodecLimits;
pub use point::Point;
pub use polyline::{
    best_snap_level, decode_polyline, decode_polyline_with_limits, encode_polyline,
    encode_polyline_compressed, encode_polyline_lossless, Polyline, COMPRESSED_ENCODING_VERSION,
    LOSSLESS_ENCODING_VERSION,
};
pub use projection::{MAX_LEVEL, NUM_FACES};
pub use text::{decode_string_to_latlngs, encode_latlngs_to_string};
