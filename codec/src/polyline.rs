//! Polyline envelope: version byte, then either raw vertices or the
//! compressed vertex stream.

use bytestream::{ByteReader, ByteWriter};
use tracing::debug;

use crate::compress::{decode_points_compressed, encode_points_compressed};
use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;
use crate::point::Point;
use crate::projection::{level_if_center, xyz_to_face_si_ti, MAX_LEVEL};

/// Envelope version of the raw-double encoding.
pub const LOSSLESS_ENCODING_VERSION: u8 = 1;

/// Envelope version of the snapped, compressed encoding.
pub const COMPRESSED_ENCODING_VERSION: u8 = 2;

/// A sequence of vertices connected by geodesic edges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    vertices: Vec<Point>,
}

impl Polyline {
    #[must_use]
    pub const fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// See [`best_snap_level`].
    #[must_use]
    pub fn best_snap_level(&self) -> Option<u8> {
        best_snap_level(&self.vertices)
    }

    /// See [`encode_polyline`].
    pub fn encode_compact(&self) -> CodecResult<Vec<u8>> {
        encode_polyline(&self.vertices)
    }

    /// See [`decode_polyline`].
    pub fn decode(bytes: &[u8]) -> CodecResult<Self> {
        decode_polyline(bytes).map(Self::new)
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

/// Returns the level at which most vertices are exactly cell centers.
///
/// Ties go to the lowest level. Returns `None` if no vertex is a center at
/// any level; an empty slice yields `Some(0)`.
#[must_use]
pub fn best_snap_level(vertices: &[Point]) -> Option<u8> {
    let mut histogram = [0usize; MAX_LEVEL as usize + 1];
    for &p in vertices {
        if let Some(level) = level_if_center(&xyz_to_face_si_ti(p), p) {
            histogram[usize::from(level)] += 1;
        }
    }
    let mut snap_level = 0;
    for (level, &count) in histogram.iter().enumerate().skip(1) {
        if count > histogram[snap_level] {
            snap_level = level;
        }
    }
    if histogram[snap_level] == 0 && !vertices.is_empty() {
        return None;
    }
    u8::try_from(snap_level).ok()
}

fn vertex_count_u32(vertices: &[Point]) -> CodecResult<u32> {
    u32::try_from(vertices.len()).map_err(|_| CodecError::LimitsExceeded {
        kind: LimitKind::Vertices,
        limit: u32::MAX as usize,
        actual: vertices.len(),
    })
}

/// Encodes vertices into the smallest lossless representation.
///
/// The compressed form is used at the best snap level when at least one
/// vertex is a cell center (and always for an empty polyline, at
/// `MAX_LEVEL`); otherwise vertices are written as raw doubles.
pub fn encode_polyline(vertices: &[Point]) -> CodecResult<Vec<u8>> {
    let level = if vertices.is_empty() {
        Some(MAX_LEVEL)
    } else {
        best_snap_level(vertices)
    };
    match level {
        Some(level) => encode_polyline_compressed(vertices, level),
        None => encode_polyline_lossless(vertices),
    }
}

/// Encodes vertices as raw doubles (version 1).
pub fn encode_polyline_lossless(vertices: &[Point]) -> CodecResult<Vec<u8>> {
    let count = vertex_count_u32(vertices)?;
    debug!(vertices = count, "encoding polyline losslessly");
    let mut writer = ByteWriter::with_capacity(5 + vertices.len() * 24);
    writer.write_u8(LOSSLESS_ENCODING_VERSION);
    writer.write_u32_le(count);
    for &p in vertices {
        p.encode(&mut writer);
    }
    Ok(writer.finish())
}

/// Encodes vertices in compressed form snapped to `level` (version 2).
///
/// Vertices that are not centers at `level` are still preserved exactly.
pub fn encode_polyline_compressed(vertices: &[Point], level: u8) -> CodecResult<Vec<u8>> {
    if level > MAX_LEVEL {
        return Err(CodecError::InvalidLevel { level });
    }
    let count = vertex_count_u32(vertices)?;
    debug!(vertices = count, level, "encoding compressed polyline");
    let mut writer = ByteWriter::new();
    writer.write_u8(COMPRESSED_ENCODING_VERSION);
    writer.write_u8(level);
    writer.write_varu32(count);
    encode_points_compressed(vertices, level, &mut writer)?;
    Ok(writer.finish())
}

/// Decodes a polyline with [`CodecLimits::default`].
pub fn decode_polyline(bytes: &[u8]) -> CodecResult<Vec<Point>> {
    decode_polyline_with_limits(bytes, &CodecLimits::default())
}

/// Decodes a polyline written by any of the encoders.
///
/// Trailing bytes after the envelope are ignored.
///
/// # Errors
///
/// Fails with [`CodecError::UnsupportedVersion`] for an unknown version
/// byte, [`CodecError::InvalidLevel`] for a compressed level above
/// `MAX_LEVEL`, [`CodecError::LimitsExceeded`] when the vertex count is over
/// `limits`, and with any error of the compressed vertex stream.
pub fn decode_polyline_with_limits(bytes: &[u8], limits: &CodecLimits) -> CodecResult<Vec<Point>> {
    let mut reader = ByteReader::new(bytes);
    let version = reader.read_u8()?;
    match version {
        LOSSLESS_ENCODING_VERSION => {
            let count = check_vertex_limit(reader.read_u32_le()?, limits)?;
            debug!(vertices = count, "decoding lossless polyline");
            let mut vertices = Vec::with_capacity(count.min(reader.remaining() / 24));
            for _ in 0..count {
                vertices.push(Point::decode(&mut reader)?);
            }
            Ok(vertices)
        }
        COMPRESSED_ENCODING_VERSION => {
            let level = reader.read_u8()?;
            if level > MAX_LEVEL {
                return Err(CodecError::InvalidLevel { level });
            }
            let count = check_vertex_limit(reader.read_varu32()?, limits)?;
            debug!(vertices = count, level, "decoding compressed polyline");
            decode_points_compressed(count, level, &mut reader)
        }
        found => Err(CodecError::UnsupportedVersion { found }),
    }
}

pub(crate) fn check_vertex_limit(count: u32, limits: &CodecLimits) -> CodecResult<usize> {
    let count = count as usize;
    if count > limits.max_vertices {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::Vertices,
            limit: limits.max_vertices,
            actual: count,
        });
    }
    Ok(count)
}
