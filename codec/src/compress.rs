//! Compressed vertex stream.
//!
//! Layout, in order:
//!
//! 1. face runs (see [`FaceRunCoder`]),
//! 2. one `(pi, qi)` cell index pair per vertex, run through an order-2
//!    [`NthDerivativeCoder`] per axis: the first pair as a truncated
//!    fixed-width interleave, every later pair as a varint of the
//!    interleaved zigzagged deltas,
//! 3. a varint count of off-center vertices followed by `(index, x, y, z)`
//!    for each, restoring points that are not exactly a cell center at the
//!    chosen level.

use bytestream::{
    decode_zigzag32, deinterleave_bits1, deinterleave_bits2, encode_zigzag32, interleave_bits,
    ByteReader, ByteWriter, WideInt,
};
use tracing::trace;

use crate::delta::NthDerivativeCoder;
use crate::error::{CodecError, CodecResult, LimitKind};
use crate::faces::{FaceRun, FaceRunCoder};
use crate::point::Point;
use crate::projection::{
    face_pi_qi_to_xyz, level_if_center, si_ti_to_pi_qi, xyz_to_face_si_ti, MAX_LEVEL,
};

const DERIVATIVE_ENCODING_ORDER: usize = 2;

/// A compressed vertex stream broken into its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedPoints {
    /// Decoded vertices with overrides applied.
    pub points: Vec<Point>,
    /// Face runs as read from the stream.
    pub face_runs: Vec<FaceRun>,
    /// Indices of the vertices restored from raw overrides, in stream order.
    pub off_center: Vec<u32>,
}

/// Number of bytes holding the interleaved first `(pi, qi)` at `level`.
///
/// Cell indices at `level` have `level` significant bits, so the interleave
/// has `2 * level` and the upper bytes are always zero.
const fn first_vertex_bytes(level: u8) -> usize {
    (level as usize + 7) / 8 * 2
}

fn check_level(level: u8) -> CodecResult<()> {
    if level > MAX_LEVEL {
        return Err(CodecError::InvalidLevel { level });
    }
    Ok(())
}

/// Encodes `points` snapped to `level` into `writer`.
///
/// Points that are exact cell centers at `level` cost a few bytes each; every
/// other point is carried as a 24-byte override, so the encoding is lossless
/// for any input.
///
/// # Errors
///
/// Returns [`CodecError::InvalidLevel`] if `level > MAX_LEVEL`, or
/// [`CodecError::LimitsExceeded`] if there are more than `u32::MAX` points.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn encode_points_compressed(
    points: &[Point],
    level: u8,
    writer: &mut ByteWriter,
) -> CodecResult<()> {
    check_level(level)?;
    if u32::try_from(points.len()).is_err() {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::Vertices,
            limit: u32::MAX as usize,
            actual: points.len(),
        });
    }

    let mut faces = FaceRunCoder::new();
    let mut pi_qi = Vec::with_capacity(points.len());
    let mut off_center = Vec::new();
    for (index, &p) in points.iter().enumerate() {
        let fst = xyz_to_face_si_ti(p);
        faces.add_face(fst.face);
        pi_qi.push((
            si_ti_to_pi_qi(fst.si, level),
            si_ti_to_pi_qi(fst.ti, level),
        ));
        if level_if_center(&fst, p) != Some(level) {
            off_center.push(index);
        }
    }

    faces.encode(writer);

    let mut pi_coder = NthDerivativeCoder::new(DERIVATIVE_ENCODING_ORDER)?;
    let mut qi_coder = NthDerivativeCoder::new(DERIVATIVE_ENCODING_ORDER)?;
    for (index, &(pi, qi)) in pi_qi.iter().enumerate() {
        // Cell indices have at most 30 bits, so the casts are lossless.
        let pi = pi_coder.encode(pi as i32);
        let qi = qi_coder.encode(qi as i32);
        if index == 0 {
            let bytes = interleave_bits(pi as u32, qi as u32).to_le_bytes();
            writer.write_bytes(&bytes[..first_vertex_bytes(level)]);
        } else {
            writer.write_varu64(interleave_bits(encode_zigzag32(pi), encode_zigzag32(qi)));
        }
    }

    trace!(
        vertices = points.len(),
        level,
        face_runs = faces.runs().len(),
        off_center = off_center.len(),
        "encoded compressed points"
    );

    writer.write_varu32(off_center.len() as u32);
    for index in off_center {
        writer.write_varu32(index as u32);
        points[index].encode(writer);
    }
    Ok(())
}

/// Decodes `vertices` points written by [`encode_points_compressed`] at
/// `level`.
pub fn decode_points_compressed(
    vertices: usize,
    level: u8,
    reader: &mut ByteReader<'_>,
) -> CodecResult<Vec<Point>> {
    decode_compressed_parts(vertices, level, reader).map(|parts| parts.points)
}

/// Like [`decode_points_compressed`], but also returns the face runs and the
/// off-center indices.
///
/// # Errors
///
/// Fails with [`CodecError::InvalidLevel`] for a level above `MAX_LEVEL`,
/// [`CodecError::InconsistentOffCenterCount`] when the override count exceeds
/// `vertices`, [`CodecError::OffCenterIndexOutOfRange`] for an override past
/// the last vertex, and with stream errors on truncated or malformed input.
#[allow(clippy::cast_possible_wrap)]
pub fn decode_compressed_parts(
    vertices: usize,
    level: u8,
    reader: &mut ByteReader<'_>,
) -> CodecResult<CompressedPoints> {
    check_level(level)?;

    let faces = FaceRunCoder::decode(vertices, reader)?;
    let mut face_iter = faces.faces();

    let mut points = Vec::with_capacity(vertices.min(reader.remaining()));
    let mut pi_coder = NthDerivativeCoder::new(DERIVATIVE_ENCODING_ORDER)?;
    let mut qi_coder = NthDerivativeCoder::new(DERIVATIVE_ENCODING_ORDER)?;
    for index in 0..vertices {
        let (pi, qi) = if index == 0 {
            let mut bytes = [0u8; 8];
            let len = first_vertex_bytes(level);
            bytes[..len].copy_from_slice(reader.read_bytes(len)?);
            let interleaved = WideInt::from_le_bytes(bytes);
            (
                pi_coder.decode(deinterleave_bits1(interleaved) as i32),
                qi_coder.decode(deinterleave_bits2(interleaved) as i32),
            )
        } else {
            let interleaved = reader.read_varu64()?;
            (
                pi_coder.decode(decode_zigzag32(deinterleave_bits1(interleaved))),
                qi_coder.decode(decode_zigzag32(deinterleave_bits2(interleaved))),
            )
        };
        let face = face_iter.next_face()?;
        points.push(face_pi_qi_to_xyz(face, pi, qi, level));
    }

    let count = reader.read_varu32()?;
    if count as usize > vertices {
        return Err(CodecError::InconsistentOffCenterCount {
            off_center: count,
            vertices,
        });
    }
    let mut off_center = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let index = reader.read_varu32()?;
        let p = Point::decode(reader)?;
        let slot = points
            .get_mut(index as usize)
            .ok_or(CodecError::OffCenterIndexOutOfRange { index, vertices })?;
        *slot = p;
        off_center.push(index);
    }

    trace!(
        vertices,
        level,
        face_runs = faces.runs().len(),
        off_center = off_center.len(),
        "decoded compressed points"
    );

    Ok(CompressedPoints {
        points,
        face_runs: faces.runs().to_vec(),
        off_center,
    })
}
