//! Introspection and conversion tools for encoded polylines.
//!
//! This crate provides utilities for inspecting and producing encoded
//! polylines:
//!
//! - Break an encoded polyline into its envelope and stream parts
//! - Convert between JSON `[lat, lng]` lists and the binary or text forms
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

pub mod logging;

use anyhow::{Context, Result};
use bytestream::ByteReader;
use codec::{
    best_snap_level, decode_compressed_parts, decode_polyline_with_limits, CodecError,
    CodecLimits, CodecResult, FaceRun, LatLng, LimitKind, Point, COMPRESSED_ENCODING_VERSION,
    LOSSLESS_ENCODING_VERSION, MAX_LEVEL,
};
use serde::Serialize;

/// Byte size of a lossless envelope of `vertices` points.
#[must_use]
pub const fn lossless_size(vertices: usize) -> usize {
    5 + 24 * vertices
}

/// Structure and size of one encoded polyline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub version: u8,
    /// Snap level of a compressed envelope.
    pub level: Option<u8>,
    pub vertices: usize,
    /// Face runs of a compressed envelope; empty for a lossless one.
    pub face_runs: Vec<FaceRun>,
    /// Vertices stored as raw overrides.
    pub off_center: usize,
    /// Bytes consumed by the envelope.
    pub byte_len: usize,
    /// Bytes after the envelope, ignored by decoders.
    pub trailing_bytes: usize,
    /// Size of the same vertices in lossless form.
    pub lossless_len: usize,
    /// Level the encoder would pick for the decoded vertices.
    pub best_snap_level: Option<u8>,
}

/// Parses an encoded polyline into an [`InspectReport`].
pub fn inspect_polyline(bytes: &[u8], limits: &CodecLimits) -> CodecResult<InspectReport> {
    let mut reader = ByteReader::new(bytes);
    let version = reader.read_u8()?;
    let (level, points, face_runs, off_center) = match version {
        COMPRESSED_ENCODING_VERSION => {
            let level = reader.read_u8()?;
            if level > MAX_LEVEL {
                return Err(CodecError::InvalidLevel { level });
            }
            let count = reader.read_varu32()? as usize;
            if count > limits.max_vertices {
                return Err(CodecError::LimitsExceeded {
                    kind: LimitKind::Vertices,
                    limit: limits.max_vertices,
                    actual: count,
                });
            }
            let parts = decode_compressed_parts(count, level, &mut reader)?;
            (
                Some(level),
                parts.points,
                parts.face_runs,
                parts.off_center.len(),
            )
        }
        LOSSLESS_ENCODING_VERSION => {
            let points = decode_polyline_with_limits(bytes, limits)?;
            reader.read_bytes(lossless_size(points.len()) - 1)?;
            let off_center = points.len();
            (None, points, Vec::new(), off_center)
        }
        found => return Err(CodecError::UnsupportedVersion { found }),
    };

    let byte_len = bytes.len() - reader.remaining();
    Ok(InspectReport {
        version,
        level,
        vertices: points.len(),
        face_runs,
        off_center,
        byte_len,
        trailing_bytes: reader.remaining(),
        lossless_len: lossless_size(points.len()),
        best_snap_level: best_snap_level(&points),
    })
}

/// Parses a JSON array of `[lat, lng]` degree pairs.
pub fn latlngs_from_json(json: &str) -> Result<Vec<LatLng>> {
    let pairs: Vec<[f64; 2]> = serde_json::from_str(json).context("parse [lat, lng] json")?;
    Ok(pairs
        .into_iter()
        .map(|[lat, lng]| LatLng::from_degrees(lat, lng))
        .collect())
}

/// Formats lat/lng values as a JSON array of `[lat, lng]` degree pairs.
pub fn latlngs_to_json(latlngs: &[LatLng]) -> Result<String> {
    let pairs: Vec<[f64; 2]> = latlngs
        .iter()
        .map(|ll| [ll.lat_degrees(), ll.lng_degrees()])
        .collect();
    serde_json::to_string_pretty(&pairs).context("serialize json")
}

/// Converts decoded points to lat/lng.
#[must_use]
pub fn points_to_latlngs(points: &[Point]) -> Vec<LatLng> {
    points.iter().copied().map(LatLng::from_point).collect()
}
