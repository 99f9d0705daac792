//! Cube-face projection between unit vectors and integer face grids.
//!
//! The sphere is covered by the six faces of a cube. A direction vector is
//! assigned to the face its largest component points at, projected to face
//! coordinates `(u, v)` in `[-1, 1]`, warped to `(s, t)` in `[0, 1]` by a
//! quadratic that evens out cell areas, and finally quantized to the
//! `(si, ti)` grid of `MAX_SITI + 1` lines per axis.
//!
//! Face numbering, the per-face sign conventions and the warp are all part of
//! the wire format.

use crate::point::Point;

/// Number of cube faces.
pub const NUM_FACES: u8 = 6;

/// Finest cell level of the hierarchy.
pub const MAX_LEVEL: u8 = 30;

/// Maximum value of an si- or ti-coordinate; valid values are
/// `0..=MAX_SITI`.
pub const MAX_SITI: u32 = 1 << (MAX_LEVEL + 1);

/// A point discretized onto the integer grid of one cube face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceSiTi {
    pub face: u8,
    pub si: u32,
    pub ti: u32,
}

/// Converts an s- or t-value to the corresponding u- or v-value.
#[must_use]
pub fn st_to_uv(s: f64) -> f64 {
    if s >= 0.5 {
        (1.0 / 3.0) * (4.0 * s * s - 1.0)
    } else {
        (1.0 / 3.0) * (1.0 - 4.0 * (1.0 - s) * (1.0 - s))
    }
}

/// Inverse of [`st_to_uv`].
#[must_use]
pub fn uv_to_st(u: f64) -> f64 {
    if u >= 0.0 {
        0.5 * (1.0 + 3.0 * u).sqrt()
    } else {
        1.0 - 0.5 * (1.0 - 3.0 * u).sqrt()
    }
}

/// Returns the s- or t-value of an si- or ti-coordinate.
#[must_use]
pub fn si_ti_to_st(si: u32) -> f64 {
    (1.0 / f64::from(MAX_SITI)) * f64::from(si)
}

/// Returns the si- or ti-coordinate nearest to `s`.
///
/// Values outside `[0, 1]` saturate at the ends of the grid and `NaN` maps
/// to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn st_to_si_ti(s: f64) -> u32 {
    (s * f64::from(MAX_SITI)).round() as u32
}

/// Converts `(face, u, v)` to a direction vector, not necessarily unit length.
///
/// Face indices above 5 are treated as face 5.
#[must_use]
pub fn face_uv_to_xyz(face: u8, u: f64, v: f64) -> Point {
    match face {
        0 => Point::new(1.0, u, v),
        1 => Point::new(-u, 1.0, v),
        2 => Point::new(-u, -v, 1.0),
        3 => Point::new(-1.0, -v, -u),
        4 => Point::new(v, -1.0, -u),
        _ => Point::new(v, u, -1.0),
    }
}

/// Projects `p` onto the given face, returning `(u, v)`.
///
/// The result is only meaningful when `face` is the face containing `p`.
#[must_use]
pub fn face_xyz_to_uv(face: u8, p: Point) -> (f64, f64) {
    let Point { x, y, z } = p;
    match face {
        0 => (y / x, z / x),
        1 => (-x / y, z / y),
        2 => (-x / z, -y / z),
        3 => (z / x, y / x),
        4 => (z / y, -x / y),
        _ => (-y / z, -x / z),
    }
}

/// Returns the face containing the direction `p`.
///
/// Points on a boundary between faces get an arbitrary but repeatable face.
#[must_use]
pub fn xyz_to_face(p: Point) -> u8 {
    match p.largest_abs_component() {
        0 => {
            if p.x < 0.0 {
                3
            } else {
                0
            }
        }
        1 => {
            if p.y < 0.0 {
                4
            } else {
                1
            }
        }
        _ => {
            if p.z < 0.0 {
                5
            } else {
                2
            }
        }
    }
}

/// Converts `(face, si, ti)` to a direction vector, not necessarily unit
/// length.
#[must_use]
pub fn face_si_ti_to_xyz(face: u8, si: u32, ti: u32) -> Point {
    let u = st_to_uv(si_ti_to_st(si));
    let v = st_to_uv(si_ti_to_st(ti));
    face_uv_to_xyz(face, u, v)
}

/// Converts a direction vector, not necessarily unit length, to
/// `(face, si, ti)`.
#[must_use]
pub fn xyz_to_face_si_ti(p: Point) -> FaceSiTi {
    let face = xyz_to_face(p);
    let (u, v) = face_xyz_to_uv(face, p);
    FaceSiTi {
        face,
        si: st_to_si_ti(uv_to_st(u)),
        ti: st_to_si_ti(uv_to_st(v)),
    }
}

/// Returns the level implied by the trailing zero bits of a grid coordinate.
///
/// 0 and `MAX_SITI` are not centers at any level and yield a negative value.
#[allow(clippy::cast_possible_wrap)]
fn si_ti_to_level(si_ti: u32) -> i32 {
    i32::from(MAX_LEVEL) - si_ti.trailing_zeros().min(31) as i32
}

/// Returns the cell level if `p` is exactly the center of a cell, `None`
/// otherwise.
///
/// The comparison against the reconstructed center is exact: projecting a
/// center back through `xyz_to_face_si_ti` is not idempotent in floating
/// point, but the center is computed exactly the way an encoder computed it.
#[must_use]
pub fn level_if_center(fst: &FaceSiTi, p: Point) -> Option<u8> {
    let level = si_ti_to_level(fst.si);
    if level < 0 || level != si_ti_to_level(fst.ti) {
        return None;
    }
    let center = face_si_ti_to_xyz(fst.face, fst.si, fst.ti).normalize();
    if p == center {
        u8::try_from(level).ok()
    } else {
        None
    }
}

/// Returns the center of cell `(pi, qi)` at `level` on `face`, as a unit
/// vector.
#[must_use]
pub fn face_pi_qi_to_xyz(face: u8, pi: i32, qi: i32, level: u8) -> Point {
    face_uv_to_xyz(
        face,
        st_to_uv(pi_qi_to_st(pi, level)),
        st_to_uv(pi_qi_to_st(qi, level)),
    )
    .normalize()
}

/// Quantizes an si- or ti-coordinate to the cell index at `level`.
#[must_use]
pub fn si_ti_to_pi_qi(si: u32, level: u8) -> u32 {
    si.min(MAX_SITI - 1) >> (MAX_LEVEL + 1 - level)
}

/// Returns the s- or t-value of the center of cell index `pi` at `level`.
fn pi_qi_to_st(pi: i32, level: u8) -> f64 {
    (f64::from(pi) + 0.5) / f64::from(1u32 << level)
}
