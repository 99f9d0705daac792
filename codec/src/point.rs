//! Points on the unit sphere as 3D vectors.

use bytestream::{ByteReader, ByteWriter};

use crate::error::CodecResult;

/// A point on the unit sphere represented as a 3D vector.
///
/// Points are usually unit length, but projection helpers accept any
/// non-zero direction. Equality is exact and component-wise, so `-0.0` and
/// `0.0` compare equal while `NaN` never does.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Creates a point from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the point scaled to unit length.
    ///
    /// The zero vector is returned unchanged.
    #[must_use]
    pub fn normalize(self) -> Self {
        let Self { x, y, z } = self;
        let mut norm = (x * x + y * y + z * z).sqrt();
        if norm != 0.0 {
            norm = 1.0 / norm;
        }
        Self::new(x * norm, y * norm, z * norm)
    }

    /// Returns the index (0, 1 or 2 for x, y or z) of the component with the
    /// largest absolute value. Ties go to the later axis.
    #[must_use]
    pub fn largest_abs_component(self) -> usize {
        let abs_x = self.x.abs();
        let abs_y = self.y.abs();
        let abs_z = self.z.abs();
        if abs_x > abs_y {
            if abs_x > abs_z {
                0
            } else {
                2
            }
        } else if abs_y > abs_z {
            1
        } else {
            2
        }
    }

    /// Writes the three raw components as little-endian doubles.
    pub fn encode(self, writer: &mut ByteWriter) {
        writer.write_f64_le(self.x);
        writer.write_f64_le(self.y);
        writer.write_f64_le(self.z);
    }

    /// Reads a point written by [`encode`](Self::encode).
    pub fn decode(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        let x = reader.read_f64_le()?;
        let y = reader.read_f64_le()?;
        let z = reader.read_f64_le()?;
        Ok(Self::new(x, y, z))
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point> for [f64; 3] {
    fn from(p: Point) -> Self {
        [p.x, p.y, p.z]
    }
}
