//! Latitude/longitude conversion for polyline vertices.

use crate::point::Point;

/// A point on the sphere as latitude and longitude, stored in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    /// Creates a `LatLng` from radians.
    #[must_use]
    pub const fn from_radians(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a `LatLng` from degrees.
    #[must_use]
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self::from_radians(
            lat * std::f64::consts::PI / 180.0,
            lng * std::f64::consts::PI / 180.0,
        )
    }

    /// Converts a point, not necessarily unit length, to a `LatLng`.
    #[must_use]
    pub fn from_point(p: Point) -> Self {
        // Adding 0.0 folds -0.0 into 0.0 so that equal points convert to
        // identical values. atan2(0, 0) is 0.
        let lat = (p.z + 0.0).atan2((p.x * p.x + p.y * p.y).sqrt());
        let lng = (p.y + 0.0).atan2(p.x + 0.0);
        Self { lat, lng }
    }

    /// Returns the equivalent unit-length point.
    #[must_use]
    pub fn to_point(self) -> Point {
        let cos_lat = self.lat.cos();
        Point::new(
            self.lng.cos() * cos_lat,
            self.lng.sin() * cos_lat,
            self.lat.sin(),
        )
    }

    #[must_use]
    pub const fn lat_radians(self) -> f64 {
        self.lat
    }

    #[must_use]
    pub const fn lng_radians(self) -> f64 {
        self.lng
    }

    #[must_use]
    pub fn lat_degrees(self) -> f64 {
        180.0 / std::f64::consts::PI * self.lat
    }

    #[must_use]
    pub fn lng_degrees(self) -> f64 {
        180.0 / std::f64::consts::PI * self.lng
    }
}

impl From<Point> for LatLng {
    fn from(p: Point) -> Self {
        Self::from_point(p)
    }
}

impl From<LatLng> for Point {
    fn from(ll: LatLng) -> Self {
        ll.to_point()
    }
}
