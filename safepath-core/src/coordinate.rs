//! Validated WGS84 coordinates.
//!
//! [`Coordinate`] is the only way locations enter the engine. Values outside
//! the valid latitude/longitude ranges are rejected rather than clamped.

use geo::{Distance, Haversine, Point};
use thiserror::Error;

/// Inclusive latitude bound in degrees.
pub const MAX_LATITUDE: f64 = 90.0;
/// Inclusive longitude bound in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

const METRES_PER_KILOMETRE: f64 = 1000.0;

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
/// ```
/// use safepath_core::Coordinate;
///
/// # fn main() -> Result<(), safepath_core::InvalidCoordinate> {
/// let india_gate = Coordinate::new(28.6129, 77.2295)?;
/// assert_eq!(india_gate.latitude(), 28.6129);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Error returned when a latitude or longitude is out of range or not finite.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("coordinate ({latitude}, {longitude}) is outside the valid range")]
pub struct InvalidCoordinate {
    /// Rejected latitude.
    pub latitude: f64,
    /// Rejected longitude.
    pub longitude: f64,
}

impl Coordinate {
    /// Validate and construct a [`Coordinate`].
    ///
    /// # Errors
    /// Returns [`InvalidCoordinate`] when the latitude is outside
    /// `[-90, 90]`, the longitude is outside `[-180, 180]`, or either value
    /// is `NaN`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        let lat_ok = (-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude);
        let lng_ok = (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude);
        if lat_ok && lng_ok {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Convert into a `geo` point (`x = longitude`, `y = latitude`).
    #[must_use]
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Great-circle distance to `other` in kilometres.
    ///
    /// # Examples
    /// ```
    /// use safepath_core::Coordinate;
    ///
    /// # fn main() -> Result<(), safepath_core::InvalidCoordinate> {
    /// let a = Coordinate::new(0.0, 0.0)?;
    /// let b = Coordinate::new(0.0, 1.0)?;
    /// let km = a.distance_km(&b);
    /// assert!((km - 111.2).abs() < 0.1);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        Haversine.distance(self.to_point(), other.to_point()) / METRES_PER_KILOMETRE
    }

    /// Interpolate linearly towards `other` in raw degree space.
    ///
    /// This is not a geodesic interpolation. `fraction` is expected in
    /// `0.0..=1.0`. A fraction of exactly `0.0` or `1.0` returns `self` or
    /// `other` bit for bit.
    #[must_use]
    pub fn lerp(&self, other: &Self, fraction: f64) -> Self {
        if self == other {
            return *self;
        }
        let keep = 1.0 - fraction;
        let latitude = self.latitude * keep + other.latitude * fraction;
        let longitude = self.longitude * keep + other.longitude * fraction;
        Self {
            latitude: latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE),
            longitude: longitude.clamp(-MAX_LONGITUDE, MAX_LONGITUDE),
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(latitude, longitude)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    fn accepts_boundary_values(#[case] lat: f64, #[case] lng: f64) {
        assert!(Coordinate::new(lat, lng).is_ok());
    }

    #[rstest]
    #[case(90.000_001, 0.0)]
    #[case(-91.0, 0.0)]
    #[case(0.0, 180.5)]
    #[case(0.0, -181.0)]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    fn rejects_out_of_range_values(#[case] lat: f64, #[case] lng: f64) {
        let err = Coordinate::new(lat, lng).expect_err("coordinate should be rejected");
        assert!(err.to_string().contains("outside the valid range"));
    }

    #[rstest]
    fn distance_to_self_is_zero() {
        let here = Coordinate::new(28.6139, 77.209).expect("valid coordinate");
        assert!(here.distance_km(&here).abs() < 1e-9);
    }

    #[rstest]
    fn lerp_hits_both_endpoints() {
        let start = Coordinate::new(10.0, 20.0).expect("valid start");
        let end = Coordinate::new(12.0, 18.0).expect("valid end");
        assert_eq!(start.lerp(&end, 0.0), start);
        assert_eq!(start.lerp(&end, 1.0), end);
        let mid = start.lerp(&end, 0.5);
        assert!((mid.latitude() - 11.0).abs() < 1e-12);
        assert!((mid.longitude() - 19.0).abs() < 1e-12);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_validates_ranges() {
        let ok: Coordinate =
            serde_json::from_str(r#"{"latitude":1.5,"longitude":2.5}"#).expect("valid json");
        assert_eq!(ok.longitude(), 2.5);
        let bad = serde_json::from_str::<Coordinate>(r#"{"latitude":100.0,"longitude":0.0}"#);
        assert!(bad.is_err());
    }
}
