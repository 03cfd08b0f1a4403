use serde::{Deserialize, Serialize};

/// A position on the sphere, in degrees.
///
/// Latitude and longitude default to NaN so a freshly allocated point can
/// mark a subdivision slot that has not been computed yet. A point only
/// counts as part of a finished path once both fields are finite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Placeholder value for slots whose position is not yet known.
    pub const UNSET: Self = Self {
        lat: f64::NAN,
        lon: f64::NAN,
    };

    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True while the point still carries the placeholder sentinel.
    pub fn is_unset(self) -> bool {
        self.lat.is_nan() || self.lon.is_nan()
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}
