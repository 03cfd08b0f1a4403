use serde::{Deserialize, Serialize};
use shared::GeoPoint;

use crate::subdivision::DEFAULT_SEGMENT_LENGTH_KM;

#[derive(Debug, Serialize, Deserialize)]
pub struct PathRequest {
    /// Route skeleton in traversal order.
    pub waypoints: Vec<GeoPoint>,
    /// Maximum chord length the returned polyline should honor.
    #[serde(default = "default_segment_length")]
    pub segment_length_km: f64,
}

fn default_segment_length() -> f64 {
    DEFAULT_SEGMENT_LENGTH_KM
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PathResponse {
    pub path: Vec<GeoPoint>,
    pub distance_km: f64,
    pub point_count: usize,
    pub gpx_base64: String,
}
