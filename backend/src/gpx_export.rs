use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};

use crate::error::GeodesicError;
use shared::GeoPoint;

/// Serializes the polyline as a single-segment GPX 1.1 track.
pub fn write_path_as_gpx(path: &[GeoPoint], writer: impl Write) -> Result<(), GeodesicError> {
    let mut gpx = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some("orthodromie".into()),
        ..Default::default()
    };
    let mut track = Track {
        name: Some("orthodromie".into()),
        ..Default::default()
    };

    let mut segment = TrackSegment::new();
    for waypoint in path.iter().map(to_waypoint) {
        segment.points.push(waypoint);
    }
    track.segments.push(segment);
    gpx.tracks.push(track);

    gpx::write(&gpx, writer)?;
    Ok(())
}

/// GPX document encoded as base64, for embedding in a JSON response.
pub fn encode_path_as_gpx(path: &[GeoPoint]) -> Result<String, GeodesicError> {
    let mut buffer = Vec::new();
    write_path_as_gpx(path, &mut buffer)?;
    Ok(BASE64.encode(buffer))
}

fn to_waypoint(point: &GeoPoint) -> Waypoint {
    Waypoint::new(Point::new(point.lon, point.lat))
}
