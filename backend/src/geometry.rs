use shared::GeoPoint;

use crate::angles::{degrees_to_radians, radians_to_degrees};

/// Mean Earth radius. Spherical approximation, no ellipsoid correction.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Half versed sine of an angle in radians.
fn haversin(angle: f64) -> f64 {
    (angle / 2.0).sin().powi(2)
}

/// Great-circle distance between two points in kilometers, on a sphere of
/// the given radius (haversine formula).
pub fn great_circle_distance(src: GeoPoint, trg: GeoPoint, radius_km: f64) -> f64 {
    let delta_lat = degrees_to_radians(trg.lat - src.lat);
    let delta_lon = degrees_to_radians(trg.lon - src.lon);
    let src_lat = degrees_to_radians(src.lat);
    let trg_lat = degrees_to_radians(trg.lat);

    let h = haversin(delta_lat) + src_lat.cos() * trg_lat.cos() * haversin(delta_lon);

    // sqrt can overshoot 1.0 by an ulp for near-antipodal pairs, which
    // would push asin out of its domain. Clamp with a comparison so NaN
    // still propagates (NaN > 1.0 is false).
    let mut root = h.sqrt();
    if root > 1.0 {
        root = 1.0;
    }

    2.0 * radius_km * root.asin()
}

/// Midpoint of the great-circle arc between two points, in degrees.
/// Undefined for exactly antipodal inputs.
pub fn great_circle_mid_point(src: GeoPoint, trg: GeoPoint) -> GeoPoint {
    let src_lat = degrees_to_radians(src.lat);
    let src_lon = degrees_to_radians(src.lon);
    let trg_lat = degrees_to_radians(trg.lat);
    let delta_lon = degrees_to_radians(trg.lon - src.lon);

    let bx = trg_lat.cos() * delta_lon.cos();
    let by = trg_lat.cos() * delta_lon.sin();

    let lat_mid = (src_lat.sin() + trg_lat.sin())
        .atan2(((src_lat.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lon_mid = src_lon + by.atan2(src_lat.cos() + bx);

    GeoPoint::new(radians_to_degrees(lat_mid), radians_to_degrees(lon_mid))
}

/// Total length of a polyline in kilometers, summed chord by chord.
pub fn path_distance_km(path: &[GeoPoint], radius_km: f64) -> f64 {
    path.windows(2)
        .map(|w| great_circle_distance(w[0], w[1], radius_km))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: GeoPoint = GeoPoint {
        lat: 48.8566,
        lon: 2.3522,
    };
    const NEW_YORK: GeoPoint = GeoPoint {
        lat: 40.7128,
        lon: -74.0060,
    };

    #[test]
    fn distance_of_identical_points_is_zero() {
        assert_eq!(great_circle_distance(PARIS, PARIS, EARTH_RADIUS_KM), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = great_circle_distance(PARIS, NEW_YORK, EARTH_RADIUS_KM);
        let ba = great_circle_distance(NEW_YORK, PARIS, EARTH_RADIUS_KM);
        assert!((ab - ba).abs() < 1e-10);
    }

    #[test]
    fn paris_to_new_york_is_about_5837_km() {
        let d = great_circle_distance(PARIS, NEW_YORK, EARTH_RADIUS_KM);
        assert!((d - 5837.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn quarter_of_the_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 90.0);
        let d = great_circle_distance(a, b, EARTH_RADIUS_KM);
        let expected = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_KM;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn distance_scales_with_radius() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 90.0);
        let earth = great_circle_distance(a, b, EARTH_RADIUS_KM);
        let moon = great_circle_distance(a, b, 1_737.4);
        assert!(moon < earth);
        assert!((moon - std::f64::consts::FRAC_PI_2 * 1_737.4).abs() < 1e-6);
    }

    #[test]
    fn nan_input_propagates_to_the_distance() {
        let unset = GeoPoint::UNSET;
        assert!(great_circle_distance(PARIS, unset, EARTH_RADIUS_KM).is_nan());
    }

    #[test]
    fn midpoint_of_equatorial_leg_sits_halfway() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 90.0);
        let mid = great_circle_mid_point(a, b);
        assert!(mid.lat.abs() < 1e-9);
        assert!((mid.lon - 45.0).abs() < 1e-9);
    }

    #[test]
    fn midpoint_splits_the_arc_evenly() {
        let mid = great_circle_mid_point(PARIS, NEW_YORK);
        let total = great_circle_distance(PARIS, NEW_YORK, EARTH_RADIUS_KM);
        let first = great_circle_distance(PARIS, mid, EARTH_RADIUS_KM);
        let second = great_circle_distance(mid, NEW_YORK, EARTH_RADIUS_KM);
        assert!((first - second).abs() < 1e-6);
        assert!((first + second - total).abs() < 1e-6);
    }

    #[test]
    fn path_distance_of_degenerate_inputs_is_zero() {
        assert_eq!(path_distance_km(&[], EARTH_RADIUS_KM), 0.0);
        assert_eq!(path_distance_km(&[PARIS], EARTH_RADIUS_KM), 0.0);
    }

    // Property-based tests using proptest
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn valid_point() -> impl Strategy<Value = GeoPoint> {
            (-90.0..=90.0, -180.0..=180.0).prop_map(|(lat, lon)| GeoPoint { lat, lon })
        }

        proptest! {
            #[test]
            fn prop_distance_non_negative(a in valid_point(), b in valid_point()) {
                prop_assert!(great_circle_distance(a, b, EARTH_RADIUS_KM) >= 0.0);
            }

            #[test]
            fn prop_distance_symmetric(a in valid_point(), b in valid_point()) {
                let ab = great_circle_distance(a, b, EARTH_RADIUS_KM);
                let ba = great_circle_distance(b, a, EARTH_RADIUS_KM);
                prop_assert!((ab - ba).abs() < 1e-10);
            }

            #[test]
            fn prop_distance_of_a_point_to_itself_is_zero(p in valid_point()) {
                prop_assert_eq!(great_circle_distance(p, p, EARTH_RADIUS_KM), 0.0);
            }

            #[test]
            fn prop_distance_bounded_by_antipodal_arc(a in valid_point(), b in valid_point()) {
                let d = great_circle_distance(a, b, EARTH_RADIUS_KM);
                let max = std::f64::consts::PI * EARTH_RADIUS_KM;
                prop_assert!(d <= max + 1e-6);
            }

            #[test]
            fn prop_midpoint_lies_on_the_arc(a in valid_point(), b in valid_point()) {
                let d = great_circle_distance(a, b, EARTH_RADIUS_KM);
                // The midpoint formula degenerates near antipodal pairs and
                // for coincident points there is nothing to check.
                prop_assume!(d > 1.0 && d < 15_000.0);

                let mid = great_circle_mid_point(a, b);
                let first = great_circle_distance(a, mid, EARTH_RADIUS_KM);
                let second = great_circle_distance(mid, b, EARTH_RADIUS_KM);
                prop_assert!((first + second - d).abs() < 1e-3);
            }
        }
    }
}
