use shared::GeoPoint;

use crate::error::GeodesicError;
use crate::geometry::great_circle_distance;

/// How much the effective segment length is reduced per retry while
/// hunting for an even midpoint count.
const PARITY_STEP_KM: f64 = 25.0;

/// Sizing decision for a single leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegPlan {
    /// The leg is rendered as one straight chord, no subdivision.
    Unsplit,
    /// The leg gets `mid_points + 1` slots, filled by bisection until every
    /// chord is at most `effective_length_km`.
    Split {
        mid_points: usize,
        effective_length_km: f64,
    },
}

/// Decides how many subdivision slots a leg needs and which chord
/// tolerance to subdivide against.
///
/// Legs no longer than the base length stay unsplit, as do legs whose
/// midpoint count comes out as exactly one (a lone midpoint produces a
/// degenerate split, so such legs are drawn straight). An odd midpoint
/// count is rejected because bisection only lands on integer slot indices
/// when the count is even; the effective length is reduced in fixed steps
/// until the count turns even.
///
/// A leg whose distance is not finite carries unset waypoints; it passes
/// through unsplit so the sentinel reaches the caller untouched.
pub fn plan_leg(
    start: GeoPoint,
    end: GeoPoint,
    base_segment_length_km: f64,
    radius_km: f64,
) -> Result<LegPlan, GeodesicError> {
    let distance_km = great_circle_distance(start, end, radius_km);

    if !distance_km.is_finite() || distance_km <= base_segment_length_km {
        return Ok(LegPlan::Unsplit);
    }

    let mut effective_length_km = base_segment_length_km;
    loop {
        if effective_length_km <= 0.0 {
            return Err(GeodesicError::SizingFailure {
                distance_km,
                effective_km: effective_length_km,
            });
        }

        let mid_points = (distance_km / effective_length_km) as usize;
        if mid_points == 1 {
            return Ok(LegPlan::Unsplit);
        }
        if mid_points % 2 != 0 {
            effective_length_km -= PARITY_STEP_KM;
            continue;
        }

        return Ok(LegPlan::Split {
            mid_points,
            effective_length_km,
        });
    }
}
