use rayon::prelude::*;
use shared::GeoPoint;

use crate::error::GeodesicError;
use crate::geometry::{great_circle_distance, great_circle_mid_point, EARTH_RADIUS_KM};
use crate::sizing::{plan_leg, LegPlan};

/// Default chord tolerance. The larger the value, the fewer midpoints per
/// leg; too large and the polyline stops looking like a curve, too small
/// and the amount of computation grows.
pub const DEFAULT_SEGMENT_LENGTH_KM: f64 = 250.0;

/// Sphere radius and chord tolerance used for path subdivision. Passed
/// explicitly so the core stays reusable with other radii or tolerances.
#[derive(Debug, Clone, Copy)]
pub struct GeodesicConfig {
    pub earth_radius_km: f64,
    pub base_segment_length_km: f64,
}

impl Default for GeodesicConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            base_segment_length_km: DEFAULT_SEGMENT_LENGTH_KM,
        }
    }
}

impl GeodesicConfig {
    pub fn with_segment_length(segment_length_km: f64) -> Self {
        Self {
            base_segment_length_km: segment_length_km,
            ..Self::default()
        }
    }
}

/// Expands a waypoint sequence into a polyline approximating the
/// great-circle arc of every leg.
///
/// The first waypoint is emitted as-is; every following waypoint is
/// preceded by the interior points of its leg, in slot order. Sequences of
/// zero or one waypoint pass through unchanged. Legs are independent, so
/// they are subdivided in parallel; concatenation preserves leg order.
pub fn subdivide_path(
    waypoints: &[GeoPoint],
    config: &GeodesicConfig,
) -> Result<Vec<GeoPoint>, GeodesicError> {
    if waypoints.len() < 2 {
        return Ok(waypoints.to_vec());
    }

    let legs: Vec<Vec<GeoPoint>> = waypoints
        .par_windows(2)
        .map(|pair| subdivide_leg(pair[0], pair[1], config))
        .collect::<Result<_, _>>()?;

    let interior: usize = legs.iter().map(Vec::len).sum();
    let mut path = Vec::with_capacity(waypoints.len() + interior);
    path.push(waypoints[0]);
    for (leg, end) in legs.into_iter().zip(&waypoints[1..]) {
        path.extend(leg);
        path.push(*end);
    }
    Ok(path)
}

/// Interior points for one leg, in slot order. Empty when the leg is left
/// as a straight chord.
fn subdivide_leg(
    start: GeoPoint,
    end: GeoPoint,
    config: &GeodesicConfig,
) -> Result<Vec<GeoPoint>, GeodesicError> {
    let (mid_points, effective_length_km) = match plan_leg(
        start,
        end,
        config.base_segment_length_km,
        config.earth_radius_km,
    )? {
        LegPlan::Unsplit => return Ok(Vec::new()),
        LegPlan::Split {
            mid_points,
            effective_length_km,
        } => (mid_points, effective_length_km),
    };

    // Slots are pre-allocated by position; the recursion writes into fixed
    // offsets instead of growing a structure, so the depth is bounded by
    // the slot count decided up front.
    let mut slots = vec![GeoPoint::UNSET; mid_points + 1];
    fill_slots(
        start,
        end,
        0,
        slots.len(),
        &mut slots,
        effective_length_km,
        config.earth_radius_km,
    )?;

    let filled: Vec<GeoPoint> = slots.into_iter().filter(|p| !p.is_unset()).collect();
    if filled.is_empty() {
        // Sizing promised a split the subdivider never performed.
        return Err(GeodesicError::IncompleteSubdivision {
            slots: mid_points + 1,
        });
    }
    Ok(filled)
}

/// Recursive bisection over the index range `[lower, upper]`.
///
/// Stores the midpoint of the current sub-arc at the center index, then
/// recurses into both halves until every sub-chord fits the effective
/// length. Each call works on a strictly shorter arc and the slot count
/// bounds the useful depth; slots a terminating branch never visits keep
/// their placeholder and are dropped by the caller.
fn fill_slots(
    start: GeoPoint,
    end: GeoPoint,
    lower: usize,
    upper: usize,
    slots: &mut [GeoPoint],
    effective_length_km: f64,
    radius_km: f64,
) -> Result<(), GeodesicError> {
    let distance_km = great_circle_distance(start, end, radius_km);
    if distance_km <= effective_length_km {
        return Ok(());
    }

    let mid = great_circle_mid_point(start, end);
    let first_half_km = great_circle_distance(start, mid, radius_km);
    let second_half_km = great_circle_distance(mid, end, radius_km);
    // A midpoint that fails to shrink both halves would recurse without
    // bound. That only happens for (near-)antipodal sub-arcs, where the
    // midpoint formula is undefined; fail instead of propagating garbage.
    if !mid.is_finite() || first_half_km >= distance_km || second_half_km >= distance_km {
        return Err(GeodesicError::DegenerateGeometry);
    }

    let index = (lower + upper) / 2;
    slots[index] = mid;

    fill_slots(
        start,
        mid,
        lower,
        index,
        slots,
        effective_length_km,
        radius_km,
    )?;
    fill_slots(mid, end, index, upper, slots, effective_length_km, radius_km)
}
