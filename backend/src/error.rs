use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeodesicError {
    #[error(
        "segment length degraded to {effective_km} km while sizing a {distance_km} km leg"
    )]
    SizingFailure { distance_km: f64, effective_km: f64 },
    #[error("leg was allocated {slots} subdivision slots but none were filled")]
    IncompleteSubdivision { slots: usize },
    #[error("great-circle midpoint is undefined for this pair of points")]
    DegenerateGeometry,
    #[error("failed to build GPX document: {0}")]
    Gpx(#[from] gpx::errors::GpxError),
}
