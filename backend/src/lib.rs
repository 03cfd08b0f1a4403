pub mod angles;
pub mod error;
pub mod geometry;
pub mod gpx_export;
pub mod models;
pub mod sizing;
pub mod subdivision;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};

use crate::error::GeodesicError;
use crate::geometry::path_distance_km;
use crate::gpx_export::encode_path_as_gpx;
use crate::models::{PathRequest, PathResponse};
use crate::subdivision::{GeodesicConfig, subdivide_path};

#[derive(Clone)]
pub struct AppState {
    pub config: GeodesicConfig,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/path", post(path_handler))
        .with_state(state)
}

async fn path_handler(
    State(state): State<AppState>,
    Json(req): Json<PathRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    let config = GeodesicConfig {
        base_segment_length_km: req.segment_length_km,
        ..state.config
    };

    let path = subdivide_path(&req.waypoints, &config).map_err(geometry_error)?;
    let distance_km = path_distance_km(&path, config.earth_radius_km);
    let gpx_base64 = encode_path_as_gpx(&path).map_err(internal_error)?;

    tracing::debug!(
        waypoints = req.waypoints.len(),
        points = path.len(),
        distance_km,
        "subdivided path"
    );

    let response = PathResponse {
        point_count: path.len(),
        path,
        distance_km,
        gpx_base64,
    };

    Ok(Json(response))
}

#[derive(serde::Serialize)]
struct ApiError {
    message: String,
}

fn geometry_error(err: GeodesicError) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiError {
            message: err.to_string(),
        }),
    )
}

fn internal_error(err: GeodesicError) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            message: err.to_string(),
        }),
    )
}
