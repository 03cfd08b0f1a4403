use std::{fs::File, io::BufWriter, path::PathBuf};

use backend::{
    geometry::path_distance_km,
    gpx_export::write_path_as_gpx,
    subdivision::{DEFAULT_SEGMENT_LENGTH_KM, GeodesicConfig, subdivide_path},
};
use clap::Parser;
use shared::GeoPoint;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Subdivide waypoints into a great-circle polyline and write it as GPX"
)]
struct Args {
    /// Waypoint as "lat,lon" in degrees; repeat in route order
    #[arg(long = "waypoint", value_parser = parse_waypoint, required = true)]
    waypoints: Vec<GeoPoint>,

    /// Maximum chord length in kilometers
    #[arg(long, default_value_t = DEFAULT_SEGMENT_LENGTH_KM)]
    segment_length_km: f64,

    /// Output path for the GPX document
    #[arg(long)]
    output: PathBuf,
}

fn parse_waypoint(raw: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lon\", got {raw:?}"))?;
    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad latitude: {e}"))?;
    let lon = lon
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad longitude: {e}"))?;
    Ok(GeoPoint::new(lat, lon))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = GeodesicConfig::with_segment_length(args.segment_length_km);

    let path = subdivide_path(&args.waypoints, &config)?;
    tracing::info!(
        "subdivided {} waypoints into {} points ({:.1} km)",
        args.waypoints.len(),
        path.len(),
        path_distance_km(&path, config.earth_radius_km)
    );

    let file = BufWriter::new(File::create(&args.output)?);
    write_path_as_gpx(&path, file)?;
    tracing::info!("wrote {}", args.output.display());
    Ok(())
}
