use std::net::SocketAddr;

use backend::{AppState, create_router, subdivision::GeodesicConfig};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(author, version, about = "Great-circle path subdivision service")]
struct Args {
    /// Socket address to listen on
    #[arg(long, default_value = "0.0.0.0:8080")]
    addr: SocketAddr,

    /// Base chord tolerance in kilometers
    #[arg(long, default_value_t = backend::subdivision::DEFAULT_SEGMENT_LENGTH_KM)]
    segment_length_km: f64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let state = AppState {
        config: GeodesicConfig::with_segment_length(args.segment_length_km),
    };
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = create_router(state).layer(cors);

    tracing::info!("starting backend on http://{}", args.addr);
    axum::serve(tokio::net::TcpListener::bind(args.addr).await.unwrap(), app)
        .await
        .unwrap();
}
