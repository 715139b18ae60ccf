//! PhishGuard API Server
//!
//! Scores URLs for phishing likelihood with a pretrained gradient-boosted
//! tree classifier.
//!
//! # Architecture
//!
//! ```text
//! POST /api/predict
//!        │
//!        ▼
//! ┌─────────────┐   ┌────────────────┐   ┌──────────────────────┐
//! │  Handler    │──▶│ Feature        │──▶│ Scale → ONNX infer   │
//! │  (Axum)     │   │ Extractor      │   │ → override → verdict │
//! └─────────────┘   └────────────────┘   └──────────────────────┘
//!                        artifacts loaded once at startup
//! ```

mod config;
mod error;
mod handlers;
mod logic;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::model::ModelArtifacts;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phishguard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("PhishGuard server starting...");

    // Load model artifacts; serving without them is not an option
    let artifacts = ModelArtifacts::load(&config.model_dir)
        .expect("Failed to load model artifacts");

    // Build application state
    let state = AppState {
        artifacts: Arc::new(artifacts),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub artifacts: Arc<ModelArtifacts>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/predict", post(handlers::predict::predict))
        .route("/api/model/info", get(handlers::status::model_info))
        .layer(TraceLayer::new_for_http())
        // The browser extension calls the API from arbitrary origins
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
