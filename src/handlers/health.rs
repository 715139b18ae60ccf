//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    /// Name of the loaded classifier artifact.
    model_name: String,
    /// Width of the feature schema the classifier expects.
    feature_count: usize,
}

/// Liveness plus a summary of the loaded model. Artifacts are loaded
/// before the server binds, so a serving process always reports them.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model = state.artifacts.status();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        model_name: model.model_name,
        feature_count: model.feature_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_wire_shape() {
        let body = serde_json::to_value(HealthResponse {
            status: "healthy",
            version: "0.1.0",
            timestamp: 1700000000,
            model_name: "phishing_detector.onnx".to_string(),
            feature_count: 19,
        })
        .unwrap();

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], "0.1.0");
        assert_eq!(body["model_name"], "phishing_detector.onnx");
        assert_eq!(body["feature_count"], 19);
    }
}
