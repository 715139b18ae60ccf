//! Prediction handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::logic::scoring;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// 1 = phishing, 0 = legitimate.
    pub prediction: u8,
    /// Model probability as a 0-100 percentage.
    pub confidence: f32,
}

/// Score a URL for phishing likelihood
pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    let url = match req.url.as_deref() {
        Some(u) if !u.is_empty() => u,
        _ => return Err(AppError::MissingUrl),
    };

    let verdict = scoring::score_url(&state.artifacts, url)?;

    tracing::info!(
        prediction = verdict.prediction,
        confidence = verdict.confidence,
        "prediction served"
    );

    Ok(Json(PredictResponse {
        prediction: verdict.prediction,
        confidence: verdict.confidence,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_has_no_url() {
        let req: PredictRequest = serde_json::from_str("{}").unwrap();
        assert!(req.url.is_none());
    }

    #[test]
    fn test_url_field_deserializes() {
        let req: PredictRequest =
            serde_json::from_str(r#"{"url": "https://example.com/"}"#).unwrap();
        assert_eq!(req.url.as_deref(), Some("https://example.com/"));
    }

    #[test]
    fn test_response_wire_shape() {
        let body = serde_json::to_value(PredictResponse {
            prediction: 1,
            confidence: 85.0,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"prediction": 1, "confidence": 85.0}));
    }
}
