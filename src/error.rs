//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::logic::scoring::ScoreError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Request carried no usable `url` field.
    MissingUrl,

    /// Extractor output disagrees with the artifact schema.
    FeatureSizeMismatch { expected: usize, got: usize },

    /// The model failed at inference time.
    Inference(String),
}

impl AppError {
    fn parts(&self) -> (StatusCode, String) {
        match self {
            AppError::MissingUrl => (StatusCode::BAD_REQUEST, "No URL provided".to_string()),
            AppError::FeatureSizeMismatch { expected, got } => (
                StatusCode::BAD_REQUEST,
                format!("Feature size mismatch: expected {expected}, got {got}"),
            ),
            AppError::Inference(msg) => {
                tracing::error!("Inference error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Prediction failed".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.parts();

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<ScoreError> for AppError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::FeatureSizeMismatch { expected, got } => {
                AppError::FeatureSizeMismatch { expected, got }
            }
            ScoreError::Model(e) => AppError::Inference(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_message() {
        let (status, msg) = AppError::MissingUrl.parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "No URL provided");
    }

    #[test]
    fn test_size_mismatch_message() {
        let (status, msg) = AppError::FeatureSizeMismatch {
            expected: 19,
            got: 18,
        }
        .parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Feature size mismatch: expected 19, got 18");
    }

    #[test]
    fn test_inference_error_is_500() {
        let (status, _) = AppError::Inference("boom".to_string()).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
