//! Model status handler

use axum::{extract::State, Json};

use crate::logic::model::ModelStatus;
use crate::AppState;

/// Model metadata and inference stats.
pub async fn model_info(State(state): State<AppState>) -> Json<ModelStatus> {
    Json(state.artifacts.status())
}
