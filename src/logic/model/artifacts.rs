//! Model Artifacts - load-once, read-only model state
//!
//! Loads the three pretrained artifacts from the model directory. Any
//! failure here is fatal at startup; the server never serves traffic with
//! partially loaded artifacts.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use ort::session::{builder::GraphOptimizationLevel, Session};
use parking_lot::Mutex;
use serde::Serialize;

use super::scaler::Scaler;
use super::schema::FeatureSchema;
use super::ModelError;

/// Trained classifier, exported to ONNX.
pub const MODEL_FILE: &str = "phishing_detector.onnx";
/// Fitted standardization parameters.
pub const SCALER_FILE: &str = "scaler.json";
/// Ordered feature-name list the classifier was trained on.
pub const FEATURES_FILE: &str = "selected_features.json";

/// The three startup-loaded artifacts plus inference bookkeeping.
///
/// Shared read-only across request handlers via `Arc`; only the ONNX
/// session needs a lock because the runtime takes `&mut` to run.
pub struct ModelArtifacts {
    pub(super) session: Mutex<Session>,
    pub(super) output_names: Vec<String>,
    pub scaler: Scaler,
    pub schema: FeatureSchema,
    pub model_path: PathBuf,
    pub loaded_at: DateTime<Utc>,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl ModelArtifacts {
    /// Load all artifacts from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let model_path = dir.join(MODEL_FILE);
        if !model_path.exists() {
            return Err(ModelError::ArtifactMissing(model_path.display().to_string()));
        }

        tracing::info!("Loading ONNX model from {}", model_path.display());
        let session = Session::builder()
            .map_err(|e| ModelError::ModelLoad(format!("session builder: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::ModelLoad(format!("optimization level: {e}")))?
            .commit_from_file(&model_path)
            .map_err(|e| ModelError::ModelLoad(e.to_string()))?;
        let output_names = session.outputs.iter().map(|o| o.name.clone()).collect();

        let names: Vec<String> = read_json(&dir.join(FEATURES_FILE))?;
        let schema = FeatureSchema::resolve(names);

        let scaler: Scaler = read_json(&dir.join(SCALER_FILE))?;
        if scaler.len() != schema.len() {
            return Err(ModelError::ScalerShape {
                scaler: scaler.len(),
                schema: schema.len(),
            });
        }

        tracing::info!("Model artifacts loaded: {} features expected", schema.len());

        Ok(Self {
            session: Mutex::new(session),
            output_names,
            scaler,
            schema,
            model_path,
            loaded_at: Utc::now(),
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        })
    }

    pub(super) fn record_latency(&self, micros: u64) {
        self.latency_sum_us.fetch_add(micros, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Runtime status for the model-info endpoint.
    pub fn status(&self) -> ModelStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        };

        ModelStatus {
            model_name: self
                .model_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.model_path.display().to_string()),
            inference_device: "ONNX Runtime (CPU)".to_string(),
            feature_count: self.schema.len(),
            loaded_at: self.loaded_at,
            inference_count: count,
            avg_latency_ms: avg,
        }
    }
}

/// Model status for the info endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub model_name: String,
    pub inference_device: String,
    pub feature_count: usize,
    pub loaded_at: DateTime<Utc>,
    pub inference_count: u64,
    pub avg_latency_ms: f32,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ModelError::ArtifactRead {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ModelError::ArtifactParse {
        path: path.display().to_string(),
        source,
    })
}
