//! Model Module - Pretrained artifact loading and inference
//!
//! Three artifacts loaded once at startup: the ONNX classifier, the fitted
//! scaler parameters, and the ordered feature-name schema. All three are
//! read-only for the life of the process.

pub mod artifacts;
pub mod inference;
pub mod scaler;
pub mod schema;

pub use artifacts::{ModelArtifacts, ModelStatus};
pub use scaler::Scaler;
pub use schema::FeatureSchema;

/// Errors from artifact loading and inference.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("artifact not found: {0}")]
    ArtifactMissing(String),

    #[error("failed to read artifact {path}: {source}")]
    ArtifactRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    ArtifactParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to load ONNX model: {0}")]
    ModelLoad(String),

    #[error("scaler has {scaler} parameters but schema expects {schema}")]
    ScalerShape { scaler: usize, schema: usize },

    #[error("inference failed: {0}")]
    Inference(String),
}
