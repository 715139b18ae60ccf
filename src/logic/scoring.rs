//! End-to-end URL scoring pipeline
//!
//! extract -> project -> validate shape -> scale -> infer -> override.
//! Everything after extraction runs against the startup-loaded artifacts
//! passed in explicitly; no global state.

use super::features;
use super::model::{inference, ModelArtifacts, ModelError};
use super::verdict::{self, Verdict};

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// Extractor output disagrees with the artifact schema. A config/drift
    /// bug, not a per-request transient.
    #[error("Feature size mismatch: expected {expected}, got {got}")]
    FeatureSizeMismatch { expected: usize, got: usize },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Score one URL against the loaded artifacts.
pub fn score_url(artifacts: &ModelArtifacts, url: &str) -> Result<Verdict, ScoreError> {
    let values = features::extract(url).vector();
    let projected = artifacts.schema.project(&values);

    if projected.len() != artifacts.schema.len() {
        return Err(ScoreError::FeatureSizeMismatch {
            expected: artifacts.schema.len(),
            got: projected.len(),
        });
    }

    let scaled = artifacts.scaler.transform(&projected);
    let score = inference::predict_proba(artifacts, &scaled)?;

    let verdict = verdict::apply_paypal_override(url, verdict::from_score(score));

    tracing::debug!(
        score,
        prediction = verdict.prediction,
        confidence = verdict.confidence,
        "scored url"
    );

    Ok(verdict)
}
