//! Fitted feature scaler
//!
//! Applies the standardization transform fitted at training time. The
//! parameters come straight from the training pipeline (`scaler.json`);
//! nothing is re-fitted here.

use serde::{Deserialize, Serialize};

/// Standardization parameters from training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

impl Scaler {
    /// Identity scaler for the given width.
    pub fn identity(len: usize) -> Self {
        Self {
            mean: vec![0.0; len],
            scale: vec![1.0; len],
        }
    }

    /// Number of feature columns the scaler was fitted on.
    pub fn len(&self) -> usize {
        self.mean.len().max(self.scale.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply `(x - mean) / scale` per column. Near-zero scale is guarded
    /// the same way training-side pipelines guard constant columns.
    pub fn transform(&self, features: &[f32]) -> Vec<f32> {
        features
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let mean = self.mean.get(i).copied().unwrap_or(0.0);
                let scale = self.scale.get(i).copied().unwrap_or(1.0).max(1e-8);
                (v - mean) / scale
            })
            .collect()
    }
}
