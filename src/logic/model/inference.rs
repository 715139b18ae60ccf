//! ONNX inference
//!
//! Runs the loaded classifier on a scaled feature row and extracts a single
//! phishing probability. Tree classifiers exported to ONNX emit either a
//! per-class probability row or a single score column; the last value of
//! the first float output is the positive-class probability either way.

use ndarray::Array2;
use ort::value::Value;

use super::artifacts::ModelArtifacts;
use super::ModelError;

/// Run inference on one scaled feature row, returning a score in [0, 1].
pub fn predict_proba(artifacts: &ModelArtifacts, scaled: &[f32]) -> Result<f32, ModelError> {
    let start_time = std::time::Instant::now();

    let input_array = Array2::<f32>::from_shape_vec((1, scaled.len()), scaled.to_vec())
        .map_err(|e| ModelError::Inference(format!("array error: {e}")))?;

    let input_tensor = Value::from_array(input_array)
        .map_err(|e| ModelError::Inference(format!("tensor error: {e}")))?;

    let mut session = artifacts.session.lock();
    let outputs = session
        .run(ort::inputs![input_tensor])
        .map_err(|e| ModelError::Inference(e.to_string()))?;

    // The exported graph may also carry an integer label output; take the
    // first output that extracts as f32.
    for name in &artifacts.output_names {
        let Some(output) = outputs.get(name.as_str()) else {
            continue;
        };
        let Ok(output_tensor) = output.try_extract_tensor::<f32>() else {
            continue;
        };
        let data = output_tensor.1;

        let score = match data.len() {
            0 => continue,
            1 => data[0],
            n => data[n - 1],
        };

        artifacts.record_latency(start_time.elapsed().as_micros() as u64);
        return Ok(score.clamp(0.0, 1.0));
    }

    Err(ModelError::Inference(
        "model produced no float output".to_string(),
    ))
}
