//! Core logic: feature extraction, model artifacts, scoring.

pub mod features;
pub mod model;
pub mod scoring;
pub mod verdict;
