//! Features Module - URL Feature Extraction Engine
//!
//! Everything needed to turn a raw URL string into the fixed-order numeric
//! vector the classifier consumes.

pub mod extract;
pub mod layout;
pub mod url_parts;

#[cfg(test)]
mod tests;

// Re-export common types
pub use extract::{extract, UrlFeatures};
pub use layout::{feature_index, FEATURE_COUNT, FEATURE_LAYOUT};
