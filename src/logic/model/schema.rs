//! Feature Schema - the artifact-declared feature order
//!
//! `selected_features.json` is authoritative for the shape and order of the
//! classifier's input. Each schema name is resolved to a slot in
//! `FEATURE_LAYOUT` exactly once at load time; per-request projection is
//! then pure index lookups. Names the extractor does not compute resolve to
//! a zero-fill slot, silently, so schema drift degrades instead of failing.

use crate::logic::features::{feature_index, FEATURE_COUNT};

/// Ordered feature schema with pre-resolved layout slots.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    names: Vec<String>,
    slots: Vec<Option<usize>>,
}

impl FeatureSchema {
    /// Resolve schema names against the extractor layout.
    pub fn resolve(names: Vec<String>) -> Self {
        let slots: Vec<Option<usize>> = names.iter().map(|n| feature_index(n)).collect();

        for (name, slot) in names.iter().zip(&slots) {
            if slot.is_none() {
                tracing::warn!("schema feature {:?} is not computed; will zero-fill", name);
            }
        }

        Self { names, slots }
    }

    /// Number of features the classifier expects.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Project extracted values into schema order, zero-filling unresolved
    /// names. Output length always equals `len()`.
    pub fn project(&self, values: &[f32; FEATURE_COUNT]) -> Vec<f32> {
        self.slots
            .iter()
            .map(|slot| slot.map(|i| values[i]).unwrap_or(0.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FEATURE_LAYOUT;

    #[test]
    fn test_full_layout_projects_identity() {
        let schema =
            FeatureSchema::resolve(FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect());
        assert_eq!(schema.len(), FEATURE_COUNT);

        let mut values = [0.0f32; FEATURE_COUNT];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f32;
        }
        let projected = schema.project(&values);
        assert_eq!(projected, values.to_vec());
    }

    #[test]
    fn test_unknown_name_zero_fills() {
        let schema = FeatureSchema::resolve(vec![
            "url_length".to_string(),
            "entropy".to_string(), // dropped from the extractor; schema may still carry it
            "tld_length".to_string(),
        ]);
        assert_eq!(schema.len(), 3);

        let mut values = [0.0f32; FEATURE_COUNT];
        values[feature_index("url_length").unwrap()] = 42.0;
        values[feature_index("tld_length").unwrap()] = 3.0;

        assert_eq!(schema.project(&values), vec![42.0, 0.0, 3.0]);
    }

    #[test]
    fn test_subset_schema_keeps_order() {
        let schema = FeatureSchema::resolve(vec![
            "tld_length".to_string(),
            "url_length".to_string(),
        ]);

        let mut values = [0.0f32; FEATURE_COUNT];
        values[feature_index("url_length").unwrap()] = 10.0;
        values[feature_index("tld_length").unwrap()] = 2.0;

        // Schema order wins, not layout order.
        assert_eq!(schema.project(&values), vec![2.0, 10.0]);
    }

    #[test]
    fn test_empty_schema() {
        let schema = FeatureSchema::resolve(vec![]);
        assert!(schema.is_empty());
        assert_eq!(schema.project(&[0.0; FEATURE_COUNT]), Vec::<f32>::new());
    }
}
