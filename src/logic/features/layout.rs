//! Feature Layout - Centralized Feature Definition
//!
//! Single source of truth for the features the extractor computes and
//! the order they occupy in the raw vector. The model's own schema
//! (`selected_features.json`) is resolved against this layout once at
//! startup; see `logic::model::schema`.

/// Feature names in the exact order they appear in the extracted vector.
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Basic URL properties (0-2) ===
    "url_length",               // 0: Length of the raw URL string
    "domain_length",            // 1: Length of the registrable domain label
    "tld_length",               // 2: Length of the public suffix

    // === Subdomain structure (3-4) ===
    "subdomain_count",          // 3: Number of subdomain labels
    "has_multiple_subdomains",  // 4: subdomain_count > 1

    // === Suspicious patterns (5-8) ===
    "has_ip_address",           // 5: Dotted-quad anywhere in the URL
    "has_at_symbol",            // 6: Literal '@' in the URL
    "has_double_slash",         // 7: "//" inside the path component
    "has_dash_in_domain",       // 8: '-' in the registrable domain label

    // === Path (9-10) ===
    "path_length",              // 9: Length of the path component
    "path_depth",               // 10: '/'-delimited segments minus one

    // === Query (11-12) ===
    "query_length",             // 11: Length of the query string
    "query_count",              // 12: '&'-delimited parameters

    // === TLD / brand heuristics (13-18) ===
    "has_suspicious_tld",       // 13: Suffix in the suspicious-TLD set
    "has_brand_name",           // 14: Brand name inside the domain label
    "has_suspicious_words",     // 15: Credential-bait word in the URL
    "has_multiple_tlds",        // 16: Two-or-more ".xx" runs in the URL
    "subdomain_contains_brand", // 17: Brand name inside the subdomain
    "domain_with_support",      // 18: "support" plus a brand in the URL
];

/// Total number of extracted features.
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 19;

/// Resolve a feature name to its index in the layout.
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

// ============================================================================
// CONSTANT SETS
// ============================================================================

/// TLDs disproportionately used by phishing campaigns.
pub const SUSPICIOUS_TLDS: &[&str] = &["xyz", "top", "ml", "ga", "cf", "gq", "tk"];

/// Brands the classifier was trained to watch for impersonation of.
pub const COMMON_BRANDS: &[&str] = &[
    "paypal", "apple", "microsoft", "amazon", "google", "facebook", "instagram", "netflix",
];

/// Credential-bait words common in phishing URLs.
pub const SUSPICIOUS_WORDS: &[&str] = &[
    "secure", "account", "login", "verify", "signin", "security", "confirm", "update",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_count_matches() {
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_names_unique() {
        for (i, name) in FEATURE_LAYOUT.iter().enumerate() {
            assert_eq!(feature_index(name), Some(i));
        }
    }

    #[test]
    fn test_feature_index_unknown() {
        assert_eq!(feature_index("nonexistent"), None);
    }
}
