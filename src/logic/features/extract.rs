//! URL Feature Extraction
//!
//! Pure function from a raw URL string to the fixed feature vector the
//! classifier was trained on. Works on arbitrary input; nothing here can
//! fail, malformed URLs just produce a zero-leaning vector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::layout::{COMMON_BRANDS, FEATURE_COUNT, SUSPICIOUS_TLDS, SUSPICIOUS_WORDS};
use super::url_parts::{decompose_host, split_components};

static IP_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\d+\.\d+\.\d+").expect("valid regex"));

/// Two-or-more runs of ".xx" anywhere in the URL ("login.paypal.com.verify.tk").
static MULTIPLE_TLDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\.[a-z]{2,}){2,}").expect("valid regex"));

/// The full set of lexical/structural features for one URL.
///
/// One typed field per slot in `FEATURE_LAYOUT`; `vector()` emits them in
/// layout order. Boolean flags are stored as 0.0/1.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlFeatures {
    pub url_length: f32,
    pub domain_length: f32,
    pub tld_length: f32,
    pub subdomain_count: f32,
    pub has_multiple_subdomains: f32,
    pub has_ip_address: f32,
    pub has_at_symbol: f32,
    pub has_double_slash: f32,
    pub has_dash_in_domain: f32,
    pub path_length: f32,
    pub path_depth: f32,
    pub query_length: f32,
    pub query_count: f32,
    pub has_suspicious_tld: f32,
    pub has_brand_name: f32,
    pub has_suspicious_words: f32,
    pub has_multiple_tlds: f32,
    pub subdomain_contains_brand: f32,
    pub domain_with_support: f32,
}

impl UrlFeatures {
    /// Values in `FEATURE_LAYOUT` order.
    pub fn vector(&self) -> [f32; FEATURE_COUNT] {
        [
            self.url_length,
            self.domain_length,
            self.tld_length,
            self.subdomain_count,
            self.has_multiple_subdomains,
            self.has_ip_address,
            self.has_at_symbol,
            self.has_double_slash,
            self.has_dash_in_domain,
            self.path_length,
            self.path_depth,
            self.query_length,
            self.query_count,
            self.has_suspicious_tld,
            self.has_brand_name,
            self.has_suspicious_words,
            self.has_multiple_tlds,
            self.subdomain_contains_brand,
            self.domain_with_support,
        ]
    }
}

fn flag(cond: bool) -> f32 {
    if cond {
        1.0
    } else {
        0.0
    }
}

/// Extract all features from a raw URL string.
pub fn extract(url: &str) -> UrlFeatures {
    let parts = split_components(url);
    let host = decompose_host(&parts.host);
    let url_lower = url.to_ascii_lowercase();

    // Subdomain labels ("a.b" counts as 2; absent subdomain counts as 0).
    let subdomain_count = if host.subdomain.is_empty() {
        0
    } else {
        host.subdomain.split('.').count()
    };

    let path_depth = if parts.path.is_empty() {
        0
    } else {
        parts.path.split('/').count() - 1
    };

    let query_count = if parts.query.is_empty() {
        0
    } else {
        parts.query.split('&').count()
    };

    let brand_in = |s: &str| COMMON_BRANDS.iter().any(|b| s.contains(b));

    UrlFeatures {
        url_length: url.len() as f32,
        domain_length: host.domain.len() as f32,
        tld_length: host.suffix.len() as f32,
        subdomain_count: subdomain_count as f32,
        has_multiple_subdomains: flag(subdomain_count > 1),
        has_ip_address: flag(IP_ADDRESS_RE.is_match(url)),
        has_at_symbol: flag(url.contains('@')),
        has_double_slash: flag(parts.path.contains("//")),
        has_dash_in_domain: flag(host.domain.contains('-')),
        path_length: parts.path.len() as f32,
        path_depth: path_depth as f32,
        query_length: parts.query.len() as f32,
        query_count: query_count as f32,
        has_suspicious_tld: flag(SUSPICIOUS_TLDS.contains(&host.suffix.as_str())),
        has_brand_name: flag(brand_in(&host.domain)),
        has_suspicious_words: flag(SUSPICIOUS_WORDS.iter().any(|w| url_lower.contains(w))),
        has_multiple_tlds: flag(MULTIPLE_TLDS_RE.find_iter(url).count() > 0),
        subdomain_contains_brand: flag(!host.subdomain.is_empty() && brand_in(&host.subdomain)),
        domain_with_support: flag(url_lower.contains("support") && brand_in(&url_lower)),
    }
}
