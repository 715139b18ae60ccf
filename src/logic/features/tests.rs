//! Combined tests for the feature extraction pipeline
//!
//! End-to-end checks that splitting, domain decomposition, and flag
//! computation agree with each other on realistic URLs.

use super::{extract, feature_index, FEATURE_COUNT};

fn value(url: &str, name: &str) -> f32 {
    let vector = extract(url).vector();
    vector[feature_index(name).unwrap_or_else(|| panic!("unknown feature {name}"))]
}

#[test]
fn test_vector_length_is_fixed_for_any_input() {
    for url in [
        "",
        "not a url at all",
        "https://www.example.com/",
        "http://user@192.168.0.1.evil.tk/login//verify?a=1&b=2",
        "ftp://files.example.co.uk/pub",
        "絵文字.example.com",
    ] {
        assert_eq!(extract(url).vector().len(), FEATURE_COUNT, "url: {url:?}");
    }
}

#[test]
fn test_phishing_looking_url_lights_up() {
    let url = "http://secure.paypal.com.verify-account.xyz/signin?user=1&token=2";

    assert_eq!(value(url, "has_suspicious_tld"), 1.0);
    assert_eq!(value(url, "has_suspicious_words"), 1.0);
    assert_eq!(value(url, "has_multiple_tlds"), 1.0);
    assert_eq!(value(url, "has_dash_in_domain"), 1.0);
    assert_eq!(value(url, "query_count"), 2.0);
}

#[test]
fn test_benign_url_stays_quiet() {
    let url = "https://www.example.com/about";

    assert_eq!(value(url, "has_ip_address"), 0.0);
    assert_eq!(value(url, "has_at_symbol"), 0.0);
    assert_eq!(value(url, "has_suspicious_tld"), 0.0);
    assert_eq!(value(url, "has_suspicious_words"), 0.0);
    assert_eq!(value(url, "has_brand_name"), 0.0);
    assert_eq!(value(url, "domain_with_support"), 0.0);
}

#[test]
fn test_schemeless_and_strict_parse_agree_on_structure() {
    // The fallback splitter feeds the same decomposition as the strict
    // parser, so domain-derived features match with or without a scheme.
    for name in ["domain_length", "tld_length", "subdomain_count", "has_brand_name"] {
        assert_eq!(
            value("https://www.paypal.com/signin", name),
            value("www.paypal.com/signin", name),
            "feature: {name}"
        );
    }
}
