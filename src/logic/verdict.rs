//! Verdict derivation
//!
//! Turns the raw model score into the binary call plus confidence
//! percentage, then applies the one hardcoded override rule.

use serde::Serialize;

/// Scores above this are called phishing.
pub const PHISHING_THRESHOLD: f32 = 0.5;

/// Confidence floor enforced by the PayPal override.
pub const OVERRIDE_MIN_CONFIDENCE: f32 = 85.0;

/// Final classification for one URL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    /// 1 = phishing, 0 = legitimate.
    pub prediction: u8,
    /// Model probability as a 0-100 percentage.
    pub confidence: f32,
}

/// Derive the verdict from a raw probability in [0, 1].
pub fn from_score(score: f32) -> Verdict {
    Verdict {
        prediction: u8::from(score > PHISHING_THRESHOLD),
        confidence: score * 100.0,
    }
}

/// Hardcoded business rule carried over from the original deployment, not a
/// model behavior: any URL mentioning "paypal" that is not on "paypal.com"
/// is forced to phishing at no less than 85% confidence, independent of the
/// model score. Only PayPal is special-cased; the rule is preserved
/// verbatim rather than generalized to other brands.
pub fn apply_paypal_override(url: &str, verdict: Verdict) -> Verdict {
    let url_lower = url.to_ascii_lowercase();
    if url_lower.contains("paypal") && !url_lower.contains("paypal.com") {
        return Verdict {
            prediction: 1,
            confidence: verdict.confidence.max(OVERRIDE_MIN_CONFIDENCE),
        };
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(from_score(0.5).prediction, 0);
        assert_eq!(from_score(0.500001).prediction, 1);
        assert_eq!(from_score(0.0).prediction, 0);
        assert_eq!(from_score(1.0).prediction, 1);
    }

    #[test]
    fn test_confidence_is_percentage() {
        assert_eq!(from_score(0.73).confidence, 73.0);
        assert_eq!(from_score(0.0).confidence, 0.0);
    }

    #[test]
    fn test_override_forces_phishing() {
        let verdict = apply_paypal_override(
            "http://paypal-security.fake.com/login",
            from_score(0.12),
        );
        assert_eq!(verdict.prediction, 1);
        assert!(verdict.confidence >= OVERRIDE_MIN_CONFIDENCE);
    }

    #[test]
    fn test_override_keeps_higher_confidence() {
        let verdict = apply_paypal_override("http://paypal.fake.com/", from_score(0.97));
        assert_eq!(verdict.prediction, 1);
        assert_eq!(verdict.confidence, 97.0);
    }

    #[test]
    fn test_real_paypal_not_overridden() {
        let low = from_score(0.2);
        let verdict = apply_paypal_override("https://www.paypal.com/signin", low);
        assert_eq!(verdict, low);
    }

    #[test]
    fn test_override_case_insensitive() {
        let verdict = apply_paypal_override("http://PAYPAL-verify.tk/", from_score(0.1));
        assert_eq!(verdict.prediction, 1);

        let verdict = apply_paypal_override("https://WWW.PAYPAL.COM/signin", from_score(0.1));
        assert_eq!(verdict.prediction, 0);
    }

    #[test]
    fn test_unrelated_url_untouched() {
        let verdict = from_score(0.9);
        assert_eq!(apply_paypal_override("https://example.com/", verdict), verdict);
    }
}
