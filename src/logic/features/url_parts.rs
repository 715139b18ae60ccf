//! Permissive URL decomposition
//!
//! Splits a raw input string into scheme/host/path/query and the host into
//! subdomain / registrable domain / public suffix. Malformed input never
//! errors; missing pieces degrade to empty strings so the extractor can
//! still produce a vector.

use url::Url;

/// Structural components of a URL string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlParts {
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: String,
}

/// Public-suffix-aware pieces of a hostname.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainParts {
    /// Labels left of the registrable domain ("a.b" in "a.b.example.co.uk").
    pub subdomain: String,
    /// The registered label itself ("example" in "a.b.example.co.uk").
    pub domain: String,
    /// Public suffix ("co.uk" in "a.b.example.co.uk").
    pub suffix: String,
}

/// Split a raw string into URL components.
///
/// Path and query are always raw substrings of the input: the classifier
/// was trained on unnormalized components, so a URL with no path keeps
/// `path == ""` and `/a b` keeps its literal bytes, with no "/" default
/// and no percent-encoding. The strict parser contributes only the scheme
/// and host (punycode, lowercase) when it accepts the input; everything
/// else degrades to best-effort splitting.
pub fn split_components(raw: &str) -> UrlParts {
    let mut parts = split_best_effort(raw);

    if let Ok(url) = Url::parse(raw) {
        if url.has_host() {
            parts.scheme = url.scheme().to_string();
            parts.host = url.host_str().unwrap_or("").to_ascii_lowercase();
        }
    }

    parts
}

/// Fallback splitter for inputs the URL parser rejects.
fn split_best_effort(raw: &str) -> UrlParts {
    let (scheme, rest) = match raw.split_once("://") {
        Some((s, r)) => (s.to_string(), r),
        None => (String::new(), raw),
    };

    let (authority, tail) = match rest.find(['/', '?', '#']) {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };

    let (path, after_path) = match tail.find(['?', '#']) {
        Some(i) => (&tail[..i], &tail[i..]),
        None => (tail, ""),
    };

    let query = match after_path.strip_prefix('?') {
        Some(q) => q.split('#').next().unwrap_or(""),
        None => "",
    };

    // Authority may still carry userinfo and a port.
    let host = authority
        .rsplit('@')
        .next()
        .unwrap_or("")
        .split(':')
        .next()
        .unwrap_or("");

    UrlParts {
        scheme,
        host: host.to_ascii_lowercase(),
        path: path.to_string(),
        query: query.to_string(),
    }
}

/// Decompose a hostname using the public suffix list.
///
/// Multi-label suffixes ("co.uk") are handled by the PSL, not by dot
/// counting. IPv4 hosts and single-label hosts have no suffix.
pub fn decompose_host(host: &str) -> DomainParts {
    let host = host.trim_matches('.').to_ascii_lowercase();
    if host.is_empty() {
        return DomainParts::default();
    }

    if host.parse::<std::net::Ipv4Addr>().is_ok() || !host.contains('.') {
        return DomainParts {
            subdomain: String::new(),
            domain: host,
            suffix: String::new(),
        };
    }

    let suffix = psl::suffix_str(&host).unwrap_or("").to_string();
    let registrable = psl::domain_str(&host).unwrap_or("").to_string();

    let domain = match registrable.len().checked_sub(suffix.len() + 1) {
        Some(n) if !suffix.is_empty() && registrable.ends_with(&suffix) => {
            registrable[..n].to_string()
        }
        _ => registrable.clone(),
    };

    let subdomain = match host.len().checked_sub(registrable.len() + 1) {
        Some(n) if !registrable.is_empty() && host.ends_with(&registrable) => {
            host[..n].to_string()
        }
        _ => String::new(),
    };

    DomainParts {
        subdomain,
        domain,
        suffix,
    }
}
