//! Bookmark URL validation.
//!
//! Accepted shape: `scheme://host[:port][/path][?query]`, checked one
//! component at a time:
//! - scheme: `http`, `https`, `ftp` or `ftps`, any case
//! - host: `localhost`, a dotted quad, or a dotted DNS name ending in a
//!   top-level label (an optional trailing `.` is allowed)
//! - port: one or more ASCII digits
//! - remainder: nothing, a bare `/`, or `/`/`?` followed by characters that
//!   are neither whitespace nor control characters
//!
//! Host labels are ASCII only. Dotted quads are matched by shape only;
//! `999.0.0.1` is accepted.

use std::sync::LazyLock;

use regex::Regex;

/// Schemes a bookmark link may use.
const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

// ---------------------------------------------------------------------------
// Regex patterns (compiled once)
// ---------------------------------------------------------------------------

/// A DNS label below the top level: alphanumeric ends, inner hyphens, <= 63 chars.
static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$").expect("label regex")
});

/// A top-level label: 2-6 letters, or 2+ alphanumerics/hyphens.
static TLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z]{2,6}|[A-Za-z0-9-]{2,})$").expect("TLD regex")
});

/// Four dot-separated groups of one to three digits.
static DOTTED_QUAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").expect("dotted quad regex")
});

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Why a URI was not accepted as a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UrlRejection {
    /// No `://` separator.
    #[error("missing `://` after the scheme")]
    MissingScheme,

    /// Scheme is not one of http, https, ftp, ftps.
    #[error("unsupported scheme")]
    UnsupportedScheme,

    /// Host is not localhost, a dotted quad, or a dotted DNS name.
    #[error("invalid host")]
    InvalidHost,

    /// Text after `:` in the authority is not a decimal port.
    #[error("invalid port")]
    InvalidPort,

    /// Path or query is a lone `?` or contains whitespace or control characters.
    #[error("invalid path or query")]
    InvalidPath,
}

/// Check `raw` against the accepted URL shape, reporting the first component
/// that fails.
pub fn validate_url(raw: &str) -> Result<(), UrlRejection> {
    let (scheme, rest) = raw.split_once("://").ok_or(UrlRejection::MissingScheme)?;

    if !ALLOWED_SCHEMES
        .iter()
        .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
    {
        return Err(UrlRejection::UnsupportedScheme);
    }

    let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);

    let (host, port) = match authority.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };

    if !is_valid_host(host) {
        return Err(UrlRejection::InvalidHost);
    }

    if let Some(port) = port {
        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UrlRejection::InvalidPort);
        }
    }

    if !is_valid_tail(tail) {
        return Err(UrlRejection::InvalidPath);
    }

    Ok(())
}

/// Whether `raw` may be written as a mind-map link.
pub fn is_valid_url(raw: &str) -> bool {
    validate_url(raw).is_ok()
}

fn is_valid_host(host: &str) -> bool {
    host.eq_ignore_ascii_case("localhost") || DOTTED_QUAD_RE.is_match(host) || is_dns_name(host)
}

/// One or more labels, each followed by `.`, then a top-level label.
fn is_dns_name(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);

    let Some((labels, tld)) = host.rsplit_once('.') else {
        return false;
    };

    TLD_RE.is_match(tld) && labels.split('.').all(|label| LABEL_RE.is_match(label))
}

/// `tail` starts at the first `/` or `?` after the authority, or is empty.
fn is_valid_tail(tail: &str) -> bool {
    match tail {
        "" | "/" => true,
        _ => {
            tail.chars().count() > 1
                && !tail.chars().any(|c| c.is_whitespace() || c.is_control())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
