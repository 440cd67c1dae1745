//! Permissive URL splitting and joining.
//!
//! Unlike `url::Url::parse`, splitting never rejects relative references or
//! unknown schemes: anything that does not look like a scheme or a network
//! location ends up in the path. Nothing is normalised beyond lower-casing the
//! scheme, so joining the parts gives back an equivalent URL.

use crate::error::UrlUtilsError;
use crate::types::UrlParts;

/// Schemes whose last path segment may carry `;params`.
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

/// Schemes that are written with a `//netloc` even when the netloc is empty.
const USES_NETLOC: &[&str] = &[
    "", "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https",
    "shttp", "snews", "prospero", "rtsp", "rtspu", "rsync", "svn", "svn+ssh", "sftp", "nfs",
    "git", "git+ssh", "ws", "wss",
];

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Split a URL into its six components.
///
/// Follows the conventional `scheme://netloc/path;params?query#fragment`
/// layout. Leading spaces and control characters are ignored, and tabs and
/// line breaks anywhere in the input are dropped.
///
/// # Examples
///
/// ```
/// use urlutils::split_url;
///
/// let parts = split_url("http://user@example.com:8080/p;type=a?b=2#frag").unwrap();
/// assert_eq!(parts.scheme, "http");
/// assert_eq!(parts.netloc, "user@example.com:8080");
/// assert_eq!(parts.path, "/p");
/// assert_eq!(parts.params, "type=a");
/// assert_eq!(parts.query, "b=2");
/// assert_eq!(parts.fragment, "frag");
/// ```
///
/// # Errors
///
/// Returns [`UrlUtilsError::InvalidUrl`] when the network location has an
/// unbalanced IPv6 bracket.
pub fn split_url(url: &str) -> Result<UrlParts, UrlUtilsError> {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    let mut rest = cleaned.as_str();

    let mut parts = UrlParts::default();

    // Scheme
    if let Some(colon) = rest.find(':') {
        let candidate = &rest[..colon];
        let starts_alpha = candidate
            .chars()
            .next()
            .map(|c| c.is_ascii_alphabetic())
            .unwrap_or(false);
        if starts_alpha && candidate.chars().all(is_scheme_char) {
            parts.scheme = candidate.to_ascii_lowercase();
            rest = &rest[colon + 1..];
        }
    }

    // Network location
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(|c: char| matches!(c, '/' | '?' | '#')).unwrap_or(after.len());
        let netloc = &after[..end];
        if netloc.contains('[') != netloc.contains(']') {
            return Err(UrlUtilsError::InvalidUrl(format!(
                "unbalanced IPv6 brackets in '{}'",
                netloc
            )));
        }
        parts.netloc = netloc.to_string();
        rest = &after[end..];
    }

    if let Some((before, fragment)) = rest.split_once('#') {
        parts.fragment = fragment.to_string();
        rest = before;
    }

    if let Some((before, query)) = rest.split_once('?') {
        parts.query = query.to_string();
        rest = before;
    }

    if USES_PARAMS.contains(&parts.scheme.as_str()) && rest.contains(';') {
        let (path, params) = split_params(rest);
        parts.path = path.to_string();
        parts.params = params.to_string();
    } else {
        parts.path = rest.to_string();
    }

    Ok(parts)
}

/// Split `;params` off the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    let segment_start = path.rfind('/').unwrap_or(0);
    match path[segment_start..].find(';') {
        Some(offset) => {
            let semi = segment_start + offset;
            (&path[..semi], &path[semi + 1..])
        }
        None => (path, ""),
    }
}

/// Join URL parts back into a URL string.
///
/// The inverse of [`split_url`]: a `//` is written before the network
/// location, and also when the scheme conventionally has one and the path is
/// empty or absolute.
///
/// # Examples
///
/// ```
/// use urlutils::{join_url, split_url};
///
/// let parts = split_url("file:///etc/hosts").unwrap();
/// assert_eq!(parts.netloc, "");
/// assert_eq!(join_url(&parts), "file:///etc/hosts");
///
/// let parts = split_url("mailto:someone@example.com").unwrap();
/// assert_eq!(join_url(&parts), "mailto:someone@example.com");
/// ```
pub fn join_url(parts: &UrlParts) -> String {
    let mut path = parts.path.clone();
    if !parts.params.is_empty() {
        path.push(';');
        path.push_str(&parts.params);
    }

    let mut url = String::new();
    if !parts.scheme.is_empty() {
        url.push_str(&parts.scheme);
        url.push(':');
    }

    if !parts.netloc.is_empty() {
        url.push_str("//");
        url.push_str(&parts.netloc);
        if !path.is_empty() && !path.starts_with('/') {
            url.push('/');
        }
    } else if path.starts_with("//")
        || (!parts.scheme.is_empty()
            && USES_NETLOC.contains(&parts.scheme.as_str())
            && (path.is_empty() || path.starts_with('/')))
    {
        url.push_str("//");
    }
    url.push_str(&path);

    if !parts.query.is_empty() {
        url.push('?');
        url.push_str(&parts.query);
    }
    if !parts.fragment.is_empty() {
        url.push('#');
        url.push_str(&parts.fragment);
    }

    url
}
