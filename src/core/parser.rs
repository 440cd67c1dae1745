//! Render a URL as a labelled, human-readable block.
//!
//! Each non-empty component gets a centred header followed by its
//! percent-decoded value. The query is shown as aligned `key : value` lines:
//!
//! ```text
//! ---------------------------------- scheme ---------------------------------
//!
//! http
//!
//! -------------------------------- authority --------------------------------
//!
//! example.com
//! ```

use tracing::debug;

use crate::core::codec;
use crate::core::query;
use crate::error::UrlUtilsError;
use crate::types::{Component, UrlParts};
use crate::url::split::split_url;

/// Render already split URL parts as a block.
///
/// # Errors
///
/// Returns [`UrlUtilsError::EmptyQuery`] if the query is non-empty but holds
/// no pairs.
pub fn render_parts(parts: &UrlParts) -> Result<String, UrlUtilsError> {
    let mut lines = Vec::new();

    for (component, value) in parts.present() {
        lines.push(format!("\n{}\n", component.header()));

        // Query lines come out of form decoding already; decoding them a
        // second time would turn an escaped `+` or `%` into something else.
        if component == Component::Query {
            lines.extend(query::parse_to_lines(value)?);
        } else {
            lines.push(codec::decode(value));
        }
    }

    Ok(lines.join("\n").trim().to_string())
}

/// Split a URL and render it as a block.
///
/// # Examples
///
/// ```
/// use urlutils::urlparse_render;
///
/// let block = urlparse_render("http://example.com/a%20b").unwrap();
/// assert!(block.contains(" authority "));
/// assert!(block.ends_with("/a b"));
/// ```
///
/// # Errors
///
/// Returns [`UrlUtilsError::InvalidUrl`] if the URL cannot be split, and
/// [`UrlUtilsError::EmptyQuery`] if its query holds no pairs.
pub fn render(url: &str) -> Result<String, UrlUtilsError> {
    let parts = split_url(url.trim())?;
    debug!(?parts, "rendering url");
    render_parts(&parts)
}
