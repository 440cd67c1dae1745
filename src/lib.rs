//! urlutils - URL encode, decode, break down and reassemble
//!
//! This crate provides the text transforms behind a handful of editor
//! commands. Each takes a string and returns a string:
//!
//! - [`urlencode`]: percent-encode everything except unreserved characters and line breaks
//! - [`urldecode`]: percent-decode, with `+` read as a space
//! - [`urlparse_render`]: break a URL down into a labelled, human-readable block
//! - [`urlunparse_compose`]: reassemble such a block into a URL
//! - [`fetch`]: replace a URL with the body it serves
//!
//! # Quick Start
//!
//! ```
//! use urlutils::{urldecode, urlencode, urlparse_render, urlunparse_compose};
//!
//! assert_eq!(urlencode("a b&c"), "a%20b%26c");
//! assert_eq!(urldecode("a+b%26c"), "a b&c");
//!
//! let block = urlparse_render("https://example.com/search?q=rust+lang&page=2#top")?;
//! println!("{}", block);
//!
//! let url = urlunparse_compose(&block);
//! assert_eq!(url, "https://example.com/search?page=2&q=rust+lang#top");
//! # Ok::<(), urlutils::UrlUtilsError>(())
//! ```
//!
//! # Rendered block
//!
//! Every non-empty component, in the order scheme, authority, path, params,
//! query, fragment, gets a header centred in 75 columns with `-`, a blank
//! line, its decoded value, and a blank line before the next header. Query
//! pairs are sorted by key and aligned on ` : `:
//!
//! ```text
//! ---------------------------------- scheme ---------------------------------
//!
//! https
//!
//! ---------------------------------- query ----------------------------------
//!
//!    page : 2
//!       q : rust lang
//! ```
//!
//! Query pairs come back sorted, and a key given twice keeps its last value.
//!
//! # Error Handling
//!
//! Fallible functions return `Result<T, UrlUtilsError>`. Common error cases:
//!
//! - A query component with no key/value pairs
//! - A network location with unbalanced IPv6 brackets
//! - Network failures while fetching

// Re-export public types
pub use crate::commands::{apply_to_regions, Command, Region, Transform};
pub use crate::error::UrlUtilsError;
pub use crate::types::{Component, UrlParts};
pub use crate::url::{join_url, split_url};

// Module declarations
pub mod commands;
pub mod core;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod types;
pub mod url;

/// Percent-encode a string, keeping line breaks.
pub fn urlencode(s: &str) -> String {
    crate::core::codec::encode(s)
}

/// Percent-decode a string, reading `+` as a space.
pub fn urldecode(s: &str) -> String {
    crate::core::codec::decode(s)
}

/// Break a URL down into a labelled, human-readable block.
pub fn urlparse_render(url: &str) -> Result<String, UrlUtilsError> {
    crate::core::parser::render(url)
}

/// Reassemble a labelled block into a URL.
pub fn urlunparse_compose(block: &str) -> String {
    crate::core::composer::compose(block)
}

/// Fetch a URL and return the response body as text.
pub fn fetch(url: &str) -> Result<String, UrlUtilsError> {
    crate::fetch::fetch(url)
}
