//! Error types for URL transforms.

use thiserror::Error;

/// Errors that can occur while encoding, decoding, rendering, composing or fetching.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlUtilsError {
    /// Percent-decoded bytes are not valid UTF-8.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The query component is present but holds no key/value pairs.
    #[error("Query string contains no key/value pairs")]
    EmptyQuery,

    /// The input cannot be split into URL components.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A rendered block has no query section where one was required.
    ///
    /// Never returned: composing a block without a query section defaults to
    /// an empty query.
    #[error("Rendered block has no query section")]
    MissingQuery,

    /// Transport, DNS or HTTP failure while fetching.
    #[error("Network error: {0}")]
    Network(String),

    /// A selection region is out of bounds or not on a character boundary.
    #[error("Invalid region {start}..{end}")]
    InvalidRegion {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },
}

impl From<url::ParseError> for UrlUtilsError {
    fn from(err: url::ParseError) -> Self {
        UrlUtilsError::InvalidUrl(err.to_string())
    }
}

impl From<curl::Error> for UrlUtilsError {
    fn from(err: curl::Error) -> Self {
        UrlUtilsError::Network(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for UrlUtilsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        UrlUtilsError::Decode(err.to_string())
    }
}
