//! Percent-encoding and percent-decoding of arbitrary text.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::UrlUtilsError;

/// Characters that are escaped by [`encode`].
///
/// Everything except ASCII alphanumerics, `_ . - ~`, and the line break
/// characters `\r` and `\n`, so multi-line selections keep their layout.
/// `/` is escaped.
pub const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'\r')
    .remove(b'\n');

/// Percent-encode a string.
///
/// Non-ASCII characters are encoded as their UTF-8 bytes with upper-case hex.
///
/// # Examples
///
/// ```
/// use urlutils::urlencode;
///
/// assert_eq!(urlencode("a b/c"), "a%20b%2Fc");
/// assert_eq!(urlencode("line1\r\nline2"), "line1\r\nline2");
/// ```
pub fn encode(s: &str) -> String {
    utf8_percent_encode(s, ENCODE_SET).to_string()
}

/// Percent-decode a string, treating a literal `+` as a space.
///
/// `+` is replaced before decoding, so `%2B` still decodes to `+`. Malformed
/// escapes are left as they are and invalid UTF-8 becomes U+FFFD.
///
/// # Examples
///
/// ```
/// use urlutils::urldecode;
///
/// assert_eq!(urldecode("a+b%2Bc"), "a b+c");
/// assert_eq!(urldecode("100%"), "100%");
/// ```
pub fn decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Like [`decode`], but fails on bytes that are not valid UTF-8.
///
/// # Errors
///
/// Returns [`UrlUtilsError::Decode`] if the decoded bytes are not UTF-8.
pub fn decode_strict(s: &str) -> Result<String, UrlUtilsError> {
    let spaced = s.replace('+', " ");
    let decoded = percent_decode_str(&spaced)
        .decode_utf8()
        .map_err(|e| UrlUtilsError::Decode(format!("{} in '{}'", e, s)))?;
    Ok(decoded.into_owned())
}
