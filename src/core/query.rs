//! Query string <-> aligned key/value lines.
//!
//! A query such as `b=2&a=1` is rendered as one line per key, sorted, with the
//! keys right-aligned so the ` : ` separators line up:
//!
//! ```text
//!     a : 1
//!     b : 2
//! ```

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::error::UrlUtilsError;

/// Separator between the key and the value of a rendered query line.
pub const SEPARATOR: &str = " : ";

/// Extra columns added to the longest key when aligning.
const KEY_PADDING: usize = 3;

/// Parse a query string into `(key, value)` pairs, sorted by key.
///
/// Keys and values are form-decoded (`+` is a space). A key that appears more
/// than once keeps its last value.
pub fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let pairs: BTreeMap<String, String> = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.into_iter().collect()
}

/// Render a query string as aligned `key : value` lines.
///
/// # Examples
///
/// ```
/// use urlutils::core::query::parse_to_lines;
///
/// let lines = parse_to_lines("b=2&a=1").unwrap();
/// assert_eq!(lines, vec!["   a : 1", "   b : 2"]);
/// ```
///
/// # Errors
///
/// Returns [`UrlUtilsError::EmptyQuery`] if the query has no pairs.
pub fn parse_to_lines(query: &str) -> Result<Vec<String>, UrlUtilsError> {
    let pairs = parse_pairs(query);

    let width = pairs
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .ok_or(UrlUtilsError::EmptyQuery)?
        + KEY_PADDING;

    Ok(pairs
        .iter()
        .map(|(k, v)| format!("{:>width$}{}{}", k, SEPARATOR, v, width = width))
        .collect())
}

/// Split one rendered line into its key and value.
///
/// Only the first separator counts, so values may contain ` : ` themselves.
/// A line without a separator is a key with an empty value; so is a line
/// whose empty value lost the trailing space of the separator to trimming.
/// A line whose empty key lost its padding (`: v`) has an empty key.
pub fn split_line(line: &str) -> (&str, &str) {
    if let Some((key, value)) = line.split_once(SEPARATOR) {
        return (key.trim(), value);
    }
    let line = line.trim();
    if let Some(value) = line.strip_prefix(SEPARATOR.trim_start()) {
        return ("", value);
    }
    match line.strip_suffix(SEPARATOR.trim_end()) {
        Some(key) => (key.trim(), ""),
        None => (line, ""),
    }
}

/// Turn aligned `key : value` lines back into an encoded query string.
///
/// Blank lines are skipped. Pairs keep the order of the lines and are
/// form-encoded (space becomes `+`).
///
/// # Examples
///
/// ```
/// use urlutils::core::query::render_lines_to_query;
///
/// let query = render_lines_to_query(["   a : 1", "   q : x y&z"]);
/// assert_eq!(query, "a=1&q=x+y%26z");
/// ```
pub fn render_lines_to_query<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = split_line(line);
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_to_lines_sorted_and_aligned() {
        let lines = parse_to_lines("b=2&a=1").unwrap();
        assert_eq!(lines, vec!["   a : 1", "   b : 2"]);

        let lines = parse_to_lines("page=1&q=rust+lang&sort=desc").unwrap();
        assert_eq!(
            lines,
            vec![
                "   page : 1",
                "      q : rust lang",
                "   sort : desc",
            ]
        );
    }

    #[test]
    fn test_parse_to_lines_last_value_wins() {
        let lines = parse_to_lines("a=1&a=2&b=3").unwrap();
        assert_eq!(lines, vec!["   a : 2", "   b : 3"]);
    }

    #[test]
    fn test_parse_to_lines_empty() {
        assert_eq!(parse_to_lines(""), Err(UrlUtilsError::EmptyQuery));
        assert_eq!(parse_to_lines("&&"), Err(UrlUtilsError::EmptyQuery));
    }

    #[test]
    fn test_parse_to_lines_blank_values() {
        let lines = parse_to_lines("flag&x=").unwrap();
        assert_eq!(lines, vec!["   flag : ", "      x : "]);
    }

    #[test]
    fn test_parse_to_lines_unicode_width() {
        let lines = parse_to_lines("%C3%A9t%C3%A9=summer&ab=1").unwrap();
        assert_eq!(lines, vec!["    ab : 1", "   été : summer"]);
    }

    #[test]
    fn test_split_line_first_separator() {
        assert_eq!(split_line("   k : a : b"), ("k", "a : b"));
        assert_eq!(split_line("  lonely  "), ("lonely", ""));
        assert_eq!(split_line("   flag :"), ("flag", ""));
        assert_eq!(split_line("    : v"), ("", "v"));
        assert_eq!(split_line(": v"), ("", "v"));
    }

    #[test]
    fn test_render_lines_to_query() {
        let query = render_lines_to_query(vec!["   a : 1", "", "   b : two words"]);
        assert_eq!(query, "a=1&b=two+words");

        let query = render_lines_to_query(vec!["   time : 12 : 30"]);
        assert_eq!(query, "time=12+%3A+30");

        assert_eq!(render_lines_to_query(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_lines_round_trip() {
        let lines = parse_to_lines("redirect=%2Fhome%3Fx%3D1&lang=en").unwrap();
        let query = render_lines_to_query(lines.iter().map(String::as_str));
        assert_eq!(parse_pairs(&query), parse_pairs("redirect=%2Fhome%3Fx%3D1&lang=en"));
    }
}
