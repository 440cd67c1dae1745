//! Reassemble a rendered block into a URL.

use tracing::debug;

use crate::core::query;
use crate::types::{Component, UrlParts};
use crate::url::split::join_url;

/// Recover URL parts from a rendered block.
///
/// Headers are looked up in component order; the text between a header and
/// the next header found (or the end of the block) is that component's value.
/// Text before the first header is ignored. Components without a header stay
/// empty, including the query.
pub fn parse_block(block: &str) -> UrlParts {
    let mut parts = UrlParts::default();
    let mut current: Option<Component> = None;
    let mut rest = block;

    for component in Component::ALL {
        let header = component.header();
        if let Some((before, after)) = rest.split_once(header.as_str()) {
            if let Some(previous) = current {
                assign(&mut parts, previous, before);
            }
            current = Some(component);
            rest = after;
        }
    }

    if let Some(previous) = current {
        assign(&mut parts, previous, rest);
    }

    parts
}

fn assign(parts: &mut UrlParts, component: Component, segment: &str) {
    let value = match component {
        // Keep the padding of the first line: an empty key renders as `   : v`.
        Component::Query => {
            let lines = segment.trim_matches(|c: char| c == '\n' || c == '\r').lines();
            query::render_lines_to_query(lines)
        }
        _ => segment.trim().to_string(),
    };
    parts.set(component, value);
}

/// Compose a URL from a rendered block.
///
/// # Examples
///
/// ```
/// use urlutils::{urlparse_render, urlunparse_compose};
///
/// let block = urlparse_render("http://example.com/p?b=2&a=1#frag").unwrap();
/// assert_eq!(urlunparse_compose(&block), "http://example.com/p?a=1&b=2#frag");
/// ```
pub fn compose(block: &str) -> String {
    let parts = parse_block(block);
    debug!(?parts, "composing url");
    join_url(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(component: Component, body: &str) -> String {
        format!("\n{}\n\n{}\n", component.header(), body)
    }

    #[test]
    fn test_parse_block_all_components() {
        let block = [
            section(Component::Scheme, "https"),
            section(Component::Authority, "example.com:8443"),
            section(Component::Path, "/a/b"),
            section(Component::Params, "type=d"),
            section(Component::Query, "   lang : en\n      q : rust lang"),
            section(Component::Fragment, "top"),
        ]
        .concat();

        let parts = parse_block(&block);
        assert_eq!(parts.scheme, "https");
        assert_eq!(parts.netloc, "example.com:8443");
        assert_eq!(parts.path, "/a/b");
        assert_eq!(parts.params, "type=d");
        assert_eq!(parts.query, "lang=en&q=rust+lang");
        assert_eq!(parts.fragment, "top");

        assert_eq!(
            compose(&block),
            "https://example.com:8443/a/b;type=d?lang=en&q=rust+lang#top"
        );
    }

    #[test]
    fn test_compose_without_query() {
        let block = [
            section(Component::Scheme, "http"),
            section(Component::Authority, "example.com"),
            section(Component::Fragment, "frag"),
        ]
        .concat();

        assert_eq!(compose(&block), "http://example.com#frag");
        assert_eq!(parse_block(&block).query, "");
    }

    #[test]
    fn test_compose_query_value_with_separator() {
        let block = [
            section(Component::Scheme, "http"),
            section(Component::Authority, "example.com"),
            section(Component::Query, "   t : 12 : 30"),
        ]
        .concat();

        assert_eq!(compose(&block), "http://example.com?t=12+%3A+30");
    }

    #[test]
    fn test_compose_empty_key_first() {
        let block = [
            section(Component::Scheme, "http"),
            section(Component::Authority, "example.com"),
            section(Component::Query, "    : v\n   a : 1"),
        ]
        .concat();

        assert_eq!(parse_block(&block).query, "=v&a=1");
    }

    #[test]
    fn test_compose_ignores_leading_text() {
        let block = format!("notes\n{}", section(Component::Path, "/only"));
        assert_eq!(compose(&block), "/only");
    }

    #[test]
    fn test_compose_empty_block() {
        assert_eq!(compose(""), "");
        assert_eq!(parse_block("no headers here"), UrlParts::default());
    }
}
