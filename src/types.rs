//! Core data structures shared by the render and compose directions.

use std::fmt;

/// Width of a rendered component header line.
pub const HEADER_WIDTH: usize = 75;

/// Fill character used to centre a component header.
pub const HEADER_FILL: char = '-';

/// One of the six standard URL components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// URL scheme (http, https, ftp, mailto, ...)
    Scheme,
    /// Network location (user:pass@host:port)
    Authority,
    /// Path (/api/v1/users)
    Path,
    /// Parameters of the last path segment (the part after `;`)
    Params,
    /// Query string without the `?`
    Query,
    /// Fragment without the `#`
    Fragment,
}

impl Component {
    /// All components, in the order they are rendered and composed.
    pub const ALL: [Component; 6] = [
        Component::Scheme,
        Component::Authority,
        Component::Path,
        Component::Params,
        Component::Query,
        Component::Fragment,
    ];

    /// Name used in rendered headers.
    pub fn name(&self) -> &'static str {
        match self {
            Component::Scheme => "scheme",
            Component::Authority => "authority",
            Component::Path => "path",
            Component::Params => "params",
            Component::Query => "query",
            Component::Fragment => "fragment",
        }
    }

    /// The bare header line for this component, without surrounding blank lines.
    ///
    /// ```
    /// use urlutils::Component;
    ///
    /// let header = Component::Scheme.header();
    /// assert_eq!(header.chars().count(), 75);
    /// assert!(header.contains(" scheme "));
    /// ```
    pub fn header(&self) -> String {
        center(&format!(" {} ", self.name()), HEADER_WIDTH, HEADER_FILL)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Centre `text` within `width` columns using `fill`.
///
/// When the padding cannot be split evenly, the extra fill character goes on
/// the left if both the padding and the width are odd, otherwise on the right.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let pad = width - len;
    let left = pad / 2 + (pad & width & 1);
    let right = pad - left;

    let mut out = String::with_capacity(width + text.len() - len);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

/// A URL split into its six components. Any component may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    /// URL scheme, lower-cased (http)
    pub scheme: String,
    /// Network location (user@example.com:8080)
    pub netloc: String,
    /// Path component (/p/a/t/h)
    pub path: String,
    /// Parameters of the last path segment (type=a)
    pub params: String,
    /// Query string without the '?' (a=1&b=2)
    pub query: String,
    /// Fragment without the '#' (section1)
    pub fragment: String,
}

impl UrlParts {
    /// Create new URL parts.
    pub fn new(
        scheme: String,
        netloc: String,
        path: String,
        params: String,
        query: String,
        fragment: String,
    ) -> Self {
        Self {
            scheme,
            netloc,
            path,
            params,
            query,
            fragment,
        }
    }

    /// Value of the given component.
    pub fn get(&self, component: Component) -> &str {
        match component {
            Component::Scheme => &self.scheme,
            Component::Authority => &self.netloc,
            Component::Path => &self.path,
            Component::Params => &self.params,
            Component::Query => &self.query,
            Component::Fragment => &self.fragment,
        }
    }

    /// Replace the value of the given component.
    pub fn set(&mut self, component: Component, value: String) {
        let slot = match component {
            Component::Scheme => &mut self.scheme,
            Component::Authority => &mut self.netloc,
            Component::Path => &mut self.path,
            Component::Params => &mut self.params,
            Component::Query => &mut self.query,
            Component::Fragment => &mut self.fragment,
        };
        *slot = value;
    }

    /// Components with a non-empty value, in render order.
    pub fn present(&self) -> impl Iterator<Item = (Component, &str)> + '_ {
        Component::ALL
            .into_iter()
            .map(move |c| (c, self.get(c)))
            .filter(|(_, v)| !v.is_empty())
    }
}
