//! Editor-style commands and applying them to selected regions of a text.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::core::{codec, composer, parser};
use crate::error::UrlUtilsError;
use crate::fetch;

/// A text transform: takes the selected text, returns its replacement.
pub type Transform = fn(&str) -> Result<String, UrlUtilsError>;

/// One command per transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Percent-encode the text
    Encode,
    /// Percent-decode the text
    Decode,
    /// Render the URL as a labelled block
    Parse,
    /// Compose a URL from a labelled block
    Unparse,
    /// Replace the URL with the body it serves
    Response,
}

fn encode_transform(s: &str) -> Result<String, UrlUtilsError> {
    Ok(codec::encode(s))
}

fn decode_transform(s: &str) -> Result<String, UrlUtilsError> {
    Ok(codec::decode(s))
}

fn compose_transform(s: &str) -> Result<String, UrlUtilsError> {
    Ok(composer::compose(s))
}

impl Command {
    /// All commands.
    pub const ALL: [Command; 5] = [
        Command::Encode,
        Command::Decode,
        Command::Parse,
        Command::Unparse,
        Command::Response,
    ];

    /// Canonical command name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Encode => "urlencode",
            Command::Decode => "urldecode",
            Command::Parse => "urlparse",
            Command::Unparse => "urlunparse",
            Command::Response => "urlresponse",
        }
    }

    /// The transform this command applies.
    pub fn transform(&self) -> Transform {
        match self {
            Command::Encode => encode_transform,
            Command::Decode => decode_transform,
            Command::Parse => parser::render,
            Command::Unparse => compose_transform,
            Command::Response => fetch::fetch,
        }
    }

    /// Apply this command to a whole text.
    pub fn run(&self, text: &str) -> Result<String, UrlUtilsError> {
        (self.transform())(text)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let short = name.strip_prefix("url").unwrap_or(&name);
        match short {
            "encode" => Ok(Command::Encode),
            "decode" => Ok(Command::Decode),
            "parse" => Ok(Command::Parse),
            "unparse" => Ok(Command::Unparse),
            "response" | "fetch" => Ok(Command::Response),
            _ => Err(format!(
                "unknown command '{}', expected one of: {}",
                s,
                Command::ALL.map(|c| c.name()).join(", ")
            )),
        }
    }
}

/// A selected byte range of a text. `start` may be past `end` for a selection
/// made backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
}

impl Region {
    /// Create a new region.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether the region selects nothing.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The same region with `start <= end`.
    pub fn ordered(self) -> Self {
        Self {
            start: self.start.min(self.end),
            end: self.start.max(self.end),
        }
    }
}

impl FromStr for Region {
    type Err = String;

    /// Parse `START..END` (or `START:END`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("..")
            .or_else(|| s.split_once(':'))
            .ok_or_else(|| format!("expected START..END, got '{}'", s))?;
        let start = start
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("bad region start '{}': {}", start, e))?;
        let end = end
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("bad region end '{}': {}", end, e))?;
        Ok(Region::new(start, end))
    }
}

/// Apply `transform` to every non-empty region of `text`, replacing each in place.
///
/// Regions refer to offsets in the original text and are processed in order;
/// each is shifted by the growth or shrinkage of the replacements before it.
/// With no non-empty region, the whole text is transformed.
///
/// # Examples
///
/// ```
/// use urlutils::commands::{apply_to_regions, Command, Region};
///
/// let text = "a b | c d";
/// let regions = [Region::new(0, 3), Region::new(6, 9)];
/// let out = apply_to_regions(text, &regions, Command::Encode.transform()).unwrap();
/// assert_eq!(out, "a%20b | c%20d");
/// ```
///
/// # Errors
///
/// Returns [`UrlUtilsError::InvalidRegion`] if a region is out of bounds, not on
/// a character boundary, or overlaps the previous one, and any error from
/// `transform`.
pub fn apply_to_regions(
    text: &str,
    regions: &[Region],
    transform: Transform,
) -> Result<String, UrlUtilsError> {
    let mut selected: Vec<Region> = regions
        .iter()
        .filter(|r| !r.is_empty())
        .map(|r| r.ordered())
        .collect();
    if selected.is_empty() {
        selected.push(Region::new(0, text.len()));
    }

    let mut out = text.to_string();
    let mut drift: isize = 0;
    let mut previous_end = 0;

    for region in selected {
        let valid = region.end <= text.len()
            && region.start >= previous_end
            && text.is_char_boundary(region.start)
            && text.is_char_boundary(region.end);
        if !valid {
            return Err(UrlUtilsError::InvalidRegion {
                start: region.start,
                end: region.end,
            });
        }
        previous_end = region.end;

        let original = &text[region.start..region.end];
        let processed = transform(original)?;

        let start = (region.start as isize + drift) as usize;
        let end = (region.end as isize + drift) as usize;
        out.replace_range(start..end, &processed);

        drift += processed.len() as isize - original.len() as isize;
        debug!(
            start = region.start,
            end = region.end,
            replaced_len = processed.len(),
            "region transformed"
        );
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(s: &str) -> Result<String, UrlUtilsError> {
        Ok(format!("<{}>", s.to_uppercase()))
    }

    fn fail(_: &str) -> Result<String, UrlUtilsError> {
        Err(UrlUtilsError::EmptyQuery)
    }

    #[test]
    fn test_command_from_str() {
        assert_eq!("urlencode".parse::<Command>().unwrap(), Command::Encode);
        assert_eq!("decode".parse::<Command>().unwrap(), Command::Decode);
        assert_eq!("URLPARSE".parse::<Command>().unwrap(), Command::Parse);
        assert_eq!("unparse".parse::<Command>().unwrap(), Command::Unparse);
        assert_eq!("fetch".parse::<Command>().unwrap(), Command::Response);
        assert!("bogus".parse::<Command>().is_err());

        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn test_command_run() {
        assert_eq!(Command::Encode.run("a b").unwrap(), "a%20b");
        assert_eq!(Command::Decode.run("a+b").unwrap(), "a b");
    }

    #[test]
    fn test_region_from_str() {
        assert_eq!("3..7".parse::<Region>().unwrap(), Region::new(3, 7));
        assert_eq!("3:7".parse::<Region>().unwrap(), Region::new(3, 7));
        assert!("3-7".parse::<Region>().is_err());
        assert!("x..7".parse::<Region>().is_err());
    }

    #[test]
    fn test_apply_whole_text_when_nothing_selected() {
        assert_eq!(apply_to_regions("abc", &[], shout).unwrap(), "<ABC>");
        assert_eq!(
            apply_to_regions("abc", &[Region::new(1, 1)], shout).unwrap(),
            "<ABC>"
        );
    }

    #[test]
    fn test_apply_accounts_for_drift() {
        let text = "ab cd ef";
        let regions = [Region::new(0, 2), Region::new(3, 5), Region::new(6, 8)];
        assert_eq!(
            apply_to_regions(text, &regions, shout).unwrap(),
            "<AB> <CD> <EF>"
        );
    }

    #[test]
    fn test_apply_backwards_selection() {
        assert_eq!(
            apply_to_regions("ab cd", &[Region::new(5, 3)], shout).unwrap(),
            "ab <CD>"
        );
    }

    #[test]
    fn test_apply_shrinking_replacement() {
        let text = "x=%20 y=%20";
        let regions = [Region::new(0, 5), Region::new(6, 11)];
        assert_eq!(
            apply_to_regions(text, &regions, Command::Decode.transform()).unwrap(),
            "x=  y= "
        );
    }

    #[test]
    fn test_apply_invalid_regions() {
        assert_eq!(
            apply_to_regions("abc", &[Region::new(1, 9)], shout),
            Err(UrlUtilsError::InvalidRegion { start: 1, end: 9 })
        );
        assert!(apply_to_regions("é", &[Region::new(1, 2)], shout).is_err());
        assert!(
            apply_to_regions("abcdef", &[Region::new(2, 4), Region::new(1, 3)], shout).is_err()
        );
    }

    #[test]
    fn test_apply_propagates_transform_error() {
        assert_eq!(
            apply_to_regions("abc", &[], fail),
            Err(UrlUtilsError::EmptyQuery)
        );
    }
}
