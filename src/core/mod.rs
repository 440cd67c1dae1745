//! Core URL transforms.
//!
//! This module contains the text transforms behind each command:
//! - Percent-encoding and decoding
//! - Query string rendering as aligned lines, and back
//! - Rendering a URL as a labelled block
//! - Composing a URL from such a block

pub mod codec;
pub mod composer;
pub mod parser;
pub mod query;

// Re-export main functionality
pub use codec::{decode, decode_strict, encode};
pub use composer::{compose, parse_block};
pub use parser::{render, render_parts};
pub use query::{parse_to_lines, render_lines_to_query};
