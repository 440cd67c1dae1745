//! URL splitting utilities.
//!
//! This module contains the permissive splitter used by the render and
//! compose directions, and its inverse.

pub mod split;

pub use split::{join_url, split_url};
