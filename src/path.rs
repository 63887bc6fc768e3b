//! Slash-delimited key paths
//!
//! `a/b/c` → ["a", "b", "c"]. Segments are taken verbatim: no trimming,
//! no collapsing of `//`, no escaping, no index syntax.

use std::fmt;

/// Path separator
pub const SEPARATOR: char = '/';

/// A parsed key path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Split a path string into segments
    ///
    /// Examples:
    /// - "a/b/c" → ["a", "b", "c"]
    /// - "a//b" → ["a", "", "b"]
    /// - "" → []
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::default();
        }

        Self {
            segments: path.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}
