//! Core types for Hanzo Feed Filter

use serde::{Deserialize, Serialize};

/// One `<item>` element located in a feed document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpan<'a> {
    /// Exact item markup, equal to `document[start..end]`
    pub text: &'a str,
    /// Byte offset of the opening `<item` in the original document
    pub start: usize,
    /// Byte offset just past the closing `</item>`
    pub end: usize,
}

/// Lower-cased title and description of an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPair {
    /// Contents of the first `<title>` element, or empty
    pub title: String,
    /// Contents of the first `<description>` element, or empty
    pub description: String,
}

impl FieldPair {
    /// Build a field pair, lower-casing both values
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_lowercase(),
            description: description.to_lowercase(),
        }
    }
}

/// Keep/drop verdict for a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Item survives into the output document
    Keep,
    /// Item is spliced out of the output document
    Drop,
}

impl Decision {
    /// Check if the item is kept
    pub fn is_keep(self) -> bool {
        self == Decision::Keep
    }
}

impl From<bool> for Decision {
    fn from(keep: bool) -> Self {
        if keep {
            Decision::Keep
        } else {
            Decision::Drop
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Keep => write!(f, "keep"),
            Decision::Drop => write!(f, "drop"),
        }
    }
}

/// Result of filtering one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// The rebuilt document
    pub document: String,
    /// Items found in the input
    pub items_total: usize,
    /// Items that survived
    pub items_kept: usize,
}

impl FilterOutcome {
    /// Outcome for a document that was passed through untouched
    pub(crate) fn passthrough(document: &str) -> Self {
        Self {
            document: document.to_string(),
            items_total: 0,
            items_kept: 0,
        }
    }

    /// Number of items removed
    pub fn items_dropped(&self) -> usize {
        self.items_total - self.items_kept
    }
}
