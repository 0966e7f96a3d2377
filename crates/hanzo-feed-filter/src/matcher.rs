//! Whole-word term matching against item fields
//!
//! Two modes share one compiled pattern per term:
//!
//! - **Allow mode**: a title containing `non-<term>` opts the item out of the
//!   term entirely, even if the term appears elsewhere.
//! - **Block mode**: plain whole-word match, no opt-out.

use crate::types::FieldPair;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// A single compiled term
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    negated: String,
    word: Regex,
}

impl TermMatcher {
    /// Compile a term. Returns `None` for blank terms.
    ///
    /// The term is matched literally; regex metacharacters are escaped.
    pub fn new(term: &str) -> Option<Self> {
        if term.trim().is_empty() {
            return None;
        }
        let term = term.to_lowercase();

        // Edges are non-word characters or the ends of the field, so terms
        // like "c++" still match when followed by a space.
        let pattern = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(&term));
        let word = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                warn!("Cannot compile term '{}': {}", term, e);
                e
            })
            .ok()?;

        Some(Self {
            negated: format!("non-{}", term),
            term,
            word,
        })
    }

    /// The lower-cased term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Allow-list semantics: whole-word match unless the title negates the term
    pub fn matches_allow(&self, fields: &FieldPair) -> bool {
        if fields.title.contains(&self.negated) {
            return false;
        }
        self.matches_block(fields)
    }

    /// Block-list semantics: whole-word match in title or description
    pub fn matches_block(&self, fields: &FieldPair) -> bool {
        self.word.is_match(&fields.title) || self.word.is_match(&fields.description)
    }
}

/// An allow-list or block-list compiled once for reuse across items
#[derive(Debug, Clone, Default)]
pub struct TermList {
    matchers: Vec<TermMatcher>,
}

impl TermList {
    /// Compile an optional list of terms, skipping blank ones
    pub fn new(terms: Option<&[String]>) -> Self {
        let matchers = terms
            .unwrap_or_default()
            .iter()
            .filter_map(|t| TermMatcher::new(t))
            .collect();
        Self { matchers }
    }

    /// True when no usable term is present
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Number of compiled terms
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Some term matches in allow mode
    pub fn any_allow(&self, fields: &FieldPair) -> bool {
        self.matchers.iter().any(|m| m.matches_allow(fields))
    }

    /// Some term matches in block mode
    pub fn any_block(&self, fields: &FieldPair) -> bool {
        self.matchers.iter().any(|m| m.matches_block(fields))
    }
}

/// Check one term against an item in allow mode
pub fn matches_allow_term(term: &str, fields: &FieldPair) -> bool {
    TermMatcher::new(term).is_some_and(|m| m.matches_allow(fields))
}

/// Check one term against an item in block mode
pub fn matches_block_term(term: &str, fields: &FieldPair) -> bool {
    TermMatcher::new(term).is_some_and(|m| m.matches_block(fields))
}
