//! Splice dropped items out of a document

use crate::types::{Decision, ItemSpan};

/// Remove every span whose decision is [`Decision::Drop`].
///
/// `spans` must be in document order and `decisions` must line up with it.
/// Text between items is left exactly as it was, including any whitespace
/// that separated a removed item from its neighbours.
pub fn rebuild_document(document: &str, spans: &[ItemSpan<'_>], decisions: &[Decision]) -> String {
    debug_assert_eq!(spans.len(), decisions.len());

    let mut result = document.to_string();
    // Back to front so earlier offsets stay valid.
    for (span, decision) in spans.iter().zip(decisions).rev() {
        if *decision == Decision::Drop {
            result.replace_range(span.start..span.end, "");
        }
    }
    result
}
