//! Main FeedFilter implementation

use crate::config::FilterConfig;
use crate::extract::extract_fields;
use crate::locator::locate_items;
use crate::matcher::TermList;
use crate::rebuild::rebuild_document;
use crate::types::{Decision, FieldPair, FilterOutcome};
use tracing::{debug, trace};

/// Compiled allow/block lists, ready to filter any number of documents.
///
/// An item is kept when it matches the allow-list (or the allow-list is
/// empty) and does not match the block-list.
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    allow: TermList,
    block: TermList,
}

impl FeedFilter {
    /// Compile the term lists of a config
    pub fn new(config: &FilterConfig) -> Self {
        Self::from_lists(config.allow_list.as_deref(), config.block_list.as_deref())
    }

    /// Compile raw term lists
    pub fn from_lists(allow_list: Option<&[String]>, block_list: Option<&[String]>) -> Self {
        Self {
            allow: TermList::new(allow_list),
            block: TermList::new(block_list),
        }
    }

    /// True when the filter can never drop an item
    pub fn is_passthrough(&self) -> bool {
        self.allow.is_empty() && self.block.is_empty()
    }

    /// Allow-list verdict for an item's fields
    pub fn allows(&self, fields: &FieldPair) -> bool {
        self.allow.is_empty() || self.allow.any_allow(fields)
    }

    /// Block-list verdict for an item's fields
    pub fn blocks(&self, fields: &FieldPair) -> bool {
        !self.block.is_empty() && self.block.any_block(fields)
    }

    /// Decide whether an item survives
    pub fn decide(&self, fields: &FieldPair) -> Decision {
        Decision::from(self.allows(fields) && !self.blocks(fields))
    }

    /// Filter a whole feed document.
    ///
    /// Everything outside dropped items is preserved byte for byte. A
    /// passthrough filter returns the document without scanning it.
    pub fn filter(&self, document: &str) -> FilterOutcome {
        if self.is_passthrough() {
            return FilterOutcome::passthrough(document);
        }

        let spans = locate_items(document);
        let decisions: Vec<Decision> = spans
            .iter()
            .map(|span| {
                let fields = extract_fields(span.text);
                let decision = self.decide(&fields);
                trace!(start = span.start, title = %fields.title, %decision, "item decision");
                decision
            })
            .collect();

        let items_kept = decisions.iter().filter(|d| d.is_keep()).count();
        debug!(items = spans.len(), kept = items_kept, "filtered feed document");

        FilterOutcome {
            document: rebuild_document(document, &spans, &decisions),
            items_total: spans.len(),
            items_kept,
        }
    }
}

/// Check an item against an allow-list. An absent or empty list allows everything.
pub fn matches_allow_list(item_text: &str, allow_list: Option<&[String]>) -> bool {
    let allow = TermList::new(allow_list);
    allow.is_empty() || allow.any_allow(&extract_fields(item_text))
}

/// Check an item against a block-list. An absent or empty list blocks nothing.
pub fn matches_block_list(item_text: &str, block_list: Option<&[String]>) -> bool {
    let block = TermList::new(block_list);
    !block.is_empty() && block.any_block(&extract_fields(item_text))
}

/// Filter a feed document with one-off term lists
pub fn filter_feed_document(
    document: &str,
    allow_list: Option<&[String]>,
    block_list: Option<&[String]>,
) -> String {
    FeedFilter::from_lists(allow_list, block_list)
        .filter(document)
        .document
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn item(title: &str, description: &str) -> String {
        format!(
            "<item>\n  <title>{}</title>\n  <description>{}</description>\n</item>",
            title, description
        )
    }

    #[test]
    fn test_allow_list_entry_points() {
        let allow = terms(&["tech"]);
        assert!(matches_allow_list(
            &item("Tech News Item 1", "This is a tech news item"),
            Some(&allow)
        ));
        assert!(!matches_allow_list(
            &item("Non-Tech News Item", "This is not a tech news item"),
            Some(&allow)
        ));
        assert!(!matches_allow_list(
            &item("Entertainment News Item", "This is an entertainment news item"),
            Some(&allow)
        ));
        assert!(matches_allow_list(&item("anything", ""), None));
        assert!(matches_allow_list(&item("anything", ""), Some(&[])));
    }

    #[test]
    fn test_block_list_entry_points() {
        let block = terms(&["sponsored"]);
        assert!(matches_block_list(&item("Non-Sponsored Content", ""), Some(&block)));
        assert!(!matches_block_list(&item("Tech News", "updates"), Some(&block)));
        assert!(!matches_block_list(&item("Sponsored", ""), None));
        assert!(!matches_block_list(&item("Sponsored", ""), Some(&[])));
    }

    #[test]
    fn test_decide_combines_lists() {
        let filter = FeedFilter::new(
            &FilterConfig::new()
                .with_allow_list(["tech"])
                .with_block_list(["sponsored"]),
        );
        assert_eq!(filter.decide(&FieldPair::new("Tech News", "")), Decision::Keep);
        assert_eq!(
            filter.decide(&FieldPair::new("Sponsored tech", "")),
            Decision::Drop
        );
        assert_eq!(filter.decide(&FieldPair::new("Sports", "")), Decision::Drop);
    }

    #[test]
    fn test_block_only_keeps_unmatched() {
        let filter = FeedFilter::new(&FilterConfig::new().with_block_list(["sponsored"]));
        assert!(!filter.is_passthrough());
        assert_eq!(filter.decide(&FieldPair::new("Sports News", "")), Decision::Keep);
        assert_eq!(
            filter.decide(&FieldPair::new("Sponsored Content", "Advertisement")),
            Decision::Drop
        );
    }

    #[test]
    fn test_filter_document_allow() {
        let doc = format!(
            "<rss>\n{}\n{}\n{}\n</rss>",
            item("Tech News Item 1", "This is a tech news item"),
            item("Non-Tech News Item", "This is not a tech news item"),
            item("Technology News Item", "Gadgets"),
        );
        let allow = terms(&["tech"]);
        let out = filter_feed_document(&doc, Some(&allow), None);
        assert!(out.contains("Tech News Item 1"));
        assert!(!out.contains("Non-Tech News Item"));
        assert!(!out.contains("Technology News Item"));
        assert_eq!(out.matches("<item>").count(), 1);
    }

    #[test]
    fn test_outcome_counts() {
        let doc = format!(
            "<rss>{}{}{}</rss>",
            item("Tech News", ""),
            item("Sports News", ""),
            item("Sponsored Content", "")
        );
        let filter = FeedFilter::new(&FilterConfig::new().with_block_list(["sponsored"]));
        let outcome = filter.filter(&doc);
        assert_eq!(outcome.items_total, 3);
        assert_eq!(outcome.items_kept, 2);
        assert_eq!(outcome.items_dropped(), 1);
        assert!(!outcome.document.contains("Sponsored Content"));
    }

    #[test]
    fn test_neutral_lists_pass_through() {
        let doc = "<rss><item><title>x</title></item> trailing";
        assert_eq!(filter_feed_document(doc, None, None), doc);
        assert_eq!(filter_feed_document(doc, Some(&[]), Some(&[])), doc);
        assert_eq!(
            filter_feed_document(doc, Some(&terms(&[""])), Some(&terms(&[" "]))),
            doc
        );
    }

    #[test]
    fn test_document_without_items() {
        let doc = "<?xml version=\"1.0\"?><rss><channel><title>Test Feed</title></channel></rss>";
        let allow = terms(&["tech"]);
        assert_eq!(filter_feed_document(doc, Some(&allow), None), doc);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let doc = format!(
            "<rss>{} {} {}</rss>",
            item("Tech", ""),
            item("Sports", ""),
            item("tech sponsored", "")
        );
        let allow = terms(&["tech"]);
        let block = terms(&["sponsored"]);
        let once = filter_feed_document(&doc, Some(&allow), Some(&block));
        let twice = filter_feed_document(&once, Some(&allow), Some(&block));
        assert_eq!(once, twice);
    }
}
