//! Locate `<item>` elements in a feed document

use crate::types::ItemSpan;
use once_cell::sync::Lazy;
use regex::Regex;

// Items are assumed flat; a nested <item> ends at the first </item>.
static ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<item\b[^>]*>.*?</item>").unwrap());

/// Find every `<item ...>...</item>` element in document order.
///
/// Offsets are byte positions in `document`, so spans can be spliced out of
/// the original text directly.
pub fn locate_items(document: &str) -> Vec<ItemSpan<'_>> {
    ITEM.find_iter(document)
        .map(|m| ItemSpan {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_in_order() {
        let doc = "<rss><item>a</item>\n<item>b</item></rss>";
        let spans = locate_items(doc);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "<item>a</item>");
        assert_eq!(spans[1].text, "<item>b</item>");
        for span in &spans {
            assert_eq!(&doc[span.start..span.end], span.text);
        }
        assert!(spans[0].end <= spans[1].start);
    }

    #[test]
    fn test_attributes_and_case() {
        let doc = r#"<ITEM rdf:about="x">one</Item><item id='2'>two</item>"#;
        let spans = locate_items(doc);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, r#"<ITEM rdf:about="x">one</Item>"#);
    }

    #[test]
    fn test_multiline_items() {
        let doc = "<channel>\n  <item>\n    <title>T</title>\n  </item>\n</channel>";
        let spans = locate_items(doc);
        assert_eq!(spans.len(), 1);
        assert!(spans[0].text.starts_with("<item>"));
        assert!(spans[0].text.ends_with("</item>"));
    }

    #[test]
    fn test_longer_tag_names_ignored() {
        let doc = "<items><itemref>x</itemref></items>";
        assert!(locate_items(doc).is_empty());
    }

    #[test]
    fn test_unclosed_item_ignored() {
        let doc = "<rss><item><title>dangling</title></rss>";
        assert!(locate_items(doc).is_empty());
    }

    #[test]
    fn test_no_items() {
        assert!(locate_items("").is_empty());
        assert!(locate_items("<rss><channel><title>Empty</title></channel></rss>").is_empty());
    }

    #[test]
    fn test_multibyte_offsets() {
        let doc = "<title>Ünïcødé 📰</title><item>日本語</item><item>b</item>";
        let spans = locate_items(doc);
        assert_eq!(spans.len(), 2);
        assert_eq!(&doc[spans[0].start..spans[0].end], "<item>日本語</item>");
        assert_eq!(&doc[spans[1].start..spans[1].end], "<item>b</item>");
    }

    #[test]
    fn test_identical_items_get_distinct_offsets() {
        let doc = "<item>same</item><item>same</item>";
        let spans = locate_items(doc);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[1].start, spans[0].end);
    }

    #[test]
    fn test_nested_item_mis_segments() {
        let doc = "<item>outer<item>inner</item>tail</item>";
        let spans = locate_items(doc);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "<item>outer<item>inner</item>");
    }
}
