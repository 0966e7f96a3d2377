//! Title/description extraction from item markup

use crate::types::FieldPair;
use once_cell::sync::Lazy;
use regex::Regex;

// `.` stops at line breaks, so an element split across lines counts as absent.
static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<title>(.*?)</title>").unwrap());
static DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<description>(.*?)</description>").unwrap());

/// Pull the lower-cased title and description out of an item.
///
/// Only the first occurrence of each element is used. Entities and CDATA
/// sections are left as they are.
pub fn extract_fields(item_text: &str) -> FieldPair {
    FieldPair::new(
        first_capture(&TITLE, item_text),
        first_capture(&DESCRIPTION, item_text),
    )
}

fn first_capture<'a>(re: &Regex, text: &'a str) -> &'a str {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}
