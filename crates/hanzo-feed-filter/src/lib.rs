//! # Hanzo Feed Filter
//!
//! Allow/block term filtering for RSS feed items.
//!
//! Items are kept or dropped based on whole-word matches of caller-supplied
//! terms in their `<title>` and `<description>`:
//!
//! - **Allow-list**: an item must match at least one term. A title that says
//!   `non-<term>` opts the item out of that term.
//! - **Block-list**: an item matching any term is dropped.
//!
//! Everything outside dropped items is preserved byte for byte.
//!
//! ## Quick Start
//!
//! ```rust
//! use hanzo_feed_filter::{FeedFilter, FilterConfig};
//!
//! let config = FilterConfig::new()
//!     .with_allow_list(["tech"])
//!     .with_block_list(["sponsored"]);
//! let filter = FeedFilter::new(&config);
//!
//! let feed = "<rss><channel>\
//!     <item><title>Tech News</title></item>\
//!     <item><title>Sponsored tech deals</title></item>\
//!     <item><title>Sports</title></item>\
//!     </channel></rss>";
//!
//! let outcome = filter.filter(feed);
//! assert_eq!(outcome.items_kept, 1);
//! assert_eq!(
//!     outcome.document,
//!     "<rss><channel><item><title>Tech News</title></item></channel></rss>"
//! );
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! document ──► locate_items ──► extract_fields ──► TermList ──► decide ──► rebuild_document
//!               (spans)          (title/desc)      (allow/block) (keep/drop)  (splice out drops)
//! ```
//!
//! [`TreeMirror`] applies the filter to every `*.xml` file under a directory
//! and copies all other files verbatim; the `feed-enhancer` binary wraps it.

pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod locator;
pub mod matcher;
pub mod mirror;
pub mod rebuild;
pub mod types;

pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use extract::extract_fields;
pub use filter::{filter_feed_document, matches_allow_list, matches_block_list, FeedFilter};
pub use locator::locate_items;
pub use matcher::{matches_allow_term, matches_block_term, TermList, TermMatcher};
pub use mirror::{MirrorStats, TreeMirror};
pub use rebuild::rebuild_document;
pub use types::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::FilterConfig;
    pub use crate::error::{FilterError, Result};
    pub use crate::filter::FeedFilter;
    pub use crate::mirror::TreeMirror;
    pub use crate::types::*;
}
