//! Mirror a directory tree, filtering feed files on the way
//!
//! Every directory under the input root is recreated under the output root.
//! Files named `*.xml` are treated as feeds and run through the
//! [`FeedFilter`]; everything else is copied byte for byte.

use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use crate::filter::FeedFilter;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Suffix identifying feed files
pub const FEED_SUFFIX: &str = ".xml";

/// Counters for one mirror run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorStats {
    /// Feed files rewritten through the filter
    pub feeds_filtered: usize,
    /// Files copied verbatim (including feeds when filtering is off)
    pub files_copied: usize,
    /// Items found across filtered feeds
    pub items_seen: usize,
    /// Items kept across filtered feeds
    pub items_kept: usize,
    /// Directories created under the output root
    pub directories_created: usize,
}

/// Copies an input tree to an output tree, filtering feeds
pub struct TreeMirror {
    filter: Option<FeedFilter>,
}

impl TreeMirror {
    /// Create a mirror. Without a config every file is copied verbatim.
    pub fn new(config: Option<FilterConfig>) -> Self {
        Self {
            filter: config.as_ref().map(FeedFilter::new),
        }
    }

    /// Whether a file name marks a feed
    pub fn is_feed(file_name: &str) -> bool {
        file_name.ends_with(FEED_SUFFIX)
    }

    /// Mirror `input` into `output`
    pub fn run(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<MirrorStats> {
        let input = input.as_ref();
        let output = output.as_ref();

        if !input.is_dir() {
            return Err(FilterError::MissingInput(input.to_path_buf()));
        }
        fs::create_dir_all(output).map_err(|e| FilterError::io(output, e))?;

        // An output root nested inside the input root must not be walked.
        let output_canonical = output.canonicalize().ok();

        let mut stats = MirrorStats::default();
        let walker = WalkDir::new(input)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                output_canonical.as_deref().map_or(true, |out| {
                    e.path().canonicalize().map_or(true, |p| p != out)
                })
            });

        for entry in walker {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(input)
                .map_err(|e| FilterError::Walk(e.to_string()))?;
            let dest = output.join(relative);

            if entry.file_type().is_dir() {
                if !dest.is_dir() {
                    stats.directories_created += 1;
                }
                fs::create_dir_all(&dest).map_err(|e| FilterError::io(&dest, e))?;
            } else if entry.path().is_file() {
                let name = entry.file_name().to_string_lossy();
                self.process_file(entry.path(), &dest, &name, &mut stats)?;
            } else {
                debug!(path = %entry.path().display(), "skipping non-regular entry");
            }
        }

        info!(
            input = %input.display(),
            output = %output.display(),
            feeds_filtered = stats.feeds_filtered,
            files_copied = stats.files_copied,
            items_seen = stats.items_seen,
            items_kept = stats.items_kept,
            "mirrored feed tree"
        );
        Ok(stats)
    }

    fn process_file(
        &self,
        src: &Path,
        dest: &Path,
        name: &str,
        stats: &mut MirrorStats,
    ) -> Result<()> {
        let filter = match &self.filter {
            Some(filter) if Self::is_feed(name) => filter,
            _ => return copy_verbatim(src, dest, stats),
        };

        let bytes = fs::read(src).map_err(|e| FilterError::io(src, e))?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                warn!(path = %src.display(), "feed is not valid UTF-8, copying unfiltered");
                return copy_verbatim(src, dest, stats);
            }
        };

        let outcome = filter.filter(&content);
        fs::write(dest, &outcome.document).map_err(|e| FilterError::io(dest, e))?;

        debug!(
            path = %src.display(),
            items = outcome.items_total,
            kept = outcome.items_kept,
            "filtered feed"
        );
        stats.feeds_filtered += 1;
        stats.items_seen += outcome.items_total;
        stats.items_kept += outcome.items_kept;
        Ok(())
    }
}

fn copy_verbatim(src: &Path, dest: &Path, stats: &mut MirrorStats) -> Result<()> {
    fs::copy(src, dest).map_err(|e| FilterError::io(dest, e))?;
    debug!(path = %src.display(), "copied file");
    stats.files_copied += 1;
    Ok(())
}
