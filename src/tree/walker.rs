//! TreeWalker - builds the full tree in memory

use std::fs::DirEntry;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::config::WalkerConfig;
use super::entry::Entry;
use super::filter::FileFilter;

/// Walks a directory and collects every entry that passes the file filter.
///
/// Directories are always descended into; empty ones are left for
/// [`prune`](super::prune) to remove. Any listing failure aborts the walk.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: FileFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = FileFilter::new(&config);
        Self { config, filter }
    }

    pub fn filter(&self) -> &FileFilter {
        &self.filter
    }

    /// Populate `root`'s children recursively. The root stays at depth 0.
    pub fn walk(&self, root: &mut Entry) -> Result<()> {
        self.walk_entry(root, 0)
    }

    fn walk_entry(&self, entry: &mut Entry, depth: usize) -> Result<()> {
        if !entry.is_dir {
            return Ok(());
        }
        if self.at_max_depth(depth) {
            trace!(path = %entry.path.display(), depth, "depth limit reached");
            return Ok(());
        }

        let listing = read_sorted(&entry.path)?;
        debug!(path = %entry.path.display(), entries = listing.len(), "listing directory");

        let depth = depth + 1;
        for dir_entry in listing {
            let mut child = Entry::from_dir_entry(&dir_entry, depth)?;
            if !child.is_dir && !self.filter.accepts_file(&child.name) {
                continue;
            }
            self.walk_entry(&mut child, depth)?;
            entry.children.push(child);
        }
        Ok(())
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

/// List a directory, sorted by file name.
pub(crate) fn read_sorted(path: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = std::fs::read_dir(path)
        .and_then(|entries| entries.collect::<std::io::Result<Vec<_>>>())
        .map_err(|e| Error::io(path, e))?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}
