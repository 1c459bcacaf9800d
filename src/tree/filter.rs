//! File name filtering for tree walking

use super::config::WalkerConfig;

/// Decides which files belong in the tree, by name alone.
///
/// Directories are not subject to the filter; the walker always descends.
#[derive(Debug, Clone)]
pub struct FileFilter {
    source_suffix: String,
    test_suffix: String,
}

impl FileFilter {
    pub fn new(config: &WalkerConfig) -> Self {
        Self {
            source_suffix: config.source_suffix.clone(),
            test_suffix: config.test_suffix.clone(),
        }
    }

    /// Check if a file with this name should be included.
    pub fn accepts_file(&self, name: &str) -> bool {
        name.ends_with(&self.source_suffix) && !name.ends_with(&self.test_suffix)
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::new(&WalkerConfig::default())
    }
}
