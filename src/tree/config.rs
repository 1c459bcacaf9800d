//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Files must end with this suffix to be listed
    pub source_suffix: String,
    /// Files ending with this suffix are never listed, even if they match `source_suffix`
    pub test_suffix: String,
    /// Directories at this depth or deeper are not listed. `None` walks everything.
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            source_suffix: ".go".to_string(),
            test_suffix: "_test.go".to_string(),
            max_depth: None,
        }
    }
}
