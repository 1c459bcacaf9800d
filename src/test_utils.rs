//! Test utilities for creating temporary module trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::module::DECLARATION_FILE;

/// A temporary directory for building module layouts.
///
/// The directory is removed when dropped.
pub struct TestModule {
    dir: TempDir,
}

impl TestModule {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a temporary directory holding a `go.mod` for `module`.
    pub fn with_module(module: &str) -> Self {
        let this = Self::new();
        this.add_file(DECLARATION_FILE, &format!("module {module}\n\ngo 1.21\n"));
        this
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write a Go file declaring `package`.
    pub fn add_go_file(&self, path: &str, package: &str) -> PathBuf {
        self.add_file(path, &format!("package {package}\n"))
    }

    /// Create a directory, with parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestModule {
    fn default() -> Self {
        Self::new()
    }
}
