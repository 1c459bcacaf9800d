//! Source parsing for package directories
//!
//! The tree annotator hands each directory to a [`SourceParser`], which reads
//! the qualifying files and groups them by the package they declare.

mod go;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::error::Result;

pub use go::{GoParser, parse_source};

/// The parsed form of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Name from the file's `package` clause
    pub package: String,
    /// Import paths in declaration order
    pub imports: Vec<String>,
}

/// Files of one directory that declare the same package.
#[derive(Debug, Clone, Default)]
pub struct Package {
    pub name: String,
    /// Parsed files keyed by absolute path
    pub files: HashMap<PathBuf, SourceFile>,
}

/// Parses all source files of a directory in one go.
pub trait SourceParser {
    /// Parse the files in `dir` whose names pass `include`, returning the
    /// packages found keyed by package name.
    fn parse_dir(
        &self,
        dir: &Path,
        include: &dyn Fn(&str) -> bool,
    ) -> Result<BTreeMap<String, Package>>;
}
