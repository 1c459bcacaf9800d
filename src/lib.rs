//! modtree - show the Go source files that make up a module

pub mod error;
pub mod logging;
pub mod module;
pub mod output;
pub mod source;
pub mod string_utils;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use module::{absolutize, locate_module};
pub use output::{ModuleReport, OutputConfig, TreeFormatter, write_json_line};
pub use source::{GoParser, SourceFile, SourceParser};
pub use tree::{Entry, FileFilter, TreeWalker, WalkerConfig, annotate, prune};
