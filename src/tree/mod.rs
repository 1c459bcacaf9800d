//! Directory tree building
//!
//! A module's tree is produced in three passes over an owned [`Entry`] tree:
//!
//! - [`TreeWalker`] lists directories and keeps the source files that pass the [`FileFilter`]
//! - [`prune`] drops directories left without any files
//! - [`annotate`] attaches each file's parsed source

mod annotate;
mod config;
mod entry;
mod filter;
mod prune;
mod walker;

pub use annotate::annotate;
pub use config::WalkerConfig;
pub use entry::Entry;
pub use filter::FileFilter;
pub use prune::prune;
pub use walker::TreeWalker;

pub(crate) use walker::read_sorted;

use crate::error::Result;
use crate::source::SourceParser;

/// Walk, prune and annotate the tree below `root`.
pub fn build<P: SourceParser + ?Sized>(
    root: &mut Entry,
    walker: &TreeWalker,
    parser: &P,
) -> Result<()> {
    walker.walk(root)?;
    prune(root);
    annotate(root, parser, walker.filter())
}
