//! Attaches parsed sources to the file entries of a tree

use tracing::debug;

use crate::error::{Error, Result};
use crate::source::SourceParser;

use super::entry::Entry;
use super::filter::FileFilter;

/// Parse every directory in the tree once and hand each file entry its
/// parsed unit.
///
/// A directory whose files declare more than one package is an error. Files
/// the parser did not return are left without a source.
pub fn annotate<P: SourceParser + ?Sized>(
    entry: &mut Entry,
    parser: &P,
    filter: &FileFilter,
) -> Result<()> {
    if !entry.is_dir {
        return Ok(());
    }

    let packages = parser.parse_dir(&entry.path, &|name: &str| filter.accepts_file(name))?;
    if packages.len() > 1 {
        return Err(Error::ConflictingPackages {
            dir: entry.path.clone(),
            packages: packages.into_keys().collect(),
        });
    }

    let mut files = packages
        .into_values()
        .next()
        .map(|package| {
            debug!(
                dir = %entry.path.display(),
                package = %package.name,
                files = package.files.len(),
                "parsed package"
            );
            package.files
        })
        .unwrap_or_default();

    for child in &mut entry.children {
        if child.is_dir {
            annotate(child, parser, filter)?;
        } else {
            child.source = files.remove(&child.path);
        }
    }
    Ok(())
}
