//! Removal of directories that hold no source files

use super::entry::Entry;

/// Drop every directory below `entry` whose subtree has no files.
///
/// Runs post-order and keeps the order of the surviving children. Returns
/// true when `entry` is itself a directory left with no children; files
/// never report empty. Callers still render a root that reports empty.
pub fn prune(entry: &mut Entry) -> bool {
    entry.children.retain_mut(|child| !prune(child));
    entry.is_dir && entry.children.is_empty()
}
