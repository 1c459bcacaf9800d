//! Tree formatter
//!
//! Renders an [`Entry`] tree pre-order, one line per entry, prefixed with
//! box-drawing connectors that track whether each ancestor was the last
//! child of its parent.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::tree::Entry;

use super::config::OutputConfig;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// Build the connector prefix for an entry.
///
/// `ancestors` holds one flag per level below the root, true when the node
/// at that level is the last child of its parent. The deepest flag picks the
/// entry's own connector; shallower flags continue or close the vertical
/// bars of the levels above.
pub fn line_prefix(ancestors: &[bool]) -> String {
    let mut prefix = String::with_capacity(ancestors.len() * PIPE.len());
    if let Some((&is_last, shallower)) = ancestors.split_last() {
        for &closed in shallower {
            prefix.push_str(if closed { BLANK } else { PIPE });
        }
        prefix.push_str(if is_last { LAST_BRANCH } else { BRANCH });
    }
    prefix
}

/// Formatter for text tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the tree as plain text.
    pub fn format(&self, root: &Entry) -> String {
        let mut buffer = Buffer::no_color();
        // Writes into an in-memory buffer cannot fail.
        let _ = self.write_tree(&mut buffer, root);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Write the header line for a path that belongs to a module.
    pub fn write_header<W: WriteColor>(
        &self,
        out: &mut W,
        arg: &Path,
        module: &str,
    ) -> io::Result<()> {
        writeln!(out, "{} ({})", arg.display(), module)
    }

    /// Write the line for a path that has no module.
    pub fn write_no_module<W: WriteColor>(&self, out: &mut W, abs: &Path) -> io::Result<()> {
        writeln!(out, "{} [no module]", abs.display())
    }

    /// Write the tree, root first and without a prefix.
    pub fn write_tree<W: WriteColor>(&self, out: &mut W, root: &Entry) -> io::Result<()> {
        self.write_entry(out, root, &[])
    }

    fn write_entry<W: WriteColor>(
        &self,
        out: &mut W,
        entry: &Entry,
        ancestors: &[bool],
    ) -> io::Result<()> {
        write!(out, "{}", line_prefix(ancestors))?;
        if entry.is_dir && self.config.use_color {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}", entry.name)?;
            out.reset()?;
        } else {
            write!(out, "{}", entry.name)?;
        }
        writeln!(out)?;

        let last = entry.children.len().saturating_sub(1);
        for (i, child) in entry.children.iter().enumerate() {
            let mut child_ancestors = Vec::with_capacity(ancestors.len() + 1);
            child_ancestors.extend_from_slice(ancestors);
            child_ancestors.push(i == last);
            self.write_entry(out, child, &child_ancestors)?;
        }
        Ok(())
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}
