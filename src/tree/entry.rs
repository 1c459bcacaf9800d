//! The in-memory tree node

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Error, Result};
use crate::source::SourceFile;

/// A file or directory in the walked tree.
///
/// Children are owned by their parent and kept in listing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Distance from the root entry, which sits at 0.
    pub depth: usize,
    pub children: Vec<Entry>,
    /// Parsed contents, for file entries inside a package directory.
    pub source: Option<SourceFile>,
}

impl Entry {
    /// Build the root entry for `path`, following symlinks.
    pub fn root(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, path.to_path_buf(), metadata.is_dir(), 0))
    }

    /// Build an entry from a directory listing. Symlinks are not followed,
    /// so a link to a directory is treated as a file.
    pub fn from_dir_entry(dir_entry: &DirEntry, depth: usize) -> Result<Self> {
        let path = dir_entry.path();
        let file_type = dir_entry.file_type().map_err(|e| Error::io(&path, e))?;
        let name = dir_entry.file_name().to_string_lossy().to_string();
        Ok(Self::new(name, path, file_type.is_dir(), depth))
    }

    pub fn new(name: impl Into<String>, path: PathBuf, is_dir: bool, depth: usize) -> Self {
        Self {
            name: name.into(),
            path,
            is_dir,
            depth,
            children: Vec::new(),
            source: None,
        }
    }

    /// The directory containing this entry.
    pub fn parent_path(&self) -> &Path {
        self.path.parent().unwrap_or(self.path.as_path())
    }

    /// Count the files in this subtree, this entry included.
    pub fn file_count(&self) -> usize {
        if self.is_dir {
            self.children.iter().map(Entry::file_count).sum()
        } else {
            1
        }
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", if self.is_dir { "dir" } else { "file" })?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("path", &self.path.to_string_lossy())?;
        if self.is_dir {
            map.serialize_entry("children", &self.children)?;
        } else if let Some(source) = &self.source {
            map.serialize_entry("package", &source.package)?;
        }
        map.end()
    }
}
