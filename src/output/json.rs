//! JSON output formatting

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::tree::Entry;

/// One input path's result, written as a single JSON line.
#[derive(Debug, Serialize)]
pub struct ModuleReport<'a> {
    pub path: String,
    pub module: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<&'a Entry>,
}

impl<'a> ModuleReport<'a> {
    pub fn found(arg: &Path, module: &'a str, root: &'a Entry) -> Self {
        Self {
            path: arg.to_string_lossy().to_string(),
            module: Some(module),
            root: Some(root),
        }
    }

    pub fn missing(abs: &Path) -> Self {
        Self {
            path: abs.to_string_lossy().to_string(),
            module: None,
            root: None,
        }
    }
}

/// Write a report as one line of JSON.
pub fn write_json_line<W: Write>(out: &mut W, report: &ModuleReport<'_>) -> io::Result<()> {
    serde_json::to_writer(&mut *out, report).map_err(io::Error::other)?;
    writeln!(out)
}
