//! Go module discovery
//!
//! Finds the `go.mod` that owns a path by searching upward through its
//! ancestors and reads the module path out of its `module` directive.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::string_utils::{UnquoteError, strip_line_comment, unquote};

/// Name of the module declaration file.
pub const DECLARATION_FILE: &str = "go.mod";

const MODULE_KEYWORD: &str = "module";

/// Find the module that owns `start`.
///
/// `start` and each of its ancestors are checked in turn for a readable
/// `go.mod` with a usable `module` directive. The search stops at the
/// filesystem root, which is never consulted itself. Unreadable declaration
/// files are treated as absent.
pub fn locate_module(start: &Path) -> Result<Option<String>> {
    let mut dir = start;
    while let Some(parent) = dir.parent() {
        let mod_file = dir.join(DECLARATION_FILE);
        match std::fs::read(&mod_file) {
            Ok(data) => {
                let content = String::from_utf8_lossy(&data);
                match parse_module_directive(&content) {
                    Ok(Some(name)) => {
                        debug!(path = %mod_file.display(), module = %name, "found module");
                        return Ok(Some(name));
                    }
                    Ok(None) => trace!(path = %mod_file.display(), "no module directive"),
                    Err(source) => {
                        return Err(Error::MalformedModulePath {
                            path: mod_file,
                            source,
                        });
                    }
                }
            }
            Err(err) => trace!(path = %mod_file.display(), %err, "declaration file not readable"),
        }
        dir = parent;
    }
    Ok(None)
}

/// Extract the module path from the contents of a `go.mod` file.
///
/// Returns the first line that parses as a module directive. Lines that are
/// only `module`, or where the keyword runs straight into other text, are
/// skipped.
pub fn parse_module_directive(content: &str) -> Result<Option<String>, UnquoteError> {
    for line in content.split('\n') {
        let line = strip_line_comment(line).trim();
        let Some(rest) = line.strip_prefix(MODULE_KEYWORD) else {
            continue;
        };

        let trimmed = rest.trim();
        if trimmed.len() == rest.len() || trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('"') || trimmed.starts_with('`') {
            return unquote(trimmed).map(Some);
        }
        return Ok(Some(trimmed.to_string()));
    }
    Ok(None)
}

/// Make `path` absolute against the current directory and clean it lexically,
/// resolving `.` and `..` components without touching the filesystem.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| Error::io(path, e))?;
        cwd.join(path)
    };

    let mut cleaned = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    Ok(cleaned)
}
