//! Lightweight Go source parsing using regex patterns
//!
//! Only the file header is read: the `package` clause and the import
//! declarations that follow it.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::{Error, Result};
use crate::string_utils::strip_line_comment;
use crate::tree::read_sorted;

use super::{Package, SourceFile, SourceParser};

const GO_SUFFIX: &str = ".go";

static PACKAGE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^package\s+([\p{L}_][\p{L}\p{Nd}_]*)").expect("PACKAGE_CLAUSE regex is invalid")
});

static IMPORT_SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^import\s+(?:[\p{L}_.][\p{L}\p{Nd}_]*\s+)?"([^"]+)""#)
        .expect("IMPORT_SINGLE regex is invalid")
});

static IMPORT_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:[\p{L}_.][\p{L}\p{Nd}_]*\s+)?"([^"]+)""#)
        .expect("IMPORT_SPEC regex is invalid")
});

static TOP_LEVEL_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:func|type|var|const)\b").expect("TOP_LEVEL_DECL regex is invalid")
});

/// Parser for Go package directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParser;

impl SourceParser for GoParser {
    fn parse_dir(
        &self,
        dir: &Path,
        include: &dyn Fn(&str) -> bool,
    ) -> Result<BTreeMap<String, Package>> {
        let mut packages: BTreeMap<String, Package> = BTreeMap::new();

        for dir_entry in read_sorted(dir)? {
            let path = dir_entry.path();
            let file_type = dir_entry.file_type().map_err(|e| Error::io(&path, e))?;
            let name = dir_entry.file_name().to_string_lossy().to_string();
            if file_type.is_dir() || !name.ends_with(GO_SUFFIX) || !include(&name) {
                continue;
            }

            let data = std::fs::read(&path).map_err(|e| Error::io(&path, e))?;
            let file = parse_source(&String::from_utf8_lossy(&data))
                .ok_or_else(|| Error::MissingPackageClause { path: path.clone() })?;
            trace!(path = %path.display(), package = %file.package, "parsed file");

            packages
                .entry(file.package.clone())
                .or_insert_with(|| Package {
                    name: file.package.clone(),
                    ..Default::default()
                })
                .files
                .insert(path, file);
        }

        Ok(packages)
    }
}

/// Parse the header of a Go source file.
///
/// Returns `None` when the file does not start with a `package` clause
/// (after comments and whitespace).
pub fn parse_source(content: &str) -> Option<SourceFile> {
    let rest = skip_comments(content.trim_start_matches('\u{feff}'))?;
    let caps = PACKAGE_CLAUSE.captures(rest)?;
    let package = caps.get(1)?.as_str().to_string();
    let body = &rest[caps.get(0)?.end()..];

    Some(SourceFile {
        package,
        imports: extract_imports(body),
    })
}

/// Skip whitespace and comments at the start of `content`.
fn skip_comments(content: &str) -> Option<&str> {
    let mut rest = content;
    loop {
        rest = rest.trim_start();
        if let Some(after) = rest.strip_prefix("//") {
            rest = after.split_once('\n').map_or("", |(_, next)| next);
        } else if let Some(after) = rest.strip_prefix("/*") {
            rest = after.split_once("*/")?.1;
        } else {
            return Some(rest);
        }
    }
}

fn extract_imports(body: &str) -> Vec<String> {
    let mut imports = Vec::new();
    let mut in_import_block = false;

    for line in body.lines() {
        let trimmed = strip_line_comment(line).trim();

        if in_import_block {
            let spec = match trimmed.strip_suffix(')') {
                Some(spec) => {
                    in_import_block = false;
                    spec.trim()
                }
                None => trimmed,
            };
            push_capture(&IMPORT_SPEC, spec, &mut imports);
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("import") {
            if let Some(group) = rest.trim_start().strip_prefix('(') {
                let group = group.trim();
                match group.strip_suffix(')') {
                    Some(spec) => push_capture(&IMPORT_SPEC, spec.trim(), &mut imports),
                    None => {
                        in_import_block = true;
                        push_capture(&IMPORT_SPEC, group, &mut imports);
                    }
                }
            } else {
                push_capture(&IMPORT_SINGLE, trimmed, &mut imports);
            }
            continue;
        }

        if TOP_LEVEL_DECL.is_match(trimmed) {
            break;
        }
    }

    imports
}

fn push_capture(pattern: &Regex, text: &str, out: &mut Vec<String>) {
    if let Some(path) = pattern.captures(text).and_then(|caps| caps.get(1)) {
        out.push(path.as_str().to_string());
    }
}
