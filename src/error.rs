//! Error types shared by every stage of the pipeline

use std::io;
use std::path::PathBuf;

use crate::string_utils::UnquoteError;

/// Fatal errors. Anything reported here stops the whole run.
///
/// A missing module is not an error: `locate_module` returns `Ok(None)` and
/// the caller skips that path.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("malformed module path in {}: {source}", path.display())]
    MalformedModulePath {
        path: PathBuf,
        #[source]
        source: UnquoteError,
    },

    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("multiple packages in {}: {}", dir.display(), packages.join(", "))]
    ConflictingPackages { dir: PathBuf, packages: Vec<String> },

    #[error("{}: expected 'package' clause", path.display())]
    MissingPackageClause { path: PathBuf },

    #[error("error writing output: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
