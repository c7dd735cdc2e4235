//! Error types for package resolution.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not a package specifier: '{0}'")]
    InvalidSpecifier(String),

    #[error("package '{0}' not found")]
    NotFound(String),

    #[error("malformed manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("package '{package}' has no file for entry '{entry}'")]
    EntryNotFound { package: String, entry: String },

    #[error(transparent)]
    Fs(#[from] sassmod_fs::Error),
}

impl Error {
    /// Whether this is a plain miss rather than a broken package.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_) | Error::InvalidSpecifier(_) | Error::EntryNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
