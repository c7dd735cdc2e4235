//! Error types for the importer.
//!
//! Misses are never errors here; they end as [`ImportResult::Unresolved`].
//!
//! [`ImportResult::Unresolved`]: crate::ImportResult::Unresolved

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read stylesheet {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: sassmod_fs::Error,
    },
}

pub type Result<T> = std::result::Result<T, ImportError>;
