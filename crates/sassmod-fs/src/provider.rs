//! Asynchronous filesystem abstraction.
//!
//! The importer and the package resolvers never touch `std::fs` or
//! `tokio::fs` directly for stat/read calls; they go through [`FileSystem`]
//! so callers can observe or replace every I/O boundary.

use std::path::Path;

use crate::error::{Result, from_io};

/// Kind of an existing filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
}

impl FileKind {
    pub fn is_file(self) -> bool { matches!(self, FileKind::File) }

    pub fn is_dir(self) -> bool { matches!(self, FileKind::Dir) }
}

#[async_trait::async_trait]
pub trait FileSystem: Send + Sync {
    /// Existence and kind of `path`. `Ok(None)` when nothing is there.
    async fn stat(&self, path: &Path) -> Result<Option<FileKind>>;

    /// Full UTF-8 contents of the file at `path`.
    async fn read_to_string(&self, path: &Path) -> Result<String>;

    async fn is_file(&self, path: &Path) -> bool {
        matches!(self.stat(path).await, Ok(Some(kind)) if kind.is_file())
    }

    async fn is_dir(&self, path: &Path) -> bool {
        matches!(self.stat(path).await, Ok(Some(kind)) if kind.is_dir())
    }
}

/// Production filesystem backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

#[async_trait::async_trait]
impl FileSystem for TokioFileSystem {
    async fn stat(&self, path: &Path) -> Result<Option<FileKind>> {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_dir() => Ok(Some(FileKind::Dir)),
            Ok(_) => Ok(Some(FileKind::File)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(from_io(path, err)),
        }
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|err| from_io(path, err))
    }
}
