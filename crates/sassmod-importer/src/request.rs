use std::path::{Path, PathBuf};

/// Strings Sass hosts pass as the previous file for data compilations.
pub const ENTRY_SENTINELS: [&str; 2] = ["stdin", ""];

/// The file that issued an import.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreviousFile {
    /// No containing file; the import comes from the entry point.
    Entry,
    Path(PathBuf),
}

impl PreviousFile {
    /// Interpret the host's previous-file string, mapping sentinels to
    /// [`PreviousFile::Entry`].
    pub fn parse(previous: &str) -> Self {
        if ENTRY_SENTINELS.contains(&previous) {
            PreviousFile::Entry
        } else {
            PreviousFile::Path(PathBuf::from(previous))
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            PreviousFile::Entry => None,
            PreviousFile::Path(path) => Some(path),
        }
    }

    /// Directory containing the previous file.
    pub fn dir(&self) -> Option<&Path> {
        self.path()
            .map(|path| path.parent().unwrap_or_else(|| Path::new("")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportRequest {
    /// Specifier exactly as written after `@import`.
    pub url: String,
    pub previous: PreviousFile,
}

impl ImportRequest {
    pub fn new(url: impl Into<String>, previous: PreviousFile) -> Self {
        Self {
            url: url.into(),
            previous,
        }
    }

    /// Request in the host's string form.
    pub fn from_host(url: &str, previous: &str) -> Self {
        Self::new(url, PreviousFile::parse(previous))
    }

    pub fn entry(url: impl Into<String>) -> Self { Self::new(url, PreviousFile::Entry) }
}
