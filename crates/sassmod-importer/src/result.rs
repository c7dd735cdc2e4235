use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Outcome handed back to the Sass engine.
///
/// Serializes to the value importer hooks return: `{"contents": ...}`,
/// `{"file": ...}`, or the original specifier as a bare string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportResult {
    /// Inline stylesheet text, used for plain CSS targets.
    Contents(String),
    /// Path for the engine to load and compile.
    File(PathBuf),
    /// Nothing matched; carries the original specifier.
    Unresolved(String),
}

impl ImportResult {
    pub fn is_resolved(&self) -> bool { !matches!(self, ImportResult::Unresolved(_)) }

    pub fn contents(&self) -> Option<&str> {
        match self {
            ImportResult::Contents(text) => Some(text),
            _ => None,
        }
    }

    pub fn file(&self) -> Option<&Path> {
        match self {
            ImportResult::File(path) => Some(path),
            _ => None,
        }
    }
}

impl Serialize for ImportResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ImportResult::Contents(text) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("contents", text)?;
                map.end()
            }
            ImportResult::File(path) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("file", &path.to_string_lossy())?;
                map.end()
            }
            ImportResult::Unresolved(url) => serializer.serialize_str(url),
        }
    }
}
