//! Per-importer memo of finished resolutions.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::result::ImportResult;

/// Maps an original specifier to its finished result.
///
/// Entries are only written once a resolution is complete, so an in-flight
/// lookup is never observable. Nothing is evicted; the cache lives as long
/// as the importer that owns it.
#[derive(Debug, Default)]
pub struct AliasCache {
    entries: Mutex<HashMap<String, ImportResult>>,
}

impl AliasCache {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, url: &str) -> Option<ImportResult> { self.lock().get(url).cloned() }

    /// Store `result` under `url`. A concurrent resolution of the same url
    /// may already have stored an equal value; the later write wins.
    pub fn insert(&self, url: impl Into<String>, result: ImportResult) {
        self.lock().insert(url.into(), result);
    }

    pub fn contains(&self, url: &str) -> bool { self.lock().contains_key(url) }

    pub fn len(&self) -> usize { self.lock().len() }

    pub fn is_empty(&self) -> bool { self.lock().is_empty() }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ImportResult>> {
        // a panic while holding the lock cannot leave a half-written entry
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
