//! Resolution strategies tried in order by the importer.
//!
//! Each [`Strategy`] either produces a [`Candidate`] or passes. The importer
//! stops at the first candidate, so once a stage settles a specifier the
//! remaining stages never run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sassmod_fs::find_partial;
use sassmod_package::{PackageResolver, ResolveOptions};

use crate::request::PreviousFile;

/// Everything a strategy may consult for one request.
#[derive(Debug)]
pub struct Lookup<'a> {
    pub url: &'a str,
    pub previous: &'a PreviousFile,
    /// Absolute directory of the previous file, or the importer's basedir for the
    /// entry point.
    pub base_dir: PathBuf,
    pub include_paths: &'a [PathBuf],
    pub resolve: ResolveOptions,
}

/// A located target, not yet finalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    /// The path is final as written and must not be re-anchored or
    /// completed.
    pub settled: bool,
}

impl Candidate {
    pub fn settled(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            settled: true,
        }
    }

    pub fn located(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            settled: false,
        }
    }
}

#[async_trait::async_trait]
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;

    async fn attempt(&self, lookup: &Lookup<'_>) -> Option<Candidate>;
}

/// Relative or absolute specifiers, and partials found on disk next to the
/// importing file or under an include path.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStrategy;

impl LocalStrategy {
    fn search_dirs<'a>(lookup: &'a Lookup<'_>) -> impl Iterator<Item = &'a Path> {
        std::iter::once(lookup.base_dir.as_path())
            .chain(lookup.include_paths.iter().map(PathBuf::as_path))
    }
}

#[async_trait::async_trait]
impl Strategy for LocalStrategy {
    fn name(&self) -> &str { "local" }

    async fn attempt(&self, lookup: &Lookup<'_>) -> Option<Candidate> {
        if lookup.url.starts_with('.') || lookup.url.starts_with('/') {
            return Some(Candidate::settled(lookup.url));
        }

        Self::search_dirs(lookup)
            .find_map(|dir| find_partial(dir, lookup.url))
            .map(Candidate::settled)
    }
}

/// Delegates to a package resolver; any resolver error is a miss.
pub struct PackageStrategy {
    resolver: Arc<dyn PackageResolver>,
}

impl PackageStrategy {
    pub fn new(resolver: Arc<dyn PackageResolver>) -> Self { Self { resolver } }
}

#[async_trait::async_trait]
impl Strategy for PackageStrategy {
    fn name(&self) -> &str { self.resolver.name() }

    async fn attempt(&self, lookup: &Lookup<'_>) -> Option<Candidate> {
        match self.resolver.resolve(lookup.url, &lookup.resolve).await {
            Ok(path) => Some(Candidate::located(path)),
            Err(err) if err.is_not_found() => {
                tracing::trace!(resolver = self.name(), url = lookup.url, %err, "package miss");
                None
            }
            Err(err) => {
                tracing::debug!(resolver = self.name(), url = lookup.url, %err, "package lookup failed");
                None
            }
        }
    }
}
