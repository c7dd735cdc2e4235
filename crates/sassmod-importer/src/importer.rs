use std::path::{Path, PathBuf};
use std::sync::Arc;

use sassmod_fs::{FileSystem, TokioFileSystem, find_partial};
use sassmod_package::{LayoutResolver, ResolveOptions, is_stylesheet};

use crate::cache::AliasCache;
use crate::error::{ImportError, Result};
use crate::options::ImporterOptions;
use crate::request::{ImportRequest, PreviousFile};
use crate::result::ImportResult;
use crate::strategy::{Candidate, LocalStrategy, Lookup, PackageStrategy, Strategy};

/// Resolves `@import` specifiers for one compilation.
///
/// Each instance owns a fresh [`AliasCache`]; build a new importer per
/// compiler invocation and drop it afterwards.
pub struct ModuleImporter {
    options: ImporterOptions,
    fs: Arc<dyn FileSystem>,
    strategies: Vec<Box<dyn Strategy>>,
    aliases: AliasCache,
}

impl ModuleImporter {
    pub fn new(options: ImporterOptions) -> Self {
        Self::with_filesystem(options, Arc::new(TokioFileSystem))
    }

    pub fn with_filesystem(options: ImporterOptions, fs: Arc<dyn FileSystem>) -> Self {
        let strategies = Self::default_chain(Arc::clone(&fs));
        Self::with_strategies(options, fs, strategies)
    }

    pub fn with_strategies(
        options: ImporterOptions,
        fs: Arc<dyn FileSystem>,
        strategies: Vec<Box<dyn Strategy>>,
    ) -> Self {
        Self {
            options,
            fs,
            strategies,
            aliases: AliasCache::new(),
        }
    }

    /// Local match, then npm, then Bower.
    pub fn default_chain(fs: Arc<dyn FileSystem>) -> Vec<Box<dyn Strategy>> {
        vec![
            Box::new(LocalStrategy),
            Box::new(PackageStrategy::new(Arc::new(LayoutResolver::npm(Arc::clone(&fs))))),
            Box::new(PackageStrategy::new(Arc::new(LayoutResolver::bower(fs)))),
        ]
    }

    pub fn aliases(&self) -> &AliasCache { &self.aliases }

    /// Host-shaped entry point: `previous` is the engine's previous-file
    /// string, where `"stdin"` marks the entry point.
    pub async fn import(&self, url: &str, previous: &str) -> Result<ImportResult> {
        self.resolve(&ImportRequest::from_host(url, previous)).await
    }

    pub async fn resolve(&self, request: &ImportRequest) -> Result<ImportResult> {
        if let Some(cached) = self.aliases.get(&request.url) {
            tracing::trace!(url = %request.url, "alias hit");
            return Ok(cached);
        }

        let lookup = self.lookup(request);
        let mut candidate = None;
        for strategy in &self.strategies {
            if let Some(found) = strategy.attempt(&lookup).await {
                tracing::debug!(
                    url = %request.url,
                    stage = strategy.name(),
                    path = %found.path.display(),
                    "specifier located"
                );
                candidate = Some(found);
                break;
            }
        }

        let result = match candidate {
            Some(candidate) => self.finalize(&lookup, candidate).await?,
            None => {
                tracing::debug!(url = %request.url, "specifier unresolved");
                ImportResult::Unresolved(request.url.clone())
            }
        };

        self.aliases.insert(request.url.clone(), result.clone());
        Ok(result)
    }

    /// Absolute directory imports from the entry point are anchored at.
    fn root(&self) -> PathBuf {
        let basedir = self.options.basedir.as_deref().unwrap_or(Path::new("."));
        absolute(basedir)
    }

    /// A relative previous file is taken relative to the working directory,
    /// so the search always starts from its own absolute directory.
    fn lookup<'a>(&'a self, request: &'a ImportRequest) -> Lookup<'a> {
        let base_dir = match request.previous.dir() {
            Some(dir) => absolute(dir),
            None => self.root(),
        };
        let resolve = ResolveOptions::new(&base_dir).filter(Arc::clone(&self.options.package_filter));

        Lookup {
            url: &request.url,
            previous: &request.previous,
            base_dir,
            include_paths: &self.options.include_paths,
            resolve,
        }
    }

    async fn finalize(&self, lookup: &Lookup<'_>, candidate: Candidate) -> Result<ImportResult> {
        let candidate = if candidate.settled {
            candidate
        } else {
            self.complete(candidate).await
        };

        if is_css(&candidate.path) {
            let path = if candidate.path.is_absolute() {
                candidate.path
            } else {
                lookup.base_dir.join(&candidate.path)
            };
            return match self.fs.read_to_string(&path).await {
                Ok(text) => Ok(ImportResult::Contents(text)),
                Err(source) => {
                    tracing::warn!(path = %path.display(), %source, "located stylesheet unreadable");
                    Err(ImportError::Read { path, source })
                }
            };
        }

        if candidate.path.is_absolute() || candidate.settled {
            return Ok(ImportResult::File(candidate.path));
        }

        Ok(match lookup.previous {
            PreviousFile::Entry => ImportResult::File(candidate.path),
            PreviousFile::Path(_) => ImportResult::File(lookup.base_dir.join(candidate.path)),
        })
    }

    /// Pin an extensionless package sub-path (`pkg/assets/styles`) to the
    /// partial it names, so CSS targets can be inlined.
    async fn complete(&self, candidate: Candidate) -> Candidate {
        let path = &candidate.path;
        if !path.is_absolute()
            || path.to_str().is_some_and(is_stylesheet)
            || self.fs.is_file(path).await
        {
            return candidate;
        }

        let found = match (path.parent(), path.file_name().and_then(|n| n.to_str())) {
            (Some(dir), Some(name)) => find_partial(dir, name),
            _ => None,
        };
        match found {
            Some(found) => Candidate::located(found),
            None => candidate,
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let path = if path.as_os_str().is_empty() { Path::new(".") } else { path };
    std::path::absolute(path).unwrap_or_else(|err| {
        tracing::debug!(path = %path.display(), %err, "keeping relative base directory");
        path.to_path_buf()
    })
}

fn is_css(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("css"))
}
