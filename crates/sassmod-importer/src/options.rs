use std::fmt;
use std::path::PathBuf;

use sassmod_package::{PackageFilter, default_filter};
use serde::{Deserialize, Serialize};

/// Configuration for a [`ModuleImporter`](crate::ModuleImporter).
///
/// # Examples
///
/// ```
/// use sassmod_importer::ImporterOptions;
///
/// let options = ImporterOptions::new()
///     .basedir("/site")
///     .include_path("/site/vendor/scss");
/// assert_eq!(options.include_paths.len(), 1);
/// ```
#[derive(Clone)]
pub struct ImporterOptions {
    /// Root for resolution when the import comes from the entry point.
    /// Defaults to the process working directory; a relative path is taken
    /// relative to it.
    pub basedir: Option<PathBuf>,

    /// Extra roots searched for local partials after the importing file's
    /// directory.
    pub include_paths: Vec<PathBuf>,

    /// Manifest rewrite choosing each package's stylesheet entry.
    pub package_filter: PackageFilter,
}

impl Default for ImporterOptions {
    fn default() -> Self { Self::new() }
}

impl ImporterOptions {
    pub fn new() -> Self {
        Self {
            basedir: None,
            include_paths: Vec::new(),
            package_filter: default_filter(),
        }
    }

    pub fn basedir(mut self, basedir: impl Into<PathBuf>) -> Self {
        self.basedir = Some(basedir.into());
        self
    }

    pub fn include_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.include_paths.push(path.into());
        self
    }

    pub fn include_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.include_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn package_filter(mut self, filter: PackageFilter) -> Self {
        self.package_filter = filter;
        self
    }
}

impl fmt::Debug for ImporterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImporterOptions")
            .field("basedir", &self.basedir)
            .field("include_paths", &self.include_paths)
            .field("package_filter", &"<fn>")
            .finish()
    }
}

/// Serializable subset of [`ImporterOptions`], as read from config files.
///
/// Keys are accepted both in snake case and in the camel case Sass hosts
/// use (`includePaths`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImporterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basedir: Option<PathBuf>,

    #[serde(default, alias = "includePaths", skip_serializing_if = "Vec::is_empty")]
    pub include_paths: Vec<PathBuf>,
}

impl ImporterConfig {
    /// Overlay `other` onto `self`; values set in `other` win and include
    /// paths accumulate.
    pub fn merge(mut self, other: ImporterConfig) -> Self {
        if other.basedir.is_some() {
            self.basedir = other.basedir;
        }
        self.include_paths.extend(other.include_paths);
        self
    }
}

impl From<ImporterConfig> for ImporterOptions {
    fn from(config: ImporterConfig) -> Self {
        let options = ImporterOptions::new().include_paths(config.include_paths);
        match config.basedir {
            Some(basedir) => options.basedir(basedir),
            None => options,
        }
    }
}
