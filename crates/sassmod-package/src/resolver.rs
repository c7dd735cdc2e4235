//! Package resolver abstraction and the layout-driven implementation.
//!
//! [`PackageResolver`] is the contract the importer consumes. Any error it
//! returns is treated as a miss by the caller, so implementations only need
//! to be precise about *why* they failed for logging.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use sassmod_fs::{FileSystem, STYLESHEET_EXTENSIONS};

use crate::descriptor::PackageDescriptor;
use crate::error::{Error, Result};
use crate::filter::{PackageFilter, default_filter};
use crate::layout::Layout;
use crate::specifier::PackageSpecifier;

/// Options handed to a resolver for a single lookup.
#[derive(Clone)]
pub struct ResolveOptions {
    /// Directory the search starts from; its ancestors are searched too.
    pub basedir: PathBuf,

    /// Rewrite applied to each manifest before its entry is probed.
    pub filter: PackageFilter,
}

impl ResolveOptions {
    pub fn new(basedir: impl Into<PathBuf>) -> Self {
        Self {
            basedir: basedir.into(),
            filter: default_filter(),
        }
    }

    pub fn filter(mut self, filter: PackageFilter) -> Self {
        self.filter = filter;
        self
    }
}

impl fmt::Debug for ResolveOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveOptions")
            .field("basedir", &self.basedir)
            .field("filter", &"<fn>")
            .finish()
    }
}

#[async_trait::async_trait]
pub trait PackageResolver: Send + Sync {
    /// Short label used in logs (`npm`, `bower`).
    fn name(&self) -> &str;

    /// Absolute path of the file `specifier` refers to.
    async fn resolve(&self, specifier: &str, options: &ResolveOptions) -> Result<PathBuf>;
}

#[derive(Debug, Default, Deserialize)]
struct RcFile {
    directory: Option<String>,
}

/// Resolver that walks `basedir` ancestors looking for a package directory
/// laid out according to a [`Layout`].
pub struct LayoutResolver {
    layout: Layout,
    fs: Arc<dyn FileSystem>,
}

impl LayoutResolver {
    pub fn new(layout: Layout, fs: Arc<dyn FileSystem>) -> Self { Self { layout, fs } }

    pub fn npm(fs: Arc<dyn FileSystem>) -> Self { Self::new(Layout::Npm, fs) }

    pub fn bower(fs: Arc<dyn FileSystem>) -> Self { Self::new(Layout::Bower, fs) }

    /// Candidate modules directories, nearest first.
    async fn search_roots(&self, basedir: &Path) -> Vec<PathBuf> {
        if let Some(dir) = self.rc_directory(basedir).await {
            return vec![dir];
        }

        let modules_dir = self.layout.modules_dir();
        basedir
            .ancestors()
            .filter(|dir| dir.file_name().is_none_or(|name| name != modules_dir))
            .map(|dir| dir.join(modules_dir))
            .collect()
    }

    /// Modules directory declared by the nearest rc file, if it declares one.
    async fn rc_directory(&self, basedir: &Path) -> Option<PathBuf> {
        let rc_name = self.layout.rc_file()?;

        for dir in basedir.ancestors() {
            let rc_path = dir.join(rc_name);
            if !self.fs.is_file(&rc_path).await {
                continue;
            }

            let rc = match self.fs.read_to_string(&rc_path).await {
                Ok(text) => serde_json::from_str::<RcFile>(&text).unwrap_or_else(|err| {
                    tracing::debug!(path = %rc_path.display(), %err, "ignoring malformed rc file");
                    RcFile::default()
                }),
                Err(err) => {
                    tracing::debug!(path = %rc_path.display(), %err, "unreadable rc file");
                    RcFile::default()
                }
            };
            return rc.directory.map(|directory| dir.join(directory));
        }

        None
    }

    async fn find_package_root(&self, name: &str, basedir: &Path) -> Option<PathBuf> {
        for modules in self.search_roots(basedir).await {
            let candidate = modules.join(name);
            if self.fs.is_dir(&candidate).await {
                return Some(candidate);
            }
        }
        None
    }

    async fn read_descriptor(&self, root: &Path) -> Result<PackageDescriptor> {
        for manifest in self.layout.manifests() {
            let path = root.join(manifest);
            if !self.fs.is_file(&path).await {
                continue;
            }
            let text = self.fs.read_to_string(&path).await?;
            return PackageDescriptor::from_json(&text)
                .map_err(|source| Error::Manifest { path, source });
        }

        Ok(PackageDescriptor::default())
    }

    /// First existing file for `entry`: as written, with a stylesheet
    /// extension appended, then as a directory index.
    async fn probe_entry(&self, root: &Path, entry: &str) -> Option<PathBuf> {
        let base = root.join(clean_entry(entry));

        if self.fs.is_file(&base).await {
            return Some(base);
        }

        for ext in STYLESHEET_EXTENSIONS {
            let mut with_ext = base.clone().into_os_string();
            with_ext.push(".");
            with_ext.push(ext);
            let with_ext = PathBuf::from(with_ext);
            if self.fs.is_file(&with_ext).await {
                return Some(with_ext);
            }
        }

        if self.fs.is_dir(&base).await {
            for ext in STYLESHEET_EXTENSIONS {
                let index = base.join(format!("index.{ext}"));
                if self.fs.is_file(&index).await {
                    return Some(index);
                }
            }
        }

        None
    }
}

#[async_trait::async_trait]
impl PackageResolver for LayoutResolver {
    fn name(&self) -> &str {
        match self.layout {
            Layout::Npm => "npm",
            Layout::Bower => "bower",
        }
    }

    async fn resolve(&self, specifier: &str, options: &ResolveOptions) -> Result<PathBuf> {
        let spec = PackageSpecifier::parse(specifier)
            .ok_or_else(|| Error::InvalidSpecifier(specifier.to_string()))?;

        let basedir = std::path::absolute(&options.basedir).unwrap_or_else(|_| options.basedir.clone());
        let root = self
            .find_package_root(spec.name, &basedir)
            .await
            .ok_or_else(|| Error::NotFound(spec.name.to_string()))?;

        if let Some(subpath) = spec.subpath {
            return Ok(root.join(subpath));
        }

        let descriptor = (options.filter)(self.read_descriptor(&root).await?);
        let entry = descriptor.entry().unwrap_or("index");

        tracing::trace!(
            layout = %self.layout,
            package = spec.name,
            entry,
            "probing package entry"
        );

        self.probe_entry(&root, entry)
            .await
            .ok_or_else(|| Error::EntryNotFound {
                package: spec.name.to_string(),
                entry: entry.to_string(),
            })
    }
}

fn clean_entry(entry: &str) -> &str {
    let mut entry = entry;
    loop {
        if let Some(rest) = entry.strip_prefix("./") {
            entry = rest;
        } else if let Some(rest) = entry.strip_prefix('/') {
            entry = rest;
        } else {
            return entry;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_entry() {
        assert_eq!(clean_entry("./main.scss"), "main.scss");
        assert_eq!(clean_entry(".//./dist/a.css"), "dist/a.css");
        assert_eq!(clean_entry("index.css"), "index.css");
        assert_eq!(clean_entry("../up.css"), "../up.css");
    }
}
