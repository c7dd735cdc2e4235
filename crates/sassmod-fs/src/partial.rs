//! Synchronous lookup of Sass partials next to an importing file.
//!
//! A specifier `dir/name` matches `dir/{_,}name.{scss,sass,css}`. Candidates
//! are ranked: plain name before the underscore partial, and `.scss` before
//! `.sass` before `.css`.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::Result;

pub const STYLESHEET_EXTENSIONS: [&str; 3] = ["scss", "sass", "css"];

/// Compiled candidate set for one partial name.
#[derive(Debug, Clone)]
pub struct PartialPattern {
    set: GlobSet,
}

impl PartialPattern {
    pub fn new(name: &str) -> Result<Self> {
        let escaped = escape(name);
        let has_extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                STYLESHEET_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            });

        let mut builder = GlobSetBuilder::new();
        for prefix in ["", "_"] {
            if has_extension {
                builder.add(Glob::new(&format!("{prefix}{escaped}"))?);
            } else {
                for ext in STYLESHEET_EXTENSIONS {
                    builder.add(Glob::new(&format!("{prefix}{escaped}.{ext}"))?);
                }
            }
        }

        Ok(Self {
            set: builder.build()?,
        })
    }

    /// Rank of `file_name` among the candidates; lower is preferred.
    pub fn rank(&self, file_name: &str) -> Option<usize> {
        self.set.matches(file_name).into_iter().min()
    }

    /// Best matching regular file in `dir`, if any.
    ///
    /// An unreadable or missing `dir` is a miss, not an error.
    pub fn find_in(&self, dir: &Path) -> Option<PathBuf> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::trace!(dir = %dir.display(), %err, "partial lookup skipped");
                return None;
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let name = entry.file_name();
                let rank = self.rank(name.to_str()?)?;
                Some((rank, entry.path()))
            })
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, path)| path)
    }
}

/// Search `base` for the partial named by `specifier`.
///
/// `specifier` may carry directories (`fixtures/dummy`); they are joined to
/// `base` and only the last component is matched.
pub fn find_partial(base: &Path, specifier: &str) -> Option<PathBuf> {
    let spec = Path::new(specifier);
    let name = spec.file_name()?.to_str()?;
    let dir = match spec.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => base.join(parent),
        _ => base.to_path_buf(),
    };

    match PartialPattern::new(name) {
        Ok(pattern) => pattern.find_in(&dir),
        Err(err) => {
            tracing::debug!(specifier, %err, "unusable partial pattern");
            None
        }
    }
}

fn escape(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '*' | '?' | '[' | ']' | '{' | '}' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_prefers_plain_scss() {
        let pattern = PartialPattern::new("colors").unwrap();

        let scss = pattern.rank("colors.scss").unwrap();
        let sass = pattern.rank("colors.sass").unwrap();
        let css = pattern.rank("colors.css").unwrap();
        let partial = pattern.rank("_colors.scss").unwrap();

        assert!(scss < sass && sass < css);
        assert!(css < partial);
        assert_eq!(pattern.rank("colors.less"), None);
        assert_eq!(pattern.rank("xcolors.scss"), None);
    }

    #[test]
    fn test_explicit_extension_matches_only_itself() {
        let pattern = PartialPattern::new("theme.css").unwrap();

        assert!(pattern.rank("theme.css").is_some());
        assert!(pattern.rank("_theme.css").is_some());
        assert_eq!(pattern.rank("theme.scss"), None);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let pattern = PartialPattern::new("a*b").unwrap();

        assert!(pattern.rank("a*b.scss").is_some());
        assert_eq!(pattern.rank("axxb.scss"), None);
    }

    #[test]
    fn test_find_partial_in_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("fixtures")).unwrap();
        std::fs::write(dir.path().join("fixtures/_dummy.scss"), "body{}").unwrap();

        let found = find_partial(dir.path(), "fixtures/dummy").unwrap();
        assert_eq!(found, dir.path().join("fixtures/_dummy.scss"));
        assert_eq!(find_partial(dir.path(), "fixtures/absent"), None);
        assert_eq!(find_partial(&dir.path().join("nowhere"), "dummy"), None);
    }

    #[test]
    fn test_directories_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("grid.scss")).unwrap();

        assert_eq!(find_partial(dir.path(), "grid"), None);
    }
}
