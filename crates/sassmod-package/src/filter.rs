//! Selection of a package's stylesheet entry point.
//!
//! Packages usually point `main` at JavaScript. The default filter rewrites
//! `main` so it names a stylesheet, in this priority order:
//!
//! 1. `main` itself when it is stylesheet-like (first match for a list)
//! 2. `style`
//! 3. `main.scss`
//! 4. `main.sass`
//! 5. `index.css`

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::descriptor::{MainField, PackageDescriptor};

/// Caller-supplied rewrite applied to every manifest before its entry is read.
pub type PackageFilter = Arc<dyn Fn(PackageDescriptor) -> PackageDescriptor + Send + Sync>;

pub const DEFAULT_ENTRY: &str = "index.css";

static STYLESHEET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.s?[ca]ss$").unwrap());

/// Whether `path` ends in `.css`, `.scss` or `.sass`, ignoring case.
pub fn is_stylesheet(path: &str) -> bool { STYLESHEET.is_match(path) }

pub fn default_filter() -> PackageFilter { Arc::new(select_stylesheet_main) }

pub fn select_stylesheet_main(mut descriptor: PackageDescriptor) -> PackageDescriptor {
    let declared = match &descriptor.main {
        Some(MainField::One(main)) if is_stylesheet(main) => Some(main.clone()),
        Some(MainField::Many(list)) => list.iter().find(|main| is_stylesheet(main)).cloned(),
        _ => None,
    };

    let main = declared
        .or_else(|| descriptor.style.clone())
        .or_else(|| descriptor.main_scss.clone())
        .or_else(|| descriptor.main_sass.clone())
        .unwrap_or_else(|| DEFAULT_ENTRY.to_string());

    descriptor.main = Some(MainField::One(main));
    descriptor
}
