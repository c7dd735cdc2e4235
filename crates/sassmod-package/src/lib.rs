//! Package entry resolution for stylesheet imports.
//!
//! # Architecture
//!
//! The crate is mechanism only. It turns a bare specifier into the file a
//! package exposes as its stylesheet:
//!
//! - [`PackageSpecifier`] - splits `name/sub/path` and `@scope/name`
//! - [`PackageDescriptor`] - the main-like fields of a manifest
//! - [`PackageFilter`] - pluggable rewrite choosing the stylesheet entry
//! - [`PackageResolver`] - lookup contract, implemented for npm and Bower by
//!   [`LayoutResolver`]
//!
//! # Example
//!
//! ```
//! use sassmod_package::{PackageDescriptor, select_stylesheet_main};
//!
//! let desc = PackageDescriptor::from_json(r#"{"main": "index.js", "style": "dist/app.css"}"#).unwrap();
//! assert_eq!(select_stylesheet_main(desc).entry(), Some("dist/app.css"));
//! ```

pub use descriptor::{MainField, PackageDescriptor};
pub use error::{Error, Result};
pub use filter::{DEFAULT_ENTRY, PackageFilter, default_filter, is_stylesheet, select_stylesheet_main};
pub use layout::Layout;
pub use resolver::{LayoutResolver, PackageResolver, ResolveOptions};
pub use specifier::PackageSpecifier;

mod descriptor;
mod error;
mod filter;
mod layout;
mod resolver;
mod specifier;
