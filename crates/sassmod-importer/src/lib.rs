//! Sass importer that finds stylesheets installed as npm or Bower packages.
//!
//! # Architecture
//!
//! A [`ModuleImporter`] runs every specifier through a fixed chain and stops
//! at the first hit:
//!
//! 1. alias cache
//! 2. [`LocalStrategy`] - `./relative`, `/absolute`, or an on-disk partial
//! 3. npm package ([`PackageStrategy`] over `node_modules`)
//! 4. Bower package ([`PackageStrategy`] over `bower_components`)
//!
//! The located target is then finalized: `.css` files are inlined as
//! [`ImportResult::Contents`], everything else becomes
//! [`ImportResult::File`]. A specifier nothing matched comes back as
//! [`ImportResult::Unresolved`] so the engine can report it.
//!
//! # Example
//!
//! ```no_run
//! use sassmod_importer::{ImporterOptions, ModuleImporter};
//!
//! # async fn run() -> sassmod_importer::Result<()> {
//! let importer = ModuleImporter::new(ImporterOptions::new().basedir("/site"));
//! let result = importer.import("bootstrap", "stdin").await?;
//! println!("{}", serde_json::to_string(&result).unwrap());
//! # Ok(())
//! # }
//! ```

pub use cache::AliasCache;
pub use error::{ImportError, Result};
pub use importer::ModuleImporter;
pub use options::{ImporterConfig, ImporterOptions};
pub use request::{ENTRY_SENTINELS, ImportRequest, PreviousFile};
pub use result::ImportResult;
pub use strategy::{Candidate, LocalStrategy, Lookup, PackageStrategy, Strategy};

pub use sassmod_package::{PackageDescriptor, PackageFilter, PackageResolver, ResolveOptions};

mod cache;
mod error;
mod importer;
mod options;
mod request;
mod result;
mod strategy;
