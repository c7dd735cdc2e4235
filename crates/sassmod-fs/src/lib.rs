//! Filesystem primitives for stylesheet resolution.
//!
//! # Architecture
//!
//! - [`FileSystem`] - async stat/read boundary, with [`TokioFileSystem`] as
//!   the production implementation
//! - [`find_partial`] - synchronous glob lookup of `_name.scss`-style partials

pub use error::{Error, Result, from_io};
pub use partial::{PartialPattern, STYLESHEET_EXTENSIONS, find_partial};
pub use provider::{FileKind, FileSystem, TokioFileSystem};

mod error;
mod partial;
mod provider;
