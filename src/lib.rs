//! Core library for the l10n-template command line application.
//!
//! The tool turns a string catalog (source texts plus the link groups that
//! reference them) into a CSV template for translators. IO adapters live under
//! [`io`], the catalog representation inside [`model`], the key/link inversion
//! in [`template`], consistency checks in [`audit`], and the orchestration in
//! [`generate`].

pub mod audit;
pub mod error;
pub mod generate;
pub mod io;
pub mod model;
pub mod template;

pub use error::{Result, ToolError};
