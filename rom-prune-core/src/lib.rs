//! Filename grammar and selection policies for ROM collection pruning.
//!
//! This crate is pure string/policy logic: it knows how GoodTools and
//! No-Intro dump names are structured, which dumps are worth keeping, and how
//! eligible dumps rank against each other. All I/O lives in `rom-prune-lib`.

pub mod convention;
pub mod error;
pub mod goodtools;
pub mod nointro;
pub mod parser;

pub use convention::{ContainerMode, NamingConvention};
pub use error::ParseError;
pub use goodtools::GoodTools;
pub use nointro::NoIntro;

/// A dump filename decomposed into its tagged parts.
///
/// Derived deterministically from the raw entry name and never mutated:
/// the version tag (when present) has already been removed from the tag
/// sequence it was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Game title, i.e. everything before the first tag group or dot
    pub name: String,
    /// Region/language codes and release-status tags
    pub language_tags: Vec<String>,
    /// Dump-quality / distribution markers
    pub meta_tags: Vec<String>,
    /// Version or revision, normalized to a comparable number
    pub version: Option<f64>,
}
