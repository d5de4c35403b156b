use std::path::Path;

use crate::ParsedName;
use crate::error::ParseError;

/// How a dialect's container files relate to their entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerMode {
    /// The container holds several regional dumps of one game; entries are
    /// listed from inside it.
    MultiEntry,
    /// The container is its own single entry, named by its filename.
    Standalone,
}

/// A filename convention: how to parse dump names, which dumps are worth
/// keeping, and how kept dumps are ranked against each other.
///
/// The whole pipeline (scan → select → repack) is generic over this trait;
/// the two implementations are [`GoodTools`](crate::GoodTools) and
/// [`NoIntro`](crate::NoIntro).
pub trait NamingConvention: Send + Sync {
    /// Short name for logging (e.g. "GoodTools").
    fn name(&self) -> &'static str;

    /// Container file extension this convention expects (without the dot).
    fn container_extension(&self) -> &'static str;

    /// Whether containers are opened for their entries or stand alone.
    fn container_mode(&self) -> ContainerMode;

    /// Decompose an entry name into title, tag groups and version.
    fn parse(&self, entry_name: &str) -> Result<ParsedName, ParseError>;

    /// Whether a parsed dump is eligible at all (region, dump quality,
    /// no hacks/prototypes/re-releases).
    fn keep(&self, parsed: &ParsedName) -> bool;

    /// Ranking score for an eligible dump; higher wins. Region correctness
    /// dominates dump-verification status, which dominates version bumps —
    /// the tiers are spaced two orders of magnitude apart so a realistic
    /// version number can never cross tiers.
    fn preference(&self, parsed: &ParsedName) -> f64;

    /// Identity key grouping dumps of the same game.
    fn group_key(&self, container: &Path, parsed: &ParsedName) -> String;

    /// Destination filename for a winning entry.
    fn output_name(&self, entry_name: &str) -> String;
}
