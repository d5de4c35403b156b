use thiserror::Error;

/// Errors that can occur while parsing a ROM filename.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The filename has no `(`, `.` or `[` to mark the end of the base name
    #[error("no name boundary ('(', '.' or '[') in {0:?}")]
    MissingNameBoundary(String),

    /// No-Intro names must carry at least one parenthetical region group
    #[error("no region group in {0:?}")]
    MissingRegionGroup(String),
}
