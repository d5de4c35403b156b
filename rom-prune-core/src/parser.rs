//! Filename tokenizing shared by both naming conventions.
//!
//! ROM dump names pack their metadata into parenthetical and bracketed tag
//! groups after the game title, e.g. `"Super Game (U) (V1.1) [!]"`. The
//! functions here split a raw name into those pieces; what the pieces *mean*
//! is up to the convention modules.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

/// Matches one parenthetical tag group, capturing the inner text.
static RE_PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").expect("invalid paren group regex"));

/// Matches one bracketed tag group, capturing the inner text.
static RE_BRACKET_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").expect("invalid bracket group regex"));

/// The game title: everything before the first `(`, `.` or `[`.
///
/// Examples:
/// - `"Super Game (U) [!].7z"` → `"Super Game"`
/// - `"plain"` → `MissingNameBoundary`
pub fn base_name(raw: &str) -> Result<&str, ParseError> {
    let boundary = raw
        .find(['(', '.', '['])
        .ok_or_else(|| ParseError::MissingNameBoundary(raw.to_string()))?;
    Ok(raw[..boundary].trim())
}

/// All parenthetical tag groups, in order of appearance.
pub fn paren_groups(raw: &str) -> Vec<String> {
    RE_PAREN_GROUP
        .captures_iter(raw)
        .map(|c| c[1].to_string())
        .collect()
}

/// All bracketed tag groups, in order of appearance.
pub fn bracket_groups(raw: &str) -> Vec<String> {
    RE_BRACKET_GROUP
        .captures_iter(raw)
        .map(|c| c[1].to_string())
        .collect()
}

/// Split a combined region group (`"USA, Europe"`) into individual codes.
pub fn split_region_list(group: &str) -> Vec<String> {
    group
        .split(',')
        .map(|code| code.trim().to_string())
        .collect()
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
