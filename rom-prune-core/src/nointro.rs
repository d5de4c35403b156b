//! The No-Intro naming convention, as used by Internet Archive sets.
//!
//! Everything is parenthetical: the first group carries the regions
//! (`"USA, Europe"`), later groups are release markers (`"Rev 1"`, `"Beta"`,
//! `"Virtual Console"`). Containers are standalone `.zip` files named after
//! their single entry, so dumps of the same game are scattered across
//! containers and grouped by title.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::ParsedName;
use crate::convention::{ContainerMode, NamingConvention};
use crate::error::ParseError;
use crate::parser;

/// Revision marker inside a release group, e.g. `Rev 1` or `Rev A`.
static RE_REVISION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Rev (\w+)").expect("invalid revision regex"));

/// Exact release markers that disqualify a dump.
const EXCLUDED_MARKERS: &[&str] = &[
    "Sample",
    "Beta",
    "Prototype",
    "Virtual Console",
    "Demo",
    "Unl",
];

/// No-Intro convention policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIntro;

/// Map a `Rev` token to a comparable number.
///
/// Lettered revisions use `ordinal - 92`, kept exactly as the collections
/// this tool was built against expect; the offset's origin is unknown but
/// the mapping is monotonic, which is all ranking needs.
fn revision_value(token: &str) -> Option<f64> {
    let first = token.chars().next()?;
    if first.is_ascii_alphabetic() {
        Some(first as u32 as f64 - 92.0)
    } else {
        token.parse::<i64>().ok().map(|v| v as f64)
    }
}

impl NamingConvention for NoIntro {
    fn name(&self) -> &'static str {
        "No-Intro"
    }

    fn container_extension(&self) -> &'static str {
        "zip"
    }

    fn container_mode(&self) -> ContainerMode {
        ContainerMode::Standalone
    }

    fn parse(&self, entry_name: &str) -> Result<ParsedName, ParseError> {
        let name = parser::base_name(entry_name)?.to_string();

        let mut groups = parser::paren_groups(entry_name).into_iter();
        let region_group = groups
            .next()
            .ok_or_else(|| ParseError::MissingRegionGroup(entry_name.to_string()))?;
        let language_tags = parser::split_region_list(&region_group);

        // Scan the remaining groups for a revision marker; the first match
        // becomes the version and is dropped from the kept markers.
        let mut version = None;
        let mut meta_tags = Vec::new();
        for group in groups {
            if version.is_none() {
                if let Some(caps) = RE_REVISION.captures(&group) {
                    if let Some(value) = revision_value(&caps[1]) {
                        version = Some(value);
                        continue;
                    }
                }
            }
            meta_tags.push(group);
        }

        Ok(ParsedName {
            name,
            language_tags,
            meta_tags,
            version,
        })
    }

    fn keep(&self, parsed: &ParsedName) -> bool {
        let langs = &parsed.language_tags;
        let metas = &parsed.meta_tags;

        let is_not_hack = !metas.iter().any(|t| t.contains("Hack"));
        let is_not_proto = !metas.iter().any(|t| t.contains("Proto"))
            && !metas.iter().any(|t| EXCLUDED_MARKERS.contains(&t.as_str()));
        let is_not_pd = !metas.iter().any(|t| t == "PD" || t == "AD" || t == "MP");
        let is_not_video = !parsed.name.starts_with("Game Boy Advance Video");
        let is_us_game = langs.iter().any(|t| t == "USA" || t == "World");

        is_us_game && is_not_hack && is_not_proto && is_not_pd && is_not_video
    }

    fn preference(&self, parsed: &ParsedName) -> f64 {
        let mut score = 0.0;
        if parsed.language_tags.iter().any(|t| t == "USA") {
            score += 10_000.0;
        }
        if let Some(version) = parsed.version {
            score += version;
        }
        score
    }

    fn group_key(&self, _container: &Path, parsed: &ParsedName) -> String {
        // The same game shows up as several standalone containers
        parsed.name.clone()
    }

    fn output_name(&self, entry_name: &str) -> String {
        Path::new(entry_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(entry_name)
            .to_string()
    }
}

#[cfg(test)]
#[path = "tests/nointro_tests.rs"]
mod tests;
