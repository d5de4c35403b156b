//! The GoodTools naming convention.
//!
//! GoodTools-style dumps pack region codes into parenthetical groups and
//! dump-quality markers into brackets: `"Super Game (U) (V1.1) [!]"`.
//! Containers are multi-entry `.7z` files, one container per game, so the
//! grouping key is the container path itself.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::ParsedName;
use crate::convention::{ContainerMode, NamingConvention};
use crate::error::ParseError;
use crate::parser;

/// Version tag like `V1.1` or `V2`, searched inside a region group.
static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"V(\d+(?:\.\d+)?)").expect("invalid version regex"));

/// Four-digit year starting `20` — marks anniversary re-releases.
static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20\d{2}").expect("invalid year regex"));

/// GoodTools convention policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodTools;

impl NamingConvention for GoodTools {
    fn name(&self) -> &'static str {
        "GoodTools"
    }

    fn container_extension(&self) -> &'static str {
        "7z"
    }

    fn container_mode(&self) -> ContainerMode {
        ContainerMode::MultiEntry
    }

    fn parse(&self, entry_name: &str) -> Result<ParsedName, ParseError> {
        let name = parser::base_name(entry_name)?.to_string();

        let groups = parser::paren_groups(entry_name);
        let mut language_tags: Vec<String> = Vec::with_capacity(groups.len());
        if let Some((first, rest)) = groups.split_first() {
            // The first group may combine several codes ("U,E")
            language_tags.extend(parser::split_region_list(first));
            language_tags.extend(rest.iter().cloned());
        }
        let meta_tags = parser::bracket_groups(entry_name);

        // Pull the version out of the region tags. Build a fresh list rather
        // than removing from the one being scanned.
        let mut version = None;
        let mut kept_tags = Vec::with_capacity(language_tags.len());
        for tag in language_tags {
            if version.is_none() {
                if let Some(caps) = RE_VERSION.captures(&tag) {
                    version = caps[1].parse::<f64>().ok();
                    if version.is_some() {
                        continue;
                    }
                }
            }
            kept_tags.push(tag);
        }

        Ok(ParsedName {
            name,
            language_tags: kept_tags,
            meta_tags,
            version,
        })
    }

    fn keep(&self, parsed: &ParsedName) -> bool {
        let langs = &parsed.language_tags;
        let metas = &parsed.meta_tags;

        let is_not_hack = !langs.iter().any(|t| t.contains("Hack"));
        let is_not_proto = !langs.iter().any(|t| t.contains("Prototype"))
            && !langs
                .iter()
                .any(|t| t == "Sample" || t == "Beta" || t == "Prototype");
        let is_not_pd = !langs.iter().any(|t| t == "PD" || t == "AD" || t == "MP");
        // Verified-good dump or no quality brackets at all
        let is_likely_good = metas.is_empty() || (metas.len() == 1 && metas[0] == "!");
        let is_us_game = langs.iter().any(|t| t == "U" || t == "UE");
        let is_not_rerelease = !langs.iter().any(|t| RE_YEAR.is_match(t));

        is_us_game && is_likely_good && is_not_hack && is_not_proto && is_not_pd && is_not_rerelease
    }

    fn preference(&self, parsed: &ParsedName) -> f64 {
        let mut score = 0.0;
        if parsed.language_tags.iter().any(|t| t == "U") {
            score += 10_000.0;
        }
        if parsed.meta_tags.iter().any(|t| t == "!") {
            score += 1_000.0;
        }
        if parsed.meta_tags.is_empty() {
            score += 100.0;
        }
        if let Some(version) = parsed.version {
            score += version;
        }
        score
    }

    fn group_key(&self, container: &Path, _parsed: &ParsedName) -> String {
        // One .7z already bundles all regional dumps of one game
        container.to_string_lossy().into_owned()
    }

    fn output_name(&self, entry_name: &str) -> String {
        let base = Path::new(entry_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(entry_name);
        match base.rsplit_once('.') {
            Some((stem, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
                format!("{stem}.7z")
            }
            _ => base.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/goodtools_tests.rs"]
mod tests;
