//! Walks a source directory of containers and groups every eligible dump by
//! the convention's game identity.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rom_prune_core::{ContainerMode, NamingConvention, ParsedName};

use crate::archive;
use crate::error::PruneError;

/// One eligible dump found during the scan.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Container file the dump lives in
    pub container: PathBuf,
    /// Entry name inside the container (equals the filename for standalone
    /// containers)
    pub entry_name: String,
    pub parsed: ParsedName,
}

/// Everything a scan produced: candidate groups plus non-fatal diagnostics.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Eligible dumps keyed by game identity, in deterministic key order.
    /// Within a group, candidates appear in scan order.
    pub groups: BTreeMap<String, Vec<Candidate>>,
    pub containers_scanned: usize,
    /// Malformed names and unreadable containers that were skipped
    pub warnings: Vec<String>,
}

/// Scan `src_dir` for containers matching the convention's extension and
/// group every eligible dump. `on_container` is called once per container,
/// before it is opened.
///
/// Only an unreadable source directory is fatal; unreadable containers and
/// unparseable names are recorded as warnings and skipped.
pub fn scan_collection(
    src_dir: &Path,
    convention: &dyn NamingConvention,
    on_container: &dyn Fn(&Path),
) -> Result<ScanOutcome, PruneError> {
    let mut containers: Vec<PathBuf> = fs::read_dir(src_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_extension(path, convention.container_extension()))
        .collect();
    // Directory iteration order is filesystem-dependent; sort for stable output
    containers.sort();

    let mut outcome = ScanOutcome::default();
    for container in containers {
        on_container(&container);
        outcome.containers_scanned += 1;

        let entries = match container_entries(&container, convention) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("skipping unreadable container: {err}");
                outcome.warnings.push(err.to_string());
                continue;
            }
        };
        collect_candidates(&container, entries, convention, &mut outcome);
    }
    Ok(outcome)
}

/// Filter, parse and group the entries of one container. Split out from
/// [`scan_collection`] so the grouping logic is testable without a filesystem.
pub fn collect_candidates(
    container: &Path,
    entries: Vec<String>,
    convention: &dyn NamingConvention,
    outcome: &mut ScanOutcome,
) {
    for entry_name in entries {
        let parsed = match convention.parse(&entry_name) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("skipping malformed name in {}: {err}", container.display());
                outcome
                    .warnings
                    .push(format!("{}: {err}", container.display()));
                continue;
            }
        };
        if !convention.keep(&parsed) {
            debug!("filtered out: {entry_name}");
            continue;
        }
        let key = convention.group_key(container, &parsed);
        outcome.groups.entry(key).or_default().push(Candidate {
            container: container.to_path_buf(),
            entry_name,
            parsed,
        });
    }
}

fn container_entries(
    container: &Path,
    convention: &dyn NamingConvention,
) -> Result<Vec<String>, PruneError> {
    match convention.container_mode() {
        ContainerMode::MultiEntry => archive::list_entries(container),
        ContainerMode::Standalone => {
            let name = container
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(vec![name])
        }
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
