//! Ranks each game's candidates and repackages the winner into the
//! destination directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rom_prune_core::{ContainerMode, NamingConvention};
use tempfile::TempDir;

use crate::archive;
use crate::scanner::Candidate;

/// One candidate with its computed score, for diagnostics.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub entry_name: String,
    pub score: f64,
}

/// The chosen dump for one game and where it will be written.
#[derive(Debug)]
pub struct RepackAction {
    pub group_key: String,
    pub container: PathBuf,
    pub entry_name: String,
    pub destination: PathBuf,
    /// Full ranking for the group, best first
    pub ranking: Vec<RankedCandidate>,
}

/// Everything [`execute_repack`] will do, in deterministic group order.
#[derive(Debug, Default)]
pub struct RepackPlan {
    pub actions: Vec<RepackAction>,
}

/// Counters and failures from one repackaging run.
#[derive(Debug, Default)]
pub struct RepackSummary {
    /// Destinations written, or that would be written in a dry run
    pub created: usize,
    /// Destinations that already existed and were left alone
    pub skipped_existing: usize,
    /// Per-game failures; one failure never stops the rest of the run
    pub errors: Vec<String>,
}

impl RepackSummary {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Rank every group and pick its winner. Scoring ties keep scan order, so
/// planning the same collection twice yields the same plan.
pub fn plan_repack(
    groups: std::collections::BTreeMap<String, Vec<Candidate>>,
    convention: &dyn NamingConvention,
    dest_dir: &Path,
) -> RepackPlan {
    let mut plan = RepackPlan::default();
    for (group_key, candidates) in groups {
        let mut scored: Vec<(f64, Candidate)> = candidates
            .into_iter()
            .map(|candidate| (convention.preference(&candidate.parsed), candidate))
            .collect();
        // Stable sort, so equal scores preserve scan order
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let ranking = scored
            .iter()
            .map(|(score, candidate)| RankedCandidate {
                entry_name: candidate.entry_name.clone(),
                score: *score,
            })
            .collect();
        let Some((_, winner)) = scored.into_iter().next() else {
            continue;
        };
        let destination = dest_dir.join(convention.output_name(&winner.entry_name));
        plan.actions.push(RepackAction {
            group_key,
            container: winner.container,
            entry_name: winner.entry_name,
            destination,
            ranking,
        });
    }
    plan
}

/// Carry out a plan. Destinations that already exist are skipped, which makes
/// reruns over a partly-pruned collection cheap and idempotent. With
/// `dry_run` nothing is written, but `on_create` still fires for every
/// destination the run would produce.
pub fn execute_repack(
    plan: &RepackPlan,
    convention: &dyn NamingConvention,
    dry_run: bool,
    on_create: &dyn Fn(&Path),
) -> RepackSummary {
    let mut summary = RepackSummary::default();
    for action in &plan.actions {
        if action.destination.exists() {
            debug!("already present: {}", action.destination.display());
            summary.skipped_existing += 1;
            continue;
        }
        on_create(&action.destination);
        if dry_run {
            summary.created += 1;
            continue;
        }
        match repack_one(action, convention) {
            Ok(()) => summary.created += 1,
            Err(err) => {
                // Never leave a half-written destination behind
                let _ = fs::remove_file(&action.destination);
                summary.errors.push(format!("{}: {err}", action.group_key));
            }
        }
    }
    summary
}

fn repack_one(
    action: &RepackAction,
    convention: &dyn NamingConvention,
) -> Result<(), crate::error::PruneError> {
    if let Some(parent) = action.destination.parent() {
        fs::create_dir_all(parent)?;
    }
    match convention.container_mode() {
        // A standalone container already holds exactly the winning dump
        ContainerMode::Standalone => {
            fs::copy(&action.container, &action.destination)?;
        }
        ContainerMode::MultiEntry => {
            let scratch = TempDir::new()?;
            let extracted =
                archive::extract_entry(&action.container, &action.entry_name, scratch.path())?;
            let entry_name = extracted
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| action.entry_name.clone());
            archive::write_single_entry(&action.destination, &extracted, &entry_name)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/repack_tests.rs"]
mod tests;
