//! Collection pruning pipeline: scan containers, rank each game's dumps,
//! repackage the winners.
//!
//! The pipeline is generic over
//! [`NamingConvention`](rom_prune_core::NamingConvention); everything
//! filesystem- and archive-shaped lives here, while the filename grammar and
//! selection policies live in `rom-prune-core`.

pub mod archive;
pub mod error;
pub mod repack;
pub mod scanner;
pub mod settings;

pub use error::PruneError;
pub use repack::{RepackPlan, RepackSummary, execute_repack, plan_repack};
pub use scanner::{Candidate, ScanOutcome, scan_collection};
