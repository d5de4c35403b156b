//! Collection-root resolution.
//!
//! The source and destination directories given on the command line are
//! relative to a collection root, resolved through a priority chain so the
//! tool can be run from anywhere.

use std::path::PathBuf;

/// Canonical path to the settings file: `~/.config/rom-prune/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("rom-prune").join("settings.toml")
}

/// Resolve the collection root using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `library.collection_root` in `settings.toml`
/// 3. Current working directory
pub fn resolve_collection_root(cli_override: Option<PathBuf>) -> PathBuf {
    cli_override
        .or_else(load_collection_root)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Read `library.collection_root` from `settings.toml`, if set and non-empty.
fn load_collection_root() -> Option<PathBuf> {
    let doc: toml::Value = std::fs::read_to_string(settings_path()).ok()?.parse().ok()?;
    doc.get("library")?
        .get("collection_root")?
        .as_str()
        .filter(|root| !root.is_empty())
        .map(PathBuf::from)
}
