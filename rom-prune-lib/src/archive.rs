//! Thin wrappers around 7z containers: list entries, pull one entry out,
//! and write a fresh single-entry container.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sevenz_rust::{SevenZArchiveEntry, SevenZWriter};

use crate::error::PruneError;

/// Entry names of a container, in archive order. Directories are skipped.
pub fn list_entries(container: &Path) -> Result<Vec<String>, PruneError> {
    let file = fs::File::open(container)?;
    let mut names = Vec::new();
    sevenz_rust::decompress_with_extract_fn(file, container, |entry, _, _| {
        if !entry.is_directory() {
            names.push(entry.name().to_string());
        }
        Ok(true)
    })
    .map_err(|source| PruneError::archive_read(container, source))?;
    Ok(names)
}

/// Extract a single named entry into `dest_dir`, returning the written path.
pub fn extract_entry(
    container: &Path,
    entry_name: &str,
    dest_dir: &Path,
) -> Result<PathBuf, PruneError> {
    let file = fs::File::open(container)?;
    let file_name = Path::new(entry_name)
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| entry_name.into());
    let target = dest_dir.join(file_name);

    let mut written: io::Result<bool> = Ok(false);
    sevenz_rust::decompress_with_extract_fn(file, dest_dir, |entry, reader, _| {
        if entry.is_directory() || entry.name() != entry_name {
            return Ok(true);
        }
        written = fs::File::create(&target)
            .and_then(|mut out| io::copy(reader, &mut out))
            .map(|_| true);
        Ok(true)
    })
    .map_err(|source| PruneError::archive_read(container, source))?;

    match written {
        Ok(true) => Ok(target),
        Ok(false) => Err(PruneError::missing_entry(container, entry_name)),
        Err(err) => Err(err.into()),
    }
}

/// Write a new container at `dest` holding exactly one file.
pub fn write_single_entry(
    dest: &Path,
    source_file: &Path,
    entry_name: &str,
) -> Result<(), PruneError> {
    let mut writer =
        SevenZWriter::create(dest).map_err(|source| PruneError::archive_write(dest, source))?;
    let entry = SevenZArchiveEntry::from_path(source_file, entry_name.to_string());
    let reader = fs::File::open(source_file)?;
    writer
        .push_archive_entry(entry, Some(reader))
        .map_err(|source| PruneError::archive_write(dest, source))?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod tests;
