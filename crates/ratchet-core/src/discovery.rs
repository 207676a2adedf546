//! Migration discovery
//!
//! Recursively walks the migration root for files named
//! `<version>-<Name>.<ext>` and produces the ordered catalog for a
//! version range.

use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Direction of a migration run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Apply change scripts forward, ascending by version
    Up,
    /// Reverse change scripts, descending by version
    Down,
}

impl Direction {
    /// Direction implied by moving from `current` to `target`
    pub fn between(current: i64, target: i64) -> Self {
        if target >= current {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A discovered migration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRecord {
    /// Version number encoded in the file name
    pub version: i64,

    /// Logical name encoded in the file name
    pub name: String,

    /// Path relative to the migration root, kept so the script can be
    /// located again at application time
    pub relative_path: PathBuf,

    /// File extension, used to pick a script loader
    pub extension: String,
}

/// Find all migrations with versions in `(low, high]` under `root`,
/// where `low`/`high` are the min/max of `current` and `target`.
///
/// Ordering follows the direction implied by `current` and `target`:
/// ascending by version for up, descending for down. Two files declaring
/// the same version anywhere in the tree is a hard error.
///
/// A missing or unreadable directory yields an empty catalog for that
/// subtree rather than failing.
pub fn find_migrations(
    current: i64,
    target: i64,
    root: &Path,
) -> CoreResult<Vec<MigrationRecord>> {
    let low = current.min(target);
    let high = current.max(target);

    let mut records = Vec::new();
    collect_recursive(root, root, low, high, &mut records)?;

    let mut seen: HashMap<i64, PathBuf> = HashMap::new();
    for record in &records {
        if let Some(first) = seen.insert(record.version, record.relative_path.clone()) {
            return Err(CoreError::DuplicateVersion {
                version: record.version,
                path1: first.display().to_string(),
                path2: record.relative_path.display().to_string(),
            });
        }
    }

    match Direction::between(current, target) {
        Direction::Up => records.sort_by_key(|r| r.version),
        Direction::Down => records.sort_by_key(|r| std::cmp::Reverse(r.version)),
    }

    Ok(records)
}

/// Recursively collect matching files under `dir` into `records`
fn collect_recursive(
    root: &Path,
    dir: &Path,
    low: i64,
    high: i64,
    records: &mut Vec<MigrationRecord>,
) -> CoreResult<()> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!(
                "Skipping unreadable migration directory {}: {}",
                dir.display(),
                e
            );
            return Ok(());
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();

        if path.is_dir() {
            collect_recursive(root, &path, low, high, records)?;
        } else if let Some(record) = parse_file_name(&path, root) {
            if low < record.version && record.version <= high {
                records.push(record);
            } else {
                log::debug!(
                    "Migration {} outside range ({}, {}]",
                    record.relative_path.display(),
                    low,
                    high
                );
            }
        }
    }

    Ok(())
}

/// Parse `<digits>-<Name>.<ext>` into a record, or `None` for files that
/// don't follow the naming convention
fn parse_file_name(path: &Path, root: &Path) -> Option<MigrationRecord> {
    let stem = path.file_stem()?.to_str()?;
    let extension = path.extension()?.to_str()?;

    let (digits, name) = stem.split_once('-')?;
    if digits.is_empty() || name.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let version: i64 = digits.parse().ok()?;

    let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    Some(MigrationRecord {
        version,
        name: name.to_string(),
        relative_path,
        extension: extension.to_string(),
    })
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
