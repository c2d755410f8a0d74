use serde::Serialize;
use std::path::Path;

use super::bundle::AppMetadata;
use super::scanner::{DiscoveredEntry, EntryKind};
use super::terms::SearchTerms;
use crate::common::{permissions, safety};

/// Result of removing a single entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RemovalOutcome {
    Removed,
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct RemovalResult {
    #[serde(flatten)]
    pub entry: DiscoveredEntry,
    pub outcome: RemovalOutcome,
}

/// Result of an app uninstall operation
#[derive(Debug, Clone, Serialize)]
pub struct UninstallReport {
    pub app: AppMetadata,
    pub terms: SearchTerms,
    pub results: Vec<RemovalResult>,
}

impl UninstallReport {
    pub fn removed(&self) -> impl Iterator<Item = &RemovalResult> {
        self.results
            .iter()
            .filter(|r| r.outcome == RemovalOutcome::Removed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &RemovalResult> {
        self.results
            .iter()
            .filter(|r| r.outcome != RemovalOutcome::Removed)
    }

    pub fn removed_count(&self) -> usize {
        self.removed().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn bytes_freed(&self) -> u64 {
        self.removed().map(|r| r.entry.size).sum()
    }

    /// True when removals were attempted and none of them succeeded
    pub fn all_failed(&self) -> bool {
        !self.results.is_empty() && self.removed_count() == 0
    }
}

/// Remove every entry in order. A failure is recorded and the batch moves on;
/// nothing is retried.
///
/// `roots` are the scan roots; they and other protected paths are refused.
pub fn remove_entries(
    entries: &[DiscoveredEntry],
    home: &Path,
    roots: &[&Path],
) -> Vec<RemovalResult> {
    entries
        .iter()
        .map(|entry| {
            let outcome = match remove_entry(entry, home, roots) {
                Ok(()) => {
                    tracing::info!(path = %entry.path.display(), "removed");
                    RemovalOutcome::Removed
                }
                Err(reason) => {
                    tracing::warn!(path = %entry.path.display(), %reason, "removal failed");
                    RemovalOutcome::Failed { reason }
                }
            };
            RemovalResult {
                entry: entry.clone(),
                outcome,
            }
        })
        .collect()
}

/// Remove a file or directory
fn remove_entry(entry: &DiscoveredEntry, home: &Path, roots: &[&Path]) -> Result<(), String> {
    let path = &entry.path;

    if safety::is_protected(path, home, roots) {
        return Err(format!(
            "SAFETY: Refusing to remove protected path: {}",
            path.display()
        ));
    }

    let result = match entry.kind {
        EntryKind::Directory => std::fs::remove_dir_all(path),
        EntryKind::File => std::fs::remove_file(path),
    };

    result.map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => {
            format!("{}. {}", e, permissions::permission_hint(path))
        }
        std::io::ErrorKind::NotFound => "No longer exists".to_string(),
        _ => e.to_string(),
    })
}
