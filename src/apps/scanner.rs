use serde::Serialize;
use std::collections::HashSet;
use std::fs::ReadDir;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::locations::{LocationKind, ScanRoot};
use super::terms::SearchTerms;
use crate::common::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => f.pad("file"),
            EntryKind::Directory => f.pad("dir"),
        }
    }
}

/// A leftover file or directory whose name matched a search term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveredEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub location: LocationKind,
    pub size: u64,
}

/// Lazy scan over the immediate children of each root.
///
/// Roots are visited in the order given. Within a root, entries come out in
/// whatever order the directory listing returns; no sorting is applied.
/// Roots that do not exist or cannot be listed are skipped.
pub struct LeftoverScan<'a> {
    terms: &'a SearchTerms,
    config: &'a Config,
    roots: std::vec::IntoIter<ScanRoot>,
    current: Option<(LocationKind, ReadDir)>,
    seen: HashSet<PathBuf>,
    found_dirs: Vec<PathBuf>,
}

impl<'a> LeftoverScan<'a> {
    pub fn new(roots: Vec<ScanRoot>, terms: &'a SearchTerms, config: &'a Config) -> Self {
        Self {
            terms,
            config,
            roots: roots.into_iter(),
            current: None,
            seen: HashSet::new(),
            found_dirs: Vec::new(),
        }
    }

    /// Open the next root that can be listed, or return false when none remain
    fn advance_root(&mut self) -> bool {
        for root in self.roots.by_ref() {
            match std::fs::read_dir(&root.path) {
                Ok(rd) => {
                    tracing::debug!(root = %root.path.display(), "scanning");
                    self.current = Some((root.kind, rd));
                    return true;
                }
                Err(e) => {
                    tracing::debug!(root = %root.path.display(), error = %e, "skipping root");
                }
            }
        }
        false
    }

    fn accept(
        &mut self,
        entry: std::fs::DirEntry,
        location: LocationKind,
    ) -> Option<DiscoveredEntry> {
        let name = entry.file_name();
        if !self.terms.matches(&name.to_string_lossy()) {
            return None;
        }

        let path = entry.path();
        if self.config.is_excluded(&path) {
            tracing::debug!(path = %path.display(), "excluded by config");
            return None;
        }

        // Same path from two roots, or nested under a directory already found
        if self.seen.contains(&path) || self.found_dirs.iter().any(|d| path.starts_with(d)) {
            return None;
        }

        // file_type() does not follow symlinks, so a linked directory is
        // unlinked rather than emptied
        let kind = match entry.file_type() {
            Ok(ft) if ft.is_dir() => EntryKind::Directory,
            Ok(_) => EntryKind::File,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "cannot stat entry");
                return None;
            }
        };

        let size = match kind {
            EntryKind::Directory => dir_size(&path),
            EntryKind::File => std::fs::symlink_metadata(&path).map(|m| m.len()).unwrap_or(0),
        };

        self.seen.insert(path.clone());
        if kind == EntryKind::Directory {
            self.found_dirs.push(path.clone());
        }

        tracing::debug!(path = %path.display(), %kind, %location, "matched");
        Some(DiscoveredEntry {
            path,
            kind,
            location,
            size,
        })
    }
}

impl Iterator for LeftoverScan<'_> {
    type Item = DiscoveredEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let step = match self.current.as_mut() {
                Some((location, rd)) => Some((*location, rd.next())),
                None => None,
            };

            match step {
                Some((location, Some(Ok(entry)))) => {
                    if let Some(found) = self.accept(entry, location) {
                        return Some(found);
                    }
                }
                Some((_, Some(Err(e)))) => {
                    tracing::debug!(error = %e, "unreadable directory entry");
                }
                Some((_, None)) => self.current = None,
                None => {
                    if !self.advance_root() {
                        return None;
                    }
                }
            }
        }
    }
}

/// Total size of all regular files under a directory
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
