use serde::Serialize;
use std::path::{Path, PathBuf};

/// Category of per-user data a scan root holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    AppSupport,
    Cache,
    Preferences,
    SavedState,
    Container,
    Logs,
    GroupContainer,
    HttpStorage,
    WebKit,
    Cookies,
    LaunchAgent,
    ByHostPreferences,
    Custom,
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationKind::AppSupport => write!(f, "App Support"),
            LocationKind::Cache => write!(f, "Cache"),
            LocationKind::Preferences => write!(f, "Preferences"),
            LocationKind::SavedState => write!(f, "Saved State"),
            LocationKind::Container => write!(f, "Container"),
            LocationKind::Logs => write!(f, "Logs"),
            LocationKind::GroupContainer => write!(f, "Group Container"),
            LocationKind::HttpStorage => write!(f, "HTTP Storage"),
            LocationKind::WebKit => write!(f, "WebKit Data"),
            LocationKind::Cookies => write!(f, "Cookies"),
            LocationKind::LaunchAgent => write!(f, "Launch Agent"),
            LocationKind::ByHostPreferences => write!(f, "ByHost Preferences"),
            LocationKind::Custom => write!(f, "Custom"),
        }
    }
}

/// Built-in roots relative to the home directory, in scan priority order
const LIBRARY_ROOTS: &[(&str, LocationKind)] = &[
    ("Library/Application Support", LocationKind::AppSupport),
    ("Library/Caches", LocationKind::Cache),
    ("Library/Preferences", LocationKind::Preferences),
    ("Library/Saved Application State", LocationKind::SavedState),
    ("Library/Containers", LocationKind::Container),
    ("Library/Logs", LocationKind::Logs),
    ("Library/Group Containers", LocationKind::GroupContainer),
    ("Library/HTTPStorages", LocationKind::HttpStorage),
    ("Library/WebKit", LocationKind::WebKit),
    ("Library/Cookies", LocationKind::Cookies),
    ("Library/LaunchAgents", LocationKind::LaunchAgent),
    ("Library/Preferences/ByHost", LocationKind::ByHostPreferences),
];

/// A directory whose immediate children are checked against search terms
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRoot {
    pub path: PathBuf,
    pub kind: LocationKind,
}

/// Build the ordered list of scan roots for a home directory, followed by
/// any extra roots from the config. Roots are not checked for existence here.
pub fn scan_roots(home: &Path, extra: &[PathBuf]) -> Vec<ScanRoot> {
    let mut roots: Vec<ScanRoot> = LIBRARY_ROOTS
        .iter()
        .map(|(rel, kind)| ScanRoot {
            path: home.join(rel),
            kind: *kind,
        })
        .collect();

    for path in extra {
        if roots.iter().any(|r| &r.path == path) {
            continue;
        }
        roots.push(ScanRoot {
            path: path.clone(),
            kind: LocationKind::Custom,
        });
    }

    roots
}
