pub mod bundle;
pub mod confirm;
pub mod locations;
pub mod scanner;
pub mod terms;
pub mod uninstaller;

pub use bundle::{read_metadata, AppMetadata};
pub use confirm::{confirm, Decision};
pub use locations::{scan_roots, LocationKind, ScanRoot};
pub use scanner::{DiscoveredEntry, EntryKind, LeftoverScan};
pub use terms::{derive_terms, SearchTerms};
pub use uninstaller::{remove_entries, RemovalOutcome, RemovalResult, UninstallReport};

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::common::config::Config;

/// Options for one uninstall run, resolved by the CLI
#[derive(Debug, Clone)]
pub struct UninstallOptions {
    pub app_path: PathBuf,
    /// Home directory the per-user Library roots are resolved against
    pub home: PathBuf,
    /// Remove without asking
    pub non_interactive: bool,
    /// List what would be removed and stop
    pub dry_run: bool,
}

/// How a run ended
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UninstallOutcome {
    NothingFound {
        app: AppMetadata,
        terms: SearchTerms,
    },
    Cancelled {
        app: AppMetadata,
        terms: SearchTerms,
        entries: Vec<DiscoveredEntry>,
    },
    DryRun {
        app: AppMetadata,
        terms: SearchTerms,
        entries: Vec<DiscoveredEntry>,
    },
    Completed(UninstallReport),
}

impl UninstallOutcome {
    /// 1 when every attempted removal failed, otherwise 0
    pub fn exit_code(&self) -> u8 {
        match self {
            UninstallOutcome::Completed(report) if report.all_failed() => 1,
            _ => 0,
        }
    }
}

/// Run the whole pipeline: read the bundle, derive terms, scan, confirm, remove.
///
/// Nothing is deleted unless the confirmation step says yes. Human-readable
/// progress goes to `out`; `input` is only read for the yes/no answer.
pub fn run_uninstall<R: BufRead, W: Write>(
    opts: &UninstallOptions,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<UninstallOutcome> {
    let app = read_metadata(&opts.app_path)?;
    let terms = derive_terms(&app);

    output::write_search_start(out, &terms)?;

    let roots = scan_roots(&opts.home, &config.extra_roots(&opts.home));
    let root_paths: Vec<PathBuf> = roots.iter().map(|r| r.path.clone()).collect();
    let entries: Vec<DiscoveredEntry> = LeftoverScan::new(roots, &terms, config).collect();

    tracing::debug!(found = entries.len(), "scan finished");

    if opts.dry_run {
        output::write_summary(out, &app, &entries, &opts.home)?;
        output::write_dry_run(out, &entries)?;
        return Ok(UninstallOutcome::DryRun {
            app,
            terms,
            entries,
        });
    }

    let decision = confirm(
        &app,
        &entries,
        &opts.home,
        opts.non_interactive,
        input,
        out,
    )
    .context("Failed to read confirmation")?;

    match decision {
        Decision::NothingToRemove => {
            writeln!(out, "No app data found.")?;
            Ok(UninstallOutcome::NothingFound { app, terms })
        }
        Decision::Declined => {
            output::write_cancelled(out)?;
            Ok(UninstallOutcome::Cancelled {
                app,
                terms,
                entries,
            })
        }
        Decision::Confirmed => {
            let protected: Vec<&Path> = root_paths.iter().map(PathBuf::as_path).collect();
            let results = remove_entries(&entries, &opts.home, &protected);
            let report = UninstallReport {
                app,
                terms,
                results,
            };
            output::write_report(out, &report, &opts.home)?;
            Ok(UninstallOutcome::Completed(report))
        }
    }
}
