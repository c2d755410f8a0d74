use colored::*;
use std::io::{self, Write};
use std::path::Path;

use crate::apps::{AppMetadata, DiscoveredEntry, RemovalOutcome, SearchTerms, UninstallReport};
use crate::common::format::{format_count, format_path, format_size, format_size_colored};

/// Print the search phase header and the derived terms
pub fn write_search_start<W: Write>(out: &mut W, terms: &SearchTerms) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Finding app data…".bold())?;
    writeln!(out, "Searching for files matching: {}", terms)?;
    Ok(())
}

/// Print app identity
pub fn write_app_info<W: Write>(out: &mut W, app: &AppMetadata) -> io::Result<()> {
    let unknown = "(unknown)";
    writeln!(out)?;
    writeln!(out, "{}", "App Information:".bold())?;
    writeln!(out, "  Name: {}", app.name.as_deref().unwrap_or(unknown))?;
    writeln!(out, "  Bundle ID: {}", app.bundle_id)?;
    writeln!(out, "  Executable: {}", app.executable.as_deref().unwrap_or(unknown))?;
    writeln!(out, "  Version: {}", app.version.as_deref().unwrap_or(unknown))?;
    Ok(())
}

/// Print discovered entries with their location, kind and size
pub fn write_entries<W: Write>(
    out: &mut W,
    entries: &[DiscoveredEntry],
    home: &Path,
) -> io::Result<()> {
    writeln!(out)?;
    if entries.is_empty() {
        writeln!(out, "  {}", "Nothing found in the Library folders.".dimmed())?;
        return Ok(());
    }

    let total: u64 = entries.iter().map(|e| e.size).sum();
    writeln!(
        out,
        "Found {} ({}):",
        format_count(entries.len()),
        format_size_colored(total)
    )?;
    for entry in entries {
        writeln!(
            out,
            "  {} {:<4} {} ({})",
            format!("[{}]", entry.location).dimmed(),
            entry.kind,
            format_path(&entry.path, home),
            format_size(entry.size),
        )?;
    }
    writeln!(out)?;
    Ok(())
}

/// App identity followed by what was found
pub fn write_summary<W: Write>(
    out: &mut W,
    app: &AppMetadata,
    entries: &[DiscoveredEntry],
    home: &Path,
) -> io::Result<()> {
    write_app_info(out, app)?;
    write_entries(out, entries, home)
}

pub fn write_dry_run<W: Write>(out: &mut W, entries: &[DiscoveredEntry]) -> io::Result<()> {
    let total: u64 = entries.iter().map(|e| e.size).sum();
    writeln!(
        out,
        "  {} Dry run: would remove {} ({}). Nothing was deleted.",
        "ℹ️",
        format_count(entries.len()),
        format_size(total)
    )
}

pub fn write_cancelled<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Cancelled".yellow())
}

/// Print uninstall report
pub fn write_report<W: Write>(
    out: &mut W,
    report: &UninstallReport,
    home: &Path,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Removing leftovers of {}…", report.app.display_name().bold())?;
    for result in &report.results {
        match &result.outcome {
            RemovalOutcome::Removed => {
                writeln!(out, "  {} {}", "✓".green(), format_path(&result.entry.path, home))?;
            }
            RemovalOutcome::Failed { reason } => {
                writeln!(
                    out,
                    "  {} {}: {}",
                    "✗".red(),
                    format_path(&result.entry.path, home),
                    reason
                )?;
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Removed {} of {} ({} freed), {} failed",
        report.removed_count(),
        format_count(report.results.len()),
        format_size(report.bytes_freed()),
        report.failed_count(),
    )?;

    if report.all_failed() {
        writeln!(out, "{}", "No files could be removed.".red().bold())?;
    }
    Ok(())
}
