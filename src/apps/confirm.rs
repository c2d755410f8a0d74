use std::io::{BufRead, Write};
use std::path::Path;

use super::bundle::AppMetadata;
use super::scanner::DiscoveredEntry;
use crate::cli::output;
use crate::common::format;

/// Operator decision at the confirmation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Declined,
    /// Nothing was found, so no question was asked
    NothingToRemove,
}

/// Show the app summary and found entries, then ask whether to remove them.
///
/// With `non_interactive` set the answer is yes and `input` is never read.
/// Any answer other than `y`/`yes` (case-insensitive), including EOF, is a no.
pub fn confirm<R: BufRead, W: Write>(
    meta: &AppMetadata,
    entries: &[DiscoveredEntry],
    home: &Path,
    non_interactive: bool,
    input: &mut R,
    out: &mut W,
) -> std::io::Result<Decision> {
    output::write_summary(out, meta, entries, home)?;

    if entries.is_empty() {
        return Ok(Decision::NothingToRemove);
    }

    let count = format::format_count(entries.len());

    if non_interactive {
        writeln!(out, "Auto-confirming removal of {} (-y)", count)?;
        return Ok(Decision::Confirmed);
    }

    write!(out, "Remove {} (y or n)? ", count)?;
    out.flush()?;

    // Raw bytes: an answer that is not valid UTF-8 is a no, not an I/O error
    let mut answer = Vec::new();
    input.read_until(b'\n', &mut answer)?;

    if is_affirmative(&String::from_utf8_lossy(&answer)) {
        Ok(Decision::Confirmed)
    } else {
        Ok(Decision::Declined)
    }
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
