use colored::*;
use std::path::Path;

const UNITS: &[&str] = &["KB", "MB", "GB", "TB"];

/// Binary-prefixed size: whole bytes below 1 KB, one decimal for KB, two above
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{:.1} {}", value, UNITS[unit])
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

/// Leftover total, highlighted when an app left a lot behind
/// (yellow from 50 MB, red from 500 MB)
pub fn format_size_colored(bytes: u64) -> ColoredString {
    const NOTABLE: u64 = 50 * 1024 * 1024;
    const LARGE: u64 = 500 * 1024 * 1024;

    let s = format_size(bytes);
    match bytes {
        b if b >= LARGE => s.red().bold(),
        b if b >= NOTABLE => s.yellow(),
        _ => s.normal(),
    }
}

/// Format item count with appropriate plural
pub fn format_count(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Format a path for display, replacing the home directory with ~
pub fn format_path(path: &Path, home: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(stripped) if !stripped.as_os_str().is_empty() => {
            format!("~/{}", stripped.display())
        }
        Ok(_) => "~".to_string(),
        Err(_) => path.display().to_string(),
    }
}
