//! # AppWipe
//!
//! Removes the files a macOS application leaves behind in your Library.
//!
//! Given an `.app` bundle, AppWipe:
//!
//! - **Reads** `Contents/Info.plist` for the name, bundle identifier, executable and version
//! - **Derives** search terms from those values (plus the short product name)
//! - **Scans** the per-user Library folders (Application Support, Caches, Preferences,
//!   Saved Application State, Containers, Logs, ...) for entries named after the app
//! - **Asks** before deleting anything, unless run with `-y`
//! - **Removes** each entry independently and reports what succeeded and what failed

pub mod apps;
pub mod cli;
pub mod common;
