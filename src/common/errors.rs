use std::path::PathBuf;

/// Custom error types for AppWipe operations.
/// We use `anyhow` at the top level for CLI error handling,
/// but these typed errors allow modules to be precise about failures.
#[derive(Debug, thiserror::Error)]
pub enum AppWipeError {
    /// No application path was given on the command line
    #[error("No app path provided")]
    NoAppPath,

    /// Bundle root or its Info.plist does not exist
    #[error("Cannot find app plist at {}", .path.display())]
    BundleNotFound { path: PathBuf },

    /// Info.plist exists but could not be parsed
    #[error("Cannot read app plist at {}: {source}", .path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    /// Info.plist has no usable CFBundleIdentifier
    #[error("Cannot find app bundle identifier in {}", .path.display())]
    MissingIdentifier { path: PathBuf },

    /// No home directory could be resolved for the per-user roots
    #[error("Cannot determine home directory; pass --home or set APPWIPE_HOME")]
    HomeNotFound,

    /// Configuration file is invalid
    #[error("Config error in '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },
}
