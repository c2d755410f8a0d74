use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::common::errors::AppWipeError;

/// Location of the manifest inside an .app bundle
pub const INFO_PLIST: &str = "Contents/Info.plist";

/// Identity read from an application's Info.plist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppMetadata {
    pub name: Option<String>,
    pub bundle_id: String,
    pub executable: Option<String>,
    pub version: Option<String>,
}

impl AppMetadata {
    /// Best label for display: the bundle name, else the executable, else the identifier
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.executable.as_deref())
            .unwrap_or(&self.bundle_id)
    }
}

/// Path of the manifest for a bundle root
pub fn info_plist_path(app_path: &Path) -> PathBuf {
    app_path.join(INFO_PLIST)
}

/// Read an application bundle's Info.plist.
///
/// Fails with `BundleNotFound` if the bundle is not a directory or has no
/// manifest, and with `MissingIdentifier` if `CFBundleIdentifier` is absent
/// or blank.
pub fn read_metadata(app_path: &Path) -> Result<AppMetadata, AppWipeError> {
    let info_plist = info_plist_path(app_path);

    if !app_path.is_dir() || !info_plist.is_file() {
        return Err(AppWipeError::BundleNotFound { path: info_plist });
    }

    let plist_val = plist::Value::from_file(&info_plist).map_err(|source| {
        AppWipeError::ManifestUnreadable {
            path: info_plist.clone(),
            source,
        }
    })?;

    // A manifest whose root is not a dictionary carries no keys at all
    let dict = match plist_val.as_dictionary() {
        Some(d) => d,
        None => return Err(AppWipeError::MissingIdentifier { path: info_plist }),
    };

    let string_key = |key: &str| {
        dict.get(key)
            .and_then(|v| v.as_string())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let bundle_id = string_key("CFBundleIdentifier")
        .ok_or_else(|| AppWipeError::MissingIdentifier {
            path: info_plist.clone(),
        })?;

    let metadata = AppMetadata {
        name: string_key("CFBundleName").or_else(|| string_key("CFBundleDisplayName")),
        bundle_id,
        executable: string_key("CFBundleExecutable"),
        version: string_key("CFBundleShortVersionString").or_else(|| string_key("CFBundleVersion")),
    };

    tracing::debug!(
        bundle_id = %metadata.bundle_id,
        name = ?metadata.name,
        "read app metadata"
    );

    Ok(metadata)
}
