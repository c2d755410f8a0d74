use std::path::Path;

/// Known SIP-protected paths that cannot be modified
const SIP_PATHS: &[&str] = &[
    "/System",
    "/usr",
    "/bin",
    "/sbin",
    "/var",
    "/Applications/Utilities",
];

/// Library areas that require Full Disk Access to modify
const FDA_PATHS: &[&str] = &[
    "Library/Containers",
    "Library/Group Containers",
    "Library/Cookies",
    "Library/Safari",
    "Library/Mail",
];

/// Check if a path is SIP-protected
pub fn is_sip_protected(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    SIP_PATHS.iter().any(|p| path_str.starts_with(p))
}

/// Check if a path likely requires Full Disk Access
pub fn requires_full_disk_access(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    FDA_PATHS.iter().any(|p| path_str.contains(p))
}

/// Get a helpful message for permission issues
pub fn permission_hint(path: &Path) -> String {
    if is_sip_protected(path) {
        "This path is protected by System Integrity Protection (SIP) and cannot be modified."
            .to_string()
    } else if requires_full_disk_access(path) {
        "This path requires Full Disk Access. Grant it in System Settings > Privacy & Security > Full Disk Access."
            .to_string()
    } else {
        format!(
            "Check file permissions for '{}'. You may need to run with sudo.",
            path.display()
        )
    }
}
