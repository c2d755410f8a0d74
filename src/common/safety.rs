use std::path::Path;

/// Paths that must NEVER be deleted under any circumstances.
const PROTECTED_PATHS: &[&str] = &[
    "/",
    "/System",
    "/Applications",
    "/Users",
    "/Library",
    "/usr",
    "/bin",
    "/sbin",
    "/var",
    "/etc",
    "/opt",
    "/private",
    "/cores",
    "/Volumes",
];

/// Paths under home that must never be deleted entirely
const PROTECTED_HOME_DIRS: &[&str] = &[
    "", // home dir itself
    "Desktop",
    "Documents",
    "Downloads",
    "Pictures",
    "Music",
    "Movies",
    "Library",
    "Applications",
    ".ssh",
    ".gnupg",
];

/// Check if a path is protected and should NEVER be deleted.
///
/// `home` is the home directory the scan ran against; `roots` are the scan
/// roots themselves, which are containers and never removal targets.
pub fn is_protected(path: &Path, home: &Path, roots: &[&Path]) -> bool {
    if PROTECTED_PATHS.iter().any(|p| path == Path::new(p)) {
        return true;
    }

    let protected_home = PROTECTED_HOME_DIRS.iter().any(|dir| {
        if dir.is_empty() {
            path == home
        } else {
            path == home.join(dir)
        }
    });
    if protected_home {
        return true;
    }

    roots.iter().any(|root| path == *root)
}
