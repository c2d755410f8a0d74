use std::path::{Path, PathBuf};
use tempfile::TempDir;

use appwipe::apps::{
    self, AppMetadata, DiscoveredEntry, EntryKind, LocationKind, RemovalOutcome, RemovalResult,
    SearchTerms, UninstallOptions, UninstallOutcome, UninstallReport,
};
use appwipe::cli::output;
use appwipe::common::config::Config;
use appwipe::common::errors::AppWipeError;

/// Helper to create a mock .app bundle with the given Info.plist keys
fn create_app(dir: &Path, name: &str, keys: &[(&str, &str)]) -> PathBuf {
    let app = dir.join(format!("{}.app", name));
    std::fs::create_dir_all(app.join("Contents")).unwrap();

    let mut body = String::new();
    for (k, v) in keys {
        body.push_str(&format!("<key>{}</key><string>{}</string>\n", k, v));
    }
    let plist = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<plist version=\"1.0\">\n<dict>\n{}</dict>\n</plist>\n",
        body
    );
    std::fs::write(app.join("Contents/Info.plist"), plist).unwrap();
    app
}

fn test_app(dir: &Path) -> PathBuf {
    create_app(
        dir,
        "TestApp",
        &[
            ("CFBundleIdentifier", "com.test.testapp"),
            ("CFBundleName", "TestApp"),
            ("CFBundleExecutable", "TestApp"),
            ("CFBundleVersion", "1.0"),
        ],
    )
}

fn options(app: &Path, home: &Path, non_interactive: bool) -> UninstallOptions {
    UninstallOptions {
        app_path: app.to_path_buf(),
        home: home.to_path_buf(),
        non_interactive,
        dry_run: false,
    }
}

fn run(opts: &UninstallOptions, answer: &str) -> (anyhow::Result<UninstallOutcome>, String) {
    let mut input = answer.as_bytes();
    let mut out = Vec::new();
    let result = apps::run_uninstall(opts, &Config::default(), &mut input, &mut out);
    (result, String::from_utf8(out).unwrap())
}

/// Create `n` leftovers spread across the Library roots, all named after the app
fn create_leftovers(home: &Path, n: usize) -> Vec<PathBuf> {
    let roots = [
        "Library/Application Support",
        "Library/Caches",
        "Library/Preferences",
        "Library/Saved Application State",
        "Library/Containers",
        "Library/Logs",
    ];
    (0..n)
        .map(|i| {
            let root = home.join(roots[i % roots.len()]);
            std::fs::create_dir_all(&root).unwrap();
            let path = root.join(format!("com.test.testapp.{}", i));
            std::fs::write(&path, format!("data {}", i)).unwrap();
            path
        })
        .collect()
}

#[test]
fn test_round_trip_removes_all_matches() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let app = test_app(tmp.path());
    let files = create_leftovers(home.path(), 9);

    let unrelated = home.path().join("Library/Caches/com.unrelated.tool");
    std::fs::write(&unrelated, "keep").unwrap();

    let (result, _) = run(&options(&app, home.path(), true), "");
    let outcome = result.unwrap();

    match &outcome {
        UninstallOutcome::Completed(report) => {
            assert_eq!(report.removed_count(), 9);
            assert_eq!(report.failed_count(), 0);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(outcome.exit_code(), 0);

    for f in &files {
        assert!(!f.exists(), "{} should be gone", f.display());
    }
    assert!(unrelated.exists());
}

#[test]
fn test_decline_changes_nothing() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let app = test_app(tmp.path());
    let files = create_leftovers(home.path(), 4);

    let (result, text) = run(&options(&app, home.path(), false), "n\n");
    let outcome = result.unwrap();

    match &outcome {
        UninstallOutcome::Cancelled { entries, .. } => {
            let mut found: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();
            found.sort();
            let mut expected = files.clone();
            expected.sort();
            assert_eq!(found, expected);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(outcome.exit_code(), 0);
    assert!(text.contains("Cancelled"));

    for f in &files {
        assert!(f.exists());
        assert!(std::fs::read_to_string(f).unwrap().starts_with("data"));
    }
}

#[test]
fn test_missing_identifier_is_fatal_before_scan() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let app = create_app(tmp.path(), "BadApp", &[("CFBundleName", "BadApp")]);

    let (result, text) = run(&options(&app, home.path(), true), "");
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AppWipeError>(),
        Some(AppWipeError::MissingIdentifier { .. })
    ));
    assert!(!text.contains("Searching for files matching"));
}

#[test]
fn test_entries_report_location_and_kind() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let app = test_app(tmp.path());

    let state = home.path().join("Library/Saved Application State/com.test.testapp.savedState");
    std::fs::create_dir_all(&state).unwrap();
    std::fs::write(state.join("windows.plist"), "1234").unwrap();

    let opts = UninstallOptions {
        dry_run: true,
        ..options(&app, home.path(), false)
    };
    let (result, text) = run(&opts, "");

    match result.unwrap() {
        UninstallOutcome::DryRun { entries, .. } => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].kind, EntryKind::Directory);
            assert_eq!(entries[0].location, LocationKind::SavedState);
            assert_eq!(entries[0].size, 4);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(state.exists());
    assert!(text.contains("[Saved State]"));
}

#[test]
fn test_extra_locations_from_config() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let app = test_app(tmp.path());

    let extra = home.path().join("Library/Application Scripts");
    std::fs::create_dir_all(extra.join("com.test.testapp")).unwrap();

    let config = Config {
        extra_locations: vec!["~/Library/Application Scripts".to_string()],
        ..Config::default()
    };
    let mut input: &[u8] = b"";
    let mut out = Vec::new();
    let outcome =
        apps::run_uninstall(&options(&app, home.path(), true), &config, &mut input, &mut out)
            .unwrap();

    match outcome {
        UninstallOutcome::Completed(report) => {
            assert_eq!(report.removed_count(), 1);
            assert_eq!(report.results[0].entry.location, LocationKind::Custom);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(!extra.join("com.test.testapp").exists());
    assert!(extra.exists(), "the scan root itself stays");
}

#[test]
fn test_nothing_found_outcome() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let app = test_app(tmp.path());

    let (result, text) = run(&options(&app, home.path(), false), "y\n");
    assert!(matches!(result.unwrap(), UninstallOutcome::NothingFound { .. }));
    assert!(text.contains("No app data found"));
}

#[test]
fn test_non_utf8_answer_cancels() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let app = test_app(tmp.path());
    let files = create_leftovers(home.path(), 1);

    let mut input: &[u8] = b"\xff\xfe\n";
    let mut out = Vec::new();
    let outcome = apps::run_uninstall(
        &options(&app, home.path(), false),
        &Config::default(),
        &mut input,
        &mut out,
    )
    .unwrap();

    assert!(matches!(outcome, UninstallOutcome::Cancelled { .. }));
    assert_eq!(outcome.exit_code(), 0);
    assert!(files[0].exists());
}

#[test]
fn test_all_removals_failing_sets_exit_code() {
    let home = Path::new("/Users/t");
    let report = UninstallReport {
        app: AppMetadata {
            name: Some("TestApp".to_string()),
            bundle_id: "com.test.testapp".to_string(),
            executable: None,
            version: None,
        },
        terms: SearchTerms::default(),
        results: vec![RemovalResult {
            entry: DiscoveredEntry {
                path: home.join("Library/Caches/com.test.testapp"),
                kind: EntryKind::Directory,
                location: LocationKind::Cache,
                size: 10,
            },
            outcome: RemovalOutcome::Failed {
                reason: "Permission denied".to_string(),
            },
        }],
    };

    let mut out = Vec::new();
    output::write_report(&mut out, &report, home).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("No files could be removed."));
    assert!(text.contains("Permission denied"));
    assert!(text.contains("0 B freed"));

    assert_eq!(UninstallOutcome::Completed(report).exit_code(), 1);
}

#[test]
fn test_partial_failure_exits_zero() {
    let home = Path::new("/Users/t");
    let entry = |name: &str| DiscoveredEntry {
        path: home.join("Library/Caches").join(name),
        kind: EntryKind::File,
        location: LocationKind::Cache,
        size: 1,
    };
    let report = UninstallReport {
        app: AppMetadata {
            name: None,
            bundle_id: "com.test.testapp".to_string(),
            executable: None,
            version: None,
        },
        terms: SearchTerms::default(),
        results: vec![
            RemovalResult {
                entry: entry("com.test.testapp.a"),
                outcome: RemovalOutcome::Removed,
            },
            RemovalResult {
                entry: entry("com.test.testapp.b"),
                outcome: RemovalOutcome::Failed {
                    reason: "No longer exists".to_string(),
                },
            },
        ],
    };

    let mut out = Vec::new();
    output::write_report(&mut out, &report, home).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("1 failed"));
    assert!(!text.contains("No files could be removed."));

    assert_eq!(UninstallOutcome::Completed(report).exit_code(), 0);
}
