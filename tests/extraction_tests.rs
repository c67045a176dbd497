//! End-to-end extraction runs against fixture bundles in a fake home directory
//!
//! Every run also scans `/Applications` and `/System/Applications`, so these
//! tests are ignored on macOS, where those roots hold real applications. Off
//! macOS icon rendering is unavailable and a bundle without an icns file
//! always fails. The macOS rendering path is covered by the unit tests in
//! `src/extractor.rs` and `src/backend/render.rs`.

mod common;

use common::{TestHome, png_dimensions, write_icns};
use predicates::prelude::*;
use std::fs;

/// A declares its icns, B only ships a stray icns, C only has an asset catalog
fn abc_home() -> TestHome {
    let home = TestHome::new();

    let a = home.create_bundle("A", Some("A.icns"));
    write_icns(&a.join("Contents/Resources/A.icns"), &[16, 32]);

    let b = home.create_bundle("B", None);
    write_icns(&b.join("Contents/Resources/Custom.icns"), &[16]);

    let c = home.create_bundle("C", None);
    fs::write(c.join("Contents/Resources/Assets.car"), "catalog").unwrap();

    home
}

#[test]
#[cfg_attr(target_os = "macos", ignore = "scans the host's /Applications")]
fn test_extracts_icns_and_reports_render_failure() {
    let home = abc_home();
    let output = home.path.join("icons");

    home.cmd()
        .arg(&output)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 3 application bundle(s)"))
        .stdout(predicate::str::contains("Total:      3"))
        .stdout(predicate::str::contains("Successful: 2"))
        .stdout(predicate::str::contains("Failed:     1"))
        .stdout(predicate::str::contains(
            "C.app: no icon found or extractable",
        ));

    assert_eq!(png_dimensions(&output.join("A.png")), (32, 32));
    assert_eq!(png_dimensions(&output.join("B.png")), (16, 16));
    assert!(!output.join("C.png").exists());
}

#[test]
#[cfg_attr(target_os = "macos", ignore = "scans the host's /Applications")]
fn test_rerun_retries_only_missing_icons() {
    let home = abc_home();
    let output = home.path.join("icons");

    home.cmd().arg(&output).assert().code(1);
    let a_before = fs::read(output.join("A.png")).unwrap();

    home.cmd()
        .arg(&output)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Successful: 0"))
        .stdout(predicate::str::contains("Skipped:    2"))
        .stdout(predicate::str::contains("Failed:     1"));

    assert_eq!(fs::read(output.join("A.png")).unwrap(), a_before);
}

#[test]
#[cfg_attr(target_os = "macos", ignore = "scans the host's /Applications")]
fn test_existing_outputs_skip_everything() {
    let home = abc_home();
    let output = home.path.join("icons");
    fs::create_dir_all(&output).unwrap();
    for name in ["A.png", "B.png", "C.png"] {
        fs::write(output.join(name), "previous run").unwrap();
    }

    home.cmd()
        .arg(&output)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Skipped:    3"))
        .stdout(predicate::str::contains("already extracted"));

    assert_eq!(fs::read_to_string(output.join("C.png")).unwrap(), "previous run");
}

#[test]
#[cfg_attr(target_os = "macos", ignore = "scans the host's /Applications")]
fn test_non_bundle_entries_are_ignored() {
    let home = TestHome::new();
    let apps = home.applications();
    fs::create_dir_all(apps.join("Utilities")).unwrap();
    fs::write(apps.join("readme.txt"), "not an app").unwrap();
    fs::write(apps.join("Fake.app"), "a file, not a bundle").unwrap();

    home.cmd()
        .arg(home.path.join("icons"))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Found 0 application bundle(s)"));
}
