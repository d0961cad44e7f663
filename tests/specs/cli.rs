//! Behavioral specs for argument handling and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Usage errors
// =============================================================================

/// > A missing repo path prints usage and exits non-zero
#[test]
fn missing_repo_path_prints_usage() {
    let trees = Trees::new();

    sift_cmd()
        .arg(trees.root().join("ghost"))
        .arg(trees.dest())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("does not exist"))
        .stderr(predicates::str::contains("Usage"))
        .stderr(predicates::str::contains("Matching rules"));
}

/// > A missing dest path prints usage and exits non-zero
#[test]
fn missing_dest_path_prints_usage() {
    let trees = Trees::new();

    sift_cmd()
        .arg(trees.repo())
        .arg(trees.root().join("ghost"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("dest path does not exist"));
}

/// > Usage errors happen before any filesystem mutation
#[test]
fn usage_error_leaves_dest_untouched() {
    let trees = Trees::new();
    trees.file("dest/Queen/old.flac", "old");

    sift_cmd()
        .args(["--clear", "--missing"])
        .arg(trees.root().join("ghost"))
        .arg(trees.dest())
        .assert()
        .code(2);

    assert!(trees.exists("dest/Queen/old.flac"));
    assert!(!trees.exists("dest/missing.txt"));
}

/// > Excess positional arguments are rejected
#[test]
fn excess_arguments_are_rejected() {
    let trees = Trees::new();

    sift_cmd()
        .arg(trees.repo())
        .arg(trees.dest())
        .arg("extra")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("Usage"));
}

/// > Unknown flags are rejected
#[test]
fn unknown_flag_is_rejected() {
    let trees = Trees::new();

    trees.sift(&["--frobnicate"]).assert().code(2);
}

// =============================================================================
// Verbosity
// =============================================================================

/// > Quiet by default
#[test]
fn default_run_is_quiet() {
    let trees = Trees::new();
    trees.file("repo/Queen - Live.flac", "a").dir("dest/Queen");

    trees.sift(&[]).assert().success().stdout("").stderr("");
}

/// > -v announces links and unmatched items
#[test]
fn verbose_reports_links_and_misses() {
    let trees = Trees::new();
    trees
        .file("repo/Queen - Live.flac", "a")
        .file("repo/Beatles - Help.flac", "b")
        .dir("dest/Queen");

    trees
        .sift(&["-v"])
        .assert()
        .success()
        .stderr(predicates::str::contains("Linking:"))
        .stderr(predicates::str::contains("No match:"))
        .stderr(predicates::str::contains("Beatles - Help.flac"));
}

/// > -vvv shows the tokens used for each destination
#[test]
fn very_verbose_shows_destination_tokens() {
    let trees = Trees::new();
    trees.dir("dest/Shows.../Drama (Crime)");

    trees
        .sift(&["-vvv"])
        .assert()
        .success()
        .stderr(predicates::str::contains("[Shows] [Drama]"))
        .stderr(predicates::str::contains("[Crime]"));
}
