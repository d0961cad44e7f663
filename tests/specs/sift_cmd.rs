//! Behavioral specs for sifting repository items into destinations.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Linking
// =============================================================================

/// > Matching items are hard-linked into the destination folder
#[test]
fn links_matching_items() {
    let trees = Trees::new();
    trees
        .file("repo/Queen - Bohemian Rhapsody.flac", "audio")
        .file("repo/Queen - Live Aid/01.flac", "track")
        .dir("dest/Queen");

    trees.sift(&[]).assert().success();

    assert_eq!(trees.read("dest/Queen/Queen - Bohemian Rhapsody.flac"), "audio");
    assert_eq!(trees.read("dest/Queen/Queen - Live Aid/01.flac"), "track");
}

/// > Parent folders marked with '...' add context to their contents
#[test]
fn parent_folders_add_context() {
    let trees = Trees::new();
    trees
        .file("repo/Breaking Bad.../S01E01.mkv", "video")
        .dir("dest/TV.../Bad (Breaking)");

    trees.sift(&[]).assert().success();

    assert!(trees.exists("dest/TV.../Bad (Breaking)/S01E01.mkv"));
    assert!(!trees.exists("dest/TV.../Bad (Breaking)/Breaking Bad..."));
}

/// > One item may be linked into several destinations
#[test]
fn item_links_into_every_matching_destination() {
    let trees = Trees::new();
    trees
        .file("repo/Queen - Live at Wembley.flac", "audio")
        .dir("dest/Queen")
        .dir("dest/Live")
        .dir("dest/Beatles");

    trees.sift(&[]).assert().success();

    assert!(trees.exists("dest/Queen/Queen - Live at Wembley.flac"));
    assert!(trees.exists("dest/Live/Queen - Live at Wembley.flac"));
    assert!(!trees.exists("dest/Beatles/Queen - Live at Wembley.flac"));
}

/// > Whole words are required unless '_' relaxes a boundary
#[test]
fn underscore_relaxes_word_boundaries() {
    let trees = Trees::new();
    trees.file("repo/delta.txt", "d").dir("dest/Ta").dir("dest/_ta");

    trees.sift(&[]).assert().success();

    assert!(!trees.exists("dest/Ta/delta.txt"));
    assert!(trees.exists("dest/_ta/delta.txt"));
}

/// > Re-running over unchanged trees links nothing new and reports no errors
#[test]
fn second_run_is_idempotent() {
    let trees = Trees::new();
    trees.file("repo/Queen - Live Aid/01.flac", "track").dir("dest/Queen");

    trees.sift(&[]).assert().success();
    trees.sift(&["-vvv"]).assert().success().stderr(predicates::str::contains("WARN").not());

    assert_eq!(trees.read("dest/Queen/Queen - Live Aid/01.flac"), "track");
}

// =============================================================================
// Missing log
// =============================================================================

/// > --missing writes unmatched items to dest/missing.txt, one per line
#[test]
fn missing_log_lists_unmatched_items() {
    let trees = Trees::new();
    trees
        .file("repo/Queen - Live.flac", "a")
        .file("repo/Beatles - Help.flac", "b")
        .dir("dest/Queen");

    trees.sift(&["--missing"]).assert().success();

    let expected = format!("{}\n", trees.repo().join("Beatles - Help.flac").display());
    assert_eq!(trees.read("dest/missing.txt"), expected);
}

/// > Without --missing no log is written
#[test]
fn no_missing_log_by_default() {
    let trees = Trees::new();
    trees.file("repo/Beatles - Help.flac", "b").dir("dest/Queen");

    trees.sift(&[]).assert().success();

    assert!(!trees.exists("dest/missing.txt"));
}

/// > The missing log is overwritten on each run
#[test]
fn missing_log_is_truncated() {
    let trees = Trees::new();
    trees.file("repo/Queen - Live.flac", "a").dir("dest/Queen");
    trees.file("dest/missing.txt", "stale\n");

    trees.sift(&["-m"]).assert().success();

    assert_eq!(trees.read("dest/missing.txt"), "");
}

// =============================================================================
// Clearing
// =============================================================================

/// > --clear empties destination folders before sifting
#[test]
fn clear_removes_stale_items() {
    let trees = Trees::new();
    trees
        .file("repo/Queen - Live.flac", "a")
        .file("dest/Queen/Old Song.flac", "old")
        .file("dest/notes.txt", "kept");

    trees.sift(&["--clear"]).assert().success();

    assert!(!trees.exists("dest/Queen/Old Song.flac"));
    assert!(trees.exists("dest/Queen/Queen - Live.flac"));
    assert!(trees.exists("dest/notes.txt"));
    assert!(trees.exists("repo/Queen - Live.flac"));
}
