// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hard-link propagation and destination clearing.
//!
//! Directories are recreated and their files hard-linked one by one. An
//! existing entry at the target is left alone, so re-running over the same
//! trees links nothing new. Failures are logged and counted, never returned.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, trace, warn};

/// Counters for one or more propagation runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub dirs_created: usize,
    pub files_linked: usize,
    pub skipped_existing: usize,
    pub warnings: usize,
}

impl LinkStats {
    pub fn merge(&mut self, other: LinkStats) {
        self.dirs_created += other.dirs_created;
        self.files_linked += other.files_linked;
        self.skipped_existing += other.skipped_existing;
        self.warnings += other.warnings;
    }
}

/// Mirror `src` at `dst` using hard links.
///
/// Entries that are neither directories nor regular files are ignored.
pub fn hardlink_tree(src: &Path, dst: &Path) -> LinkStats {
    let mut stats = LinkStats::default();
    link_entry(src, dst, &mut stats);
    stats
}

fn link_entry(src: &Path, dst: &Path, stats: &mut LinkStats) {
    if src.is_dir() {
        trace!("create directory: {}", dst.display());
        match fs::create_dir(dst) {
            Ok(()) => stats.dirs_created += 1,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dst.is_dir() => {}
            Err(e) => {
                warn!("create directory warning: {e} {}", dst.display());
                stats.warnings += 1;
            }
        }

        let entries = match fs::read_dir(src) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("read directory warning: {e} {}", src.display());
                stats.warnings += 1;
                return;
            }
        };
        for entry in entries {
            match entry {
                Ok(entry) => link_entry(&entry.path(), &dst.join(entry.file_name()), stats),
                Err(e) => {
                    warn!("read directory warning: {e} {}", src.display());
                    stats.warnings += 1;
                }
            }
        }
    } else if src.is_file() {
        trace!("hardlink file: {}", src.display());
        if dst.symlink_metadata().is_ok() {
            stats.skipped_existing += 1;
            return;
        }
        match fs::hard_link(src, dst) {
            Ok(()) => stats.files_linked += 1,
            Err(e) => {
                warn!("create hardlink warning: {e} {}", dst.display());
                stats.warnings += 1;
            }
        }
    }
}

/// Delete everything inside `dir`, keeping `dir` itself.
///
/// Returns the number of entries removed; failures are logged and skipped.
pub fn clear_contents(dir: &Path) -> usize {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("clear warning: {e} {}", dir.display());
            return 0;
        }
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        debug!("Deleting: {}", path.display());
        let result = match entry.file_type() {
            Ok(ft) if ft.is_dir() => fs::remove_dir_all(&path),
            _ => fs::remove_file(&path),
        };
        match result {
            Ok(()) => removed += 1,
            Err(e) => warn!("delete warning: {e} {}", path.display()),
        }
    }
    removed
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
