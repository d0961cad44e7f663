// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! An explicit `--config` path wins; otherwise `sift.toml` at the root of
//! the destination tree is used when present.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Resolve the config file to load, if any.
pub fn find_config(explicit: Option<&Path>, dest: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let candidate = dest.join(CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
