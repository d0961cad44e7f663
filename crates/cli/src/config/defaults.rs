// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! `Config` delegates to these constants via its `default_*` methods.

/// Default parent-folder marker ("...").
pub const SUFFIX: &str = "...";

/// Default alternative delimiters in destination folder names.
pub const ALTERNATIVES: &str = ",();";

/// Default name of the unmatched-items log written inside `dest`.
pub const MISSING_FILE: &str = "missing.txt";

/// Config file looked up at the root of `dest`.
pub const CONFIG_FILE: &str = "sift.toml";

/// Separator between words of a folder name.
pub const WORD_DELIMITERS: &str = " ";
