// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::verbose::Verbosity;

/// Matching rules, shown with `--help` and on usage errors.
pub const MATCHING_RULES: &str = "\
Matching rules:
  Items match only once and in strict order.
  Matches are not case sensitive for ASCII.
  Suffix '...' in folder names creates a parent folder.
  Lower case words in parent folders are not matched.
  Use any of ',();' for alternative match in not parent dest.
  Full words must match. CamelCase is detected if used.
  Use _underscore_ in dest to disable full word start/stop.";

/// Hardlink items in repo folder to matching subfolders in dest
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(version, about, long_about = None)]
#[command(after_help = MATCHING_RULES)]
pub struct Cli {
    /// Repository folder with the items to sift
    pub repo: PathBuf,

    /// Destination folder tree
    pub dest: PathBuf,

    /// Clear existing items in dest before sift
    #[arg(short, long)]
    pub clear: bool,

    /// Log items not matching in repo to dest/missing.txt
    #[arg(short, long)]
    pub missing: bool,

    /// Increase verbosity (repeat up to -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SIFT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity(self.verbose)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
