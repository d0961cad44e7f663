// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbosity levels and diagnostic output.
//!
//! Diagnostics go to stderr through `tracing`. The `-v` count picks the
//! level; `SIFT_LOG` overrides it with a full filter directive.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable overriding the computed log filter.
pub const LOG_ENV: &str = "SIFT_LOG";

/// Repetition count of `-v`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Verbosity(pub u8);

impl Verbosity {
    /// - 0: errors only
    /// - 1: linking, unmatched items, warnings
    /// - 2: deletions while clearing
    /// - 3+: tokens, accumulated context, every directory and link
    pub fn level_filter(self) -> LevelFilter {
        match self.0 {
            0 => LevelFilter::ERROR,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    pub fn is_verbose(self) -> bool {
        self.0 > 0
    }

    /// Filter from `SIFT_LOG` if set, else from the verbosity count.
    pub fn env_filter(self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.level_filter().into())
            .with_env_var(LOG_ENV)
            .from_env_lossy()
    }

    /// Install the global stderr subscriber. Later calls are no-ops.
    pub fn init(self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
