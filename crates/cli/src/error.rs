// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// Exit codes returned by the `sift` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Run completed (unmatched items are not failures).
    Success = 0,
    /// Bad arguments, missing paths, or invalid configuration.
    UsageError = 2,
    /// Unexpected failure outside the walks.
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Library errors. Only startup paths return these; the walks log and continue.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("failed to compile token {token:?}: {source}")]
    Pattern {
        token: String,
        #[source]
        source: aho_corasick::BuildError,
    },
}

impl Error {
    /// Exit code for this error when it reaches `main`.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::ConfigRead { .. } | Error::ConfigParse { .. } | Error::ConfigInvalid(_) => {
                ExitCode::UsageError
            }
            Error::Pattern { .. } => ExitCode::InternalError,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
