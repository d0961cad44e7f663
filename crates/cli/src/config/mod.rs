// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading from `sift.toml`.
//!
//! Every key is optional:
//!
//! ```toml
//! suffix = "..."          # marks context-only parent folders
//! alternatives = ",();"   # splits destination names into variants
//! missing_file = "missing.txt"
//! ```

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Matching and output settings shared by both walks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Folder-name suffix marking a context-only parent folder.
    #[serde(default = "Config::default_suffix")]
    pub suffix: String,

    /// Characters that split a destination name into alternative patterns.
    #[serde(default = "Config::default_alternatives")]
    pub alternatives: String,

    /// File name of the unmatched-items log inside `dest`.
    #[serde(default = "Config::default_missing_file")]
    pub missing_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suffix: Self::default_suffix(),
            alternatives: Self::default_alternatives(),
            missing_file: Self::default_missing_file(),
        }
    }
}

impl Config {
    pub(crate) fn default_suffix() -> String {
        defaults::SUFFIX.to_string()
    }

    pub(crate) fn default_alternatives() -> String {
        defaults::ALTERNATIVES.to_string()
    }

    pub(crate) fn default_missing_file() -> String {
        defaults::MISSING_FILE.to_string()
    }

    /// Whether `name` marks a context-only parent folder.
    pub fn has_suffix(&self, name: &str) -> bool {
        name.ends_with(self.suffix.as_str())
    }

    /// `name` with the parent-folder suffix removed, if present.
    pub fn strip_suffix<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_suffix(self.suffix.as_str())
    }

    /// Reject settings that would make matching ill-defined.
    pub fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            return Err(Error::ConfigInvalid("suffix must not be empty".to_string()));
        }
        if let Some(c) = self.alternatives.chars().find(|c| *c == ' ' || *c == '_') {
            return Err(Error::ConfigInvalid(format!(
                "alternatives must not contain {c:?}"
            )));
        }
        let file = Path::new(&self.missing_file);
        if self.missing_file.is_empty() || file.file_name() != Some(file.as_os_str()) {
            return Err(Error::ConfigInvalid(format!(
                "missing_file must be a plain file name, got {:?}",
                self.missing_file
            )));
        }
        Ok(())
    }
}

/// Parse config from a TOML string, validating the result.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|source| Error::ConfigParse { path: path.to_path_buf(), source })?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::ConfigRead { path: path.to_path_buf(), source })?;
    parse(&content, path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
