// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Destination pattern index.
//!
//! Every directory under the destination root is a target, unless its name
//! ends with the parent suffix (`...` by default). Parent folders are not
//! targets; their names are prepended to the names of everything below them.
//! Targets are leaves: the walk does not descend into them.
//!
//! A target name is split on the alternative delimiters into variants. Each
//! variant keeps its words that do not start with a lowercase letter, and a
//! variant with words left becomes one pattern for the target.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{trace, warn};

use crate::config::Config;
use crate::error::Result;
use crate::link::clear_contents;
use crate::pattern::{Pattern, join_label, significant_words, tokenize};

/// One destination variant: where to link, and what must match.
#[derive(Debug, Clone)]
pub struct DestinationEntry {
    pub path: PathBuf,
    pub pattern: Pattern,
}

/// Counters from building the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Target folders found.
    pub destinations: usize,
    /// Patterns registered (a target may have none or several).
    pub patterns: usize,
    /// Entries deleted while clearing targets.
    pub cleared: usize,
    pub warnings: usize,
}

/// Destination patterns in enumeration order. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct DestinationIndex {
    entries: Vec<DestinationEntry>,
}

impl DestinationIndex {
    /// Walk `root` and register a pattern for each destination variant.
    ///
    /// With `clear`, each target's contents are deleted before it is indexed.
    pub fn build(root: &Path, config: &Config, clear: bool) -> Result<(Self, IndexStats)> {
        let mut indexer =
            Indexer { config, clear, entries: Vec::new(), stats: IndexStats::default() };
        indexer.walk(root, "")?;
        Ok((Self { entries: indexer.entries }, indexer.stats))
    }

    pub fn entries(&self) -> &[DestinationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Word lists for each non-empty variant of a target label.
pub fn destination_variants<'a>(label: &'a str, alternatives: &str) -> Vec<Vec<&'a str>> {
    tokenize(label, alternatives)
        .into_iter()
        .map(significant_words)
        .filter(|words| !words.is_empty())
        .collect()
}

/// Context below a destination parent folder.
///
/// Alternatives are not allowed in parent names; their delimiters become spaces.
pub fn parent_context(context: &str, stripped: &str, alternatives: &str) -> String {
    let name: String =
        stripped.chars().map(|c| if alternatives.contains(c) { ' ' } else { c }).collect();
    join_label(context, &name)
}

struct Indexer<'a> {
    config: &'a Config,
    clear: bool,
    entries: Vec<DestinationEntry>,
    stats: IndexStats,
}

impl Indexer<'_> {
    fn walk(&mut self, dir: &Path, context: &str) -> Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("read directory warning: {e} {}", dir.display());
                self.stats.warnings += 1;
                return Ok(());
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("read directory warning: {e} {}", dir.display());
                    self.stats.warnings += 1;
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            match self.config.strip_suffix(&name) {
                Some(stripped) => {
                    let context = parent_context(context, stripped, &self.config.alternatives);
                    self.walk(&path, &context)?;
                }
                None => self.register(path, &join_label(context, &name))?,
            }
        }
        Ok(())
    }

    fn register(&mut self, path: PathBuf, label: &str) -> Result<()> {
        self.stats.destinations += 1;
        if self.clear {
            self.stats.cleared += clear_contents(&path);
        }

        for words in destination_variants(label, &self.config.alternatives) {
            let pattern = Pattern::compile(&words)?;
            trace!("Dest tokens used for {}: {}", path.display(), pattern);
            self.stats.patterns += 1;
            self.entries.push(DestinationEntry { path: path.clone(), pattern });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
