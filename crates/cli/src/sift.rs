// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repository sifting.
//!
//! Every file, and every directory not marked with the parent suffix, is an
//! item. An item's search text is its name, prefixed by the significant words
//! of the parent-suffix folders above it. Each destination pattern is tried
//! in index order; every match hard-links the item into that destination.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{info, trace, warn};

use crate::config::Config;
use crate::index::DestinationIndex;
use crate::link::{LinkStats, hardlink_tree};
use crate::pattern::{AnnotatedText, join_label, significant_words};

/// Outcome of one sift over the repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiftReport {
    /// Items examined.
    pub items: usize,
    /// Items that matched at least one destination.
    pub matched: usize,
    /// Items that matched nothing.
    pub unmatched: usize,
    /// Link operations started (one per matching destination pattern).
    pub links: usize,
    pub link_stats: LinkStats,
    /// Unreadable directories and failed missing-log writes.
    pub warnings: usize,
}

/// Context below a repository parent folder: its significant words appended.
pub fn repo_context(context: &str, stripped: &str) -> String {
    significant_words(stripped).into_iter().fold(context.to_string(), |acc, word| {
        join_label(&acc, word)
    })
}

/// Walks a repository against a built destination index.
pub struct Sifter<'a> {
    index: &'a DestinationIndex,
    config: &'a Config,
    missing: Option<&'a mut dyn Write>,
    report: SiftReport,
}

impl<'a> Sifter<'a> {
    pub fn new(index: &'a DestinationIndex, config: &'a Config) -> Self {
        Self { index, config, missing: None, report: SiftReport::default() }
    }

    /// Record unmatched item paths to `out`, one per line.
    pub fn with_missing_log(mut self, out: &'a mut dyn Write) -> Self {
        self.missing = Some(out);
        self
    }

    pub fn run(mut self, repo: &Path) -> SiftReport {
        self.walk(repo, "");
        if let Some(out) = self.missing.as_deref_mut()
            && let Err(e) = out.flush()
        {
            warn!("missing log warning: {e}");
            self.report.warnings += 1;
        }
        self.report
    }

    fn walk(&mut self, dir: &Path, context: &str) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("read directory warning: {e} {}", dir.display());
                self.report.warnings += 1;
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("read directory warning: {e} {}", dir.display());
                    self.report.warnings += 1;
                    continue;
                }
            };
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            match self.config.strip_suffix(&name) {
                Some(stripped) if path.is_dir() => {
                    let context = repo_context(context, stripped);
                    trace!("new_repo_info used: {context}");
                    self.walk(&path, &context);
                }
                _ => self.sift_item(&path, &join_label(context, &name)),
            }
        }
    }

    fn sift_item(&mut self, path: &Path, label: &str) {
        let Some(file_name) = path.file_name() else {
            return;
        };
        let text = AnnotatedText::new(label);
        let index = self.index;
        let mut have_match = false;

        self.report.items += 1;
        for entry in index.entries() {
            if !entry.pattern.matches(&text) {
                continue;
            }
            let dst = entry.path.join(file_name);
            info!("Linking: {}\n    with: {}", path.display(), dst.display());
            self.report.link_stats.merge(hardlink_tree(path, &dst));
            self.report.links += 1;
            have_match = true;
        }

        if have_match {
            self.report.matched += 1;
            return;
        }

        self.report.unmatched += 1;
        if let Some(out) = self.missing.as_deref_mut()
            && let Err(e) = writeln!(out, "{}", path.display())
        {
            warn!("missing log warning: {e}");
            self.report.warnings += 1;
        }
        info!("No match: {}", path.display());
    }
}

/// Sift `repo` into the destinations of `index`.
pub fn sift(
    repo: &Path,
    index: &DestinationIndex,
    config: &Config,
    missing: Option<&mut dyn Write>,
) -> SiftReport {
    let sifter = Sifter::new(index, config);
    match missing {
        Some(out) => sifter.with_missing_log(out).run(repo),
        None => sifter.run(repo),
    }
}

#[cfg(test)]
#[path = "sift_tests.rs"]
mod tests;
