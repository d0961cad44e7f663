// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sift` command implementation.
//!
//! Validates paths and config, indexes the destination tree, then sifts the
//! repository into it. Nothing under `dest` is touched until validation passes.

use std::fs::File;
use std::io::{BufWriter, Write};

use clap::CommandFactory;
use tracing::{info, warn};

use sift::cli::Cli;
use sift::config::{self, Config};
use sift::discovery;
use sift::error::ExitCode;
use sift::index::DestinationIndex;
use sift::sift::Sifter;

/// Run the `sift` command.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    for (label, path) in [("repo", &cli.repo), ("dest", &cli.dest)] {
        if !path.exists() {
            eprintln!("sift: {label} path does not exist: {}\n", path.display());
            eprintln!("{}", Cli::command().render_long_help());
            return Ok(ExitCode::UsageError);
        }
    }

    let config = match discovery::find_config(cli.config.as_deref(), &cli.dest) {
        Some(path) => {
            info!("Config: {}", path.display());
            config::load(&path)?
        }
        None => Config::default(),
    };

    if cli.clear {
        info!("Reading and clearing {}", cli.dest.display());
    } else {
        info!("Reading {}", cli.dest.display());
    }
    let (index, index_stats) = DestinationIndex::build(&cli.dest, &config, cli.clear)?;
    info!(
        "Indexed {} destinations ({} patterns, {} cleared, {} warnings)",
        index_stats.destinations, index_stats.patterns, index_stats.cleared, index_stats.warnings
    );

    let missing_path = cli.dest.join(&config.missing_file);
    let mut missing_log = if cli.missing {
        match File::create(&missing_path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                warn!("missing log warning: {e} {}", missing_path.display());
                None
            }
        }
    } else {
        None
    };

    info!("Sifting {}", cli.repo.display());
    let sifter = Sifter::new(&index, &config);
    let report = match missing_log.as_mut() {
        Some(out) => sifter.with_missing_log(out as &mut dyn Write).run(&cli.repo),
        None => sifter.run(&cli.repo),
    };

    if let Some(log) = missing_log {
        drop(log);
        info!("{} closed", missing_path.display());
    }

    let links = report.link_stats;
    info!(
        "Sifted {} items: {} matched, {} unmatched; {} files linked, {} already present, {} warnings",
        report.items,
        report.matched,
        report.unmatched,
        links.files_linked,
        links.skipped_existing,
        links.warnings + report.warnings
    );

    Ok(ExitCode::Success)
}
