// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_sift;

use clap::Parser;

use sift::cli::Cli;
use sift::error::ExitCode;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    cli.verbosity().init();

    match cmd_sift::run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("sift: {e:#}");
            e.downcast_ref::<sift::error::Error>()
                .map_or(ExitCode::InternalError, sift::error::Error::exit_code)
                .into()
        }
    }
}
