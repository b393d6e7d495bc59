// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! json-combine - deep-merge a JSON overlay into a JSON file
//!
//! Entry point for the json-combine CLI application.

use clap::Parser;

use json_combine::cli::{Cli, Commands};
use json_combine::commands;
use json_combine::error::Result;
use json_combine::workspace::Workspace;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on crate diagnostics; `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        let directive = if cli.verbose > 1 {
            "json_combine=trace"
        } else {
            "json_combine=debug"
        };
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format;
    match cli.command {
        Commands::Combine(args) => {
            let workspace = Workspace::discover(cli.directory)?;
            commands::combine::execute(&args, &workspace, format)?;
        }
        Commands::Run(args) => {
            let workspace = Workspace::discover(cli.directory)?;
            commands::run::execute(&args, &workspace, format)?;
        }
        Commands::CheckName(args) => {
            commands::check_name::execute(&args, format)?;
        }
        Commands::Describe => {
            commands::describe::execute(format)?;
        }
        Commands::Init(args) => {
            commands::init::execute(&args)?;
        }
    }

    Ok(())
}
