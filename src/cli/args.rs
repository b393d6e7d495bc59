// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for json-combine.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// json-combine - deep-merge a JSON overlay into a JSON file
#[derive(Parser, Debug)]
#[command(name = "json-combine")]
#[command(version, about = "Deep-merge a JSON overlay into a JSON file on disk")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace directory target paths are resolved against (defaults to current)
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Overlay JSON onto a target file
    Combine(CombineArgs),

    /// Run a combine step from a step file (TOML or JSON)
    Run(RunArgs),

    /// Validate a step name
    CheckName(CheckNameArgs),

    /// Show the step descriptor and its fields
    Describe,

    /// Write a starter step file
    Init(InitArgs),
}

/// Arguments for the combine subcommand
#[derive(clap::Args, Debug, Default)]
pub struct CombineArgs {
    /// Target JSON file, relative to the workspace
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Overlay JSON text
    #[arg(short, long, conflicts_with = "source_file")]
    pub source: Option<String>,

    /// Read the overlay JSON text from a file
    #[arg(long)]
    pub source_file: Option<PathBuf>,

    /// Pretty-print the merged file
    #[arg(long)]
    pub pretty: bool,

    /// Overwrite the target in place instead of temp file + rename
    #[arg(long)]
    pub no_atomic: bool,
}

/// Arguments for the run subcommand
#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Step file path
    pub step: PathBuf,

    /// Validate the step name first and stop on errors
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the check-name subcommand
#[derive(clap::Args, Debug)]
pub struct CheckNameArgs {
    /// Name to validate
    pub name: String,

    /// Accept accented French characters
    #[arg(long)]
    pub use_french: bool,
}

/// Arguments for the init subcommand
#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Where to write the step file (.toml or .json)
    #[arg(default_value = "json-combine.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Output format for command results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
