// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each command prints its own result in the requested [`OutputFormat`].
//! Progress lines from a combine go to stdout in text mode and to `tracing`
//! in JSON mode, so JSON output stays machine-readable.

pub mod check_name;
pub mod combine;
pub mod describe;
pub mod init;
pub mod run;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::combine::{combine, CombineOptions, CombineOutcome, CombineRequest};
use crate::error::Result;
use crate::log_sink::{LogSink, StdoutSink, TracingSink};
use crate::workspace::Workspace;

/// Run a combine request and print the outcome.
pub(crate) fn combine_and_report(
    request: &CombineRequest,
    workspace: &Workspace,
    options: CombineOptions,
    format: OutputFormat,
) -> Result<CombineOutcome> {
    let mut sink: Box<dyn LogSink> = match format {
        OutputFormat::Text => Box::new(StdoutSink),
        OutputFormat::Json => Box::new(TracingSink),
    };

    let outcome = combine(request, workspace, options, sink.as_mut())?;

    if format == OutputFormat::Json {
        print_json(&outcome)?;
    }
    Ok(outcome)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
