// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! `combine` command

use crate::cli::args::{CombineArgs, OutputFormat};
use crate::combine::{CombineOptions, CombineOutcome, CombineRequest};
use crate::error::Result;
use crate::workspace::Workspace;

use super::combine_and_report;

/// Execute the combine command
pub fn execute(
    args: &CombineArgs,
    workspace: &Workspace,
    format: OutputFormat,
) -> Result<CombineOutcome> {
    let request = build_request(args)?;
    let options = CombineOptions {
        pretty: args.pretty,
        atomic: !args.no_atomic,
    };

    combine_and_report(&request, workspace, options, format)
}

/// Turn CLI arguments into a request. `--source-file` is read relative to the
/// current directory, not the workspace.
pub fn build_request(args: &CombineArgs) -> Result<CombineRequest> {
    let source = match (&args.source, &args.source_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(file)) => {
            tracing::debug!(file = %file.display(), "reading overlay from file");
            Some(std::fs::read_to_string(file)?)
        }
        (None, None) => None,
    };

    Ok(CombineRequest {
        source,
        target: args.target.clone(),
    })
}
