// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! `run` command: execute a step file

use crate::cli::args::{OutputFormat, RunArgs};
use crate::combine::CombineOutcome;
use crate::config::StepConfig;
use crate::error::{CombineError, Result};
use crate::validation::Severity;
use crate::workspace::Workspace;

use super::check_name::print_validation;
use super::combine_and_report;

/// Execute the run command
pub fn execute(args: &RunArgs, workspace: &Workspace, format: OutputFormat) -> Result<CombineOutcome> {
    let step = StepConfig::load_from(&args.step)?;
    tracing::debug!(step = %step.name, file = %args.step.display(), "loaded step");

    if args.check {
        let validation = step.validate_name();
        if validation.severity != Severity::Ok && format == OutputFormat::Text {
            print_validation(&validation)?;
        }
        if validation.is_error() {
            return Err(CombineError::Validation(validation.message.unwrap_or_default()));
        }
    }

    combine_and_report(&step.request(), workspace, step.options(), format)
}
