// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! `check-name` command

use std::io;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::cli::args::{CheckNameArgs, OutputFormat};
use crate::error::{CombineError, Result};
use crate::validation::{check_name, FormValidation, Severity};

use super::print_json;

/// Execute the check-name command. Error severity is returned as an error.
pub fn execute(args: &CheckNameArgs, format: OutputFormat) -> Result<FormValidation> {
    let validation = check_name(&args.name, args.use_french);

    match format {
        OutputFormat::Json => print_json(&validation)?,
        OutputFormat::Text => print_validation(&validation)?,
    }

    if validation.is_error() {
        return Err(CombineError::Validation(
            validation.message.clone().unwrap_or_default(),
        ));
    }
    Ok(validation)
}

/// Print a validation result, coloured by severity.
pub(crate) fn print_validation(validation: &FormValidation) -> Result<()> {
    let color = match validation.severity {
        Severity::Ok => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    };

    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(color))?;
    println!("{}", validation);
    stdout.execute(ResetColor)?;
    Ok(())
}
