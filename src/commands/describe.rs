// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! `describe` command

use crate::cli::args::OutputFormat;
use crate::config::StepDescriptor;
use crate::error::Result;

use super::print_json;

/// Execute the describe command
pub fn execute(format: OutputFormat) -> Result<()> {
    let descriptor = StepDescriptor::new();

    if format == OutputFormat::Json {
        return print_json(&descriptor);
    }

    println!("{} ({})", descriptor.display_name, descriptor.symbol);
    println!("\nFields:");
    for field in descriptor.fields {
        let marker = if field.required { "*" } else { " " };
        println!("  {} {:<24} {}", marker, field.name, field.description);
    }
    println!("\n* required");
    Ok(())
}
