// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! `init` command: write a starter step file

use crate::cli::args::InitArgs;
use crate::config::StepConfig;
use crate::error::{CombineError, Result};

/// Execute the init command
pub fn execute(args: &InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(CombineError::Config(format!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        )));
    }

    StepConfig::template().save_to(&args.path)?;
    println!("Wrote step file: {}", args.path.display());
    Ok(())
}
