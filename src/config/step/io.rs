// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::Path;

use crate::error::{CombineError, Result};

use super::StepConfig;

/// On-disk format of a step file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepFormat {
    Toml,
    Json,
}

impl StepFormat {
    /// `.toml` is TOML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => StepFormat::Toml,
            _ => StepFormat::Json,
        }
    }
}

impl StepConfig {
    /// Load a step from a TOML or JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CombineError::Config(format!(
                "Step file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, StepFormat::from_path(path))
    }

    /// Parse step file content.
    pub fn parse(content: &str, format: StepFormat) -> Result<Self> {
        let step = match format {
            StepFormat::Toml => toml::from_str(content)?,
            StepFormat::Json => serde_json::from_str(content)?,
        };
        Ok(step)
    }

    /// Save the step, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = match StepFormat::from_path(path) {
            StepFormat::Toml => toml::to_string_pretty(self)?,
            StepFormat::Json => serde_json::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}
