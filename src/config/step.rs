// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Build-step configuration
//!
//! A step file names the step, carries the overlay JSON and the target path,
//! and picks output options. Both TOML and JSON step files are accepted, and
//! camelCase field names (`jsonTargetFilePath`, ...) work as aliases.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::combine::{CombineOptions, CombineRequest};
use crate::validation::{check_name, FormValidation};

mod io;

pub use io::StepFormat;

/// One configured combine step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepConfig {
    /// Free-text step name (validated, never used by the merge)
    #[serde(default)]
    pub name: String,

    /// Allow accented French characters in the name without a warning
    #[serde(default, alias = "useFrench")]
    pub use_french: bool,

    /// Target file, relative to the workspace
    #[serde(
        default,
        alias = "jsonTargetFilePath",
        skip_serializing_if = "Option::is_none"
    )]
    pub json_target_file_path: Option<String>,

    /// Overlay JSON text
    #[serde(
        default,
        alias = "jsonSourceString",
        skip_serializing_if = "Option::is_none"
    )]
    pub json_source_string: Option<String>,

    /// Pretty-print the merged file
    #[serde(default)]
    pub pretty: bool,

    /// Write the merged file through a temp file + rename
    #[serde(default = "default_true")]
    pub atomic: bool,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            use_french: false,
            json_target_file_path: None,
            json_source_string: None,
            pretty: false,
            atomic: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl StepConfig {
    /// Check the step name.
    pub fn validate_name(&self) -> FormValidation {
        check_name(&self.name, self.use_french)
    }

    /// Build the combine request described by this step.
    pub fn request(&self) -> CombineRequest {
        CombineRequest {
            source: self.json_source_string.clone(),
            target: self.json_target_file_path.as_ref().map(PathBuf::from),
        }
    }

    /// Output options for this step.
    pub fn options(&self) -> CombineOptions {
        CombineOptions {
            pretty: self.pretty,
            atomic: self.atomic,
        }
    }

    /// Starter step written by `json-combine init`.
    pub fn template() -> Self {
        Self {
            name: "combine-settings".to_string(),
            json_target_file_path: Some("config/settings.json".to_string()),
            json_source_string: Some(r#"{"feature":{"enabled":true}}"#.to_string()),
            ..Self::default()
        }
    }
}
