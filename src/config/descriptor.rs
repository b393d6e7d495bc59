// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Static metadata for the combine build step

use serde::Serialize;

use crate::validation::{check_name, FormValidation};

/// A configurable field of the step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Display metadata and field checks for the combine step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDescriptor {
    pub symbol: &'static str,
    pub display_name: &'static str,
    pub fields: &'static [FieldInfo],
}

const FIELDS: &[FieldInfo] = &[
    FieldInfo {
        name: "name",
        description: "Step name shown in build logs",
        required: true,
    },
    FieldInfo {
        name: "use_french",
        description: "Accept accented French characters in the name",
        required: false,
    },
    FieldInfo {
        name: "json_target_file_path",
        description: "Target JSON file, relative to the workspace",
        required: true,
    },
    FieldInfo {
        name: "json_source_string",
        description: "JSON object overlaid onto the target",
        required: true,
    },
    FieldInfo {
        name: "pretty",
        description: "Pretty-print the merged file",
        required: false,
    },
    FieldInfo {
        name: "atomic",
        description: "Replace the target through a temp file and rename",
        required: false,
    },
];

impl StepDescriptor {
    pub const fn new() -> Self {
        Self {
            symbol: "jsonCombine",
            display_name: "Combine JSON into a file",
            fields: FIELDS,
        }
    }

    /// The step can be attached to any project.
    pub fn is_applicable(&self) -> bool {
        true
    }

    /// Field check for `name`.
    pub fn check_name(&self, value: &str, use_french: bool) -> FormValidation {
        check_name(value, use_french)
    }

    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Default for StepDescriptor {
    fn default() -> Self {
        Self::new()
    }
}
