// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Build-step parameter validation
//!
//! Checks the free-text `name` field of a step. Independent of the merge:
//! combining never calls into this module.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Minimum name length (in characters) before a warning is raised
pub const MIN_NAME_LEN: usize = 4;

pub const MISSING_NAME: &str = "Please set a name";
pub const NAME_TOO_SHORT: &str = "Isn't the name too short?";
pub const REALLY_FRENCH: &str = "Are you actually French?";

/// Severity of a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => write!(f, "ok"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Severity-tagged validation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValidation {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormValidation {
    pub fn ok() -> Self {
        Self {
            severity: Severity::Ok,
            message: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for FormValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.severity, message),
            None => write!(f, "{}", self.severity),
        }
    }
}

fn french_chars() -> &'static Regex {
    static FRENCH_REGEX: OnceLock<Regex> = OnceLock::new();
    FRENCH_REGEX.get_or_init(|| Regex::new("[éáàç]").unwrap())
}

/// Validate a step name.
///
/// Checks run in order and the first hit wins: empty, too short, accented
/// characters while `use_french` is off.
pub fn check_name(value: &str, use_french: bool) -> FormValidation {
    if value.is_empty() {
        return FormValidation::error(MISSING_NAME);
    }
    if value.chars().count() < MIN_NAME_LEN {
        return FormValidation::warning(NAME_TOO_SHORT);
    }
    if !use_french && french_chars().is_match(value) {
        return FormValidation::warning(REALLY_FRENCH);
    }
    FormValidation::ok()
}
