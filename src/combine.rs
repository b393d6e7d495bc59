// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Combine a JSON overlay into a file on disk
//!
//! Flow for one request:
//!
//! 1. missing source or target: log and return [`CombineOutcome::Skipped`]
//! 2. resolve the target against the [`Workspace`], then follow symlinks and
//!    check the real file is still inside it
//! 3. target absent: create the parent directory (one level), write the
//!    source text verbatim, return [`CombineOutcome::Created`]
//! 4. target present: parse both documents, overlay, serialize, write back
//!
//! Both documents are parsed before anything is written, so malformed input
//! never touches the target file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::{CombineError, Result};
use crate::log_sink::LogSink;
use crate::merge::{override_json_with_report, MergeReport};
use crate::workspace::Workspace;

/// One combine invocation: overlay text plus target path (relative to the workspace)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombineRequest {
    /// JSON text to overlay; `None` means unset
    pub source: Option<String>,
    /// Target file path; `None` means unset
    pub target: Option<PathBuf>,
}

impl CombineRequest {
    pub fn new(source: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source.into()),
            target: Some(target.into()),
        }
    }
}

/// Output knobs for the merged file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombineOptions {
    /// Pretty-print the merged document instead of compact output
    pub pretty: bool,
    /// Write through a sibling temp file and rename it over the target
    pub atomic: bool,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            atomic: true,
        }
    }
}

/// Which input was unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingInput {
    Source,
    Target,
}

/// Result of a combine run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CombineOutcome {
    /// Nothing was done because an input was unset
    Skipped { missing: MissingInput },
    /// The target did not exist; the source text was written verbatim
    Created { path: PathBuf },
    /// The target existed and was overlaid
    Merged {
        path: PathBuf,
        content: String,
        report: MergeReport,
    },
}

impl CombineOutcome {
    /// Path written, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            CombineOutcome::Skipped { .. } => None,
            CombineOutcome::Created { path } | CombineOutcome::Merged { path, .. } => Some(path),
        }
    }
}

/// Run one combine request.
pub fn combine(
    request: &CombineRequest,
    workspace: &Workspace,
    options: CombineOptions,
    sink: &mut dyn LogSink,
) -> Result<CombineOutcome> {
    let Some(source) = request.source.as_deref() else {
        sink.line("Source JSON is not set, nothing to combine");
        tracing::debug!("combine skipped: source not set");
        return Ok(CombineOutcome::Skipped {
            missing: MissingInput::Source,
        });
    };
    let Some(target) = request.target.as_deref() else {
        sink.line("Target file path is not set, nothing to combine");
        tracing::debug!("combine skipped: target not set");
        return Ok(CombineOutcome::Skipped {
            missing: MissingInput::Target,
        });
    };

    let path = workspace.resolve(target)?;
    // Reads and writes go to the link target; logs keep the requested path.
    let real = workspace.confine(&path)?;
    tracing::debug!(path = %path.display(), real = %real.display(), "resolved combine target");

    if !real.exists() {
        ensure_parent_dir(&real)?;
        sink.line(&format!("File not found, creating: {}", path.display()));
        fs::write(&real, source.as_bytes())?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "wrote source verbatim");
        return Ok(CombineOutcome::Created { path });
    }

    sink.line(&format!("Read from: {}", path.display()));
    let existing = fs::read_to_string(&real)?;
    let mut target_json = parse_object(&existing, "target file")?;
    let source_json = parse_object(source, "source JSON")?;

    let report = override_json_with_report(&source_json, &mut target_json);
    for pointer in &report.dropped {
        tracing::warn!(
            pointer = %pointer,
            "source object ignored: target value at this key is not an object"
        );
    }
    tracing::debug!(
        inserted = report.inserted.len(),
        replaced = report.replaced.len(),
        dropped = report.dropped.len(),
        "overlay applied"
    );

    let content = if options.pretty {
        serde_json::to_string_pretty(&target_json)?
    } else {
        serde_json::to_string(&target_json)?
    };
    sink.line(&format!("Combined JSON: {}", content));

    if options.atomic {
        write_atomic(&real, &content)?;
    } else {
        fs::write(&real, content.as_bytes())?;
    }
    sink.line(&format!("Write to: {}", path.display()));

    Ok(CombineOutcome::Merged {
        path,
        content,
        report,
    })
}

/// Parse `text` and require an object root.
pub fn parse_object(text: &str, what: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(text).map_err(|e| CombineError::parse(what, e))?;
    if !value.is_object() {
        return Err(CombineError::NotAnObject {
            what: what.to_string(),
        });
    }
    Ok(value)
}

// Only the immediate parent is created; a missing grandparent is an IO error.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir(parent)?;
            tracing::debug!(dir = %parent.display(), "created parent directory");
        }
    }
    Ok(())
}

// `path` must be a regular file; the temp file takes over its permissions.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CombineError::InvalidInput(format!("not a file path: {}", path.display())))?;
    let temp_path = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));
    let permissions = fs::metadata(path)?.permissions();

    fs::write(&temp_path, content.as_bytes())?;
    let replaced = fs::set_permissions(&temp_path, permissions)
        .and_then(|()| fs::rename(&temp_path, path));
    if let Err(e) = replaced {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}
