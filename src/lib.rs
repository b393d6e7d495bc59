// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! json-combine - deep-merge a JSON overlay into a JSON file on disk.
//!
//! This crate exposes the library used by the `json-combine` CLI (`src/main.rs`).
//!
//! Architecture highlights:
//! - `merge`: pure in-memory overlay of one JSON object onto another
//! - `combine`: read/parse/merge/serialize/write around a single target file
//! - `workspace`: resolution of target paths against a workspace root
//! - `validation`: step-name checks, independent of the merge
//! - `config`: step files (TOML/JSON) and the step descriptor
//! - `cli`, `commands`: argument parsing and subcommand output

pub mod cli;
pub mod combine;
pub mod commands;
pub mod config;
pub mod error;
pub mod log_sink;
pub mod merge;
pub mod validation;
pub mod workspace;

pub use combine::{combine, CombineOptions, CombineOutcome, CombineRequest};
pub use error::{CombineError, Result};
pub use merge::{merge, override_json};
