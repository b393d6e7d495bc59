// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Progress sinks
//!
//! A combine run reports human-readable progress lines. Where they end up
//! (the terminal, the tracing subscriber, a buffer in tests) is up to the
//! caller.

use std::io::Write;

/// Append-only receiver of progress lines
pub trait LogSink {
    /// Record a single line of progress.
    fn line(&mut self, message: &str);
}

/// Collects lines in memory
impl LogSink for Vec<String> {
    fn line(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Prints each line to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn line(&mut self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout must not abort a combine that already wrote its file.
        let _ = writeln!(stdout, "{}", message);
    }
}

/// Forwards each line to `tracing` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn line(&mut self, message: &str) {
        tracing::info!(target: "json_combine::progress", "{}", message);
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn line(&mut self, _message: &str) {}
}
