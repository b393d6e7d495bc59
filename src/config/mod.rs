// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for json-combine
//!
//! Build-step configuration files and the static step descriptor.

pub mod descriptor;
pub mod step;

pub use descriptor::*;
pub use step::*;
