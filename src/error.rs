// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Typed errors for form validation and snapshot formats.
//!
//! Store mutations never fail; a missing id is a documented no-op. These
//! errors belong to the layers around the store.

use thiserror::Error;

/// Rejected editor or project-form input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("position ({x}, {y}) is outside the 0-100 frame")]
    PositionOutOfRange { x: f64, y: f64 },

    #[error("`{0}` must be a non-negative number of seconds, got {1}")]
    NegativeTime(&'static str, f64),

    #[error("start time {start}s is after end time {end}s")]
    InvalidTimeRange { start: f64, end: f64 },
}

/// Snapshot file with an extension we cannot dispatch on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unsupported file extension: {0:?}")]
    UnsupportedExtension(Option<String>),
}
