// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for project snapshot files.

pub mod serialization;

pub use serialization::{export_path, import_path, Snapshot};
