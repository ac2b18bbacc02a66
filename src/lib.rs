// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! CTA Studio - timed call-to-action overlays for video projects.
//!
//! The core is [`store::ProjectStore`], which owns projects and their CTAs,
//! and the pure playback queries in [`timeline`] that decide which CTAs are
//! on screen at a given time.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod seed;
pub mod store;
pub mod timeline;
pub mod util;

pub use store::ProjectStore;
