// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for projects and their call-to-action overlays.

pub mod cta;
pub mod project;

pub use cta::{Animation, Cta, CtaDraft, CtaId, CtaPatch, CtaStyle, CtaType, Position};
pub use project::{duplicate_cta_id, Project, ProjectDraft, ProjectId, ProjectPatch};
