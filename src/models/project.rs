// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records.
//!
//! A project pairs one video with the ordered list of CTAs shown over it.
//! CTAs are kept in insertion order, not time order.

use super::cta::{Cta, CtaId};
use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Opaque project identifier, unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A video project and its CTAs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub ctas: Vec<Cta>,
}

impl Project {
    /// Create an empty project from form input, stamped at `now`.
    pub fn new(id: ProjectId, draft: ProjectDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            video_url: draft.video_url,
            thumbnail: draft.thumbnail,
            created: now,
            updated: now,
            ctas: Vec::new(),
        }
    }

    /// Refresh `updated`, never moving it before `created`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated = now.max(self.created);
    }

    /// Shallow-merge a patch. A `ctas` entry replaces the whole sequence.
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(video_url) = patch.video_url {
            self.video_url = video_url;
        }
        if let Some(thumbnail) = patch.thumbnail {
            self.thumbnail = thumbnail;
        }
        if let Some(ctas) = patch.ctas {
            self.ctas = ctas;
        }
    }

    /// Restore the record invariants on data that did not come through the
    /// store: `updated` is raised to `created` and repeated CTA ids are
    /// dropped, keeping the first. Returns how many CTAs were dropped.
    pub fn normalize(&mut self) -> usize {
        self.touch(self.updated);

        let mut seen = HashSet::new();
        let before = self.ctas.len();
        self.ctas.retain(|c| seen.insert(c.id.clone()));
        before - self.ctas.len()
    }

    pub fn cta(&self, cta_id: &CtaId) -> Option<&Cta> {
        self.ctas.iter().find(|c| &c.id == cta_id)
    }

    pub fn cta_mut(&mut self, cta_id: &CtaId) -> Option<&mut Cta> {
        self.ctas.iter_mut().find(|c| &c.id == cta_id)
    }

    /// Latest end time over all CTAs, 0 when there are none.
    pub fn last_cta_end(&self) -> f64 {
        self.ctas.iter().map(|c| c.end_time).fold(0.0, f64::max)
    }
}

/// First CTA id that occurs more than once in `ctas`.
pub fn duplicate_cta_id(ctas: &[Cta]) -> Option<&CtaId> {
    let mut seen = HashSet::new();
    ctas.iter().map(|c| &c.id).find(|id| !seen.insert(*id))
}

/// Project-creation form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail: String,
}

impl ProjectDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        video_url: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            video_url: video_url.into(),
            thumbnail: thumbnail.into(),
        }
    }

    /// All four fields are required before the form submits.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("name", &self.name),
            ("description", &self.description),
            ("videoUrl", &self.video_url),
            ("thumbnail", &self.thumbnail),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }
        Ok(())
    }
}

/// Partial project update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctas: Option<Vec<Cta>>,
}

impl ProjectPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
