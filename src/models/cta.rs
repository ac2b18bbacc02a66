// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Call-to-action data structures.
//!
//! This module defines the overlay records placed on a project's video:
//! their shape, placement, styling and the time window they occupy.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque CTA identifier, unique within its owning project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CtaId(String);

impl CtaId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CtaId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CtaId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CtaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Interaction shape of a CTA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaType {
    Button,
    Banner,
}

impl CtaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CtaType::Button => "button",
            CtaType::Banner => "banner",
        }
    }
}

/// Presentation transition used when a CTA appears and disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    Fade,
    Slide,
    Bounce,
}

/// Placement within the video frame, in percent (0 to 100) of each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates lie inside the frame.
    pub fn in_frame(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// Visual properties keyed by CSS-like names (`backgroundColor`, `fontSize`, ...).
///
/// The store never interprets these; they are carried verbatim to the renderer.
pub type CtaStyle = BTreeMap<String, String>;

/// Style applied to CTAs created from a blank editor form.
pub fn default_style() -> CtaStyle {
    [
        ("backgroundColor", "#0ea5e9"),
        ("color", "white"),
        ("fontSize", "16px"),
        ("padding", "10px 20px"),
        ("borderRadius", "4px"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// A timed, positioned overlay owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cta {
    pub id: CtaId,
    #[serde(rename = "type")]
    pub cta_type: CtaType,
    pub text: String,
    pub position: Position,
    #[serde(default)]
    pub style: CtaStyle,
    pub animation: Animation,
    pub link: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl Cta {
    /// Build a CTA from editor input under the given id.
    pub fn from_draft(id: CtaId, draft: CtaDraft) -> Self {
        Self {
            id,
            cta_type: draft.cta_type,
            text: draft.text,
            position: draft.position,
            style: draft.style,
            animation: draft.animation,
            link: draft.link,
            start_time: draft.start_time,
            end_time: draft.end_time,
        }
    }

    /// Shallow-merge a patch: named fields are replaced wholesale, `style` included.
    pub fn apply(&mut self, patch: CtaPatch) {
        if let Some(cta_type) = patch.cta_type {
            self.cta_type = cta_type;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(style) = patch.style {
            self.style = style;
        }
        if let Some(animation) = patch.animation {
            self.animation = animation;
        }
        if let Some(link) = patch.link {
            self.link = link;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
    }

    /// Length of the display window in seconds (negative when reversed).
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Editor input for a new CTA. Everything except the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaDraft {
    #[serde(rename = "type")]
    pub cta_type: CtaType,
    pub text: String,
    pub position: Position,
    #[serde(default)]
    pub style: CtaStyle,
    pub animation: Animation,
    pub link: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl Default for CtaDraft {
    fn default() -> Self {
        Self {
            cta_type: CtaType::Button,
            text: String::new(),
            position: Position::new(50.0, 50.0),
            style: default_style(),
            animation: Animation::Fade,
            link: String::new(),
            start_time: 0.0,
            end_time: 10.0,
        }
    }
}

impl CtaDraft {
    /// Form-level checks. The store accepts drafts verbatim; callers opt in.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyField("text"));
        }
        if self.link.trim().is_empty() {
            return Err(ValidationError::EmptyField("link"));
        }
        if !self.position.in_frame() {
            return Err(ValidationError::PositionOutOfRange {
                x: self.position.x,
                y: self.position.y,
            });
        }
        if self.start_time.is_nan() || self.start_time < 0.0 {
            return Err(ValidationError::NegativeTime("startTime", self.start_time));
        }
        if self.end_time.is_nan() || self.end_time < 0.0 {
            return Err(ValidationError::NegativeTime("endTime", self.end_time));
        }
        if self.start_time > self.end_time {
            return Err(ValidationError::InvalidTimeRange {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }
}

impl From<Cta> for CtaDraft {
    fn from(cta: Cta) -> Self {
        Self {
            cta_type: cta.cta_type,
            text: cta.text,
            position: cta.position,
            style: cta.style,
            animation: cta.animation,
            link: cta.link,
            start_time: cta.start_time,
            end_time: cta.end_time,
        }
    }
}

/// Partial CTA update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub cta_type: Option<CtaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<CtaStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
}

impl CtaPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn window(start_time: f64, end_time: f64) -> Self {
        Self {
            start_time: Some(start_time),
            end_time: Some(end_time),
            ..Default::default()
        }
    }
}
