// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback-time queries over a CTA sequence.
//!
//! Everything here is a pure function of its inputs so it can run on every
//! playback progress tick. Time is in seconds; track positions are percent
//! of the track width.

use crate::models::{Cta, CtaId};

/// Whether `cta` is shown at `current_time`. Both window ends are inclusive.
///
/// A reversed window (`start_time > end_time`) never matches.
pub fn is_active(cta: &Cta, current_time: f64) -> bool {
    cta.start_time <= current_time && current_time <= cta.end_time
}

/// The CTAs shown at `current_time`, in their original order.
pub fn active_ctas(ctas: &[Cta], current_time: f64) -> Vec<&Cta> {
    ctas.iter().filter(|c| is_active(c, current_time)).collect()
}

/// Map an absolute time to a percentage along a track of `duration` seconds.
///
/// Returns 0 while the duration is unknown (zero).
pub fn time_to_position(time: f64, duration: f64) -> f64 {
    if duration == 0.0 {
        return 0.0;
    }
    (time / duration) * 100.0
}

/// Map a pixel offset on a track of `track_width` pixels back to a time.
///
/// Returns 0 for a track that has not been laid out yet (zero width).
pub fn position_to_time(pixel_offset: f64, track_width: f64, duration: f64) -> f64 {
    if track_width == 0.0 {
        return 0.0;
    }
    (pixel_offset / track_width) * duration
}

/// Horizontal extent of a CTA's bar on the timeline track, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

impl Span {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Bar for `cta` on a track of `duration` seconds. Reversed windows get zero width.
pub fn cta_span(cta: &Cta, duration: f64) -> Span {
    let left = time_to_position(cta.start_time, duration);
    let right = time_to_position(cta.end_time, duration);
    Span {
        left,
        width: (right - left).max(0.0),
    }
}

/// Format seconds as `MM:SS`, truncating fractions. Invalid input renders as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

/// CTAs that appeared or disappeared between two playback ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub entered: Vec<CtaId>,
    pub exited: Vec<CtaId>,
}

impl Transition {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Tracks the visible set across playback ticks for one viewer.
///
/// Each tick recomputes the active set from scratch, so seeks backwards or
/// forwards are handled the same way as ordinary progress.
#[derive(Debug, Clone, Default)]
pub struct Playhead {
    time: f64,
    active: Vec<CtaId>,
}

impl Playhead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time of the last tick.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Ids visible after the last tick, in CTA order.
    pub fn active(&self) -> &[CtaId] {
        &self.active
    }

    /// Advance (or seek) to `time` and report what changed.
    pub fn tick(&mut self, time: f64, ctas: &[Cta]) -> Transition {
        let now: Vec<CtaId> = active_ctas(ctas, time)
            .into_iter()
            .map(|c| c.id.clone())
            .collect();

        let entered = now
            .iter()
            .filter(|id| !self.active.contains(id))
            .cloned()
            .collect();
        let exited = self
            .active
            .iter()
            .filter(|id| !now.contains(id))
            .cloned()
            .collect();

        self.time = time;
        self.active = now;
        Transition { entered, exited }
    }
}
