// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module converts between pixel coordinates inside a rendered video
//! frame and the percentage positions stored on CTAs.

use crate::models::Position;

fn axis_percent(pixel: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (pixel / extent * 100.0).clamp(0.0, 100.0)
}

/// Convert a drop point in a `width` x `height` frame to a CTA position.
///
/// Points dragged outside the frame are pinned to its edge.
pub fn pixel_to_percent(pixel_x: f64, pixel_y: f64, width: f64, height: f64) -> Position {
    Position {
        x: axis_percent(pixel_x, width),
        y: axis_percent(pixel_y, height),
    }
}

/// Convert a CTA position to pixel coordinates in a `width` x `height` frame.
pub fn percent_to_pixel(position: &Position, width: f64, height: f64) -> (f64, f64) {
    (position.x / 100.0 * width, position.y / 100.0 * height)
}
