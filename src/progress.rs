//! Circular progress ring geometry.
//!
//! Computes the arcs a host needs to stroke a circular progress indicator:
//! a full track ring and a progress arc growing clockwise from twelve
//! o'clock. Stroking and animation stay in the host layer; this module only
//! turns bounds, stroke width, and a progress fraction into arc parameters.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_RING_LINE_WIDTH;
use crate::viewport::{Point, Size};

/// A circular arc for the host to stroke, clockwise from `start_angle`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Stroke geometry for a circular progress indicator within fixed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressRing {
    pub bounds: Size,
    pub line_width: f64,
}

impl ProgressRing {
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        Self::with_line_width(bounds, DEFAULT_RING_LINE_WIDTH)
    }

    #[must_use]
    pub fn with_line_width(bounds: Size, line_width: f64) -> Self {
        Self { bounds, line_width }
    }

    /// Center of the ring: the midpoint of the bounds.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.bounds.width / 2.0, self.bounds.height / 2.0)
    }

    /// Ring radius: half the smaller bounds dimension, inset so the stroke
    /// stays inside the bounds. Never negative, however wide the stroke.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.bounds.width.min(self.bounds.height) / 2.0 - self.line_width / 2.0).max(0.0)
    }

    /// The full background track ring.
    #[must_use]
    pub fn track_arc(&self) -> Arc {
        self.arc_spanning(1.0)
    }

    /// The arc covered at `progress`, which is clamped to `[0, 1]` (NaN
    /// counts as zero). Starts at twelve o'clock and spans the full circle
    /// at `1.0`.
    #[must_use]
    pub fn progress_arc(&self, progress: f64) -> Arc {
        self.arc_spanning(progress.max(0.0).min(1.0))
    }

    fn arc_spanning(&self, fraction: f64) -> Arc {
        let start_angle = -PI / 2.0;
        Arc {
            center: self.center(),
            radius: self.radius(),
            start_angle,
            end_angle: fraction.mul_add(PI * 2.0, start_angle),
        }
    }
}
