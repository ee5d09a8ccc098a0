//! Gesture model: sample types and the cumulative-to-incremental tracker.
//!
//! Host gesture APIs report *cumulative* readings — the total scale or
//! translation since the gesture began — on every callback. The transforms
//! in [`crate::viewport`] want *incremental* deltas, one per event.
//! [`DeltaTracker`] sits at that boundary: it keeps the last cumulative
//! values as a baseline and converts each sample into the delta since the
//! previous one.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use serde::{Deserialize, Serialize};

use crate::consts::SCALE_EPSILON;
use crate::viewport::Point;

/// Which gesture produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    /// Two-finger pinch; carries a cumulative scale.
    Pinch,
    /// One-finger drag; carries a cumulative translation.
    Pan,
    /// Single tap, delivered as a one-shot sample.
    SingleTap,
    /// Double tap, delivered as a one-shot sample.
    DoubleTap,
}

/// Recognizer phase of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One gesture reading as delivered by the host recognizer.
///
/// `cumulative_scale` and `cumulative_translation` are running totals since
/// the gesture began, not per-event deltas. `location` is in view
/// coordinates. Tap samples carry identity cumulative values; only their
/// `kind` and `location` are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    pub kind: GestureKind,
    pub phase: GesturePhase,
    pub cumulative_scale: f64,
    pub cumulative_translation: Point,
    pub location: Point,
}

impl GestureSample {
    /// A pinch reading with the given cumulative scale, centered at
    /// `location` (the pinch midpoint).
    #[must_use]
    pub fn pinch(phase: GesturePhase, cumulative_scale: f64, location: Point) -> Self {
        Self {
            kind: GestureKind::Pinch,
            phase,
            cumulative_scale,
            cumulative_translation: Point::ZERO,
            location,
        }
    }

    /// A pan reading with the given cumulative translation.
    #[must_use]
    pub fn pan(phase: GesturePhase, cumulative_translation: Point, location: Point) -> Self {
        Self {
            kind: GestureKind::Pan,
            phase,
            cumulative_scale: 1.0,
            cumulative_translation,
            location,
        }
    }

    /// A one-shot single-tap sample at `location`.
    #[must_use]
    pub fn single_tap(location: Point) -> Self {
        Self::tap(GestureKind::SingleTap, location)
    }

    /// A one-shot double-tap sample at `location`.
    #[must_use]
    pub fn double_tap(location: Point) -> Self {
        Self::tap(GestureKind::DoubleTap, location)
    }

    fn tap(kind: GestureKind, location: Point) -> Self {
        Self {
            kind,
            phase: GesturePhase::Ended,
            cumulative_scale: 1.0,
            cumulative_translation: Point::ZERO,
            location,
        }
    }

    /// Whether every numeric field is finite and the scale is usable as a
    /// ratio operand.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.cumulative_scale.is_finite()
            && self.cumulative_scale > SCALE_EPSILON
            && self.cumulative_translation.is_finite()
            && self.location.is_finite()
    }
}

/// Incremental change between two consecutive samples of one gesture.
///
/// `scale` is multiplicative (1.0 = no change); `translation` is additive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaEvent {
    pub scale: f64,
    pub translation: Point,
}

impl DeltaEvent {
    /// The no-op delta.
    pub const IDENTITY: Self = Self { scale: 1.0, translation: Point::ZERO };

    #[must_use]
    pub fn new(scale: f64, translation: Point) -> Self {
        Self { scale, translation }
    }

    /// Whether applying this delta would leave a viewport unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.translation == Point::ZERO
    }
}

impl Default for DeltaEvent {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts cumulative gesture readings into per-event incremental deltas.
///
/// The baseline is seeded at `Began`, advanced on every `Changed` so each
/// call yields the delta since the previous call, and discarded at
/// `Ended`/`Cancelled`. Malformed samples never touch the baseline.
#[derive(Debug, Clone, Default)]
pub struct DeltaTracker {
    baseline: Option<Baseline>,
}

#[derive(Debug, Clone, Copy)]
struct Baseline {
    scale: f64,
    translation: Point,
}

impl Baseline {
    fn of(sample: &GestureSample) -> Self {
        Self { scale: sample.cumulative_scale, translation: sample.cumulative_translation }
    }
}

impl DeltaTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sample into the tracker and return the incremental delta.
    ///
    /// `Began` seeds the baseline and yields the identity delta. `Changed`
    /// yields the ratio/difference against the baseline, then advances it.
    /// A `Changed` with no baseline (the host skipped `Began`) seeds one and
    /// yields the identity delta. `Ended` and `Cancelled` clear the baseline.
    pub fn on_sample(&mut self, sample: &GestureSample) -> DeltaEvent {
        match sample.phase {
            GesturePhase::Began | GesturePhase::Changed if !sample.is_well_formed() => {
                DeltaEvent::IDENTITY
            }
            GesturePhase::Began => {
                self.baseline = Some(Baseline::of(sample));
                DeltaEvent::IDENTITY
            }
            GesturePhase::Changed => {
                let Some(baseline) = self.baseline else {
                    self.baseline = Some(Baseline::of(sample));
                    return DeltaEvent::IDENTITY;
                };

                let delta = DeltaEvent::new(
                    sample.cumulative_scale / baseline.scale,
                    Point::new(
                        sample.cumulative_translation.x - baseline.translation.x,
                        sample.cumulative_translation.y - baseline.translation.y,
                    ),
                );
                self.baseline = Some(Baseline::of(sample));
                delta
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                self.baseline = None;
                DeltaEvent::IDENTITY
            }
        }
    }

    /// Drop any stored baseline.
    pub fn reset(&mut self) {
        self.baseline = None;
    }

    /// Whether a gesture baseline is currently stored.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.baseline.is_some()
    }
}
