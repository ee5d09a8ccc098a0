//! Shared numeric constants for the preview engine.

// ── Zoom ────────────────────────────────────────────────────────

/// Default minimum zoom scale (content fitted to bounds).
pub const DEFAULT_MIN_SCALE: f64 = 1.0;

/// Default maximum zoom scale.
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Duration in seconds of the host-driven double-tap zoom animation.
pub const ZOOM_ANIMATION_SECS: f64 = 0.3;

/// Cumulative scale readings at or below this are treated as degenerate
/// and never used as a ratio denominator.
pub const SCALE_EPSILON: f64 = 1e-9;

// ── Progress ring ───────────────────────────────────────────────

/// Duration in seconds of the progress stroke animation.
pub const PROGRESS_ANIMATION_SECS: f64 = 0.3;

/// Default stroke width in pixels for a progress ring.
pub const DEFAULT_RING_LINE_WIDTH: f64 = 5.0;
