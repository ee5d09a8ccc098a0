//! Viewport model: geometry types and the pinch/pan/zoom transforms.
//!
//! A [`Viewport`] describes how preview content is displayed within a fixed
//! frame: the current zoom `scale`, the `offset` of the visible region, and
//! the content/bounds dimensions the two are measured against. All transforms
//! are pure — they take a viewport by reference and return the next one —
//! so the controller can hold the single authoritative copy and hosts can
//! treat everything they receive as a snapshot.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, SCALE_EPSILON};
use crate::gesture::DeltaEvent;

/// A point in either view or content space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in content space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// The allowed zoom scale range for a preview session.
///
/// `min` is floored at a small epsilon so a scale is never zero and the
/// view↔content conversions stay well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_SCALE, max: DEFAULT_MAX_SCALE }
    }
}

impl ScaleLimits {
    /// Build a scale range. Reversed arguments are swapped rather than
    /// rejected, and the lower bound is floored at epsilon.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let (lo, hi) = if max < min { (max, min) } else { (min, max) };
        Self { min: lo.max(SCALE_EPSILON), max: hi.max(SCALE_EPSILON) }
    }

    /// Clamp `scale` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }
}

/// Current scale/offset state of a preview session.
///
/// `offset` is the origin of the visible region measured in scaled-content
/// coordinates, so its pannable range per axis is
/// `[0, max(0, content · scale − bounds)]`. The transforms below keep
/// `scale` inside `limits` and `offset` inside that range for any input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f64,
    pub offset: Point,
    pub content_size: Size,
    pub bounds_size: Size,
    pub limits: ScaleLimits,
}

impl Viewport {
    /// A fresh session viewport: fully zoomed out with the content centered.
    #[must_use]
    pub fn new(content_size: Size, bounds_size: Size, limits: ScaleLimits) -> Self {
        let mut viewport = Self {
            scale: limits.min,
            offset: Point::ZERO,
            content_size,
            bounds_size,
            limits,
        };
        viewport.offset = viewport.centered_offset();
        viewport
    }

    /// Content dimensions at the current scale.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        Size::new(self.content_size.width * self.scale, self.content_size.height * self.scale)
    }

    /// The largest valid offset per axis; zero when the content fits.
    #[must_use]
    pub fn max_offset(&self) -> Point {
        let scaled = self.scaled_size();
        Point::new(
            (scaled.width - self.bounds_size.width).max(0.0),
            (scaled.height - self.bounds_size.height).max(0.0),
        )
    }

    /// Convert a view-space point to content coordinates.
    #[must_use]
    pub fn view_to_content(&self, view: Point) -> Point {
        Point::new(
            (self.offset.x + view.x) / self.scale,
            (self.offset.y + view.y) / self.scale,
        )
    }

    /// Convert a content-space point to view coordinates.
    #[must_use]
    pub fn content_to_view(&self, content: Point) -> Point {
        Point::new(
            content.x * self.scale - self.offset.x,
            content.y * self.scale - self.offset.y,
        )
    }

    /// Apply an incremental pinch delta anchored at `anchor` (view
    /// coordinates), so the content point under the fingers stays fixed.
    ///
    /// A pinch that would take the scale below `limits.min` is rejected and
    /// the viewport returned unchanged; scaling past `limits.max` is clamped
    /// to the ceiling. Degenerate delta scales are a no-op.
    #[must_use]
    pub fn apply_pinch(&self, delta: &DeltaEvent, anchor: Point) -> Self {
        if !delta.scale.is_finite() || delta.scale <= 0.0 || !anchor.is_finite() {
            return *self;
        }

        let raw = self.scale * delta.scale;
        if raw < self.limits.min {
            return *self;
        }

        let anchor_content = self.view_to_content(anchor);
        let mut next = *self;
        next.scale = raw.min(self.limits.max);
        next.offset = next.clamp_offset(Point::new(
            anchor_content.x * next.scale - anchor.x,
            anchor_content.y * next.scale - anchor.y,
        ));
        next
    }

    /// Apply an incremental pan delta. The content follows the finger, so
    /// the offset moves opposite the translation; the result is clamped to
    /// the pannable range no matter how far the delta overshoots.
    #[must_use]
    pub fn apply_pan(&self, delta: &DeltaEvent) -> Self {
        if !delta.translation.is_finite() {
            return *self;
        }

        let mut next = *self;
        next.offset = self.clamp_offset(Point::new(
            self.offset.x - delta.translation.x,
            self.offset.y - delta.translation.y,
        ));
        next
    }

    /// The content rectangle that fills the bounds at `target_scale`,
    /// centered on `anchor` (content coordinates) and shifted as needed to
    /// stay inside the content.
    #[must_use]
    pub fn zoom_rect_for(&self, target_scale: f64, anchor: Point) -> Rect {
        let scale = self.limits.clamp(target_scale);
        let width = self.bounds_size.width / scale;
        let height = self.bounds_size.height / scale;

        let x = clamp_to_range(anchor.x - width / 2.0, (self.content_size.width - width).max(0.0));
        let y = clamp_to_range(anchor.y - height / 2.0, (self.content_size.height - height).max(0.0));
        Rect::new(x, y, width, height)
    }

    /// The viewport showing `rect` at `target_scale`, plus the rect itself.
    /// Used for the double-tap zoom-in: the controller commits the returned
    /// viewport and hands the rect to the host to animate toward.
    #[must_use]
    pub fn zoomed_to(&self, target_scale: f64, anchor: Point) -> (Self, Rect) {
        let rect = self.zoom_rect_for(target_scale, anchor);
        let mut next = *self;
        next.scale = self.limits.clamp(target_scale);
        next.offset = next.clamp_offset(Point::new(rect.x * next.scale, rect.y * next.scale));
        (next, rect)
    }

    /// The fully zoomed-out viewport for this session.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.content_size, self.bounds_size, self.limits)
    }

    /// The content region currently visible through the bounds.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::new(
            self.offset.x / self.scale,
            self.offset.y / self.scale,
            self.bounds_size.width / self.scale,
            self.bounds_size.height / self.scale,
        )
    }

    /// Clamp an offset into the pannable range at the current scale.
    #[must_use]
    pub fn clamp_offset(&self, offset: Point) -> Point {
        let max = self.max_offset();
        Point::new(clamp_to_range(offset.x, max.x), clamp_to_range(offset.y, max.y))
    }

    /// Offset that centers the pannable overflow, or zero when the content
    /// fits the bounds.
    #[must_use]
    pub fn centered_offset(&self) -> Point {
        let max = self.max_offset();
        Point::new(max.x / 2.0, max.y / 2.0)
    }
}

/// Clamp into `[0, hi]` where `hi` is already non-negative.
fn clamp_to_range(value: f64, hi: f64) -> f64 {
    value.max(0.0).min(hi)
}
