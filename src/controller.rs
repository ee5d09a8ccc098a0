//! Session controller: the gesture state machine that owns the viewport.
//!
//! [`PreviewController`] is created when a preview session starts and
//! discarded when it ends. The host feeds every gesture sample through
//! [`PreviewController::on_sample`] and applies the returned [`Action`]s;
//! the controller routes samples through the delta tracker to the viewport
//! transforms and keeps the single authoritative copy of the session's
//! [`Viewport`]. Samples arrive serially from the host event stream, so the
//! controller needs no synchronization of its own.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::gesture::{DeltaEvent, DeltaTracker, GestureKind, GesturePhase, GestureSample};
use crate::viewport::{Point, Rect, Viewport};

/// Actions returned from sample handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The viewport changed; the host should re-apply its content transform.
    ViewportChanged(Viewport),
    /// A double-tap committed `target` as the new viewport. The host should
    /// animate its container toward `rect` (content coordinates) and call
    /// [`PreviewController::finish_animation`] when done.
    ZoomAnimationStarted { target: Viewport, rect: Rect },
    /// A single tap asked to close the preview session.
    DismissRequested,
}

/// What to do with samples that arrive while a zoom animation is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatingPolicy {
    /// Drop them until the animation finishes (the default).
    #[default]
    Ignore,
    /// Hold them and replay them in order once the animation finishes.
    Queue,
}

/// Which gesture the controller is currently processing.
///
/// One gesture kind is active at a time: samples of the other kind are
/// ignored until the active gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// No gesture in progress; waiting for the next sample.
    #[default]
    Idle,
    /// A pinch is being tracked and scaled into the viewport.
    Pinching,
    /// A pan is being tracked and offset into the viewport.
    Panning,
    /// A double-tap zoom is animating in the host.
    Animating,
}

/// Per-session gesture orchestrator.
pub struct PreviewController {
    viewport: Viewport,
    state: ControllerState,
    tracker: DeltaTracker,
    policy: AnimatingPolicy,
    queued: VecDeque<GestureSample>,
}

impl PreviewController {
    /// Start a session over `viewport` with the default animating policy.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_policy(viewport, AnimatingPolicy::default())
    }

    /// Start a session with an explicit [`AnimatingPolicy`].
    #[must_use]
    pub fn with_policy(viewport: Viewport, policy: AnimatingPolicy) -> Self {
        Self {
            viewport,
            state: ControllerState::Idle,
            tracker: DeltaTracker::new(),
            policy,
            queued: VecDeque::new(),
        }
    }

    /// The authoritative viewport for the session.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The current gesture state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Feed one gesture sample and collect the actions for the host.
    pub fn on_sample(&mut self, sample: &GestureSample) -> Vec<Action> {
        if self.state == ControllerState::Animating {
            return self.while_animating(sample);
        }

        match sample.kind {
            GestureKind::Pinch => self.on_pinch(sample),
            GestureKind::Pan => self.on_pan(sample),
            GestureKind::SingleTap => self.on_single_tap(),
            GestureKind::DoubleTap => self.on_double_tap(sample),
        }
    }

    /// Host signal that the double-tap zoom animation completed. Returns to
    /// `Idle` and replays any samples queued while animating.
    pub fn finish_animation(&mut self) -> Vec<Action> {
        if self.state != ControllerState::Animating {
            return Vec::new();
        }
        self.set_state(ControllerState::Idle);

        let queued: Vec<GestureSample> = self.queued.drain(..).collect();
        let mut actions = Vec::new();
        for sample in &queued {
            actions.extend(self.on_sample(sample));
        }
        actions
    }

    // --- Gesture handlers ---

    fn on_pinch(&mut self, sample: &GestureSample) -> Vec<Action> {
        match (self.state, sample.phase) {
            // A stray `Changed` with no `Began` still starts the gesture;
            // the tracker seeds its baseline either way.
            (ControllerState::Idle, GesturePhase::Began | GesturePhase::Changed) => {
                self.set_state(ControllerState::Pinching);
                let delta = self.tracker.on_sample(sample);
                self.apply_pinch(delta, sample.location)
            }
            (ControllerState::Pinching, GesturePhase::Changed) => {
                let delta = self.tracker.on_sample(sample);
                self.apply_pinch(delta, sample.location)
            }
            (ControllerState::Pinching, GesturePhase::Ended | GesturePhase::Cancelled) => {
                self.end_gesture();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn on_pan(&mut self, sample: &GestureSample) -> Vec<Action> {
        match (self.state, sample.phase) {
            (ControllerState::Idle, GesturePhase::Began | GesturePhase::Changed) => {
                self.set_state(ControllerState::Panning);
                let delta = self.tracker.on_sample(sample);
                self.apply_pan(delta)
            }
            (ControllerState::Panning, GesturePhase::Changed) => {
                let delta = self.tracker.on_sample(sample);
                self.apply_pan(delta)
            }
            (ControllerState::Panning, GesturePhase::Ended | GesturePhase::Cancelled) => {
                self.end_gesture();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn on_single_tap(&mut self) -> Vec<Action> {
        if self.state != ControllerState::Idle {
            return Vec::new();
        }
        debug!("single tap, requesting dismissal");
        vec![Action::DismissRequested]
    }

    /// Two-state toggle: zoomed in at all → revert to the minimum scale;
    /// at the minimum → zoom to the maximum centered on the tap point.
    fn on_double_tap(&mut self, sample: &GestureSample) -> Vec<Action> {
        if self.state != ControllerState::Idle {
            return Vec::new();
        }

        let (target, rect) = if self.viewport.scale > self.viewport.limits.min {
            let target = self.viewport.reset();
            (target, target.visible_rect())
        } else {
            let anchor = self.viewport.view_to_content(sample.location);
            self.viewport.zoomed_to(self.viewport.limits.max, anchor)
        };

        debug!(scale = target.scale, "double tap, zoom animation started");
        self.viewport = target;
        self.set_state(ControllerState::Animating);
        vec![Action::ZoomAnimationStarted { target, rect }]
    }

    fn while_animating(&mut self, sample: &GestureSample) -> Vec<Action> {
        match self.policy {
            AnimatingPolicy::Ignore => {
                trace!(kind = ?sample.kind, "sample ignored while animating");
            }
            AnimatingPolicy::Queue => {
                self.queued.push_back(*sample);
            }
        }
        Vec::new()
    }

    // --- Internals ---

    fn apply_pinch(&mut self, delta: DeltaEvent, anchor: Point) -> Vec<Action> {
        if delta.is_identity() {
            return Vec::new();
        }
        trace!(scale = delta.scale, "pinch delta");
        self.commit(self.viewport.apply_pinch(&delta, anchor))
    }

    fn apply_pan(&mut self, delta: DeltaEvent) -> Vec<Action> {
        if delta.is_identity() {
            return Vec::new();
        }
        trace!(dx = delta.translation.x, dy = delta.translation.y, "pan delta");
        self.commit(self.viewport.apply_pan(&delta))
    }

    /// Adopt `next` if it differs, reporting the change to the host.
    fn commit(&mut self, next: Viewport) -> Vec<Action> {
        if next == self.viewport {
            return Vec::new();
        }
        self.viewport = next;
        vec![Action::ViewportChanged(next)]
    }

    fn end_gesture(&mut self) {
        self.tracker.reset();
        self.set_state(ControllerState::Idle);
    }

    fn set_state(&mut self, next: ControllerState) {
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "gesture state changed");
            self.state = next;
        }
    }
}
