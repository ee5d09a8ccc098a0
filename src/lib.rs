//! Interaction engine for image preview sessions.
//!
//! This crate is the platform-agnostic core of an image previewer: it owns the
//! full lifecycle of a preview session's viewport, translating raw gesture
//! samples from a host UI layer into scale/offset state and a small set of
//! actions for the host to execute (re-render, animate a zoom, dismiss the
//! session). The host layer is responsible only for wiring its gesture
//! recognizers to [`controller::PreviewController::on_sample`] and applying
//! the resulting [`controller::Action`]s to its view hierarchy.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Per-session gesture state machine and host actions |
//! | [`viewport`] | Viewport value type, pinch/pan/zoom-rect transforms |
//! | [`gesture`] | Gesture sample types and cumulative-to-delta tracking |
//! | [`progress`] | Circular progress ring geometry |
//! | [`color`] | Hex string color parsing |
//! | [`consts`] | Shared numeric constants (scale limits, durations, etc.) |

pub mod color;
pub mod consts;
pub mod controller;
pub mod gesture;
pub mod progress;
pub mod viewport;
