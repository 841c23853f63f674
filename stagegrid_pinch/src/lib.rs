// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stagegrid_pinch --heading-base-level=0

//! Stagegrid Pinch: a pinch-to-stage zoom controller.
//!
//! This crate maps a continuous pinch magnification scalar onto the
//! discrete items-per-row stages of a [`StageLadder`](stagegrid_stages::StageLadder),
//! producing on every update:
//!
//! - the current cell extent (the grid collaborator's layout parameter),
//! - a visual scale multiplier (a uniform transform anchored at the top
//!   of the grid; see [`stagegrid_layout::scale_about_top`]), and
//! - whether scrolling should be enabled (it is suspended while a pinch
//!   is live, so the two gestures never fight).
//!
//! The hard part is making discrete layout transitions read as one
//! continuous motion. [`PinchZoom`] does it the way the reference screen
//! does:
//!
//! - **Shrink commits** (pinch-in) happen the moment the effective scalar
//!   crosses below 1: the finer layout is swapped in immediately, but the
//!   visual scale is set to the exact ratio between the old and new cell
//!   extents, so the new, smaller cells are painted at the old size. The
//!   gesture then shrinks that ratio back toward 1.
//! - **Grow commits** (pinch-out) happen only once the tracked scale has
//!   grown to the coarser stage's cell-size ratio: at that point the
//!   bigger cells themselves cover the magnification, so the scale rests
//!   at exactly 1 with no jump.
//! - After every commit the scalar is **re-baselined** to 1, so one long
//!   pinch can cross several stages, and reversing direction mid-gesture
//!   re-crosses the same threshold backwards.
//! - At the ladder bounds the scalar is clamped to a small **elastic
//!   band**, a bounded "can't zoom further" cue that never commits.
//! - Releasing the gesture starts a short **settle bridge** — with
//!   magnification intent still in the scalar, the bridge finishes the
//!   crossing the user started and steps one stage coarser on completion.
//!   The bridge is a value in the session's phase, driven by host
//!   animation ticks and cancelled by any new gesture, so no stale
//!   continuation can fire.
//!
//! The controller is headless: it owns no widget, recognizer, or clock.
//! Events are delivered serially on the thread that owns the screen, and
//! the session is plain mutable state with no interior locking.
//!
//! ## Minimal example
//!
//! ```rust
//! use stagegrid_pinch::{BridgeProgress, PinchConfig, PinchUpdate, PinchZoom};
//! use stagegrid_stages::{DeviceClass, Orientation, ladder_for};
//!
//! let ladder = ladder_for(DeviceClass::Phone, Orientation::Portrait);
//! let mut zoom = PinchZoom::new(ladder, 400.0, PinchConfig::default());
//! assert_eq!(zoom.items_per_row(), 4);
//! assert_eq!(zoom.cell_extent(), 98.0);
//!
//! // A pinch-in crosses below 1.0 and commits the next finer stage,
//! // with a bridge ratio hiding the layout swap.
//! zoom.on_gesture_change(1.0);
//! let update = zoom.on_gesture_change(0.9);
//! assert!(matches!(update, PinchUpdate::Committed { from: 2, to: 3 }));
//! assert_eq!(zoom.items_per_row(), 6);
//! assert!(zoom.visual_scale() > 1.0);
//!
//! // Release: the settle bridge runs on host animation ticks.
//! zoom.on_gesture_end();
//! while let BridgeProgress::Settling = zoom.tick(0.05) {}
//! assert_eq!(zoom.visual_scale(), 1.0);
//! assert!(zoom.scrolling_enabled());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bridge;
mod config;
mod session;

pub use bridge::ScaleBridge;
pub use config::PinchConfig;
pub use session::{BridgeProgress, PinchDebugInfo, PinchPhase, PinchUpdate, PinchZoom};
