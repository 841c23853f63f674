// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use stagegrid_layout::cell_extent;
use stagegrid_stages::StageLadder;

use crate::bridge::ScaleBridge;
use crate::config::PinchConfig;

/// Where a session currently is in its gesture lifecycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchPhase {
    /// No gesture and no settle in flight; the scale rests at 1.
    Idle,
    /// A pinch is live; scrolling is disabled and the scale follows the
    /// effective scalar.
    Pinching {
        /// The most recent effective scalar, after band clamping. The
        /// settle direction at gesture end is decided from this value.
        last_effective: f64,
    },
    /// The gesture has ended and the scale is settling along a bridge.
    Bridging {
        /// The settle animation in flight.
        bridge: ScaleBridge,
        /// Whether completing the bridge steps one stage toward fewer
        /// items per row.
        advances_stage: bool,
    },
}

/// What a single gesture update did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchUpdate {
    /// The scale tracked the scalar; no stage change.
    Tracked,
    /// A stage transition was committed.
    Committed {
        /// Stage index before the transition.
        from: usize,
        /// Stage index after the transition.
        to: usize,
    },
    /// The gesture pushed past a ladder bound; the scale followed the
    /// scalar only as far as the elastic band allows.
    Elastic,
    /// The scalar was not finite; the session did not change.
    Ignored,
}

/// What a tick of the host animation clock did to the settle bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeProgress {
    /// No bridge is in flight.
    Idle,
    /// The bridge advanced but has not finished.
    Settling,
    /// The bridge finished: any deferred stage step was applied and the
    /// session is back at rest.
    Settled {
        /// The stage index the session settled on.
        stage_index: usize,
    },
}

/// Pinch-to-stage zoom controller.
///
/// `PinchZoom` owns the mutable state of one zooming grid screen: the
/// current stage index into a [`StageLadder`], the derived cell extent,
/// the live visual scale, and the gesture baseline bookkeeping that keeps
/// a continuous pinch and discrete stage transitions seamless.
///
/// The controller is headless and single-threaded. Hosts wire it up by:
/// - feeding raw magnification scalars (1.0 at gesture start) into
///   [`on_gesture_change`](Self::on_gesture_change),
/// - calling [`on_gesture_end`](Self::on_gesture_end) when the recognizer
///   reports the gesture over,
/// - driving [`tick`](Self::tick) from their animation clock until the
///   settle bridge reports [`BridgeProgress::Settled`], and
/// - laying out with [`cell_extent`](Self::cell_extent) and painting
///   under [`visual_scale`](Self::visual_scale).
///
/// Stage transitions commit mid-gesture, in both directions, as the
/// tracked scale crosses the neighboring stage's cell-size ratio; the
/// scale is set so the swap is invisible. See the crate docs for the
/// full walkthrough.
#[derive(Clone, Debug)]
pub struct PinchZoom {
    ladder: StageLadder,
    config: PinchConfig,
    available_width: f64,
    stage_index: usize,
    cell: f64,
    visual_scale: f64,
    /// Offset subtracted from raw scalars so the effective scalar
    /// re-zeroes to 1 after each commit.
    baseline: f64,
    /// Scale value mid-gesture tracking continues from: 1 normally, the
    /// bridge ratio right after a shrink commit.
    scale_origin: f64,
    /// Ratio of the previous (larger) stage's cell extent to the current
    /// one; 1 at stage 0. A pinch-out commits once the tracked scale
    /// reaches this.
    grow_ratio: f64,
    phase: PinchPhase,
}

impl PinchZoom {
    /// Creates a session over `ladder` for a container `available_width`
    /// wide, resting at the ladder's default stage.
    #[must_use]
    pub fn new(ladder: StageLadder, available_width: f64, config: PinchConfig) -> Self {
        let stage_index = ladder.default_stage();
        let mut session = Self {
            ladder,
            config,
            available_width,
            stage_index,
            cell: 0.0,
            visual_scale: 1.0,
            baseline: 0.0,
            scale_origin: 1.0,
            grow_ratio: 1.0,
            phase: PinchPhase::Idle,
        };
        session.rederive();
        session
    }

    /// Re-measures the container, keeping the current (clamped) stage.
    ///
    /// Call whenever the layout collaborator reports a new width. Any
    /// live gesture or settle bridge is abandoned and the session snaps
    /// to rest — the layout is changing under it anyway.
    pub fn set_available_width(&mut self, available_width: f64) {
        self.available_width = available_width;
        self.rest();
        self.rederive();
    }

    /// Swaps in a new stage ladder, clamping the current stage into it.
    ///
    /// This is the orientation / device-class change path: the table is
    /// re-selected, never mutated. As with re-measuring, the session
    /// snaps to rest.
    pub fn set_ladder(&mut self, ladder: StageLadder) {
        self.ladder = ladder;
        self.rest();
        self.rederive();
    }

    /// Feeds one raw magnification scalar from the gesture recognizer.
    ///
    /// The raw value is nominally 1.0 at gesture start and drifts below 1
    /// as the fingers pinch together (asking for more items per row) or
    /// above 1 as they spread (asking for fewer). The session subtracts
    /// its baseline, decides between committing a stage transition,
    /// tracking the scale, or applying elastic resistance at a ladder
    /// bound, and reports which via the returned [`PinchUpdate`].
    ///
    /// Starting a gesture while a settle bridge is in flight cancels the
    /// bridge and its deferred stage step; the new gesture picks the
    /// scale up exactly where the bridge left it.
    pub fn on_gesture_change(&mut self, raw: f64) -> PinchUpdate {
        if !raw.is_finite() {
            return PinchUpdate::Ignored;
        }
        if matches!(self.phase, PinchPhase::Bridging { .. }) {
            // Cancel the pending settle; track on from the bridged scale
            // so the hand-off is seamless.
            self.baseline = 0.0;
            self.scale_origin = self.visual_scale;
        }

        let mut effective = raw - self.baseline;
        let update;

        if effective < 1.0 && self.visual_scale <= 1.0 {
            // Pinch-in: the user wants more items per row.
            if !self.ladder.is_finest(self.stage_index) {
                update = self.commit_shrink(raw);
                effective = 1.0;
            } else {
                // Most compressed stage already; resist inside the band.
                if self.scale_origin != 1.0 {
                    // Hand over from ratio-relative tracking without a
                    // pop: re-zero so the scalar meets the scale where
                    // it is.
                    self.baseline = raw - self.visual_scale;
                    self.scale_origin = 1.0;
                }
                effective = (raw - self.baseline).max(self.elastic_floor());
                self.visual_scale = effective;
                update = PinchUpdate::Elastic;
            }
        } else if effective > 1.0 && self.visual_scale >= self.grow_ratio {
            // Pinch-out: the user wants fewer items per row, and the
            // tracked scale has grown to meet the coarser stage's cells.
            if !self.ladder.is_coarsest(self.stage_index) {
                update = self.commit_grow(raw);
                effective = 1.0;
            } else {
                if self.scale_origin != 1.0 {
                    self.baseline = raw - self.visual_scale;
                    self.scale_origin = 1.0;
                }
                effective = (raw - self.baseline).min(self.elastic_ceiling());
                self.visual_scale = effective;
                update = PinchUpdate::Elastic;
            }
        } else {
            // Between thresholds: continuous rubber-band feedback.
            self.visual_scale = self.scale_origin - (1.0 - effective);
            update = PinchUpdate::Tracked;
        }

        self.phase = PinchPhase::Pinching {
            last_effective: effective,
        };
        update
    }

    /// Ends the gesture and starts the settle bridge.
    ///
    /// If the last effective scalar still signaled magnification intent,
    /// the scale settles toward the coarser neighbor's cell-size ratio
    /// and, once the bridge completes, the stage steps there — releasing
    /// mid-spread feels like the same threshold crossing as pinching all
    /// the way. Otherwise the scale settles back to 1 with no further
    /// stage change. Saturates at stage 0: the bridge target is 1 and no
    /// step is pending.
    ///
    /// Scrolling re-enables immediately; only the scale settle is
    /// deferred. Calling this without a live gesture is a no-op.
    pub fn on_gesture_end(&mut self) {
        let PinchPhase::Pinching { last_effective } = self.phase else {
            return;
        };
        let magnify = last_effective > 1.0;
        let (target, advances_stage) = if magnify {
            (self.grow_ratio, self.stage_index > 0)
        } else {
            (1.0, false)
        };
        self.baseline = 0.0;
        self.scale_origin = 1.0;
        self.phase = PinchPhase::Bridging {
            bridge: ScaleBridge::new(self.visual_scale, target, self.config.bridge_duration),
            advances_stage,
        };
    }

    /// Advances the settle bridge by `dt` on the host animation clock.
    ///
    /// No-op outside the bridging phase. On completion the deferred
    /// stage step (if any) is applied, the scale rests at exactly 1, and
    /// the session returns to [`PinchPhase::Idle`].
    pub fn tick(&mut self, dt: f64) -> BridgeProgress {
        let PinchPhase::Bridging {
            mut bridge,
            advances_stage,
        } = self.phase
        else {
            return BridgeProgress::Idle;
        };

        bridge.advance(dt);
        self.visual_scale = bridge.scale();
        if bridge.is_complete() {
            if advances_stage {
                self.stage_index = self.stage_index.saturating_sub(1);
            }
            self.rest();
            self.rederive();
            BridgeProgress::Settled {
                stage_index: self.stage_index,
            }
        } else {
            self.phase = PinchPhase::Bridging {
                bridge,
                advances_stage,
            };
            BridgeProgress::Settling
        }
    }

    /// Returns the current stage index into the ladder.
    #[must_use]
    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    /// Returns the items-per-row count at the current stage.
    #[must_use]
    pub fn items_per_row(&self) -> u32 {
        self.ladder.items_per_row(self.stage_index)
    }

    /// Returns the derived cell extent for the current stage and width.
    #[must_use]
    pub fn cell_extent(&self) -> f64 {
        self.cell
    }

    /// Returns the live visual scale multiplier. Exactly 1 at rest.
    #[must_use]
    pub fn visual_scale(&self) -> f64 {
        self.visual_scale
    }

    /// Returns `true` while a pinch gesture is live.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self.phase, PinchPhase::Pinching { .. })
    }

    /// Returns `true` while the post-gesture settle bridge is running.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        matches!(self.phase, PinchPhase::Bridging { .. })
    }

    /// Returns whether the host scroll view should accept scroll
    /// gestures: scrolling is disabled only while a pinch is live.
    #[must_use]
    pub fn scrolling_enabled(&self) -> bool {
        !self.is_pinching()
    }

    /// Returns the current gesture lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> PinchPhase {
        self.phase
    }

    /// Returns the active stage ladder.
    #[must_use]
    pub fn ladder(&self) -> &StageLadder {
        &self.ladder
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> PinchConfig {
        self.config
    }

    /// Snapshot of the session state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PinchDebugInfo {
        PinchDebugInfo {
            available_width: self.available_width,
            stage_index: self.stage_index,
            items_per_row: self.items_per_row(),
            cell_extent: self.cell,
            visual_scale: self.visual_scale,
            baseline: self.baseline,
            scale_origin: self.scale_origin,
            grow_ratio: self.grow_ratio,
            phase: self.phase,
        }
    }

    /// Commits one step toward more items per row.
    ///
    /// The scale is set to the exact ratio that renders the finer stage's
    /// cells at the size currently on screen, so the layout swap is
    /// invisible; the gesture then keeps shrinking that ratio toward 1.
    fn commit_shrink(&mut self, raw: f64) -> PinchUpdate {
        let from = self.stage_index;
        let to = from + 1;
        let next_cell = self.cell_extent_at(to);
        let ratio = self.cell / next_cell;

        self.visual_scale = ratio;
        self.scale_origin = ratio;
        self.stage_index = to;
        self.cell = next_cell;
        self.grow_ratio = self.grow_ratio_at(to);
        self.baseline = raw - 1.0;
        PinchUpdate::Committed { from, to }
    }

    /// Commits one step toward fewer items per row.
    ///
    /// The cells themselves grow by exactly the ratio the tracked scale
    /// just reached, so resting the scale at 1 lands on the same visual
    /// size with no jump.
    fn commit_grow(&mut self, raw: f64) -> PinchUpdate {
        let from = self.stage_index;
        let to = from - 1;

        self.stage_index = to;
        self.cell = self.cell_extent_at(to);
        self.grow_ratio = self.grow_ratio_at(to);
        self.visual_scale = 1.0;
        self.scale_origin = 1.0;
        self.baseline = raw - 1.0;
        PinchUpdate::Committed { from, to }
    }

    fn cell_extent_at(&self, index: usize) -> f64 {
        cell_extent(
            self.available_width,
            self.ladder.items_per_row(index),
            self.config.spacing,
        )
    }

    fn grow_ratio_at(&self, index: usize) -> f64 {
        let coarser = index.saturating_sub(1);
        self.cell_extent_at(coarser) / self.cell_extent_at(index)
    }

    fn elastic_floor(&self) -> f64 {
        self.config.elastic_floor.clamp(0.0, 1.0)
    }

    fn elastic_ceiling(&self) -> f64 {
        self.config.elastic_ceiling.max(1.0)
    }

    /// Clears all transient gesture state; the scale rests at exactly 1.
    fn rest(&mut self) {
        self.visual_scale = 1.0;
        self.baseline = 0.0;
        self.scale_origin = 1.0;
        self.phase = PinchPhase::Idle;
    }

    /// Recomputes everything derived from the ladder, stage, and width.
    fn rederive(&mut self) {
        self.stage_index = self.ladder.clamp_index(self.stage_index);
        self.cell = self.cell_extent_at(self.stage_index);
        self.grow_ratio = self.grow_ratio_at(self.stage_index);
    }
}

/// Debug snapshot of a [`PinchZoom`] session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchDebugInfo {
    /// Container width the cell extent was derived from.
    pub available_width: f64,
    /// Current stage index into the ladder.
    pub stage_index: usize,
    /// Items-per-row count at the current stage.
    pub items_per_row: u32,
    /// Derived cell extent.
    pub cell_extent: f64,
    /// Live visual scale multiplier.
    pub visual_scale: f64,
    /// Offset subtracted from raw gesture scalars.
    pub baseline: f64,
    /// Scale value tracking continues from.
    pub scale_origin: f64,
    /// Tracked-scale threshold for committing a pinch-out.
    pub grow_ratio: f64,
    /// Current gesture lifecycle phase.
    pub phase: PinchPhase,
}
