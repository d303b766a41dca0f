// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismiss phases and the curtain transform.
//!
//! [`DismissAnimator`] owns the curtain's phase and visual offset:
//!
//! ```text
//! Idle ──drag──▶ Dragging ──release > threshold──▶ Dismissing ──reveal done──▶ Dismissed
//!  ▲                 │
//!  │                 └──release ≤ threshold──▶ Settling ──settle done──┐
//!  └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A release commits iff `offset > commit_fraction * viewport_extent`; the comparison is
//! strict, so releasing exactly on the threshold settles back. `Dismissed` is terminal.
//!
//! The transform is resolved by priority: `Dismissing`/`Dismissed` over `Dragging` over a
//! tap bounce over `Idle`/`Settling`.

use curtain_timer::{TimerId, TimerQueue};
use log::{debug, trace};

use crate::{Easing, TransitionSpec};

/// Phase of the curtain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DismissPhase {
    /// At rest.
    #[default]
    Idle,
    /// Following the pointer.
    Dragging,
    /// Returning to rest after a release that did not commit.
    Settling,
    /// Retracting off screen after a committed release.
    Dismissing,
    /// Gone for good.
    Dismissed,
}

impl DismissPhase {
    /// Whether dismissal has been committed (`Dismissing` or `Dismissed`).
    pub const fn is_committed(self) -> bool {
        matches!(self, Self::Dismissing | Self::Dismissed)
    }
}

/// Outcome of [`DismissAnimator::evaluate_release`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReleaseDecision {
    /// The curtain is now dismissing.
    Commit,
    /// The curtain settles back to rest.
    Cancel,
    /// Dismissal was already committed; nothing changed.
    Ignored,
}

/// Geometry and timing for [`DismissAnimator`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DismissConfig {
    /// Fraction of the viewport extent a release must exceed to commit.
    pub commit_fraction: f64,
    /// Offset of a dismissed curtain, as a multiple of the viewport extent.
    ///
    /// Values above `1.0` also clear decoration that hangs above the curtain.
    pub clearance: f64,
    /// Offset of the tap bounce.
    pub bounce_offset: f64,
    /// Transition used while dismissing.
    pub retract: TransitionSpec,
    /// Transition used for the tap bounce.
    pub bounce: TransitionSpec,
    /// Transition used when settling back to rest.
    pub settle: TransitionSpec,
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self {
            commit_fraction: 0.25,
            clearance: 1.5,
            bounce_offset: 80.0,
            retract: TransitionSpec::timed(2_000, Easing::cubic_bezier(0.25, 1.0, 0.5, 1.0)),
            bounce: TransitionSpec::timed(500, Easing::cubic_bezier(0.34, 1.56, 0.64, 1.0)),
            settle: TransitionSpec::timed(300, Easing::EaseOut),
        }
    }
}

/// Declarative curtain transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurtainTransform {
    /// Upward translation of the curtain.
    pub offset_y: f64,
    /// How to move to `offset_y`.
    pub transition: TransitionSpec,
}

/// Curtain phase and offset state machine.
#[derive(Clone, Debug, Default)]
pub struct DismissAnimator {
    config: DismissConfig,
    phase: DismissPhase,
    offset: f64,
    viewport_extent: f64,
    settle: Option<TimerId>,
    timers: TimerQueue<()>,
}

impl DismissAnimator {
    /// Create an idle animator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle animator with a custom configuration.
    pub fn with_config(config: DismissConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Follow a live drag offset. Returns `false` once dismissal is committed.
    pub fn drag(&mut self, offset: f64) -> bool {
        if self.phase.is_committed() {
            return false;
        }
        self.timers.cancel_slot(&mut self.settle);
        if self.phase != DismissPhase::Dragging {
            self.set_phase(DismissPhase::Dragging);
        }
        self.offset = offset.max(0.0);
        true
    }

    /// Decide whether a release at `offset` dismisses the curtain.
    pub fn evaluate_release(
        &mut self,
        offset: f64,
        viewport_extent: f64,
        now: u64,
    ) -> ReleaseDecision {
        if self.phase.is_committed() {
            trace!("release at {offset} ignored: already committed");
            return ReleaseDecision::Ignored;
        }
        debug_assert!(
            viewport_extent.is_finite() && viewport_extent >= 0.0,
            "viewport extent must be finite and non-negative; got {viewport_extent}"
        );
        self.timers.cancel_slot(&mut self.settle);
        self.viewport_extent = viewport_extent;

        let threshold = self.config.commit_fraction * viewport_extent;
        if offset > threshold {
            debug!("release at {offset} > {threshold}: dismissing");
            self.offset = viewport_extent;
            self.set_phase(DismissPhase::Dismissing);
            ReleaseDecision::Commit
        } else {
            debug!("release at {offset} <= {threshold}: settling");
            self.offset = 0.0;
            self.settle = Some(
                self.timers
                    .schedule(now, self.config.settle.duration_ms(), ()),
            );
            self.set_phase(DismissPhase::Settling);
            ReleaseDecision::Cancel
        }
    }

    /// Mark the retraction as finished. Returns whether the phase changed.
    pub fn finish_dismiss(&mut self) -> bool {
        if self.phase == DismissPhase::Dismissing {
            self.set_phase(DismissPhase::Dismissed);
            true
        } else {
            false
        }
    }

    /// Complete settling if it is due at `now`. Returns whether the phase changed.
    pub fn tick(&mut self, now: u64) -> bool {
        let mut changed = false;
        while let Some((id, ())) = self.timers.pop_due(now) {
            if self.settle == Some(id) && self.phase == DismissPhase::Settling {
                self.settle = None;
                self.set_phase(DismissPhase::Idle);
                changed = true;
            } else {
                trace!("stale settle timer {} ignored", id.get());
            }
        }
        changed
    }

    /// Update the viewport extent used by the dismissed transform.
    pub fn set_viewport_extent(&mut self, viewport_extent: f64) {
        self.viewport_extent = viewport_extent;
        if self.phase.is_committed() {
            self.offset = viewport_extent;
        }
    }

    /// Cancel pending timers.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.settle = None;
    }

    /// The transform for the current phase.
    ///
    /// `bouncing` is the tap-feedback bounce, which only shows while the curtain is at rest.
    pub fn transform(&self, bouncing: bool) -> CurtainTransform {
        match self.phase {
            DismissPhase::Dismissing | DismissPhase::Dismissed => CurtainTransform {
                offset_y: self.viewport_extent * self.config.clearance,
                transition: self.config.retract,
            },
            DismissPhase::Dragging => CurtainTransform {
                offset_y: self.offset,
                transition: TransitionSpec::None,
            },
            DismissPhase::Idle | DismissPhase::Settling if bouncing => CurtainTransform {
                offset_y: self.config.bounce_offset,
                transition: self.config.bounce,
            },
            DismissPhase::Idle | DismissPhase::Settling => CurtainTransform {
                offset_y: 0.0,
                transition: self.config.settle,
            },
        }
    }

    /// Current phase.
    pub fn phase(&self) -> DismissPhase {
        self.phase
    }

    /// Current logical offset: the live drag offset, `0` at rest, or the viewport extent
    /// once committed.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    fn set_phase(&mut self, phase: DismissPhase) {
        debug!("curtain {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}
