// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-dismiss gesture tracking.
//!
//! [`GestureTracker`] turns raw pointer down/move/up events on the curtain's drag surface
//! into either a **tap** or a **drag release** carrying the final offset. It does not decide
//! whether a release dismisses the curtain; that is the dismiss animator's job.
//!
//! ## Rules
//!
//! 1. **Exclusive capture**: only one pointer is tracked at a time. A second pointer-down
//!    while a gesture is active is ignored, as are moves and releases from other pointers.
//! 2. **Dead zone**: a drag starts only once the pointer has travelled more than
//!    [`DragConfig::dead_zone`] in the dismiss direction (upwards, towards smaller `y`).
//!    Until then, moves are reported as [`MoveResult::DeadZone`]. Once dragging, moves that
//!    fall back inside the dead zone keep the last reported offset.
//! 3. **Tap vs. drag**: releasing a pointer that never left the dead zone is a
//!    [`ReleaseOutcome::Tap`]; otherwise it is a [`ReleaseOutcome::Drag`] with the last offset.
//! 4. **Cancel**: a canceled pointer is released exactly like a pointer-up, so a canceled
//!    press inside the dead zone is still a tap.
//! 5. **Lock**: after the curtain commits to dismissing, [`GestureTracker::lock`] makes the
//!    tracker ignore all further input.
//!
//! ## Usage
//!
//! ```
//! use core::num::NonZeroU64;
//! use curtain_event_state::drag::{GestureTracker, MoveResult, ReleaseOutcome};
//! use kurbo::Point;
//!
//! let pointer = NonZeroU64::new(1).unwrap();
//! let mut tracker = GestureTracker::new();
//!
//! assert!(tracker.on_down(pointer, Point::new(200.0, 500.0)));
//! assert_eq!(tracker.on_move(pointer, Point::new(200.0, 495.0)), MoveResult::DeadZone);
//! assert_eq!(tracker.on_move(pointer, Point::new(200.0, 400.0)), MoveResult::Drag(100.0));
//! assert_eq!(tracker.on_up(pointer), Some(ReleaseOutcome::Drag { offset: 100.0 }));
//! ```

use core::num::NonZeroU64;

use kurbo::Point;
use log::{debug, trace};

/// Pointer identifier used for exclusive capture.
pub type PointerId = NonZeroU64;

/// Tuning for [`GestureTracker`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragConfig {
    /// Distance the pointer must travel upwards before a drag starts.
    pub dead_zone: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self { dead_zone: 10.0 }
    }
}

/// State of the gesture in progress.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureState {
    /// The captured pointer.
    pub pointer: PointerId,
    /// Vertical position at pointer-down.
    pub start_y: f64,
    /// Last reported drag offset, never negative.
    pub offset: f64,
    /// Whether the pointer has left the dead zone.
    pub dragging: bool,
}

/// Result of a pointer move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveResult {
    /// No gesture for this pointer, or the tracker is locked.
    Ignored,
    /// The pointer has not travelled past the dead zone.
    DeadZone,
    /// The drag offset, measured upwards from the press position.
    Drag(f64),
}

/// Result of ending a gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ReleaseOutcome {
    /// The pointer never left the dead zone.
    Tap,
    /// A drag ended with this offset.
    Drag {
        /// Final drag offset.
        offset: f64,
    },
}

/// Single-pointer drag tracker with a dead zone.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    config: DragConfig,
    active: Option<GestureState>,
    locked: bool,
}

impl GestureTracker {
    /// Create a tracker with the default dead zone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker with a custom configuration.
    pub fn with_config(config: DragConfig) -> Self {
        Self {
            config,
            active: None,
            locked: false,
        }
    }

    /// Begin tracking `pointer` at `position`.
    ///
    /// Returns `true` if the pointer was captured, `false` if another pointer is already
    /// captured or the tracker is locked.
    pub fn on_down(&mut self, pointer: PointerId, position: Point) -> bool {
        if self.locked {
            trace!("pointer {pointer} down ignored: tracker locked");
            return false;
        }
        if let Some(active) = &self.active {
            trace!(
                "pointer {pointer} down ignored: pointer {} is captured",
                active.pointer
            );
            return false;
        }
        debug_assert!(
            position.y.is_finite(),
            "pointer position must be finite; got {position:?}"
        );
        if !position.y.is_finite() {
            return false;
        }
        self.active = Some(GestureState {
            pointer,
            start_y: position.y,
            offset: 0.0,
            dragging: false,
        });
        true
    }

    /// Track a pointer move.
    pub fn on_move(&mut self, pointer: PointerId, position: Point) -> MoveResult {
        if self.locked {
            return MoveResult::Ignored;
        }
        let dead_zone = self.config.dead_zone;
        let Some(state) = self.active.as_mut().filter(|state| state.pointer == pointer) else {
            return MoveResult::Ignored;
        };

        let delta = state.start_y - position.y;
        if delta > dead_zone {
            if !state.dragging {
                debug!("pointer {pointer} left the dead zone");
            }
            state.dragging = true;
            state.offset = delta.max(0.0);
            MoveResult::Drag(state.offset)
        } else {
            MoveResult::DeadZone
        }
    }

    /// End the gesture for `pointer`.
    ///
    /// Returns `None` if `pointer` is not the captured pointer.
    pub fn on_up(&mut self, pointer: PointerId) -> Option<ReleaseOutcome> {
        let state = self.release(pointer)?;
        Some(if state.dragging {
            ReleaseOutcome::Drag {
                offset: state.offset,
            }
        } else {
            ReleaseOutcome::Tap
        })
    }

    /// Cancel the gesture for `pointer`. Same outcome as [`GestureTracker::on_up`].
    pub fn on_cancel(&mut self, pointer: PointerId) -> Option<ReleaseOutcome> {
        self.on_up(pointer)
    }

    /// Ignore all further input and drop any captured pointer.
    pub fn lock(&mut self) {
        self.locked = true;
        self.active = None;
    }

    /// Whether [`GestureTracker::lock`] has been called.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether a pointer is captured.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Whether the captured pointer has left the dead zone.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some_and(|state| state.dragging)
    }

    /// The gesture in progress, if any.
    pub fn state(&self) -> Option<&GestureState> {
        self.active.as_ref()
    }

    /// The tracker configuration.
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    fn release(&mut self, pointer: PointerId) -> Option<GestureState> {
        if self.active.is_some_and(|state| state.pointer == pointer) {
            self.active.take()
        } else {
            trace!("pointer {pointer} release ignored: not captured");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(id: u64) -> PointerId {
        NonZeroU64::new(id).unwrap()
    }

    #[test]
    fn drag_past_dead_zone_reports_offset() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.on_down(pointer(1), Point::new(0.0, 500.0)));

        assert_eq!(
            tracker.on_move(pointer(1), Point::new(0.0, 400.0)),
            MoveResult::Drag(100.0)
        );
        assert!(tracker.is_dragging());
        assert_eq!(
            tracker.on_up(pointer(1)),
            Some(ReleaseOutcome::Drag { offset: 100.0 })
        );
        assert!(!tracker.is_active());
    }

    #[test]
    fn exact_dead_zone_is_not_a_drag() {
        let mut tracker = GestureTracker::new();
        tracker.on_down(pointer(1), Point::new(0.0, 500.0));

        assert_eq!(
            tracker.on_move(pointer(1), Point::new(0.0, 490.0)),
            MoveResult::DeadZone
        );
        assert_eq!(tracker.on_up(pointer(1)), Some(ReleaseOutcome::Tap));
    }

    #[test]
    fn downward_movement_is_never_a_drag() {
        let mut tracker = GestureTracker::new();
        tracker.on_down(pointer(1), Point::new(0.0, 500.0));

        assert_eq!(
            tracker.on_move(pointer(1), Point::new(0.0, 700.0)),
            MoveResult::DeadZone
        );
        assert_eq!(tracker.on_up(pointer(1)), Some(ReleaseOutcome::Tap));
    }

    #[test]
    fn falling_back_into_dead_zone_keeps_last_offset() {
        let mut tracker = GestureTracker::new();
        tracker.on_down(pointer(1), Point::new(0.0, 500.0));
        tracker.on_move(pointer(1), Point::new(0.0, 450.0));

        assert_eq!(
            tracker.on_move(pointer(1), Point::new(0.0, 505.0)),
            MoveResult::DeadZone
        );
        assert_eq!(
            tracker.on_up(pointer(1)),
            Some(ReleaseOutcome::Drag { offset: 50.0 })
        );
    }

    #[test]
    fn second_pointer_cannot_interleave() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.on_down(pointer(1), Point::new(0.0, 500.0)));
        assert!(!tracker.on_down(pointer(2), Point::new(0.0, 300.0)));

        assert_eq!(
            tracker.on_move(pointer(2), Point::new(0.0, 0.0)),
            MoveResult::Ignored
        );
        assert_eq!(tracker.on_up(pointer(2)), None);
        assert_eq!(tracker.state().map(|state| state.pointer), Some(pointer(1)));

        assert_eq!(tracker.on_up(pointer(1)), Some(ReleaseOutcome::Tap));
        assert!(tracker.on_down(pointer(2), Point::new(0.0, 300.0)));
    }

    #[test]
    fn up_without_down_is_absorbed() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.on_up(pointer(1)), None);
        assert_eq!(
            tracker.on_move(pointer(1), Point::new(0.0, 0.0)),
            MoveResult::Ignored
        );
    }

    #[test]
    fn cancel_releases_like_up() {
        let mut tracker = GestureTracker::new();
        tracker.on_down(pointer(1), Point::new(0.0, 500.0));
        tracker.on_move(pointer(1), Point::new(0.0, 495.0));
        assert_eq!(tracker.on_cancel(pointer(1)), Some(ReleaseOutcome::Tap));
        assert!(!tracker.is_active());
        assert_eq!(tracker.on_cancel(pointer(1)), None);

        tracker.on_down(pointer(1), Point::new(0.0, 500.0));
        tracker.on_move(pointer(1), Point::new(0.0, 300.0));
        assert_eq!(
            tracker.on_cancel(pointer(1)),
            Some(ReleaseOutcome::Drag { offset: 200.0 })
        );
    }

    #[test]
    fn locked_tracker_ignores_input() {
        let mut tracker = GestureTracker::new();
        tracker.on_down(pointer(1), Point::new(0.0, 500.0));
        tracker.lock();

        assert!(!tracker.is_active());
        assert!(!tracker.on_down(pointer(1), Point::new(0.0, 500.0)));
        assert_eq!(
            tracker.on_move(pointer(1), Point::new(0.0, 100.0)),
            MoveResult::Ignored
        );
        assert_eq!(tracker.on_up(pointer(1)), None);
    }

    #[test]
    fn custom_dead_zone() {
        let mut tracker = GestureTracker::with_config(DragConfig { dead_zone: 40.0 });
        tracker.on_down(pointer(1), Point::new(0.0, 500.0));

        assert_eq!(
            tracker.on_move(pointer(1), Point::new(0.0, 470.0)),
            MoveResult::DeadZone
        );
        assert_eq!(
            tracker.on_move(pointer(1), Point::new(0.0, 450.0)),
            MoveResult::Drag(50.0)
        );
    }
}
