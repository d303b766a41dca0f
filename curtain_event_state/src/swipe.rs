// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel and touch routing into discrete page intents.
//!
//! Continuous input (wheel ticks, touch swipes) arrives far more often than pages should
//! change. [`InputRouter`] reduces it to at most one [`NavIntent`] per gesture:
//!
//! ## Wheel
//!
//! - While a navigation cooldown is running, wheel ticks are ignored.
//! - Otherwise the tick is accepted and a cooldown of [`SwipeConfig::cooldown_ms`] starts
//!   immediately, whether or not the tick carries a direction.
//! - Direction depends on [`SwipeConfig::wheel_axis`]. With [`WheelAxis::Either`] any
//!   positive component advances and otherwise any negative component retreats, vertical
//!   checked first. With [`WheelAxis::Dominant`] the axis with the larger magnitude decides.
//!
//! ## Touch
//!
//! - A touch sequence is one [`InputRouter::on_touch_start`] followed by one
//!   [`InputRouter::on_touch_end`]; the end consumes the start, so a sequence yields at
//!   most one intent.
//! - The axis with the larger absolute travel is dominant (vertical on ties). The swipe
//!   counts only if that travel exceeds [`SwipeConfig::touch_threshold`].
//! - Travel is measured as `start - end`, so swiping up or left advances.
//! - Touch does not consult or start the wheel cooldown.
//!
//! ```
//! use curtain_event_state::swipe::{Axis, InputRouter};
//! use curtain_pager::NavIntent;
//! use kurbo::{Point, Vec2};
//!
//! let mut router = InputRouter::new();
//!
//! let routed = router.on_wheel(Vec2::new(0.0, 120.0), 0).unwrap();
//! assert_eq!(routed.intent, NavIntent::Advance);
//! // Still cooling down.
//! assert!(router.on_wheel(Vec2::new(0.0, 120.0), 400).is_none());
//!
//! router.on_touch_start(Point::new(300.0, 400.0));
//! let routed = router.on_touch_end(Point::new(360.0, 410.0)).unwrap();
//! assert_eq!((routed.intent, routed.axis), (NavIntent::Retreat, Axis::Horizontal));
//! ```

use curtain_pager::NavIntent;
use curtain_timer::{TimerId, TimerQueue};
use kurbo::{Point, Vec2};
use log::{debug, trace};

/// Input axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right.
    Horizontal,
    /// Up/down.
    Vertical,
}

/// How wheel deltas pick a direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WheelAxis {
    /// Either axis may trigger; a positive component on any axis advances.
    #[default]
    Either,
    /// Only the axis with the larger magnitude counts.
    Dominant,
}

/// Tuning for [`InputRouter`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Wheel cooldown after an accepted tick, in milliseconds.
    pub cooldown_ms: u64,
    /// Minimum dominant-axis travel for a touch swipe.
    pub touch_threshold: f64,
    /// Wheel direction policy.
    pub wheel_axis: WheelAxis,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 800,
            touch_threshold: 50.0,
            wheel_axis: WheelAxis::Either,
        }
    }
}

/// A navigation intent and the axis that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Routed {
    /// Requested navigation.
    pub intent: NavIntent,
    /// Axis the intent was read from.
    pub axis: Axis,
}

/// Snapshot of a running wheel cooldown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavigationCooldown {
    /// Whether wheel input is currently ignored.
    pub locked: bool,
    /// When the cooldown ends.
    pub expires_at: u64,
}

/// Routes wheel and touch input to page intents.
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    config: SwipeConfig,
    cooldown: Option<TimerId>,
    timers: TimerQueue<()>,
    touch_start: Option<Point>,
}

impl InputRouter {
    /// Create a router with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router with a custom configuration.
    pub fn with_config(config: SwipeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Handle one wheel tick at `now`.
    ///
    /// Returns the intent, if the tick was accepted and carried a direction.
    pub fn on_wheel(&mut self, delta: Vec2, now: u64) -> Option<Routed> {
        self.tick(now);
        if self.cooldown.is_some() {
            trace!("wheel {delta:?} at {now} ignored: cooling down");
            return None;
        }
        self.cooldown = Some(self.timers.schedule(now, self.config.cooldown_ms, ()));

        let routed = match self.config.wheel_axis {
            WheelAxis::Either => wheel_either(delta),
            WheelAxis::Dominant => dominant(delta).and_then(|(axis, travel)| {
                direction(travel).map(|intent| Routed { intent, axis })
            }),
        };
        debug!("wheel {delta:?} at {now} accepted: {routed:?}");
        routed
    }

    /// Record the start of a touch sequence.
    pub fn on_touch_start(&mut self, position: Point) {
        self.touch_start = Some(position);
    }

    /// Finish a touch sequence. Returns the intent if the swipe was long enough.
    pub fn on_touch_end(&mut self, position: Point) -> Option<Routed> {
        let Some(start) = self.touch_start.take() else {
            trace!("touch end at {position:?} ignored: no touch start");
            return None;
        };
        let (axis, travel) = dominant(start - position)?;
        if travel.abs() <= self.config.touch_threshold {
            trace!("swipe of {travel} along {axis:?} below threshold");
            return None;
        }
        let routed = direction(travel).map(|intent| Routed { intent, axis });
        debug!("swipe of {travel} along {axis:?}: {routed:?}");
        routed
    }

    /// Forget a pending touch start, for example on touch cancel.
    pub fn cancel_touch(&mut self) {
        self.touch_start = None;
    }

    /// Expire the cooldown if it is due at `now`. Returns whether it expired.
    pub fn tick(&mut self, now: u64) -> bool {
        let mut expired = false;
        while let Some((id, ())) = self.timers.pop_due(now) {
            if self.cooldown == Some(id) {
                self.cooldown = None;
                expired = true;
                trace!("wheel cooldown expired at {now}");
            }
        }
        expired
    }

    /// Cancel the cooldown and forget any touch in progress.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.cooldown = None;
        self.touch_start = None;
    }

    /// The running cooldown, if any.
    pub fn cooldown(&self) -> Option<NavigationCooldown> {
        let expires_at = self.timers.deadline(self.cooldown?)?;
        Some(NavigationCooldown {
            locked: true,
            expires_at,
        })
    }

    /// Whether a touch sequence has started and not yet ended.
    pub fn is_touching(&self) -> bool {
        self.touch_start.is_some()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }
}

fn wheel_either(delta: Vec2) -> Option<Routed> {
    let (intent, axis) = if delta.y > 0.0 {
        (NavIntent::Advance, Axis::Vertical)
    } else if delta.x > 0.0 {
        (NavIntent::Advance, Axis::Horizontal)
    } else if delta.y < 0.0 {
        (NavIntent::Retreat, Axis::Vertical)
    } else if delta.x < 0.0 {
        (NavIntent::Retreat, Axis::Horizontal)
    } else {
        return None;
    };
    Some(Routed { intent, axis })
}

/// Dominant axis of `travel` and the signed travel along it.
fn dominant(travel: Vec2) -> Option<(Axis, f64)> {
    debug_assert!(travel.is_finite(), "input travel must be finite; got {travel:?}");
    if !travel.is_finite() {
        return None;
    }
    Some(if travel.x.abs() > travel.y.abs() {
        (Axis::Horizontal, travel.x)
    } else {
        (Axis::Vertical, travel.y)
    })
}

fn direction(travel: f64) -> Option<NavIntent> {
    if travel > 0.0 {
        Some(NavIntent::Advance)
    } else if travel < 0.0 {
        Some(NavIntent::Retreat)
    } else {
        None
    }
}
