// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap feedback: a prompt label plus a short bounce.
//!
//! A tap on the drag surface (a press that never became a drag) switches the label to
//! [`Label::Prompt`] and nudges the curtain with a one-shot bounce. The label reverts to
//! [`Label::Default`] a fixed time after the *most recent* tap.
//!
//! - The bounce is not re-entrant: tapping while a bounce is running does not restart it.
//! - The revert is debounced: each tap cancels the pending revert and schedules a new one.
//!
//! ```
//! use curtain_event_state::tap::{Label, TapFeedback};
//!
//! let mut feedback = TapFeedback::new();
//! feedback.on_tap(0);
//! assert_eq!(feedback.label(), Label::Prompt);
//! assert!(feedback.is_bouncing());
//!
//! feedback.tick(500);
//! assert!(!feedback.is_bouncing());
//!
//! feedback.tick(5_000);
//! assert_eq!(feedback.label(), Label::Default);
//! ```

use curtain_timer::{TimerId, TimerQueue};
use log::{debug, trace};

/// Which label the feedback layer shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Label {
    /// The resting label.
    #[default]
    Default,
    /// The prompt shown after a tap, inviting the user to drag.
    Prompt,
}

/// Timing for [`TapFeedback`], in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TapConfig {
    /// How long one bounce lasts.
    pub bounce_ms: u64,
    /// Delay from the most recent tap until the label reverts.
    pub revert_ms: u64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            bounce_ms: 500,
            revert_ms: 5_000,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TapTimer {
    BounceEnd,
    Revert,
}

/// Label and bounce state driven by taps.
#[derive(Clone, Debug, Default)]
pub struct TapFeedback {
    config: TapConfig,
    label: Label,
    bounce: Option<TimerId>,
    revert: Option<TimerId>,
    timers: TimerQueue<TapTimer>,
}

impl TapFeedback {
    /// Create feedback state with default timing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create feedback state with custom timing.
    pub fn with_config(config: TapConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Register a tap at `now`.
    pub fn on_tap(&mut self, now: u64) {
        self.label = Label::Prompt;
        if self.bounce.is_none() {
            self.bounce = Some(
                self.timers
                    .schedule(now, self.config.bounce_ms, TapTimer::BounceEnd),
            );
        }
        self.timers.cancel_slot(&mut self.revert);
        self.revert = Some(
            self.timers
                .schedule(now, self.config.revert_ms, TapTimer::Revert),
        );
        debug!(
            "tap at {now}: prompt until {}",
            now.saturating_add(self.config.revert_ms)
        );
    }

    /// Fire every timer due at `now`. Returns whether any visible state changed.
    pub fn tick(&mut self, now: u64) -> bool {
        let mut changed = false;
        while let Some((id, timer)) = self.timers.pop_due(now) {
            match timer {
                TapTimer::BounceEnd if self.bounce == Some(id) => {
                    self.bounce = None;
                    changed = true;
                }
                TapTimer::Revert if self.revert == Some(id) => {
                    self.revert = None;
                    self.label = Label::Default;
                    changed = true;
                }
                _ => trace!("stale tap timer {} ignored", id.get()),
            }
        }
        changed
    }

    /// Cancel all pending timers. The visible state is left as is.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.bounce = None;
        self.revert = None;
    }

    /// The label to show.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Whether a bounce is running.
    pub fn is_bouncing(&self) -> bool {
        self.bounce.is_some()
    }

    /// When the label reverts, if a revert is pending.
    pub fn revert_deadline(&self) -> Option<u64> {
        self.revert.and_then(|id| self.timers.deadline(id))
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }
}
