// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fire-once reveal that follows a committed dismissal.
//!
//! [`RevealSequencer::trigger`] marks the curtain as dismissed and schedules the reveal.
//! When the delay elapses, [`RevealSequencer::tick`] raises the background-ascended and
//! main-content-visible flags together. Every flag goes `false → true` at most once, and
//! triggering again has no effect. After [`RevealSequencer::teardown`] nothing changes
//! any more, even if the delay elapses.

use curtain_timer::{TimerId, TimerQueue};
use log::{debug, trace};

bitflags::bitflags! {
    /// Progress of the reveal sequence.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RevealFlags: u8 {
        /// Dismissal has committed and the curtain is retracting.
        const CURTAIN_DISMISSED    = 0b0000_0001;
        /// The background has ascended to the page color.
        const BACKGROUND_ASCENDED  = 0b0000_0010;
        /// The main content is mounted and visible.
        const MAIN_CONTENT_VISIBLE = 0b0000_0100;
    }
}

/// The reveal flags as plain booleans.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RevealState {
    /// See [`RevealFlags::CURTAIN_DISMISSED`].
    pub curtain_dismissed: bool,
    /// See [`RevealFlags::BACKGROUND_ASCENDED`].
    pub background_ascended: bool,
    /// See [`RevealFlags::MAIN_CONTENT_VISIBLE`].
    pub main_content_visible: bool,
}

impl From<RevealFlags> for RevealState {
    fn from(flags: RevealFlags) -> Self {
        Self {
            curtain_dismissed: flags.contains(RevealFlags::CURTAIN_DISMISSED),
            background_ascended: flags.contains(RevealFlags::BACKGROUND_ASCENDED),
            main_content_visible: flags.contains(RevealFlags::MAIN_CONTENT_VISIBLE),
        }
    }
}

/// Timing for [`RevealSequencer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RevealConfig {
    /// Delay from dismissal until the main content shows, in milliseconds.
    ///
    /// Matches the curtain's retract duration.
    pub delay_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { delay_ms: 2_000 }
    }
}

/// Fire-once reveal timer.
#[derive(Clone, Debug, Default)]
pub struct RevealSequencer {
    config: RevealConfig,
    flags: RevealFlags,
    pending: Option<TimerId>,
    timers: TimerQueue<()>,
    torn_down: bool,
}

impl RevealSequencer {
    /// Create a sequencer with the default delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequencer with a custom delay.
    pub fn with_config(config: RevealConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start the reveal. Returns `false` if it was already started or torn down.
    pub fn trigger(&mut self, now: u64) -> bool {
        if self.torn_down || self.flags.contains(RevealFlags::CURTAIN_DISMISSED) {
            trace!("reveal trigger at {now} ignored");
            return false;
        }
        self.flags.insert(RevealFlags::CURTAIN_DISMISSED);
        self.pending = Some(self.timers.schedule(now, self.config.delay_ms, ()));
        debug!(
            "reveal scheduled for {}",
            now.saturating_add(self.config.delay_ms)
        );
        true
    }

    /// Finish the reveal if it is due at `now`. Returns whether the flags changed.
    pub fn tick(&mut self, now: u64) -> bool {
        let mut changed = false;
        while let Some((id, ())) = self.timers.pop_due(now) {
            let live = self.pending == Some(id)
                && !self.torn_down
                && self.flags.contains(RevealFlags::CURTAIN_DISMISSED)
                && !self.flags.contains(RevealFlags::MAIN_CONTENT_VISIBLE);
            if live {
                self.pending = None;
                self.flags
                    .insert(RevealFlags::BACKGROUND_ASCENDED | RevealFlags::MAIN_CONTENT_VISIBLE);
                debug!("reveal complete at {now}");
                changed = true;
            } else {
                trace!("stale reveal timer {} ignored", id.get());
            }
        }
        changed
    }

    /// Discard the pending reveal and refuse further triggers.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.pending = None;
        self.torn_down = true;
    }

    /// Current flags.
    pub fn flags(&self) -> RevealFlags {
        self.flags
    }

    /// Current flags as booleans.
    pub fn state(&self) -> RevealState {
        self.flags.into()
    }

    /// Whether the main content is visible.
    pub fn is_complete(&self) -> bool {
        self.flags.contains(RevealFlags::MAIN_CONTENT_VISIBLE)
    }

    /// When the pending reveal completes.
    pub fn completes_at(&self) -> Option<u64> {
        self.pending.and_then(|id| self.timers.deadline(id))
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }
}
