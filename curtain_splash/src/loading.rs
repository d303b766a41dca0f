// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading gate: interaction waits for the host and a minimum display time.

use curtain_timer::{TimerId, TimerQueue};
use log::debug;

use crate::LoadingConfig;

/// Stays loading until the host reports ready *and* the minimum display time has passed.
#[derive(Clone, Debug)]
pub struct LoadingGate {
    host_ready: bool,
    min_elapsed: bool,
    min_display: Option<TimerId>,
    timers: TimerQueue<()>,
}

impl LoadingGate {
    /// Start loading at `now`.
    pub fn new(config: LoadingConfig, now: u64) -> Self {
        let mut timers = TimerQueue::new();
        let min_display = Some(timers.schedule(now, config.min_display_ms, ()));
        Self {
            host_ready: false,
            min_elapsed: false,
            min_display,
            timers,
        }
    }

    /// The host finished loading its assets. Returns whether loading ended.
    pub fn host_ready(&mut self) -> bool {
        let was_loading = self.is_loading();
        self.host_ready = true;
        self.finished(was_loading)
    }

    /// Expire the minimum display time if it is due. Returns whether loading ended.
    pub fn tick(&mut self, now: u64) -> bool {
        let was_loading = self.is_loading();
        while let Some((id, ())) = self.timers.pop_due(now) {
            if self.min_display == Some(id) {
                self.min_display = None;
                self.min_elapsed = true;
            }
        }
        self.finished(was_loading)
    }

    /// Cancel the minimum display timer.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.min_display = None;
    }

    /// Whether interaction is still blocked.
    pub fn is_loading(&self) -> bool {
        !(self.host_ready && self.min_elapsed)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    fn finished(&self, was_loading: bool) -> bool {
        let finished = was_loading && !self.is_loading();
        if finished {
            debug!("loading finished");
        }
        finished
    }
}
