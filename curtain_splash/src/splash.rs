// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed splash state machine.

use curtain_event_state::drag::{GestureTracker, MoveResult, PointerId, ReleaseOutcome};
use curtain_event_state::swipe::{InputRouter, Routed};
use curtain_event_state::tap::{Label, TapFeedback};
use curtain_pager::{PageIndex, PageNavigator};
use curtain_transition::{
    DismissAnimator, DismissPhase, ReleaseDecision, RevealFlags, RevealSequencer, RevealState,
    TransitionSpec,
};
use kurbo::{Point, Vec2};
use log::{debug, trace};

use crate::{LoadingGate, RenderParams, SplashConfig};

/// An input event for [`Splash::handle`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SplashEvent {
    /// A pointer was pressed on the drag surface.
    PointerDown {
        /// Pointer identifier.
        pointer: PointerId,
        /// Pointer position.
        position: Point,
    },
    /// A pointer moved.
    PointerMove {
        /// Pointer identifier.
        pointer: PointerId,
        /// Pointer position.
        position: Point,
    },
    /// A pointer was released.
    PointerUp {
        /// Pointer identifier.
        pointer: PointerId,
    },
    /// The platform canceled a pointer.
    PointerCancel {
        /// Pointer identifier.
        pointer: PointerId,
    },
    /// One wheel tick.
    Wheel {
        /// Scroll delta; positive `y` scrolls down.
        delta: Vec2,
    },
    /// The first touch of a sequence started.
    TouchStart {
        /// Touch position.
        position: Point,
    },
    /// The touch sequence ended.
    TouchEnd {
        /// Touch position.
        position: Point,
    },
    /// The host finished loading (for example, fonts are ready).
    HostReady,
    /// The viewport changed size.
    Resize {
        /// New vertical viewport extent.
        viewport_extent: f64,
    },
}

/// Drag-to-dismiss splash with a timed reveal and a page navigator behind it.
///
/// Gesture input is honored only until dismissal commits; page navigation only once the
/// main content is visible. All timers are advanced to the event's timestamp before the
/// event is applied.
#[derive(Clone, Debug)]
pub struct Splash {
    config: SplashConfig,
    viewport_extent: f64,
    now: u64,
    torn_down: bool,
    loading: LoadingGate,
    tracker: GestureTracker,
    curtain: DismissAnimator,
    reveal: RevealSequencer,
    tap: TapFeedback,
    pager: PageNavigator,
    router: InputRouter,
}

impl Splash {
    /// Create a splash at `now` for a viewport `viewport_extent` tall.
    ///
    /// A non-finite or negative `viewport_extent` is treated as zero until the next
    /// [`Splash::resize`].
    pub fn new(config: SplashConfig, viewport_extent: f64, now: u64) -> Self {
        let viewport_extent = if valid_extent(viewport_extent) {
            viewport_extent
        } else {
            0.0
        };
        let mut curtain = DismissAnimator::with_config(config.dismiss);
        curtain.set_viewport_extent(viewport_extent);
        Self {
            viewport_extent,
            now,
            torn_down: false,
            loading: LoadingGate::new(config.loading, now),
            tracker: GestureTracker::with_config(config.drag),
            curtain,
            reveal: RevealSequencer::with_config(config.reveal),
            tap: TapFeedback::with_config(config.tap),
            pager: PageNavigator::new(),
            router: InputRouter::with_config(config.swipe),
            config,
        }
    }

    /// Fire every timer due at `now`. Returns whether any render parameter changed.
    pub fn advance(&mut self, now: u64) -> bool {
        if self.torn_down {
            return false;
        }
        self.now = self.now.max(now);
        let now = self.now;

        let mut changed = self.loading.tick(now);
        changed |= self.curtain.tick(now);
        if self.reveal.tick(now) {
            self.curtain.finish_dismiss();
            changed = true;
        }
        changed |= self.tap.tick(now);
        // The cooldown has no visible effect.
        self.router.tick(now);
        changed
    }

    /// Apply one input event at `now`. Returns whether the event was consumed.
    pub fn handle(&mut self, now: u64, event: SplashEvent) -> bool {
        match event {
            SplashEvent::PointerDown { pointer, position } => {
                self.pointer_down(pointer, position, now)
            }
            SplashEvent::PointerMove { pointer, position } => {
                self.pointer_move(pointer, position, now) != MoveResult::Ignored
            }
            SplashEvent::PointerUp { pointer } => self.pointer_up(pointer, now).is_some(),
            SplashEvent::PointerCancel { pointer } => self.pointer_cancel(pointer, now).is_some(),
            SplashEvent::Wheel { delta } => self.wheel(delta, now).is_some(),
            SplashEvent::TouchStart { position } => self.touch_start(position, now),
            SplashEvent::TouchEnd { position } => self.touch_end(position, now).is_some(),
            SplashEvent::HostReady => self.host_ready(now),
            SplashEvent::Resize { viewport_extent } => self.resize(viewport_extent),
        }
    }

    /// Press on the drag surface. Returns whether the pointer was captured.
    pub fn pointer_down(&mut self, pointer: PointerId, position: Point, now: u64) -> bool {
        self.advance(now);
        if self.torn_down || self.loading.is_loading() {
            trace!("pointer {pointer} down ignored: not interactive");
            return false;
        }
        self.tracker.on_down(pointer, position)
    }

    /// Move a pointer.
    pub fn pointer_move(&mut self, pointer: PointerId, position: Point, now: u64) -> MoveResult {
        self.advance(now);
        if self.torn_down || self.loading.is_loading() {
            return MoveResult::Ignored;
        }
        let result = self.tracker.on_move(pointer, position);
        if let MoveResult::Drag(offset) = result {
            self.curtain.drag(offset);
        }
        result
    }

    /// Release a pointer.
    pub fn pointer_up(&mut self, pointer: PointerId, now: u64) -> Option<ReleaseOutcome> {
        self.advance(now);
        if self.torn_down {
            return None;
        }
        let outcome = self.tracker.on_up(pointer)?;
        self.apply_release(outcome);
        Some(outcome)
    }

    /// Cancel a pointer. Handled exactly like [`Splash::pointer_up`].
    pub fn pointer_cancel(&mut self, pointer: PointerId, now: u64) -> Option<ReleaseOutcome> {
        self.advance(now);
        if self.torn_down {
            return None;
        }
        let outcome = self.tracker.on_cancel(pointer)?;
        self.apply_release(outcome);
        Some(outcome)
    }

    /// One wheel tick. Returns the accepted intent, if any.
    pub fn wheel(&mut self, delta: Vec2, now: u64) -> Option<Routed> {
        self.advance(now);
        if !self.navigable() {
            trace!("wheel ignored: main content not visible");
            return None;
        }
        let routed = self.router.on_wheel(delta, self.now)?;
        self.pager.apply(routed.intent);
        Some(routed)
    }

    /// Start a touch sequence. Returns whether it was recorded.
    pub fn touch_start(&mut self, position: Point, now: u64) -> bool {
        self.advance(now);
        if !self.navigable() {
            return false;
        }
        self.router.on_touch_start(position);
        true
    }

    /// End a touch sequence. Returns the accepted intent, if any.
    pub fn touch_end(&mut self, position: Point, now: u64) -> Option<Routed> {
        self.advance(now);
        if !self.navigable() {
            return None;
        }
        let routed = self.router.on_touch_end(position)?;
        self.pager.apply(routed.intent);
        Some(routed)
    }

    /// The host finished loading. Returns whether loading ended.
    pub fn host_ready(&mut self, now: u64) -> bool {
        self.advance(now);
        if self.torn_down {
            return false;
        }
        self.loading.host_ready()
    }

    /// Update the viewport extent. Returns whether the new extent was applied.
    pub fn resize(&mut self, viewport_extent: f64) -> bool {
        if self.torn_down {
            return false;
        }
        if !valid_extent(viewport_extent) {
            trace!("resize to {viewport_extent} ignored: not a valid extent");
            return false;
        }
        self.viewport_extent = viewport_extent;
        self.curtain.set_viewport_extent(viewport_extent);
        true
    }

    /// Cancel every timer. Afterwards all input and [`Splash::advance`] are no-ops.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        debug!("splash torn down at {}", self.now);
        self.torn_down = true;
        self.loading.teardown();
        self.curtain.teardown();
        self.reveal.teardown();
        self.tap.teardown();
        self.router.teardown();
        self.tracker.lock();
    }

    /// Render parameters for the current state.
    pub fn render_params(&self) -> RenderParams<'_> {
        let flags = self.reveal.flags();
        let dismissed = flags.contains(RevealFlags::CURTAIN_DISMISSED);
        let background = &self.config.background;

        let background_color = if dismissed {
            self.pager.color()
        } else {
            background.abyss
        };
        let duration_ms = if dismissed && !flags.contains(RevealFlags::BACKGROUND_ASCENDED) {
            background.ascend_ms
        } else {
            background.page_change_ms
        };

        let label = self.tap.label();
        let label_text = match label {
            Label::Default => &*self.config.label.default_text,
            Label::Prompt => &*self.config.label.prompt_text,
        };
        let phase = self.curtain.phase();

        RenderParams {
            transform: self.curtain.transform(self.tap.is_bouncing()),
            background_color,
            background_transition: TransitionSpec::timed(duration_ms, background.easing),
            page_index: self.pager.index(),
            label,
            label_text,
            label_hidden: phase == DismissPhase::Dragging || phase.is_committed(),
            main_content_visible: flags.contains(RevealFlags::MAIN_CONTENT_VISIBLE),
            loading: self.loading.is_loading(),
        }
    }

    /// Earliest pending timer deadline, for scheduling the next [`Splash::advance`].
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.loading.next_deadline(),
            self.curtain.next_deadline(),
            self.reveal.next_deadline(),
            self.tap.next_deadline(),
            self.router.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Curtain phase.
    pub fn phase(&self) -> DismissPhase {
        self.curtain.phase()
    }

    /// Reveal progress.
    pub fn reveal_state(&self) -> RevealState {
        self.reveal.state()
    }

    /// Current page.
    pub fn page_index(&self) -> PageIndex {
        self.pager.index()
    }

    /// Current curtain offset.
    pub fn offset(&self) -> f64 {
        self.curtain.offset()
    }

    /// Current label.
    pub fn label(&self) -> Label {
        self.tap.label()
    }

    /// Whether a tap bounce is running.
    pub fn is_bouncing(&self) -> bool {
        self.tap.is_bouncing()
    }

    /// Whether input is blocked by the loading gate.
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Whether [`Splash::teardown`] has been called.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Vertical viewport extent.
    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// The configuration.
    pub fn config(&self) -> &SplashConfig {
        &self.config
    }

    fn navigable(&self) -> bool {
        !self.torn_down && self.reveal.is_complete()
    }

    fn apply_release(&mut self, outcome: ReleaseOutcome) {
        match outcome {
            ReleaseOutcome::Tap => self.tap.on_tap(self.now),
            ReleaseOutcome::Drag { offset } => {
                let decision = self
                    .curtain
                    .evaluate_release(offset, self.viewport_extent, self.now);
                if decision == ReleaseDecision::Commit {
                    self.tracker.lock();
                    self.reveal.trigger(self.now);
                }
            }
        }
    }
}

fn valid_extent(extent: f64) -> bool {
    extent.is_finite() && extent >= 0.0
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU64;

    use curtain_event_state::swipe::Axis;
    use curtain_pager::{Color, NavIntent};

    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn pointer(id: u64) -> PointerId {
        NonZeroU64::new(id).unwrap()
    }

    /// A splash that finished loading at t=1000.
    fn ready_splash() -> Splash {
        let mut splash = Splash::new(SplashConfig::default(), VIEWPORT, 0);
        splash.host_ready(0);
        splash.advance(1_000);
        assert!(!splash.is_loading());
        splash
    }

    /// Drag from y=500 up by `offset` and release at `now`.
    fn drag_and_release(splash: &mut Splash, offset: f64, now: u64) -> Option<ReleaseOutcome> {
        splash.pointer_down(pointer(1), Point::new(100.0, 500.0), now);
        splash.pointer_move(pointer(1), Point::new(100.0, 500.0 - offset), now);
        splash.pointer_up(pointer(1), now)
    }

    /// A splash whose main content became visible at t=3000.
    fn revealed_splash() -> Splash {
        let mut splash = ready_splash();
        drag_and_release(&mut splash, 300.0, 1_000);
        splash.advance(3_000);
        assert!(splash.render_params().main_content_visible);
        splash
    }

    #[test]
    fn short_drag_is_cancelled() {
        let mut splash = ready_splash();
        splash.pointer_down(pointer(1), Point::new(0.0, 500.0), 1_000);
        let moved = splash.pointer_move(pointer(1), Point::new(0.0, 400.0), 1_010);
        assert_eq!(moved, MoveResult::Drag(100.0));
        assert_eq!(splash.phase(), DismissPhase::Dragging);
        assert_eq!(splash.offset(), 100.0);

        let params = splash.render_params();
        assert!(params.label_hidden);
        assert_eq!(params.transform.offset_y, 100.0);
        assert_eq!(params.transform.transition, TransitionSpec::None);

        let outcome = splash.pointer_up(pointer(1), 1_020);
        assert_eq!(outcome, Some(ReleaseOutcome::Drag { offset: 100.0 }));
        assert_eq!(splash.offset(), 0.0);
        assert!(!splash.phase().is_committed());
        assert!(!splash.render_params().label_hidden);

        splash.advance(1_320);
        assert_eq!(splash.phase(), DismissPhase::Idle);
        assert!(!splash.reveal_state().curtain_dismissed);
    }

    #[test]
    fn long_drag_commits_and_reveals_after_delay() {
        let mut splash = ready_splash();
        drag_and_release(&mut splash, 250.0, 1_000);

        assert_eq!(splash.phase(), DismissPhase::Dismissing);
        assert_eq!(splash.offset(), VIEWPORT);
        let params = splash.render_params();
        assert_eq!(params.transform.offset_y, VIEWPORT * 1.5);
        assert_eq!(params.transform.transition, splash.config().dismiss.retract);
        assert!(params.label_hidden);
        assert!(!params.main_content_visible);
        assert_eq!(params.background_color, Color::from_hex(0x06BBF7));
        assert_eq!(params.background_transition.duration_ms(), 2_500);

        assert!(!splash.advance(2_999));
        assert!(!splash.reveal_state().main_content_visible);

        assert!(splash.advance(3_000));
        let state = splash.reveal_state();
        assert!(state.main_content_visible);
        assert!(state.background_ascended);
        assert_eq!(splash.phase(), DismissPhase::Dismissed);
        assert_eq!(
            splash.render_params().background_transition.duration_ms(),
            800
        );
    }

    #[test]
    fn release_on_threshold_does_not_commit() {
        let mut splash = ready_splash();
        drag_and_release(&mut splash, 200.0, 1_000);
        assert_eq!(splash.phase(), DismissPhase::Settling);
    }

    #[test]
    fn only_one_reveal_per_dismissal() {
        let mut splash = ready_splash();
        drag_and_release(&mut splash, 300.0, 1_000);
        // Further drags after the commit are ignored outright.
        assert!(!splash.pointer_down(pointer(1), Point::new(0.0, 500.0), 1_100));
        assert_eq!(drag_and_release(&mut splash, 400.0, 1_500), None);

        let mut reveals = 0;
        let mut visible = false;
        for now in (1_000..6_000).step_by(100) {
            splash.advance(now);
            let now_visible = splash.render_params().main_content_visible;
            if now_visible != visible {
                reveals += 1;
                visible = now_visible;
            }
        }
        assert_eq!(reveals, 1);
        assert!(visible);
    }

    #[test]
    fn tap_shows_prompt_and_bounces() {
        let mut splash = ready_splash();
        splash.pointer_down(pointer(1), Point::new(0.0, 500.0), 1_000);
        let outcome = splash.pointer_up(pointer(1), 1_050);
        assert_eq!(outcome, Some(ReleaseOutcome::Tap));

        let params = splash.render_params();
        assert_eq!(params.label, Label::Prompt);
        assert_eq!(params.label_text, "DRAG ME UP");
        assert_eq!(params.transform.offset_y, 80.0);
        assert_eq!(params.transform.transition, splash.config().dismiss.bounce);

        splash.advance(1_550);
        assert!(!splash.is_bouncing());
        assert_eq!(splash.render_params().transform.offset_y, 0.0);
    }

    #[test]
    fn tap_revert_follows_latest_tap() {
        let mut splash = ready_splash();
        let tap = |splash: &mut Splash, now: u64| {
            splash.pointer_down(pointer(1), Point::new(0.0, 500.0), now);
            splash.pointer_up(pointer(1), now);
        };
        tap(&mut splash, 1_000);
        tap(&mut splash, 2_000);

        splash.advance(6_000);
        assert_eq!(splash.label(), Label::Prompt);
        splash.advance(6_999);
        assert_eq!(splash.label(), Label::Prompt);
        splash.advance(7_000);
        assert_eq!(splash.label(), Label::Default);
        assert_eq!(splash.render_params().label_text, "ABOUT ME");
    }

    #[test]
    fn drag_during_bounce_takes_priority() {
        let mut splash = ready_splash();
        splash.pointer_down(pointer(1), Point::new(0.0, 500.0), 1_000);
        splash.pointer_up(pointer(1), 1_000);
        splash.pointer_down(pointer(1), Point::new(0.0, 500.0), 1_100);
        splash.pointer_move(pointer(1), Point::new(0.0, 470.0), 1_150);

        assert!(splash.is_bouncing());
        let transform = splash.render_params().transform;
        assert_eq!(transform.offset_y, 30.0);
        assert_eq!(transform.transition, TransitionSpec::None);
    }

    #[test]
    fn loading_blocks_gestures() {
        let mut splash = Splash::new(SplashConfig::default(), VIEWPORT, 0);
        assert!(splash.render_params().loading);
        assert!(!splash.pointer_down(pointer(1), Point::new(0.0, 500.0), 10));

        // Host ready but the minimum display time has not passed.
        splash.host_ready(20);
        assert!(!splash.pointer_down(pointer(1), Point::new(0.0, 500.0), 999));
        assert!(splash.pointer_down(pointer(1), Point::new(0.0, 500.0), 1_000));
    }

    #[test]
    fn navigation_waits_for_main_content() {
        let mut splash = ready_splash();
        assert_eq!(splash.wheel(Vec2::new(0.0, 100.0), 1_000), None);
        drag_and_release(&mut splash, 300.0, 1_000);
        assert_eq!(splash.wheel(Vec2::new(0.0, 100.0), 2_000), None);
        assert!(!splash.touch_start(Point::new(0.0, 0.0), 2_000));
        assert_eq!(splash.page_index(), PageIndex::FIRST);

        assert!(splash.wheel(Vec2::new(0.0, 100.0), 3_000).is_some());
        assert_eq!(splash.page_index().get(), 1);
    }

    #[test]
    fn wheel_cooldown_throttles_pages() {
        let mut splash = revealed_splash();
        assert!(splash.wheel(Vec2::new(0.0, 100.0), 3_000).is_some());
        assert_eq!(splash.wheel(Vec2::new(0.0, 100.0), 3_400), None);
        assert_eq!(splash.page_index().get(), 1);

        assert!(splash.wheel(Vec2::new(0.0, 100.0), 3_800).is_some());
        assert_eq!(splash.page_index().get(), 2);
    }

    #[test]
    fn page_flip_changes_background_color() {
        let mut splash = revealed_splash();
        splash.wheel(Vec2::new(0.0, 100.0), 3_000);
        let params = splash.render_params();
        assert_eq!(params.page_index.get(), 1);
        assert_eq!(params.background_color, Color::from_hex(0x5865F2));
        assert_eq!(params.background_transition.duration_ms(), 800);
    }

    #[test]
    fn horizontal_swipe_navigates_once() {
        let mut splash = revealed_splash();
        assert!(splash.touch_start(Point::new(300.0, 300.0), 3_000));
        let routed = splash.touch_end(Point::new(240.0, 290.0), 3_100);
        assert_eq!(
            routed,
            Some(Routed {
                intent: NavIntent::Advance,
                axis: Axis::Horizontal,
            })
        );
        assert_eq!(splash.touch_end(Point::new(240.0, 290.0), 3_150), None);
        assert_eq!(splash.page_index().get(), 1);
    }

    #[test]
    fn navigation_clamps_at_bounds() {
        let mut splash = revealed_splash();
        for step in 0..6 {
            splash.wheel(Vec2::new(0.0, 100.0), 3_000 + step * 1_000);
        }
        assert_eq!(splash.page_index(), PageIndex::LAST);
        assert_eq!(splash.render_params().background_color, Color::from_hex(0xFF4D4D));

        for step in 0..6 {
            splash.wheel(Vec2::new(0.0, -100.0), 10_000 + step * 1_000);
        }
        assert_eq!(splash.page_index(), PageIndex::FIRST);
    }

    #[test]
    fn second_pointer_cannot_steal_the_drag() {
        let mut splash = ready_splash();
        splash.pointer_down(pointer(1), Point::new(0.0, 500.0), 1_000);
        assert!(!splash.pointer_down(pointer(2), Point::new(0.0, 500.0), 1_000));
        assert_eq!(
            splash.pointer_move(pointer(2), Point::new(0.0, 0.0), 1_010),
            MoveResult::Ignored
        );
        assert_eq!(splash.pointer_up(pointer(2), 1_020), None);
        assert_eq!(splash.phase(), DismissPhase::Idle);
    }

    #[test]
    fn pointer_cancel_releases_drag() {
        let mut splash = ready_splash();
        splash.pointer_down(pointer(1), Point::new(0.0, 500.0), 1_000);
        splash.pointer_move(pointer(1), Point::new(0.0, 100.0), 1_010);
        let outcome = splash.pointer_cancel(pointer(1), 1_020);
        assert_eq!(outcome, Some(ReleaseOutcome::Drag { offset: 400.0 }));
        assert_eq!(splash.phase(), DismissPhase::Dismissing);
    }

    #[test]
    fn pointer_cancel_inside_dead_zone_taps() {
        let mut splash = ready_splash();
        splash.pointer_down(pointer(1), Point::new(0.0, 500.0), 1_000);
        let outcome = splash.pointer_cancel(pointer(1), 1_050);
        assert_eq!(outcome, Some(ReleaseOutcome::Tap));

        let params = splash.render_params();
        assert_eq!(params.label_text, "DRAG ME UP");
        assert!(splash.is_bouncing());
        assert_eq!(params.transform.offset_y, 80.0);
        assert_eq!(splash.phase(), DismissPhase::Idle);

        splash.advance(6_049);
        assert_eq!(splash.label(), Label::Prompt);
        splash.advance(6_050);
        assert_eq!(splash.label(), Label::Default);
    }

    #[test]
    fn invalid_initial_viewport_is_zero() {
        let mut splash = Splash::new(SplashConfig::default(), f64::NAN, 0);
        assert_eq!(splash.viewport_extent(), 0.0);
        splash.host_ready(0);
        splash.advance(1_000);

        // Any upward drag clears a zero threshold.
        drag_and_release(&mut splash, 20.0, 1_000);
        assert_eq!(splash.phase(), DismissPhase::Dismissing);
        assert_eq!(splash.render_params().transform.offset_y, 0.0);

        let negative = Splash::new(SplashConfig::default(), -10.0, 0);
        assert_eq!(negative.viewport_extent(), 0.0);
    }

    #[test]
    fn invalid_resize_is_rejected() {
        let mut splash = ready_splash();
        assert!(!splash.resize(f64::INFINITY));
        assert!(!splash.handle(
            1_000,
            SplashEvent::Resize {
                viewport_extent: f64::NAN
            }
        ));
        assert!(!splash.resize(-1.0));
        assert_eq!(splash.viewport_extent(), VIEWPORT);

        drag_and_release(&mut splash, 150.0, 1_000);
        assert_eq!(splash.phase(), DismissPhase::Settling);

        splash.teardown();
        assert!(!splash.resize(400.0));
    }

    #[test]
    fn resize_changes_commit_threshold() {
        let mut splash = ready_splash();
        assert!(splash.resize(400.0));
        drag_and_release(&mut splash, 150.0, 1_000);
        assert_eq!(splash.phase(), DismissPhase::Dismissing);
        assert_eq!(splash.render_params().transform.offset_y, 600.0);
    }

    #[test]
    fn teardown_discards_pending_reveal() {
        let mut splash = ready_splash();
        drag_and_release(&mut splash, 300.0, 1_000);
        splash.teardown();

        assert_eq!(splash.next_deadline(), None);
        assert!(!splash.advance(10_000));
        assert!(!splash.reveal_state().main_content_visible);
        assert!(!splash.handle(10_000, SplashEvent::HostReady));
        assert!(splash.is_torn_down());
    }

    #[test]
    fn next_deadline_tracks_pending_timers() {
        let mut splash = Splash::new(SplashConfig::default(), VIEWPORT, 0);
        assert_eq!(splash.next_deadline(), Some(1_000));
        splash.host_ready(0);
        splash.advance(1_000);
        assert_eq!(splash.next_deadline(), None);

        drag_and_release(&mut splash, 300.0, 1_500);
        assert_eq!(splash.next_deadline(), Some(3_500));
    }

    #[test]
    fn handle_dispatches_events() {
        let mut splash = Splash::new(SplashConfig::default(), VIEWPORT, 0);
        // Ready before the minimum display time: still loading.
        assert!(!splash.handle(0, SplashEvent::HostReady));
        assert!(splash.is_loading());
        splash.advance(1_000);

        let script = [
            SplashEvent::PointerDown {
                pointer: pointer(7),
                position: Point::new(0.0, 600.0),
            },
            SplashEvent::PointerMove {
                pointer: pointer(7),
                position: Point::new(0.0, 300.0),
            },
            SplashEvent::PointerUp {
                pointer: pointer(7),
            },
        ];
        for event in script {
            assert!(splash.handle(1_000, event), "{event:?} not consumed");
        }
        assert_eq!(splash.phase(), DismissPhase::Dismissing);

        assert!(!splash.handle(
            1_100,
            SplashEvent::Wheel {
                delta: Vec2::new(0.0, 10.0)
            }
        ));
        assert!(splash.handle(
            3_000,
            SplashEvent::Wheel {
                delta: Vec2::new(0.0, 10.0)
            }
        ));
        assert!(splash.handle(
            3_000,
            SplashEvent::Resize {
                viewport_extent: 900.0
            }
        ));
        assert_eq!(splash.viewport_extent(), 900.0);
    }
}
