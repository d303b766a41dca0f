// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curtain Splash: a headless drag-to-dismiss splash screen.
//!
//! ## Overview
//!
//! A full-screen curtain covers a paginated main view. The user drags the curtain up to
//! dismiss it; once it has retracted, the background ascends to the page color and the
//! main content mounts. From then on, wheel and touch input flip between pages.
//!
//! [`Splash`] composes the pieces from the other curtain crates into one state machine:
//!
//! - the loading gate ([`LoadingGate`]), which blocks interaction until the host is ready and
//!   a minimum display time has passed,
//! - drag tracking (`curtain_event_state::drag`) and tap feedback (`curtain_event_state::tap`),
//! - the dismiss animator and reveal sequencer (`curtain_transition`),
//! - wheel/touch routing (`curtain_event_state::swipe`) and the pager (`curtain_pager`).
//!
//! It renders nothing. After each event, read [`Splash::render_params`] and hand the
//! [`RenderParams`] to whatever draws the curtain, background, label, and pages.
//!
//! ## Time
//!
//! Every entry point takes the current timestamp in milliseconds. Timers fire when the
//! timestamp reaches their deadline; call [`Splash::advance`] from a frame callback or at
//! [`Splash::next_deadline`] so timers fire even without input.
//!
//! ## Example
//!
//! ```rust
//! use core::num::NonZeroU64;
//! use curtain_splash::{Splash, SplashConfig};
//! use curtain_transition::DismissPhase;
//! use kurbo::{Point, Vec2};
//!
//! let pointer = NonZeroU64::new(1).unwrap();
//! let mut splash = Splash::new(SplashConfig::default(), 800.0, 0);
//!
//! splash.host_ready(0);
//! splash.advance(1_000);
//! assert!(!splash.render_params().loading);
//!
//! // Drag the curtain 250px up and let go: 250 > 0.25 * 800, so it dismisses.
//! splash.pointer_down(pointer, Point::new(200.0, 700.0), 1_100);
//! splash.pointer_move(pointer, Point::new(200.0, 450.0), 1_150);
//! splash.pointer_up(pointer, 1_200);
//! assert_eq!(splash.phase(), DismissPhase::Dismissing);
//!
//! // Two seconds later the main content is visible and the wheel flips pages.
//! splash.advance(3_200);
//! assert!(splash.render_params().main_content_visible);
//! splash.wheel(Vec2::new(0.0, 100.0), 3_300);
//! assert_eq!(splash.page_index().get(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for `kurbo`'s floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod loading;
mod render;
mod splash;

pub use config::{BackgroundConfig, LabelConfig, LoadingConfig, SplashConfig};
pub use loading::LoadingGate;
pub use render::RenderParams;
pub use splash::{Splash, SplashEvent};
