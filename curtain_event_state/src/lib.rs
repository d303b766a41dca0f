// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curtain Event State: input state machines for the curtain splash.
//!
//! Each module owns one kind of transient input state and turns raw events into a small,
//! typed outcome. None of them render anything or read a clock; time is always the
//! caller's timestamp in milliseconds.
//!
//! - [`drag`]: single-pointer drag tracking with a dead zone, reporting taps and drag releases.
//! - [`tap`]: the prompt label and bounce shown after a tap, with a debounced revert.
//! - [`swipe`]: wheel and touch routing into page intents, with a wheel cooldown.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for `kurbo`'s floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod swipe;
pub mod tap;
