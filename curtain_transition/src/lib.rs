// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curtain Transition: the dismiss and reveal state machines.
//!
//! This crate decides *what* the curtain looks like, not how it is drawn:
//!
//! - [`DismissAnimator`] owns the curtain's [`DismissPhase`] and offset, decides whether a
//!   drag release commits, and describes the result as a [`CurtainTransform`].
//! - [`RevealSequencer`] runs the fire-once reveal after dismissal: the curtain retracts,
//!   then the background ascends and the main content mounts together.
//! - [`TransitionSpec`] and [`Easing`] describe how the presentation layer should animate
//!   to each new value. [`Easing::sample`] is available for hosts that interpolate
//!   themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use curtain_transition::{DismissAnimator, DismissPhase, ReleaseDecision, RevealSequencer};
//!
//! let mut curtain = DismissAnimator::new();
//! let mut reveal = RevealSequencer::new();
//!
//! curtain.drag(250.0);
//! if curtain.evaluate_release(250.0, 800.0, 0) == ReleaseDecision::Commit {
//!     reveal.trigger(0);
//! }
//! assert_eq!(curtain.phase(), DismissPhase::Dismissing);
//!
//! if reveal.tick(2_000) {
//!     curtain.finish_dismiss();
//! }
//! assert!(reveal.is_complete());
//! assert_eq!(curtain.phase(), DismissPhase::Dismissed);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod dismiss;
mod easing;
mod reveal;

pub use dismiss::{CurtainTransform, DismissAnimator, DismissConfig, DismissPhase, ReleaseDecision};
pub use easing::{Easing, TransitionSpec};
pub use reveal::{RevealConfig, RevealFlags, RevealSequencer, RevealState};
