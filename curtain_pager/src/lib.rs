// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curtain Pager: bounded page navigation.
//!
//! This crate models the main view behind the curtain as a small, fixed strip of pages:
//! - **Navigation intents** ([`NavIntent`]) produced by an input router, either
//!   [`NavIntent::Advance`] or [`NavIntent::Retreat`].
//! - A **bounded index** ([`PageIndex`]) in `0..=3`.
//! - A **navigator** ([`PageNavigator`]) that applies intents and clamps at the ends.
//!   There is no wraparound: advancing on the last page or retreating on the first is a
//!   silent no-op.
//! - A **palette** ([`page_color`]) mapping each page to the background color the
//!   presentation layer paints behind it.
//!
//! ## Minimal example
//!
//! ```rust
//! use curtain_pager::{NavIntent, PageIndex, PageNavigator, page_color};
//!
//! let mut pager = PageNavigator::new();
//! assert_eq!(pager.index(), PageIndex::FIRST);
//!
//! // Retreating on the first page does nothing…
//! assert!(!pager.prev());
//! // …while advancing moves one page at a time.
//! assert!(pager.apply(NavIntent::Advance));
//! assert_eq!(pager.index().get(), 1);
//! assert_eq!(page_color(pager.index()).to_hex(), 0x5865F2);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod color;

pub use color::{Color, page_color};

use log::{debug, trace};

/// Direction of a discrete page navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavIntent {
    /// Move to the next page (for example, wheel down or swipe up/left).
    Advance,
    /// Move to the previous page.
    Retreat,
}

/// Index of a page, always within `PageIndex::FIRST..=PageIndex::LAST`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(u8);

impl PageIndex {
    /// Number of pages.
    pub const COUNT: usize = 4;
    /// The first page.
    pub const FIRST: Self = Self(0);
    /// The last page.
    pub const LAST: Self = Self(Self::COUNT as u8 - 1);

    /// Create an index, or `None` if `index` is out of range.
    pub const fn new(index: u8) -> Option<Self> {
        if index <= Self::LAST.0 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The raw index.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The following page, or `None` on the last page.
    pub const fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// The preceding page, or `None` on the first page.
    pub const fn prev(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }
}

/// Current page plus clamped next/prev navigation.
#[derive(Clone, Debug, Default)]
pub struct PageNavigator {
    index: PageIndex,
}

impl PageNavigator {
    /// Create a navigator on the first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigator starting on `index`.
    pub fn with_index(index: PageIndex) -> Self {
        Self { index }
    }

    /// The current page.
    pub fn index(&self) -> PageIndex {
        self.index
    }

    /// Background color of the current page.
    pub fn color(&self) -> Color {
        page_color(self.index)
    }

    /// Move to the next page.
    ///
    /// Returns `false` (and leaves the index unchanged) on the last page.
    pub fn next(&mut self) -> bool {
        self.step(self.index.next())
    }

    /// Move to the previous page.
    ///
    /// Returns `false` (and leaves the index unchanged) on the first page.
    pub fn prev(&mut self) -> bool {
        self.step(self.index.prev())
    }

    /// Apply a navigation intent. Returns whether the page changed.
    pub fn apply(&mut self, intent: NavIntent) -> bool {
        match intent {
            NavIntent::Advance => self.next(),
            NavIntent::Retreat => self.prev(),
        }
    }

    fn step(&mut self, target: Option<PageIndex>) -> bool {
        match target {
            Some(index) => {
                debug!("page {} -> {}", self.index.get(), index.get());
                self.index = index;
                true
            }
            None => {
                trace!("page {} is at a bound; navigation absorbed", self.index.get());
                false
            }
        }
    }
}
