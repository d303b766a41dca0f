// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splash configuration.

use alloc::borrow::Cow;

use curtain_event_state::drag::DragConfig;
use curtain_event_state::swipe::SwipeConfig;
use curtain_event_state::tap::TapConfig;
use curtain_pager::Color;
use curtain_transition::{DismissConfig, Easing, RevealConfig};

/// Minimum time the loading state is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadingConfig {
    /// Minimum display time in milliseconds, even if the host is ready sooner.
    pub min_display_ms: u64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            min_display_ms: 1_000,
        }
    }
}

/// Background color behind the curtain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BackgroundConfig {
    /// Color before dismissal.
    pub abyss: Color,
    /// Duration of the first ascent to the page color, in milliseconds.
    pub ascend_ms: u64,
    /// Duration of later color changes (page flips), in milliseconds.
    pub page_change_ms: u64,
    /// Timing curve for both.
    pub easing: Easing,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            abyss: Color::from_hex(0x001E4A),
            ascend_ms: 2_500,
            page_change_ms: 800,
            easing: Easing::cubic_bezier(0.45, 0.0, 0.55, 1.0),
        }
    }
}

/// Label texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelConfig {
    /// Text of the resting label.
    pub default_text: Cow<'static, str>,
    /// Text shown after a tap.
    pub prompt_text: Cow<'static, str>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            default_text: Cow::Borrowed("ABOUT ME"),
            prompt_text: Cow::Borrowed("DRAG ME UP"),
        }
    }
}

/// Configuration for every part of a [`Splash`](crate::Splash).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplashConfig {
    /// Drag dead zone.
    pub drag: DragConfig,
    /// Commit threshold, transforms, and curtain transitions.
    pub dismiss: DismissConfig,
    /// Reveal delay.
    pub reveal: RevealConfig,
    /// Wheel cooldown and touch threshold.
    pub swipe: SwipeConfig,
    /// Tap bounce and label revert timing.
    pub tap: TapConfig,
    /// Loading gate.
    pub loading: LoadingConfig,
    /// Background colors and transitions.
    pub background: BackgroundConfig,
    /// Label texts.
    pub label: LabelConfig,
}
