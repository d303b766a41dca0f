// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render parameters handed to the presentation layer.

use curtain_event_state::tap::Label;
use curtain_pager::{Color, PageIndex};
use curtain_transition::{CurtainTransform, TransitionSpec};

/// Everything the presentation layer needs to draw one frame.
///
/// All values are derived after an event has been fully applied, so a snapshot never
/// mixes state from before and after the same event.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderParams<'a> {
    /// Curtain and label-layer transform.
    pub transform: CurtainTransform,
    /// Color of the background overlay.
    pub background_color: Color,
    /// How the background moves to `background_color`.
    pub background_transition: TransitionSpec,
    /// Page shown by the main content.
    pub page_index: PageIndex,
    /// Which label is shown.
    pub label: Label,
    /// Text of `label`.
    pub label_text: &'a str,
    /// Whether the label layer is hidden.
    pub label_hidden: bool,
    /// Whether the main content is mounted.
    pub main_content_visible: bool,
    /// Whether the loading overlay is shown.
    pub loading: bool,
}
