use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::provider::GeometryProvider;
use crate::{Edge, EdgeOffsets, OffsetValue, PercentageMode, ScrollAmount};

/// Window events that trigger an evaluation unless overridden.
pub const DEFAULT_WINDOW_EVENTS: [&str; 2] = ["DOMContentLoaded", "resize"];

/// Configuration for [`crate::InView`].
///
/// Validated once by `InView::new`; the engine never reads it again afterwards.
pub struct InViewOptions<P: GeometryProvider> {
    /// Scrolling ancestor to measure against. `None` means the subject's document.
    pub context: Option<P::Node>,
    /// Window events that also trigger an evaluation, in addition to the context's `scroll`.
    pub window_events: Vec<String>,
    /// Per-edge adjustments of the subject's effective box.
    pub offset: EdgeOffsets<OffsetValue<P>>,
    /// The box percentage offsets are measured against.
    pub offset_percentage_mode: PercentageMode,
    /// Scroll deltas up to these amounts (per axis) are ignored.
    ///
    /// `None` behaves like `ScrollAmount { top: 0.0, left: 0.0 }`.
    pub scroll_amount: Option<ScrollAmount>,
}

impl<P: GeometryProvider> InViewOptions<P> {
    pub fn new() -> Self {
        Self {
            context: None,
            window_events: DEFAULT_WINDOW_EVENTS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            offset: EdgeOffsets::default(),
            offset_percentage_mode: PercentageMode::Parent,
            scroll_amount: None,
        }
    }

    pub fn with_context(mut self, context: Option<P::Node>) -> Self {
        self.context = context;
        self
    }

    pub fn with_window_events<I, S>(mut self, window_events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.window_events = window_events.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_offset(mut self, edge: Edge, offset: impl Into<OffsetValue<P>>) -> Self {
        self.offset.set(edge, Some(offset.into()));
        self
    }

    pub fn with_offsets(mut self, offsets: EdgeOffsets<OffsetValue<P>>) -> Self {
        self.offset = offsets;
        self
    }

    pub fn with_offset_percentage_mode(mut self, mode: PercentageMode) -> Self {
        self.offset_percentage_mode = mode;
        self
    }

    pub fn with_scroll_amount(mut self, scroll_amount: ScrollAmount) -> Self {
        self.scroll_amount = Some(scroll_amount);
        self
    }
}

impl<P: GeometryProvider> Default for InViewOptions<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: GeometryProvider> Clone for InViewOptions<P> {
    fn clone(&self) -> Self {
        Self {
            context: self.context,
            window_events: self.window_events.clone(),
            offset: self.offset.clone(),
            offset_percentage_mode: self.offset_percentage_mode,
            scroll_amount: self.scroll_amount,
        }
    }
}

impl<P: GeometryProvider> fmt::Debug for InViewOptions<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InViewOptions")
            .field("context", &self.context)
            .field("window_events", &self.window_events)
            .field("offset", &self.offset)
            .field("offset_percentage_mode", &self.offset_percentage_mode)
            .field("scroll_amount", &self.scroll_amount)
            .finish()
    }
}
