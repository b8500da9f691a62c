use infinite_scroll::{Axis, Insets};

/// Default minimum interval between scroll events delivered by the host.
pub const DEFAULT_SCROLL_EVENT_THROTTLE_MS: u64 = 100;

/// Configuration forwarded to the underlying scroll view.
///
/// The container hands these to `render_scroll_component` at construction and
/// to [`crate::ScrollView::set_props`] on updates. `axis` is also the single
/// source of truth for the axis distance-to-end is computed on.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollViewProps {
    pub axis: Axis,
    /// Minimum interval between scroll events delivered by the host, in
    /// milliseconds.
    pub scroll_event_throttle_ms: u64,
    pub content_inset: Insets,
}

impl ScrollViewProps {
    pub fn new() -> Self {
        Self {
            axis: Axis::Vertical,
            scroll_event_throttle_ms: DEFAULT_SCROLL_EVENT_THROTTLE_MS,
            content_inset: Insets::default(),
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_scroll_event_throttle_ms(mut self, scroll_event_throttle_ms: u64) -> Self {
        self.scroll_event_throttle_ms = scroll_event_throttle_ms;
        self
    }

    pub fn with_content_inset(mut self, content_inset: Insets) -> Self {
        self.content_inset = content_inset;
        self
    }
}

impl Default for ScrollViewProps {
    fn default() -> Self {
        Self::new()
    }
}
