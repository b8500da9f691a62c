/// The axis distance-to-end is computed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// A scroll event as delivered by the host scroll view.
///
/// Geometry is in host units (typically pixels). Fields mirror what mainstream
/// scroll views report on every scroll: the total content size, the content
/// insets, the current offset, and the viewport size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub content_size: Size,
    pub content_inset: Insets,
    pub content_offset: Point,
    pub viewport: Size,
}

impl ScrollEvent {
    /// Distance between the viewport's trailing edge and the end of content.
    ///
    /// `content_length + trailing_inset - scroll_offset - viewport_length` on the
    /// given axis. Negative when the viewport has been scrolled past the end
    /// (overscroll/bounce).
    pub fn distance_from_end(&self, axis: Axis) -> f64 {
        let (content_length, trailing_inset, scroll_offset, viewport_length) = match axis {
            Axis::Horizontal => (
                self.content_size.width,
                self.content_inset.right,
                self.content_offset.x,
                self.viewport.width,
            ),
            Axis::Vertical => (
                self.content_size.height,
                self.content_inset.bottom,
                self.content_offset.y,
                self.viewport.height,
            ),
        };
        content_length + trailing_inset - scroll_offset - viewport_length
    }
}

/// Which visual occupies the trailing slot after the caller's children.
///
/// At most one trailing visual is ever selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrailingSlot {
    /// No trailing visual.
    #[default]
    None,
    /// The loading indicator. Shown whenever more content is declared
    /// available, not only while a request is in flight.
    Loading,
    /// The error indicator, constructed with a retry trigger.
    LoadingError,
}

impl TrailingSlot {
    /// Stable identity key for the selected visual, distinct per indicator so
    /// hosts that reconcile children by key never confuse the two.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Loading => Some("loading-indicator"),
            Self::LoadingError => Some("loading-error-indicator"),
        }
    }
}
