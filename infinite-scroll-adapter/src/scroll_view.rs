use infinite_scroll::{Axis, Point, Size};

use crate::ScrollViewProps;

/// The imperative surface expected from a host scroll view.
///
/// Hosts implement the primitives below; [`Scrollable`] builds the shared
/// scroll helpers on top of them. [`crate::ScrollContainer`] implements this
/// trait by delegating to the view it wraps, so parents holding a container
/// reference get the same surface.
pub trait ScrollView {
    /// Current scroll position.
    fn content_offset(&self) -> Point;

    /// Total size of the scrollable content.
    fn content_size(&self) -> Size;

    /// Size of the visible viewport.
    fn viewport(&self) -> Size;

    /// Scrolls to an absolute position.
    fn scroll_to(&mut self, offset: Point, animated: bool);

    /// Applies updated configuration to the live view.
    fn set_props(&mut self, props: &ScrollViewProps);
}

/// Scroll-position conveniences shared by every scrollable.
///
/// Blanket-implemented for all [`ScrollView`] types.
pub trait Scrollable: ScrollView {
    fn scroll_by(&mut self, delta: Point, animated: bool) {
        let at = self.content_offset();
        self.scroll_to(Point::new(at.x + delta.x, at.y + delta.y), animated);
    }

    fn scroll_to_start(&mut self, animated: bool) {
        self.scroll_to(Point::default(), animated);
    }

    /// Scrolls so the trailing edge of content is visible on `axis`.
    fn scroll_to_end(&mut self, axis: Axis, animated: bool) {
        let at = self.content_offset();
        let content = self.content_size();
        let view = self.viewport();
        let target = match axis {
            Axis::Vertical => Point::new(at.x, (content.height - view.height).max(0.0)),
            Axis::Horizontal => Point::new((content.width - view.width).max(0.0), at.y),
        };
        self.scroll_to(target, animated);
    }
}

impl<T: ScrollView + ?Sized> Scrollable for T {}
