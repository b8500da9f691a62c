use crate::*;

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;
use infinite_scroll::{Axis, InfiniteScrollOptions, Point, ScrollEvent, Size, TrailingSlot};

#[derive(Debug)]
struct MockScrollView {
    props: ScrollViewProps,
    offset: Point,
    content: Size,
    viewport: Size,
    scroll_calls: Vec<(Point, bool)>,
}

impl MockScrollView {
    fn new(props: &ScrollViewProps) -> Self {
        Self {
            props: *props,
            offset: Point::default(),
            content: Size::new(800.0, 2400.0),
            viewport: Size::new(800.0, 600.0),
            scroll_calls: Vec::new(),
        }
    }
}

impl ScrollView for MockScrollView {
    fn content_offset(&self) -> Point {
        self.offset
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn scroll_to(&mut self, offset: Point, animated: bool) {
        self.offset = offset;
        self.scroll_calls.push((offset, animated));
    }

    fn set_props(&mut self, props: &ScrollViewProps) {
        self.props = *props;
    }
}

/// distance_from_end = 0 on the vertical axis.
fn near_end() -> ScrollEvent {
    ScrollEvent {
        content_size: Size::new(800.0, 2400.0),
        content_offset: Point::new(0.0, 1800.0),
        viewport: Size::new(800.0, 600.0),
        ..ScrollEvent::default()
    }
}

/// distance_from_end = 0 on the horizontal axis.
fn near_end_horizontal() -> ScrollEvent {
    ScrollEvent {
        content_size: Size::new(2400.0, 600.0),
        content_offset: Point::new(1600.0, 0.0),
        viewport: Size::new(800.0, 600.0),
        ..ScrollEvent::default()
    }
}

fn ok_loader(calls: &Arc<AtomicUsize>) -> OnLoadMore<String> {
    let calls = Arc::clone(calls);
    Arc::new(move || -> LoadFuture<String> {
        calls.fetch_add(1, Ordering::Relaxed);
        Box::pin(async { Ok(()) })
    })
}

fn err_loader(message: &'static str) -> OnLoadMore<String> {
    Arc::new(move || -> LoadFuture<String> { Box::pin(async move { Err(message.to_string()) }) })
}

fn options<V>(loader: OnLoadMore<String>) -> ScrollContainerOptions<MockScrollView, String, V> {
    let mut options = ScrollContainerOptions::new(move || loader(), MockScrollView::new);
    options.scroll = InfiniteScrollOptions::new()
        .with_can_load_more(true)
        .with_distance_to_load_more(100.0);
    options
}

fn container(loader: OnLoadMore<String>) -> ScrollContainer<MockScrollView, String> {
    ScrollContainer::new(options(loader))
}

#[test]
fn factory_receives_the_forwarded_props() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = container(ok_loader(&calls));

    let props = c.scroll_view().props;
    assert_eq!(props.axis, Axis::Vertical);
    assert_eq!(
        props.scroll_event_throttle_ms,
        DEFAULT_SCROLL_EVENT_THROTTLE_MS
    );
}

#[test]
fn props_axis_drives_the_engine() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = ScrollContainer::new(
        options::<()>(ok_loader(&calls))
            .with_props(ScrollViewProps::new().with_axis(Axis::Horizontal)),
    );

    assert!(c.handle_scroll(&near_end_horizontal()).is_some());
}

#[test]
fn set_props_reaches_the_view_and_reaims_the_axis() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = container(ok_loader(&calls));

    c.set_props(ScrollViewProps::new().with_axis(Axis::Horizontal));
    assert_eq!(c.scroll_view().props.axis, Axis::Horizontal);
    assert!(c.handle_scroll(&near_end_horizontal()).is_some());
}

#[test]
fn scroll_load_settle_roundtrip() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = container(ok_loader(&calls));

    let load = c.handle_scroll(&near_end()).expect("threshold crossed");
    assert!(c.is_loading());
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    // Scroll events keep flowing while the load is suspended, but the gate
    // short-circuits them.
    assert!(c.handle_scroll(&near_end()).is_none());
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    c.complete_load(block_on(load));
    assert!(c.is_loading());
    assert!(c.needs_settle());

    // Still gated until the interaction batch settles.
    assert!(c.handle_scroll(&near_end()).is_none());

    c.on_interactions_settled();
    assert!(!c.is_loading());
    assert!(c.handle_scroll(&near_end()).is_some());
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn handle_scroll_and_load_drives_a_full_load() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = container(ok_loader(&calls));

    assert!(block_on(c.handle_scroll_and_load(&near_end())));
    assert!(c.needs_settle());
    c.on_interactions_settled();
    assert_eq!(c.load_state(), infinite_scroll::LoadState::default());
}

#[test]
fn failure_selects_the_error_element() {
    let mut c = container(err_loader("boom"));

    let load = c.handle_scroll(&near_end()).expect("threshold crossed");
    c.complete_load(block_on(load));
    c.on_interactions_settled();

    assert!(c.is_displaying_error());
    let trailing = c.trailing_element().expect("error element");
    assert_eq!(trailing.key, "loading-error-indicator");
    assert_eq!(trailing.element, TrailingElement::Empty);
}

#[test]
fn retry_trigger_roundtrip() {
    let mut c = container(err_loader("boom"));

    let load = c.handle_scroll(&near_end()).expect("threshold crossed");
    c.complete_load(block_on(load));
    c.on_interactions_settled();
    assert!(c.is_displaying_error());

    // Nothing pending yet.
    assert!(c.poll_retry().is_none());

    c.retry_trigger().trigger();
    let retried = c.poll_retry().expect("retry starts");
    // Optimistic: the error display clears before the retried load resolves.
    assert!(!c.is_displaying_error());
    assert!(c.is_loading());

    c.complete_load(block_on(retried));
    c.on_interactions_settled();
    assert!(c.is_displaying_error()); // err_loader fails again
}

#[test]
fn retry_is_refused_while_still_loading() {
    let mut c = container(err_loader("boom"));

    let load = c.handle_scroll(&near_end()).expect("threshold crossed");
    c.complete_load(block_on(load));
    // No settle yet: the error is displayed but the load has not cleared.
    assert!(c.is_displaying_error());
    assert!(c.is_loading());

    c.retry_trigger().trigger();
    assert!(c.poll_retry().is_none());
    assert!(!block_on(c.retry_and_load()));
}

#[test]
fn retry_is_refused_without_a_displayed_error() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = container(ok_loader(&calls));

    assert!(c.begin_retry().is_none());
    assert!(!block_on(c.retry_and_load()));
    assert_eq!(calls.load(Ordering::Relaxed), 0);
}

#[test]
fn default_loading_element_is_the_builtin_spinner() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = container(ok_loader(&calls));

    let trailing = c.trailing_element().expect("loading element");
    assert_eq!(trailing.key, "loading-indicator");
    assert_eq!(
        trailing.element,
        TrailingElement::DefaultSpinner(DefaultLoadingIndicator::default())
    );
}

#[test]
fn no_trailing_element_when_no_more_content() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut options = options::<()>(ok_loader(&calls));
    options.scroll = InfiniteScrollOptions::new();
    let c = ScrollContainer::new(options);

    assert_eq!(c.trailing_slot(), TrailingSlot::None);
    assert!(c.trailing_element().is_none());
}

#[test]
fn custom_renderers_produce_custom_elements() {
    let mut c = ScrollContainer::new(
        options::<&'static str>(err_loader("boom"))
            .with_render_loading_indicator(Some(|| "spinner"))
            .with_render_loading_error_indicator(Some(|trigger: RetryTrigger| {
                // Wire the trigger straight away, as an indicator's tap
                // handler would.
                trigger.trigger();
                "retry-button"
            })),
    );

    let trailing = c.trailing_element().expect("loading element");
    assert_eq!(trailing.element, TrailingElement::Custom("spinner"));

    let load = c.handle_scroll(&near_end()).expect("threshold crossed");
    c.complete_load(block_on(load));
    c.on_interactions_settled();

    let trailing = c.trailing_element().expect("error element");
    assert_eq!(trailing.key, "loading-error-indicator");
    assert_eq!(trailing.element, TrailingElement::Custom("retry-button"));

    // The rendered indicator requested a retry through its trigger.
    assert!(c.poll_retry().is_some());
}

#[test]
fn scroll_helpers_delegate_to_the_view() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = container(ok_loader(&calls));

    c.scroll_to_end(Axis::Vertical, false);
    assert_eq!(c.scroll_view().offset, Point::new(0.0, 1800.0));

    c.scroll_by(Point::new(0.0, -100.0), false);
    assert_eq!(c.scroll_view().offset, Point::new(0.0, 1700.0));

    c.scroll_to_start(true);
    assert_eq!(c.scroll_view().offset, Point::default());
    assert_eq!(c.scroll_view().scroll_calls.len(), 3);
    assert!(c.scroll_view().scroll_calls[2].1);
}
