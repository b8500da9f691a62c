use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use futures::future::BoxFuture;
use infinite_scroll::{
    InfiniteScroll, InfiniteScrollOptions, LoadState, Point, ScrollEvent, Size, TrailingSlot,
};

use crate::{DefaultLoadingIndicator, ScrollView, ScrollViewProps};

/// The in-flight load-more operation returned by the caller's loader.
pub type LoadFuture<E> = BoxFuture<'static, Result<(), E>>;

/// The caller-supplied asynchronous load-more operation.
pub type OnLoadMore<E> = Arc<dyn Fn() -> LoadFuture<E> + Send + Sync>;

/// Factory for the underlying scroll view; receives the forwarded props.
pub type RenderScrollComponent<S> = Arc<dyn Fn(&ScrollViewProps) -> S + Send + Sync>;

/// Produces the visual shown while loading.
pub type RenderLoadingIndicator<V> = Arc<dyn Fn() -> V + Send + Sync>;

/// Produces the visual shown after a failed load; receives a retry trigger to
/// hand to its tap/click handler.
pub type RenderLoadingErrorIndicator<V> = Arc<dyn Fn(RetryTrigger) -> V + Send + Sync>;

/// A cloneable handle the error indicator invokes to request a retry.
///
/// Triggering only records the request; the host drains it on its next update
/// pass via [`ScrollContainer::poll_retry`] (or
/// [`ScrollContainer::take_retry_request`]).
#[derive(Clone, Debug, Default)]
pub struct RetryTrigger {
    requested: Arc<AtomicBool>,
}

impl RetryTrigger {
    pub fn trigger(&self) {
        self.requested.store(true, Ordering::Release);
    }

    fn take(&self) -> bool {
        self.requested.swap(false, Ordering::AcqRel)
    }
}

/// An element for the trailing slot plus its stable identity key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyed<T> {
    pub key: &'static str,
    pub element: T,
}

/// The element to append after the caller's children in the scroll view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrailingElement<V> {
    /// A configured custom renderer produced this element.
    Custom(V),
    /// No custom loading renderer is configured; show the built-in spinner.
    DefaultSpinner(DefaultLoadingIndicator),
    /// No custom error renderer is configured; the default renders nothing.
    Empty,
}

/// Configuration for [`ScrollContainer`].
///
/// `S` is the host scroll view, `E` the loader's error type, `V` the host
/// element type produced by custom indicator renderers (defaults to `()` for
/// hosts that stick with the built-in visuals).
pub struct ScrollContainerOptions<S, E, V = ()> {
    /// Engine configuration (threshold, gate, axis, callbacks).
    pub scroll: InfiniteScrollOptions<E>,
    /// Configuration forwarded to the underlying scroll view. Its `axis` also
    /// drives the engine.
    pub props: ScrollViewProps,
    /// The caller-supplied load-more operation. Required.
    pub on_load_more: OnLoadMore<E>,
    /// Factory for the underlying scroll view. Consumed at construction,
    /// never forwarded.
    pub render_scroll_component: RenderScrollComponent<S>,
    /// Custom loading visual; the built-in spinner when `None`.
    pub render_loading_indicator: Option<RenderLoadingIndicator<V>>,
    /// Custom error visual; renders nothing when `None`.
    pub render_loading_error_indicator: Option<RenderLoadingErrorIndicator<V>>,
}

impl<S, E, V> ScrollContainerOptions<S, E, V> {
    pub fn new(
        on_load_more: impl Fn() -> LoadFuture<E> + Send + Sync + 'static,
        render_scroll_component: impl Fn(&ScrollViewProps) -> S + Send + Sync + 'static,
    ) -> Self {
        Self {
            scroll: InfiniteScrollOptions::new(),
            props: ScrollViewProps::new(),
            on_load_more: Arc::new(on_load_more),
            render_scroll_component: Arc::new(render_scroll_component),
            render_loading_indicator: None,
            render_loading_error_indicator: None,
        }
    }

    pub fn with_scroll(mut self, scroll: InfiniteScrollOptions<E>) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_props(mut self, props: ScrollViewProps) -> Self {
        self.props = props;
        self
    }

    pub fn with_render_loading_indicator(
        mut self,
        render: Option<impl Fn() -> V + Send + Sync + 'static>,
    ) -> Self {
        self.render_loading_indicator = render.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_render_loading_error_indicator(
        mut self,
        render: Option<impl Fn(RetryTrigger) -> V + Send + Sync + 'static>,
    ) -> Self {
        self.render_loading_error_indicator = render.map(|f| Arc::new(f) as _);
        self
    }
}

impl<S, E, V> Clone for ScrollContainerOptions<S, E, V> {
    fn clone(&self) -> Self {
        Self {
            scroll: self.scroll.clone(),
            props: self.props,
            on_load_more: Arc::clone(&self.on_load_more),
            render_scroll_component: Arc::clone(&self.render_scroll_component),
            render_loading_indicator: self.render_loading_indicator.clone(),
            render_loading_error_indicator: self.render_loading_error_indicator.clone(),
        }
    }
}

impl<S, E, V> core::fmt::Debug for ScrollContainerOptions<S, E, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollContainerOptions")
            .field("scroll", &self.scroll)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

/// A scroll container with infinite-scroll behavior.
///
/// Owns the host scroll view built by `render_scroll_component`, the engine,
/// and the caller's loader. The trailing indicator element belongs after the
/// caller's children in the view's child list ([`Self::trailing_element`]).
///
/// Hosts drive it with three entry points:
/// - [`Self::handle_scroll`] for every scroll event. When it returns a
///   future, the host awaits it and reports via [`Self::complete_load`]. The
///   future does not borrow the container, so scroll events keep flowing (and
///   keep reaching the caller's `on_scroll`) while the load is suspended; the
///   engine gate short-circuits them.
/// - [`Self::on_interactions_settled`] once the current interaction/animation
///   batch is done. Wire this to the host's after-interactions primitive;
///   hosts without one call it right after [`Self::complete_load`].
/// - [`Self::poll_retry`] each update pass, honoring retry requests recorded
///   by the error indicator's [`RetryTrigger`].
pub struct ScrollContainer<S, E, V = ()> {
    scroll: InfiniteScroll<E>,
    props: ScrollViewProps,
    scroll_view: S,
    on_load_more: OnLoadMore<E>,
    render_loading_indicator: Option<RenderLoadingIndicator<V>>,
    render_loading_error_indicator: Option<RenderLoadingErrorIndicator<V>>,
    retry: RetryTrigger,
}

impl<S: ScrollView, E, V> ScrollContainer<S, E, V> {
    pub fn new(options: ScrollContainerOptions<S, E, V>) -> Self {
        let mut scroll = options.scroll;
        scroll.axis = options.props.axis;
        let scroll_view = (options.render_scroll_component)(&options.props);
        Self {
            scroll: InfiniteScroll::new(scroll),
            props: options.props,
            scroll_view,
            on_load_more: options.on_load_more,
            render_loading_indicator: options.render_loading_indicator,
            render_loading_error_indicator: options.render_loading_error_indicator,
            retry: RetryTrigger::default(),
        }
    }

    pub fn infinite_scroll(&self) -> &InfiniteScroll<E> {
        &self.scroll
    }

    pub fn infinite_scroll_mut(&mut self) -> &mut InfiniteScroll<E> {
        &mut self.scroll
    }

    /// The underlying scroll view, for its imperative surface.
    pub fn scroll_view(&self) -> &S {
        &self.scroll_view
    }

    pub fn scroll_view_mut(&mut self) -> &mut S {
        &mut self.scroll_view
    }

    pub fn into_scroll_view(self) -> S {
        self.scroll_view
    }

    pub fn props(&self) -> &ScrollViewProps {
        &self.props
    }

    /// Forwards updated props to the live view and re-aims the engine axis.
    pub fn set_props(&mut self, props: ScrollViewProps) {
        self.scroll.set_axis(props.axis);
        self.scroll_view.set_props(&props);
        self.props = props;
    }

    pub fn is_loading(&self) -> bool {
        self.scroll.is_loading()
    }

    pub fn is_displaying_error(&self) -> bool {
        self.scroll.is_displaying_error()
    }

    pub fn load_state(&self) -> LoadState {
        self.scroll.load_state()
    }

    /// Handles a scroll event from the host view.
    ///
    /// Returns the loader's future when the load-more threshold was crossed;
    /// the caller awaits it and reports the outcome via
    /// [`Self::complete_load`].
    pub fn handle_scroll(&mut self, event: &ScrollEvent) -> Option<LoadFuture<E>> {
        self.scroll
            .handle_scroll(event)
            .then(|| (self.on_load_more)())
    }

    /// [`Self::handle_scroll`] plus awaiting the loader and reporting the
    /// outcome, in one call. Returns whether a load ran.
    ///
    /// Note this holds the container borrowed for the whole load; hosts that
    /// must keep delivering scroll events meanwhile use the two-step form.
    pub async fn handle_scroll_and_load(&mut self, event: &ScrollEvent) -> bool {
        let Some(load) = self.handle_scroll(event) else {
            return false;
        };
        let outcome = load.await;
        self.complete_load(outcome);
        true
    }

    /// Reports the outcome of a load started by [`Self::handle_scroll`] /
    /// [`Self::begin_retry`].
    ///
    /// The in-flight flag stays raised until
    /// [`Self::on_interactions_settled`].
    pub fn complete_load(&mut self, outcome: Result<(), E>) {
        self.scroll.complete_load(outcome);
    }

    /// True once a completed load is waiting for the settle signal.
    pub fn needs_settle(&self) -> bool {
        self.scroll.settle_pending()
    }

    /// The host's after-interactions primitive calls this once the current
    /// interaction/animation batch has settled.
    pub fn on_interactions_settled(&mut self) {
        self.scroll.settle();
    }

    /// A handle for the error indicator's tap/click handler.
    pub fn retry_trigger(&self) -> RetryTrigger {
        self.retry.clone()
    }

    /// Drains a pending retry request. Part of the low-level surface; most
    /// hosts use [`Self::poll_retry`].
    pub fn take_retry_request(&mut self) -> bool {
        self.retry.take()
    }

    /// Starts a retry, re-entering the loading state.
    ///
    /// Only valid from a settled error state: returns `None` while a load is
    /// still in flight or while no error is displayed. The error display
    /// clears immediately; the returned future is awaited and reported via
    /// [`Self::complete_load`] like any other load.
    pub fn begin_retry(&mut self) -> Option<LoadFuture<E>> {
        if self.scroll.is_loading() || !self.scroll.is_displaying_error() {
            return None;
        }
        self.scroll.begin_load();
        Some((self.on_load_more)())
    }

    /// Drains a pending retry request and starts the retry when eligible.
    pub fn poll_retry(&mut self) -> Option<LoadFuture<E>> {
        if self.take_retry_request() {
            self.begin_retry()
        } else {
            None
        }
    }

    /// [`Self::begin_retry`] plus awaiting the loader and reporting the
    /// outcome, in one call. Returns whether a retry ran.
    pub async fn retry_and_load(&mut self) -> bool {
        let Some(load) = self.begin_retry() else {
            return false;
        };
        let outcome = load.await;
        self.complete_load(outcome);
        true
    }

    /// Which visual occupies the trailing slot.
    pub fn trailing_slot(&self) -> TrailingSlot {
        self.scroll.trailing_slot()
    }

    /// The element to append after the caller's children, with its stable
    /// identity key, or `None` when the trailing slot is empty.
    ///
    /// The key comes from [`TrailingSlot::key`] and differs per indicator, so
    /// hosts that reconcile children by key never confuse the two visuals.
    pub fn trailing_element(&self) -> Option<Keyed<TrailingElement<V>>> {
        let slot = self.scroll.trailing_slot();
        let key = slot.key()?;
        let element = match slot {
            TrailingSlot::None => return None,
            TrailingSlot::Loading => match &self.render_loading_indicator {
                Some(render) => TrailingElement::Custom(render()),
                None => TrailingElement::DefaultSpinner(DefaultLoadingIndicator::default()),
            },
            TrailingSlot::LoadingError => match &self.render_loading_error_indicator {
                Some(render) => TrailingElement::Custom(render(self.retry.clone())),
                None => TrailingElement::Empty,
            },
        };
        Some(Keyed { key, element })
    }
}

impl<S: ScrollView, E, V> ScrollView for ScrollContainer<S, E, V> {
    fn content_offset(&self) -> Point {
        self.scroll_view.content_offset()
    }

    fn content_size(&self) -> Size {
        self.scroll_view.content_size()
    }

    fn viewport(&self) -> Size {
        self.scroll_view.viewport()
    }

    fn scroll_to(&mut self, offset: Point, animated: bool) {
        self.scroll_view.scroll_to(offset, animated);
    }

    fn set_props(&mut self, props: &ScrollViewProps) {
        ScrollContainer::set_props(self, *props);
    }
}

impl<S: core::fmt::Debug, E, V> core::fmt::Debug for ScrollContainer<S, E, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollContainer")
            .field("scroll", &self.scroll)
            .field("props", &self.props)
            .field("scroll_view", &self.scroll_view)
            .finish_non_exhaustive()
    }
}
