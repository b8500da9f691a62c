use alloc::sync::Arc;

use crate::infinite_scroll::InfiniteScroll;
use crate::{Axis, ScrollEvent};

/// A callback fired for every scroll event, before any gating logic runs.
pub type OnScrollCallback = Arc<dyn Fn(&ScrollEvent) + Send + Sync>;

/// A callback fired when the load-more operation fails.
///
/// Receives the loader's failure value. Invoked synchronously, before the
/// error indicator becomes visible state.
pub type OnLoadErrorCallback<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// A callback fired when the engine's state changes.
///
/// Useful for driving re-renders: the trailing slot or the load state may have
/// changed whenever this fires.
pub type OnChangeCallback<E> = Arc<dyn Fn(&InfiniteScroll<E>) + Send + Sync>;

/// Threshold from the trailing edge at which a load is triggered, in host
/// units.
pub const DEFAULT_DISTANCE_TO_LOAD_MORE: f64 = 1500.0;

/// Configuration for [`crate::InfiniteScroll`].
///
/// This type is designed to be cheap to clone: callbacks are stored in `Arc`s
/// so adapters can update a few fields and call `InfiniteScroll::set_options`
/// without reallocating closures.
pub struct InfiniteScrollOptions<E> {
    /// Distance from the trailing edge at which a load is triggered.
    ///
    /// Compared strictly: a load starts only when `distance_from_end` is less
    /// than this value.
    pub distance_to_load_more: f64,

    /// Gate; no load is triggered and no loading indicator is shown while
    /// false.
    pub can_load_more: bool,

    /// The axis distance-to-end is computed on.
    pub axis: Axis,

    /// Optional caller scroll handler. Always invoked first, once per event,
    /// regardless of the threshold outcome.
    pub on_scroll: Option<OnScrollCallback>,

    /// Optional side-effect callback invoked with the failure value when the
    /// load-more operation fails.
    pub on_load_error: Option<OnLoadErrorCallback<E>>,

    /// Optional callback fired when the engine's state changes.
    pub on_change: Option<OnChangeCallback<E>>,
}

impl<E> InfiniteScrollOptions<E> {
    pub fn new() -> Self {
        Self {
            distance_to_load_more: DEFAULT_DISTANCE_TO_LOAD_MORE,
            can_load_more: false,
            axis: Axis::Vertical,
            on_scroll: None,
            on_load_error: None,
            on_change: None,
        }
    }

    pub fn with_distance_to_load_more(mut self, distance_to_load_more: f64) -> Self {
        self.distance_to_load_more = distance_to_load_more;
        self
    }

    pub fn with_can_load_more(mut self, can_load_more: bool) -> Self {
        self.can_load_more = can_load_more;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(&ScrollEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_load_error(
        mut self,
        on_load_error: Option<impl Fn(&E) + Send + Sync + 'static>,
    ) -> Self {
        self.on_load_error = on_load_error.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&InfiniteScroll<E>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<E> Default for InfiniteScrollOptions<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for InfiniteScrollOptions<E> {
    fn clone(&self) -> Self {
        Self {
            distance_to_load_more: self.distance_to_load_more,
            can_load_more: self.can_load_more,
            axis: self.axis,
            on_scroll: self.on_scroll.clone(),
            on_load_error: self.on_load_error.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<E> core::fmt::Debug for InfiniteScrollOptions<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InfiniteScrollOptions")
            .field("distance_to_load_more", &self.distance_to_load_more)
            .field("can_load_more", &self.can_load_more)
            .field("axis", &self.axis)
            .finish_non_exhaustive()
    }
}
