use alloc::sync::Arc;

use crate::{
    Axis, InfiniteScrollOptions, LoadPhase, LoadState, OnChangeCallback, OnLoadErrorCallback,
    OnScrollCallback, ScrollEvent, TrailingSlot,
};

/// A headless infinite-scroll engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects and does not run the load operation.
/// - Your adapter drives it by feeding scroll events and reporting load
///   outcomes.
/// - Rendering is exposed as data: [`Self::trailing_slot`] says which visual
///   (if any) belongs after the caller's children.
///
/// The load-more protocol is a three-step handshake:
/// 1. [`Self::handle_scroll`] returns `true` (or the adapter calls
///    [`Self::begin_load`] for an explicit retry); the engine is now loading.
/// 2. The adapter runs the asynchronous load operation and reports the result
///    via [`Self::complete_load`].
/// 3. Once the host's current interaction/animation batch has settled, the
///    adapter calls [`Self::settle`] to clear the in-flight flag. Deferring
///    this step keeps the indicator from disappearing mid-gesture.
///
/// At most one load is in flight at a time, enforced by the `is_loading` gate.
/// For a container that owns the loader and the host view, see the
/// `infinite-scroll-adapter` crate.
pub struct InfiniteScroll<E> {
    options: InfiniteScrollOptions<E>,
    state: LoadState,
    settle_pending: bool,
}

impl<E> InfiniteScroll<E> {
    pub fn new(options: InfiniteScrollOptions<E>) -> Self {
        idebug!(
            distance_to_load_more = options.distance_to_load_more,
            can_load_more = options.can_load_more,
            "InfiniteScroll::new"
        );
        Self {
            options,
            state: LoadState::default(),
            settle_pending: false,
        }
    }

    pub fn options(&self) -> &InfiniteScrollOptions<E> {
        &self.options
    }

    pub fn set_options(&mut self, options: InfiniteScrollOptions<E>) {
        self.options = options;
        itrace!(
            distance_to_load_more = self.options.distance_to_load_more,
            can_load_more = self.options.can_load_more,
            "InfiniteScroll::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut InfiniteScrollOptions<E>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn can_load_more(&self) -> bool {
        self.options.can_load_more
    }

    pub fn set_can_load_more(&mut self, can_load_more: bool) {
        if self.options.can_load_more == can_load_more {
            return;
        }
        self.options.can_load_more = can_load_more;
        self.notify();
    }

    pub fn distance_to_load_more(&self) -> f64 {
        self.options.distance_to_load_more
    }

    pub fn set_distance_to_load_more(&mut self, distance_to_load_more: f64) {
        self.options.distance_to_load_more = distance_to_load_more;
        self.notify();
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn set_axis(&mut self, axis: Axis) {
        if self.options.axis == axis {
            return;
        }
        self.options.axis = axis;
        self.notify();
    }

    pub fn set_on_scroll(
        &mut self,
        on_scroll: Option<impl Fn(&ScrollEvent) + Send + Sync + 'static>,
    ) {
        self.options.on_scroll = on_scroll.map(|f| Arc::new(f) as OnScrollCallback);
    }

    pub fn set_on_load_error(
        &mut self,
        on_load_error: Option<impl Fn(&E) + Send + Sync + 'static>,
    ) {
        self.options.on_load_error = on_load_error.map(|f| Arc::new(f) as OnLoadErrorCallback<E>);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&InfiniteScroll<E>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as OnChangeCallback<E>);
        self.notify();
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn is_displaying_error(&self) -> bool {
        self.state.is_displaying_error
    }

    /// Returns a lightweight snapshot of the current load state.
    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.phase()
    }

    /// Distance between the viewport's trailing edge and the end of content on
    /// the configured axis.
    pub fn distance_from_end(&self, event: &ScrollEvent) -> f64 {
        event.distance_from_end(self.options.axis)
    }

    /// Handles a scroll event from the host view.
    ///
    /// The event is forwarded to `on_scroll` first, unconditionally. The
    /// load-trigger gate then short-circuits while a load is in flight, while
    /// `can_load_more` is false, or while an error is displayed. Otherwise a
    /// load starts iff the distance from the end is strictly below
    /// `distance_to_load_more`.
    ///
    /// Returns `true` when a load was started; the caller must then run the
    /// load operation and report its outcome via [`Self::complete_load`].
    pub fn handle_scroll(&mut self, event: &ScrollEvent) -> bool {
        if let Some(on_scroll) = &self.options.on_scroll {
            on_scroll(event);
        }

        if self.state.is_loading || !self.options.can_load_more || self.state.is_displaying_error {
            return false;
        }

        let distance = self.distance_from_end(event);
        if distance < self.options.distance_to_load_more {
            itrace!(
                distance,
                threshold = self.options.distance_to_load_more,
                "load-more threshold crossed"
            );
            self.begin_load();
            true
        } else {
            false
        }
    }

    /// Enters the loading state (idle → loading, or error → loading on retry).
    ///
    /// Clears the error display and raises `is_loading` before the caller
    /// invokes its load operation, so a retry is optimistic: the error
    /// indicator disappears immediately, regardless of whether the retried
    /// load ultimately succeeds.
    ///
    /// Starting a load while one is in flight is a caller bug; debug builds
    /// fail loudly. Release builds tolerate the call and proceed.
    pub fn begin_load(&mut self) {
        if self.state.is_loading {
            iwarn!("begin_load called while a load is in flight");
            debug_assert!(
                !self.state.is_loading,
                "begin_load called while a load is in flight"
            );
        }
        idebug!(was_error = self.state.is_displaying_error, "begin_load");
        self.state.is_displaying_error = false;
        self.state.is_loading = true;
        self.notify();
    }

    /// Reports the outcome of the load operation started by
    /// [`Self::begin_load`] / [`Self::handle_scroll`].
    ///
    /// On failure, `on_load_error` is invoked synchronously with the failure
    /// value and the error indicator becomes visible. On both paths
    /// `is_loading` stays raised until [`Self::settle`] runs, once the host's
    /// current interaction batch has settled.
    pub fn complete_load(&mut self, outcome: Result<(), E>) {
        if !self.state.is_loading {
            iwarn!("complete_load called without a load in flight");
            debug_assert!(
                self.state.is_loading,
                "complete_load called without a load in flight"
            );
        }
        idebug!(ok = outcome.is_ok(), "complete_load");
        if let Err(error) = &outcome {
            if let Some(on_load_error) = &self.options.on_load_error {
                on_load_error(error);
            }
            self.state.is_displaying_error = true;
        }
        self.settle_pending = true;
        self.notify();
    }

    /// True once a completed load is waiting for [`Self::settle`].
    pub fn settle_pending(&self) -> bool {
        self.settle_pending
    }

    /// Clears the in-flight flag of a completed load.
    ///
    /// Hosts call this after their current interaction/animation batch has
    /// settled. No-op when no settle is pending.
    pub fn settle(&mut self) {
        if !self.settle_pending {
            return;
        }
        idebug!("settle");
        self.settle_pending = false;
        self.state.is_loading = false;
        self.notify();
    }

    /// Which visual belongs in the trailing slot, after the caller's children.
    ///
    /// The error indicator wins while an error is displayed; otherwise the
    /// loading indicator is shown whenever more content is declared available
    /// (not only while a request is in flight: the slot doubles as an
    /// availability affordance and reserves layout space).
    pub fn trailing_slot(&self) -> TrailingSlot {
        if self.state.is_displaying_error {
            TrailingSlot::LoadingError
        } else if self.options.can_load_more {
            TrailingSlot::Loading
        } else {
            TrailingSlot::None
        }
    }

    fn notify(&self) {
        if let Some(on_change) = &self.options.on_change {
            on_change(self);
        }
    }
}

impl<E> Clone for InfiniteScroll<E> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            state: self.state,
            settle_pending: self.settle_pending,
        }
    }
}

impl<E> core::fmt::Debug for InfiniteScroll<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InfiniteScroll")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("settle_pending", &self.settle_pending)
            .finish()
    }
}
