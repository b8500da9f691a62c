//! Adapter utilities for the `infinite-scroll` crate.
//!
//! The `infinite-scroll` crate is UI-agnostic and focuses on the gating and the
//! load-more state machine. This crate provides the framework-neutral container
//! glue on top of it:
//!
//! - [`ScrollContainer`]: owns the host scroll view and the caller's async
//!   loader, and selects the trailing indicator element
//! - [`ScrollView`] / [`Scrollable`]: the imperative surface expected from a
//!   host view, plus the shared scroll helpers built on it
//! - [`ScrollViewProps`]: configuration forwarded to the underlying view
//! - [`DefaultLoadingIndicator`]: the built-in trailing spinner descriptor
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod container;
mod indicator;
mod props;
mod scroll_view;

#[cfg(test)]
mod tests;

pub use container::{
    Keyed, LoadFuture, OnLoadMore, RenderLoadingErrorIndicator, RenderLoadingIndicator,
    RenderScrollComponent, RetryTrigger, ScrollContainer, ScrollContainerOptions, TrailingElement,
};
pub use indicator::DefaultLoadingIndicator;
pub use props::{DEFAULT_SCROLL_EVENT_THROTTLE_MS, ScrollViewProps};
pub use scroll_view::{ScrollView, Scrollable};
