//! A headless infinite-scroll engine inspired by react-native-infinite-scroll-view.
//!
//! For adapter-level utilities (the scroll container, scroll-view traits, default
//! indicator), see the `infinite-scroll-adapter` crate.
//!
//! This crate focuses on the behavioral core of "load more when the user nears the
//! end": gating scroll events, computing distance-to-end on either axis, sequencing
//! the load-more state machine (idle → loading → idle/error), and deciding which
//! trailing indicator to show.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll events (content size, insets, offset, viewport size)
//! - the asynchronous load-more operation and its outcome
//! - a "current interaction batch has settled" signal
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod infinite_scroll;
mod options;
mod state;
mod types;


pub use infinite_scroll::InfiniteScroll;
pub use options::{
    DEFAULT_DISTANCE_TO_LOAD_MORE, InfiniteScrollOptions, OnChangeCallback, OnLoadErrorCallback,
    OnScrollCallback,
};
pub use state::{LoadPhase, LoadState};
pub use types::{Axis, Insets, Point, ScrollEvent, Size, TrailingSlot};
