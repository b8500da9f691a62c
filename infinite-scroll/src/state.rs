/// A lightweight, serializable snapshot of the load-more state.
///
/// Both flags start out false. The flags overlap on the failure path: a failed
/// load sets `is_displaying_error` while `is_loading` stays set until the
/// host's interaction batch settles. After a completed transition at most one
/// of them is true.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadState {
    /// True while a load-more operation is in flight (cleared on settle, not
    /// on completion).
    pub is_loading: bool,
    /// True if the most recent load attempt failed and no retry has started.
    pub is_displaying_error: bool,
}

impl LoadState {
    pub fn phase(&self) -> LoadPhase {
        if self.is_displaying_error {
            LoadPhase::Error
        } else if self.is_loading {
            LoadPhase::Loading
        } else {
            LoadPhase::Idle
        }
    }
}

/// The load-more state machine view of [`LoadState`].
///
/// There is no terminal state; the machine cycles indefinitely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    /// A load failed; entered as soon as the failure is observed, even while
    /// `is_loading` has not settled yet.
    Error,
}
