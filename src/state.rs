//! Load-state tracking for views that fetch release data once per load.
//!
//! The state is held explicitly by the presentation layer and passed down;
//! there are no hidden globals. A load is attempted once and its outcome is
//! terminal until the user reloads.

use std::fmt;

/// The three exhaustive states of a one-shot release fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// The request is still in flight.
    Loading,
    /// The request finished and the data is usable.
    Ready(T),
    /// The request failed; the message persists until a reload.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Gate a user-triggered download action on this state.
    ///
    /// Anything but `Ready` blocks the action with an explanation instead of
    /// failing: a fetch still in flight asks the user to retry shortly, a
    /// failed fetch points at a reload.
    pub fn guard_download(&self) -> Result<&T, DownloadBlocked> {
        match self {
            LoadState::Ready(value) => Ok(value),
            LoadState::Loading => Err(DownloadBlocked::StillLoading),
            LoadState::Failed(message) => Err(DownloadBlocked::LoadFailed(message.clone())),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for LoadState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }
}

/// Why a download action could not run right now.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadBlocked {
    /// Release data has not arrived yet.
    StillLoading,
    /// The fetch failed; carries the failure message.
    LoadFailed(String),
}

impl fmt::Display for DownloadBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadBlocked::StillLoading => {
                write!(
                    f,
                    "Release data is still loading. Please try again in a moment."
                )
            }
            DownloadBlocked::LoadFailed(message) => {
                write!(f, "Failed to load release information: {}", message)
            }
        }
    }
}

impl std::error::Error for DownloadBlocked {}
