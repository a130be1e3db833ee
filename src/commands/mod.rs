//! Command implementations for the CLI.

mod changelog;
mod latest;
mod resolve;

pub use changelog::changelog;
pub use latest::latest;
pub use resolve::resolve;

use anyhow::Result;
use chrono::DateTime;

use crate::github::RELEASES_REPO;
use crate::state::LoadState;

/// Web page listing every release, offered whenever the feed is unusable.
pub(crate) fn releases_page_url() -> String {
    format!("https://github.com/{}/releases", RELEASES_REPO)
}

/// Unwrap a load state for a download-driven command.
///
/// A non-ready state prints the explanation plus a manual link and converts
/// into the command's error.
pub(crate) fn require_loaded<T>(state: &LoadState<T>) -> Result<&T> {
    state.guard_download().map_err(|blocked| {
        eprintln!("{}", blocked);
        eprintln!("View releases at {}", releases_page_url());
        anyhow::Error::from(blocked)
    })
}

/// Render an ISO 8601 timestamp as e.g. "November 5, 2025".
///
/// Unparsable input is shown raw rather than dropped.
pub(crate) fn format_date(published_at: Option<&str>) -> String {
    let Some(raw) = published_at else {
        return "unknown".to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub(crate) fn human_size(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date(Some("2025-11-05T12:00:00Z")),
            "November 5, 2025"
        );
        assert_eq!(format_date(Some("not-a-date")), "not-a-date");
        assert_eq!(format_date(None), "unknown");
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(104857600), "100.0 MB");
        assert_eq!(human_size(0), "0.0 MB");
    }

    #[test]
    fn test_releases_page_url() {
        assert_eq!(
            releases_page_url(),
            "https://github.com/risa-labs-inc/BOSS-Releases/releases"
        );
    }

    #[test]
    fn test_require_loaded_passes_ready_through() {
        let state = LoadState::Ready(42);
        assert_eq!(*require_loaded(&state).unwrap(), 42);
    }

    #[test]
    fn test_require_loaded_fails_on_failed_state() {
        let state: LoadState<i32> = LoadState::Failed("500 Internal Server Error".to_string());
        let err = require_loaded(&state).unwrap_err();
        assert!(err.to_string().contains("500 Internal Server Error"));
    }
}
