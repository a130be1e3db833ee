//! Client for the BOSS Console release feed on the GitHub REST API.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_API_URL, GitHubFeed, RELEASES_REPO, ReleaseFeed, build_client};
pub use error::FetchError;
pub use types::{Release, ReleaseAsset};

#[cfg(test)]
pub use client::MockReleaseFeed;
