//! Error taxonomy for release feed calls.

/// Errors raised while fetching release data.
///
/// Every variant is terminal for the current invocation: nothing here is
/// retried automatically.
#[derive(Debug)]
pub enum FetchError {
    /// The API answered with a non-success HTTP status. Carries the status
    /// text (e.g. "404 Not Found").
    Status(String),
    /// The request never produced a response (connect, DNS, TLS, ...).
    Transport(reqwest::Error),
    /// The response body was not the JSON shape the feed promises.
    Decode(reqwest::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Status(status) => {
                write!(f, "Failed to fetch release: {}", status)
            }
            FetchError::Transport(e) => {
                write!(f, "Failed to reach the release API: {}", e)
            }
            FetchError::Decode(e) => {
                write!(f, "Failed to parse release data: {}", e)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Status(_) => None,
            FetchError::Transport(e) | FetchError::Decode(e) => Some(e),
        }
    }
}
