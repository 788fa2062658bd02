use thiserror::Error;

/// Failure modes shared by the profile and avatar requests.
///
/// Neither kind is retried and neither reaches the user as a blocking
/// error; the distinction exists for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: connectivity loss, timeout, or an
    /// unsuccessful HTTP status.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response arrived but its body does not match the expected
    /// schema (missing or mistyped field, empty body).
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short tag used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Decode(_) => "decode",
        }
    }
}
