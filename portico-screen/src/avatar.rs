use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::FetchError;

/// State of the dependent avatar request, tracked per screen instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarState {
    /// No avatar request has been made for this activation.
    NotRequested,
    /// The avatar request is in flight.
    Loading,
    /// Raw image bytes as served by the avatar endpoint.
    Loaded(Vec<u8>),
    /// The avatar failed to load or was skipped. Non-fatal; the screen
    /// stays on the profile it already rendered.
    Unavailable,
}

/// HTTP client for the avatar endpoint.
///
/// Same contract as the profile fetch: one request per call, no retry,
/// no caching across screen instances.
#[derive(Debug, Clone)]
pub struct AvatarLoader {
    client: Client,
}

impl AvatarLoader {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch the raw image bytes at `avatar_url`.
    ///
    /// The bytes are returned as served; whether they actually decode as
    /// an image is decided at render time by [`decodes_as_image`].
    pub async fn load(&self, avatar_url: &Url) -> Result<Vec<u8>, FetchError> {
        log::debug!("[Avatar] GET {}", avatar_url);

        let response = self
            .client
            .get(avatar_url.as_str())
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

impl Default for AvatarLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `bytes` decode as an image in any supported format.
///
/// Avatar URLs are user-supplied, so a non-image or empty body is treated
/// as "no avatar" rather than an error.
pub fn decodes_as_image(bytes: &[u8]) -> bool {
    image::load_from_memory(bytes).is_ok()
}
