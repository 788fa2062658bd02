use std::time::Duration;

use portico_model::Profile;
use reqwest::Client;
use url::Url;

use crate::error::FetchError;

/// HTTP client for the profile JSON endpoint.
///
/// One instance performs one request per call; there is no retry and no
/// request deduplication. Calling [`fetch`](Self::fetch) twice issues two
/// independent requests.
#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    client: Client,
}

impl ProfileFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch and decode the profile document at `profile_url`.
    ///
    /// The caller derives `profile_url` from the screen's source URL via
    /// [`portico_model::urls::profile_endpoint`]. The body is decoded
    /// manually so schema mismatches stay distinguishable from transport
    /// failures; an unsuccessful status or connection error is
    /// [`FetchError::Network`], everything wrong with the body itself is
    /// [`FetchError::Decode`].
    pub async fn fetch(&self, profile_url: &Url) -> Result<Profile, FetchError> {
        log::debug!("[Fetcher] GET {}", profile_url);

        let response = self
            .client
            .get(profile_url.as_str())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let profile: Profile = serde_json::from_slice(&body)?;
        Ok(profile)
    }
}

impl Default for ProfileFetcher {
    fn default() -> Self {
        Self::new()
    }
}
