//! Endpoint derivation shared with the data-serving collaborator.
//!
//! The profile document lives at the source URL with a `.json` suffix and
//! the edit screen at the source URL with an `edit` path segment appended.
//! Both conventions are fixed contracts, not configuration.

use url::Url;

/// URL of the JSON document backing a profile screen.
///
/// `https://host/users/42/profile` becomes
/// `https://host/users/42/profile.json`. A trailing slash on the source
/// does not leak into the suffix.
pub fn profile_endpoint(source: &Url) -> Url {
    let mut url = source.clone();
    let trimmed = url.path().trim_end_matches('/').to_owned();
    url.set_path(&format!("{trimmed}.json"));
    url
}

/// URL of the edit screen for a profile resource.
///
/// `https://host/users/42/profile` becomes
/// `https://host/users/42/profile/edit`.
pub fn edit_endpoint(source: &Url) -> Url {
    let mut url = source.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push("edit");
    }
    url
}
