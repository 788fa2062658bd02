use std::sync::Weak;

use portico_model::Profile;
use url::Url;

use crate::avatar::AvatarState;
use crate::routing::Router;
use crate::surface::Surface;

/// Load progress for the profile payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Constructed but not yet activated.
    Idle,
    /// The profile request is in flight.
    FetchingProfile,
    /// Name and email are rendered; the avatar may still be loading.
    ProfileReady,
    /// The fetch failed. Terminal for this activation; no retry, the
    /// screen keeps showing only its static chrome.
    ProfileFailed {
        last_error: String,
    },
}

/// Natively rendered replacement for the web profile page.
///
/// Owns all mutable screen state and is its sole point of mutation;
/// every handler runs on the screen's owning execution context (see
/// [`crate::runtime`]), so no field needs a lock.
pub struct ProfileScreen {
    /// Logical profile resource this screen was routed to. Set once at
    /// construction.
    pub source_url: Url,
    pub phase: LoadPhase,
    /// Absent until the fetch succeeds; never partially populated.
    pub profile: Option<Profile>,
    pub avatar: AvatarState,
    /// Host navigator. Non-owning; a dead navigator turns the edit
    /// action into a logged no-op.
    pub router: Weak<dyn Router>,
    /// Host layout seam. Receives render calls as data becomes ready.
    pub surface: Box<dyn Surface>,
}

impl ProfileScreen {
    /// Identifier the host's path configuration maps to this screen so
    /// that matching URLs are natively rendered instead of web-rendered.
    pub const PATH_CONFIGURATION_IDENTIFIER: &'static str = "profile";

    pub fn new(source_url: Url, router: Weak<dyn Router>, surface: Box<dyn Surface>) -> Self {
        log::info!("[Profile] screen created for {}", source_url);

        Self {
            source_url,
            phase: LoadPhase::Idle,
            profile: None,
            avatar: AvatarState::NotRequested,
            router,
            surface,
        }
    }
}

impl std::fmt::Debug for ProfileScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileScreen")
            .field("source_url", &self.source_url.as_str())
            .field("phase", &self.phase)
            .field("profile", &self.profile)
            .field("avatar", &self.avatar)
            .field("has_router", &(self.router.strong_count() > 0))
            .finish()
    }
}
