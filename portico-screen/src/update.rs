//! Update handlers for the profile screen.
//!
//! Handlers are synchronous and only describe follow-up work through
//! [`ScreenCommand`]; the runtime executes the network side. That split
//! keeps every state transition directly testable without a socket.

use portico_model::{Profile, urls};
use url::Url;

use crate::avatar::{self, AvatarState};
use crate::error::FetchError;
use crate::message::ScreenMessage;
use crate::state::{LoadPhase, ProfileScreen};

/// Follow-up work the runtime performs after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    None,
    /// Issue the profile request against the derived JSON endpoint.
    FetchProfile(Url),
    /// Issue the dependent avatar request.
    FetchAvatar(Url),
}

/// Transition out of `Idle` and request the profile payload.
///
/// A screen instance performs at most one profile fetch; a second
/// activation is ignored.
pub fn activate(screen: &mut ProfileScreen) -> ScreenCommand {
    if screen.phase != LoadPhase::Idle {
        log::warn!(
            "[Profile] activate in phase {:?}; ignoring",
            screen.phase
        );
        return ScreenCommand::None;
    }

    let endpoint = urls::profile_endpoint(&screen.source_url);
    log::info!("[Profile] fetching profile from {}", endpoint);
    screen.phase = LoadPhase::FetchingProfile;
    ScreenCommand::FetchProfile(endpoint)
}

/// Apply one message to the screen.
pub fn update_screen(screen: &mut ProfileScreen, message: ScreenMessage) -> ScreenCommand {
    match message {
        ScreenMessage::ProfileFetched(result) => handle_profile_fetched(screen, result),
        ScreenMessage::AvatarFetched(result) => handle_avatar_fetched(screen, result),
        ScreenMessage::EditPressed => handle_edit_pressed(screen),
        // Teardown is handled by the runtime loop; nothing to mutate.
        ScreenMessage::Dismissed => ScreenCommand::None,
    }
}

fn handle_profile_fetched(
    screen: &mut ProfileScreen,
    result: Result<Profile, FetchError>,
) -> ScreenCommand {
    if screen.phase != LoadPhase::FetchingProfile {
        log::warn!(
            "[Profile] profile completion in phase {:?}; ignoring",
            screen.phase
        );
        return ScreenCommand::None;
    }

    match result {
        Ok(profile) => {
            log::info!("[Profile] profile loaded for {}", profile.name);
            screen.phase = LoadPhase::ProfileReady;

            // Render name/email before the avatar fetch is even requested;
            // the avatar is a dependent sub-resource, not a gate.
            screen.surface.show_profile(&profile);

            let command = match Url::parse(&profile.avatar_url) {
                Ok(avatar_url) => {
                    screen.avatar = AvatarState::Loading;
                    ScreenCommand::FetchAvatar(avatar_url)
                }
                Err(_) => {
                    // User-supplied avatar URLs are informal; an
                    // unparsable one means "no avatar", not a failure.
                    log::debug!("[Profile] avatar URL does not parse; skipping avatar");
                    screen.avatar = AvatarState::Unavailable;
                    ScreenCommand::None
                }
            };

            screen.profile = Some(profile);
            command
        }
        Err(err) => {
            log::error!("[Profile] profile fetch failed ({}): {}", err.kind(), err);
            screen.phase = LoadPhase::ProfileFailed {
                last_error: err.to_string(),
            };
            ScreenCommand::None
        }
    }
}

fn handle_avatar_fetched(
    screen: &mut ProfileScreen,
    result: Result<Vec<u8>, FetchError>,
) -> ScreenCommand {
    if screen.avatar != AvatarState::Loading {
        log::warn!("[Profile] avatar completion without a pending request; ignoring");
        return ScreenCommand::None;
    }

    match result {
        Ok(bytes) if avatar::decodes_as_image(&bytes) => {
            log::info!("[Profile] avatar loaded ({} bytes)", bytes.len());
            screen.surface.show_avatar(&bytes);
            screen.avatar = AvatarState::Loaded(bytes);
        }
        Ok(_) => {
            log::debug!("[Profile] avatar body is not a decodable image; skipping");
            screen.avatar = AvatarState::Unavailable;
        }
        Err(err) => {
            log::warn!("[Profile] avatar fetch failed ({}): {}", err.kind(), err);
            screen.avatar = AvatarState::Unavailable;
        }
    }

    ScreenCommand::None
}

/// Route the host navigator to `<source>/edit`.
///
/// Available from any state; it does not touch screen state and does not
/// cancel in-flight fetches.
fn handle_edit_pressed(screen: &mut ProfileScreen) -> ScreenCommand {
    let edit_url = urls::edit_endpoint(&screen.source_url);

    match screen.router.upgrade() {
        Some(router) => {
            log::info!("[Profile] routing to {}", edit_url);
            router.route(edit_url);
        }
        None => log::warn!("[Profile] edit pressed but the navigator is gone"),
    }

    ScreenCommand::None
}
