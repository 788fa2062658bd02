use portico_model::Profile;

use crate::error::FetchError;

/// Messages delivered to the screen on its owning execution context.
///
/// Background completions are marshalled here instead of mutating the
/// screen from the task that produced them; that is what keeps
/// [`ProfileScreen`](crate::state::ProfileScreen) free of locks.
#[derive(Debug)]
pub enum ScreenMessage {
    /// The profile request completed.
    ProfileFetched(Result<Profile, FetchError>),
    /// The avatar request completed.
    AvatarFetched(Result<Vec<u8>, FetchError>),
    /// The user asked to edit the profile.
    EditPressed,
    /// The host dismissed the screen; the runtime drops it.
    Dismissed,
}
