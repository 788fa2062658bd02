use portico_model::Profile;

/// Render half of the screen contract.
///
/// Implementations belong to the host's layout engine; widget layout and
/// styling live entirely behind this seam. The screen calls in exactly
/// two situations, always from its owning execution context and always
/// in this order: the profile becomes ready, then (at most once) its
/// avatar does.
pub trait Surface: Send {
    /// The profile payload decoded; display name and email.
    fn show_profile(&mut self, profile: &Profile);

    /// Avatar bytes arrived and decode as an image; display it.
    fn show_avatar(&mut self, bytes: &[u8]);
}
