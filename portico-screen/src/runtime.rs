//! The screen's owning execution context.
//!
//! [`spawn`] moves a [`ProfileScreen`] into a single task and serializes
//! every mutation onto it; background requests run independently and
//! report back over a channel. This is the message-passing rendition of
//! the render contract: nothing touches render-visible state except the
//! loop below.

use tokio::sync::mpsc;

use crate::avatar::AvatarLoader;
use crate::fetcher::ProfileFetcher;
use crate::message::ScreenMessage;
use crate::state::ProfileScreen;
use crate::update::{self, ScreenCommand};

/// Handle the host keeps while the screen is presented.
///
/// Dropping the handle dismisses the screen. In-flight fetches are not
/// cancelled; their completions are discarded once the screen is gone.
#[derive(Debug)]
pub struct ScreenHandle {
    tx: mpsc::UnboundedSender<ScreenMessage>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl ScreenHandle {
    /// Forward a user edit interaction to the screen.
    pub fn edit_pressed(&self) {
        let _ = self.tx.send(ScreenMessage::EditPressed);
    }

    /// Tear the screen down and wait for its task to finish.
    ///
    /// Outstanding requests keep running; when they complete they find
    /// the channel closed and their results are dropped.
    pub async fn dismiss(mut self) {
        let _ = self.tx.send(ScreenMessage::Dismissed);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for ScreenHandle {
    fn drop(&mut self) {
        let _ = self.tx.send(ScreenMessage::Dismissed);
    }
}

/// Activate `screen` on its own task and hand back the host's handle.
///
/// Activation immediately issues the profile request; the avatar request
/// follows from its success path, never before it. Must be called from
/// within a tokio runtime.
pub fn spawn(
    mut screen: ProfileScreen,
    fetcher: ProfileFetcher,
    loader: AvatarLoader,
) -> ScreenHandle {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let loop_tx = tx.clone();

    let task = tokio::spawn(async move {
        let command = update::activate(&mut screen);
        dispatch(command, &loop_tx, &fetcher, &loader);

        while let Some(message) = rx.recv().await {
            if matches!(message, ScreenMessage::Dismissed) {
                log::info!("[Profile] screen dismissed");
                break;
            }

            let command = update::update_screen(&mut screen, message);
            dispatch(command, &loop_tx, &fetcher, &loader);
        }

        // The screen is dropped here; late completions hit a closed
        // channel and never observe the torn-down state.
    });

    ScreenHandle {
        tx,
        task: Some(task),
    }
}

fn dispatch(
    command: ScreenCommand,
    tx: &mpsc::UnboundedSender<ScreenMessage>,
    fetcher: &ProfileFetcher,
    loader: &AvatarLoader,
) {
    match command {
        ScreenCommand::None => {}
        ScreenCommand::FetchProfile(url) => {
            let fetcher = fetcher.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = fetcher.fetch(&url).await;
                if tx.send(ScreenMessage::ProfileFetched(result)).is_err() {
                    log::debug!("[Profile] profile completion after teardown; dropped");
                }
            });
        }
        ScreenCommand::FetchAvatar(url) => {
            let loader = loader.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = loader.load(&url).await;
                if tx.send(ScreenMessage::AvatarFetched(result)).is_err() {
                    log::debug!("[Profile] avatar completion after teardown; dropped");
                }
            });
        }
    }
}
