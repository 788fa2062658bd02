use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;
use portico_model::Profile;
use url::Url;

use portico_screen::avatar::AvatarLoader;
use portico_screen::config::Config;
use portico_screen::fetcher::ProfileFetcher;
use portico_screen::routing::Router;
use portico_screen::runtime;
use portico_screen::state::ProfileScreen;
use portico_screen::surface::Surface;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("portico_screen", LevelFilter::Debug)
        .init();
}

/// Navigator stand-in: logs the transition a hybrid host would perform.
#[derive(Debug)]
struct LoggingRouter;

impl Router for LoggingRouter {
    fn route(&self, url: Url) {
        log::info!("[Router] route to {}", url);
    }
}

/// Layout stand-in: prints what a native layout engine would render.
#[derive(Debug)]
struct ConsoleSurface;

impl Surface for ConsoleSurface {
    fn show_profile(&mut self, profile: &Profile) {
        println!("{} <{}>", profile.name, profile.email);
    }

    fn show_avatar(&mut self, bytes: &[u8]) {
        println!("avatar: {} bytes", bytes.len());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = Config::load();
    let source_url = Url::parse(&config.profile_url)
        .with_context(|| format!("invalid profile URL: {}", config.profile_url))?;

    let router: Arc<dyn Router> = Arc::new(LoggingRouter);
    let screen = ProfileScreen::new(
        source_url,
        Arc::downgrade(&router),
        Box::new(ConsoleSurface),
    );
    let handle = runtime::spawn(screen, ProfileFetcher::new(), AvatarLoader::new());

    // Let the fetches land, mimic a user tapping edit, then leave.
    tokio::time::sleep(Duration::from_secs(2)).await;
    handle.edit_pressed();
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.dismiss().await;

    Ok(())
}
