//! Shared test doubles and a loopback profile server.
//!
//! The doubles record every call so tests can assert both presence and
//! absence of renders and navigations; the server is a real socket so
//! the fetch paths are exercised end to end.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use portico_model::Profile;
use portico_screen::routing::Router;
use portico_screen::surface::Surface;
use url::Url;

/// Records every render call.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub profiles: Arc<Mutex<Vec<Profile>>>,
    pub avatars: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl RecordingSurface {
    pub fn profile_count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    pub fn avatar_count(&self) -> usize {
        self.avatars.lock().unwrap().len()
    }
}

impl Surface for RecordingSurface {
    fn show_profile(&mut self, profile: &Profile) {
        self.profiles.lock().unwrap().push(profile.clone());
    }

    fn show_avatar(&mut self, bytes: &[u8]) {
        self.avatars.lock().unwrap().push(bytes.to_vec());
    }
}

/// Records every navigation request.
#[derive(Debug, Default)]
pub struct RecordingRouter {
    pub routed: Mutex<Vec<Url>>,
}

impl RecordingRouter {
    pub fn routed_urls(&self) -> Vec<Url> {
        self.routed.lock().unwrap().clone()
    }
}

impl Router for RecordingRouter {
    fn route(&self, url: Url) {
        self.routed.lock().unwrap().push(url);
    }
}

/// Bind a loopback listener on a free port.
///
/// Split from [`serve_on`] so a test can learn the address before it
/// builds response bodies that refer back to the server.
pub async fn bind_listener() -> (tokio::net::TcpListener, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    (listener, addr)
}

/// Serve `app` on an already-bound listener.
pub fn serve_on(listener: tokio::net::TcpListener, app: axum::Router) {
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });
}

/// Serve `app` on a loopback port and return its address.
pub async fn spawn_server(app: axum::Router) -> SocketAddr {
    let (listener, addr) = bind_listener().await;
    serve_on(listener, app);
    addr
}

/// Poll until `condition` holds or `timeout` elapses.
pub async fn wait_until<F: Fn() -> bool>(condition: F, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// A real 1x1 PNG, encoded rather than hand-written.
pub fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([200, 30, 30, 255]));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .expect("encode png fixture");
    bytes
}
