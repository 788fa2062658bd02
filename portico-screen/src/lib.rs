//! Portico profile screen
//!
//! This crate is the natively rendered replacement for the hybrid shell's
//! web profile page: it resolves the screen's JSON endpoint from its
//! source URL, fetches and decodes the profile payload, renders it
//! through the host's layout seam, and hands the edit action back to the
//! host navigator.
//!
//! Notes
//! - Presentation and navigation stay behind the [`surface`] and
//!   [`routing`] traits; this crate owns the lifecycle, not the widgets.
//! - All screen-state mutation is serialized onto one task by the
//!   [`runtime`] module.

pub mod avatar;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod message;
pub mod routing;
pub mod runtime;
pub mod state;
pub mod surface;
pub mod update;
