//! This crate contains all shared UI for the workspace.
//!
//! Both launchers wrap their router in [`ClientProvider`] and route to the views in
//! [`views`]. The views hold no business rules themselves; they feed user events into
//! the state machines in `store` and perform whatever request those hand back.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{use_client, ClientContext, ClientProvider};

mod timer;

pub mod views;

pub const DIRECTORY_CSS: Asset = asset!("/assets/directory.css");

mod navbar;
pub use navbar::Navbar;
