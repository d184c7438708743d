//! This crate contains all shared UI for the workspace: the auth context, site chrome,
//! form primitives and catalog cards.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{sign_out, use_auth, use_session, AuthProvider, AuthState};

pub mod alert;

mod header;
pub use header::Header;

mod footer;
pub use footer::Footer;

mod cards;
pub use cards::{DetailRow, ScholarshipCard, SchoolCard};

mod placeholder;
pub use placeholder::ComingSoon;
