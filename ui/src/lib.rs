//! Shared UI crate for Loginapp. Every view, its state and the session
//! plumbing live here; platform crates only own routing and launch.

pub mod account;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Top navigation bar (components/navbar.rs)
    mod navbar;
    pub use navbar::{NavbarState, NavbarView};

    // Locale picker embedded in the navbar (components/language.rs)
    mod language;
    pub use language::{LanguageState, LanguageSwitcher};
}
