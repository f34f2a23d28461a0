use dioxus::prelude::*;

use crate::components::LanguageSwitcher;
use crate::core::locale::use_language_key;
use crate::core::navigation::{self, Destination, Navigator, RouterNavigator};
use crate::core::services::use_services;
use crate::core::session::SessionContext;
use crate::t;

// Navbar stylesheet, inlined so native release builds need no asset directory.
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Collapse state of the navbar. Authentication is never stored here; it is
/// read from the session each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarState {
    pub is_navbar_collapsed: bool,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self {
            is_navbar_collapsed: true,
        }
    }
}

impl NavbarState {
    pub fn toggle_navbar(&mut self) {
        self.is_navbar_collapsed = !self.is_navbar_collapsed;
    }

    pub fn collapse_navbar(&mut self) {
        self.is_navbar_collapsed = true;
    }

    pub fn login(&mut self, navigator: &dyn Navigator) {
        self.collapse_navbar();
        navigator.go(Destination::Login);
    }

    pub fn logout(&mut self, session: &SessionContext, navigator: &dyn Navigator) {
        self.collapse_navbar();
        session.logout();
        navigator.go(Destination::Login);
    }
}

#[component]
pub fn NavbarView() -> Element {
    let services = use_services();
    let mut state = use_signal(NavbarState::default);
    let _language = use_language_key();

    // Subscribe to sign-in / sign-out so the auth-dependent links refresh.
    let _revision = services.session_revision();
    let is_authenticated = services.session.is_authenticated();

    let on_logout = move |_: MouseEvent| {
        state.with_mut(|s| s.logout(&services.session, &RouterNavigator));
        services.publish_session();
    };

    let collapsed = state().is_navbar_collapsed;
    let links_class = if collapsed {
        "navbar__links navbar__links--collapsed"
    } else {
        "navbar__links"
    };

    let brand_label = t!("nav-home");
    let brand = navigation::home_link(&brand_label);
    let tagline = t!("tagline");

    rsx! {
        document::Style { "{NAVBAR_CSS_INLINE}" }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Loginapp" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                button {
                    class: "navbar__toggle",
                    aria_label: t!("nav-toggle"),
                    aria_expanded: "{!collapsed}",
                    onclick: move |_| state.with_mut(NavbarState::toggle_navbar),
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                }

                nav { class: "{links_class}",
                    if let Some(link) = brand {
                        span {
                            class: "navbar__link",
                            onclick: move |_| state.with_mut(NavbarState::collapse_navbar),
                            {link}
                        }
                    }
                    if is_authenticated {
                        button {
                            class: "navbar__link button--link",
                            onclick: on_logout,
                            {t!("nav-logout")}
                        }
                    } else {
                        button {
                            class: "navbar__link button--link",
                            onclick: move |_| state.with_mut(|s| s.login(&RouterNavigator)),
                            {t!("nav-login")}
                        }
                    }
                }

                LanguageSwitcher {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;
    use crate::core::config::StorageConfig;
    use crate::core::navigation::testing::RecordingNavigator;
    use crate::core::services::testing::{settle, use_test_services, Harness};
    use crate::core::session::testing::ScriptedAccounts;
    use crate::core::storage::{MemoryStore, TokenStore};

    fn signed_in_session() -> SessionContext {
        let tokens = TokenStore::new(
            &StorageConfig::default(),
            Rc::new(MemoryStore::default()),
            Rc::new(MemoryStore::default()),
        );
        let session = SessionContext::new(Rc::new(ScriptedAccounts::signed_in("bob")), tokens);
        block_on(session.identity(false)).unwrap();
        session
    }

    #[test]
    fn starts_collapsed() {
        assert!(NavbarState::default().is_navbar_collapsed);
    }

    #[test]
    fn toggling_twice_restores_state() {
        let mut state = NavbarState::default();
        state.toggle_navbar();
        assert!(!state.is_navbar_collapsed);
        state.toggle_navbar();
        assert!(state.is_navbar_collapsed);
    }

    #[test]
    fn collapse_is_idempotent() {
        let mut state = NavbarState::default();
        state.toggle_navbar();
        state.collapse_navbar();
        state.collapse_navbar();
        assert!(state.is_navbar_collapsed);
    }

    #[test]
    fn login_collapses_then_navigates() {
        let navigator = RecordingNavigator::default();
        let mut state = NavbarState::default();
        state.toggle_navbar();
        state.login(&navigator);
        assert!(state.is_navbar_collapsed);
        assert_eq!(*navigator.visited.borrow(), vec![Destination::Login]);
    }

    #[test]
    fn logout_collapses_signs_out_and_navigates() {
        let session = signed_in_session();
        assert!(session.is_authenticated());
        let navigator = RecordingNavigator::default();
        let mut state = NavbarState::default();
        state.toggle_navbar();

        state.logout(&session, &navigator);

        assert!(state.is_navbar_collapsed);
        assert!(!session.is_authenticated());
        assert_eq!(*navigator.visited.borrow(), vec![Destination::Login]);
    }

    #[component]
    fn NavbarOnly() -> Element {
        use_test_services();
        rsx! { NavbarView {} }
    }

    #[tokio::test]
    async fn signed_in_state_reaches_navbar_without_home() {
        let accounts = Rc::new(ScriptedAccounts::signed_in("bob"));
        let harness = Harness::new(accounts.clone());
        let mut dom = harness.mount(NavbarOnly);
        settle(&mut dom).await;

        assert!(harness.services().session.is_authenticated());
        assert!(dioxus_ssr::render(&dom).contains(&t!("nav-logout")));
        assert_eq!(accounts.account_fetches.get(), 1);
    }
}
