use api::{Account, ApiResult};
use dioxus::prelude::*;

use crate::core::locale::use_language_key;
use crate::core::navigation::{Destination, Navigator, RouterNavigator};
use crate::core::services::use_services;
use crate::core::session::SessionContext;

/// Landing page state. `account` holds a transient copy of the identity
/// record; authentication is re-read from the session on every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    pub account: Option<Account>,
    loaded: bool,
}

impl HomeState {
    /// Apply the result of an identity lookup. Failures count as "nobody".
    pub fn apply_identity(&mut self, identity: ApiResult<Option<Account>>) {
        self.account = identity.unwrap_or_else(|err| {
            tracing::warn!(%err, "identity lookup failed");
            None
        });
        self.loaded = true;
    }

    /// `None` until the first identity lookup settles, then the live flag.
    pub fn is_authenticated(&self, session: &SessionContext) -> Option<bool> {
        self.loaded.then(|| session.is_authenticated())
    }

    pub fn login(&self, navigator: &dyn Navigator) {
        navigator.go(Destination::Login);
    }

    pub fn logout(&self, session: &SessionContext, navigator: &dyn Navigator) {
        session.logout();
        navigator.go(Destination::Login);
    }

    pub fn register(&self, navigator: &dyn Navigator) {
        navigator.go(Destination::Register);
    }
}

#[component]
pub fn Home() -> Element {
    let services = use_services();
    let state = use_signal(HomeState::default);
    let _language = use_language_key();

    // Re-fetch on mount and whenever the session signs in or out.
    let _identity = use_resource({
        let services = services.clone();
        move || {
            let _revision = services.session_revision();
            let services = services.clone();
            let mut state = state;
            async move {
                let identity = services.session.identity(false).await;
                state.with_mut(|s| s.apply_identity(identity));
                services.publish_session();
            }
        }
    });

    let snapshot = state();
    let authenticated = snapshot.is_authenticated(&services.session);
    let on_logout = move |_: MouseEvent| {
        state.peek().logout(&services.session, &RouterNavigator);
        services.publish_session();
    };

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }

            {match (authenticated, snapshot.account.as_ref()) {
                (None, _) => rsx! {
                    p { class: "page-home__status", {crate::t!("home-loading")} }
                },
                (Some(true), Some(account)) => rsx! {
                    div { class: "alert alert--success",
                        {crate::t!("home-logged-in", login = account.login.as_str())}
                    }
                    button { class: "button", onclick: on_logout, {crate::t!("nav-logout")} }
                },
                _ => rsx! {
                    p { class: "page-home__status", {crate::t!("home-signed-out")} }
                    div { class: "page-home__cta",
                        p { {crate::t!("home-login-prompt")} }
                        button {
                            class: "button button--primary",
                            onclick: move |_| state.peek().login(&RouterNavigator),
                            {crate::t!("nav-login")}
                        }
                        p { {crate::t!("home-register-prompt")} }
                        button {
                            class: "button",
                            onclick: move |_| state.peek().register(&RouterNavigator),
                            {crate::t!("nav-register")}
                        }
                    }
                },
            }}
        }
    }
}
