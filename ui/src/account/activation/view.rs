use dioxus::prelude::*;

use crate::core::locale::use_language_key;
use crate::core::navigation::RouterNavigator;
use crate::core::services::use_services;

use super::state::ActivationState;

/// Activates the account identified by `activation_key` as soon as it mounts.
#[component]
pub fn ActivationView(activation_key: String) -> Element {
    let services = use_services();
    let _language = use_language_key();
    let state = use_signal(|| ActivationState::new(activation_key.clone()));

    // Runs once per mount; the task is dropped with the view.
    use_future(move || {
        let accounts = services.accounts.clone();
        let mut state = state;
        async move {
            let Some(key) = state.with_mut(ActivationState::begin) else {
                return;
            };
            let outcome = accounts.activate_account(&key).await;
            state.with_mut(|s| s.complete(outcome));
        }
    });

    let snapshot = state();

    rsx! {
        div { class: "account-card account-activation",
            h1 { {crate::t!("activate-title")} }

            if snapshot.is_pending() {
                p { class: "alert alert--info", {crate::t!("activate-pending")} }
            }
            if snapshot.success().is_some() {
                div { class: "alert alert--success",
                    {crate::t!("activate-success")}
                    " "
                    button {
                        class: "button button--link",
                        onclick: move |_| state.peek().login(&RouterNavigator),
                        {crate::t!("nav-login")}
                    }
                }
            }
            if snapshot.error().is_some() {
                div { class: "alert alert--danger", {crate::t!("activate-error")} }
            }
        }
    }
}
