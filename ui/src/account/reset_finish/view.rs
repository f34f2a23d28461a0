use dioxus::prelude::*;

use crate::core::locale::use_language_key;
use crate::core::navigation::RouterNavigator;
use crate::core::services::use_services;

use super::state::{ResetFinishState, Submission};

#[component]
pub fn ResetFinishView(reset_key: Option<String>) -> Element {
    let services = use_services();
    let _language = use_language_key();
    let mut state = use_signal(|| ResetFinishState::new(reset_key.clone()));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Submission::Ready(request) = state.with_mut(ResetFinishState::finish_reset) else {
            return;
        };
        let accounts = services.accounts.clone();
        spawn(async move {
            let outcome = accounts.reset_password_finish(&request).await;
            state.with_mut(|s| s.complete(outcome));
        });
    };

    let snapshot = state();
    let password = snapshot.password.clone();
    let confirm_password = snapshot.confirm_password.clone();
    let show_form = !snapshot.key_missing() && snapshot.success().is_none();

    rsx! {
        div { class: "account-card account-reset",
            h1 { {crate::t!("reset-title")} }

            if snapshot.key_missing() {
                div { class: "alert alert--danger", {crate::t!("reset-key-missing")} }
            }
            if snapshot.error().is_some() {
                div { class: "alert alert--danger", {crate::t!("reset-error")} }
            }
            if snapshot.do_not_match().is_some() {
                div { class: "alert alert--danger", {crate::t!("reset-do-not-match")} }
            }
            if snapshot.success().is_some() {
                div { class: "alert alert--success",
                    {crate::t!("reset-success")}
                    " "
                    button {
                        class: "button button--link",
                        onclick: move |_| state.peek().login(&RouterNavigator),
                        {crate::t!("nav-login")}
                    }
                }
            }

            if show_form {
                p { {crate::t!("reset-prompt")} }
                form { class: "account-form", onsubmit: on_submit,
                    label { r#for: "password", {crate::t!("reset-password-label")} }
                    input {
                        id: "password",
                        r#type: "password",
                        value: "{password}",
                        // One-shot focus once the field is in the DOM.
                        onmounted: move |evt: MountedEvent| async move {
                            if let Err(err) = evt.data().set_focus(true).await {
                                tracing::debug!(?err, "could not focus password field");
                            }
                        },
                        oninput: move |evt| state.with_mut(|s| s.password = evt.value()),
                    }
                    label { r#for: "confirmPassword", {crate::t!("reset-confirm-label")} }
                    input {
                        id: "confirmPassword",
                        r#type: "password",
                        value: "{confirm_password}",
                        oninput: move |evt| state.with_mut(|s| s.confirm_password = evt.value()),
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: snapshot.is_pending(),
                        if snapshot.is_pending() {
                            {crate::t!("reset-pending")}
                        } else {
                            {crate::t!("reset-submit")}
                        }
                    }
                }
            }
        }
    }
}
