//! Landing pages for the sign-in and registration destinations. Credential
//! entry is served by the account backend, not by this app.

use dioxus::prelude::*;

use crate::core::locale::use_language_key;

#[component]
pub fn Login() -> Element {
    let _language = use_language_key();
    rsx! {
        section { class: "page page-login",
            h1 { {crate::t!("page-login-title")} }
            p { {crate::t!("page-login-body")} }
        }
    }
}

#[component]
pub fn Register() -> Element {
    let _language = use_language_key();
    rsx! {
        section { class: "page page-register",
            h1 { {crate::t!("page-register-title")} }
            p { {crate::t!("page-register-body")} }
        }
    }
}
