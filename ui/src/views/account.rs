use dioxus::prelude::*;

use crate::account::activation::ActivationView;
use crate::account::reset_finish::ResetFinishView;
use crate::core::navigation::KeyParams;

#[component]
pub fn Activate(params: KeyParams) -> Element {
    rsx! {
        section { class: "page page-account",
            ActivationView { activation_key: params.key.unwrap_or_default() }
        }
    }
}

#[component]
pub fn ResetFinish(params: KeyParams) -> Element {
    rsx! {
        section { class: "page page-account",
            ResetFinishView { reset_key: params.key }
        }
    }
}
