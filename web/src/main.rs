use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::NavbarView;
use ui::core::config::AppConfig;
use ui::core::navigation::{register_nav, Destination, KeyParams, NavBuilder};
use ui::core::services::use_app_services;
use ui::views::{Activate, Home, Login, Register, ResetFinish};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/activate?:..params")]
    Activate { params: KeyParams },
    #[route("/reset/finish?:..params")]
    ResetFinish { params: KeyParams },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn go(destination: Destination) {
    navigator().push(match destination {
        Destination::Home => Route::Home {},
        Destination::Login => Route::Login {},
        Destination::Register => Route::Register {},
    });
}

fn home_link(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already installed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    use_app_services(AppConfig::default());
    register_nav(NavBuilder { go, home_link });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `NavbarView` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        NavbarView {}
        Outlet::<Route> {}
    }
}
