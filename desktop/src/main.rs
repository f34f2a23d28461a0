#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
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
    #[layout(DesktopNavbar)]
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
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

fn install_logger() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already installed: {err}");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    install_logger();
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Loginapp – v{}", env!("CARGO_PKG_VERSION"))),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    install_logger();
    LaunchBuilder::server().launch(App);
}

fn go(destination: Destination) {
    navigator().push(match destination {
        Destination::Home => Route::Home {},
        Destination::Login => Route::Login {},
        Destination::Register => Route::Register {},
    });
}

fn home_link(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    use_app_services(AppConfig::default());
    register_nav(NavBuilder { go, home_link });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A desktop-specific Router around the shared `NavbarView` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        NavbarView { }

        Outlet::<Route> {}
    }
}
