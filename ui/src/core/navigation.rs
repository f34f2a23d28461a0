//! Navigation between named screens.
//!
//! The `ui` crate cannot name each platform's `Route` enum, so platforms
//! register a [`NavBuilder`] once at startup (before rendering the router).
//! Views only ever ask for a [`Destination`].
//!
//! ```ignore
//! use ui::core::navigation::{register_nav, Destination, NavBuilder};
//!
//! fn go(destination: Destination) {
//!     navigator().push(match destination {
//!         Destination::Home => Route::Home {},
//!         Destination::Login => Route::Login {},
//!         Destination::Register => Route::Register {},
//!     });
//! }
//!
//! register_nav(NavBuilder { go, home_link: |label| rsx!(Link { to: Route::Home {}, "{label}" }) });
//! ```

use std::fmt;

use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Register,
}

impl Destination {
    pub fn state_name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Register => "register",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.state_name())
    }
}

pub trait Navigator {
    fn go(&self, destination: Destination);
}

pub struct NavBuilder {
    /// Push the platform route for `destination`. Called from event handlers.
    pub go: fn(destination: Destination),
    /// Link to the landing page wrapping the given label (navbar brand).
    pub home_link: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the platform navigation. Later calls are ignored.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

pub(crate) fn home_link(label: &str) -> Option<Element> {
    NAV_BUILDER.get().map(|b| (b.home_link)(label))
}

/// [`Navigator`] forwarding to the registered platform router.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
    fn go(&self, destination: Destination) {
        match NAV_BUILDER.get() {
            Some(builder) => {
                tracing::debug!(%destination, "navigating");
                (builder.go)(destination);
            }
            None => tracing::warn!(%destination, "navigation requested before register_nav"),
        }
    }
}

/// Query arguments of the e-mail link routes (`/activate?key=..`,
/// `/reset/finish?key=..`).
///
/// Platforms spread it into their route (`"/activate?:..params"`); the router
/// builds it through `From<&str>` and renders it back through `Display`. Values
/// are form-urlencoded both ways. An empty `key=` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyParams {
    pub key: Option<String>,
}

impl From<&str> for KeyParams {
    fn from(query: &str) -> Self {
        let key = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .find(|(name, _)| name == "key")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());
        Self { key }
    }
}

impl fmt::Display for KeyParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => f.write_str(
                &form_urlencoded::Serializer::new(String::new())
                    .append_pair("key", key)
                    .finish(),
            ),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::{Destination, Navigator};

    #[derive(Default)]
    pub struct RecordingNavigator {
        pub visited: RefCell<Vec<Destination>>,
    }

    impl Navigator for RecordingNavigator {
        fn go(&self, destination: Destination) {
            self.visited.borrow_mut().push(destination);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_names_are_stable() {
        assert_eq!(Destination::Login.state_name(), "login");
        assert_eq!(Destination::Register.state_name(), "register");
        assert_eq!(Destination::Home.to_string(), "home");
    }

    #[test]
    fn key_is_read_from_query() {
        assert_eq!(KeyParams::from("key=12345").key.as_deref(), Some("12345"));
        assert_eq!(
            KeyParams::from("?lang=fr&key=abc").key.as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn empty_or_absent_key_is_missing() {
        assert_eq!(KeyParams::from("").key, None);
        assert_eq!(KeyParams::from("key=").key, None);
        assert_eq!(KeyParams::from("keyring=1").key, None);
    }

    #[test]
    fn escaped_key_is_decoded_and_reencoded() {
        let params = KeyParams::from("?key=a%2Bb%2F%3D&lang=fr");
        assert_eq!(params.key.as_deref(), Some("a+b/="));
        assert_eq!(params.to_string(), "key=a%2Bb%2F%3D");
        assert_eq!(KeyParams::from(params.to_string().as_str()), params);
    }

    #[test]
    fn params_render_back_to_query() {
        let params = KeyParams::from("key=abc");
        assert_eq!(params.to_string(), "key=abc");
        assert_eq!(KeyParams::default().to_string(), "");
    }
}
