//! Composition root: the collaborators every view receives through context.

use std::rc::Rc;

use api::{AccountApi, HttpAccountApi};
use dioxus::prelude::*;
use tracing::warn;

use crate::core::config::AppConfig;
use crate::core::locale::{EmbeddedLanguages, LanguageCode, LanguageService};
use crate::core::session::SessionContext;
use crate::core::storage::TokenStore;
use crate::i18n;

#[derive(Clone)]
pub struct AppServices {
    pub accounts: Rc<dyn AccountApi>,
    pub session: SessionContext,
    pub languages: Rc<dyn LanguageService>,
    session_revision: Signal<u64>,
}

impl AppServices {
    pub fn new(config: &AppConfig) -> Self {
        let tokens = TokenStore::for_platform(&config.storage);
        let accounts = Rc::new(HttpAccountApi::new(config.api.clone(), Rc::new(tokens.clone())));
        Self::with_collaborators(accounts, tokens, Rc::new(EmbeddedLanguages))
    }

    /// Must run inside a Dioxus runtime (the revision is a signal).
    pub fn with_collaborators(
        accounts: Rc<dyn AccountApi>,
        tokens: TokenStore,
        languages: Rc<dyn LanguageService>,
    ) -> Self {
        Self {
            session: SessionContext::new(accounts.clone(), tokens),
            accounts,
            languages,
            session_revision: Signal::new(0),
        }
    }

    /// Reactive view of [`SessionContext::revision`]. Reading it subscribes
    /// the current component to authentication changes.
    pub fn session_revision(&self) -> u64 {
        (self.session_revision)()
    }

    /// Mirror the session revision into the reactive signal. Call after any
    /// operation that may have changed the authentication state.
    pub fn publish_session(&self) {
        let mut signal = self.session_revision;
        let revision = self.session.revision();
        if *signal.peek() != revision {
            signal.set(revision);
        }
    }
}

/// Provide [`AppServices`] and the language code signal to the whole tree.
/// Call once from the platform's root component, after `i18n::init()`.
pub fn use_app_services(config: AppConfig) -> AppServices {
    use_provided_services(move || AppServices::new(&config))
}

/// Like [`use_app_services`] with caller-built services. The identity is
/// resolved once here so every route starts with a settled session.
pub fn use_provided_services(build: impl FnOnce() -> AppServices) -> AppServices {
    let code = use_signal(i18n::current_language);
    use_context_provider(|| LanguageCode(code));
    let services = use_context_provider(build);

    use_future({
        let services = services.clone();
        move || {
            let services = services.clone();
            async move {
                if let Err(err) = services.session.identity(false).await {
                    warn!(%err, "could not resolve identity at startup");
                }
                services.publish_session();
            }
        }
    });

    services
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}


#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use dioxus::prelude::*;

    use super::testing::{settle, use_test_services, Harness};
    use crate::core::session::testing::ScriptedAccounts;

    #[component]
    fn BareRoot() -> Element {
        use_test_services();
        rsx! { main {} }
    }

    #[tokio::test]
    async fn root_resolves_identity_once_without_any_view() {
        let accounts = Rc::new(ScriptedAccounts::signed_in("bob"));
        let harness = Harness::new(accounts.clone());
        let mut dom = harness.mount(BareRoot);
        settle(&mut dom).await;

        let services = harness.services();
        assert_eq!(accounts.account_fetches.get(), 1);
        assert!(services.session.is_authenticated());
        assert_eq!(dom.in_runtime(|| services.session_revision()), 1);
    }

    #[tokio::test]
    async fn anonymous_root_stays_signed_out() {
        let accounts = Rc::new(ScriptedAccounts::default());
        let harness = Harness::new(accounts.clone());
        let mut dom = harness.mount(BareRoot);
        settle(&mut dom).await;

        let services = harness.services();
        assert_eq!(accounts.account_fetches.get(), 1);
        assert!(!services.session.is_authenticated());
        assert_eq!(dom.in_runtime(|| services.session_revision()), 0);
    }
}
