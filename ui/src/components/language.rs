use dioxus::prelude::*;

use crate::core::locale::{
    use_language_key, FluentTranslation, FormatLocale, LanguageCode, LanguageKey,
    TranslationLocale,
};
use crate::core::services::use_services;
use crate::t;

/// Languages offered by the switcher. `None` until the catalog answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageState {
    pub languages: Option<Vec<LanguageKey>>,
}

impl LanguageState {
    /// Forward `key` verbatim to both locale collaborators. Neither reports
    /// back; failures are handled (and logged) on their side.
    pub fn change_language(
        &self,
        key: &str,
        translation: &dyn TranslationLocale,
        format: &dyn FormatLocale,
    ) {
        translation.use_language(key);
        format.set(key);
    }
}

#[component]
pub fn LanguageSwitcher() -> Element {
    let services = use_services();
    let state = use_signal(LanguageState::default);
    let current = use_language_key();
    let language_code = use_context::<LanguageCode>();

    use_future(move || {
        let languages = services.languages.clone();
        let mut state = state;
        async move {
            match languages.get_all().await {
                Ok(list) => state.with_mut(|s| s.languages = Some(list)),
                Err(err) => tracing::warn!(%err, "could not load languages"),
            }
        }
    });

    let on_change = move |evt: FormEvent| {
        let key = evt.value();
        tracing::info!(%key, "switching language");
        state
            .peek()
            .change_language(&key, &FluentTranslation, &language_code);
    };

    let snapshot = state();
    let Some(languages) = snapshot.languages else {
        return rsx! {
            div { class: "navbar__locale navbar__locale--loading", {t!("language-loading")} }
        };
    };
    if languages.len() < 2 {
        return rsx! {};
    }

    rsx! {
        div { class: "navbar__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select {
                id: "locale-select",
                value: "{current}",
                oninput: on_change,
                for code in languages {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
