//! Language catalog and the two locale collaborators the switcher drives.

use async_trait::async_trait;
use dioxus::prelude::*;

use crate::core::error::AppResult;
use crate::i18n;

/// Short code identifying a locale (`"en"`, `"fr"`...).
pub type LanguageKey = String;

#[async_trait(?Send)]
pub trait LanguageService {
    async fn get_all(&self) -> AppResult<Vec<LanguageKey>>;
}

/// Languages with an embedded translation catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLanguages;

#[async_trait(?Send)]
impl LanguageService for EmbeddedLanguages {
    async fn get_all(&self) -> AppResult<Vec<LanguageKey>> {
        Ok(i18n::available_languages())
    }
}

/// Active translation catalog.
pub trait TranslationLocale {
    fn use_language(&self, key: &str);
}

/// Active date/number locale.
pub trait FormatLocale {
    fn set(&self, key: &str);
}

/// Switches the Fluent loader behind `t!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FluentTranslation;

impl TranslationLocale for FluentTranslation {
    fn use_language(&self, key: &str) {
        if let Err(err) = i18n::set_language(key) {
            tracing::warn!(%key, %err, "could not switch translation catalog");
        }
    }
}

/// App-wide language code signal provided through context. Views subscribed
/// to it re-render (and re-format) when it changes.
#[derive(Clone, Copy)]
pub struct LanguageCode(pub Signal<String>);

/// Current language key. Reading it subscribes the calling component, so its
/// `t!` lookups run again after a switch.
pub fn use_language_key() -> LanguageKey {
    let LanguageCode(code) = use_context::<LanguageCode>();
    code()
}

impl FormatLocale for LanguageCode {
    fn set(&self, key: &str) {
        let mut code = self.0;
        code.set(key.to_string());
    }
}
