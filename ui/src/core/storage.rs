//! Key/value persistence for session data.
//!
//! Views never touch storage directly; the session context reads and clears
//! the auth token through [`TokenStore`]. Every key is namespaced with the
//! configured prefix (`app-` by default) so entries from other apps on the
//! same origin are left alone.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::config::StorageConfig;
use crate::core::error::AppResult;

/// Storage key of the bearer token issued at sign-in.
pub const TOKEN_KEY: &str = "authenticationToken";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Applies the configured key prefix in front of another store.
#[derive(Clone)]
pub struct PrefixedStore {
    prefix: String,
    inner: Rc<dyn KeyValueStore>,
}

impl PrefixedStore {
    pub fn new(config: &StorageConfig, inner: Rc<dyn KeyValueStore>) -> Self {
        Self {
            prefix: config.key_prefix.clone(),
            inner,
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

impl KeyValueStore for PrefixedStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(&self.key(key))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(&self.key(key), value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(&self.key(key))
    }
}

/// Process-lifetime store. Backs the session store on native targets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    use directories::ProjectDirs;

    use super::KeyValueStore;
    use crate::core::error::{AppError, AppResult};

    const STORE_FILE: &str = "local-storage.json";

    /// JSON file under the platform data directory; stands in for
    /// `localStorage` on desktop.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn in_data_dir() -> AppResult<Self> {
            let dirs = ProjectDirs::from("com", "app", "loginapp")
                .ok_or_else(|| AppError::Storage("no home directory".into()))?;
            Ok(Self::new(dirs.data_dir().join(STORE_FILE)))
        }

        fn load(&self) -> AppResult<HashMap<String, String>> {
            if !self.path.exists() {
                return Ok(HashMap::new());
            }
            let raw = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&raw)?)
        }

        fn save(&self, entries: &HashMap<String, String>) -> AppResult<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
            Ok(())
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> AppResult<Option<String>> {
            Ok(self.load()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> AppResult<()> {
            let mut entries = self.load()?;
            entries.insert(key.to_string(), value.to_string());
            self.save(&entries)
        }

        fn remove(&self, key: &str) -> AppResult<()> {
            let mut entries = self.load()?;
            if entries.remove(key).is_some() {
                self.save(&entries)?;
            }
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserStore, BrowserStoreKind};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;
    use crate::core::error::{AppError, AppResult};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BrowserStoreKind {
        Local,
        Session,
    }

    /// `window.localStorage` / `window.sessionStorage`.
    #[derive(Debug, Clone, Copy)]
    pub struct BrowserStore {
        kind: BrowserStoreKind,
    }

    impl BrowserStore {
        pub fn new(kind: BrowserStoreKind) -> Self {
            Self { kind }
        }

        fn storage(&self) -> AppResult<web_sys::Storage> {
            let window =
                web_sys::window().ok_or_else(|| AppError::Storage("no window".into()))?;
            let storage = match self.kind {
                BrowserStoreKind::Local => window.local_storage(),
                BrowserStoreKind::Session => window.session_storage(),
            };
            storage
                .map_err(|err| AppError::Storage(format!("{err:?}")))?
                .ok_or_else(|| AppError::Storage(format!("{:?} storage unavailable", self.kind)))
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.storage()?
                .get_item(key)
                .map_err(|err| AppError::Storage(format!("{err:?}")))
        }

        fn set(&self, key: &str, value: &str) -> AppResult<()> {
            self.storage()?
                .set_item(key, value)
                .map_err(|err| AppError::Storage(format!("{err:?}")))
        }

        fn remove(&self, key: &str) -> AppResult<()> {
            self.storage()?
                .remove_item(key)
                .map_err(|err| AppError::Storage(format!("{err:?}")))
        }
    }
}

/// Reads and clears the auth token across the local ("remember me") and
/// session stores.
#[derive(Clone)]
pub struct TokenStore {
    local: PrefixedStore,
    session: PrefixedStore,
}

impl TokenStore {
    pub fn new(
        config: &StorageConfig,
        local: Rc<dyn KeyValueStore>,
        session: Rc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            local: PrefixedStore::new(config, local),
            session: PrefixedStore::new(config, session),
        }
    }

    /// Stores backed by the platform's natural persistence.
    pub fn for_platform(config: &StorageConfig) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(
                config,
                Rc::new(BrowserStore::new(BrowserStoreKind::Local)),
                Rc::new(BrowserStore::new(BrowserStoreKind::Session)),
            )
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let local: Rc<dyn KeyValueStore> = match FileStore::in_data_dir() {
                Ok(store) => Rc::new(store),
                Err(err) => {
                    tracing::warn!(%err, "falling back to in-memory local storage");
                    Rc::new(MemoryStore::default())
                }
            };
            Self::new(config, local, Rc::new(MemoryStore::default()))
        }
    }

    pub fn token(&self) -> Option<String> {
        let read = |store: &PrefixedStore| match store.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(%err, "could not read auth token");
                None
            }
        };
        read(&self.local).or_else(|| read(&self.session))
    }

    /// Remove the token everywhere. Failures are logged, never returned.
    pub fn clear(&self) {
        for store in [&self.local, &self.session] {
            if let Err(err) = store.remove(TOKEN_KEY) {
                tracing::warn!(%err, "could not clear auth token");
            }
        }
    }
}

impl api::TokenSource for TokenStore {
    fn token(&self) -> Option<String> {
        TokenStore::token(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stores() -> (Rc<MemoryStore>, Rc<MemoryStore>, TokenStore) {
        let local = Rc::new(MemoryStore::default());
        let session = Rc::new(MemoryStore::default());
        let tokens = TokenStore::new(&StorageConfig::default(), local.clone(), session.clone());
        (local, session, tokens)
    }

    #[test]
    fn prefixed_store_namespaces_keys() {
        let inner = Rc::new(MemoryStore::default());
        let store = PrefixedStore::new(&StorageConfig::default(), inner.clone());
        store.set("lang", "fr").unwrap();
        assert_eq!(inner.get("app-lang").unwrap().as_deref(), Some("fr"));
        assert_eq!(inner.get("lang").unwrap(), None);
        assert_eq!(store.get("lang").unwrap().as_deref(), Some("fr"));
    }

    #[test]
    fn token_prefers_local_then_session() {
        let (local, session, tokens) = stores();
        assert_eq!(tokens.token(), None);
        session.set("app-authenticationToken", "session-token").unwrap();
        assert_eq!(tokens.token().as_deref(), Some("session-token"));
        local.set("app-authenticationToken", "local-token").unwrap();
        assert_eq!(tokens.token().as_deref(), Some("local-token"));
    }

    #[test]
    fn clear_removes_token_from_both_stores() {
        let (local, session, tokens) = stores();
        local.set("app-authenticationToken", "a").unwrap();
        session.set("app-authenticationToken", "b").unwrap();
        tokens.clear();
        assert_eq!(tokens.token(), None);
        assert_eq!(local.get("app-authenticationToken").unwrap(), None);
        assert_eq!(session.get("app-authenticationToken").unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!(
            "loginapp-store-{}.json",
            std::process::id()
        ));
        let store = FileStore::new(&path);
        store.set("app-authenticationToken", "t").unwrap();
        assert_eq!(
            FileStore::new(&path).get("app-authenticationToken").unwrap().as_deref(),
            Some("t")
        );
        store.remove("app-authenticationToken").unwrap();
        assert_eq!(store.get("app-authenticationToken").unwrap(), None);
        let _ = std::fs::remove_file(&path);
    }
}
