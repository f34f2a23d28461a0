//! Session context: who is signed in, and how to sign out.
//!
//! One [`SessionContext`] is created by the composition root and handed to
//! every view through Dioxus context. Views read the authentication flag
//! live (never a snapshot) and call [`SessionContext::logout`]; nothing else
//! mutates it.

use std::cell::RefCell;
use std::rc::Rc;

use api::{Account, AccountApi, ApiError, ApiResult};
use tracing::{debug, info};

use crate::core::storage::TokenStore;

#[derive(Debug, Default)]
struct SessionState {
    identity: Option<Account>,
    authenticated: bool,
    revision: u64,
}

#[derive(Clone)]
pub struct SessionContext {
    state: Rc<RefCell<SessionState>>,
    accounts: Rc<dyn AccountApi>,
    tokens: TokenStore,
}

impl SessionContext {
    pub fn new(accounts: Rc<dyn AccountApi>, tokens: TokenStore) -> Self {
        Self {
            state: Rc::new(RefCell::new(SessionState::default())),
            accounts,
            tokens,
        }
    }

    /// Current identity, fetched from the backend unless cached.
    ///
    /// `Unauthorized` resolves to `Ok(None)`. Any other failure also clears
    /// the cached identity and is handed back to the caller.
    pub async fn identity(&self, force: bool) -> ApiResult<Option<Account>> {
        if !force {
            if let Some(identity) = self.state.borrow().identity.clone() {
                return Ok(Some(identity));
            }
        }

        match self.accounts.fetch_account().await {
            Ok(account) => {
                debug!(login = %account.login, "identity resolved");
                self.authenticate(Some(account.clone()));
                Ok(Some(account))
            }
            Err(ApiError::Unauthorized) => {
                self.authenticate(None);
                Ok(None)
            }
            Err(err) => {
                self.authenticate(None);
                Err(err)
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().authenticated
    }

    /// Replace the cached identity; `None` means signed out.
    pub fn authenticate(&self, identity: Option<Account>) {
        let mut state = self.state.borrow_mut();
        let authenticated = identity.is_some();
        if state.authenticated != authenticated {
            state.revision += 1;
        }
        state.authenticated = authenticated;
        state.identity = identity;
    }

    pub fn logout(&self) {
        info!("signing out");
        self.tokens.clear();
        self.authenticate(None);
    }

    /// Bumped every time the authenticated flag flips.
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }
}


#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::testing::ScriptedAccounts;
    use super::*;
    use crate::core::config::StorageConfig;
    use crate::core::storage::{KeyValueStore, MemoryStore};

    fn session(accounts: Rc<ScriptedAccounts>) -> (SessionContext, Rc<MemoryStore>) {
        let local = Rc::new(MemoryStore::default());
        let tokens = TokenStore::new(
            &StorageConfig::default(),
            local.clone(),
            Rc::new(MemoryStore::default()),
        );
        (SessionContext::new(accounts, tokens), local)
    }

    #[test]
    fn identity_is_cached_until_forced() {
        let accounts = Rc::new(ScriptedAccounts::signed_in("bob"));
        let (session, _) = session(accounts.clone());

        let first = block_on(session.identity(false)).unwrap();
        assert_eq!(first.map(|a| a.login).as_deref(), Some("bob"));
        assert!(session.is_authenticated());

        block_on(session.identity(false)).unwrap();
        assert_eq!(accounts.account_fetches.get(), 1);

        block_on(session.identity(true)).unwrap();
        assert_eq!(accounts.account_fetches.get(), 2);
    }

    #[test]
    fn unauthorized_resolves_to_no_identity() {
        let accounts = Rc::new(ScriptedAccounts::default());
        let (session, _) = session(accounts);
        assert_eq!(block_on(session.identity(false)), Ok(None));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn other_failures_clear_identity_and_propagate() {
        let accounts = Rc::new(ScriptedAccounts::signed_in("bob"));
        let (session, _) = session(accounts.clone());
        block_on(session.identity(false)).unwrap();

        accounts.account.replace(Some(Err(ApiError::Status(502))));
        assert_eq!(block_on(session.identity(true)), Err(ApiError::Status(502)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn logout_clears_token_and_flag() {
        let accounts = Rc::new(ScriptedAccounts::signed_in("bob"));
        let (session, local) = session(accounts);
        local.set("app-authenticationToken", "jwt").unwrap();
        block_on(session.identity(false)).unwrap();

        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(local.get("app-authenticationToken").unwrap(), None);
    }

    #[test]
    fn revision_moves_only_when_flag_flips() {
        let accounts = Rc::new(ScriptedAccounts::signed_in("bob"));
        let (session, _) = session(accounts);
        assert_eq!(session.revision(), 0);

        block_on(session.identity(false)).unwrap();
        assert_eq!(session.revision(), 1);
        block_on(session.identity(true)).unwrap();
        assert_eq!(session.revision(), 1);

        session.logout();
        assert_eq!(session.revision(), 2);
        session.logout();
        assert_eq!(session.revision(), 2);
    }
}
