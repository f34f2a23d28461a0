use std::rc::Rc;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::types::{Account, KeyAndPassword};

const BEARER: &str = "Bearer ";

/// Account operations the views depend on.
///
/// Futures are `?Send`: the browser runtime is a single-threaded event loop.
#[async_trait(?Send)]
pub trait AccountApi {
    /// Activate a freshly registered account with the key from the activation mail.
    async fn activate_account(&self, key: &str) -> ApiResult<()>;

    /// Complete a password reset started from the "forgot password" mail.
    async fn reset_password_finish(&self, request: &KeyAndPassword) -> ApiResult<()>;

    /// Fetch the identity of the current session.
    async fn fetch_account(&self) -> ApiResult<Account>;
}

/// Supplies the session token attached to outgoing requests.
pub trait TokenSource {
    fn token(&self) -> Option<String>;
}

/// [`AccountApi`] backed by the REST endpoints under `/api`.
#[derive(Clone)]
pub struct HttpAccountApi {
    client: Client,
    config: ApiConfig,
    tokens: Rc<dyn TokenSource>,
}

impl HttpAccountApi {
    pub fn new(config: ApiConfig, tokens: Rc<dyn TokenSource>) -> Self {
        Self {
            client: Client::new(),
            config,
            tokens,
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.token() {
            Some(token) => request.header(AUTHORIZATION, format!("{BEARER}{token}")),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            debug!(status = status.as_u16(), url = %response.url(), "account api rejected request");
            Err(ApiError::from_status(status.as_u16()))
        }
    }
}

#[async_trait(?Send)]
impl AccountApi for HttpAccountApi {
    async fn activate_account(&self, key: &str) -> ApiResult<()> {
        let request = self
            .client
            .get(self.config.endpoint("/api/activate"))
            .query(&[("key", key)]);
        self.send(request).await.map(|_| ())
    }

    async fn reset_password_finish(&self, request: &KeyAndPassword) -> ApiResult<()> {
        let request = self
            .client
            .post(self.config.endpoint("/api/account/reset_password/finish"))
            .json(request);
        self.send(request).await.map(|_| ())
    }

    async fn fetch_account(&self) -> ApiResult<Account> {
        let request = self.client.get(self.config.endpoint("/api/account"));
        let response = self.send(request).await?;
        Ok(response.json::<Account>().await?)
    }
}
