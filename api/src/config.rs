//! Client configuration.

/// Base URL used when `LOGINAPP_API_BASE` is not set at build time.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the backend location from the build environment.
    ///
    /// WASM bundles have no process environment at runtime, so the value is
    /// captured at compile time.
    pub fn from_env() -> Self {
        Self::new(option_env!("LOGINAPP_API_BASE").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
