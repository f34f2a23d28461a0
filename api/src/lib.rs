//! Account backend client shared by every platform shell.
//!
//! The crate owns the wire contract (request/response bodies and endpoint
//! paths) and the [`AccountApi`] collaborator trait consumed by the views in
//! `loginapp-ui`. [`HttpAccountApi`] is the production implementation.

mod client;
mod config;
mod error;
mod types;

pub use client::{AccountApi, HttpAccountApi, TokenSource};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use types::{Account, KeyAndPassword};
