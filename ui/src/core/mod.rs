//! Platform-agnostic plumbing shared by every view.

pub mod config;
pub mod error;
pub mod locale;
pub mod navigation;
pub mod services;
pub mod session;
pub mod status;
pub mod storage;
