use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("localization error: {0}")]
    Localization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<i18n_embed::I18nEmbedError> for AppError {
    fn from(err: i18n_embed::I18nEmbedError) -> Self {
        Self::Localization(err.to_string())
    }
}
