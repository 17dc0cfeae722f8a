use crate::config::ConfigPathError;
use crate::prefs::PreferenceError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Preference(#[from] PreferenceError),
    #[error("cannot locate preference directory: {0}")]
    Config(#[from] ConfigPathError),
    #[error("failed to render preferences: {0}")]
    Render(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
