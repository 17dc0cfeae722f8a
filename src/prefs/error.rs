use thiserror::Error;

pub type PreferenceResult<T> = std::result::Result<T, PreferenceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("invalid option for {field}: {value:?}")]
    InvalidOption { field: &'static str, value: String },
}
