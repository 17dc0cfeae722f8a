pub mod cli;
mod config;
pub mod error;
pub mod logging;
pub mod prefs;
pub mod presentation;
pub mod shell;
pub mod storage;

pub use cli::run;
pub use config::{load_app_config, AppConfig, ConfigPathError};
pub use error::{AppError, AppResult};
pub use prefs::{PreferenceAction, PreferenceState, PreferenceStore};
pub use presentation::{DocumentRoot, PresentationSurface};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
