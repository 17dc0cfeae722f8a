pub mod action;
mod effects;
pub mod error;
pub mod model;
pub mod snapshot;
pub mod store;

pub use action::PreferenceAction;
pub use error::{PreferenceError, PreferenceResult};
pub use model::{is_known_font, Layout, PreferenceState, FONT_CHOICES};
pub use store::{PreferenceStore, SubscriptionId, STORAGE_KEY};
