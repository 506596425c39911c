pub mod api;
pub mod controller;
pub mod effects;
pub mod models;
pub mod prefs;
pub mod session;
pub mod timefmt;
pub mod validate;

pub use api::BackendClient;
pub use controller::{ActivityController, ConfirmPrompt};
pub use effects::{Effect, Toast, ToastKind};
pub use prefs::{FilePreferences, PreferenceStore, resolve_prefs_path};
pub use session::PageSession;
