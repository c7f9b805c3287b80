// ABOUTME: Agent settings persistence
// ABOUTME: Model, preview and reasoning values stored in each agent's own JSON or TOML settings file

pub mod error;
pub mod format;
pub mod lock;
pub mod nested;
pub mod selection;
pub mod store;
pub mod types;

pub use error::SettingsError;
pub use format::SettingsFormat;
pub use nested::{get_nested, set_nested};
pub use selection::{load_selection, save_selection};
pub use store::SettingsStore;
pub use types::{AgentSettings, SettingsAddress};
