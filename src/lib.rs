// Modloader Shell - presentation-layer glue for the AW Modloader
//
// This crate contains no domain logic of its own. It forwards commands to
// the native backend, unwraps the backend's error envelopes into localized
// user messages, mirrors the backend-owned mod registry for UI rendering and
// sets up localization. The app shell embedding this crate provides the
// window, the rendering and the concrete backend transport.

pub mod backend;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod models;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use backend::Backend;
pub use config::{ConfigManager, ShellConfig};
pub use error::{AppError, RecoverableAppError, ShellError};
pub use locale::{Language, load_i18n};
pub use models::{Mod, ModChangeEvent};
pub use state::ModMirror;
pub use ui::{BackendBridge, BridgeError, error_message};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
