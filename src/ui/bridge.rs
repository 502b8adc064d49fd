//! BackendBridge - forwards UI commands to the backend and unwraps its errors
//!
//! Every UI action goes through [`BackendBridge::invoke`]. The bridge awaits
//! the backend round-trip and splits the failure path along the two-tier
//! error taxonomy:
//!
//! 1. `Unrecoverable`: one localized modal dialog, then process termination
//!    with status 1. The caller never sees a value on this path.
//! 2. `Recoverable`: returned to the caller as data. The caller decides the
//!    UI treatment, usually via [`error_message`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::Backend;
use crate::error::{
    AppError, ConfigError, InvalidArchive, InvalidGamePath, ModManagerError, RecoverableAppError,
};
use crate::locale;
use crate::ui::dialog::FatalSurface;

/// Issue tracker interpolated into the fatal dialog message.
pub const ISSUE_TRACKER_URL: &str = "https://github.com/TeyKey1/AW-Modloader/issues";

const FATAL_UNHANDLED_CONFIG_ERROR: &str = "Fatal unhandled ConfigError";
const FATAL_UNHANDLED_MOD_MANAGER_ERROR: &str = "Fatal unhandled ModManagerError";

/// Failure of a bridged backend command, as seen by the caller.
#[derive(Debug)]
pub enum BridgeError {
    /// Domain error returned by the backend; no dialog was shown.
    Recoverable(RecoverableAppError),
    /// The command succeeded but its result did not match the expected type.
    Decode(serde_json::Error),
    /// Process termination has been requested for an unrecoverable error.
    ///
    /// With the production [`FatalSurface`] this value is unreachable since
    /// `terminate` exits the process; it exists so tests can drive the fatal
    /// path with a recording surface.
    Terminated,
}

impl BridgeError {
    /// The wrapped recoverable backend error, if that is what this is.
    pub fn recoverable(&self) -> Option<&RecoverableAppError> {
        match self {
            Self::Recoverable(error) => Some(error),
            Self::Decode(_) | Self::Terminated => None,
        }
    }
}

/// Forwards commands to the backend and applies the fatal/recoverable split.
pub struct BackendBridge<B, S> {
    backend: Arc<B>,
    surface: S,
}

impl<B: Backend, S: FatalSurface> BackendBridge<B, S> {
    pub fn new(backend: Arc<B>, surface: S) -> Self {
        Self { backend, surface }
    }

    /// Invoke a backend command and decode its result.
    ///
    /// On an `Unrecoverable` envelope this shows exactly one blocking error
    /// dialog and requests process exit with status 1; control does not
    /// return to the caller in production. `Recoverable` envelopes come back
    /// as [`BridgeError::Recoverable`] without any dialog.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        command: &str,
        args: Option<Value>,
    ) -> Result<T, BridgeError> {
        match self.backend.invoke(command, args).await {
            Ok(value) => serde_json::from_value(value).map_err(BridgeError::Decode),
            Err(AppError::Recoverable(error)) => {
                tracing::debug!(command, ?error, "backend returned a recoverable error");
                Err(BridgeError::Recoverable(error))
            }
            Err(AppError::Unrecoverable { msg }) => {
                tracing::error!(command, msg = %msg, "backend reported an unrecoverable error");

                let message = locale::translate(
                    "error.fatal.dialogMessage",
                    &[("error", &msg), ("githubIssueUrl", ISSUE_TRACKER_URL)],
                );
                self.surface.show_error("Fatal Error", &message);
                self.surface.terminate(1);

                Err(BridgeError::Terminated)
            }
        }
    }
}

/// Translate a recoverable backend error into a display string for the
/// currently active locale.
///
/// Kinds without a user-facing translation degrade to a fixed English
/// fallback instead of a blank message. The matches are exhaustive on
/// purpose: a new backend error kind fails to compile here rather than
/// silently hitting the fallback.
pub fn error_message(error: &RecoverableAppError) -> String {
    match error {
        RecoverableAppError::ConfigError(error) => config_error_message(error),
        RecoverableAppError::ModManagerError(error) => mod_manager_error_message(error),
    }
}

fn config_error_message(error: &ConfigError) -> String {
    match error {
        ConfigError::GameLanguageNotSupported => {
            locale::translate("error.GameLanguageNotSupported", &[])
        }
        ConfigError::InvalidGamePath(path) => locale::translate(
            &format!("error.invalidGamePath.{}", invalid_game_path_tag(path)),
            &[],
        ),
        // Backend bugs or environment failures, normally routed through the
        // unrecoverable tier. No user-facing translation exists.
        ConfigError::DeSerialization { .. }
        | ConfigError::Io { .. }
        | ConfigError::TauriError { .. } => FATAL_UNHANDLED_CONFIG_ERROR.to_string(),
    }
}

fn mod_manager_error_message(error: &ModManagerError) -> String {
    match error {
        ModManagerError::ArchiveHandling { msg } => {
            locale::translate("error.ArchiveHandling", &[("error", msg)])
        }
        ModManagerError::InvalidArchive(archive) => locale::translate(
            &format!("error.invalidArchive.{}", invalid_archive_tag(archive)),
            &[],
        ),
        ModManagerError::InvalidModInfo { msg } => {
            locale::translate("error.InvalidModInfo", &[("error", msg)])
        }
        ModManagerError::ModConflict { conflict } => {
            let mut conflicts = String::new();
            for (source, target) in conflict {
                conflicts.push_str(&format!("\t{source} -> {target}\n"));
            }

            locale::translate("error.ModConflict", &[("conflicts", &conflicts)])
        }
        ModManagerError::ModVersionMismatch { mismatch } => locale::translate(
            "error.ModVersionMismatch",
            // Wire order is (new, installed).
            &[
                ("installedVersion", mismatch.1.as_str()),
                ("newVersion", mismatch.0.as_str()),
            ],
        ),
        ModManagerError::Io { .. }
        | ModManagerError::Db { .. }
        | ModManagerError::DeSerialization { .. }
        | ModManagerError::ModNotExisting
        | ModManagerError::ModAlreadyActive
        | ModManagerError::ModAlreadyDeactivated
        | ModManagerError::AppNotInitialized
        | ModManagerError::ConfigError(_)
        | ModManagerError::TauriError { .. } => FATAL_UNHANDLED_MOD_MANAGER_ERROR.to_string(),
    }
}

fn invalid_game_path_tag(path: &InvalidGamePath) -> &'static str {
    match path {
        InvalidGamePath::NotExisting => "NotExisting",
        InvalidGamePath::NotADirectory => "NotADirectory",
        InvalidGamePath::InvalidPath => "InvalidPath",
        InvalidGamePath::InvalidFolderName => "InvalidFolderName",
        InvalidGamePath::LocalizationNotFound => "LocalizationNotFound",
    }
}

fn invalid_archive_tag(archive: &InvalidArchive) -> &'static str {
    match archive {
        InvalidArchive::PathNotExisting => "PathNotExisting",
        InvalidArchive::PathNotFile => "PathNotFile",
        InvalidArchive::NoExtension => "NoExtension",
        InvalidArchive::InvalidExtension => "InvalidExtension",
    }
}
