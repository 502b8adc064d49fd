//! Error types shared with the native backend.
//!
//! The backend reports every failure as a JSON [`AppError`] envelope. The
//! enums in this module mirror that wire format exactly, so a thrown backend
//! error deserializes straight into a closed sum type and "which variant is
//! set" is decided by the type system instead of optional-field probing.
//!
//! Two tiers exist: [`AppError::Unrecoverable`] always terminates the
//! application after a dialog, while [`AppError::Recoverable`] is handed back
//! to the caller as a value (see [`crate::ui::bridge`]).

use serde::{Deserialize, Serialize};

/// The error envelope sent by the backend for any failed command.
///
/// This type deliberately does not implement [`std::error::Error`]; it is a
/// wire format, not a source-chained error. Translation into user-facing text
/// happens in [`crate::ui::bridge::error_message`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    /// Fatal condition. The shell shows the message once and exits.
    Unrecoverable { msg: String },
    /// Domain error the caller is expected to handle.
    Recoverable(RecoverableAppError),
}

/// All recoverable errors the backend can report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecoverableAppError {
    ConfigError(ConfigError),
    ModManagerError(ModManagerError),
}

impl From<ConfigError> for RecoverableAppError {
    fn from(error: ConfigError) -> Self {
        Self::ConfigError(error)
    }
}

impl From<ModManagerError> for RecoverableAppError {
    fn from(error: ModManagerError) -> Self {
        Self::ModManagerError(error)
    }
}

/// Errors from the backend's configuration handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConfigError {
    DeSerialization { msg: String },
    Io { msg: String },
    GameLanguageNotSupported,
    InvalidGamePath(InvalidGamePath),
    TauriError { msg: String },
}

/// The various ways a provided game path can be invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "invalidGamePath")]
pub enum InvalidGamePath {
    NotExisting,
    /// Provided path points to a file instead of a directory
    NotADirectory,
    InvalidPath,
    /// The folder name does not match the expected game base folder
    InvalidFolderName,
    /// No localization folder inside the provided game folder
    LocalizationNotFound,
}

/// The various ways a provided mod archive can be invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "invalidArchive")]
pub enum InvalidArchive {
    PathNotExisting,
    /// Provided path points to a directory instead of a file
    PathNotFile,
    NoExtension,
    /// The archive format is not supported
    InvalidExtension,
}

/// Errors from the backend's mod management.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModManagerError {
    Io {
        msg: String,
    },
    /// All database errors
    Db {
        msg: String,
    },
    DeSerialization {
        msg: String,
    },
    InvalidArchive(InvalidArchive),
    /// Errors happening during the handling of archives (compression, decompression)
    ArchiveHandling {
        msg: String,
    },
    /// Errors happening while parsing a potential modinfo.json file
    InvalidModInfo {
        msg: String,
    },
    ModNotExisting,
    ModAlreadyActive,
    ModAlreadyDeactivated,
    /// The mod being added is older than the identical mod already in the
    /// registry. Tuple order on the wire: (new version, installed version).
    ModVersionMismatch {
        mismatch: (String, String),
    },
    /// The initial modloader configuration has not been provided yet
    AppNotInitialized,
    /// The mod uses the same files as other installed mods. Each tuple names
    /// the conflicting mod and the conflicting file path.
    ModConflict {
        conflict: Vec<(String, String)>,
    },
    ConfigError(ConfigError),
    TauriError {
        msg: String,
    },
}

/// Failures originating in this shell layer itself, never on the wire.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The backend rejected a command the shell issued on its own behalf
    /// (e.g. the mirror's initial fetch).
    #[error("backend command '{command}' failed: {error:?}")]
    Backend { command: String, error: AppError },

    /// A backend payload did not match the expected shape.
    #[error("failed to decode backend payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A component was started while it was already running.
    #[error("{0} is already running")]
    AlreadyRunning(&'static str),

    /// An embedded translation bundle is not valid JSON.
    #[error("invalid locale bundle for '{lang}': {source}")]
    LocaleBundle {
        lang: &'static str,
        source: serde_json::Error,
    },
}
