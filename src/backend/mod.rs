//! Seam between the shell and the native backend process.
//!
//! The backend owns all domain logic (archive handling, conflict detection,
//! configuration persistence). This layer only sees two channels:
//!
//! - request/response commands via [`Backend::invoke`], failing with a wire
//!   [`AppError`] envelope
//! - named push-event streams via [`Backend::listen`]
//!
//! Production wires this trait to the real IPC transport; tests substitute an
//! in-memory double.

use std::future::Future;

use serde_json::Value;
use tokio::sync::broadcast;

use crate::error::AppError;

/// Command returning the full mod registry as an id -> mod object.
pub const CMD_GET_INITIAL_MOD_DATA: &str = "get_initial_mod_data";

/// Event emitted by the backend whenever a mod is inserted, updated or deleted.
pub const EVENT_MOD_TREE_CHANGED: &str = "mod-tree-data-changed";

/// Handle to the native backend.
///
/// Commands are single round-trips: one serialized result or one [`AppError`].
/// Event subscriptions live as long as the returned receiver; dropping it
/// releases the subscription.
pub trait Backend: Send + Sync {
    /// Send `command` with an optional JSON payload and await its result.
    fn invoke(
        &self,
        command: &str,
        args: Option<Value>,
    ) -> impl Future<Output = Result<Value, AppError>> + Send;

    /// Subscribe to the named push-event stream of the application window.
    ///
    /// Events arrive in the order the backend emitted them.
    fn listen(&self, event: &str) -> broadcast::Receiver<Value>;
}
