// UI-facing glue
//
// This module contains:
// - BackendBridge: forwards commands to the backend and unwraps error envelopes
// - FatalSurface: the dialog-and-exit seam used by the fatal error path

pub mod bridge;
pub mod dialog;

pub use bridge::{BackendBridge, BridgeError, error_message};
pub use dialog::{FatalSurface, NativeFatalSurface};
