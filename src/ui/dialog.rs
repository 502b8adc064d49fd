//! The dialog-and-exit surface used by the fatal error path.
//!
//! [`crate::ui::bridge::BackendBridge`] goes through this trait instead of
//! calling the dialog and `process::exit` directly, so tests can observe the
//! fatal path without killing the test process.

/// Presentation of unrecoverable errors.
pub trait FatalSurface: Send + Sync {
    /// Show a blocking error dialog. Returns once the user dismissed it.
    fn show_error(&self, title: &str, message: &str);

    /// Request process termination with the given status code.
    ///
    /// The production implementation never returns from this.
    fn terminate(&self, code: i32);
}

/// Production surface: native modal dialog, then process exit.
pub struct NativeFatalSurface;

impl FatalSurface for NativeFatalSurface {
    fn show_error(&self, title: &str, message: &str) {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn terminate(&self, code: i32) {
        tracing::error!(code, "terminating after unrecoverable backend error");
        std::process::exit(code);
    }
}
