//! Shared test doubles for the backend seam and the fatal-dialog surface.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use modloader_shell::backend::Backend;
use modloader_shell::error::AppError;
use modloader_shell::ui::FatalSurface;
use serde_json::Value;
use tokio::sync::broadcast;

/// In-memory backend with scripted command responses and a manual event
/// stream.
pub struct FakeBackend {
    responses: Mutex<VecDeque<Result<Value, AppError>>>,
    events_tx: broadcast::Sender<Value>,
    /// Payloads emitted while the next command is "in flight", before its
    /// response is returned. Simulates events racing the initial fetch.
    emit_before_response: Mutex<Vec<Value>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let (events_tx, _) = broadcast::channel(64);
        Self {
            responses: Mutex::new(VecDeque::new()),
            events_tx,
            emit_before_response: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, response: Result<Value, AppError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Emit an event on the change stream.
    pub fn emit(&self, payload: Value) {
        let _ = self.events_tx.send(payload);
    }

    /// Queue an event to be emitted just before the next command response.
    pub fn emit_during_next_invoke(&self, payload: Value) {
        self.emit_before_response.lock().unwrap().push(payload);
    }
}

impl Backend for FakeBackend {
    async fn invoke(&self, command: &str, _args: Option<Value>) -> Result<Value, AppError> {
        for payload in self.emit_before_response.lock().unwrap().drain(..) {
            let _ = self.events_tx.send(payload);
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response for command '{command}'"))
    }

    fn listen(&self, _event: &str) -> broadcast::Receiver<Value> {
        self.events_tx.subscribe()
    }
}

#[derive(Default)]
struct RecordedCalls {
    dialogs: Vec<(String, String)>,
    exit_codes: Vec<i32>,
}

/// FatalSurface double that records calls instead of blocking and exiting.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    calls: Arc<Mutex<RecordedCalls>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialogs(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().dialogs.clone()
    }

    pub fn exit_codes(&self) -> Vec<i32> {
        self.calls.lock().unwrap().exit_codes.clone()
    }
}

impl FatalSurface for RecordingSurface {
    fn show_error(&self, title: &str, message: &str) {
        self.calls
            .lock()
            .unwrap()
            .dialogs
            .push((title.to_string(), message.to_string()));
    }

    fn terminate(&self, code: i32) {
        self.calls.lock().unwrap().exit_codes.push(code);
    }
}

/// Backend mod object in its wire shape.
pub fn wire_mod(uid: u64, name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "uid": uid,
        "author": null,
        "version": null,
        "info": null,
        "injection": "Localization",
        "is_active": false
    })
}
