// Mod state mirror
//
// The backend owns the mod registry; this module keeps a client-side copy of
// it. The mirror is rebuilt wholesale from a one-shot fetch on start and then
// patched incrementally from the backend's change-event stream.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use serde_json::Value;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::backend::{Backend, CMD_GET_INITIAL_MOD_DATA, EVENT_MOD_TREE_CHANGED};
use crate::error::ShellError;
use crate::models::{Mod, ModChangeEvent};

/// Client-side mirror of the backend's mod registry.
///
/// Owns its event subscription explicitly: [`start()`](Self::start) fetches
/// the initial snapshot and attaches the change listener,
/// [`stop()`](Self::stop) releases it. Subscribing to the event stream
/// happens *before* the snapshot fetch, so events racing the fetch are
/// buffered by the channel and replayed afterwards instead of being lost to
/// a last-write-wins overwrite.
///
/// Reads follow the usual access pattern:
/// - [`snapshot()`](Self::snapshot) for a cloned copy of the map
/// - [`read()`](Self::read) for closure-based access without cloning
/// - [`subscribe()`](Self::subscribe) for applied change events
pub struct ModMirror {
    /// The mirrored id -> mod map, protected for access from the listener
    /// task and UI threads
    mods: Arc<RwLock<HashMap<u64, Mod>>>,

    /// Rebroadcasts every event after it has been applied to the map
    changed_tx: broadcast::Sender<ModChangeEvent>,

    running: AtomicBool,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl ModMirror {
    pub fn new() -> Self {
        let (changed_tx, _) = broadcast::channel(100);
        Self {
            mods: Arc::new(RwLock::new(HashMap::new())),
            changed_tx,
            running: AtomicBool::new(false),
            listener: Mutex::new(None),
        }
    }

    /// Fetch the initial mod data and attach the change-event listener.
    ///
    /// Failures of the fetch or of payload decoding are returned to the
    /// caller instead of being swallowed; the mirror is left stopped and a
    /// later `start` retries from scratch.
    pub async fn start<B: Backend>(&self, backend: &B) -> Result<(), ShellError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ShellError::AlreadyRunning("ModMirror"));
        }

        match self.start_inner(backend).await {
            Ok(()) => Ok(()),
            Err(error) => {
                self.running.store(false, Ordering::SeqCst);
                Err(error)
            }
        }
    }

    async fn start_inner<B: Backend>(&self, backend: &B) -> Result<(), ShellError> {
        // Subscribe first. Anything the backend emits while the snapshot is
        // in flight sits in this receiver until the listener task drains it.
        let events = backend.listen(EVENT_MOD_TREE_CHANGED);

        let initial = backend
            .invoke(CMD_GET_INITIAL_MOD_DATA, None)
            .await
            .map_err(|error| ShellError::Backend {
                command: CMD_GET_INITIAL_MOD_DATA.to_string(),
                error,
            })?;
        let initial = parse_initial_mod_data(initial)?;

        tracing::info!(mods = initial.len(), "mod mirror initialized");
        *self.mods.write().unwrap() = initial;

        let mods = Arc::clone(&self.mods);
        let changed_tx = self.changed_tx.clone();
        let handle = tokio::spawn(listen_for_changes(events, mods, changed_tx));

        *self.listener.lock().unwrap() = Some(handle);
        Ok(())
    }

    /// Detach the change-event listener, releasing the subscription.
    ///
    /// The mirrored map keeps its last contents; the next `start` replaces
    /// it wholesale.
    pub fn stop(&self) {
        if let Some(handle) = self.listener.lock().unwrap().take() {
            handle.abort();
            tracing::info!("mod mirror stopped");
        }
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Cloned copy of the current mod map.
    pub fn snapshot(&self) -> HashMap<u64, Mod> {
        self.mods.read().unwrap().clone()
    }

    /// Execute a function with read access to the mod map.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&HashMap<u64, Mod>) -> R,
    {
        let mods = self.mods.read().unwrap();
        f(&mods)
    }

    /// Subscribe to change events, delivered after they have been applied to
    /// the map and in the order they arrived from the backend.
    pub fn subscribe(&self) -> broadcast::Receiver<ModChangeEvent> {
        self.changed_tx.subscribe()
    }
}

impl Default for ModMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ModMirror {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Parse the `get_initial_mod_data` payload: a JSON object keyed by
/// numeric-id strings.
fn parse_initial_mod_data(payload: Value) -> Result<HashMap<u64, Mod>, ShellError> {
    // serde parses the string keys into u64 ids.
    Ok(serde_json::from_value(payload)?)
}

async fn listen_for_changes(
    mut events: broadcast::Receiver<Value>,
    mods: Arc<RwLock<HashMap<u64, Mod>>>,
    changed_tx: broadcast::Sender<ModChangeEvent>,
) {
    loop {
        match events.recv().await {
            Ok(payload) => {
                let event: ModChangeEvent = match serde_json::from_value(payload) {
                    Ok(event) => event,
                    Err(error) => {
                        tracing::warn!(%error, "ignoring undecodable mod change event");
                        continue;
                    }
                };

                apply_event(&mods, &changed_tx, event);
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                // The mirror may now miss entries until the next restart.
                tracing::warn!(skipped, "mod change stream lagged");
            }
            Err(broadcast::error::RecvError::Closed) => {
                tracing::debug!("mod change stream closed");
                break;
            }
        }
    }
}

fn apply_event(
    mods: &RwLock<HashMap<u64, Mod>>,
    changed_tx: &broadcast::Sender<ModChangeEvent>,
    event: ModChangeEvent,
) {
    {
        let mut map = mods.write().unwrap();
        match &event {
            ModChangeEvent::InsertUpdate(uid, module) => {
                map.insert(*uid, module.clone());
            }
            ModChangeEvent::Delete(uid) => {
                map.remove(uid);
            }
        }
    }

    // It's OK if no one is listening.
    let _ = changed_tx.send(event);
}
