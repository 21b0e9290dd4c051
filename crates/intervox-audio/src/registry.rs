//! Process-wide cache of live playback contexts.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};
use tracing::debug;

use crate::backend::{AudioBackend, AudioContextOptions};
use crate::error::{AudioError, CreateContextError};
use crate::gesture::GestureGate;

/// Cache of playback contexts keyed by identifier.
///
/// Invariant: at most one live handle exists per key. Concurrent requests for
/// the same key await a shared per-key init cell instead of racing duplicate
/// creations, so the redundant handle a second caller might have produced is
/// never even constructed. Keyless requests are ephemeral: never cached,
/// never reused.
///
/// The registry is an explicitly owned value, constructed per host (and per
/// test), not module-level global state.
pub struct AudioResourceRegistry<B: AudioBackend> {
    backend: B,
    gesture: GestureGate,
    cache: Mutex<HashMap<String, Arc<OnceCell<Arc<B::Handle>>>>>,
}

impl<B: AudioBackend> AudioResourceRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            gesture: GestureGate::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The gate the host wires its pointer-down / key-down events into.
    pub fn gesture(&self) -> &GestureGate {
        &self.gesture
    }

    /// Returns the playback context for `key`, creating it if needed.
    ///
    /// Creation is attempted eagerly; if the platform refuses pending a user
    /// gesture, the call suspends on the gesture gate and tries once more.
    /// With a key, the cached handle is returned when one exists. Without a
    /// key, every call yields a fresh context.
    pub async fn acquire(
        &self,
        key: Option<&str>,
        options: AudioContextOptions,
    ) -> Result<Arc<B::Handle>, AudioError> {
        let Some(key) = key else {
            return self.create(&options).await.map(Arc::new);
        };

        let cell = {
            let mut cache = self.cache.lock().await;
            Arc::clone(cache.entry(key.to_string()).or_default())
        };

        // The cell is the pending-creation marker: the first caller for this
        // key runs the init, everyone else awaits the same result. A failed
        // init leaves the cell empty so a later acquire may try again.
        cell.get_or_try_init(|| async {
            debug!(key, "creating audio context");
            self.create(&options).await.map(Arc::new)
        })
        .await
        .map(Arc::clone)
    }

    /// Drops every cached handle. Contexts still held by callers stay alive
    /// until their last `Arc` goes away.
    ///
    /// Meant for resetting between attempts (or tests), not for use while
    /// acquisitions are in flight: a keyed creation suspended during `clear`
    /// keeps its detached cell, so its handle resolves uncached and a later
    /// request for that key creates a fresh one.
    pub async fn clear(&self) {
        self.cache.lock().await.clear();
    }

    async fn create(&self, options: &AudioContextOptions) -> Result<B::Handle, AudioError> {
        match self.backend.create_context(options) {
            Ok(handle) => Ok(handle),
            Err(CreateContextError::AutoplayBlocked) => {
                debug!("audio context creation blocked, waiting for first user gesture");
                self.gesture.unlocked().await;
                self.backend
                    .create_context(options)
                    .map_err(|e| AudioError::ResourceUnavailable(e.to_string()))
            }
            Err(e) => Err(AudioError::ResourceUnavailable(e.to_string())),
        }
    }
}
