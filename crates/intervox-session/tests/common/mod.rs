//! Shared test double for the room transport.
#![allow(dead_code)] // not every test binary uses every helper

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use intervox_session::{RoomConnection, RoomError};
use intervox_types::ConnectionState;
use tokio::sync::watch;
use tokio::time::timeout;

/// Scripted transport that records every call and lets tests drive the
/// connection-state channel directly.
pub struct FakeRoom {
    pub state_tx: watch::Sender<ConnectionState>,
    pub mic_calls: Mutex<Vec<bool>>,
    pub connects: Mutex<Vec<(String, String)>>,
    pub disconnects: AtomicUsize,
    fail_connect: bool,
}

impl FakeRoom {
    pub fn new() -> Self {
        Self::with_outcome(false)
    }

    pub fn failing() -> Self {
        Self::with_outcome(true)
    }

    fn with_outcome(fail_connect: bool) -> Self {
        let (state_tx, _) = watch::channel(ConnectionState::Disconnected);
        Self {
            state_tx,
            mic_calls: Mutex::new(Vec::new()),
            connects: Mutex::new(Vec::new()),
            disconnects: AtomicUsize::new(0),
            fail_connect,
        }
    }

    pub fn mic_calls(&self) -> Vec<bool> {
        self.mic_calls.lock().expect("mic_calls lock").clone()
    }

    pub fn connects(&self) -> Vec<(String, String)> {
        self.connects.lock().expect("connects lock").clone()
    }

    /// Drives the state channel the way a transport would.
    pub fn set_state(&self, state: ConnectionState) {
        self.state_tx.send_replace(state);
    }

    /// Waits until the transport has seen `n` microphone calls.
    pub async fn wait_for_mic_calls(&self, n: usize) -> Vec<bool> {
        timeout(Duration::from_millis(500), async {
            loop {
                let calls = self.mic_calls();
                if calls.len() >= n {
                    return calls;
                }
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
        })
        .await
        .unwrap_or_else(|_| panic!("expected {n} microphone call(s), got {:?}", self.mic_calls()))
    }

    /// Lets the watcher task drain any pending state events, then returns the
    /// microphone calls seen so far.
    pub async fn settled_mic_calls(&self) -> Vec<bool> {
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.mic_calls()
    }
}

#[async_trait]
impl RoomConnection for FakeRoom {
    async fn connect(&self, server_url: &str, token: &str) -> Result<(), RoomError> {
        self.connects
            .lock()
            .expect("connects lock")
            .push((server_url.to_string(), token.to_string()));

        if self.fail_connect {
            self.state_tx.send_replace(ConnectionState::Failed);
            return Err(RoomError::ConnectionFailed("transport gave up".to_string()));
        }

        self.state_tx.send_replace(ConnectionState::Connecting);
        tokio::task::yield_now().await;
        self.state_tx.send_replace(ConnectionState::Connected);
        Ok(())
    }

    fn state(&self) -> watch::Receiver<ConnectionState> {
        self.state_tx.subscribe()
    }

    async fn set_microphone_enabled(&self, enabled: bool) -> Result<(), RoomError> {
        self.mic_calls.lock().expect("mic_calls lock").push(enabled);
        Ok(())
    }

    async fn disconnect(&self) {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        self.state_tx.send_replace(ConnectionState::Disconnected);
    }
}
