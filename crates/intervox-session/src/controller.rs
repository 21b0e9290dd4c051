//! Session orchestration: credential, connection, mute, teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use intervox_types::{ConnectionState, EndReason, SessionContext};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::credential::CredentialClient;
use crate::error::SessionError;
use crate::room::RoomConnection;

/// Lifecycle of one session attempt as the presentation layer sees it.
///
/// `Acquiring` and `Connecting` both read as "connecting" to the user; they
/// are split so the host can tell a pending credential fetch from a pending
/// transport handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    /// Credential fetch in flight; no connection exists yet.
    Acquiring,
    /// Credential in hand, transport handshake in flight.
    Connecting,
    /// The room connection is live.
    Active,
    /// The attempt is over, for the given reason.
    Ended(EndReason),
}

/// Local facts layered on top of the transport's connection state.
struct Shared {
    /// Microphone mute chosen by the user. Applied on every transition into
    /// `Connected`, so a mute chosen before the connection was ready is
    /// honored once it becomes ready.
    muted: AtomicBool,
    /// Latched when the attempt is over: user terminate or transport
    /// failure. Once set, connection-state events are ignored for good and
    /// the terminal status is never overwritten.
    ended: AtomicBool,
}

/// Orchestrates one voice session over an injected transport.
///
/// Subscribes to the transport's state channel on construction and keeps the
/// user's mute choice in sync with it: whenever the connection (re)enters
/// `Connected`, the current mute state is re-applied with a single
/// `set_microphone_enabled` call. Termination is final; a controller is not
/// reusable across session attempts.
pub struct SessionController<R: RoomConnection> {
    room: Arc<R>,
    shared: Arc<Shared>,
    status: Arc<watch::Sender<SessionStatus>>,
    watcher: JoinHandle<()>,
}

impl<R: RoomConnection> SessionController<R> {
    pub fn new(room: Arc<R>) -> Self {
        let (status_tx, _) = watch::channel(SessionStatus::Idle);
        let status = Arc::new(status_tx);
        let shared = Arc::new(Shared {
            muted: AtomicBool::new(false),
            ended: AtomicBool::new(false),
        });
        // Subscribe before handing the channel to the task so transitions
        // that land between construction and the first poll are not missed.
        let state_rx = room.state();
        let initial_state = *state_rx.borrow();
        let watcher = tokio::spawn(watch_connection(
            state_rx,
            initial_state,
            Arc::clone(&room),
            Arc::clone(&shared),
            Arc::clone(&status),
        ));
        Self {
            room,
            shared,
            status,
            watcher,
        }
    }

    /// Acquires a credential and opens the room connection with it.
    ///
    /// Credential acquisition strictly precedes connection establishment; on
    /// an issuer failure the transport is never contacted and the attempt
    /// ends as `Ended(IssuerRejected)`. Nothing here is retried; a failed
    /// attempt is surfaced and a new attempt starts from scratch.
    ///
    /// A [`terminate`](SessionController::terminate) racing an in-flight
    /// suspend point wins: `start` then returns `Ok` without publishing any
    /// further status, leaving `Ended(UserHangup)` in place.
    ///
    /// # Errors
    ///
    /// `SessionError::Issuer` if the credential fetch fails,
    /// `SessionError::Connection` if the transport reaches `Failed`.
    pub async fn start(
        &self,
        client: &CredentialClient,
        context: &SessionContext,
    ) -> Result<(), SessionError> {
        if self.shared.ended.load(Ordering::SeqCst) {
            return Ok(());
        }
        self.status.send_replace(SessionStatus::Acquiring);
        let issued = match client.acquire(context).await {
            Ok(issued) => issued,
            Err(e) => {
                if !self.shared.ended.load(Ordering::SeqCst) {
                    self.status
                        .send_replace(SessionStatus::Ended(EndReason::IssuerRejected));
                }
                return Err(e.into());
            }
        };
        if self.shared.ended.load(Ordering::SeqCst) {
            // The user hung up while the credential fetch was in flight.
            return Ok(());
        }

        self.status.send_replace(SessionStatus::Connecting);
        info!(identity = %issued.credential.identity, "connecting to room");
        if let Err(e) = self
            .room
            .connect(&issued.server_url, &issued.credential.token)
            .await
        {
            if !self.shared.ended.load(Ordering::SeqCst) {
                self.status
                    .send_replace(SessionStatus::Ended(EndReason::ConnectionLost));
            }
            return Err(e.into());
        }
        if self.shared.ended.load(Ordering::SeqCst) {
            // The user hung up while the handshake was in flight.
            return Ok(());
        }

        self.status.send_replace(SessionStatus::Active);
        Ok(())
    }

    /// Flips the mute state, returning the new value.
    ///
    /// Applied to the transport immediately when the connection is live;
    /// otherwise only the local flag changes and the watcher flushes it on
    /// the next `Connected` transition.
    pub async fn toggle_mute(&self) -> bool {
        let muted = !self.shared.muted.fetch_xor(true, Ordering::SeqCst);
        debug!(muted, "mute toggled");

        if !self.shared.ended.load(Ordering::SeqCst) && self.room.state().borrow().is_connected() {
            if let Err(e) = self.room.set_microphone_enabled(!muted).await {
                warn!(error = %e, "failed to apply microphone state");
            }
        }
        muted
    }

    pub fn is_muted(&self) -> bool {
        self.shared.muted.load(Ordering::SeqCst)
    }

    /// Ends the session at the user's request.
    ///
    /// Final: late `Connected` or `Failed` events from the transport are
    /// ignored from here on, even if the transport would otherwise retry.
    /// A no-op when the attempt already ended (second hang-up press, or a
    /// hang-up after the connection was already reported lost).
    pub async fn terminate(&self) {
        if self.shared.ended.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("user ended session");
        self.room.disconnect().await;
        self.status
            .send_replace(SessionStatus::Ended(EndReason::UserHangup));
    }

    /// Channel the presentation layer watches to drive the session view,
    /// including navigating away once a terminal `Ended` status appears.
    pub fn status(&self) -> watch::Receiver<SessionStatus> {
        self.status.subscribe()
    }
}

impl<R: RoomConnection> Drop for SessionController<R> {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}

/// Watches the transport's state channel and executes the synchronization
/// rules: re-apply mute on every transition into `Connected`, report an
/// unexpected `Failed` as a lost connection.
async fn watch_connection<R: RoomConnection>(
    mut rx: watch::Receiver<ConnectionState>,
    initial_state: ConnectionState,
    room: Arc<R>,
    shared: Arc<Shared>,
    status: Arc<watch::Sender<SessionStatus>>,
) {
    let mut previous = initial_state;
    loop {
        if rx.changed().await.is_err() {
            // Transport dropped its state channel; nothing left to observe.
            break;
        }
        let current = *rx.borrow_and_update();

        if shared.ended.load(Ordering::SeqCst) {
            debug!(?current, "ignoring connection event after termination");
            continue;
        }

        match current {
            ConnectionState::Connected if previous != ConnectionState::Connected => {
                let enabled = !shared.muted.load(Ordering::SeqCst);
                debug!(enabled, "connection up, applying microphone state");
                if let Err(e) = room.set_microphone_enabled(enabled).await {
                    warn!(error = %e, "failed to apply microphone state");
                }
            }
            ConnectionState::Failed => {
                warn!("connection failed unexpectedly");
                // The attempt is dead; latch it closed so a transport that
                // keeps emitting events cannot resurrect it.
                shared.ended.store(true, Ordering::SeqCst);
                status.send_replace(SessionStatus::Ended(EndReason::ConnectionLost));
            }
            _ => {}
        }
        previous = current;
    }
}
