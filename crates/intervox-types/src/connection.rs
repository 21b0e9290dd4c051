//! Connection-state vocabulary shared with the real-time transport.

use serde::{Deserialize, Serialize};

/// State of the real-time room connection.
///
/// Owned exclusively by the transport; the session core only observes
/// transitions and never drives them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// No connection exists.
    Disconnected,
    /// A connection attempt is in progress.
    Connecting,
    /// The room connection is live.
    Connected,
    /// The transport lost the connection and is retrying on its own.
    Reconnecting,
    /// The transport gave up; the attempt is over.
    Failed,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

/// Terminal disposition of a session attempt.
///
/// User hang-up and unexpected failure both end in the same local state
/// (disconnected, resources released) but are kept distinct so the
/// presentation layer can show an error only for the latter two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The user ended the session explicitly. Not an error.
    UserHangup,
    /// The transport reached `Failed` before the user hung up.
    ConnectionLost,
    /// The credential issuer refused the session request.
    IssuerRejected,
}
