//! The real-time transport seam.

use async_trait::async_trait;
use intervox_types::ConnectionState;
use tokio::sync::watch;

use crate::error::RoomError;

/// Capability exposed by the real-time room transport.
///
/// The session core only calls these methods and observes the state channel;
/// it never implements the transport. Contract notes:
///
/// - [`connect`](RoomConnection::connect) resolves once the transport reaches
///   `Connected` and errs if it reaches `Failed` instead. Intermediate
///   `Reconnecting` excursions after a successful connect do not resolve or
///   fail anything; they only show up on the state channel.
/// - [`set_microphone_enabled`](RoomConnection::set_microphone_enabled) must
///   be idempotent: re-applying the current value is a no-op with no
///   user-visible effect.
#[async_trait]
pub trait RoomConnection: Send + Sync + 'static {
    async fn connect(&self, server_url: &str, token: &str) -> Result<(), RoomError>;

    /// Channel carrying the transport's connection state. The receiver always
    /// reflects the latest state; intermediate transitions may coalesce.
    fn state(&self) -> watch::Receiver<ConnectionState>;

    async fn set_microphone_enabled(&self, enabled: bool) -> Result<(), RoomError>;

    async fn disconnect(&self);
}
