//! Wires the session core together against a stub transport.
//!
//! Points at a real credential issuer (override with `INTERVOX_TOKEN_URL`),
//! then walks through connect, a mute toggle, and hang-up. Run with:
//!
//! ```sh
//! cargo run -p intervox-session --example interview
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use intervox_session::{
    load_config, CredentialClient, RoomConnection, RoomError, SessionController,
};
use intervox_types::{ConnectionState, SessionContext};
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Transport stand-in that logs what a real room client would do.
struct StubRoom {
    state_tx: watch::Sender<ConnectionState>,
}

impl StubRoom {
    fn new() -> Self {
        let (state_tx, _) = watch::channel(ConnectionState::Disconnected);
        Self { state_tx }
    }
}

#[async_trait]
impl RoomConnection for StubRoom {
    async fn connect(&self, server_url: &str, token: &str) -> Result<(), RoomError> {
        info!(server_url, token_len = token.len(), "stub room connecting");
        self.state_tx.send_replace(ConnectionState::Connecting);
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        self.state_tx.send_replace(ConnectionState::Connected);
        Ok(())
    }

    fn state(&self) -> watch::Receiver<ConnectionState> {
        self.state_tx.subscribe()
    }

    async fn set_microphone_enabled(&self, enabled: bool) -> Result<(), RoomError> {
        info!(enabled, "stub room microphone state applied");
        Ok(())
    }

    async fn disconnect(&self) {
        info!("stub room disconnected");
        self.state_tx.send_replace(ConnectionState::Disconnected);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(None)?;

    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let context = SessionContext {
        name: "Ada".to_string(),
        industry: "Research".to_string(),
        prompt: "ask about her current project".to_string(),
        ..Default::default()
    };

    let client = CredentialClient::new(&config.issuer)?;
    let room = Arc::new(StubRoom::new());
    let controller = SessionController::new(Arc::clone(&room));

    controller.start(&client, &context).await?;
    info!("session active");

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    let muted = controller.toggle_mute().await;
    info!(muted, "toggled mute");

    controller.terminate().await;
    info!("session ended");
    Ok(())
}
