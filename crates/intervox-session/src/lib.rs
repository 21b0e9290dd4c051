//! Voice-session lifecycle for the Intervox interview front end.
//!
//! Ties together the three steps of getting a participant into a live
//! interview: fetching a short-lived credential from the token issuer
//! ([`CredentialClient`]), opening the real-time room connection with it, and
//! reconciling local user intent (mute, hang-up) with asynchronous
//! connection-state transitions ([`SessionController`]).
//!
//! The transport is a black box injected through the [`RoomConnection`]
//! trait; this crate produces state and side effects for a presentation
//! layer, never UI output.

pub mod config;
pub mod controller;
pub mod credential;
pub mod error;
pub mod room;

pub use config::{load_config, Config, ConfigError, IssuerConfig, LoggingConfig};
pub use controller::{SessionController, SessionStatus};
pub use credential::{CredentialClient, IssuedSession};
pub use error::{IssuerError, RoomError, SessionError};
pub use room::RoomConnection;
