use thiserror::Error;

/// Credential fetch failed. The session attempt is unavailable; there is no
/// partial credential and no built-in retry.
#[derive(Debug, Error)]
pub enum IssuerError {
    /// Network failure or undecodable response body.
    #[error("credential request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The issuer answered with a non-success status.
    #[error("issuer returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Failure reported by the transport behind [`crate::RoomConnection`].
#[derive(Debug, Error)]
pub enum RoomError {
    /// The transport reached its `Failed` state while connecting.
    #[error("room connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Failure of one session attempt. Scoped to the attempt: recoverable by
/// starting a new one, never fatal to the application.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Issuer(#[from] IssuerError),

    #[error("connection failed: {0}")]
    Connection(#[from] RoomError),
}
