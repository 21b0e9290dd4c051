//! Session credentials issued by the token service.

use std::fmt;

/// Short-lived access credential for one room connection attempt.
///
/// Opaque to this core beyond being handed to the transport's connect call.
/// Expiry is enforced by the issuer; a failed or expired credential requires
/// a whole new session attempt, never a renewal.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Bearer token authorizing the room join.
    pub token: String,
    /// Participant identity assigned by the issuer.
    pub identity: String,
}

impl Credential {
    pub fn new(token: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            identity: identity.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"[REDACTED]")
            .field("identity", &self.identity)
            .finish()
    }
}
