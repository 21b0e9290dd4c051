//! Client for the session credential issuer.

use std::time::Duration;

use intervox_types::{Credential, SessionContext};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::IssuerConfig;
use crate::error::IssuerError;

/// Everything needed to open one room connection: the issued credential and
/// the server URL to point the transport at.
///
/// The URL comes from configuration today, but it is threaded through here so
/// the issuer layer can substitute a regional or per-session override without
/// touching callers.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub credential: Credential,
    pub server_url: String,
}

/// JSON body of the credential request. The issuer stores the whole metadata
/// object on the participant identity, so the agent sees both the structured
/// fields and the rendered candidate sheet.
#[derive(Serialize)]
struct TokenRequest<'a> {
    metadata: Metadata<'a>,
}

#[derive(Serialize)]
struct Metadata<'a> {
    #[serde(flatten)]
    context: &'a SessionContext,
    candidate_detail: String,
}

/// Issuer response. The field names are the external contract.
#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
    identity: String,
}

/// Fetches short-lived session credentials from the issuing service.
///
/// Single-shot: no retry, no caching. Overlapping acquisitions are allowed
/// (each is logically a new session attempt); the caller keeps whichever
/// result it processes last, which is fine because only one session is ever
/// alive in the UI.
#[derive(Debug, Clone)]
pub struct CredentialClient {
    http: reqwest::Client,
    token_url: String,
    server_url: String,
}

impl CredentialClient {
    /// # Errors
    ///
    /// Returns `IssuerError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &IssuerConfig) -> Result<Self, IssuerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            token_url: config.token_url.clone(),
            server_url: config.server_url.clone(),
        })
    }

    /// Requests a credential for `context`.
    ///
    /// # Errors
    ///
    /// `IssuerError::Status` on a non-success response, `IssuerError::Transport`
    /// on a network failure or an undecodable body. Either way the session
    /// attempt is over; there is no partial credential.
    pub async fn acquire(&self, context: &SessionContext) -> Result<IssuedSession, IssuerError> {
        debug!(url = %self.token_url, "requesting session credential");

        let request = TokenRequest {
            metadata: Metadata {
                context,
                candidate_detail: context.candidate_detail(),
            },
        };

        let response = self.http.post(&self.token_url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "issuer rejected credential request");
            return Err(IssuerError::Status(status));
        }

        let body: TokenResponse = response.json().await?;
        info!(identity = %body.identity, "session credential issued");

        Ok(IssuedSession {
            credential: Credential::new(body.access_token, body.identity),
            server_url: self.server_url.clone(),
        })
    }
}
