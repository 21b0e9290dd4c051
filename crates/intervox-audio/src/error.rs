use thiserror::Error;

/// Failure reported by an [`crate::AudioBackend`] when asked to create a
/// playback context.
#[derive(Debug, Error)]
pub enum CreateContextError {
    /// The platform's autoplay policy refused creation because no user
    /// gesture has been observed yet. Recoverable: try again after the
    /// gesture gate unlocks.
    #[error("audio context creation blocked pending a user gesture")]
    AutoplayBlocked,

    /// Any other backend failure. Not recoverable by waiting.
    #[error("audio backend error: {0}")]
    Backend(String),
}

/// Failure surfaced by the registry to its caller.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The platform refused creation even after the gesture signal. The
    /// registry does not retry; the caller decides whether to prompt again.
    #[error("platform refused audio resource creation: {0}")]
    ResourceUnavailable(String),
}
