//! Platform audio capability, injected as a trait.

use crate::error::CreateContextError;

/// Latency profile requested for a playback context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatencyHint {
    /// Lowest latency the platform offers; suited to conversational audio.
    #[default]
    Interactive,
    /// Balance latency against power consumption.
    Balanced,
    /// Favor smooth playback over latency.
    Playback,
}

/// Options forwarded to the platform when creating a playback context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioContextOptions {
    /// Requested sample rate in Hz, or the platform default when `None`.
    pub sample_rate: Option<u32>,
    pub latency_hint: LatencyHint,
}

/// The platform's "create audio context" capability.
///
/// Implementations may refuse creation with
/// [`CreateContextError::AutoplayBlocked`] until a user gesture has been
/// observed; the registry handles the wait-and-retry. `Handle` is whatever
/// live resource the platform hands out; the registry only ever moves it
/// behind an `Arc` and compares identities.
pub trait AudioBackend: Send + Sync + 'static {
    type Handle: Send + Sync + 'static;

    fn create_context(
        &self,
        options: &AudioContextOptions,
    ) -> Result<Self::Handle, CreateContextError>;
}
