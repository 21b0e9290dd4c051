//! Audio playback resource management for the Intervox session core.
//!
//! Platforms gate the creation of active audio output contexts behind a user
//! gesture (pointer or key press). This crate owns that dance: a registry
//! caches at most one live playback context per key, and a one-shot gesture
//! gate lets callers that arrived too early suspend until the first gesture
//! is reported, then finish creation.
//!
//! The platform capability itself is injected through the [`AudioBackend`]
//! trait; this crate never touches audio hardware directly.

pub mod backend;
pub mod error;
pub mod gesture;
pub mod registry;

pub use backend::{AudioBackend, AudioContextOptions, LatencyHint};
pub use error::{AudioError, CreateContextError};
pub use gesture::GestureGate;
pub use registry::AudioResourceRegistry;
