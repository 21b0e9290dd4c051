//! Shared types for the Intervox session core.
//!
//! This crate provides the foundational types used across the session
//! lifecycle crates: the participant context sent to the credential issuer,
//! the issued credential itself, and the connection-state vocabulary shared
//! with the real-time transport.
//!
//! No crate in the workspace depends on anything *except* `intervox-types`
//! for cross-cutting type definitions. This keeps the dependency graph clean
//! and prevents circular dependencies.

pub mod connection;
pub mod context;
pub mod credential;

pub use connection::{ConnectionState, EndReason};
pub use context::SessionContext;
pub use credential::Credential;
