//! Shared domain types for the northpole agent.
//!
//! Messages, provider selection, session/exchange identifiers, feedback
//! records, configuration, and the error enums used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod telemetry;
