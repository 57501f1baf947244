//! Agent logic and port definitions for northpole.
//!
//! This crate defines the "ports" the infrastructure layer implements
//! ([`llm::provider::LlmProvider`], [`telemetry::TelemetryBackend`]) and the
//! persona agent built on top of them. It depends only on `northpole-types`
//! -- never on `northpole-infra` or any HTTP crate.

pub mod agent;
pub mod llm;
pub mod stream;
pub mod telemetry;
