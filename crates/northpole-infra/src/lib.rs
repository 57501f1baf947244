//! Infrastructure implementations for northpole.
//!
//! Concrete adapters for the ports defined in `northpole-core`:
//! - `llm`: OpenAI-compatible streaming provider (OpenAI, Mistral)
//! - `telemetry`: phospho logging backend
//! - `config`: `config.toml` loader and data directory resolution
//! - `secret`: environment variable secrets

pub mod config;
pub mod llm;
pub mod secret;
pub mod telemetry;
