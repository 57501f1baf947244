use thiserror::Error;

use crate::llm::LlmError;

/// Errors raised while assembling an agent from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid provider '{0}' (expected 'openai' or 'mistral')")]
    UnknownProvider(String),

    #[error("missing secret '{0}'")]
    MissingSecret(String),
}

/// Errors from the logging/observability backend.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("telemetry transport error: {0}")]
    Transport(String),

    #[error("telemetry backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("telemetry backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by agent operations to the caller.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("conversation history is empty")]
    EmptyHistory,
}
