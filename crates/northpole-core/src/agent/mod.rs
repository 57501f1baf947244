//! The persona agent.
//!
//! `PersonaAgent` ties a streaming LLM provider to a telemetry backend:
//! - `persona`: the fixed system instruction
//! - `intro`: the typed greeting
//! - `relay`: persona-conditioned answer streaming with exchange logging
//! - `feedback`: user ratings for logged exchanges

pub mod feedback;
pub mod intro;
pub mod persona;
pub mod relay;

#[cfg(test)]
pub(crate) mod test_support;

use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, info};

use northpole_types::error::AgentError;
use northpole_types::llm::ProviderKind;
use northpole_types::telemetry::SessionId;

use crate::llm::box_provider::BoxLlmProvider;
use crate::telemetry::BoxTelemetryBackend;

use self::intro::{DEFAULT_TYPING_DELAY, IntroStream};

/// Conversational agent speaking with a fixed persona.
///
/// Holds no conversation state: the caller owns the history, the session
/// id, and the exchange handles, so one agent can serve many sessions.
pub struct PersonaAgent {
    provider_kind: ProviderKind,
    model: String,
    llm: BoxLlmProvider,
    telemetry: BoxTelemetryBackend,
    typing_delay: Duration,
}

impl PersonaAgent {
    /// Create an agent for `provider_kind` using its default model.
    pub fn new(
        provider_kind: ProviderKind,
        llm: BoxLlmProvider,
        telemetry: BoxTelemetryBackend,
    ) -> Self {
        let model = provider_kind.default_model().to_string();
        info!(
            provider = %provider_kind,
            model = %model,
            llm = llm.name(),
            telemetry = telemetry.name(),
            "Agent created"
        );
        Self {
            provider_kind,
            model,
            llm,
            telemetry,
            typing_delay: DEFAULT_TYPING_DELAY,
        }
    }

    /// Create an agent from a provider name such as `"openai"` or `"mistral"`.
    ///
    /// The name is validated before `build_llm` runs, so an unknown name
    /// fails with a configuration error without constructing any client.
    /// The model travels with each request, so `build_llm` only needs the
    /// vendor.
    pub fn with_provider_name<F>(
        provider: &str,
        build_llm: F,
        telemetry: BoxTelemetryBackend,
    ) -> Result<Self, AgentError>
    where
        F: FnOnce(ProviderKind) -> Result<BoxLlmProvider, AgentError>,
    {
        let kind = ProviderKind::from_str(provider)?;
        let llm = build_llm(kind)?;
        Ok(Self::new(kind, llm, telemetry))
    }

    /// Override the pause between words of the typed greeting.
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider_kind
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Access the telemetry backend (e.g., to flush before exit).
    pub fn telemetry(&self) -> &BoxTelemetryBackend {
        &self.telemetry
    }

    /// Request a new session id from the telemetry backend.
    pub async fn new_session(&self) -> Result<SessionId, AgentError> {
        let session_id = self.telemetry.new_session().await?;
        debug!(session_id = %session_id, "Session created");
        Ok(session_id)
    }

    /// Greet the user with a randomly chosen, progressively typed intro.
    ///
    /// `session_id` is only attached to the log line.
    pub fn random_intro(&self, session_id: &SessionId) -> IntroStream {
        let greeting = intro::choose_intro();
        debug!(session_id = %session_id, greeting, "Intro selected");
        intro::intro_from(greeting, self.typing_delay)
    }
}
