//! LLM request/response types for the northpole agent.
//!
//! These types model the data shapes for LLM provider interactions:
//! chat messages, streaming chunks, provider selection, and error handling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Role of a message in an LLM conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Streaming chat completion request sent to a provider.
///
/// `messages` is sent verbatim; the persona instruction is already the
/// first element by the time a request is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

/// One chunk of a streamed chat completion.
///
/// `delta` is the first choice's text delta. It is `None` for chunks that
/// carry no text (role-only openers, finish markers).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChunk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

impl ChatChunk {
    /// A chunk carrying only a text delta.
    pub fn text(delta: impl Into<String>) -> Self {
        Self {
            delta: Some(delta.into()),
        }
    }
}

/// Errors from LLM provider operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("stream error: {0}")]
    Stream(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("provider overloaded: {0}")]
    Overloaded(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("context length exceeded")]
    ContextLengthExceeded,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Hosted LLM vendor backing the agent.
///
/// Both vendors speak the OpenAI chat completions protocol; the kind picks
/// the base URL, the API key variable, and the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Mistral,
}

impl ProviderKind {
    /// Model identifier used for this vendor.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-4o-mini",
            ProviderKind::Mistral => "open-mistral-7b",
        }
    }

    /// Environment variable holding the vendor API key.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Mistral => "MISTRAL_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Mistral => write!(f, "mistral"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "mistral" => Ok(ProviderKind::Mistral),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_display_matches_serde() {
        for role in [MessageRole::System, MessageRole::User, MessageRole::Assistant] {
            let json = serde_json::to_value(role).unwrap();
            assert_eq!(json, serde_json::json!(role.to_string()));
        }
    }

    #[test]
    fn test_message_serde_keeps_role_and_content_only() {
        let msg = Message::user("Hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "Hello"}));
    }

    #[test]
    fn test_provider_kind_models() {
        assert_eq!(ProviderKind::OpenAi.default_model(), "gpt-4o-mini");
        assert_eq!(ProviderKind::Mistral.default_model(), "open-mistral-7b");
    }

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("openai".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!("Mistral".parse::<ProviderKind>().unwrap(), ProviderKind::Mistral);

        let err = "anthropic".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProvider(ref name) if name == "anthropic"));
    }

    #[test]
    fn test_provider_kind_serde() {
        let json = serde_json::to_string(&ProviderKind::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");
        let parsed: ProviderKind = serde_json::from_str("\"mistral\"").unwrap();
        assert_eq!(parsed, ProviderKind::Mistral);
    }

    #[test]
    fn test_chat_chunk_empty_delta_is_none() {
        let chunk = ChatChunk::default();
        assert!(chunk.delta.is_none());
        assert_eq!(ChatChunk::text("Ho").delta.as_deref(), Some("Ho"));
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::RateLimited {
            retry_after_ms: Some(1500),
        };
        assert!(err.to_string().contains("1500"));
    }
}
