//! Configuration and per-vendor defaults for OpenAI-compatible providers.

use secrecy::SecretString;

use northpole_types::llm::ProviderKind;

/// Configuration for an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name ("openai", "mistral").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
}

/// OpenAI default configuration.
///
/// Base URL: `https://api.openai.com/v1`
pub fn openai_defaults(api_key: SecretString) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: "https://api.openai.com/v1".into(),
        api_key,
    }
}

/// Mistral AI default configuration.
///
/// Base URL: `https://api.mistral.ai/v1`
pub fn mistral_defaults(api_key: SecretString) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "mistral".into(),
        base_url: "https://api.mistral.ai/v1".into(),
        api_key,
    }
}

/// Defaults for `kind`.
pub fn defaults_for(kind: ProviderKind, api_key: SecretString) -> OpenAiCompatConfig {
    match kind {
        ProviderKind::OpenAi => openai_defaults(api_key),
        ProviderKind::Mistral => mistral_defaults(api_key),
    }
}
