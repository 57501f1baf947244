//! LLM provider implementations.
//!
//! Both supported vendors speak the OpenAI chat completions protocol, so a
//! single [`OpenAiCompatibleProvider`] covers them. [`create_provider`] is the
//! factory handed to `PersonaAgent::with_provider_name`.

pub mod openai_compat;

use secrecy::SecretString;

use northpole_core::llm::box_provider::BoxLlmProvider;
use northpole_types::llm::ProviderKind;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::defaults_for;

/// Create a [`BoxLlmProvider`] for `kind`.
///
/// No network traffic happens here; the first request is made when the
/// agent streams its first answer.
pub fn create_provider(kind: ProviderKind, api_key: SecretString) -> BoxLlmProvider {
    let provider = OpenAiCompatibleProvider::new(defaults_for(kind, api_key));
    tracing::debug!(provider = %kind, "LLM provider created");
    BoxLlmProvider::new(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_mistral() {
        let provider =
            create_provider(ProviderKind::Mistral, SecretString::from("key".to_string()));
        assert_eq!(provider.name(), "mistral");
    }
}
