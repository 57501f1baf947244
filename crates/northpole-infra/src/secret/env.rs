//! Environment variable secret provider.
//!
//! API keys and the phospho project are read from the process environment:
//! `OPENAI_API_KEY`, `MISTRAL_API_KEY`, `PHOSPHO_API_KEY`, `PHOSPHO_PROJECT_ID`.

use secrecy::SecretString;

use northpole_types::error::ConfigError;

/// Read-only secret provider backed by environment variables.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Value of `key`, or `None` when unset, empty, or not valid Unicode.
    pub fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(val) if !val.trim().is_empty() => Some(val),
            // Empty values and invalid Unicode count as unset
            _ => None,
        }
    }

    /// Value of `key` wrapped as a secret.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingSecret`] when the variable is unset.
    pub fn require(&self, key: &str) -> Result<SecretString, ConfigError> {
        self.get(key)
            .map(SecretString::from)
            .ok_or_else(|| ConfigError::MissingSecret(key.to_string()))
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_env_provider_get_existing() {
        // SAFETY: unique variable name, removed below.
        unsafe { std::env::set_var("NORTHPOLE_TEST_SECRET_1", "test-value-123") };

        let provider = EnvSecretProvider::new();
        assert_eq!(
            provider.get("NORTHPOLE_TEST_SECRET_1"),
            Some("test-value-123".to_string())
        );
        let secret = provider.require("NORTHPOLE_TEST_SECRET_1").unwrap();
        assert_eq!(secret.expose_secret(), "test-value-123");

        // SAFETY: the var was just set above.
        unsafe { std::env::remove_var("NORTHPOLE_TEST_SECRET_1") };
    }

    #[test]
    fn test_env_provider_get_missing() {
        let provider = EnvSecretProvider::new();
        assert!(provider.get("NONEXISTENT_VAR_XYZ_123").is_none());
    }

    #[test]
    fn test_env_provider_empty_counts_as_missing() {
        // SAFETY: unique variable name, removed below.
        unsafe { std::env::set_var("NORTHPOLE_TEST_SECRET_EMPTY", "  ") };

        let provider = EnvSecretProvider::new();
        let err = provider.require("NORTHPOLE_TEST_SECRET_EMPTY").unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecret(ref key) if key == "NORTHPOLE_TEST_SECRET_EMPTY"));

        // SAFETY: the var was just set above.
        unsafe { std::env::remove_var("NORTHPOLE_TEST_SECRET_EMPTY") };
    }
}
