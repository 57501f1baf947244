//! Global configuration types for the northpole agent.
//!
//! `GlobalConfig` represents the top-level `config.toml` that selects the
//! LLM vendor, the intro typing speed, and the telemetry endpoint.

use serde::{Deserialize, Serialize};

use crate::llm::ProviderKind;

/// Default phospho API root.
pub const DEFAULT_TELEMETRY_BASE_URL: &str = "https://api.phospho.ai/v2";

/// Top-level configuration.
///
/// Loaded from `~/.northpole/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// LLM vendor; the model follows from it.
    #[serde(default)]
    pub provider: ProviderKind,

    /// Delay between the words of the typed greeting.
    #[serde(default = "default_intro_typing_delay_ms")]
    pub intro_typing_delay_ms: u64,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

fn default_intro_typing_delay_ms() -> u64 {
    50
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            intro_typing_delay_ms: default_intro_typing_delay_ms(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Logging backend settings. Credentials are read from the environment,
/// never from this file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    DEFAULT_TELEMETRY_BASE_URL.to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
        }
    }
}
