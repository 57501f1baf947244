//! Application state: configuration, secrets, and agent wiring.

use std::time::Duration;

use northpole_core::agent::PersonaAgent;
use northpole_core::telemetry::{BoxTelemetryBackend, NoopTelemetry};
use northpole_infra::config::{load_global_config, resolve_data_dir};
use northpole_infra::llm::create_provider;
use northpole_infra::secret::{EnvSecretProvider, PHOSPHO_API_KEY, PHOSPHO_PROJECT_ID};
use northpole_infra::telemetry::{PhosphoClient, PhosphoConfig};
use northpole_types::config::GlobalConfig;

/// Why exchanges are not being logged, if they are not.
pub enum TelemetryStatus {
    Phospho { project_id: String },
    Disabled,
    MissingCredentials,
}

/// State shared by the CLI commands.
pub struct AppState {
    pub config: GlobalConfig,
    pub secrets: EnvSecretProvider,
}

impl AppState {
    /// Resolve the data directory and load `config.toml`.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;
        tracing::debug!(
            data_dir = %data_dir.display(),
            provider = %config.provider,
            "Configuration loaded"
        );

        Ok(Self {
            config,
            secrets: EnvSecretProvider::new(),
        })
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.config.intro_typing_delay_ms)
    }

    /// Build the persona agent for `provider`, or the configured vendor.
    pub fn build_agent(
        &self,
        provider: Option<&str>,
    ) -> anyhow::Result<(PersonaAgent, TelemetryStatus)> {
        let provider_name = provider
            .map(str::to_string)
            .unwrap_or_else(|| self.config.provider.to_string());
        let (telemetry, status) = self.build_telemetry();

        let agent = PersonaAgent::with_provider_name(
            &provider_name,
            |kind| {
                let api_key = self.secrets.require(kind.api_key_var())?;
                Ok(create_provider(kind, api_key))
            },
            telemetry,
        )?
        .with_typing_delay(self.typing_delay());

        Ok((agent, status))
    }

    fn build_telemetry(&self) -> (BoxTelemetryBackend, TelemetryStatus) {
        if !self.config.telemetry.enabled {
            return (BoxTelemetryBackend::new(NoopTelemetry), TelemetryStatus::Disabled);
        }

        let (Ok(api_key), Some(project_id)) = (
            self.secrets.require(PHOSPHO_API_KEY),
            self.secrets.get(PHOSPHO_PROJECT_ID),
        ) else {
            tracing::warn!(
                "{PHOSPHO_API_KEY} or {PHOSPHO_PROJECT_ID} not set, exchanges will not be logged"
            );
            return (
                BoxTelemetryBackend::new(NoopTelemetry),
                TelemetryStatus::MissingCredentials,
            );
        };

        let config = PhosphoConfig::new(api_key, project_id.clone())
            .with_base_url(self.config.telemetry.base_url.clone());
        (
            BoxTelemetryBackend::new(PhosphoClient::new(config)),
            TelemetryStatus::Phospho { project_id },
        )
    }
}
