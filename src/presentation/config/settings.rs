use std::time::Duration;

use config::{Config, ConfigBuilder, File, builder::DefaultState};
use serde::Deserialize;

use super::environment::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(skip)]
    pub environment: Environment,
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub text: TextSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub base_url: String,
    pub model: String,
    pub probe_timeout_secs: u64,
    pub models_timeout_secs: u64,
    pub generation_timeout_secs: u64,
    pub refresh_interval_secs: Option<u64>,
}

impl BackendSettings {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn models_timeout(&self) -> Duration {
        Duration::from_secs(self.models_timeout_secs)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Periodic re-probe interval; `None` (or zero) disables it.
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextSettings {
    pub max_length: usize,
    pub min_length: usize,
    pub segmentation: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("environment: {0}")]
    Environment(String),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Flat variable names still set by older deployments, mapped onto settings keys.
const LEGACY_VARIABLES: [(&str, &str); 6] = [
    ("OLLAMA_BASE_URL", "backend.base_url"),
    ("OLLAMA_MODEL", "backend.model"),
    ("MAX_TEXT_LENGTH", "text.max_length"),
    ("MIN_TEXT_LENGTH", "text.min_length"),
    ("PORT", "server.port"),
    ("FLASK_DEBUG", "server.debug"),
];

/// Values of the legacy flat variables that were set.
#[derive(Debug, Clone, Default)]
pub struct LegacyOverrides {
    values: Vec<(&'static str, String)>,
}

impl LegacyOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let values = LEGACY_VARIABLES
            .iter()
            .filter_map(|(variable, key)| {
                lookup(variable).map(|value| (*key, legacy_value(variable, value)))
            })
            .collect();
        Self { values }
    }

    fn apply(
        &self,
        mut builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        for (key, value) in &self.values {
            builder = builder.set_override(*key, value.as_str())?;
        }
        Ok(builder)
    }
}

/// `FLASK_DEBUG` is on only for `true`, in any case; every other value is off.
fn legacy_value(variable: &str, value: String) -> String {
    if variable == "FLASK_DEBUG" {
        value.eq_ignore_ascii_case("true").to_string()
    } else {
        value
    }
}

impl Settings {
    /// Loads `.env`, then layers defaults, `appsettings.{env}`, `APP__*`
    /// variables and the legacy flat variables, in that order.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        let environment = Environment::from_env().map_err(SettingsError::Environment)?;
        Self::load_for(environment, &LegacyOverrides::from_env())
    }

    pub fn load_for(
        environment: Environment,
        overrides: &LegacyOverrides,
    ) -> Result<Self, SettingsError> {
        let builder = Self::with_defaults(Config::builder())?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut settings: Settings = overrides.apply(builder)?.build()?.try_deserialize()?;
        settings.environment = environment;
        settings.validate()?;
        Ok(settings)
    }

    fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("server.debug", false)?
            .set_default("backend.base_url", "http://localhost:11434")?
            .set_default("backend.model", "llama3.1:8b")?
            .set_default("backend.probe_timeout_secs", 5_i64)?
            .set_default("backend.models_timeout_secs", 10_i64)?
            .set_default("backend.generation_timeout_secs", 60_i64)?
            .set_default("text.max_length", 50_000_i64)?
            .set_default("text.min_length", 100_i64)?
            .set_default("text.segmentation", true)?
            .set_default("logging.json", false)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.server.port == 0 {
            return Err(SettingsError::Invalid("server.port must be non-zero".to_string()));
        }
        if self.backend.base_url.trim().is_empty() {
            return Err(SettingsError::Invalid("backend.base_url is empty".to_string()));
        }
        if self.backend.model.trim().is_empty() {
            return Err(SettingsError::Invalid("backend.model is empty".to_string()));
        }
        if self.text.max_length == 0 {
            return Err(SettingsError::Invalid("text.max_length must be non-zero".to_string()));
        }
        if self.text.min_length > self.text.max_length {
            return Err(SettingsError::Invalid(format!(
                "text.min_length ({}) exceeds text.max_length ({})",
                self.text.min_length, self.text.max_length
            )));
        }
        Ok(())
    }
}
