mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    BackendSettings, LegacyOverrides, LoggingSettings, ServerSettings, Settings, SettingsError,
    TextSettings,
};
