/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub debug: bool,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, json_format: bool, debug: bool) -> Self {
        Self {
            environment: environment.into(),
            json_format,
            debug,
        }
    }

    pub fn default_filter(&self) -> &'static str {
        if self.debug {
            "debug,tldr_server=debug,tower_http=debug"
        } else {
            "info,tldr_server=info,tower_http=info"
        }
    }
}
