use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Local development; the CLI enables ANSI log colors only here.
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// YAML seed file; the built-in sample catalog is used when `None`.
    pub catalog_path: Option<PathBuf>,
    pub default_location: String,
    /// Locations with an AQI strictly above this are listed as alerts.
    pub alert_threshold: u32,
    pub alert_limit: usize,
}
