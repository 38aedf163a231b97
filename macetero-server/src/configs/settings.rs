use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::configs::normalize_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub migration_path: Option<String>,
    pub clean_start: bool,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub database: Database,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let config_dir = normalize_path("~/configs")
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        let settings = Config::builder()
            .add_source(File::from(config_dir.join("default")))
            .add_source(File::from(config_dir.join(&run_mode)).required(false))
            .add_source(Environment::with_prefix("MACETERO").separator("__"))
            .build()?
            .try_deserialize()?;

        Self::resolve_paths(settings)
    }

    fn resolve_paths(mut settings: Settings) -> Result<Self, ConfigError> {
        if let Some(migrate) = &settings.database.migration_path {
            let migrate_path = normalize_path(migrate)
                .map_err(|e| ConfigError::Message(e.to_string()))?;

            settings.database.migration_path = Path::new(&migrate_path)
                .is_dir()
                .then(|| migrate_path.to_string_lossy().to_string());
        }

        Ok(settings)
    }
}
