use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options for the inventory service.
///
/// Values come from `config/default.yaml` when present, overridden by
/// environment variables (`DATABASE_URL`, `ADDRESS`, `PORT`).
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    pub address: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "inventory.db")?
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
