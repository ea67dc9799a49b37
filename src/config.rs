use serde::Deserialize;
use config::{Config, ConfigError};
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub ozon: OzonConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OzonConfig {
    pub base_url: String,
    pub client_id: String,
    pub api_key: String,
}

impl Settings {
    /// Loads settings from `config/default` (optional) and the environment.
    ///
    /// Credentials default to empty strings when unset: the client is still
    /// constructed, and upstream rejections take the generic failure path at
    /// call time.
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("ozon.base_url", "https://api-seller.ozon.ru")?
            .set_default("ozon.client_id", "")?
            .set_default("ozon.api_key", "")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("OZONPROFIT").separator("__"));

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        debug!(
            base_url = %settings.ozon.base_url,
            client_id = %settings.ozon.client_id,
            "Loaded marketplace configuration"
        );

        Ok(settings)
    }
}
