use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Port used when neither `PORT` nor `APP__PORT` is set.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    /// Load the shared settings.
    ///
    /// Precedence, lowest first: optional `configuration` file, `APP__*`
    /// variables, then the plain `PORT` variable.
    pub fn load() -> Result<Self, AppError> {
        Self::from_port_override(std::env::var("PORT").ok())
    }

    pub fn from_port_override(port: Option<String>) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port.filter(|p| !p.trim().is_empty()))?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
