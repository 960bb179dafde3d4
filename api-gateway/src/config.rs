//! Gateway configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use premium_common::{PremiumError, Result};
use premium_engine::DEFAULT_MODEL_PATH;

/// Optional config file, looked up in the working directory (`premium.toml`)
pub const CONFIG_FILE: &str = "premium";

/// Prefix for environment overrides (`PREMIUM_PORT`, `PREMIUM_MODEL_PATH`, ...)
pub const ENV_PREFIX: &str = "PREMIUM";

/// Gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Path to the JSON model artifact
    pub model_path: PathBuf,
    /// Allow cross-origin requests from any origin
    pub cors_allow_any: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            cors_allow_any: true,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from `.env`, `premium.toml`, and the environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        let mut cfg = Self::from_builder(builder)?;

        // Hosting platforms hand out the port via a bare PORT variable
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(p) = port.parse::<u16>() {
                cfg.port = p;
            }
        }

        Ok(cfg)
    }

    /// Parse configuration from TOML text, defaults filling the gaps
    pub fn from_toml(text: &str) -> Result<Self> {
        Self::from_builder(Config::builder().add_source(File::from_str(text, FileFormat::Toml)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| PremiumError::Config(e.to_string()))
    }

    /// Address to bind the listener to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| PremiumError::Config(format!("invalid bind address: {e}")))
    }
}
