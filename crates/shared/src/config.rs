//! Application configuration management.
//!
//! Configuration is read once at startup. Capability tokens fall back to the
//! shared `TALLYBOX_API_TOKEN`; whatever is still missing after that is
//! reported in a single error.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::auth::{ApiTokens, Capability};

/// Environment variable holding the data directory.
pub const DATA_DIR_VAR: &str = "TALLYBOX_DATA_DIR_PATH";
/// Environment variable holding the shared default token.
pub const DEFAULT_TOKEN_VAR: &str = "TALLYBOX_API_TOKEN";

/// Configuration errors raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required values absent after fallback resolution.
    #[error("Missing environment variables: {}", .0.join(", "))]
    Missing(Vec<String>),

    /// Configuration sources could not be read.
    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

/// Finalized application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Directory holding `total.txt`, `history.json` and `version.txt`.
    pub data_dir: PathBuf,
    /// Bearer tokens per capability.
    pub tokens: ApiTokens,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Configuration as read from the sources, before fallback resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    /// `[server]` table / `TALLYBOX_SERVER__*`.
    #[serde(default)]
    pub server: ServerConfig,
    /// `TALLYBOX_DATA_DIR_PATH`.
    pub data_dir_path: Option<String>,
    /// `TALLYBOX_API_TOKEN`.
    pub api_token: Option<String>,
    /// `TALLYBOX_API_GET_TOTAL_TOKEN`.
    pub api_get_total_token: Option<String>,
    /// `TALLYBOX_API_GET_HISTORY_TOKEN`.
    pub api_get_history_token: Option<String>,
    /// `TALLYBOX_API_SET_TOKEN`.
    pub api_set_token: Option<String>,
}

impl RawConfig {
    fn capability_token(&self, capability: Capability) -> Option<&String> {
        match capability {
            Capability::ReadTotal => self.api_get_total_token.as_ref(),
            Capability::ReadHistory => self.api_get_history_token.as_ref(),
            Capability::ReadWrite => self.api_set_token.as_ref(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `TALLYBOX_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a required value is
    /// missing.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let raw: RawConfig = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("TALLYBOX")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Self::resolve(raw)
    }

    /// Applies token fallbacks and checks that everything required is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every missing variable.
    pub fn resolve(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();

        if raw.data_dir_path.is_none() {
            missing.push(format!("[{DATA_DIR_VAR}]"));
        }

        let resolve_token = |capability: Capability| {
            raw.capability_token(capability)
                .or(raw.api_token.as_ref())
                .cloned()
        };
        let read_total = resolve_token(Capability::ReadTotal);
        let read_history = resolve_token(Capability::ReadHistory);
        let read_write = resolve_token(Capability::ReadWrite);

        for (capability, token) in [
            (Capability::ReadTotal, &read_total),
            (Capability::ReadHistory, &read_history),
            (Capability::ReadWrite, &read_write),
        ] {
            if token.is_none() {
                missing.push(format!(
                    "[{} or {DEFAULT_TOKEN_VAR}]",
                    capability.env_var()
                ));
            }
        }

        let (Some(data_dir), Some(read_total), Some(read_history), Some(read_write)) =
            (raw.data_dir_path, read_total, read_history, read_write)
        else {
            return Err(ConfigError::Missing(missing));
        };

        Ok(Self {
            server: raw.server,
            data_dir: PathBuf::from(data_dir),
            tokens: ApiTokens {
                read_total,
                read_history,
                read_write,
            },
        })
    }

    /// Address string the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
