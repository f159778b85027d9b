//! Configuration for the Study Strategy Server
//!
//! The configuration is an explicit value constructed at startup and
//! passed to the routing layer; there is no global application object.
//!
//! Environment variables (all optional, with development defaults):
//!
//! - `STUDY_STRATEGY_PORT`: HTTP listen port (default 8080)
//! - `STUDY_STRATEGY_LOG_LEVEL`: fallback tracing filter when `RUST_LOG`
//!   is unset (default "info")
//! - `SERVICE_NAME`: service identifier used in startup logs
//! - `PLATFORM_ENV`: dev | staging | prod

use serde::Deserialize;
use std::env;

/// Platform environment.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlatformEnv {
    #[default]
    Dev,
    Staging,
    Prod,
}

/// Server configuration.
///
/// The service holds no cross-request state and calls no downstream
/// systems, so the surface is small: where to listen and how to log.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Platform environment
    #[serde(default)]
    pub platform_env: PlatformEnv,

    /// Service name for startup logging
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Fallback tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    8080
}

fn default_service_name() -> String {
    "study-strategy-server".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// development defaults for anything unset.
    pub fn load() -> Self {
        let platform_env = match env::var("PLATFORM_ENV")
            .unwrap_or_else(|_| "dev".to_string())
            .as_str()
        {
            "prod" => PlatformEnv::Prod,
            "staging" => PlatformEnv::Staging,
            _ => PlatformEnv::Dev,
        };

        Self {
            port: env::var("STUDY_STRATEGY_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_port),
            platform_env,
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| default_service_name()),
            log_level: env::var("STUDY_STRATEGY_LOG_LEVEL")
                .unwrap_or_else(|_| default_log_level()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            platform_env: PlatformEnv::default(),
            service_name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}
