mod file_config;

pub use file_config::{FileConfig, HarvardConfig, MetConfig};

use crate::providers::{harvard, met};
use crate::server::RequestsLoggingLevel;
use anyhow::Result;
use clap::ValueEnum;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub request_timeout_sec: u64,
    pub harvard_api_key: Option<String>,
}

/// Process-wide configuration, resolved once at startup and immutable
/// thereafter.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub request_timeout_sec: u64,

    pub harvard: HarvardSettings,
    pub met: MetSettings,
}

#[derive(Debug, Clone)]
pub struct HarvardSettings {
    /// Effective flag: configured on and an API key is present.
    pub enabled: bool,
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct MetSettings {
    pub enabled: bool,
    pub search_url: String,
    pub object_url: String,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let request_timeout_sec = file.request_timeout_sec.unwrap_or(cli.request_timeout_sec);

        let harvard_file = file.harvard.unwrap_or_default();
        let api_key = harvard_file
            .api_key
            .or_else(|| cli.harvard_api_key.clone());
        let harvard = HarvardSettings {
            enabled: harvard_file.enabled.unwrap_or(true) && api_key.is_some(),
            api_key,
            base_url: harvard_file
                .base_url
                .unwrap_or_else(|| harvard::DEFAULT_BASE_URL.to_string()),
        };

        let met_file = file.met.unwrap_or_default();
        let met = MetSettings {
            enabled: met_file.enabled.unwrap_or(true),
            search_url: met_file
                .search_url
                .unwrap_or_else(|| met::DEFAULT_SEARCH_URL.to_string()),
            object_url: met_file
                .object_url
                .unwrap_or_else(|| met::DEFAULT_OBJECT_URL.to_string()),
        };

        Ok(Self {
            port,
            logging_level,
            frontend_dir_path,
            request_timeout_sec,
            harvard,
            met,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
