//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::infrastructure::driving_adapters::plan::dto::TopologyRequestDto;

/// Plan output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Include every recorded creation call in the report
    #[serde(default = "default_include_calls")]
    pub include_calls: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            include_calls: default_include_calls(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

fn default_include_calls() -> bool {
    true
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is not set
    #[serde(default)]
    pub filter: Option<String>,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub topology: TopologyRequestDto,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Override with environment variables (e.g., APP__TOPOLOGY__NAME)
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("topology.availability_zones")
                    .with_list_parse_key("topology.public_subnet_cidr_blocks")
                    .with_list_parse_key("topology.private_subnet_cidr_blocks")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Build configuration from an inline TOML document
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_applies_defaults() {
        let config = AppConfig::from_toml(
            r#"
[topology]
name = "demo"
cidr_block = "10.0.0.0/16"
availability_zones = ["eu-west-1a", "eu-west-1b"]
public_subnet_cidr_blocks = ["10.0.1.0/24"]
"#,
        )
        .unwrap();

        assert_eq!(config.topology.name, "demo");
        assert!(config.topology.private_subnet_cidr_blocks.is_empty());
        assert!(config.topology.flow_log.is_none());
        assert!(config.output.pretty);
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn test_from_toml_reads_flow_log_and_tags() {
        let config = AppConfig::from_toml(
            r#"
[topology]
name = "demo"
cidr_block = "10.0.0.0/16"
availability_zones = ["a"]

[topology.tags]
env = "prod"

[topology.flow_log]
enabled = true
traffic_type = "ALL"
log_destination_type = "s3"
log_destination = "arn:aws:s3:::flow-logs"

[topology.flow_log.destination_options]
file_format = "parquet"
per_hour_partition = true

[log]
format = "json"
"#,
        )
        .unwrap();

        let flow_log = config.topology.flow_log.unwrap();
        assert!(flow_log.enabled);
        assert_eq!(flow_log.destination_options.unwrap().file_format.as_deref(), Some("parquet"));
        assert_eq!(config.topology.tags.get("env").map(String::as_str), Some("prod"));
        assert_eq!(config.log.format, LogFormat::Json);
    }
}
