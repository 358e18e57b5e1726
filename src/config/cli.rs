use crate::config::toml_config::{TomlConfig, MAX_TIMEOUT_SECONDS};
use crate::config::CliConfig;
use crate::core::fetch::DEFAULT_API_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

/// Names used by batch mode when neither the command line nor the config file lists any.
pub const DEFAULT_BATCH_NAMES: &[&str] = &["Aljosja", "Jan", "Sofia", "Kenji", "Amara"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Batch,
}

/// Effective settings after layering command line flags over the TOML file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_endpoint: String,
    pub timeout_secs: Option<u64>,
    pub names: Vec<String>,
    pub mode: RunMode,
}

impl AppConfig {
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        Ok(Self::merge(cli, &file))
    }

    /// 命令列參數優先，其次是設定檔，最後是預設值
    pub fn merge(cli: &CliConfig, file: &TomlConfig) -> Self {
        let api_endpoint = cli
            .api_endpoint
            .clone()
            .unwrap_or_else(|| file.api_endpoint().to_string());

        let names: Vec<String> = if !cli.names.is_empty() {
            cli.names.iter().map(|n| n.trim().to_string()).collect()
        } else if !file.batch_names().is_empty() {
            file.batch_names().iter().map(|n| n.trim().to_string()).collect()
        } else {
            DEFAULT_BATCH_NAMES.iter().map(|n| n.to_string()).collect()
        };

        let mode = if cli.batch || !cli.names.is_empty() {
            RunMode::Batch
        } else {
            RunMode::Interactive
        };

        Self {
            api_endpoint,
            timeout_secs: cli.timeout_secs.or(file.source.timeout_seconds),
            names,
            mode,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout_secs: None,
            names: Vec::new(),
            mode: RunMode::Interactive,
        }
    }
}

impl ConfigProvider for AppConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    fn batch_names(&self) -> &[String] {
        &self.names
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;

        if let Some(timeout) = self.timeout_secs {
            validation::validate_range("timeout_secs", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        if self.mode == RunMode::Batch {
            validation::validate_names("names", &self.names)?;
        }
        Ok(())
    }
}
