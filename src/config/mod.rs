#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "name-origin")]
#[command(about = "Look up the most and least likely country of origin for a name")]
pub struct CliConfig {
    #[arg(long, help = "Nationality service endpoint [default: https://api.nationalize.io]")]
    pub api_endpoint: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Prefetch and report a list of names instead of the menu")]
    pub batch: bool,

    #[arg(long, value_delimiter = ',', help = "Names for batch mode")]
    pub names: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
