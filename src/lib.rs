pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{
    cli::{AppConfig, RunMode},
    CliConfig,
};

pub use config::toml_config::TomlConfig;
pub use crate::core::{
    cache::NameCache,
    fetch::{FetchAdapter, NationalizeClient, DEFAULT_API_ENDPOINT},
    resolver::{scan_extremes, ProbabilityResolver},
};
pub use domain::model::{CountryExtremes, LookupOutcome, NameRecord, NameRecordSet};
pub use utils::error::{NationalityError, Result};
