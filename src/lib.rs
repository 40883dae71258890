pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{AppConfig, CliConfig};

pub use config::toml_config::TomlConfig;
pub use core::{
    batch::{BatchRunner, BatchSummary},
    engine::PosteriorEngine,
    posterior::posterior,
};
pub use domain::model::{OutputFormat, PosteriorReport, Priors};
pub use domain::ports::PriorProvider;
pub use utils::error::{BayesError, Result};
