use crate::config::toml_config::TomlConfig;
use crate::domain::model::{OutputFormat, Priors};
use crate::domain::ports::PriorProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "bayes")]
#[command(about = "Calcs Bayesian posterior prob P(A | B)")]
pub struct CliConfig {
    /// P(A) (default: 0.3)
    #[arg(long = "pA", value_name = "FLOAT", allow_negative_numbers = true)]
    pub p_a: Option<f64>,

    /// P(B | A) (default: 0.7)
    #[arg(long = "pBgivenA", value_name = "FLOAT", allow_negative_numbers = true)]
    pub p_b_given_a: Option<f64>,

    /// P(notB | notA) (default: 0.9)
    #[arg(
        long = "pnotBgivennotA",
        visible_alias = "pNotBgivenNotA",
        value_name = "FLOAT",
        allow_negative_numbers = true
    )]
    pub p_not_b_given_not_a: Option<f64>,

    /// TOML file with [priors] and [options] tables
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// CSV file with pA,pBgivenA,pnotBgivennotA columns; one posterior per row
    #[arg(long, value_name = "PATH")]
    pub batch: Option<String>,

    /// Reject inputs outside [0, 1]
    #[arg(long)]
    pub strict: bool,

    /// Output for a single computation; batch output is always CSV
    #[arg(long, value_enum, conflicts_with = "batch")]
    pub format: Option<OutputFormat>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Flags given on the command line win over `base`.
    pub fn priors_over(&self, base: Priors) -> Priors {
        Priors::new(
            self.p_a.unwrap_or(base.p_a),
            self.p_b_given_a.unwrap_or(base.p_b_given_a),
            self.p_not_b_given_not_a
                .unwrap_or(base.p_not_b_given_not_a),
        )
    }
}

impl PriorProvider for CliConfig {
    fn priors(&self) -> Priors {
        self.priors_over(Priors::default())
    }

    fn strict(&self) -> bool {
        self.strict
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(path) = &self.batch {
            validate_path("batch", path)?;
        }
        Ok(())
    }
}

/// Command line layered over an optional TOML file, then the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub cli: CliConfig,
    pub file: Option<TomlConfig>,
}

impl AppConfig {
    pub fn new(cli: CliConfig, file: Option<TomlConfig>) -> Self {
        Self { cli, file }
    }

    /// Reads the `--config` file, if one was given.
    pub fn load(cli: CliConfig) -> Result<Self> {
        cli.validate()?;
        let file = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };
        Ok(Self::new(cli, file))
    }

    pub fn format(&self) -> OutputFormat {
        self.cli
            .format
            .or_else(|| self.file.as_ref().and_then(|f| f.format))
            .unwrap_or_default()
    }

    pub fn batch_path(&self) -> Option<&str> {
        self.cli.batch.as_deref()
    }
}

impl PriorProvider for AppConfig {
    fn priors(&self) -> Priors {
        let base = self
            .file
            .as_ref()
            .map(|f| f.priors())
            .unwrap_or_default();
        self.cli.priors_over(base)
    }

    fn strict(&self) -> bool {
        self.cli.strict || self.file.as_ref().is_some_and(|f| f.strict())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::PosteriorEngine;

    #[test]
    fn test_no_flags_uses_defaults() {
        let cli = CliConfig::try_parse_from(["bayes"]).unwrap();
        assert_eq!(cli.priors(), Priors::default());
        assert!(!PriorProvider::strict(&cli));
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_flag_names() {
        let cli = CliConfig::try_parse_from([
            "bayes",
            "--pA",
            "0.1",
            "--pBgivenA",
            "0.2",
            "--pnotBgivennotA",
            "0.3",
        ])
        .unwrap();
        assert_eq!(cli.priors(), Priors::new(0.1, 0.2, 0.3));

        let aliased = CliConfig::try_parse_from(["bayes", "--pNotBgivenNotA", "0.4"]).unwrap();
        assert_eq!(aliased.p_not_b_given_not_a, Some(0.4));
    }

    #[test]
    fn test_negative_values_parse() {
        let cli = CliConfig::try_parse_from(["bayes", "--pA", "-0.5"]).unwrap();
        assert_eq!(cli.p_a, Some(-0.5));
    }

    #[test]
    fn test_non_numeric_flag_is_rejected() {
        assert!(CliConfig::try_parse_from(["bayes", "--pA", "abc"]).is_err());
    }

    #[test]
    fn test_format_flag() {
        let cli = CliConfig::try_parse_from(["bayes", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_overrides_file_overrides_defaults() {
        let cli = CliConfig::try_parse_from(["bayes", "--pA", "0.05"]).unwrap();
        let file = TomlConfig {
            p_a: Some(0.5),
            p_b_given_a: Some(0.6),
            format: Some(OutputFormat::Json),
            ..TomlConfig::default()
        };
        let config = AppConfig::new(cli, Some(file));

        assert_eq!(config.priors(), Priors::new(0.05, 0.6, 0.9));
        assert_eq!(config.format(), OutputFormat::Json);
    }

    #[test]
    fn test_strict_from_either_source() {
        let file = TomlConfig {
            strict: Some(true),
            p_a: Some(2.0),
            ..TomlConfig::default()
        };
        let config = AppConfig::new(CliConfig::default(), Some(file));
        assert!(config.strict());
        assert!(PosteriorEngine::new(&config).run().is_err());

        let cli = CliConfig::try_parse_from(["bayes", "--strict", "--pA", "0.5"]).unwrap();
        let config = AppConfig::new(cli, None);
        assert!(config.strict());
        let report = PosteriorEngine::new(&config).run().unwrap();
        assert_eq!(report.priors.p_a, 0.5);
    }

    #[test]
    fn test_format_conflicts_with_batch() {
        let result = CliConfig::try_parse_from(["bayes", "--batch", "rows.csv", "--format", "json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_batch_path_is_invalid() {
        let cli = CliConfig::try_parse_from(["bayes", "--batch", ""]).unwrap();
        assert!(AppConfig::load(cli).is_err());
    }
}
