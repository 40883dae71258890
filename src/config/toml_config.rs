use crate::domain::model::{
    OutputFormat, Priors, DEFAULT_P_A, DEFAULT_P_B_GIVEN_A, DEFAULT_P_NOT_B_GIVEN_NOT_A,
};
use crate::domain::ports::PriorProvider;
use crate::utils::error::{BayesError, Result};
use crate::utils::validation::parse_probability;
use serde::Deserialize;
use std::path::Path;

/// A probability as written in the file: a TOML number, or a string such as
/// `"${PRIOR_A}"` after environment substitution.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawProbability {
    Number(f64),
    Text(String),
}

impl RawProbability {
    fn resolve(&self, field_name: &str) -> Result<f64> {
        match self {
            RawProbability::Number(value) => Ok(*value),
            RawProbability::Text(raw) => parse_probability(field_name, raw),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawPriorsSection {
    p_a: Option<RawProbability>,
    p_b_given_a: Option<RawProbability>,
    p_not_b_given_not_a: Option<RawProbability>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawOptionsSection {
    strict: Option<bool>,
    format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawTomlConfig {
    #[serde(default)]
    priors: RawPriorsSection,
    #[serde(default)]
    options: RawOptionsSection,
}

/// Priors and options loaded from a TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TomlConfig {
    pub p_a: Option<f64>,
    pub p_b_given_a: Option<f64>,
    pub p_not_b_given_not_a: Option<f64>,
    pub strict: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BayesError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        let raw: RawTomlConfig =
            toml::from_str(&processed_content).map_err(|e| BayesError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        let resolve = |value: &Option<RawProbability>, field: &str| {
            value.as_ref().map(|v| v.resolve(field)).transpose()
        };

        Ok(Self {
            p_a: resolve(&raw.priors.p_a, "priors.p_a")?,
            p_b_given_a: resolve(&raw.priors.p_b_given_a, "priors.p_b_given_a")?,
            p_not_b_given_not_a: resolve(
                &raw.priors.p_not_b_given_not_a,
                "priors.p_not_b_given_not_a",
            )?,
            strict: raw.options.strict,
            format: raw.options.format,
        })
    }

    /// 替換環境變數 (例如 ${PRIOR_A})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BayesError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl PriorProvider for TomlConfig {
    fn priors(&self) -> Priors {
        Priors::new(
            self.p_a.unwrap_or(DEFAULT_P_A),
            self.p_b_given_a.unwrap_or(DEFAULT_P_B_GIVEN_A),
            self.p_not_b_given_not_a
                .unwrap_or(DEFAULT_P_NOT_B_GIVEN_NOT_A),
        )
    }

    fn strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }
}
