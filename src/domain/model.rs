use serde::{Deserialize, Serialize};

pub const DEFAULT_P_A: f64 = 0.3;
pub const DEFAULT_P_B_GIVEN_A: f64 = 0.7;
pub const DEFAULT_P_NOT_B_GIVEN_NOT_A: f64 = 0.9;

/// The three inputs: P(A), P(B | A) and P(notB | notA).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Priors {
    pub p_a: f64,
    pub p_b_given_a: f64,
    pub p_not_b_given_not_a: f64,
}

impl Priors {
    pub fn new(p_a: f64, p_b_given_a: f64, p_not_b_given_not_a: f64) -> Self {
        Self {
            p_a,
            p_b_given_a,
            p_not_b_given_not_a,
        }
    }
}

impl Default for Priors {
    fn default() -> Self {
        Self::new(DEFAULT_P_A, DEFAULT_P_B_GIVEN_A, DEFAULT_P_NOT_B_GIVEN_NOT_A)
    }
}

/// Every intermediate quantity of one posterior computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosteriorReport {
    pub priors: Priors,
    pub p_not_a: f64,
    pub p_b_given_not_a: f64,
    pub p_a_and_b: f64,
    pub p_not_a_and_b: f64,
    /// Normalizer P(B).
    pub p_b: f64,
    pub posterior: f64,
}

impl PosteriorReport {
    pub fn to_text(&self) -> String {
        format!("The posterior is: {}", format_probability(self.posterior))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

/// Shortest round-trip rendering, integral values keep a trailing `.0`.
pub fn format_probability(value: f64) -> String {
    format!("{:?}", value)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
