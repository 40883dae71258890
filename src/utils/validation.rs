use crate::domain::model::Priors;
use crate::utils::error::{BayesError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for Priors {
    fn validate(&self) -> Result<()> {
        validate_probability("pA", self.p_a)?;
        validate_probability("pBgivenA", self.p_b_given_a)?;
        validate_probability("pnotBgivennotA", self.p_not_b_given_not_a)?;
        Ok(())
    }
}

/// Accepts only finite values in the closed interval [0, 1].
pub fn validate_probability(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(BayesError::OutOfRange {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BayesError::InvalidArgument {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BayesError::InvalidArgument {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Parses a probability written as text, e.g. a TOML value after env substitution.
pub fn parse_probability(field_name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| BayesError::InvalidArgument {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
