use crate::domain::model::Priors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BayesError {
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("undefined posterior: P(B) = 0")]
    DivisionByZero { priors: Priors },

    #[error("{field} must be a finite probability in [0, 1], got {value}")]
    OutOfRange { field: String, value: f64 },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Computation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BayesError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BayesError::InvalidArgument { .. } | BayesError::OutOfRange { .. } => {
                ErrorCategory::Input
            }
            BayesError::DivisionByZero { .. } => ErrorCategory::Computation,
            BayesError::ConfigValidationError { .. } | BayesError::CsvError(_) => {
                ErrorCategory::Configuration
            }
            BayesError::IoError(_) | BayesError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BayesError::InvalidArgument { .. }
            | BayesError::OutOfRange { .. }
            | BayesError::DivisionByZero { .. } => ErrorSeverity::High,
            BayesError::ConfigValidationError { .. } | BayesError::CsvError(_) => {
                ErrorSeverity::Medium
            }
            BayesError::IoError(_) | BayesError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error, keyed on severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BayesError::InvalidArgument { field, value, .. } => {
                format!("'{}' is not a valid number for {}", value, field)
            }
            BayesError::DivisionByZero { priors } => format!(
                "undefined posterior: P(B) = 0 for P(A)={:?}, P(B|A)={:?}, P(notB|notA)={:?}",
                priors.p_a, priors.p_b_given_a, priors.p_not_b_given_not_a
            ),
            BayesError::OutOfRange { field, value } => {
                format!("{} = {:?} is not a probability", field, value)
            }
            BayesError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            BayesError::IoError(e) => format!("Could not read or write a file: {}", e),
            BayesError::CsvError(e) => format!("Batch file could not be processed: {}", e),
            BayesError::SerializationError(e) => format!("Could not render output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BayesError::InvalidArgument { .. } => "Pass plain decimal numbers such as 0.3",
            BayesError::DivisionByZero { .. } => {
                "P(A)*P(B|A) and P(notA)*P(B|notA) are both zero; evidence B is impossible under these priors"
            }
            BayesError::OutOfRange { .. } => {
                "Use values between 0 and 1, or drop --strict to allow them"
            }
            BayesError::ConfigValidationError { .. } => {
                "Check the TOML file against the [priors]/[options] layout"
            }
            BayesError::IoError(_) => "Check that the path exists and is readable",
            BayesError::CsvError(_) => {
                "Batch files need a pA,pBgivenA,pnotBgivennotA header and numeric cells"
            }
            BayesError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, BayesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_message() {
        let err = BayesError::DivisionByZero {
            priors: Priors::new(0.0, 0.5, 1.0),
        };
        assert_eq!(err.to_string(), "undefined posterior: P(B) = 0");
        assert_eq!(err.category(), ErrorCategory::Computation);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("P(A)=0.0"));
    }

    #[test]
    fn test_tiny_priors_render_compactly() {
        let err = BayesError::DivisionByZero {
            priors: Priors::new(1e-200, 0.0, 1.0),
        };
        let message = err.user_friendly_message();
        assert!(message.contains("P(A)=1e-200"), "{}", message);
        assert!(message.len() < 100);
    }

    #[test]
    fn test_severity_to_exit_code() {
        let config_err = BayesError::ConfigValidationError {
            field: "priors.p_a".to_string(),
            message: "expected a float".to_string(),
        };
        assert_eq!(config_err.severity(), ErrorSeverity::Medium);
        assert_eq!(config_err.exit_code(), 2);

        let io_err = BayesError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io_err.category(), ErrorCategory::System);
        assert_eq!(io_err.exit_code(), 3);
    }
}
