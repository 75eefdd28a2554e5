//! CLI error handling

use serde::Serialize;
use thiserror::Error;

use domain_decision::DecisionError;

/// Exit status for a successful classification
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for malformed input or an engine failure
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for facts that failed validation
pub const EXIT_VALIDATION: i32 = 2;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid case facts: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Decision(#[from] DecisionError),
}

/// Error body printed instead of a decision notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Decision(DecisionError::Validation(_)) => EXIT_VALIDATION,
            _ => EXIT_FAILURE,
        }
    }

    /// Machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Io(_) => "io_error",
            CliError::Json(_) => "invalid_input",
            CliError::Config(_) => "config_error",
            CliError::Decision(DecisionError::Validation(_)) => "validation_error",
            CliError::Decision(DecisionError::InvariantViolation { .. }) => "invariant_violation",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_decision::ValidationError;

    #[test]
    fn test_validation_error_exit_code() {
        let error = CliError::from(DecisionError::from(ValidationError::new("Check answers")));
        assert_eq!(error.exit_code(), EXIT_VALIDATION);
        assert_eq!(
            error.to_response(),
            ErrorResponse {
                error: "validation_error".to_string(),
                message: "Check answers".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_json_exit_code() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = CliError::from(json_error);
        assert_eq!(error.exit_code(), EXIT_FAILURE);
        assert_eq!(error.kind(), "invalid_input");
    }

    #[test]
    fn test_invariant_violation_is_a_failure() {
        let error = CliError::from(DecisionError::invariant("outcome", "no scenario"));
        assert_eq!(error.exit_code(), EXIT_FAILURE);
        assert_eq!(error.kind(), "invariant_violation");
    }
}
