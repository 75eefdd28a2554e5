//! Decision domain errors
//!
//! A [`ValidationError`] is the expected, user-facing result of inconsistent
//! case facts. [`DecisionError::InvariantViolation`] signals an engine defect.

use serde::Serialize;
use thiserror::Error;

use core_kernel::join_grammatically;

const MESSAGE_PREFIX: &str = "You have ";
const MESSAGE_SUFFIX: &str = ". Please review your previous selection.";

/// Human-readable error for facts that contradict the matched condition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Composes the review message from what the case satisfied and what it did not
    ///
    /// # Example
    ///
    /// ```
    /// use domain_decision::ValidationError;
    ///
    /// let error = ValidationError::from_fragments(
    ///     &["awarded less than 15 points"],
    ///     &["a missing answer for the Schedule 8 Paragraph 4 question"],
    /// );
    /// assert_eq!(
    ///     error.message(),
    ///     "You have awarded less than 15 points, but have a missing answer for the \
    ///      Schedule 8 Paragraph 4 question. Please review your previous selection."
    /// );
    /// ```
    pub fn from_fragments<S: AsRef<str>, U: AsRef<str>>(satisfied: &[S], unmet: &[U]) -> Self {
        let mut message = String::from(MESSAGE_PREFIX);
        if !satisfied.is_empty() {
            message.push_str(&join_grammatically(satisfied));
            message.push_str(", but have ");
        }
        message.push_str(&join_grammatically(unmet));
        message.push_str(MESSAGE_SUFFIX);
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by the decision pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// The facts are inconsistent; show the message to the case worker
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The condition tables failed to resolve the facts
    #[error("Classification invariant violated in {stage} stage: {detail}")]
    InvariantViolation {
        stage: &'static str,
        detail: String,
    },
}

impl DecisionError {
    /// Creates an invariant violation error
    pub fn invariant(stage: &'static str, detail: impl Into<String>) -> Self {
        DecisionError::InvariantViolation {
            stage,
            detail: detail.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DecisionError::Validation(_))
    }

    /// The user-facing message, if this is a validation error
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            DecisionError::Validation(error) => Some(error.message()),
            DecisionError::InvariantViolation { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_without_satisfied_fragments() {
        let error = ValidationError::from_fragments(
            &[] as &[&str],
            &["a missing answer for the Allowed or Refused question"],
        );
        assert_eq!(
            error.to_string(),
            "You have a missing answer for the Allowed or Refused question. Please review your previous selection."
        );
    }

    #[test]
    fn test_message_joins_each_side() {
        let error = ValidationError::from_fragments(
            &["a", "b", "c"],
            &["x", "y"],
        );
        assert_eq!(
            error.message(),
            "You have a, b and c, but have x and y. Please review your previous selection."
        );
    }

    #[test]
    fn test_decision_error_from_validation() {
        let error: DecisionError = ValidationError::new("bad").into();
        assert!(error.is_validation());
        assert_eq!(error.validation_message(), Some("bad"));
        assert_eq!(error.to_string(), "bad");
    }

    #[test]
    fn test_invariant_violation_display() {
        let error = DecisionError::invariant("outcome", "no scenario");
        assert!(!error.is_validation());
        assert_eq!(error.validation_message(), None);
        assert_eq!(
            error.to_string(),
            "Classification invariant violated in outcome stage: no scenario"
        );
    }

    #[test]
    fn test_validation_error_serializes_message() {
        let json = serde_json::to_value(ValidationError::new("oops")).unwrap();
        assert_eq!(json["message"], "oops");
    }
}
