//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for classification results that
//! give more meaningful error messages than standard assertions.

use domain_decision::{DecisionError, Scenario};

/// Opening of every review message
pub const REVIEW_PREFIX: &str = "You have ";

/// Closing of every review message
pub const REVIEW_SUFFIX: &str = ". Please review your previous selection.";

/// Asserts that a result failed validation with a message containing `fragment`
///
/// # Panics
///
/// Panics if the result is Ok, is an invariant violation, or the message
/// does not contain the fragment
pub fn assert_validation_error_contains<T: std::fmt::Debug>(
    result: &Result<T, DecisionError>,
    fragment: &str,
) {
    match result {
        Err(DecisionError::Validation(error)) => assert!(
            error.message().contains(fragment),
            "Validation message does not contain {:?}: {}",
            fragment,
            error.message()
        ),
        other => panic!("Expected a validation error containing {:?}, got {:?}", fragment, other),
    }
}

/// Asserts that a result resolved to the expected scenario
pub fn assert_scenario(result: &Result<Scenario, DecisionError>, expected: Scenario) {
    match result {
        Ok(actual) => assert_eq!(*actual, expected, "Expected {}, got {}", expected, actual),
        Err(error) => panic!("Expected {}, got error: {}", expected, error),
    }
}

/// Asserts that a message has the review message shape
pub fn assert_review_message(message: &str) {
    assert!(
        message.starts_with(REVIEW_PREFIX),
        "Review message should start with {:?}: {}",
        REVIEW_PREFIX,
        message
    );
    assert!(
        message.ends_with(REVIEW_SUFFIX),
        "Review message should end with {:?}: {}",
        REVIEW_SUFFIX,
        message
    );
    assert!(
        message.matches(", but have ").count() <= 1,
        "Review message should separate satisfied and unmet fragments once: {}",
        message
    );
}

/// Asserts that a result is never an invariant violation
pub fn assert_no_invariant_violation<T: std::fmt::Debug>(result: &Result<T, DecisionError>) {
    if let Err(error @ DecisionError::InvariantViolation { .. }) = result {
        panic!("Classification invariant violated: {}", error);
    }
}
