//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::Answer;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_invalid_answer() {
    let error = CoreError::invalid_answer("perhaps");

    match error {
        CoreError::InvalidAnswer(value) => assert_eq!(value, "perhaps"),
        _ => panic!("Expected InvalidAnswer error"),
    }
}

#[test]
fn test_core_error_from_answer_parsing() {
    let error = "sometimes".parse::<Answer>().unwrap_err();
    assert!(matches!(error, CoreError::InvalidAnswer(_)));
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}

#[test]
fn test_core_error_invalid_identifier_display() {
    let error = CoreError::InvalidIdentifier("CASE-xyz".to_string());
    assert_eq!(error.to_string(), "Invalid identifier: CASE-xyz");
}
