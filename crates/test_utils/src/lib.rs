//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! decision-notice test suite.
//!
//! # Modules
//!
//! - `fixtures`: Case facts for every scenario and the exhaustive fact grid
//! - `builders`: Builder patterns for test case facts
//! - `assertions`: Custom assertion helpers for classification results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
