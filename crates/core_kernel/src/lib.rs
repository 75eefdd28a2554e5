//! Core Kernel - Foundational types shared by the decision-notice engine
//!
//! This crate provides the small building blocks used across the workspace:
//! - Tri-state answers (yes / no / unanswered) as normalized by the upstream
//!   extraction collaborator
//! - Strongly-typed identifiers for log correlation
//! - Grammatical joining of message fragments for user-facing errors

pub mod answer;
pub mod identifiers;
pub mod text;
pub mod error;

pub use answer::Answer;
pub use identifiers::CaseId;
pub use text::join_grammatically;
pub use error::CoreError;
