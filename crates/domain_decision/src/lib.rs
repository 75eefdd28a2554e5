//! Decision-Notice Classification Domain
//!
//! This crate decides which legally defined decision-notice scenario applies
//! to a work capability appeal, and which notice components that scenario
//! needs. It is a pure function of the case facts: it does not score
//! descriptors, render text or persist anything.
//!
//! # Pipeline
//!
//! ```text
//! CaseFacts -> PointsBand -> RegulationsCondition -> OutcomeCondition -> Scenario -> [ContentComponent]
//!                                   |                       |
//!                            ValidationError         ValidationError
//! ```
//!
//! Each stage is a closed table of conditions. Exactly one condition applies
//! to any set of facts, and a condition either reports every expectation the
//! facts miss in one message or hands the facts on to the next stage.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_decision::{CaseFacts, DecisionNoticeService};
//!
//! let facts: CaseFacts = serde_json::from_str(&payload)?;
//! match DecisionNoticeService::new().decide(&facts) {
//!     Ok(notice) => render(notice.scenario, &notice.components),
//!     Err(error) => show_field_error(error.to_string()),
//! }
//! ```

pub mod facts;
pub mod points;
pub mod condition;
pub mod regulations;
pub mod outcome;
pub mod scenario;
pub mod content;
pub mod error;
pub mod services;

pub use facts::{CaseFacts, CaseFactsBuilder, DeclaredOutcome, Schedule7Selection, ScoredActivityAnswer};
pub use points::{PointsBand, HIGH_POINTS_THRESHOLD};
pub use condition::{DecisionCondition, Expectation, FactPattern, Field};
pub use regulations::{AwardRate, RegulationsCondition, Schedule7Check, ScheduleAnswers, ValidatedFacts};
pub use outcome::OutcomeCondition;
pub use scenario::Scenario;
pub use content::{ContentComponent, Inclusion};
pub use error::{DecisionError, ValidationError};
pub use services::{DecisionNotice, DecisionNoticeService, Entitlement};
