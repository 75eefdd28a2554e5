//! Decision-notice domain services
//!
//! The pipeline that ties the classifier stages together:
//! regulations -> outcome -> content.

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::content::{self, ContentComponent};
use crate::error::DecisionError;
use crate::facts::CaseFacts;
use crate::outcome;
use crate::points::PointsBand;
use crate::regulations::{self, AwardRate, RegulationsCondition};
use crate::scenario::Scenario;

/// What the appellant is entitled to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    /// `None` for an appeal that is not about a WCA
    pub award_rate: Option<AwardRate>,
    pub entitled: bool,
    pub points_band: PointsBand,
    pub condition: RegulationsCondition,
}

/// The classification handed to the templating collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionNotice {
    pub scenario: Scenario,
    pub components: Vec<ContentComponent>,
    pub entitlement: Entitlement,
}

/// Service that classifies case facts into a decision notice
///
/// The service holds no state; every call is a pure function of the facts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionNoticeService;

impl DecisionNoticeService {
    /// Creates a new decision-notice service
    pub fn new() -> Self {
        Self
    }

    /// Classifies the facts and assembles the notice
    ///
    /// This method:
    /// 1. Validates points, regulations and Schedule 7 activities
    /// 2. Resolves the allowed or refused outcome to a scenario
    /// 3. Lists the notice components for that scenario
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::Validation`] with a message for the case worker
    /// when the facts are inconsistent.
    ///
    /// # Example
    ///
    /// ```
    /// use core_kernel::Answer;
    /// use domain_decision::{CaseFacts, DecisionNoticeService, DeclaredOutcome, Scenario};
    ///
    /// let facts = CaseFacts::builder()
    ///     .wca_appeal(Answer::No)
    ///     .declared_outcome(DeclaredOutcome::Allowed)
    ///     .build();
    ///
    /// let notice = DecisionNoticeService::new().decide(&facts)?;
    /// assert_eq!(notice.scenario, Scenario::Scenario10);
    /// # Ok::<(), domain_decision::DecisionError>(())
    /// ```
    pub fn decide(&self, facts: &CaseFacts) -> Result<DecisionNotice, DecisionError> {
        let span = info_span!("decide", case_id = tracing::field::Empty);
        if let Some(case_id) = facts.case_id() {
            span.record("case_id", tracing::field::display(case_id));
        }
        let _guard = span.enter();

        let validated = regulations::classify(facts).map_err(|error| {
            debug!(stage = "regulations", error = %error, "Facts failed validation");
            DecisionError::from(error)
        })?;
        let scenario = outcome::classify(&validated).map_err(|error| {
            if error.is_validation() {
                debug!(stage = "outcome", error = %error, "Facts failed validation");
            }
            error
        })?;
        let components = content::assemble(scenario, &validated);

        let award_rate = validated.award_rate();
        debug!(
            scenario = %scenario,
            components = components.len(),
            award_rate = ?award_rate,
            "Decision notice classified"
        );

        Ok(DecisionNotice {
            scenario,
            components,
            entitlement: Entitlement {
                award_rate,
                entitled: validated.is_entitled(),
                points_band: validated.points_band(),
                condition: validated.condition(),
            },
        })
    }

    /// Validates the facts as they would be on submission
    ///
    /// Runs both classifier stages and returns the resolved scenario without
    /// assembling content.
    pub fn validate(&self, facts: &CaseFacts) -> Result<Scenario, DecisionError> {
        let validated = regulations::classify(facts)?;
        outcome::classify(&validated)
    }

    /// Works out the award implied by the schedule answers
    ///
    /// Only the regulations stage runs, so the declared outcome is not checked.
    pub fn entitlement(&self, facts: &CaseFacts) -> Result<Entitlement, DecisionError> {
        let validated = regulations::classify(facts)?;
        Ok(Entitlement {
            award_rate: validated.award_rate(),
            entitled: validated.is_entitled(),
            points_band: validated.points_band(),
            condition: validated.condition(),
        })
    }
}
