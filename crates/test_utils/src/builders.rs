//! Test Data Builders
//!
//! Provides builder patterns for constructing case facts with sensible
//! defaults. Tests describe the appeal path they care about and leave the
//! rest unanswered.

use core_kernel::{Answer, CaseId};
use domain_decision::{
    CaseFacts, CaseFactsBuilder, DeclaredOutcome, Schedule7Selection, ScoredActivityAnswer,
};

use crate::fixtures::ActivityFixtures;

/// Builder for constructing test case facts
///
/// Starts from a WCA appeal with 0 points and every question unanswered.
#[derive(Debug, Clone)]
pub struct TestCaseFactsBuilder {
    inner: CaseFactsBuilder,
}

impl Default for TestCaseFactsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCaseFactsBuilder {
    /// Creates a new builder for a WCA appeal
    pub fn new() -> Self {
        Self {
            inner: CaseFacts::builder()
                .case_id(CaseId::new())
                .wca_appeal(Answer::Yes),
        }
    }

    /// A WCA appeal scored below the threshold
    pub fn low_points() -> Self {
        Self::new().points(9)
    }

    /// A WCA appeal scored at or above the threshold, not support group only
    pub fn high_points() -> Self {
        Self::new().points(18).support_group_only(Answer::No)
    }

    /// An appeal that is not about a WCA
    pub fn non_wca() -> Self {
        Self::new().wca_appeal(Answer::No)
    }

    /// Sets the WCA appeal answer
    pub fn wca_appeal(mut self, answer: Answer) -> Self {
        self.inner = self.inner.wca_appeal(answer);
        self
    }

    /// Sets the points total
    pub fn points(mut self, points: u32) -> Self {
        self.inner = self.inner.points_total(points);
        self
    }

    /// Sets the Support Group Only answer
    pub fn support_group_only(mut self, answer: Answer) -> Self {
        self.inner = self.inner.support_group_only(answer);
        self
    }

    /// Sets the Schedule 8 Paragraph 4 answer
    pub fn schedule_8(mut self, answer: Answer) -> Self {
        self.inner = self.inner.schedule_8_paragraph_4(answer);
        self
    }

    /// Sets the Schedule 9 Paragraph 4 answer
    pub fn schedule_9(mut self, answer: Answer) -> Self {
        self.inner = self.inner.schedule_9_paragraph_4(answer);
        self
    }

    /// Selects Schedule 7 activities
    pub fn schedule_7_selected(mut self, activities: &[&str]) -> Self {
        self.inner = self
            .inner
            .schedule_7_activities(Schedule7Selection::selected(activities.iter().copied()));
        self
    }

    /// Answers the Schedule 7 question without selecting anything
    pub fn schedule_7_none(mut self) -> Self {
        self.inner = self.inner.schedule_7_activities(Schedule7Selection::NoneSelected);
        self
    }

    pub fn allowed(mut self) -> Self {
        self.inner = self.inner.declared_outcome(DeclaredOutcome::Allowed);
        self
    }

    pub fn refused(mut self) -> Self {
        self.inner = self.inner.declared_outcome(DeclaredOutcome::Refused);
        self
    }

    /// Adds a scored Schedule 6 descriptor
    pub fn with_scored_activity(mut self, answer: ScoredActivityAnswer) -> Self {
        self.inner = self.inner.add_scored_activity(answer);
        self
    }

    /// Adds the standard mobilising descriptor
    pub fn with_default_scored_activity(self) -> Self {
        self.with_scored_activity(ActivityFixtures::mobilising())
    }

    /// Adds a reason for the decision
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.inner = self.inner.add_reason(reason);
        self
    }

    /// Sets the free text for the "anything else" paragraph
    pub fn with_anything_else(mut self, text: &str) -> Self {
        self.inner = self.inner.anything_else(text);
        self
    }

    /// Builds the case facts
    pub fn build(self) -> CaseFacts {
        self.inner.build()
    }
}
