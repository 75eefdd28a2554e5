//! Case facts
//!
//! The classification-relevant snapshot of an appeal. Facts are assembled by
//! the extraction collaborator (usually as JSON) or through [`CaseFactsBuilder`]
//! and are never mutated once built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{Answer, CaseId, CoreError};

/// The answer given to the Schedule 7 Activities question
///
/// On the wire this is an optional list: absent or `null` means the question
/// was not answered, `[]` means it was answered with no activities selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum Schedule7Selection {
    /// The question was not answered
    #[default]
    Unanswered,
    /// Answered, with no activities selected
    NoneSelected,
    /// Answered, with at least one activity selected
    Selected(Vec<String>),
}

impl Schedule7Selection {
    /// Builds a selection from activity keys, an empty list meaning "none selected"
    pub fn selected<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let activities: Vec<String> = activities.into_iter().map(Into::into).collect();
        if activities.is_empty() {
            Schedule7Selection::NoneSelected
        } else {
            Schedule7Selection::Selected(activities)
        }
    }

    pub fn is_answered(&self) -> bool {
        !matches!(self, Schedule7Selection::Unanswered)
    }

    /// True when at least one activity was selected
    pub fn has_selections(&self) -> bool {
        matches!(self, Schedule7Selection::Selected(activities) if !activities.is_empty())
    }

    /// True when the question was answered without selecting anything
    pub fn is_none_selected(&self) -> bool {
        self.is_answered() && !self.has_selections()
    }

    /// The selected activity keys, empty unless something was selected
    pub fn activities(&self) -> &[String] {
        match self {
            Schedule7Selection::Selected(activities) => activities,
            _ => &[],
        }
    }
}

impl From<Option<Vec<String>>> for Schedule7Selection {
    fn from(value: Option<Vec<String>>) -> Self {
        match value {
            None => Schedule7Selection::Unanswered,
            Some(activities) => Schedule7Selection::selected(activities),
        }
    }
}

impl From<Schedule7Selection> for Option<Vec<String>> {
    fn from(value: Schedule7Selection) -> Self {
        match value {
            Schedule7Selection::Unanswered => None,
            Schedule7Selection::NoneSelected => Some(Vec::new()),
            Schedule7Selection::Selected(activities) => Some(activities),
        }
    }
}

/// The outcome the judge declared for the appeal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredOutcome {
    #[serde(alias = "Allowed")]
    Allowed,
    #[serde(alias = "Refused")]
    Refused,
    /// Neither allowed nor refused has been chosen yet
    #[default]
    #[serde(alias = "")]
    Unset,
}

impl DeclaredOutcome {
    pub const ALL: [DeclaredOutcome; 3] = [
        DeclaredOutcome::Allowed,
        DeclaredOutcome::Refused,
        DeclaredOutcome::Unset,
    ];

    pub fn is_declared(self) -> bool {
        !matches!(self, DeclaredOutcome::Unset)
    }

    pub fn label(self) -> &'static str {
        match self {
            DeclaredOutcome::Allowed => "allowed",
            DeclaredOutcome::Refused => "refused",
            DeclaredOutcome::Unset => "unset",
        }
    }
}

impl fmt::Display for DeclaredOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeclaredOutcome {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allowed" => Ok(DeclaredOutcome::Allowed),
            "refused" => Ok(DeclaredOutcome::Refused),
            "" | "unset" => Ok(DeclaredOutcome::Unset),
            _ => Err(CoreError::validation(format!("Unknown appeal outcome: {}", s))),
        }
    }
}

/// A scored descriptor chosen for one Schedule 6 activity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredActivityAnswer {
    /// Activity identifier, e.g. `mobilisingUnaided`
    pub activity_key: String,
    /// Points awarded for the chosen descriptor
    pub points: u32,
    /// Descriptor letter, e.g. `a`
    pub letter: String,
    /// Descriptor wording
    pub text: String,
}

impl ScoredActivityAnswer {
    pub fn new(
        activity_key: impl Into<String>,
        points: u32,
        letter: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            activity_key: activity_key.into(),
            points,
            letter: letter.into(),
            text: text.into(),
        }
    }
}

/// Immutable snapshot of the facts the classifiers look at
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseFacts {
    case_id: Option<CaseId>,
    wca_appeal: Answer,
    points_total: u32,
    support_group_only: Answer,
    schedule_8_paragraph_4: Answer,
    schedule_9_paragraph_4: Answer,
    schedule_7_activities: Schedule7Selection,
    scored_activities: Vec<ScoredActivityAnswer>,
    declared_outcome: DeclaredOutcome,
    reasons_for_decision: Vec<String>,
    anything_else: Option<String>,
}

impl CaseFacts {
    /// Starts building a new set of facts
    pub fn builder() -> CaseFactsBuilder {
        CaseFactsBuilder::new()
    }

    /// Returns a builder seeded with these facts
    pub fn to_builder(&self) -> CaseFactsBuilder {
        CaseFactsBuilder { facts: self.clone() }
    }

    pub fn case_id(&self) -> Option<CaseId> {
        self.case_id
    }

    pub fn wca_appeal(&self) -> Answer {
        self.wca_appeal
    }

    /// Returns true unless the appeal was explicitly marked as not a WCA appeal
    pub fn is_wca_appeal(&self) -> bool {
        !self.wca_appeal.is_no()
    }

    pub fn points_total(&self) -> u32 {
        self.points_total
    }

    pub fn support_group_only(&self) -> Answer {
        self.support_group_only
    }

    pub fn schedule_8_paragraph_4(&self) -> Answer {
        self.schedule_8_paragraph_4
    }

    pub fn schedule_9_paragraph_4(&self) -> Answer {
        self.schedule_9_paragraph_4
    }

    pub fn schedule_7_activities(&self) -> &Schedule7Selection {
        &self.schedule_7_activities
    }

    pub fn scored_activities(&self) -> &[ScoredActivityAnswer] {
        &self.scored_activities
    }

    pub fn declared_outcome(&self) -> DeclaredOutcome {
        self.declared_outcome
    }

    pub fn reasons_for_decision(&self) -> &[String] {
        &self.reasons_for_decision
    }

    /// Free text the judge wants on the notice, if any was written
    pub fn anything_else(&self) -> Option<&str> {
        self.anything_else
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Builder for [`CaseFacts`]
///
/// Every field defaults to unanswered, zero points and no selections.
///
/// # Example
///
/// ```
/// use core_kernel::Answer;
/// use domain_decision::{CaseFacts, DeclaredOutcome, Schedule7Selection};
///
/// let facts = CaseFacts::builder()
///     .wca_appeal(Answer::Yes)
///     .points_total(9)
///     .support_group_only(Answer::No)
///     .schedule_8_paragraph_4(Answer::Yes)
///     .schedule_7_activities(Schedule7Selection::selected(["schedule7MobilisingUnaided"]))
///     .declared_outcome(DeclaredOutcome::Allowed)
///     .build();
///
/// assert_eq!(facts.points_total(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaseFactsBuilder {
    facts: CaseFacts,
}

impl CaseFactsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the correlation identifier used in log spans
    pub fn case_id(mut self, case_id: CaseId) -> Self {
        self.facts.case_id = Some(case_id);
        self
    }

    pub fn wca_appeal(mut self, answer: impl Into<Answer>) -> Self {
        self.facts.wca_appeal = answer.into();
        self
    }

    pub fn points_total(mut self, points: u32) -> Self {
        self.facts.points_total = points;
        self
    }

    pub fn support_group_only(mut self, answer: impl Into<Answer>) -> Self {
        self.facts.support_group_only = answer.into();
        self
    }

    pub fn schedule_8_paragraph_4(mut self, answer: impl Into<Answer>) -> Self {
        self.facts.schedule_8_paragraph_4 = answer.into();
        self
    }

    pub fn schedule_9_paragraph_4(mut self, answer: impl Into<Answer>) -> Self {
        self.facts.schedule_9_paragraph_4 = answer.into();
        self
    }

    pub fn schedule_7_activities(mut self, selection: Schedule7Selection) -> Self {
        self.facts.schedule_7_activities = selection;
        self
    }

    /// Adds a scored Schedule 6 descriptor
    pub fn add_scored_activity(mut self, answer: ScoredActivityAnswer) -> Self {
        self.facts.scored_activities.push(answer);
        self
    }

    pub fn scored_activities(mut self, answers: Vec<ScoredActivityAnswer>) -> Self {
        self.facts.scored_activities = answers;
        self
    }

    pub fn declared_outcome(mut self, outcome: DeclaredOutcome) -> Self {
        self.facts.declared_outcome = outcome;
        self
    }

    /// Adds a free-text reason for the decision
    pub fn add_reason(mut self, reason: impl Into<String>) -> Self {
        self.facts.reasons_for_decision.push(reason.into());
        self
    }

    pub fn anything_else(mut self, text: impl Into<String>) -> Self {
        self.facts.anything_else = Some(text.into());
        self
    }

    pub fn build(self) -> CaseFacts {
        self.facts
    }
}
