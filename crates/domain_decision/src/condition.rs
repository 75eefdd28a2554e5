//! Condition tables
//!
//! Each classifier stage is a closed enum of conditions. A condition is data:
//! a [`FactPattern`] saying when it applies, the fields it reports back to the
//! case worker, and the [`Expectation`]s the facts must then meet. The
//! [`DecisionCondition`] trait lets the classifiers and the partition tests
//! treat both stages the same way.

use std::fmt;

use core_kernel::Answer;
use tracing::debug;

use crate::error::ValidationError;
use crate::facts::{CaseFacts, DeclaredOutcome, Schedule7Selection};
use crate::points::PointsBand;

/// A case question that can appear in a review message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PointsBand,
    SupportGroupOnly,
    Schedule8Paragraph4,
    Schedule9Paragraph4,
    Schedule7Activities,
    AllowedOrRefused,
}

impl Field {
    /// Question label as it appears in review messages
    pub fn label(self) -> &'static str {
        match self {
            Field::PointsBand => "Points",
            Field::SupportGroupOnly => "Support Group Only Appeal",
            Field::Schedule8Paragraph4 => "Schedule 8 Paragraph 4",
            Field::Schedule9Paragraph4 => "Schedule 9 Paragraph 4",
            Field::Schedule7Activities => "Schedule 7 Activities",
            Field::AllowedOrRefused => "Allowed or Refused",
        }
    }

    /// Describes the value the facts hold for this field
    pub fn satisfied_fragment(self, facts: &CaseFacts) -> String {
        match self {
            Field::PointsBand => PointsBand::classify(facts.points_total())
                .satisfied_fragment()
                .to_string(),
            Field::SupportGroupOnly => answer_fragment(self, facts.support_group_only()),
            Field::Schedule8Paragraph4 => answer_fragment(self, facts.schedule_8_paragraph_4()),
            Field::Schedule9Paragraph4 => answer_fragment(self, facts.schedule_9_paragraph_4()),
            Field::Schedule7Activities => match facts.schedule_7_activities() {
                Schedule7Selection::Unanswered => not_provided(self),
                selection if selection.has_selections() => made_selections(self),
                _ => made_no_selections(self),
            },
            Field::AllowedOrRefused => match facts.declared_outcome() {
                DeclaredOutcome::Unset => not_provided(self),
                outcome => format!("specified that the appeal is {}", outcome.label()),
            },
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn answer_fragment(field: Field, answer: Answer) -> String {
    match answer {
        Answer::Yes => format!("specified that {} applies", field.label()),
        Answer::No => format!("specified that {} does not apply", field.label()),
        Answer::Unanswered => not_provided(field),
    }
}

fn not_provided(field: Field) -> String {
    format!("not provided an answer to the {} question", field.label())
}

fn missing(field: Field) -> String {
    format!("a missing answer for the {} question", field.label())
}

fn unexpected(field: Field) -> String {
    format!("submitted an unexpected answer for the {} question", field.label())
}

fn made_selections(field: Field) -> String {
    format!("made selections for the {} question", field.label())
}

fn made_no_selections(field: Field) -> String {
    format!("made no selections for the {} question", field.label())
}

/// Predicate over a tri-state answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerPredicate {
    Any,
    Yes,
    No,
    Unanswered,
    NotYes,
    NotNo,
    Answered,
}

impl AnswerPredicate {
    pub fn matches(self, answer: Answer) -> bool {
        match self {
            AnswerPredicate::Any => true,
            AnswerPredicate::Yes => answer.is_yes(),
            AnswerPredicate::No => answer.is_no(),
            AnswerPredicate::Unanswered => !answer.is_answered(),
            AnswerPredicate::NotYes => !answer.is_yes(),
            AnswerPredicate::NotNo => !answer.is_no(),
            AnswerPredicate::Answered => answer.is_answered(),
        }
    }
}

/// Predicate over the Schedule 7 selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionPredicate {
    Any,
    Unanswered,
    NoneSelected,
    Selected,
    Answered,
}

impl SelectionPredicate {
    pub fn matches(self, selection: &Schedule7Selection) -> bool {
        match self {
            SelectionPredicate::Any => true,
            SelectionPredicate::Unanswered => !selection.is_answered(),
            SelectionPredicate::NoneSelected => selection.is_none_selected(),
            SelectionPredicate::Selected => selection.has_selections(),
            SelectionPredicate::Answered => selection.is_answered(),
        }
    }
}

/// Predicate over the declared appeal outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomePredicate {
    Any,
    Allowed,
    Refused,
    Unset,
    Declared,
}

impl OutcomePredicate {
    pub fn matches(self, outcome: DeclaredOutcome) -> bool {
        match self {
            OutcomePredicate::Any => true,
            OutcomePredicate::Allowed => outcome == DeclaredOutcome::Allowed,
            OutcomePredicate::Refused => outcome == DeclaredOutcome::Refused,
            OutcomePredicate::Unset => !outcome.is_declared(),
            OutcomePredicate::Declared => outcome.is_declared(),
        }
    }
}

/// Declarative applicability predicate over [`CaseFacts`]
///
/// Start from [`FactPattern::ANY`] and narrow one field at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactPattern {
    pub wca_appeal: AnswerPredicate,
    pub points_band: Option<PointsBand>,
    pub support_group_only: AnswerPredicate,
    pub schedule_8_paragraph_4: AnswerPredicate,
    pub schedule_9_paragraph_4: AnswerPredicate,
    pub schedule_7_activities: SelectionPredicate,
    pub declared_outcome: OutcomePredicate,
}

impl FactPattern {
    /// Matches every set of facts
    pub const ANY: FactPattern = FactPattern {
        wca_appeal: AnswerPredicate::Any,
        points_band: None,
        support_group_only: AnswerPredicate::Any,
        schedule_8_paragraph_4: AnswerPredicate::Any,
        schedule_9_paragraph_4: AnswerPredicate::Any,
        schedule_7_activities: SelectionPredicate::Any,
        declared_outcome: OutcomePredicate::Any,
    };

    /// Matches every WCA appeal, including those where the question was not answered
    pub const WCA: FactPattern = FactPattern::ANY.wca_appeal(AnswerPredicate::NotNo);

    pub const fn wca_appeal(self, predicate: AnswerPredicate) -> Self {
        Self { wca_appeal: predicate, ..self }
    }

    pub const fn points_band(self, band: PointsBand) -> Self {
        Self { points_band: Some(band), ..self }
    }

    pub const fn support_group_only(self, predicate: AnswerPredicate) -> Self {
        Self { support_group_only: predicate, ..self }
    }

    pub const fn schedule_8_paragraph_4(self, predicate: AnswerPredicate) -> Self {
        Self { schedule_8_paragraph_4: predicate, ..self }
    }

    pub const fn schedule_9_paragraph_4(self, predicate: AnswerPredicate) -> Self {
        Self { schedule_9_paragraph_4: predicate, ..self }
    }

    pub const fn schedule_7_activities(self, predicate: SelectionPredicate) -> Self {
        Self { schedule_7_activities: predicate, ..self }
    }

    pub const fn declared_outcome(self, predicate: OutcomePredicate) -> Self {
        Self { declared_outcome: predicate, ..self }
    }

    pub fn matches(&self, facts: &CaseFacts) -> bool {
        self.wca_appeal.matches(facts.wca_appeal())
            && self
                .points_band
                .map_or(true, |band| band == PointsBand::classify(facts.points_total()))
            && self.support_group_only.matches(facts.support_group_only())
            && self.schedule_8_paragraph_4.matches(facts.schedule_8_paragraph_4())
            && self.schedule_9_paragraph_4.matches(facts.schedule_9_paragraph_4())
            && self.schedule_7_activities.matches(facts.schedule_7_activities())
            && self.declared_outcome.matches(facts.declared_outcome())
    }
}

/// Something the facts must satisfy once a condition applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expectation {
    PointsBand(PointsBand),
    SupportGroupOnly(AnswerPredicate),
    Schedule8Paragraph4(AnswerPredicate),
    Schedule9Paragraph4(AnswerPredicate),
    Schedule7Activities(SelectionPredicate),
    AllowedOrRefused(OutcomePredicate),
}

impl Expectation {
    /// Returns the unmet fragment, or `None` when the facts meet the expectation
    pub fn check(&self, facts: &CaseFacts) -> Option<String> {
        match *self {
            Expectation::PointsBand(band) => {
                (PointsBand::classify(facts.points_total()) != band)
                    .then(|| band.unmet_fragment().to_string())
            }
            Expectation::SupportGroupOnly(predicate) => {
                check_answer(Field::SupportGroupOnly, predicate, facts.support_group_only())
            }
            Expectation::Schedule8Paragraph4(predicate) => {
                check_answer(Field::Schedule8Paragraph4, predicate, facts.schedule_8_paragraph_4())
            }
            Expectation::Schedule9Paragraph4(predicate) => {
                check_answer(Field::Schedule9Paragraph4, predicate, facts.schedule_9_paragraph_4())
            }
            Expectation::Schedule7Activities(predicate) => {
                check_selection(predicate, facts.schedule_7_activities())
            }
            Expectation::AllowedOrRefused(predicate) => {
                check_outcome(predicate, facts.declared_outcome())
            }
        }
    }
}

fn check_answer(field: Field, predicate: AnswerPredicate, answer: Answer) -> Option<String> {
    if predicate.matches(answer) {
        return None;
    }
    Some(match (predicate, answer) {
        (_, Answer::Unanswered) => missing(field),
        (AnswerPredicate::Unanswered, _) => unexpected(field),
        (_, answered) => format!("answered {} for the {} question", answered.label(), field.label()),
    })
}

fn check_selection(predicate: SelectionPredicate, selection: &Schedule7Selection) -> Option<String> {
    if predicate.matches(selection) {
        return None;
    }
    let field = Field::Schedule7Activities;
    Some(match predicate {
        _ if !selection.is_answered() => missing(field),
        SelectionPredicate::Unanswered => unexpected(field),
        _ if selection.has_selections() => made_selections(field),
        _ => made_no_selections(field),
    })
}

fn check_outcome(predicate: OutcomePredicate, outcome: DeclaredOutcome) -> Option<String> {
    if predicate.matches(outcome) {
        return None;
    }
    let field = Field::AllowedOrRefused;
    Some(if outcome.is_declared() {
        unexpected(field)
    } else {
        missing(field)
    })
}

/// A closed family of conditions forming one classifier stage
///
/// Exactly one member of [`DecisionCondition::ALL`] applies to any set of
/// facts in the stage's domain, and [`DecisionCondition::select`] returns it.
pub trait DecisionCondition: Copy + Eq + fmt::Debug + 'static {
    /// Stage name used in logs and invariant errors
    const STAGE: &'static str;

    /// Every condition in the stage
    const ALL: &'static [Self];

    /// Picks the condition that applies to the facts
    fn select(facts: &CaseFacts) -> Self;

    /// When this condition applies
    fn pattern(&self) -> FactPattern;

    /// Fields reported back as already satisfied when validation fails
    fn announced(&self) -> &'static [Field];

    /// What the facts must meet once this condition applies
    fn expectations(&self) -> &'static [Expectation];

    fn is_applicable(&self, facts: &CaseFacts) -> bool {
        self.pattern().matches(facts)
    }

    /// Checks every expectation, reporting all unmet ones in a single error
    fn validate(&self, facts: &CaseFacts) -> Option<ValidationError> {
        let unmet: Vec<String> = self
            .expectations()
            .iter()
            .filter_map(|expectation| expectation.check(facts))
            .collect();

        if unmet.is_empty() {
            return None;
        }

        let satisfied: Vec<String> = self
            .announced()
            .iter()
            .map(|field| field.satisfied_fragment(facts))
            .collect();

        Some(ValidationError::from_fragments(&satisfied, &unmet))
    }
}

/// Selects the stage's condition and validates the facts against it
pub(crate) fn evaluate<C: DecisionCondition>(facts: &CaseFacts) -> (C, Option<ValidationError>) {
    let condition = C::select(facts);
    debug_assert!(
        condition.is_applicable(facts),
        "{:?} selected for facts it does not apply to",
        condition
    );

    let error = condition.validate(facts);
    debug!(
        stage = C::STAGE,
        condition = ?condition,
        valid = error.is_none(),
        "Matched condition"
    );
    (condition, error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts() -> CaseFacts {
        CaseFacts::builder()
            .wca_appeal(Answer::Yes)
            .points_total(10)
            .support_group_only(Answer::No)
            .schedule_8_paragraph_4(Answer::Yes)
            .build()
    }

    #[test]
    fn test_answer_predicates() {
        assert!(AnswerPredicate::NotNo.matches(Answer::Unanswered));
        assert!(!AnswerPredicate::NotNo.matches(Answer::No));
        assert!(AnswerPredicate::NotYes.matches(Answer::No));
        assert!(!AnswerPredicate::Answered.matches(Answer::Unanswered));
        for answer in Answer::ALL {
            assert!(AnswerPredicate::Any.matches(answer));
        }
    }

    #[test]
    fn test_selection_predicates() {
        let selected = Schedule7Selection::selected(["a"]);
        assert!(SelectionPredicate::Selected.matches(&selected));
        assert!(SelectionPredicate::Answered.matches(&Schedule7Selection::NoneSelected));
        assert!(!SelectionPredicate::NoneSelected.matches(&selected));
        assert!(SelectionPredicate::NoneSelected.matches(&Schedule7Selection::Selected(vec![])));
    }

    #[test]
    fn test_pattern_matches() {
        let pattern = FactPattern::WCA
            .points_band(PointsBand::Low)
            .schedule_8_paragraph_4(AnswerPredicate::Yes);

        assert!(pattern.matches(&facts()));
        assert!(!pattern.matches(&facts().to_builder().points_total(15).build()));
        assert!(!pattern.matches(&facts().to_builder().wca_appeal(Answer::No).build()));
        assert!(FactPattern::ANY.matches(&CaseFacts::default()));
    }

    #[test]
    fn test_satisfied_fragments() {
        let facts = facts();
        assert_eq!(
            Field::Schedule8Paragraph4.satisfied_fragment(&facts),
            "specified that Schedule 8 Paragraph 4 applies"
        );
        assert_eq!(
            Field::SupportGroupOnly.satisfied_fragment(&facts),
            "specified that Support Group Only Appeal does not apply"
        );
        assert_eq!(
            Field::Schedule9Paragraph4.satisfied_fragment(&facts),
            "not provided an answer to the Schedule 9 Paragraph 4 question"
        );
        assert_eq!(Field::PointsBand.satisfied_fragment(&facts), "awarded less than 15 points");
    }

    #[test]
    fn test_unmet_answer_fragments() {
        let facts = facts();
        assert_eq!(
            Expectation::Schedule9Paragraph4(AnswerPredicate::Answered).check(&facts).unwrap(),
            "a missing answer for the Schedule 9 Paragraph 4 question"
        );
        assert_eq!(
            Expectation::Schedule8Paragraph4(AnswerPredicate::Unanswered).check(&facts).unwrap(),
            "submitted an unexpected answer for the Schedule 8 Paragraph 4 question"
        );
        assert_eq!(
            Expectation::SupportGroupOnly(AnswerPredicate::Yes).check(&facts).unwrap(),
            "answered No for the Support Group Only Appeal question"
        );
        assert_eq!(Expectation::SupportGroupOnly(AnswerPredicate::No).check(&facts), None);
    }

    #[test]
    fn test_unmet_selection_fragments() {
        let none = facts().to_builder().schedule_7_activities(Schedule7Selection::NoneSelected).build();
        let some = facts().to_builder().schedule_7_activities(Schedule7Selection::selected(["a"])).build();

        assert_eq!(
            Expectation::Schedule7Activities(SelectionPredicate::Selected).check(&none).unwrap(),
            "made no selections for the Schedule 7 Activities question"
        );
        assert_eq!(
            Expectation::Schedule7Activities(SelectionPredicate::NoneSelected).check(&some).unwrap(),
            "made selections for the Schedule 7 Activities question"
        );
        assert_eq!(
            Expectation::Schedule7Activities(SelectionPredicate::Answered).check(&facts()).unwrap(),
            "a missing answer for the Schedule 7 Activities question"
        );
        assert_eq!(
            Expectation::Schedule7Activities(SelectionPredicate::Unanswered).check(&some).unwrap(),
            "submitted an unexpected answer for the Schedule 7 Activities question"
        );
    }

    #[test]
    fn test_unmet_points_and_outcome_fragments() {
        let high = facts().to_builder().points_total(20).build();
        assert_eq!(
            Expectation::PointsBand(PointsBand::Low).check(&high).unwrap(),
            "not awarded less than 15 points"
        );
        assert_eq!(
            Expectation::AllowedOrRefused(OutcomePredicate::Declared).check(&high).unwrap(),
            "a missing answer for the Allowed or Refused question"
        );
    }
}
