//! Allowed or refused outcome classification
//!
//! The second classifier stage. It runs only on [`ValidatedFacts`] and
//! combines the declared outcome with the Support Group Only flag and the
//! schedule answers to resolve a single [`Scenario`].

use serde::{Deserialize, Serialize};
use tracing::error;

use core_kernel::Answer;

use crate::condition::{
    evaluate, AnswerPredicate as A, DecisionCondition, Expectation, FactPattern, Field,
    OutcomePredicate as O, SelectionPredicate as S,
};
use crate::error::DecisionError;
use crate::facts::{CaseFacts, DeclaredOutcome};
use crate::points::PointsBand;
use crate::regulations::ValidatedFacts;
use crate::scenario::Scenario;

/// Stage-two conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeCondition {
    NonWcaAppeal,
    OutcomeUnspecified,
    SupportGroupOnlyUnspecified,
    RefusedNonSupportGroupOnly,
    RefusedSupportGroupOnly,
    AllowedNonSupportGroupOnlyHighPoints,
    AllowedNonSupportGroupOnlyLowPoints,
    AllowedSupportGroupOnlySchedule7Selected,
    AllowedSupportGroupOnlySchedule7NotSelected,
    AllowedSupportGroupOnlySchedule7Unspecified,
}

impl OutcomeCondition {
    /// Resolves the scenario for facts this condition applies to
    ///
    /// Returns `None` for conditions that only ever report validation errors,
    /// and for facts the regulations stage would have rejected.
    pub fn scenario(&self, facts: &CaseFacts) -> Option<Scenario> {
        let selection = facts.schedule_7_activities();
        let schedule_9 = facts.schedule_9_paragraph_4();
        let by_schedules = |selected: Scenario, schedule_9_applies: Scenario, neither: Scenario| {
            if selection.has_selections() {
                Some(selected)
            } else if selection.is_none_selected() && schedule_9.is_answered() {
                Some(if schedule_9.is_yes() { schedule_9_applies } else { neither })
            } else {
                None
            }
        };

        match self {
            OutcomeCondition::NonWcaAppeal => Some(Scenario::Scenario10),
            OutcomeCondition::RefusedNonSupportGroupOnly => Some(Scenario::Scenario1),
            OutcomeCondition::RefusedSupportGroupOnly => Some(Scenario::Scenario2),
            OutcomeCondition::AllowedSupportGroupOnlySchedule7NotSelected => Some(Scenario::Scenario3),
            OutcomeCondition::AllowedSupportGroupOnlySchedule7Selected => Some(Scenario::Scenario4),
            OutcomeCondition::AllowedNonSupportGroupOnlyHighPoints => {
                by_schedules(Scenario::Scenario6, Scenario::Scenario12, Scenario::Scenario5)
            }
            OutcomeCondition::AllowedNonSupportGroupOnlyLowPoints => {
                by_schedules(Scenario::Scenario9, Scenario::Scenario8, Scenario::Scenario7)
            }
            OutcomeCondition::OutcomeUnspecified
            | OutcomeCondition::SupportGroupOnlyUnspecified
            | OutcomeCondition::AllowedSupportGroupOnlySchedule7Unspecified => None,
        }
    }
}

impl DecisionCondition for OutcomeCondition {
    const STAGE: &'static str = "outcome";

    const ALL: &'static [Self] = &[
        OutcomeCondition::NonWcaAppeal,
        OutcomeCondition::OutcomeUnspecified,
        OutcomeCondition::SupportGroupOnlyUnspecified,
        OutcomeCondition::RefusedNonSupportGroupOnly,
        OutcomeCondition::RefusedSupportGroupOnly,
        OutcomeCondition::AllowedNonSupportGroupOnlyHighPoints,
        OutcomeCondition::AllowedNonSupportGroupOnlyLowPoints,
        OutcomeCondition::AllowedSupportGroupOnlySchedule7Selected,
        OutcomeCondition::AllowedSupportGroupOnlySchedule7NotSelected,
        OutcomeCondition::AllowedSupportGroupOnlySchedule7Unspecified,
    ];

    fn select(facts: &CaseFacts) -> Self {
        if !facts.is_wca_appeal() {
            return OutcomeCondition::NonWcaAppeal;
        }

        let selection = facts.schedule_7_activities();
        match (facts.declared_outcome(), facts.support_group_only()) {
            (DeclaredOutcome::Unset, _) => OutcomeCondition::OutcomeUnspecified,
            (_, Answer::Unanswered) => OutcomeCondition::SupportGroupOnlyUnspecified,
            (DeclaredOutcome::Refused, Answer::No) => OutcomeCondition::RefusedNonSupportGroupOnly,
            (DeclaredOutcome::Refused, Answer::Yes) => OutcomeCondition::RefusedSupportGroupOnly,
            (DeclaredOutcome::Allowed, Answer::No) => match PointsBand::classify(facts.points_total()) {
                PointsBand::High => OutcomeCondition::AllowedNonSupportGroupOnlyHighPoints,
                PointsBand::Low => OutcomeCondition::AllowedNonSupportGroupOnlyLowPoints,
            },
            (DeclaredOutcome::Allowed, Answer::Yes) if !selection.is_answered() => {
                OutcomeCondition::AllowedSupportGroupOnlySchedule7Unspecified
            }
            (DeclaredOutcome::Allowed, Answer::Yes) if selection.has_selections() => {
                OutcomeCondition::AllowedSupportGroupOnlySchedule7Selected
            }
            (DeclaredOutcome::Allowed, Answer::Yes) => OutcomeCondition::AllowedSupportGroupOnlySchedule7NotSelected,
        }
    }

    fn pattern(&self) -> FactPattern {
        let allowed = FactPattern::WCA.declared_outcome(O::Allowed);
        let refused = FactPattern::WCA.declared_outcome(O::Refused);
        match self {
            OutcomeCondition::NonWcaAppeal => FactPattern::ANY.wca_appeal(A::No),
            OutcomeCondition::OutcomeUnspecified => FactPattern::WCA.declared_outcome(O::Unset),
            OutcomeCondition::SupportGroupOnlyUnspecified => FactPattern::WCA
                .declared_outcome(O::Declared)
                .support_group_only(A::Unanswered),
            OutcomeCondition::RefusedNonSupportGroupOnly => refused.support_group_only(A::No),
            OutcomeCondition::RefusedSupportGroupOnly => refused.support_group_only(A::Yes),
            OutcomeCondition::AllowedNonSupportGroupOnlyHighPoints => allowed
                .support_group_only(A::No)
                .points_band(PointsBand::High),
            OutcomeCondition::AllowedNonSupportGroupOnlyLowPoints => allowed
                .support_group_only(A::No)
                .points_band(PointsBand::Low),
            OutcomeCondition::AllowedSupportGroupOnlySchedule7Selected => allowed
                .support_group_only(A::Yes)
                .schedule_7_activities(S::Selected),
            OutcomeCondition::AllowedSupportGroupOnlySchedule7NotSelected => allowed
                .support_group_only(A::Yes)
                .schedule_7_activities(S::NoneSelected),
            OutcomeCondition::AllowedSupportGroupOnlySchedule7Unspecified => allowed
                .support_group_only(A::Yes)
                .schedule_7_activities(S::Unanswered),
        }
    }

    fn announced(&self) -> &'static [Field] {
        match self {
            OutcomeCondition::NonWcaAppeal | OutcomeCondition::OutcomeUnspecified => &[],
            OutcomeCondition::SupportGroupOnlyUnspecified => &[Field::AllowedOrRefused],
            OutcomeCondition::RefusedNonSupportGroupOnly
            | OutcomeCondition::RefusedSupportGroupOnly
            | OutcomeCondition::AllowedSupportGroupOnlySchedule7Unspecified => {
                &[Field::AllowedOrRefused, Field::SupportGroupOnly]
            }
            OutcomeCondition::AllowedNonSupportGroupOnlyHighPoints
            | OutcomeCondition::AllowedNonSupportGroupOnlyLowPoints => {
                &[Field::PointsBand, Field::AllowedOrRefused, Field::SupportGroupOnly]
            }
            OutcomeCondition::AllowedSupportGroupOnlySchedule7Selected
            | OutcomeCondition::AllowedSupportGroupOnlySchedule7NotSelected => &[
                Field::AllowedOrRefused,
                Field::SupportGroupOnly,
                Field::Schedule7Activities,
            ],
        }
    }

    fn expectations(&self) -> &'static [Expectation] {
        use Expectation as E;
        match self {
            OutcomeCondition::NonWcaAppeal | OutcomeCondition::AllowedNonSupportGroupOnlyHighPoints => &[],
            OutcomeCondition::OutcomeUnspecified => &[E::AllowedOrRefused(O::Declared)],
            OutcomeCondition::SupportGroupOnlyUnspecified => &[E::SupportGroupOnly(A::Answered)],
            OutcomeCondition::RefusedNonSupportGroupOnly => &[
                E::PointsBand(PointsBand::Low),
                E::Schedule8Paragraph4(A::No),
                E::Schedule7Activities(S::Unanswered),
                E::Schedule9Paragraph4(A::Unanswered),
            ],
            OutcomeCondition::RefusedSupportGroupOnly => &[
                E::Schedule8Paragraph4(A::Unanswered),
                E::Schedule7Activities(S::NoneSelected),
                E::Schedule9Paragraph4(A::No),
            ],
            OutcomeCondition::AllowedNonSupportGroupOnlyLowPoints => &[E::Schedule8Paragraph4(A::Yes)],
            OutcomeCondition::AllowedSupportGroupOnlySchedule7Selected => {
                &[E::Schedule8Paragraph4(A::Unanswered)]
            }
            OutcomeCondition::AllowedSupportGroupOnlySchedule7NotSelected => &[
                E::Schedule8Paragraph4(A::Unanswered),
                E::Schedule9Paragraph4(A::Yes),
            ],
            OutcomeCondition::AllowedSupportGroupOnlySchedule7Unspecified => {
                &[E::Schedule7Activities(S::Answered)]
            }
        }
    }
}

/// Runs the outcome stage
///
/// # Errors
///
/// Returns [`DecisionError::Validation`] when the declared outcome contradicts
/// the schedule answers, and [`DecisionError::InvariantViolation`] if a valid
/// condition cannot name its scenario.
pub fn classify(validated: &ValidatedFacts<'_>) -> Result<Scenario, DecisionError> {
    let facts = validated.facts();
    let (condition, validation_error) = evaluate::<OutcomeCondition>(facts);
    if let Some(validation_error) = validation_error {
        return Err(validation_error.into());
    }

    condition.scenario(facts).ok_or_else(|| {
        error!(
            condition = ?condition,
            regulations = %validated.condition(),
            "Outcome condition matched without resolving a scenario"
        );
        DecisionError::invariant(
            OutcomeCondition::STAGE,
            format!("{:?} matched without resolving a scenario", condition),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::Schedule7Selection;
    use crate::regulations;

    fn resolve(facts: &CaseFacts) -> Result<Scenario, DecisionError> {
        let validated = regulations::classify(facts).map_err(DecisionError::from)?;
        classify(&validated)
    }

    fn message(facts: &CaseFacts) -> String {
        resolve(facts).unwrap_err().validation_message().unwrap().to_string()
    }

    fn refused_low_points() -> CaseFacts {
        CaseFacts::builder()
            .wca_appeal(Answer::Yes)
            .points_total(6)
            .support_group_only(Answer::No)
            .schedule_8_paragraph_4(Answer::No)
            .declared_outcome(DeclaredOutcome::Refused)
            .build()
    }

    #[test]
    fn test_refused_non_support_group_only_is_scenario_1() {
        assert_eq!(resolve(&refused_low_points()), Ok(Scenario::Scenario1));
    }

    #[test]
    fn test_allowed_with_schedule_8_not_applying() {
        let facts = refused_low_points()
            .to_builder()
            .declared_outcome(DeclaredOutcome::Allowed)
            .build();

        assert_eq!(
            message(&facts),
            "You have awarded less than 15 points, specified that the appeal is allowed and \
             specified that Support Group Only Appeal does not apply, but have answered No for \
             the Schedule 8 Paragraph 4 question. Please review your previous selection."
        );
    }

    #[test]
    fn test_refused_support_group_only_is_scenario_2() {
        let facts = CaseFacts::builder()
            .wca_appeal(Answer::Yes)
            .points_total(3)
            .support_group_only(Answer::Yes)
            .schedule_7_activities(Schedule7Selection::NoneSelected)
            .schedule_9_paragraph_4(Answer::No)
            .declared_outcome(DeclaredOutcome::Refused)
            .build();

        assert_eq!(resolve(&facts), Ok(Scenario::Scenario2));

        let schedule_9_applies = facts.to_builder().schedule_9_paragraph_4(Answer::Yes).build();
        assert_eq!(
            message(&schedule_9_applies),
            "You have specified that the appeal is refused and specified that Support Group Only \
             Appeal applies, but have answered Yes for the Schedule 9 Paragraph 4 question. \
             Please review your previous selection."
        );
    }

    #[test]
    fn test_allowed_support_group_only_scenarios() {
        let base = CaseFacts::builder()
            .wca_appeal(Answer::Yes)
            .points_total(0)
            .support_group_only(Answer::Yes)
            .declared_outcome(DeclaredOutcome::Allowed)
            .build();

        let not_selected = base
            .to_builder()
            .schedule_7_activities(Schedule7Selection::NoneSelected)
            .schedule_9_paragraph_4(Answer::Yes)
            .build();
        assert_eq!(resolve(&not_selected), Ok(Scenario::Scenario3));

        let selected = base
            .to_builder()
            .schedule_7_activities(Schedule7Selection::selected(["schedule7CopingWithChange"]))
            .build();
        assert_eq!(resolve(&selected), Ok(Scenario::Scenario4));
    }

    #[test]
    fn test_allowed_high_points_scenarios() {
        let base = CaseFacts::builder()
            .wca_appeal(Answer::Yes)
            .points_total(15)
            .support_group_only(Answer::No)
            .declared_outcome(DeclaredOutcome::Allowed)
            .build();
        let none = base.to_builder().schedule_7_activities(Schedule7Selection::NoneSelected);

        assert_eq!(
            resolve(&none.clone().schedule_9_paragraph_4(Answer::No).build()),
            Ok(Scenario::Scenario5)
        );
        assert_eq!(
            resolve(&none.schedule_9_paragraph_4(Answer::Yes).build()),
            Ok(Scenario::Scenario12)
        );
        assert_eq!(
            resolve(&base.to_builder().schedule_7_activities(Schedule7Selection::selected(["a"])).build()),
            Ok(Scenario::Scenario6)
        );
    }

    #[test]
    fn test_allowed_low_points_scenarios() {
        let base = CaseFacts::builder()
            .wca_appeal(Answer::Yes)
            .points_total(9)
            .support_group_only(Answer::No)
            .schedule_8_paragraph_4(Answer::Yes)
            .declared_outcome(DeclaredOutcome::Allowed)
            .build();
        let none = base.to_builder().schedule_7_activities(Schedule7Selection::NoneSelected);

        assert_eq!(
            resolve(&none.clone().schedule_9_paragraph_4(Answer::No).build()),
            Ok(Scenario::Scenario7)
        );
        assert_eq!(
            resolve(&none.schedule_9_paragraph_4(Answer::Yes).build()),
            Ok(Scenario::Scenario8)
        );
        assert_eq!(
            resolve(&base.to_builder().schedule_7_activities(Schedule7Selection::selected(["a"])).build()),
            Ok(Scenario::Scenario9)
        );
    }

    #[test]
    fn test_missing_outcome() {
        let facts = refused_low_points()
            .to_builder()
            .declared_outcome(DeclaredOutcome::Unset)
            .build();

        assert_eq!(
            message(&facts),
            "You have a missing answer for the Allowed or Refused question. Please review your \
             previous selection."
        );
    }

    #[test]
    fn test_missing_support_group_only_after_schedule_8_applies() {
        let facts = CaseFacts::builder()
            .wca_appeal(Answer::Yes)
            .points_total(9)
            .schedule_8_paragraph_4(Answer::Yes)
            .schedule_7_activities(Schedule7Selection::selected(["a"]))
            .declared_outcome(DeclaredOutcome::Refused)
            .build();

        assert_eq!(
            message(&facts),
            "You have specified that the appeal is refused, but have a missing answer for the \
             Support Group Only Appeal question. Please review your previous selection."
        );
    }

    #[test]
    fn test_non_wca_appeal_is_scenario_10() {
        let facts = CaseFacts::builder().wca_appeal(Answer::No).build();
        assert_eq!(resolve(&facts), Ok(Scenario::Scenario10));
    }

    #[test]
    fn test_error_only_conditions_have_no_scenario() {
        let facts = CaseFacts::default();
        assert_eq!(OutcomeCondition::OutcomeUnspecified.scenario(&facts), None);
        assert_eq!(OutcomeCondition::SupportGroupOnlyUnspecified.scenario(&facts), None);
        assert_eq!(
            OutcomeCondition::AllowedSupportGroupOnlySchedule7Unspecified.scenario(&facts),
            None
        );
    }
}
