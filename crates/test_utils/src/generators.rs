//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random case facts across the
//! whole input domain, valid or not.

use core_kernel::Answer;
use domain_decision::{CaseFacts, DeclaredOutcome, Schedule7Selection, ScoredActivityAnswer};
use proptest::prelude::*;

use crate::fixtures::MAX_GRID_POINTS;

/// Strategy for generating tri-state answers
pub fn answer_strategy() -> impl Strategy<Value = Answer> {
    prop_oneof![Just(Answer::Yes), Just(Answer::No), Just(Answer::Unanswered)]
}

/// Strategy for generating declared outcomes
pub fn outcome_strategy() -> impl Strategy<Value = DeclaredOutcome> {
    prop_oneof![
        Just(DeclaredOutcome::Allowed),
        Just(DeclaredOutcome::Refused),
        Just(DeclaredOutcome::Unset),
    ]
}

/// Strategy for generating points totals within the tested domain
pub fn points_strategy() -> impl Strategy<Value = u32> {
    0u32..=MAX_GRID_POINTS
}

/// Strategy for generating Schedule 7 selections of every shape
pub fn schedule_7_strategy() -> impl Strategy<Value = Schedule7Selection> {
    prop_oneof![
        Just(Schedule7Selection::Unanswered),
        Just(Schedule7Selection::NoneSelected),
        proptest::collection::vec("schedule7[A-Z][a-zA-Z]{3,12}", 1..4)
            .prop_map(|activities: Vec<String>| Schedule7Selection::selected(activities)),
    ]
}

/// Strategy for generating scored Schedule 6 descriptors
pub fn scored_activity_strategy() -> impl Strategy<Value = ScoredActivityAnswer> {
    ("[a-z][a-zA-Z]{4,16}", prop_oneof![Just(0u32), Just(6), Just(9), Just(15)], "[a-e]", "[A-Za-z ]{5,40}")
        .prop_map(|(key, points, letter, text)| ScoredActivityAnswer::new(key, points, letter, text))
}

/// Strategy for generating case facts anywhere in the input domain
pub fn case_facts_strategy() -> impl Strategy<Value = CaseFacts> {
    (
        (answer_strategy(), points_strategy(), answer_strategy()),
        (answer_strategy(), answer_strategy(), schedule_7_strategy()),
        outcome_strategy(),
        proptest::collection::vec(scored_activity_strategy(), 0..3),
        proptest::collection::vec("[A-Za-z ]{5,30}", 0..2),
        proptest::option::of("[A-Za-z .]{0,30}"),
    )
        .prop_map(
            |((wca, points, support_group_only), (schedule_8, schedule_9, selection), outcome, scored, reasons, anything_else)| {
                let mut builder = CaseFacts::builder()
                    .wca_appeal(wca)
                    .points_total(points)
                    .support_group_only(support_group_only)
                    .schedule_8_paragraph_4(schedule_8)
                    .schedule_9_paragraph_4(schedule_9)
                    .schedule_7_activities(selection)
                    .declared_outcome(outcome)
                    .scored_activities(scored);
                if let Some(text) = anything_else {
                    builder = builder.anything_else(text);
                }
                reasons
                    .into_iter()
                    .fold(builder, |builder, reason| builder.add_reason(reason))
                    .build()
            },
        )
}

/// Strategy for generating WCA appeals only
pub fn wca_case_facts_strategy() -> impl Strategy<Value = CaseFacts> {
    (case_facts_strategy(), prop_oneof![Just(Answer::Yes), Just(Answer::Unanswered)])
        .prop_map(|(facts, wca)| facts.to_builder().wca_appeal(wca).build())
}
