//! Pre-built Test Fixtures
//!
//! Provides ready-to-use case facts for every scenario, plus the exhaustive
//! grid of facts used by the partition tests. These fixtures are consistent
//! and predictable for unit tests.

use core_kernel::Answer;
use domain_decision::{
    CaseFacts, DeclaredOutcome, Scenario, Schedule7Selection, ScoredActivityAnswer,
};
use once_cell::sync::Lazy;

use crate::builders::TestCaseFactsBuilder;

/// Highest points total covered by the fact grid
pub const MAX_GRID_POINTS: u32 = 99;

/// Fixture for scored Schedule 6 descriptors
pub struct ActivityFixtures;

impl ActivityFixtures {
    /// Mobilising unaided, 9 points
    pub fn mobilising() -> ScoredActivityAnswer {
        ScoredActivityAnswer::new(
            "mobilisingUnaided",
            9,
            "c",
            "Cannot either mobilise more than 100 metres on level ground without stopping",
        )
    }

    /// Standing and sitting, 6 points
    pub fn standing_and_sitting() -> ScoredActivityAnswer {
        ScoredActivityAnswer::new(
            "standingAndSitting",
            6,
            "c",
            "Cannot, for the majority of the time, remain at a work station for more than an hour",
        )
    }

    /// Schedule 7 activity keys
    pub fn schedule_7_keys() -> Vec<&'static str> {
        vec!["schedule7MobilisingUnaided", "schedule7CopingWithChange"]
    }
}

/// Fixture for facts that resolve to each scenario
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    /// Facts that pass both classifier stages and resolve to `scenario`
    ///
    /// Every fixture carries a reason, as every submitted notice does.
    pub fn facts_for(scenario: Scenario) -> CaseFacts {
        let keys = ActivityFixtures::schedule_7_keys();
        let builder = match scenario {
            Scenario::Scenario1 => TestCaseFactsBuilder::low_points()
                .support_group_only(Answer::No)
                .schedule_8(Answer::No)
                .refused(),
            Scenario::Scenario2 => TestCaseFactsBuilder::low_points()
                .support_group_only(Answer::Yes)
                .schedule_7_none()
                .schedule_9(Answer::No)
                .refused(),
            Scenario::Scenario3 => TestCaseFactsBuilder::low_points()
                .support_group_only(Answer::Yes)
                .schedule_7_none()
                .schedule_9(Answer::Yes)
                .allowed(),
            Scenario::Scenario4 => TestCaseFactsBuilder::low_points()
                .support_group_only(Answer::Yes)
                .schedule_7_selected(&keys)
                .allowed(),
            Scenario::Scenario5 => TestCaseFactsBuilder::high_points()
                .schedule_7_none()
                .schedule_9(Answer::No)
                .allowed(),
            Scenario::Scenario6 => TestCaseFactsBuilder::high_points()
                .schedule_7_selected(&keys)
                .allowed(),
            Scenario::Scenario7 => TestCaseFactsBuilder::low_points()
                .support_group_only(Answer::No)
                .schedule_8(Answer::Yes)
                .schedule_7_none()
                .schedule_9(Answer::No)
                .allowed(),
            Scenario::Scenario8 => TestCaseFactsBuilder::low_points()
                .support_group_only(Answer::No)
                .schedule_8(Answer::Yes)
                .schedule_7_none()
                .schedule_9(Answer::Yes)
                .allowed(),
            Scenario::Scenario9 => TestCaseFactsBuilder::low_points()
                .support_group_only(Answer::No)
                .schedule_8(Answer::Yes)
                .schedule_7_selected(&keys)
                .allowed(),
            Scenario::Scenario10 => TestCaseFactsBuilder::non_wca().allowed(),
            Scenario::Scenario12 => TestCaseFactsBuilder::high_points()
                .schedule_7_none()
                .schedule_9(Answer::Yes)
                .allowed(),
        };
        builder
            .with_reason("The tribunal preferred the appellant's oral evidence")
            .build()
    }

    /// Facts for `scenario` with scored descriptors and further text, so every optional component is included
    pub fn full_facts_for(scenario: Scenario) -> CaseFacts {
        Self::facts_for(scenario)
            .to_builder()
            .add_scored_activity(ActivityFixtures::mobilising())
            .add_scored_activity(ActivityFixtures::standing_and_sitting())
            .anything_else("The appellant may wish to seek advice about other benefits.")
            .build()
    }
}

/// Every Schedule 7 selection shape
pub fn schedule_7_selections() -> [Schedule7Selection; 3] {
    [
        Schedule7Selection::Unanswered,
        Schedule7Selection::NoneSelected,
        Schedule7Selection::selected(["schedule7MobilisingUnaided"]),
    ]
}

/// Every combination of points 0..=99, tri-state answers, Schedule 7 shapes and declared outcomes
pub static FACT_GRID: Lazy<Vec<CaseFacts>> = Lazy::new(|| {
    let mut grid = Vec::new();
    for points in 0..=MAX_GRID_POINTS {
        for wca in Answer::ALL {
            for support_group_only in Answer::ALL {
                for schedule_8 in Answer::ALL {
                    for schedule_9 in Answer::ALL {
                        for selection in schedule_7_selections() {
                            for outcome in DeclaredOutcome::ALL {
                                grid.push(
                                    CaseFacts::builder()
                                        .wca_appeal(wca)
                                        .points_total(points)
                                        .support_group_only(support_group_only)
                                        .schedule_8_paragraph_4(schedule_8)
                                        .schedule_9_paragraph_4(schedule_9)
                                        .schedule_7_activities(selection.clone())
                                        .declared_outcome(outcome)
                                        .build(),
                                );
                            }
                        }
                    }
                }
            }
        }
    }
    grid
});

/// Loads a JSON fixture into case facts
///
/// # Panics
///
/// Panics if the JSON does not describe case facts
pub fn facts_from_json(json: &str) -> CaseFacts {
    serde_json::from_str(json).expect("fixture JSON should describe case facts")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size() {
        assert_eq!(FACT_GRID.len(), 100 * 3 * 3 * 3 * 3 * 3 * 3);
    }

    #[test]
    fn test_full_facts_have_optional_content() {
        let facts = ScenarioFixtures::full_facts_for(Scenario::Scenario1);
        assert_eq!(facts.scored_activities().len(), 2);
        assert_eq!(facts.reasons_for_decision().len(), 1);
        assert!(facts.anything_else().is_some());
    }

    #[test]
    fn test_facts_from_json() {
        let facts = facts_from_json(r#"{"wca_appeal": "no"}"#);
        assert!(!facts.is_wca_appeal());
    }
}
