//! Condition Partition Tests
//!
//! Walks the whole fact grid and checks that each classifier stage is a true
//! partition: exactly one condition applies to any set of facts, and it is
//! the condition `select` picks.
//!
//! # Test Organization
//!
//! - `regulations_partition` - Stage one over every grid entry
//! - `outcome_partition` - Stage two over every entry that passed stage one
//! - `pipeline` - The service never reports a broken invariant

use domain_decision::{
    outcome, regulations, DecisionCondition, DecisionNoticeService, OutcomeCondition,
    RegulationsCondition,
};
use test_utils::{assert_no_invariant_violation, FACT_GRID};

// ============================================================================
// Regulations Stage
// ============================================================================

mod regulations_partition {
    use super::*;

    #[test]
    fn test_exactly_one_condition_applies() {
        for facts in FACT_GRID.iter() {
            let applicable: Vec<_> = RegulationsCondition::ALL
                .iter()
                .filter(|condition| condition.is_applicable(facts))
                .collect();

            assert_eq!(applicable.len(), 1, "{:?} matched {:?}", facts, applicable);
            assert_eq!(*applicable[0], RegulationsCondition::select(facts));
        }
    }

    #[test]
    fn test_every_condition_is_reachable() {
        for condition in RegulationsCondition::ALL {
            assert!(
                FACT_GRID.iter().any(|facts| RegulationsCondition::select(facts) == *condition),
                "{} is never selected",
                condition
            );
        }
    }

    #[test]
    fn test_errors_are_review_messages() {
        for facts in FACT_GRID.iter() {
            if let Err(error) = regulations::classify(facts) {
                test_utils::assert_review_message(error.message());
            }
        }
    }
}

// ============================================================================
// Outcome Stage
// ============================================================================

mod outcome_partition {
    use super::*;

    #[test]
    fn test_exactly_one_condition_applies_after_regulations() {
        for facts in FACT_GRID.iter() {
            if regulations::classify(facts).is_err() {
                continue;
            }

            let applicable: Vec<_> = OutcomeCondition::ALL
                .iter()
                .filter(|condition| condition.is_applicable(facts))
                .collect();

            assert_eq!(applicable.len(), 1, "{:?} matched {:?}", facts, applicable);
            assert_eq!(*applicable[0], OutcomeCondition::select(facts));
        }
    }

    #[test]
    fn test_valid_outcome_always_names_a_scenario() {
        for facts in FACT_GRID.iter() {
            let Ok(validated) = regulations::classify(facts) else {
                continue;
            };
            let condition = OutcomeCondition::select(facts);
            if condition.validate(facts).is_none() {
                assert!(
                    condition.scenario(facts).is_some(),
                    "{:?} validated {:?} without a scenario",
                    condition,
                    facts
                );
            }
            assert_no_invariant_violation(&outcome::classify(&validated));
        }
    }
}

// ============================================================================
// Pipeline
// ============================================================================

mod pipeline {
    use super::*;

    #[test]
    fn test_decide_never_breaks_an_invariant() {
        let service = DecisionNoticeService::new();
        for facts in FACT_GRID.iter() {
            assert_no_invariant_violation(&service.decide(facts));
        }
    }

    #[test]
    fn test_validate_agrees_with_decide() {
        let service = DecisionNoticeService::new();
        for facts in FACT_GRID.iter().step_by(7) {
            let validated = service.validate(facts).map_err(|error| error.to_string());
            let decided = service
                .decide(facts)
                .map(|notice| notice.scenario)
                .map_err(|error| error.to_string());
            assert_eq!(validated, decided);
        }
    }
}
