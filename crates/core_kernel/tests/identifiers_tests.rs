//! Tests for identifiers, answers and message joining

use core_kernel::{join_grammatically, Answer, CaseId};
use proptest::prelude::*;
use uuid::Uuid;

mod case_id_tests {
    use super::*;

    #[test]
    fn test_case_id_prefix() {
        assert_eq!(CaseId::prefix(), "CASE");
    }

    #[test]
    fn test_case_id_parses_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: CaseId = uuid.to_string().parse().unwrap();
        assert_eq!(parsed.as_uuid(), &uuid);
    }

    #[test]
    fn test_case_id_uniqueness() {
        assert_ne!(CaseId::new(), CaseId::new());
    }

    #[test]
    fn test_case_id_serializes_transparently() {
        let uuid = Uuid::new_v4();
        let id = CaseId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}

mod answer_tests {
    use super::*;

    #[test]
    fn test_all_answers_are_distinct() {
        assert_eq!(Answer::ALL.len(), 3);
        assert_ne!(Answer::ALL[0], Answer::ALL[1]);
        assert_ne!(Answer::ALL[1], Answer::ALL[2]);
    }

    #[test]
    fn test_default_is_unanswered() {
        assert_eq!(Answer::default(), Answer::Unanswered);
        assert!(!Answer::default().is_answered());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Answer::Yes.to_string(), "Yes");
        assert_eq!(Answer::No.to_string(), "No");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let answers: Vec<Answer> = serde_json::from_str(r#"["yes", "no", "unanswered"]"#).unwrap();
        assert_eq!(answers, vec![Answer::Yes, Answer::No, Answer::Unanswered]);
    }
}

mod join_tests {
    use super::*;

    #[test]
    fn test_join_three_items() {
        assert_eq!(
            join_grammatically(&["made selections", "a missing answer", "an unexpected answer"]),
            "made selections, a missing answer and an unexpected answer"
        );
    }

    proptest! {
        #[test]
        fn joined_text_contains_every_fragment(parts in proptest::collection::vec("[a-z]{1,8}", 0..6)) {
            let joined = join_grammatically(&parts);
            for part in &parts {
                prop_assert!(joined.contains(part.as_str()));
            }
            if parts.len() >= 2 {
                prop_assert_eq!(joined.matches(" and ").count(), 1);
            }
        }
    }
}
