//! Tri-state answers
//!
//! Case questions are either answered Yes, answered No, or not answered at
//! all. The upstream extraction collaborator normalizes free-form case fields
//! into this vocabulary before classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A yes / no / unanswered question value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    /// Answered Yes
    #[serde(alias = "Yes", alias = "YES")]
    Yes,
    /// Answered No
    #[serde(alias = "No", alias = "NO")]
    No,
    /// No answer was given
    #[default]
    Unanswered,
}

impl Answer {
    /// Every answer value, in a fixed order
    pub const ALL: [Answer; 3] = [Answer::Yes, Answer::No, Answer::Unanswered];

    /// Returns true if the question was answered either way
    pub fn is_answered(self) -> bool {
        !matches!(self, Answer::Unanswered)
    }

    pub fn is_yes(self) -> bool {
        matches!(self, Answer::Yes)
    }

    pub fn is_no(self) -> bool {
        matches!(self, Answer::No)
    }

    /// Converts to an optional boolean, `None` when unanswered
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Answer::Yes => Some(true),
            Answer::No => Some(false),
            Answer::Unanswered => None,
        }
    }

    /// Display label as shown to case workers ("Yes" / "No")
    pub fn label(self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
            Answer::Unanswered => "Unanswered",
        }
    }
}

impl From<Option<bool>> for Answer {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Answer::Yes,
            Some(false) => Answer::No,
            None => Answer::Unanswered,
        }
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::from(Some(value))
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Answer {
    type Err = CoreError;

    /// Parses case field values; a blank value counts as unanswered
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(Answer::Yes),
            "no" | "n" | "false" => Ok(Answer::No),
            "" | "unanswered" => Ok(Answer::Unanswered),
            _ => Err(CoreError::invalid_answer(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Yes".parse::<Answer>().unwrap(), Answer::Yes);
        assert_eq!("NO".parse::<Answer>().unwrap(), Answer::No);
        assert_eq!("  ".parse::<Answer>().unwrap(), Answer::Unanswered);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "maybe".parse::<Answer>().unwrap_err();
        assert_eq!(err, CoreError::InvalidAnswer("maybe".to_string()));
    }

    #[test]
    fn test_optional_bool_conversion() {
        assert_eq!(Answer::from(None), Answer::Unanswered);
        assert_eq!(Answer::from(Some(false)).as_bool(), Some(false));
        assert!(Answer::from(true).is_yes());
    }

    #[test]
    fn test_serde_accepts_case_field_spelling() {
        let parsed: Answer = serde_json::from_str("\"Yes\"").unwrap();
        assert_eq!(parsed, Answer::Yes);
        assert_eq!(serde_json::to_string(&Answer::Unanswered).unwrap(), "\"unanswered\"");
    }
}
