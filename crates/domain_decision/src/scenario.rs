//! Decision-notice scenarios
//!
//! The closed set of legally distinct notice outcomes. Numbering follows the
//! notice set, which has no scenario 11.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::{self, ContentComponent, Inclusion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scenario {
    /// Refused, not support group only, no Schedule 8 Paragraph 4
    Scenario1,
    /// Refused, support group only
    Scenario2,
    /// Allowed, support group only, Schedule 9 Paragraph 4 applies
    Scenario3,
    /// Allowed, support group only, Schedule 7 activities selected
    Scenario4,
    /// Allowed, 15 points or more, no Schedule 7 or Schedule 9 Paragraph 4
    Scenario5,
    /// Allowed, 15 points or more, Schedule 7 activities selected
    Scenario6,
    /// Allowed under Schedule 8 Paragraph 4, no Schedule 7 or Schedule 9 Paragraph 4
    Scenario7,
    /// Allowed under Schedule 8 Paragraph 4 and Schedule 9 Paragraph 4
    Scenario8,
    /// Allowed under Schedule 8 Paragraph 4, Schedule 7 activities selected
    Scenario9,
    /// Not a WCA appeal
    Scenario10,
    /// Allowed, 15 points or more, Schedule 9 Paragraph 4 applies
    Scenario12,
}

impl Scenario {
    pub const ALL: [Scenario; 11] = [
        Scenario::Scenario1,
        Scenario::Scenario2,
        Scenario::Scenario3,
        Scenario::Scenario4,
        Scenario::Scenario5,
        Scenario::Scenario6,
        Scenario::Scenario7,
        Scenario::Scenario8,
        Scenario::Scenario9,
        Scenario::Scenario10,
        Scenario::Scenario12,
    ];

    /// The scenario's number in the notice set
    pub fn number(self) -> u8 {
        match self {
            Scenario::Scenario1 => 1,
            Scenario::Scenario2 => 2,
            Scenario::Scenario3 => 3,
            Scenario::Scenario4 => 4,
            Scenario::Scenario5 => 5,
            Scenario::Scenario6 => 6,
            Scenario::Scenario7 => 7,
            Scenario::Scenario8 => 8,
            Scenario::Scenario9 => 9,
            Scenario::Scenario10 => 10,
            Scenario::Scenario12 => 12,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|scenario| scenario.number() == number)
    }

    /// Returns true if the appeal was refused in this scenario
    ///
    /// Scenario 10 covers non-WCA appeals, which may go either way.
    pub fn is_refused(self) -> bool {
        matches!(self, Scenario::Scenario1 | Scenario::Scenario2)
    }

    /// The components bound to this scenario, with their inclusion rules
    pub fn content_table(self) -> &'static [(ContentComponent, Inclusion)] {
        content::table(self)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scenario {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_there_is_no_scenario_eleven() {
        assert_eq!(Scenario::from_number(11), None);
        assert_eq!(Scenario::from_number(12), Some(Scenario::Scenario12));
        assert_eq!(Scenario::from_number(0), None);
    }

    #[test]
    fn test_numbers_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_number(scenario.number()), Some(scenario));
        }
    }

    #[test]
    fn test_display_and_serialization() {
        assert_eq!(Scenario::Scenario9.to_string(), "Scenario 9");
        assert_eq!(serde_json::to_string(&Scenario::Scenario12).unwrap(), "\"scenario12\"");
    }

    #[test]
    fn test_refused_scenarios() {
        let refused: Vec<u8> = Scenario::ALL
            .into_iter()
            .filter(|scenario| scenario.is_refused())
            .map(Scenario::number)
            .collect();
        assert_eq!(refused, vec![1, 2]);
    }
}
