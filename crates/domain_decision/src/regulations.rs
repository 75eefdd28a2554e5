//! Points, regulations and Schedule 7 activities classification
//!
//! The first classifier stage. It checks that the points total, the Support
//! Group Only flag, Schedule 8 Paragraph 4, Schedule 9 Paragraph 4 and the
//! Schedule 7 Activities selection are consistent with one another, and hands
//! the outcome stage a [`ValidatedFacts`] when they are.
//!
//! ```text
//! wca_appeal = no                      -> NonWcaAppeal
//! Low  / S8 unanswered / SGO != yes    -> LowPointsSchedule8Paragraph4Unspecified
//! Low  / S8 unanswered / SGO = yes     -> LowPointsSupportGroupOnly(S7)
//! Low  / S8 no                         -> LowPointsSchedule8Paragraph4DoesNotApply
//! Low  / S8 yes                        -> LowPointsSchedule8Paragraph4Applies(S7)
//! High                                 -> HighPoints(S7)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Answer;

use crate::condition::{
    evaluate, AnswerPredicate as A, DecisionCondition, Expectation, FactPattern, Field,
    SelectionPredicate as S,
};
use crate::error::ValidationError;
use crate::facts::{CaseFacts, Schedule7Selection};
use crate::points::PointsBand;

/// Which way the Schedule 7 Activities question was answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Schedule7Check {
    /// Not answered
    Unspecified,
    /// At least one activity selected
    Selected,
    /// Answered with no activities selected
    NotSelected,
}

impl Schedule7Check {
    pub const ALL: [Schedule7Check; 3] = [
        Schedule7Check::Unspecified,
        Schedule7Check::Selected,
        Schedule7Check::NotSelected,
    ];

    pub fn of(selection: &Schedule7Selection) -> Self {
        if !selection.is_answered() {
            Schedule7Check::Unspecified
        } else if selection.has_selections() {
            Schedule7Check::Selected
        } else {
            Schedule7Check::NotSelected
        }
    }

    fn predicate(self) -> S {
        match self {
            Schedule7Check::Unspecified => S::Unanswered,
            Schedule7Check::Selected => S::Selected,
            Schedule7Check::NotSelected => S::NoneSelected,
        }
    }
}

/// Stage-one conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegulationsCondition {
    NonWcaAppeal,
    LowPointsSchedule8Paragraph4Unspecified,
    LowPointsSchedule8Paragraph4DoesNotApply,
    LowPointsSchedule8Paragraph4Applies(Schedule7Check),
    LowPointsSupportGroupOnly(Schedule7Check),
    HighPoints(Schedule7Check),
}

impl RegulationsCondition {
    /// The Schedule 7 branch this condition sits on, if any
    pub fn schedule_7_check(self) -> Option<Schedule7Check> {
        match self {
            RegulationsCondition::LowPointsSchedule8Paragraph4Applies(check)
            | RegulationsCondition::LowPointsSupportGroupOnly(check)
            | RegulationsCondition::HighPoints(check) => Some(check),
            RegulationsCondition::NonWcaAppeal
            | RegulationsCondition::LowPointsSchedule8Paragraph4Unspecified
            | RegulationsCondition::LowPointsSchedule8Paragraph4DoesNotApply => None,
        }
    }
}

impl fmt::Display for RegulationsCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (base, check) = match self {
            RegulationsCondition::LowPointsSchedule8Paragraph4Applies(check) => {
                ("LowPointsSchedule8Paragraph4Applies", check)
            }
            RegulationsCondition::LowPointsSupportGroupOnly(check) => ("LowPointsSupportGroupOnly", check),
            RegulationsCondition::HighPoints(check) => ("HighPoints", check),
            other => return write!(f, "{:?}", other),
        };
        write!(f, "{}Schedule7{:?}", base, check)
    }
}

impl DecisionCondition for RegulationsCondition {
    const STAGE: &'static str = "regulations";

    const ALL: &'static [Self] = &[
        RegulationsCondition::NonWcaAppeal,
        RegulationsCondition::LowPointsSchedule8Paragraph4Unspecified,
        RegulationsCondition::LowPointsSchedule8Paragraph4DoesNotApply,
        RegulationsCondition::LowPointsSchedule8Paragraph4Applies(Schedule7Check::Unspecified),
        RegulationsCondition::LowPointsSchedule8Paragraph4Applies(Schedule7Check::Selected),
        RegulationsCondition::LowPointsSchedule8Paragraph4Applies(Schedule7Check::NotSelected),
        RegulationsCondition::LowPointsSupportGroupOnly(Schedule7Check::Unspecified),
        RegulationsCondition::LowPointsSupportGroupOnly(Schedule7Check::Selected),
        RegulationsCondition::LowPointsSupportGroupOnly(Schedule7Check::NotSelected),
        RegulationsCondition::HighPoints(Schedule7Check::Unspecified),
        RegulationsCondition::HighPoints(Schedule7Check::Selected),
        RegulationsCondition::HighPoints(Schedule7Check::NotSelected),
    ];

    fn select(facts: &CaseFacts) -> Self {
        if !facts.is_wca_appeal() {
            return RegulationsCondition::NonWcaAppeal;
        }

        let check = Schedule7Check::of(facts.schedule_7_activities());
        match PointsBand::classify(facts.points_total()) {
            PointsBand::High => RegulationsCondition::HighPoints(check),
            PointsBand::Low => match (facts.schedule_8_paragraph_4(), facts.support_group_only()) {
                (Answer::Unanswered, Answer::Yes) => RegulationsCondition::LowPointsSupportGroupOnly(check),
                (Answer::Unanswered, _) => RegulationsCondition::LowPointsSchedule8Paragraph4Unspecified,
                (Answer::No, _) => RegulationsCondition::LowPointsSchedule8Paragraph4DoesNotApply,
                (Answer::Yes, _) => RegulationsCondition::LowPointsSchedule8Paragraph4Applies(check),
            },
        }
    }

    fn pattern(&self) -> FactPattern {
        let low = FactPattern::WCA.points_band(PointsBand::Low);
        match *self {
            RegulationsCondition::NonWcaAppeal => FactPattern::ANY.wca_appeal(A::No),
            RegulationsCondition::LowPointsSchedule8Paragraph4Unspecified => low
                .schedule_8_paragraph_4(A::Unanswered)
                .support_group_only(A::NotYes),
            RegulationsCondition::LowPointsSchedule8Paragraph4DoesNotApply => {
                low.schedule_8_paragraph_4(A::No)
            }
            RegulationsCondition::LowPointsSchedule8Paragraph4Applies(check) => low
                .schedule_8_paragraph_4(A::Yes)
                .schedule_7_activities(check.predicate()),
            RegulationsCondition::LowPointsSupportGroupOnly(check) => low
                .schedule_8_paragraph_4(A::Unanswered)
                .support_group_only(A::Yes)
                .schedule_7_activities(check.predicate()),
            RegulationsCondition::HighPoints(check) => FactPattern::WCA
                .points_band(PointsBand::High)
                .schedule_7_activities(check.predicate()),
        }
    }

    fn announced(&self) -> &'static [Field] {
        use Schedule7Check::*;
        match *self {
            RegulationsCondition::NonWcaAppeal => &[],
            RegulationsCondition::LowPointsSchedule8Paragraph4Unspecified => {
                &[Field::PointsBand, Field::SupportGroupOnly]
            }
            RegulationsCondition::LowPointsSchedule8Paragraph4DoesNotApply => {
                &[Field::PointsBand, Field::Schedule8Paragraph4]
            }
            RegulationsCondition::LowPointsSchedule8Paragraph4Applies(Unspecified) => {
                &[Field::PointsBand, Field::Schedule8Paragraph4]
            }
            RegulationsCondition::LowPointsSchedule8Paragraph4Applies(_) => {
                &[Field::PointsBand, Field::Schedule8Paragraph4, Field::Schedule7Activities]
            }
            RegulationsCondition::LowPointsSupportGroupOnly(Unspecified) => {
                &[Field::PointsBand, Field::SupportGroupOnly]
            }
            RegulationsCondition::LowPointsSupportGroupOnly(_) => {
                &[Field::PointsBand, Field::SupportGroupOnly, Field::Schedule7Activities]
            }
            RegulationsCondition::HighPoints(Unspecified) => &[Field::PointsBand],
            RegulationsCondition::HighPoints(_) => &[Field::PointsBand, Field::Schedule7Activities],
        }
    }

    fn expectations(&self) -> &'static [Expectation] {
        use Expectation as E;
        use Schedule7Check::*;
        match *self {
            RegulationsCondition::NonWcaAppeal => &[],
            RegulationsCondition::LowPointsSchedule8Paragraph4Unspecified => {
                &[E::Schedule8Paragraph4(A::Answered)]
            }
            RegulationsCondition::LowPointsSchedule8Paragraph4DoesNotApply => &[
                E::SupportGroupOnly(A::No),
                E::Schedule9Paragraph4(A::Unanswered),
                E::Schedule7Activities(S::Unanswered),
            ],
            RegulationsCondition::LowPointsSchedule8Paragraph4Applies(check)
            | RegulationsCondition::LowPointsSupportGroupOnly(check) => match check {
                Unspecified => &[E::Schedule7Activities(S::Answered)],
                Selected => &[E::Schedule9Paragraph4(A::Unanswered)],
                NotSelected => &[E::Schedule9Paragraph4(A::Answered)],
            },
            RegulationsCondition::HighPoints(check) => match check {
                Unspecified => &[
                    E::SupportGroupOnly(A::No),
                    E::Schedule8Paragraph4(A::Unanswered),
                    E::Schedule7Activities(S::Answered),
                ],
                Selected => &[
                    E::SupportGroupOnly(A::No),
                    E::Schedule8Paragraph4(A::Unanswered),
                    E::Schedule9Paragraph4(A::Unanswered),
                ],
                NotSelected => &[
                    E::SupportGroupOnly(A::No),
                    E::Schedule8Paragraph4(A::Unanswered),
                    E::Schedule9Paragraph4(A::Answered),
                ],
            },
        }
    }
}

/// Award implied by a validated regulations condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardRate {
    NoAward,
    LowerRate,
    HigherRate,
}

impl AwardRate {
    pub fn label(self) -> &'static str {
        match self {
            AwardRate::NoAward => "no award",
            AwardRate::LowerRate => "lower rate",
            AwardRate::HigherRate => "higher rate",
        }
    }

    pub fn is_entitled(self) -> bool {
        !matches!(self, AwardRate::NoAward)
    }
}

impl fmt::Display for AwardRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Schedule answers carried by a validated WCA appeal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleAnswers<'a> {
    pub points_band: PointsBand,
    pub support_group_only: Answer,
    pub schedule_8_paragraph_4: Answer,
    pub schedule_9_paragraph_4: Answer,
    pub schedule_7_activities: &'a Schedule7Selection,
}

/// Facts that passed the regulations stage
///
/// Only [`classify`] can produce one, so holding a `ValidatedFacts` proves the
/// schedule answers are mutually consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedFacts<'a> {
    facts: &'a CaseFacts,
    condition: RegulationsCondition,
    points_band: PointsBand,
}

impl<'a> ValidatedFacts<'a> {
    pub fn facts(&self) -> &'a CaseFacts {
        self.facts
    }

    pub fn condition(&self) -> RegulationsCondition {
        self.condition
    }

    pub fn points_band(&self) -> PointsBand {
        self.points_band
    }

    pub fn is_wca_appeal(&self) -> bool {
        self.condition != RegulationsCondition::NonWcaAppeal
    }

    /// The schedule answers the outcome stage must honour, `None` for a non-WCA appeal
    pub fn schedule_answers(&self) -> Option<ScheduleAnswers<'a>> {
        if !self.is_wca_appeal() {
            return None;
        }
        Some(ScheduleAnswers {
            points_band: self.points_band,
            support_group_only: self.facts.support_group_only(),
            schedule_8_paragraph_4: self.facts.schedule_8_paragraph_4(),
            schedule_9_paragraph_4: self.facts.schedule_9_paragraph_4(),
            schedule_7_activities: self.facts.schedule_7_activities(),
        })
    }

    /// The award implied by the matched condition, `None` for a non-WCA appeal
    pub fn award_rate(&self) -> Option<AwardRate> {
        let schedule_9_applies = self.facts.schedule_9_paragraph_4().is_yes();
        match self.condition {
            RegulationsCondition::NonWcaAppeal => None,
            RegulationsCondition::LowPointsSchedule8Paragraph4DoesNotApply => Some(AwardRate::NoAward),
            condition => match condition.schedule_7_check()? {
                Schedule7Check::Selected => Some(AwardRate::HigherRate),
                Schedule7Check::NotSelected if schedule_9_applies => Some(AwardRate::HigherRate),
                Schedule7Check::NotSelected => Some(AwardRate::LowerRate),
                Schedule7Check::Unspecified => None,
            },
        }
    }

    pub fn is_entitled(&self) -> bool {
        self.award_rate().is_some_and(AwardRate::is_entitled)
    }
}

/// Runs the regulations stage
///
/// # Errors
///
/// Returns a [`ValidationError`] naming every expectation the facts miss for
/// the condition that applies to them.
pub fn classify(facts: &CaseFacts) -> Result<ValidatedFacts<'_>, ValidationError> {
    let (condition, error) = evaluate::<RegulationsCondition>(facts);
    match error {
        Some(error) => Err(error),
        None => Ok(ValidatedFacts {
            facts,
            condition,
            points_band: PointsBand::classify(facts.points_total()),
        }),
    }
}
