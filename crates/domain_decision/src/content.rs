//! Scenario content assembly
//!
//! Each scenario is bound to a static, ordered table of notice components.
//! Some components are only included when the facts give them something to
//! say, e.g. the Schedule 6 descriptor table needs at least one scored
//! activity. The templating collaborator renders the resulting list as is.

use serde::{Deserialize, Serialize};

use crate::facts::CaseFacts;
use crate::regulations::ValidatedFacts;
use crate::scenario::Scenario;

use ContentComponent as C;
use Inclusion as I;

/// A section of the decision notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentComponent {
    /// The appeal is allowed or refused
    AllowedOrRefusedParagraph,
    /// The decision under appeal is confirmed or set aside
    ConfirmedOrSetAsideParagraph,
    /// Whether the appellant has limited capability for work
    LimitedCapabilityForWorkParagraph,
    /// Limited capability for work was accepted and is not in dispute
    LimitedCapabilityForWorkAcceptedParagraph,
    /// Whether the appellant has limited capability for work-related activity
    LimitedCapabilityForWorkRelatedActivityParagraph,
    /// Points awarded under Schedule 6
    Schedule6PointsParagraph,
    /// Scored Schedule 6 descriptors
    Schedule6DescriptorTable,
    /// Schedule 8 Paragraph 4 finding, including the points total it applies to
    Schedule8Paragraph4Paragraph,
    /// Schedule 7 activities finding
    Schedule7Paragraph,
    /// Selected Schedule 7 descriptors
    Schedule7DescriptorTable,
    /// Schedule 9 Paragraph 4 finding
    Schedule9Paragraph4Paragraph,
    /// Entitlement wording for an appeal that is not about a WCA
    NonWcaAppealParagraph,
    /// The tribunal's recommendation on when the award is reassessed
    DwpReassessTheAwardParagraph,
    /// The judge's reasons
    ReasonsForDecision,
    /// Anything else the judge wants on the notice
    AnythingElseParagraph,
    /// How the appeal was heard
    HearingTypeParagraph,
}

/// When a component is included in the notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Inclusion {
    Always,
    WhenScoredActivities,
    WhenSchedule7Selections,
    WhenReasonsGiven,
    WhenAnythingElseGiven,
}

impl Inclusion {
    pub fn applies(self, facts: &CaseFacts) -> bool {
        match self {
            Inclusion::Always => true,
            Inclusion::WhenScoredActivities => !facts.scored_activities().is_empty(),
            Inclusion::WhenSchedule7Selections => facts.schedule_7_activities().has_selections(),
            Inclusion::WhenReasonsGiven => !facts.reasons_for_decision().is_empty(),
            Inclusion::WhenAnythingElseGiven => facts.anything_else().is_some(),
        }
    }
}

const ALLOWED_OR_REFUSED: (C, I) = (C::AllowedOrRefusedParagraph, I::Always);
const CONFIRMED_OR_SET_ASIDE: (C, I) = (C::ConfirmedOrSetAsideParagraph, I::Always);
const LCW: (C, I) = (C::LimitedCapabilityForWorkParagraph, I::Always);
const LCW_ACCEPTED: (C, I) = (C::LimitedCapabilityForWorkAcceptedParagraph, I::Always);
const LCWRA: (C, I) = (C::LimitedCapabilityForWorkRelatedActivityParagraph, I::Always);
const SCHEDULE_6_POINTS: (C, I) = (C::Schedule6PointsParagraph, I::Always);
const SCHEDULE_6_TABLE: (C, I) = (C::Schedule6DescriptorTable, I::WhenScoredActivities);
const SCHEDULE_8_PARAGRAPH_4: (C, I) = (C::Schedule8Paragraph4Paragraph, I::Always);
const SCHEDULE_7: (C, I) = (C::Schedule7Paragraph, I::Always);
const SCHEDULE_7_TABLE: (C, I) = (C::Schedule7DescriptorTable, I::WhenSchedule7Selections);
const SCHEDULE_9_PARAGRAPH_4: (C, I) = (C::Schedule9Paragraph4Paragraph, I::Always);
const NON_WCA: (C, I) = (C::NonWcaAppealParagraph, I::Always);
const DWP_REASSESS_THE_AWARD: (C, I) = (C::DwpReassessTheAwardParagraph, I::Always);
const REASONS: (C, I) = (C::ReasonsForDecision, I::WhenReasonsGiven);
const ANYTHING_ELSE: (C, I) = (C::AnythingElseParagraph, I::WhenAnythingElseGiven);
const HEARING_TYPE: (C, I) = (C::HearingTypeParagraph, I::Always);

// Tables carrying the Schedule 8 Paragraph 4 finding state the points total
// there, so they have no separate points paragraph.

// Refused, no Schedule 8 Paragraph 4
const REFUSED_NON_SUPPORT_GROUP: &[(C, I)] = &[
    ALLOWED_OR_REFUSED,
    CONFIRMED_OR_SET_ASIDE,
    LCW,
    SCHEDULE_6_TABLE,
    SCHEDULE_8_PARAGRAPH_4,
    REASONS,
    ANYTHING_ELSE,
    HEARING_TYPE,
];

// Refused, LCW accepted without LCWRA
const REFUSED_SUPPORT_GROUP: &[(C, I)] = &[
    ALLOWED_OR_REFUSED,
    CONFIRMED_OR_SET_ASIDE,
    LCW_ACCEPTED,
    LCWRA,
    REASONS,
    ANYTHING_ELSE,
    HEARING_TYPE,
];

// Schedule 7 answered with nothing selected, so the Schedule 9 paragraph carries the finding
const SUPPORT_GROUP_SCHEDULE_9: &[(C, I)] = &[
    ALLOWED_OR_REFUSED,
    CONFIRMED_OR_SET_ASIDE,
    LCW_ACCEPTED,
    LCWRA,
    SCHEDULE_9_PARAGRAPH_4,
    REASONS,
    ANYTHING_ELSE,
    HEARING_TYPE,
];

const SUPPORT_GROUP_SCHEDULE_7: &[(C, I)] = &[
    ALLOWED_OR_REFUSED,
    CONFIRMED_OR_SET_ASIDE,
    LCW_ACCEPTED,
    LCWRA,
    SCHEDULE_7,
    SCHEDULE_7_TABLE,
    REASONS,
    ANYTHING_ELSE,
    HEARING_TYPE,
];

const HIGH_POINTS_SCHEDULE_9: &[(C, I)] = &[
    ALLOWED_OR_REFUSED,
    CONFIRMED_OR_SET_ASIDE,
    LCW,
    SCHEDULE_6_POINTS,
    SCHEDULE_6_TABLE,
    LCWRA,
    SCHEDULE_7,
    SCHEDULE_9_PARAGRAPH_4,
    REASONS,
    ANYTHING_ELSE,
    HEARING_TYPE,
];

const HIGH_POINTS_SCHEDULE_7: &[(C, I)] = &[
    ALLOWED_OR_REFUSED,
    CONFIRMED_OR_SET_ASIDE,
    LCW,
    SCHEDULE_6_POINTS,
    SCHEDULE_6_TABLE,
    LCWRA,
    SCHEDULE_7,
    SCHEDULE_7_TABLE,
    REASONS,
    ANYTHING_ELSE,
    HEARING_TYPE,
];

const SCHEDULE_8_SCHEDULE_9: &[(C, I)] = &[
    ALLOWED_OR_REFUSED,
    CONFIRMED_OR_SET_ASIDE,
    LCW,
    SCHEDULE_6_TABLE,
    SCHEDULE_8_PARAGRAPH_4,
    LCWRA,
    SCHEDULE_7,
    SCHEDULE_9_PARAGRAPH_4,
    REASONS,
    ANYTHING_ELSE,
    HEARING_TYPE,
];

const SCHEDULE_8_SCHEDULE_7: &[(C, I)] = &[
    ALLOWED_OR_REFUSED,
    CONFIRMED_OR_SET_ASIDE,
    LCW,
    SCHEDULE_6_TABLE,
    SCHEDULE_8_PARAGRAPH_4,
    LCWRA,
    SCHEDULE_7,
    SCHEDULE_7_TABLE,
    REASONS,
    ANYTHING_ELSE,
    HEARING_TYPE,
];

const NON_WCA_APPEAL: &[(C, I)] = &[
    ALLOWED_OR_REFUSED,
    CONFIRMED_OR_SET_ASIDE,
    NON_WCA,
    DWP_REASSESS_THE_AWARD,
    REASONS,
    ANYTHING_ELSE,
    HEARING_TYPE,
];

/// The content table bound to a scenario
pub fn table(scenario: Scenario) -> &'static [(ContentComponent, Inclusion)] {
    match scenario {
        Scenario::Scenario1 => REFUSED_NON_SUPPORT_GROUP,
        Scenario::Scenario2 => REFUSED_SUPPORT_GROUP,
        Scenario::Scenario3 => SUPPORT_GROUP_SCHEDULE_9,
        Scenario::Scenario4 => SUPPORT_GROUP_SCHEDULE_7,
        Scenario::Scenario5 | Scenario::Scenario12 => HIGH_POINTS_SCHEDULE_9,
        Scenario::Scenario6 => HIGH_POINTS_SCHEDULE_7,
        Scenario::Scenario7 | Scenario::Scenario8 => SCHEDULE_8_SCHEDULE_9,
        Scenario::Scenario9 => SCHEDULE_8_SCHEDULE_7,
        Scenario::Scenario10 => NON_WCA_APPEAL,
    }
}

/// Lists the components of the notice for a resolved scenario
///
/// # Example
///
/// ```
/// use core_kernel::Answer;
/// use domain_decision::{content, regulations, CaseFacts, ContentComponent, Scenario};
///
/// let facts = CaseFacts::builder()
///     .wca_appeal(Answer::No)
///     .add_reason("The decision maker applied the wrong test")
///     .build();
/// let validated = regulations::classify(&facts)?;
/// let components = content::assemble(Scenario::Scenario10, &validated);
///
/// assert_eq!(components.len(), 6);
/// assert!(components.contains(&ContentComponent::DwpReassessTheAwardParagraph));
/// assert!(!components.contains(&ContentComponent::AnythingElseParagraph));
/// # Ok::<(), domain_decision::ValidationError>(())
/// ```
pub fn assemble(scenario: Scenario, validated: &ValidatedFacts<'_>) -> Vec<ContentComponent> {
    let facts = validated.facts();
    scenario
        .content_table()
        .iter()
        .filter(|(_, inclusion)| inclusion.applies(facts))
        .map(|(component, _)| *component)
        .collect()
}
