//! WizardDraft: the configuration session, its steps, and its error type.

use crate::models::config::{CombinationSubtype, FormatChoice, PointsRule, StructureConfig};
use crate::models::record::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum team capacity the wizard accepts. Structural derivation itself
/// tolerates smaller values; this rule is enforced only at the Basics gate.
pub const MIN_TEAM_CAPACITY: u32 = 4;

/// Errors that can occur while moving a draft through the wizard.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WizardError {
    /// The current step's completion predicate is not satisfied.
    StepIncomplete(WizardStep),
    /// The draft is published; its configuration is read-only history.
    AlreadyPublished,
    /// Publish requested before reaching the review step.
    NotAtReview,
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardError::StepIncomplete(step) => {
                write!(f, "step {step:?} is not complete")
            }
            WizardError::AlreadyPublished => write!(f, "draft is already published"),
            WizardError::NotAtReview => write!(f, "publish is only available from the review step"),
        }
    }
}

impl std::error::Error for WizardError {}

/// The six configuration steps, in order. None is skippable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Format,
    Basics,
    Rules,
    Structure,
    Prizes,
    Review,
}

impl WizardStep {
    /// The step after this one; None at Review.
    pub fn next(self) -> Option<Self> {
        use WizardStep::*;
        match self {
            Format => Some(Basics),
            Basics => Some(Rules),
            Rules => Some(Structure),
            Structure => Some(Prizes),
            Prizes => Some(Review),
            Review => None,
        }
    }

    /// The step before this one; None at Format.
    pub fn prev(self) -> Option<Self> {
        use WizardStep::*;
        match self {
            Format => None,
            Basics => Some(Format),
            Rules => Some(Basics),
            Structure => Some(Rules),
            Prizes => Some(Structure),
            Review => Some(Prizes),
        }
    }
}

/// One tournament configuration session. The draft is an explicit value:
/// every setter and transition consumes it and returns a new draft, so going
/// back through the wizard never loses entered data. After `publish` the
/// configuration is a read-only historical record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WizardDraft {
    pub id: TournamentId,
    pub step: WizardStep,
    pub name: String,
    pub team_capacity: u32,
    pub format: Option<FormatChoice>,
    pub combination_subtype: Option<CombinationSubtype>,
    pub structure: Option<StructureConfig>,
    pub points: Option<PointsRule>,
    pub prize_notes: Option<String>,
    pub published: bool,
}

impl WizardDraft {
    /// Fresh draft at the Format step. Capacity starts at the product default
    /// of 8 teams.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            step: WizardStep::Format,
            name: String::new(),
            team_capacity: 8,
            format: None,
            combination_subtype: None,
            structure: None,
            points: None,
            prize_notes: None,
            published: false,
        }
    }

    fn guard_unpublished(&self) -> Result<(), WizardError> {
        if self.published {
            Err(WizardError::AlreadyPublished)
        } else {
            Ok(())
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self, WizardError> {
        self.guard_unpublished()?;
        self.name = name.into();
        Ok(self)
    }

    /// Set the points rule (Rules step).
    pub fn with_points(mut self, points: PointsRule) -> Result<Self, WizardError> {
        self.guard_unpublished()?;
        self.points = Some(points);
        Ok(self)
    }

    /// Set the prize notes (Prizes step). Blank text counts as set.
    pub fn with_prize_notes(mut self, notes: impl Into<String>) -> Result<Self, WizardError> {
        self.guard_unpublished()?;
        self.prize_notes = Some(notes.into());
        Ok(self)
    }
}

impl Default for WizardDraft {
    fn default() -> Self {
        Self::new()
    }
}
