//! Format choices and structure parameters: the shape of a competition.

use serde::{Deserialize, Serialize};

/// Top-level competition shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatChoice {
    /// Round-robin: everyone plays everyone.
    League,
    /// Single-elimination bracket.
    Knockout,
    /// A league or group stage feeding a knockout.
    Combination,
}

/// How a combination tournament feeds its knockout stage.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationSubtype {
    /// One league table; the top of the table qualifies.
    #[default]
    LeagueThenKnockout,
    /// Mini round-robin groups; the top of each group qualifies.
    GroupsThenKnockout,
}

/// How teams are drawn into groups.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seeding {
    #[default]
    Random,
    Pots,
}

/// Bracket sizes a knockout stage accepts, ascending.
pub const VALID_BRACKET_SIZES: [u32; 5] = [4, 8, 16, 32, 64];

/// Group stage parameters for a combination tournament.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStageConfig {
    /// 4, 5, or 6.
    pub teams_per_group: u8,
    /// 1 or 2.
    pub rounds_per_group: u8,
    /// 1 or 2.
    pub advance_per_group: u8,
    pub seeding: Seeding,
}

impl Default for GroupStageConfig {
    fn default() -> Self {
        Self {
            teams_per_group: 4,
            rounds_per_group: 1,
            advance_per_group: 2,
            seeding: Seeding::Random,
        }
    }
}

impl GroupStageConfig {
    /// All fields within their allowed ranges.
    pub fn in_range(&self) -> bool {
        matches!(self.teams_per_group, 4..=6)
            && matches!(self.rounds_per_group, 1 | 2)
            && matches!(self.advance_per_group, 1 | 2)
    }
}

/// Knockout stage parameters.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutConfig {
    pub bracket_size: u32,
    /// Single match per tie instead of home-and-away legs.
    pub single_leg: bool,
    pub third_place_match: bool,
}

impl KnockoutConfig {
    /// Default leg/third-place flags around a given bracket size.
    pub fn with_bracket(bracket_size: u32) -> Self {
        Self {
            bracket_size,
            single_leg: true,
            third_place_match: false,
        }
    }
}

/// Structural parameters, keyed by format. The caller persists this as an
/// opaque JSON value and feeds it back on the next derivation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum StructureConfig {
    League {
        /// 1 or 2 round-robin rounds.
        rounds: u8,
    },
    Knockout {
        bracket_size: u32,
        single_leg: bool,
        third_place_match: bool,
    },
    Combination {
        subtype: CombinationSubtype,
        groups: GroupStageConfig,
        knockout: KnockoutConfig,
    },
}

impl StructureConfig {
    /// Which format this structure belongs to.
    pub fn format(&self) -> FormatChoice {
        match self {
            StructureConfig::League { .. } => FormatChoice::League,
            StructureConfig::Knockout { .. } => FormatChoice::Knockout,
            StructureConfig::Combination { .. } => FormatChoice::Combination,
        }
    }

    /// Serialize for the opaque structure column.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a previously persisted structure value.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Caller-supplied points per result. Never hard-coded in the aggregator.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointsRule {
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
}

impl Default for PointsRule {
    /// The common 3/1/0 rule.
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}
