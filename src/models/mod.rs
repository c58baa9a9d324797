//! Data structures for the engine: configuration, records, groups, summaries,
//! and the wizard draft.

mod config;
mod draft;
mod group;
mod record;
mod summary;

pub use config::{
    CombinationSubtype, FormatChoice, GroupStageConfig, KnockoutConfig, PointsRule, Seeding,
    StructureConfig, VALID_BRACKET_SIZES,
};
pub use draft::{WizardDraft, WizardError, WizardStep, MIN_TEAM_CAPACITY};
pub use group::Group;
pub use record::{MatchId, MatchRecord, MatchStatus, PlayerId, PlayerRecord, TeamId, TournamentId};
pub use summary::{PlayerPerformanceSummary, TeamStandingsSummary};
