//! Tournament structure and standings engine: derives a competition's shape
//! (rounds, bracket size, group layout) from configuration choices, and
//! summarizes finished matches into standings and performance rankings.

pub mod logic;
pub mod models;

pub use logic::{
    advance, aggregate_standings, back, bracket_for_qualifier_count, derive_structure,
    group_count, group_preview, group_qualifiers, league_table, nearest_power_of_two,
    partition_teams, publish, rank_performers, set_format, set_team_capacity, step_complete,
    structure_complete, MATCH_MINUTES,
};
pub use models::{
    CombinationSubtype, FormatChoice, Group, GroupStageConfig, KnockoutConfig, MatchId,
    MatchRecord, MatchStatus, PlayerId, PlayerPerformanceSummary, PlayerRecord, PointsRule,
    Seeding, StructureConfig, TeamId, TeamStandingsSummary, TournamentId, WizardDraft,
    WizardError, WizardStep, MIN_TEAM_CAPACITY, VALID_BRACKET_SIZES,
};
