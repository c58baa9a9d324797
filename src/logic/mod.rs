//! Engine logic: structure derivation, group partitioning, standings
//! aggregation, performance ranking, and the wizard step gate.

mod partition;
mod performance;
mod standings;
mod structure;
mod wizard;

pub use partition::{group_count, partition_teams};
pub use performance::{rank_performers, MATCH_MINUTES};
pub use standings::{aggregate_standings, group_qualifiers, league_table};
pub use structure::{bracket_for_qualifier_count, derive_structure, nearest_power_of_two};
pub use wizard::{
    advance, back, group_preview, publish, set_format, set_team_capacity, step_complete,
    structure_complete,
};
