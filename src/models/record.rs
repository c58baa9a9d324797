//! Read-only inputs: match records and raw player counters from the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// Unique identifier for a player.
pub type PlayerId = Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Lifecycle of a fixture. Only finished matches feed standings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Finished,
}

/// One fixture as fetched from the persistence layer. Scores stay absent
/// until a result is recorded; the kickoff time is scheduling metadata the
/// engine reads through untouched.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub kickoff_at: DateTime<Utc>,
    pub status: MatchStatus,
}

impl MatchRecord {
    /// A finished match with both scores recorded.
    pub fn finished(
        home_team_id: TeamId,
        away_team_id: TeamId,
        home_score: u32,
        away_score: u32,
        kickoff_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team_id,
            away_team_id,
            home_score: Some(home_score),
            away_score: Some(away_score),
            kickoff_at,
            status: MatchStatus::Finished,
        }
    }

    /// A fixture that has not been played yet.
    pub fn scheduled(home_team_id: TeamId, away_team_id: TeamId, kickoff_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team_id,
            away_team_id,
            home_score: None,
            away_score: None,
            kickoff_at,
            status: MatchStatus::Scheduled,
        }
    }

    /// Home and away scores when this record can feed standings: finished,
    /// with both scores present. Malformed records read as None.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        if self.status != MatchStatus::Finished {
            return None;
        }
        Some((self.home_score?, self.away_score?))
    }
}

/// Raw per-player counters from the roster layer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub name: String,
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
}

impl PlayerRecord {
    /// Create a record with a fresh id and the given counters.
    pub fn new(
        name: impl Into<String>,
        appearances: u32,
        goals: u32,
        assists: u32,
        clean_sheets: u32,
    ) -> Self {
        Self {
            player_id: Uuid::new_v4(),
            name: name.into(),
            appearances,
            goals,
            assists,
            clean_sheets,
        }
    }
}
