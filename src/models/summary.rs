//! Derived summaries: standings table rows and player performance lines.
//! Recomputed on demand from the current match/player snapshot; never
//! persisted by the engine.

use crate::models::record::PlayerId;
use serde::{Deserialize, Serialize};

/// One standings table row for a team.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStandingsSummary {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: i32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub clean_sheets: u32,
    pub goals_per_match: f64,
    pub goals_against_per_match: f64,
}

impl TeamStandingsSummary {
    /// Recompute the derived fields (goal difference and per-match rates)
    /// from the counters. Rates are 0 when no matches have been played.
    pub fn refresh_derived(mut self) -> Self {
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
        if self.played == 0 {
            self.goals_per_match = 0.0;
            self.goals_against_per_match = 0.0;
        } else {
            self.goals_per_match = f64::from(self.goals_for) / f64::from(self.played);
            self.goals_against_per_match = f64::from(self.goals_against) / f64::from(self.played);
        }
        self
    }
}

/// One performance line for a player with at least one appearance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerPerformanceSummary {
    pub player_id: PlayerId,
    pub name: String,
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub goals_per_match: f64,
    pub assists_per_match: f64,
    /// Goals plus assists per appearance; the primary ranking key.
    pub goal_contributions_per_game: f64,
    pub minutes_played: u32,
    pub goals_per_40_min: f64,
    pub assists_per_40_min: f64,
    pub contributions_per_40_min: f64,
    /// Share of appearances with a clean sheet, as a percentage.
    pub clean_sheet_rate: f64,
}
