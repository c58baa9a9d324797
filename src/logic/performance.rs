//! Performance ranking: normalize raw player counters into rates and order
//! the top performers.

use crate::models::{PlayerPerformanceSummary, PlayerRecord};
use log::debug;

/// Match length used for time-normalized rates. The product's short format
/// plays 40-minute matches.
pub const MATCH_MINUTES: u32 = 40;

/// Zero-safe rate: 0 when the denominator is 0, never NaN.
fn per(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}

/// Performance lines for every player with at least one appearance, ordered
/// by goal contributions per game, then total goals, descending. Players yet
/// to appear are omitted entirely; exact ties keep their input order.
pub fn rank_performers(players: &[PlayerRecord]) -> Vec<PlayerPerformanceSummary> {
    let mut ranked: Vec<PlayerPerformanceSummary> = players
        .iter()
        .filter(|p| p.appearances > 0)
        .map(summarize)
        .collect();
    ranked.sort_by(|a, b| {
        b.goal_contributions_per_game
            .total_cmp(&a.goal_contributions_per_game)
            .then(b.goals.cmp(&a.goals))
    });
    debug!("ranked {} of {} players", ranked.len(), players.len());
    ranked
}

fn summarize(p: &PlayerRecord) -> PlayerPerformanceSummary {
    let minutes_played = p.appearances * MATCH_MINUTES;
    // The per-40 family goes through minutes rather than reusing the
    // per-match rates; the two must stay independent if match length varies.
    PlayerPerformanceSummary {
        player_id: p.player_id,
        name: p.name.clone(),
        appearances: p.appearances,
        goals: p.goals,
        assists: p.assists,
        clean_sheets: p.clean_sheets,
        goals_per_match: per(p.goals, p.appearances),
        assists_per_match: per(p.assists, p.appearances),
        goal_contributions_per_game: per(p.goals + p.assists, p.appearances),
        minutes_played,
        goals_per_40_min: per(p.goals, minutes_played) * f64::from(MATCH_MINUTES),
        assists_per_40_min: per(p.assists, minutes_played) * f64::from(MATCH_MINUTES),
        contributions_per_40_min: per(p.goals + p.assists, minutes_played)
            * f64::from(MATCH_MINUTES),
        clean_sheet_rate: per(p.clean_sheets, p.appearances) * 100.0,
    }
}
