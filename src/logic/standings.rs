//! Standings aggregation: fold finished matches into standings table rows.

use crate::models::{MatchRecord, PointsRule, TeamId, TeamStandingsSummary};
use log::debug;

/// Fold a match snapshot into a standings row for one team.
///
/// When `trusted` is given and no finished match in the snapshot involves
/// the team, the trusted counters pass through untouched and only the
/// derived fields are refreshed, so re-aggregating an earlier output is the
/// identity. Otherwise the row is recomputed from the finished matches.
/// Malformed records (missing score) and matches not involving the team are
/// skipped, never fatal.
pub fn aggregate_standings(
    matches: &[MatchRecord],
    team_id: TeamId,
    rule: PointsRule,
    trusted: Option<&TeamStandingsSummary>,
) -> TeamStandingsSummary {
    let results: Vec<(u32, u32)> = matches
        .iter()
        .filter_map(|m| team_score(m, team_id))
        .collect();

    if let Some(trusted) = trusted {
        if results.is_empty() {
            return trusted.clone().refresh_derived();
        }
    }

    let mut summary = TeamStandingsSummary::default();
    for (scored, conceded) in results {
        summary.played += 1;
        summary.goals_for += scored;
        summary.goals_against += conceded;
        if conceded == 0 {
            summary.clean_sheets += 1;
        }
        if scored > conceded {
            summary.wins += 1;
        } else if scored < conceded {
            summary.losses += 1;
        } else {
            summary.draws += 1;
        }
    }
    summary.points = summary.wins as i32 * rule.win
        + summary.draws as i32 * rule.draw
        + summary.losses as i32 * rule.loss;
    debug!("aggregated {} finished matches for team {team_id}", summary.played);
    summary.refresh_derived()
}

/// Goals (scored, conceded) from the team's side of a match, when the record
/// is finished with both scores present and involves the team at all.
fn team_score(record: &MatchRecord, team_id: TeamId) -> Option<(u32, u32)> {
    let (home, away) = record.final_score()?;
    if record.home_team_id == team_id {
        Some((home, away))
    } else if record.away_team_id == team_id {
        Some((away, home))
    } else {
        None
    }
}

/// One summary per listed team, sorted the way the product displays tables:
/// points, then goal difference, then goals scored, all descending.
pub fn league_table(
    matches: &[MatchRecord],
    team_ids: &[TeamId],
    rule: PointsRule,
) -> Vec<(TeamId, TeamStandingsSummary)> {
    let mut table: Vec<(TeamId, TeamStandingsSummary)> = team_ids
        .iter()
        .map(|&id| (id, aggregate_standings(matches, id, rule, None)))
        .collect();
    table.sort_by(|(_, a), (_, b)| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });
    table
}

/// Teams advancing from a sorted group table: the top `advance_per_group`
/// rows, in table order.
pub fn group_qualifiers(
    table: &[(TeamId, TeamStandingsSummary)],
    advance_per_group: u8,
) -> Vec<TeamId> {
    table
        .iter()
        .take(usize::from(advance_per_group))
        .map(|(id, _)| *id)
        .collect()
}
