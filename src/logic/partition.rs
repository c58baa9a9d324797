//! Group partitioner: deterministically split an ordered team list into
//! named groups.

use crate::models::{Group, TeamId};
use log::debug;

/// Group sizes for `n` teams. A pinned heuristic table; the 10- and 12-team
/// rows are deliberate special cases downstream consumers rely on.
fn group_sizes(n: usize) -> Vec<usize> {
    match n {
        0 => Vec::new(),
        1..=4 => vec![n],
        5..=8 => {
            let first = n / 2;
            vec![first, n - first]
        }
        10 => vec![5, 5],
        12 => vec![3, 3, 3, 3],
        9..=16 => {
            let base = n / 4;
            let extra = n % 4;
            (0..4).map(|i| base + usize::from(i < extra)).collect()
        }
        _ => {
            let ideal = if n % 4 == 0 { 4 } else { 5 };
            let mut sizes = Vec::new();
            let mut remaining = n;
            while remaining > 0 {
                let take = remaining.min(ideal);
                sizes.push(take);
                remaining -= take;
            }
            sizes
        }
    }
}

/// Number of groups the partitioner creates for `n` teams.
pub fn group_count(team_count: usize) -> usize {
    group_sizes(team_count).len()
}

/// Split an ordered team list into groups named "A", "B", ... Deterministic
/// and order-preserving: concatenating the group lists reproduces the input.
pub fn partition_teams(teams: &[TeamId]) -> Vec<Group> {
    let sizes = group_sizes(teams.len());
    let mut groups = Vec::with_capacity(sizes.len());
    let mut start = 0;
    for (i, size) in sizes.into_iter().enumerate() {
        let name = char::from(b'A' + i as u8).to_string();
        groups.push(Group::new(name, teams[start..start + size].to_vec()));
        start += size;
    }
    debug!("partitioned {} teams into {} groups", teams.len(), groups.len());
    groups
}
