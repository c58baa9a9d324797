//! Named group of teams produced by the partitioner.

use crate::models::record::TeamId;
use serde::{Deserialize, Serialize};

/// A named subset of teams playing a mini round-robin before a knockout
/// stage. Never mutated after creation; re-partitioning replaces the whole
/// set of groups.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Sequential letter name: "A", "B", ...
    pub name: String,
    /// Team ids in original registration order.
    pub team_ids: Vec<TeamId>,
}

impl Group {
    pub fn new(name: impl Into<String>, team_ids: Vec<TeamId>) -> Self {
        Self {
            name: name.into(),
            team_ids,
        }
    }
}
