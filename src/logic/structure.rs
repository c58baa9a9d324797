//! Structure derivation: turn a format choice and team capacity into
//! concrete structural parameters (rounds, bracket size, group layout).

use crate::models::{
    CombinationSubtype, FormatChoice, GroupStageConfig, KnockoutConfig, StructureConfig,
    VALID_BRACKET_SIZES,
};
use log::debug;

/// Cap for a combination knockout stage when first initialized.
const COMBINATION_BRACKET_CAP: u32 = 16;

/// The valid bracket size closest to `capacity`. The set is scanned
/// ascending with a strict improvement test, so equidistant capacities
/// resolve to the smaller size.
pub fn nearest_power_of_two(capacity: u32) -> u32 {
    let mut best = VALID_BRACKET_SIZES[0];
    let mut best_diff = (i64::from(capacity) - i64::from(best)).abs();
    for &candidate in &VALID_BRACKET_SIZES[1..] {
        let diff = (i64::from(capacity) - i64::from(candidate)).abs();
        if diff < best_diff {
            best = candidate;
            best_diff = diff;
        }
    }
    best
}

/// Bracket size for the knockout stage created from `n` group-stage
/// qualifiers: 16, 8, or 4.
pub fn bracket_for_qualifier_count(n: usize) -> u32 {
    if n >= 16 {
        16
    } else if n >= 8 {
        8
    } else {
        4
    }
}

/// Derive (or repair) the structural parameters for a format at the given
/// team capacity.
///
/// Pure: the caller persists the result and re-invokes on every format or
/// capacity change. Values the user already entered survive where they are
/// still valid for the current capacity; capacities below the minimum are
/// not rejected here (the nearest bracket simply resolves to 4).
pub fn derive_structure(
    format: FormatChoice,
    subtype: Option<CombinationSubtype>,
    team_capacity: u32,
    existing: Option<&StructureConfig>,
) -> StructureConfig {
    let derived = match format {
        FormatChoice::League => {
            let rounds = match existing {
                Some(StructureConfig::League { rounds }) => *rounds,
                _ => 1,
            };
            StructureConfig::League { rounds }
        }
        FormatChoice::Knockout => {
            let nearest = nearest_power_of_two(team_capacity);
            let (bracket_size, single_leg, third_place_match) = match existing {
                Some(StructureConfig::Knockout {
                    bracket_size,
                    single_leg,
                    third_place_match,
                }) if VALID_BRACKET_SIZES.contains(bracket_size) && *bracket_size == nearest => {
                    (*bracket_size, *single_leg, *third_place_match)
                }
                // Bracket follows the current capacity; the leg and
                // third-place choices carry over.
                Some(StructureConfig::Knockout {
                    single_leg,
                    third_place_match,
                    ..
                }) => (nearest, *single_leg, *third_place_match),
                _ => (nearest, true, false),
            };
            StructureConfig::Knockout {
                bracket_size,
                single_leg,
                third_place_match,
            }
        }
        FormatChoice::Combination => {
            let (existing_subtype, groups, knockout) = match existing {
                Some(StructureConfig::Combination {
                    subtype,
                    groups,
                    knockout,
                }) => (Some(*subtype), *groups, *knockout),
                // Groups and knockout are only ever initialized as a pair.
                _ => (
                    None,
                    GroupStageConfig::default(),
                    KnockoutConfig::with_bracket(team_capacity.min(COMBINATION_BRACKET_CAP)),
                ),
            };
            StructureConfig::Combination {
                subtype: subtype.or(existing_subtype).unwrap_or_default(),
                groups,
                knockout,
            }
        }
    };
    debug!("derived {format:?} structure for capacity {team_capacity}");
    derived
}
