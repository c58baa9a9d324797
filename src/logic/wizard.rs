//! Wizard step gate: sequences the configuration flow and blocks forward
//! movement until the current step's data is complete.

use crate::logic::partition::{group_count, partition_teams};
use crate::logic::structure::{derive_structure, nearest_power_of_two};
use crate::models::{
    CombinationSubtype, FormatChoice, Group, StructureConfig, TeamId, WizardDraft, WizardError,
    WizardStep, MIN_TEAM_CAPACITY, VALID_BRACKET_SIZES,
};

/// Select the format (and, for combination, the subtype), re-deriving the
/// structure. Values the user already entered survive where the derivation
/// contract allows; changing only the subtype never resets them.
pub fn set_format(
    draft: WizardDraft,
    format: FormatChoice,
    subtype: Option<CombinationSubtype>,
) -> Result<WizardDraft, WizardError> {
    let mut draft = draft;
    if draft.published {
        return Err(WizardError::AlreadyPublished);
    }
    if let Some(subtype) = subtype {
        draft.combination_subtype = Some(subtype);
    }
    draft.structure = Some(derive_structure(
        format,
        draft.combination_subtype,
        draft.team_capacity,
        draft.structure.as_ref(),
    ));
    draft.format = Some(format);
    Ok(draft)
}

/// Change the team capacity. Structural parameters are re-derived on every
/// change, never left stale; values below the minimum are accepted here and
/// caught by the Basics gate.
pub fn set_team_capacity(draft: WizardDraft, capacity: u32) -> Result<WizardDraft, WizardError> {
    let mut draft = draft;
    if draft.published {
        return Err(WizardError::AlreadyPublished);
    }
    draft.team_capacity = capacity;
    if let Some(format) = draft.format {
        draft.structure = Some(derive_structure(
            format,
            draft.combination_subtype,
            capacity,
            draft.structure.as_ref(),
        ));
    }
    Ok(draft)
}

/// Completion predicate for the draft's current step.
pub fn step_complete(draft: &WizardDraft) -> bool {
    complete_at(draft, draft.step)
}

fn complete_at(draft: &WizardDraft, step: WizardStep) -> bool {
    match step {
        WizardStep::Format => match draft.format {
            Some(FormatChoice::Combination) => draft.combination_subtype.is_some(),
            Some(_) => true,
            None => false,
        },
        WizardStep::Basics => {
            !draft.name.trim().is_empty() && draft.team_capacity >= MIN_TEAM_CAPACITY
        }
        WizardStep::Rules => draft.points.is_some(),
        WizardStep::Structure => structure_complete(draft),
        WizardStep::Prizes => draft.prize_notes.is_some(),
        WizardStep::Review => gated_steps().iter().all(|&s| complete_at(draft, s)),
    }
}

fn gated_steps() -> [WizardStep; 5] {
    [
        WizardStep::Format,
        WizardStep::Basics,
        WizardStep::Rules,
        WizardStep::Structure,
        WizardStep::Prizes,
    ]
}

/// Per-format structural invariants. A missing, mismatched, or unrecognized
/// structure reads as incomplete rather than failing.
pub fn structure_complete(draft: &WizardDraft) -> bool {
    let (Some(format), Some(structure)) = (draft.format, draft.structure.as_ref()) else {
        return false;
    };
    if structure.format() != format {
        return false;
    }
    match structure {
        StructureConfig::League { rounds } => matches!(*rounds, 1 | 2),
        StructureConfig::Knockout { bracket_size, .. } => {
            VALID_BRACKET_SIZES.contains(bracket_size)
        }
        StructureConfig::Combination {
            subtype,
            groups,
            knockout,
        } => {
            if !groups.in_range() || !VALID_BRACKET_SIZES.contains(&knockout.bracket_size) {
                return false;
            }
            match subtype {
                // One league feeds the bracket directly; the bracket cannot
                // exceed the teams available to qualify.
                CombinationSubtype::LeagueThenKnockout => {
                    knockout.bracket_size <= draft.team_capacity
                }
                // The bracket must hold exactly the group-stage qualifiers:
                // group count for this capacity times advancers per group,
                // snapped to the nearest valid size.
                CombinationSubtype::GroupsThenKnockout => {
                    let expected = group_count(draft.team_capacity as usize)
                        * usize::from(groups.advance_per_group);
                    knockout.bracket_size == nearest_power_of_two(expected as u32)
                }
            }
        }
    }
}

/// Move to the next step. Blocked while the current step is incomplete;
/// Review is terminal and advancing from it is a no-op.
pub fn advance(draft: WizardDraft) -> Result<WizardDraft, WizardError> {
    if draft.published {
        return Err(WizardError::AlreadyPublished);
    }
    if !step_complete(&draft) {
        return Err(WizardError::StepIncomplete(draft.step));
    }
    let mut draft = draft;
    if let Some(next) = draft.step.next() {
        draft.step = next;
    }
    Ok(draft)
}

/// Move to the previous step. Always allowed; entered data is preserved.
pub fn back(draft: WizardDraft) -> WizardDraft {
    let mut draft = draft;
    if let Some(prev) = draft.step.prev() {
        draft.step = prev;
    }
    draft
}

/// Freeze the draft as the published configuration. Only legal at Review
/// with every step complete; afterwards the draft is read-only history and
/// the caller hands the structure to fixture generation.
pub fn publish(draft: WizardDraft) -> Result<WizardDraft, WizardError> {
    if draft.published {
        return Err(WizardError::AlreadyPublished);
    }
    if draft.step != WizardStep::Review {
        return Err(WizardError::NotAtReview);
    }
    if let Some(&incomplete) = gated_steps().iter().find(|&&s| !complete_at(&draft, s)) {
        return Err(WizardError::StepIncomplete(incomplete));
    }
    let mut draft = draft;
    draft.published = true;
    Ok(draft)
}

/// Partition a registered team list the way the group stage will, for
/// display on the structure step. Empty unless the draft is configured as
/// groups-then-knockout; the draft itself never stores the team list.
pub fn group_preview(draft: &WizardDraft, teams: &[TeamId]) -> Vec<Group> {
    match (draft.format, draft.combination_subtype) {
        (Some(FormatChoice::Combination), Some(CombinationSubtype::GroupsThenKnockout)) => {
            partition_teams(teams)
        }
        _ => Vec::new(),
    }
}
