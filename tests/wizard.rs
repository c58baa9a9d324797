//! Integration tests for the wizard step gate: linear progression, per-step
//! completion predicates, and publish freezing the draft.

use tournament_core::{
    advance, back, group_preview, publish, set_format, set_team_capacity, step_complete,
    structure_complete, CombinationSubtype, FormatChoice, PointsRule, StructureConfig,
    WizardDraft, WizardError, WizardStep,
};
use uuid::Uuid;

/// A league draft walked through every step, left standing at Review.
fn complete_league_draft() -> WizardDraft {
    let draft = set_format(WizardDraft::new(), FormatChoice::League, None).unwrap();
    let draft = advance(draft).unwrap();
    let draft = draft.with_name("Spring League").unwrap();
    let draft = advance(draft).unwrap();
    let draft = draft.with_points(PointsRule::default()).unwrap();
    let draft = advance(draft).unwrap();
    let draft = advance(draft).unwrap();
    let draft = draft.with_prize_notes("Trophy and medals").unwrap();
    advance(draft).unwrap()
}

#[test]
fn forward_is_blocked_until_each_step_completes() {
    let draft = WizardDraft::new();
    assert!(matches!(
        advance(draft.clone()),
        Err(WizardError::StepIncomplete(WizardStep::Format))
    ));

    let draft = set_format(draft, FormatChoice::League, None).unwrap();
    let draft = advance(draft).unwrap();
    assert_eq!(draft.step, WizardStep::Basics);

    // Blank name blocks Basics even though the default capacity passes.
    assert!(matches!(
        advance(draft.clone()),
        Err(WizardError::StepIncomplete(WizardStep::Basics))
    ));
    let draft = draft.with_name("Sunday Cup").unwrap();
    let draft = advance(draft).unwrap();
    assert_eq!(draft.step, WizardStep::Rules);

    assert!(matches!(
        advance(draft.clone()),
        Err(WizardError::StepIncomplete(WizardStep::Rules))
    ));
    let draft = draft.with_points(PointsRule::default()).unwrap();
    let draft = advance(draft).unwrap();
    assert_eq!(draft.step, WizardStep::Structure);

    // League structure was derived when the format was picked.
    let draft = advance(draft).unwrap();
    assert_eq!(draft.step, WizardStep::Prizes);

    assert!(matches!(
        advance(draft.clone()),
        Err(WizardError::StepIncomplete(WizardStep::Prizes))
    ));
    let draft = draft.with_prize_notes("Medals").unwrap();
    let draft = advance(draft).unwrap();
    assert_eq!(draft.step, WizardStep::Review);

    let draft = publish(draft).unwrap();
    assert!(draft.published);
}

#[test]
fn review_is_terminal_for_advance() {
    let draft = complete_league_draft();
    let draft = advance(draft).unwrap();
    assert_eq!(draft.step, WizardStep::Review);
}

#[test]
fn capacity_below_four_blocks_basics() {
    let draft = set_format(WizardDraft::new(), FormatChoice::League, None).unwrap();
    let draft = advance(draft).unwrap().with_name("Tiny Cup").unwrap();
    // Derivation accepts the value; only the gate rejects it.
    let draft = set_team_capacity(draft, 3).unwrap();
    assert!(matches!(
        advance(draft),
        Err(WizardError::StepIncomplete(WizardStep::Basics))
    ));
}

#[test]
fn backward_is_always_allowed_and_preserves_data() {
    let draft = set_format(WizardDraft::new(), FormatChoice::League, None).unwrap();
    let draft = advance(draft).unwrap().with_name("Autumn Cup").unwrap();
    let draft = advance(draft).unwrap();
    assert_eq!(draft.step, WizardStep::Rules);

    let draft = back(draft);
    assert_eq!(draft.step, WizardStep::Basics);
    assert_eq!(draft.name, "Autumn Cup");

    let draft = back(draft);
    assert_eq!(draft.step, WizardStep::Format);
    let draft = back(draft);
    assert_eq!(draft.step, WizardStep::Format);
    assert_eq!(draft.format, Some(FormatChoice::League));
}

#[test]
fn capacity_change_rederives_the_structure() {
    let draft = set_format(WizardDraft::new(), FormatChoice::Knockout, None).unwrap();
    assert!(matches!(
        draft.structure,
        Some(StructureConfig::Knockout { bracket_size: 8, .. })
    ));

    let draft = set_team_capacity(draft, 30).unwrap();
    assert!(matches!(
        draft.structure,
        Some(StructureConfig::Knockout { bracket_size: 32, .. })
    ));
}

#[test]
fn capacity_change_before_format_leaves_no_structure() {
    let draft = set_team_capacity(WizardDraft::new(), 12).unwrap();
    assert!(draft.structure.is_none());
}

#[test]
fn combination_needs_a_subtype_to_complete_the_format_step() {
    let draft = set_format(WizardDraft::new(), FormatChoice::Combination, None).unwrap();
    assert!(!step_complete(&draft));

    let draft = set_format(
        draft,
        FormatChoice::Combination,
        Some(CombinationSubtype::GroupsThenKnockout),
    )
    .unwrap();
    assert!(step_complete(&draft));
}

fn set_bracket(draft: &mut WizardDraft, bracket_size: u32) {
    match draft.structure.as_mut().unwrap() {
        StructureConfig::Combination { knockout, .. } => knockout.bracket_size = bracket_size,
        other => panic!("expected combination, got {other:?}"),
    }
}

#[test]
fn groups_subtype_requires_a_bracket_matching_the_qualifiers() {
    // Default capacity 8: two groups, top two advance, four qualifiers. The
    // initial bracket of min(8, 16) = 8 cannot hold exactly four, so the
    // gate holds until the user picks 4.
    let mut draft = set_format(
        WizardDraft::new(),
        FormatChoice::Combination,
        Some(CombinationSubtype::GroupsThenKnockout),
    )
    .unwrap();
    assert!(!structure_complete(&draft));
    set_bracket(&mut draft, 4);
    assert!(structure_complete(&draft));

    // Raising capacity to 12 keeps the entered knockout values but moves the
    // expectation to four groups times two, so the gate closes again.
    let mut draft = set_team_capacity(draft, 12).unwrap();
    assert!(!structure_complete(&draft));
    set_bracket(&mut draft, 8);
    assert!(structure_complete(&draft));
}

#[test]
fn league_subtype_requires_a_bracket_the_capacity_can_fill() {
    // Format chosen at capacity 10: the initial bracket of min(10, 16) = 10
    // is not a valid size.
    let draft = set_team_capacity(WizardDraft::new(), 10).unwrap();
    let mut draft = set_format(
        draft,
        FormatChoice::Combination,
        Some(CombinationSubtype::LeagueThenKnockout),
    )
    .unwrap();
    assert!(!structure_complete(&draft));

    set_bracket(&mut draft, 8);
    assert!(structure_complete(&draft));

    // A bracket bigger than the field stays incomplete.
    set_bracket(&mut draft, 16);
    assert!(!structure_complete(&draft));
}

#[test]
fn publish_requires_the_review_step() {
    let draft = set_format(WizardDraft::new(), FormatChoice::League, None).unwrap();
    assert!(matches!(publish(draft), Err(WizardError::NotAtReview)));
}

#[test]
fn published_draft_is_read_only() {
    let draft = publish(complete_league_draft()).unwrap();

    assert!(matches!(
        draft.clone().with_name("Renamed"),
        Err(WizardError::AlreadyPublished)
    ));
    assert!(matches!(
        set_format(draft.clone(), FormatChoice::Knockout, None),
        Err(WizardError::AlreadyPublished)
    ));
    assert!(matches!(
        set_team_capacity(draft.clone(), 32),
        Err(WizardError::AlreadyPublished)
    ));
    assert!(matches!(
        advance(draft.clone()),
        Err(WizardError::AlreadyPublished)
    ));
    assert!(matches!(publish(draft), Err(WizardError::AlreadyPublished)));
}

#[test]
fn group_preview_partitions_only_for_the_groups_subtype() {
    let teams: Vec<_> = (0..12).map(|_| Uuid::new_v4()).collect();

    let league = set_format(WizardDraft::new(), FormatChoice::League, None).unwrap();
    assert!(group_preview(&league, &teams).is_empty());

    let combo = set_format(
        WizardDraft::new(),
        FormatChoice::Combination,
        Some(CombinationSubtype::GroupsThenKnockout),
    )
    .unwrap();
    let groups = group_preview(&combo, &teams);
    assert_eq!(groups.len(), 4);
    assert!(groups.iter().all(|g| g.team_ids.len() == 3));
}
