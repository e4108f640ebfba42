//! Tests for grouping and override state
//!
//! Verifies that:
//! - Grouping keeps every entry exactly once, in a stable order
//! - Duplicate slots and mixed groups are rejected
//! - Toggles flip exactly one slot and seed from the catalog defaults

use raidbook_types::{Difficulty, DifficultyLabels};

use super::{GroupId, MergeError, MergedRaid, OverrideState, RaidKey, group};
use crate::catalog::{Catalog, RaidEntry};

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

fn zhanbao(player_count: u8, difficulty: Difficulty) -> RaidEntry {
    RaidEntry::new("战宝迦兰", 70, "风起稻香", player_count, difficulty)
}

/// A small catalog spanning two eras, with a mixed-size raid and a
/// single-slot raid
fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        zhanbao(10, Difficulty::Normal),
        RaidEntry::new("荻花宫后山", 70, "风起稻香", 10, Difficulty::Normal),
        zhanbao(25, Difficulty::Heroic).with_base_active(false),
        RaidEntry::new("龙渊泽", 80, "巴蜀风云", 10, Difficulty::Normal),
        RaidEntry::new("龙渊泽", 80, "巴蜀风云", 10, Difficulty::Heroic),
        RaidEntry::new("龙渊泽", 80, "巴蜀风云", 25, Difficulty::Heroic).with_base_active(false),
    ])
}

fn sorted_keys<'a>(entries: impl Iterator<Item = &'a RaidEntry>) -> Vec<RaidKey> {
    let mut keys: Vec<RaidKey> = entries.map(RaidEntry::key).collect();
    keys.sort();
    keys
}

// ═══════════════════════════════════════════════════════════════════════════
// Grouping
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn grouping_keeps_every_entry_once() {
    let catalog = sample_catalog();
    let merged = catalog.group().unwrap();

    let grouped = sorted_keys(merged.iter().flat_map(|m| m.raids().iter()));
    let input = sorted_keys(catalog.iter());
    assert_eq!(grouped, input);
}

#[test]
fn grouping_is_stable() {
    let catalog = sample_catalog();
    assert_eq!(catalog.group().unwrap(), catalog.group().unwrap());
}

#[test]
fn groups_appear_in_first_seen_order() {
    let merged = sample_catalog().group().unwrap();
    let names: Vec<&str> = merged.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["战宝迦兰", "荻花宫后山", "龙渊泽"]);
}

#[test]
fn members_keep_catalog_order() {
    let merged = sample_catalog().group().unwrap();
    let longyuan = &merged[2];
    let slots: Vec<(u8, Difficulty)> = longyuan
        .raids()
        .iter()
        .map(|e| (e.player_count, e.difficulty))
        .collect();
    assert_eq!(
        slots,
        vec![
            (10, Difficulty::Normal),
            (10, Difficulty::Heroic),
            (25, Difficulty::Heroic),
        ]
    );
}

#[test]
fn same_name_in_two_eras_gives_two_groups() {
    let merged = group(&[
        RaidEntry::new("宫中神武遗迹", 70, "风起稻香", 10, Difficulty::Normal),
        RaidEntry::new("宫中神武遗迹", 70, "重制版", 10, Difficulty::Normal),
    ])
    .unwrap();
    assert_eq!(merged.len(), 2);
}

#[test]
fn empty_catalog_groups_to_nothing() {
    let merged = Catalog::default().group().unwrap();
    assert!(merged.is_empty());
}

#[test]
fn duplicate_slot_is_rejected() {
    // The shipped catalog once listed 荒血路 25人普通 twice
    let entry = RaidEntry::new("荒血路", 100, "世外蓬莱", 25, Difficulty::Normal);
    let err = group(&[entry.clone(), entry.clone().with_description("again")]).unwrap_err();
    assert_eq!(err, MergeError::DuplicateKey { key: entry.key() });
}

#[test]
fn mixed_group_is_rejected() {
    let err = MergedRaid::from_entries(
        vec![
            zhanbao(10, Difficulty::Normal),
            RaidEntry::new("战宝迦兰", 80, "风起稻香", 25, Difficulty::Heroic),
        ],
        &DifficultyLabels::default(),
    )
    .unwrap_err();

    match err {
        MergeError::InconsistentGroup { expected, found } => {
            assert_eq!(expected.level, 70);
            assert_eq!(found.level, 80);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_group_is_rejected() {
    let err = MergedRaid::from_entries(Vec::new(), &DifficultyLabels::default()).unwrap_err();
    assert_eq!(err, MergeError::EmptyGroup);
}

#[test]
fn group_id_copies_identity() {
    let merged = sample_catalog().group().unwrap();
    assert_eq!(
        merged[0].id(),
        &GroupId {
            name: "战宝迦兰".to_string(),
            level: 70,
            version: "风起稻香".to_string(),
        }
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Labels
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn mixed_sizes_get_size_prefixed_labels() {
    let merged = sample_catalog().group().unwrap();
    let defaults = DifficultyLabels::default();
    let zhanbao_raid = &merged[0];

    let heroic = zhanbao(25, Difficulty::Heroic).key();
    assert_eq!(zhanbao_raid.label(&heroic, &defaults), "25人英雄");

    let normal = zhanbao(10, Difficulty::Normal).key();
    assert_eq!(zhanbao_raid.label(&normal, &defaults), "10人普通");
}

#[test]
fn single_size_uses_tier_default() {
    let merged = sample_catalog().group().unwrap();
    let dihua = &merged[1];
    assert!(dihua.difficulty_labels().is_empty());

    let key = dihua.raids()[0].key();
    assert_eq!(dihua.label(&key, &DifficultyLabels::default()), "普通");

    let custom = DifficultyLabels {
        normal: "Normal".to_string(),
        ..DifficultyLabels::default()
    };
    assert_eq!(dihua.label(&key, &custom), "Normal");
}

#[test]
fn custom_labels_feed_size_prefixed_labels() {
    let labels = DifficultyLabels {
        heroic: "HM".to_string(),
        ..DifficultyLabels::default()
    };
    let merged = sample_catalog().group_with_labels(&labels).unwrap();
    let key = zhanbao(25, Difficulty::Heroic).key();
    assert_eq!(merged[0].label(&key, &labels), "25人HM");
}

#[test]
fn display_order_sorts_by_size_then_tier() {
    let merged = group(&[
        zhanbao(25, Difficulty::Heroic),
        zhanbao(10, Difficulty::Heroic),
        zhanbao(25, Difficulty::Normal),
    ])
    .unwrap();

    let order: Vec<(u8, Difficulty)> = merged[0]
        .by_player_count()
        .iter()
        .map(|e| (e.player_count, e.difficulty))
        .collect();
    assert_eq!(
        order,
        vec![
            (10, Difficulty::Heroic),
            (25, Difficulty::Normal),
            (25, Difficulty::Heroic),
        ]
    );
    // Catalog order untouched
    assert_eq!(merged[0].raids()[0].player_count, 25);
}

// ═══════════════════════════════════════════════════════════════════════════
// Override State
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn seeds_from_catalog_defaults() {
    let catalog = sample_catalog();
    let state = OverrideState::from_catalog(&catalog);

    assert_eq!(state.len(), catalog.len());
    for entry in &catalog {
        assert_eq!(state.is_active(&entry.key()).unwrap(), entry.base_active);
    }
}

#[test]
fn omitted_active_seeds_true_and_false_seeds_false() {
    let on = zhanbao(10, Difficulty::Normal);
    let off = zhanbao(25, Difficulty::Heroic).with_base_active(false);
    let state = OverrideState::initialize(&[on.clone(), off.clone()]);

    assert!(state.is_active(&on.key()).unwrap());
    assert!(!state.is_active(&off.key()).unwrap());
}

#[test]
fn zhanbao_scenario_toggles_only_the_25_slot() {
    let ten = zhanbao(10, Difficulty::Normal);
    let twenty_five = zhanbao(25, Difficulty::Heroic);
    let catalog = Catalog::new(vec![ten.clone(), twenty_five.clone()]);

    let merged = catalog.group().unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].raids().len(), 2);

    let mut state = OverrideState::from_catalog(&catalog);
    assert!(!state.toggle(&twenty_five.key()).unwrap());
    assert!(!state.is_active(&twenty_five.key()).unwrap());
    assert!(state.is_active(&ten.key()).unwrap());
}

#[test]
fn double_toggle_restores_value() {
    let catalog = sample_catalog();
    let mut state = OverrideState::from_catalog(&catalog);

    for entry in &catalog {
        let key = entry.key();
        let before = state.is_active(&key).unwrap();
        state.toggle(&key).unwrap();
        state.toggle(&key).unwrap();
        assert_eq!(state.is_active(&key).unwrap(), before);
    }
}

#[test]
fn toggle_is_isolated() {
    let catalog = sample_catalog();
    for target in &catalog {
        let mut state = OverrideState::from_catalog(&catalog);
        let before = state.clone();
        state.toggle(&target.key()).unwrap();

        for other in catalog.iter().filter(|e| e.key() != target.key()) {
            assert_eq!(
                state.is_active(&other.key()).unwrap(),
                before.is_active(&other.key()).unwrap(),
                "toggling {} changed {}",
                target.key(),
                other.key()
            );
        }
    }
}

#[test]
fn unknown_key_errors_on_query_and_toggle() {
    let mut state = OverrideState::from_catalog(&sample_catalog());
    let stale = RaidKey::new("南诏皇宫", 80, "巴蜀风云", 25, Difficulty::Heroic);

    assert_eq!(
        state.is_active(&stale),
        Err(MergeError::UnknownKey { key: stale.clone() })
    );
    assert_eq!(
        state.toggle(&stale),
        Err(MergeError::UnknownKey { key: stale.clone() })
    );
}

#[test]
fn unknown_entry_falls_back_to_its_default() {
    let state = OverrideState::from_catalog(&sample_catalog());
    let new_off = RaidEntry::new("南诏皇宫", 80, "巴蜀风云", 25, Difficulty::Heroic)
        .with_base_active(false);
    let new_on = RaidEntry::new("南诏皇宫", 80, "巴蜀风云", 10, Difficulty::Normal);

    assert!(!state.is_active_or(&new_off));
    assert!(state.is_active_or(&new_on));
}

#[test]
fn reinitializing_discards_toggles() {
    let catalog = sample_catalog();
    let key = catalog.entries()[0].key();

    let mut state = OverrideState::from_catalog(&catalog);
    state.toggle(&key).unwrap();
    assert_eq!(state.changes().count(), 1);

    let state = OverrideState::from_catalog(&catalog);
    assert!(state.is_active(&key).unwrap());
    assert_eq!(state.changes().count(), 0);
}

#[test]
fn changes_lists_only_flipped_slots() {
    let catalog = sample_catalog();
    let mut state = OverrideState::from_catalog(&catalog);
    let disabled = catalog.entries()[2].key();
    state.toggle(&disabled).unwrap();

    let changes: Vec<(&RaidKey, bool)> = state.changes().collect();
    assert_eq!(changes, vec![(&disabled, true)]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Whole-raid toggle
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn toggle_raid_disables_all_when_any_active() {
    let catalog = sample_catalog();
    let merged = catalog.group().unwrap();
    let mut state = OverrideState::from_catalog(&catalog);

    let longyuan = &merged[2];
    assert!(longyuan.any_active(&state));

    assert!(!state.toggle_raid(longyuan).unwrap());
    assert!(longyuan.all_disabled(&state));
    // Other raids untouched
    assert!(merged[0].any_active(&state));
}

#[test]
fn toggle_raid_enables_all_when_none_active() {
    let catalog = sample_catalog();
    let merged = catalog.group().unwrap();
    let mut state = OverrideState::from_catalog(&catalog);
    let zhanbao_raid = &merged[0];

    // 10人 on, 25人 off: first press turns everything off, second turns it all on
    assert!(!state.toggle_raid(zhanbao_raid).unwrap());
    assert!(state.toggle_raid(zhanbao_raid).unwrap());
    for key in zhanbao_raid.keys() {
        assert!(state.is_active(&key).unwrap());
    }
}

#[test]
fn toggle_raid_with_stale_slot_changes_nothing() {
    let catalog = sample_catalog();
    let mut state = OverrideState::from_catalog(&catalog);

    let reloaded = group(&[
        zhanbao(10, Difficulty::Normal),
        zhanbao(25, Difficulty::Challenge),
    ])
    .unwrap();

    let before = state.clone();
    let err = state.toggle_raid(&reloaded[0]).unwrap_err();
    assert!(matches!(err, MergeError::UnknownKey { .. }));
    assert_eq!(state, before);
}

#[test]
fn all_disabled_group_is_valid() {
    let catalog = Catalog::new(vec![
        zhanbao(10, Difficulty::Normal).with_base_active(false),
        zhanbao(25, Difficulty::Heroic).with_base_active(false),
    ]);
    let merged = catalog.group().unwrap();
    let state = OverrideState::from_catalog(&catalog);
    assert!(merged[0].all_disabled(&state));
}
