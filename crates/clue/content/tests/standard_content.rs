use std::collections::HashSet;
use std::path::Path;

use clue_content::{
    ContentFactory, GroupKind, GroupSpec, ItemSource, RequirementRegistry, VariationTable, embedded,
};
use clue_core::{
    ClueKind, Item, ItemId, PlayerItems, ValidationConfig, ValidationLevel, VariationOracle, ids,
};
use item_requirements::{ItemRequirement, all};

fn data_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

fn standard() -> (RequirementRegistry, VariationTable, Vec<GroupSpec>) {
    let registry = embedded::standard_registry().expect("standard registry builds");
    let variations = embedded::variations().expect("variations parse");
    let groups = embedded::groups().expect("groups parse");
    (registry, variations, groups)
}

fn expected_ids(sources: &[ItemSource], exclude: &[ItemId], table: &VariationTable) -> HashSet<ItemId> {
    sources
        .iter()
        .flat_map(|source| match source {
            ItemSource::Variations(base) => table.variations(*base),
            ItemSource::Item(id) => vec![*id],
            ItemSource::Items(ids) => ids.clone(),
        })
        .filter(|id| !exclude.contains(id))
        .collect()
}

fn wearing(ids: &[ItemId]) -> PlayerItems {
    PlayerItems::new(Vec::new(), ids.iter().copied().map(Item::single).collect())
}

#[test]
fn every_standard_group_is_registered() {
    let (registry, _, _) = standard();

    for key in [
        "ANY_SLAYER_HELMET",
        "ANY_RING_OF_WEALTH",
        "ANY_PHARAOHS_SCEPTRE",
        "ANY_ABYSSAL_WHIP_OR_TENTACLE",
        "ANY_TEAM_CAPE",
        "ANY_STOLE",
        "ANY_MITRE",
        "ANY_RING_OF_DUELING",
        "ANY_CHARGED_GLORY",
        "ACTIVE_CRYSTAL_BOW_OR_BOW_OF_FAERDHINEN",
        "DRAGON_OR_AVERNIC_DEFENDER",
        "ANY_GOD_BOOK",
        "ANY_PICKAXE",
        "ANY_AXE",
        "ANY_HARPOON",
        "ANY_HAMMER",
        "A_FULL_GRACEFUL_SET",
    ] {
        assert!(registry.contains(key), "missing group {key}");
    }
    assert_eq!(registry.len(), 17);
}

#[test]
fn any_groups_equal_union_of_sources_minus_exclusions() {
    let (registry, variations, groups) = standard();

    for spec in &groups {
        let requirement = registry.get(&spec.key).expect("registered");
        match &spec.kind {
            GroupKind::Any { sources, exclude } => {
                let ids = requirement.item_ids();
                let unique: HashSet<ItemId> = ids.iter().copied().collect();
                assert_eq!(unique.len(), ids.len(), "{} has repeated ids", spec.key);
                assert_eq!(unique, expected_ids(sources, exclude, &variations), "{}", spec.key);
            }
            GroupKind::All { slots } => {
                assert_eq!(requirement.members().len(), slots.len());
                for (slot, member) in slots.iter().zip(requirement.members()) {
                    let unique: HashSet<ItemId> = member.item_ids().into_iter().collect();
                    assert_eq!(unique, expected_ids(&slot.sources, &slot.exclude, &variations));
                }
            }
        }
    }
}

#[test]
fn excluded_ids_never_satisfy_their_group() {
    let (registry, _, _) = standard();

    let defender = registry.get("DRAGON_OR_AVERNIC_DEFENDER").expect("registered");
    for broken in [ids::DRAGON_DEFENDER_BROKEN, ids::AVERNIC_DEFENDER_BROKEN] {
        assert!(!defender.fulfilled_by_item(broken));
        assert!(!defender.fulfilled_by(&[Item::single(broken)]));
    }
    assert!(defender.fulfilled_by_item(ids::DRAGON_DEFENDER));
    assert!(defender.fulfilled_by_item(ids::DRAGON_DEFENDER_T));
    assert!(defender.fulfilled_by_item(ids::GHOMMALS_AVERNIC_DEFENDER_5));

    let whip = registry.get("ANY_ABYSSAL_WHIP_OR_TENTACLE").expect("registered");
    assert!(whip.fulfilled_by_item(ids::ABYSSAL_WHIP));
    assert!(whip.fulfilled_by_item(ids::ABYSSAL_TENTACLE));
    assert!(!whip.fulfilled_by_item(ids::ABYSSAL_WHIP_4178));
    assert!(!whip.fulfilled_by_item(ids::ABYSSAL_WHIP_20405));

    let bow = registry
        .get("ACTIVE_CRYSTAL_BOW_OR_BOW_OF_FAERDHINEN")
        .expect("registered");
    assert!(!bow.fulfilled_by_item(ids::BOW_OF_FAERDHINEN_INACTIVE));
    assert!(bow.fulfilled_by_item(ids::BOW_OF_FAERDHINEN));
    assert!(bow.fulfilled_by_item(ids::CRYSTAL_BOW_24123));

    let books = registry.get("ANY_GOD_BOOK").expect("registered");
    assert!(!books.fulfilled_by_item(ids::UNHOLY_BOOK_27191));
    assert!(books.fulfilled_by_item(ids::UNHOLY_BOOK));
}

#[test]
fn full_graceful_set_needs_every_slot() {
    let (registry, _, _) = standard();
    let set = registry.get("A_FULL_GRACEFUL_SET").expect("registered");
    assert!(matches!(set, ItemRequirement::All(_)));
    assert_eq!(set.members().len(), 6);

    let full = [
        ids::GRACEFUL_HOOD,
        ids::GRACEFUL_TOP,
        ids::GRACEFUL_LEGS,
        ids::GRACEFUL_GLOVES,
        ids::GRACEFUL_BOOTS,
        ids::GRACEFUL_CAPE,
    ];
    assert!(set.fulfilled_by(&wearing(&full).all_items()));

    for skipped in 0..full.len() {
        let partial: Vec<ItemId> = full
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != skipped)
            .map(|(_, id)| *id)
            .collect();
        let held = wearing(&partial).all_items();
        assert!(!set.fulfilled_by(&held), "slot {skipped} should be required");
        assert_eq!(set.missing(&held).len(), 1);
    }
}

#[test]
fn graceful_cape_slot_accepts_agility_and_max_capes() {
    let (registry, _, _) = standard();
    let set = registry.get("A_FULL_GRACEFUL_SET").expect("registered");

    // arceuus recolour of hood, top, legs, gloves and boots
    let recoloured = [
        ItemId(13579),
        ItemId(13583),
        ItemId(13585),
        ItemId(13587),
        ItemId(13589),
    ];
    for cape in [ids::AGILITY_CAPE, ids::MAX_CAPE, ItemId(13581)] {
        let mut worn = recoloured.to_vec();
        worn.push(cape);
        assert!(set.fulfilled_by(&wearing(&worn).all_items()), "cape {cape}");
    }
}

#[test]
fn result_does_not_depend_on_held_item_order() {
    let (registry, _, _) = standard();
    let mut held = vec![
        Item::single(ids::RUNE_PICKAXE),
        Item::single(ids::IMCANDO_HAMMER),
        Item::single(ids::AMULET_OF_GLORY_T4),
        Item::single(ids::HOLY_BOOK),
    ];
    let forward: Vec<bool> = registry
        .iter()
        .map(|group| group.requirement.fulfilled_by(&held))
        .collect();
    held.reverse();
    let backward: Vec<bool> = registry
        .iter()
        .map(|group| group.requirement.fulfilled_by(&held))
        .collect();

    assert_eq!(forward, backward);
}

#[test]
fn graceful_slot_order_does_not_change_satisfaction() {
    let (registry, _, _) = standard();
    let set = registry.get("A_FULL_GRACEFUL_SET").expect("registered");

    let forward = all("forward", set.members().to_vec());
    let reversed = all("reversed", set.members().iter().rev().cloned().collect());

    let pieces = [
        ids::GRACEFUL_HOOD,
        ids::GRACEFUL_TOP,
        ids::GRACEFUL_LEGS,
        ids::GRACEFUL_GLOVES,
        ids::GRACEFUL_BOOTS,
        ids::GRACEFUL_CAPE,
    ];
    // every subset of the six pieces, from none to the full set
    for mask in 0u32..(1 << pieces.len()) {
        let worn: Vec<ItemId> = pieces
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, id)| *id)
            .collect();
        let held = wearing(&worn).all_items();

        let expected = worn.len() == pieces.len();
        assert_eq!(forward.fulfilled_by(&held), expected, "pieces {worn:?}");
        assert_eq!(reversed.fulfilled_by(&held), expected, "pieces {worn:?}");
        assert_eq!(
            forward.missing(&held).len(),
            reversed.missing(&held).len(),
            "pieces {worn:?}"
        );
    }
}

#[test]
fn uncharged_glory_is_not_a_charged_glory() {
    let (registry, _, _) = standard();
    let glory = registry.get("ANY_CHARGED_GLORY").expect("registered");

    assert!(glory.fulfilled_by_item(ids::AMULET_OF_GLORY4));
    assert!(glory.fulfilled_by_item(ids::AMULET_OF_GLORY_T4));
    assert!(!glory.fulfilled_by_item(ids::AMULET_OF_GLORY));
}

#[test]
fn shipped_content_has_no_findings() {
    let findings = ContentFactory::new(data_dir())
        .validate()
        .expect("content loads");
    assert!(findings.is_empty(), "unexpected findings: {findings:?}");

    let strict = ValidationConfig::uniform(ValidationLevel::Deny);
    assert!(embedded::standard_registry_with(&strict).is_ok());
}

#[test]
fn factory_and_embedded_content_agree() {
    let factory = ContentFactory::new(data_dir());
    let from_disk = factory.build_registry(None).expect("registry from disk");
    let (embedded, _, _) = standard();

    assert_eq!(
        from_disk.keys().collect::<Vec<_>>(),
        embedded.keys().collect::<Vec<_>>()
    );
}

#[test]
fn shipped_clue_steps_reference_known_groups() {
    let (registry, _, _) = standard();
    let clues = embedded::clues().expect("clues parse");
    assert!(!clues.is_empty());

    for step in &clues {
        let progress = step
            .evaluate(&registry, &PlayerItems::empty())
            .expect("every referenced group exists");
        assert_eq!(progress.missing.len(), step.requirements.len());
        assert!(step.kind.has_location());
    }

    let digging = clues
        .iter()
        .find(|step| matches!(step.kind, ClueKind::Coordinate { .. }))
        .expect("coordinate step");
    let items = PlayerItems::from_ids([ids::DRAGON_PICKAXE, ids::HAMMER]);
    assert!(digging.evaluate(&registry, &items).expect("known").is_complete());
}

#[test]
fn matching_groups_highlights_tools() {
    let (registry, _, _) = standard();
    assert_eq!(registry.matching_groups(ids::DRAGON_FELLING_AXE), vec!["ANY_AXE"]);
    assert_eq!(registry.matching_groups(ids::CRYSTAL_PICKAXE_INACTIVE), vec!["ANY_PICKAXE"]);
    assert_eq!(registry.matching_groups(ids::DRAGON_HARPOON), vec!["ANY_HARPOON"]);
    assert!(registry.matching_groups(ItemId(995)).is_empty());
}
