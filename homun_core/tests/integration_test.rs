//! Integration test: Load catalog -> Equip -> Attack -> Tick -> Drop
//!
//! Exercises the public API the way a host game loop drives it.

use homun_core::prelude::*;
use homun_core::catalog::parse_catalog_toml;
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const CATALOG: &str = r#"
[[parts]]
id = 1
name = "Brawler Core"
category = "core"

[parts.stats]
attack = 50.0
critical_chance = 0.0
critical_damage = 150.0

[[parts]]
id = 2
name = "Turtle Core"
category = "core"

[parts.stats]
health = 100.0
damage_reduction = 20.0

[[parts]]
id = 3
name = "Hooked Core"
category = "core"

[parts.stats]
health = 50.0
attack = 10.0

[[parts.on_hit.enemy_inflicting]]
name = "Hooked"
chance = 1.0
duration = 2.0

[parts.on_hit.enemy_inflicting.flat]
speed = -3.0

[[parts]]
id = 10
name = "Quick Legs"
category = "legs"

[parts.stats]
speed = 5.0

[[parts]]
id = 30
name = "Charm"
category = "accessory"

[parts.stats]
attack = 99.0

[[parts]]
id = 40
name = "Wing"
category = "wing"
"#;

fn catalog() -> BodyPartCatalog {
    parse_catalog_toml(CATALOG).expect("test catalog parses")
}

#[test]
fn test_attack_scenario_through_catalog() {
    let catalog = catalog();
    let mut a = Homun::new("A").player();
    let mut b = Homun::new("B");
    a.equip_body_part(&catalog, PartId(1)).unwrap();
    b.equip_body_part(&catalog, PartId(2)).unwrap();

    let result = a.attack_with_rng(&mut b, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();

    assert!(!result.is_critical);
    assert!((result.taken.final_amount - 40.0).abs() < 0.01);
    assert!((b.health() - 60.0).abs() < 0.01);
    println!("{}", result.summary());
}

#[test]
fn test_modifier_scenario() {
    let catalog = catalog();
    let mut homun = Homun::new("H");
    homun.equip_body_part(&catalog, PartId(3)).unwrap();

    let vigor = ModifierData::new("Vigor", 5.0).with_flat(Stat::Health, 10.0);
    assert!(homun.receive_temporal_status_with_rng(&vigor, &mut StepRng::new(u64::MAX, 0)));
    assert!((homun.effective_stats().health - 60.0).abs() < 0.01);

    homun.tick(5.1);
    assert_eq!(homun.active_modifiers().count(), 0);
    assert!((homun.effective_stats().health - 50.0).abs() < 0.01);
}

#[test]
fn test_unrecognized_category_from_content() {
    let catalog = catalog();
    let mut homun = Homun::new("H");
    homun.equip_body_part(&catalog, PartId(3)).unwrap();
    let before = *homun.base_stats();

    let err = homun.equip_body_part(&catalog, PartId(40)).unwrap_err();
    assert_eq!(err, HomunError::InvalidCategory { part_id: PartId(40) });
    assert_eq!(*homun.base_stats(), before);
}

#[test]
fn test_unknown_id_propagates() {
    let catalog = catalog();
    let mut homun = Homun::new("H");
    assert_eq!(
        homun.equip_body_part(&catalog, PartId(404)).unwrap_err(),
        HomunError::UnknownPartId(PartId(404))
    );
}

#[test]
fn test_accessory_held_but_not_counted() {
    let catalog = catalog();
    let mut homun = Homun::new("H");
    homun.equip_body_part(&catalog, PartId(1)).unwrap();
    homun.equip_body_part(&catalog, PartId(30)).unwrap();

    assert_eq!(homun.accessories().len(), 1);
    assert!((homun.effective_stats().attack - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_enemy_modifier_lands_and_wears_off() {
    let catalog = catalog();
    let mut a = Homun::new("A");
    let mut b = Homun::new("B");
    a.equip_body_part(&catalog, PartId(3)).unwrap();
    b.equip_body_part(&catalog, PartId(2)).unwrap();
    b.equip_body_part(&catalog, PartId(10)).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let result = a.attack_with_rng(&mut b, &mut rng).unwrap();
    assert_eq!(result.enemy_modifiers_applied, vec!["Hooked".to_string()]);
    assert!((b.effective_stats().speed - 2.0).abs() < 0.01);

    b.tick(1.0);
    assert_eq!(b.active_modifiers().count(), 1);
    b.tick(1.0);
    assert_eq!(b.active_modifiers().count(), 0);
    assert!((b.effective_stats().speed - 5.0).abs() < 0.01);
}

#[test]
fn test_duel_until_knockout() {
    let catalog = catalog();
    let mut a = Homun::new("A");
    let mut b = Homun::new("B");
    a.equip_body_part(&catalog, PartId(1)).unwrap();
    b.equip_body_part(&catalog, PartId(2)).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut turns = 0;
    while b.health() > 0.0 {
        a.attack_with_rng(&mut b, &mut rng).unwrap();
        a.tick(1.0);
        b.tick(1.0);
        turns += 1;
        assert!(turns < 10);
    }

    // 40 per hit against 100 health
    assert_eq!(turns, 3);
    assert!((b.health() + 20.0).abs() < 0.01);
}

#[test]
fn test_drop_offer_then_equip() {
    let catalog = catalog();
    let mut homun = Homun::new("H");
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let offer = DropOffer::roll_with_rng(&catalog, 3, &mut rng);
    assert_eq!(offer.offered().len(), 3);

    let mut equipped = 0;
    for index in 0..offer.offered().len() {
        let id = offer.choose(index).unwrap();
        if homun.equip_body_part(&catalog, id).is_ok() {
            equipped += 1;
        }
    }
    assert!(equipped >= 2);
    assert!(offer.choose(3).is_err());
}

#[test]
fn test_bundled_catalog_builds_a_fighter() {
    let catalog = default_catalog();
    assert!(!catalog.is_empty());

    let mut a = Homun::new("A");
    let mut b = Homun::new("B");
    for id in catalog.part_ids() {
        let category = catalog.part(id).unwrap().category;
        if category == PartCategory::Core && a.core().is_none() {
            a.equip_body_part(&catalog, id).unwrap();
        } else if category == PartCategory::Core {
            b.equip_body_part(&catalog, id).unwrap();
        }
    }

    let before = b.health();
    a.attack_with_rng(&mut b, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
    assert!(b.health() < before);
}
