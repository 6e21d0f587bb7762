use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skirmish::*;

fn always_crit() -> StepRng {
    StepRng::new(0, 0)
}

fn never_crit() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// Play the stock scenario: three heroes take turns on a goblin.
#[test]
fn test_party_versus_goblin() {
    let arthur = Character::melee("Arthur");
    let merlin = Character::caster("Merlin");
    let legolas = Character::marksman("Legolas");
    let mut goblin = Character::new("Goblin", 60.0, 18.0, 7.0);
    let mut rng = never_crit();

    // Arthur: 25 - 7 = 18
    let first = arthur.attack_target(&mut goblin, &mut rng);
    assert_eq!(first.damage(), 18.0);
    assert_eq!(goblin.health(), 42.0);

    // Merlin: 30 - 3.5 = 26.5
    let second = merlin.attack_target(&mut goblin, &mut rng);
    assert_eq!(second.damage(), 26.5);
    assert_eq!(goblin.health(), 15.5);

    // Legolas: 22 - 7 = 15, leaves the goblin at 0.5
    let third = legolas.attack_target(&mut goblin, &mut rng);
    let hit = third.hit().unwrap();
    assert_eq!(hit.damage, 15.0);
    assert!(!hit.lethal);
    assert!(goblin.is_alive());

    let fourth = arthur.attack_target(&mut goblin, &mut rng);
    assert!(fourth.hit().unwrap().lethal);
    assert!(!goblin.is_alive());

    // Everyone's next action is rejected without touching the goblin.
    assert_eq!(
        legolas.attack_target(&mut goblin, &mut rng),
        ActionOutcome::TargetDefeated
    );
    assert_eq!(goblin.health(), 0.0);
}

/// A lethal flag is only set on the hit that crosses zero.
#[test]
fn test_lethal_flag_set_once() {
    let arthur = Character::melee("Arthur");
    let mut goblin = Character::new("Goblin", 20.0, 18.0, 7.0);
    let mut rng = never_crit();

    let first = arthur.attack_target(&mut goblin, &mut rng);
    assert!(!first.hit().unwrap().lethal);

    let second = arthur.attack_target(&mut goblin, &mut rng);
    assert!(second.hit().unwrap().lethal);
}

/// Special actions of every class against the same target.
#[test]
fn test_special_actions() {
    let mut arthur = Character::melee("Arthur");
    let mut merlin = Character::caster("Merlin");
    let mut legolas = Character::marksman("Legolas");
    let mut boss = Character::new("Boss", 1000.0, 40.0, 10.0);

    // (25 - 10) + 12 = 27
    let heavy = arthur.special_action(&mut boss, &mut never_crit()).unwrap();
    assert_eq!(heavy.damage(), 27.0);

    // (30 - 5) + 23 = 48
    let fireball = merlin.special_action(&mut boss, &mut never_crit()).unwrap();
    assert_eq!(fireball.damage(), 48.0);
    assert_eq!(merlin.mana(), Some(35.0));

    // 22 * 1.2 - 10
    let precise = legolas.special_action(&mut boss, &mut never_crit()).unwrap();
    assert!((precise.damage() - (22.0 * 1.2 - 10.0)).abs() < 1e-9);
    assert!(!precise.hit().unwrap().critical);

    assert!((boss.health() - (1000.0 - 27.0 - 48.0 - precise.damage())).abs() < 1e-9);
}

/// Fireball spends mana only when it lands.
#[test]
fn test_fireball_mana_accounting() {
    let mut merlin = Character::caster("Merlin");
    let mut dummy = Character::new("Dummy", 10_000.0, 0.0, 0.0);

    let mut landed = 0;
    for _ in 0..5 {
        if merlin.cast_fireball(&mut dummy).unwrap().landed() {
            landed += 1;
        }
    }
    assert_eq!(landed, 3);
    assert_eq!(merlin.mana(), Some(5.0));

    assert_eq!(merlin.restore_mana(100.0), Ok(50.0));
    assert!(merlin.cast_fireball(&mut dummy).unwrap().landed());
}

/// Magic mitigation only applies half of the target's defense.
#[test]
fn test_magic_pierces_armor() {
    let arthur = Character::melee("Arthur");
    let merlin = Character::caster("Merlin");
    let knight = Character::new("Knight", 100.0, 10.0, 40.0);

    assert_eq!(arthur.compute_damage(&knight), 0.0);
    assert_eq!(merlin.compute_magic_damage(&knight), Ok(10.0));
}

/// Critical rolls come from the injected RNG, so a seeded RNG replays exactly.
#[test]
fn test_seeded_rng_replays() {
    let legolas = Character::marksman("Legolas");

    let run = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut target = Character::new("Dummy", 100_000.0, 0.0, 5.0);
        (0..50)
            .map(|_| legolas.attack_target(&mut target, &mut rng))
            .collect::<Vec<_>>()
    };

    let a = run(7);
    let b = run(7);
    assert_eq!(a, b);

    let crits = a.iter().filter(|o| o.hit().unwrap().critical).count();
    assert!(crits > 0 && crits < 50);
}

/// With a fixed low roll every marksman attack is critical.
#[test]
fn test_forced_critical() {
    let legolas = Character::marksman("Legolas");
    let mut target = Character::new("Dummy", 1000.0, 0.0, 10.0);

    let outcome = legolas.attack_target(&mut target, &mut always_crit());
    let hit = outcome.hit().unwrap();
    assert!(hit.critical);
    assert_eq!(hit.damage, 22.0 * 1.5 - 10.0);
}

/// Generic characters have no special action and no mana.
#[test]
fn test_generic_rejects_class_actions() {
    let mut goblin = Character::new("Goblin", 60.0, 18.0, 7.0);
    let mut arthur = Character::melee("Arthur");

    let err = goblin
        .special_action(&mut arthur, &mut never_crit())
        .unwrap_err();
    assert_eq!(
        err,
        CombatError::UnsupportedAction {
            class: ClassKind::Generic,
            action: "special_action",
        }
    );
    assert!(goblin.restore_mana(10.0).is_err());
    assert!(goblin.heavy_strike(&mut arthur).is_err());
    assert!(goblin.precise_shot(&mut arthur, &mut never_crit()).is_err());
    assert_eq!(arthur.health(), 120.0);
}

/// Profiles loaded from JSON feed the class constructors.
#[test]
fn test_characters_from_loaded_profiles() {
    let profiles = ClassProfiles::from_json(
        r#"{
            "melee": { "health": 150.0, "attack": 30.0, "defense": 20.0 },
            "marksman": { "health": 70.0, "attack": 28.0, "defense": 6.0 }
        }"#,
    )
    .unwrap();

    let tank = Character::melee_with("Tank", &profiles.melee);
    assert_eq!(tank.health_max(), 150.0);
    assert_eq!(tank.defense(), 20.0);

    let sniper = Character::marksman_with("Sniper", &profiles.marksman);
    assert_eq!(sniper.attack(), 28.0);

    let mage = Character::caster_with("Mage", &profiles.caster);
    assert_eq!(mage.health_max(), 80.0);
}

/// Snapshots reflect the class and round-trip through JSON.
#[test]
fn test_snapshot_after_combat() {
    let mut merlin = Character::caster("Merlin");
    let mut goblin = Character::new("Goblin", 60.0, 18.0, 7.0);
    merlin.cast_fireball(&mut goblin).unwrap();

    let snapshot = merlin.describe();
    assert_eq!(snapshot.detail.kind(), ClassKind::Caster);
    assert_eq!(
        snapshot.detail,
        ClassDetail::Caster {
            mana: 35.0,
            mana_max: 50.0,
            magic_power: 30.0,
        }
    );

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: CharacterSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
