//! Battle example: three heroes against a goblin
//!
//! This example demonstrates:
//! - Creating characters of every class
//! - Basic attacks through the shared combat pipeline
//! - Class special actions and their outcomes
//! - Experience gain and class-specific level-up growth
//!
//! Run with `RUST_LOG=skirmish=debug` to see every hit.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skirmish::*;
use tracing_subscriber::EnvFilter;

fn report(actor: &Character, action: &str, target: &Character, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Hit(hit) => {
            let crit = if hit.critical { " (critical)" } else { "" };
            println!(
                "  {} uses {} on {}: {:.1} damage{}",
                actor.name(),
                action,
                target.name(),
                hit.damage,
                crit
            );
            if hit.lethal {
                println!("  {} has been defeated.", target.name());
            }
        }
        ActionOutcome::TargetDefeated => {
            println!("  {} is already defeated.", target.name());
        }
        ActionOutcome::InsufficientMana {
            required,
            available,
        } => {
            println!(
                "  {} lacks mana for {}: needs {}, has {}.",
                actor.name(),
                action,
                required,
                available
            );
        }
    }
}

fn print_roster(title: &str, roster: &[&Character]) {
    println!("\n=== {} ===", title);
    for character in roster {
        println!("{}", character.describe());
    }
}

fn main() -> Result<(), CombatError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skirmish=info")),
        )
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    let mut arthur = Character::melee("Arthur");
    let mut merlin = Character::caster("Merlin");
    let mut legolas = Character::marksman("Legolas");
    let mut goblin = Character::new("Goblin", 60.0, 18.0, 7.0);

    arthur.set_id("hero-1")?;
    merlin.set_id("hero-2")?;
    legolas.set_id("hero-3")?;
    goblin.set_id("enemy-1")?;

    print_roster("Characters", &[&arthur, &merlin, &legolas, &goblin]);

    println!("\n=== Basic attacks ===");
    let outcome = arthur.attack_target(&mut goblin, &mut rng);
    report(&arthur, "sword", &goblin, &outcome);
    let outcome = merlin.attack_target(&mut goblin, &mut rng);
    report(&merlin, "energy orb", &goblin, &outcome);
    let outcome = legolas.attack_target(&mut goblin, &mut rng);
    report(&legolas, "arrow", &goblin, &outcome);

    println!("\n=== Special actions ===");
    let outcome = arthur.heavy_strike(&mut goblin)?;
    report(&arthur, "heavy strike", &goblin, &outcome);
    let outcome = merlin.cast_fireball(&mut goblin)?;
    report(&merlin, "fireball", &goblin, &outcome);
    let outcome = legolas.precise_shot(&mut goblin, &mut rng)?;
    report(&legolas, "precise shot", &goblin, &outcome);

    print_roster("After combat", &[&arthur, &merlin, &legolas, &goblin]);

    println!("\n=== Experience ===");
    for hero in [&mut arthur, &mut merlin, &mut legolas] {
        let levels = hero.gain_experience(150);
        println!("  {} gains 150 XP and {} level(s).", hero.name(), levels);
    }

    print_roster("After leveling", &[&arthur, &merlin, &legolas]);

    Ok(())
}
