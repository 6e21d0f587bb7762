//! # skirmish - Deterministic Turn-Based Combat Core
//!
//! A small combat model for turn-based RPGs that provides:
//! - **One entity type** with vitals, combat stats and experience-driven leveling
//! - **Closed set of classes** (Generic, Melee, Caster, Marksman) with their own
//!   resources, level-up growth and special action
//! - **Shared resolution** of every blow through one mitigate-and-apply step
//! - **Injectable randomness** so critical hits replay deterministically
//!
//! ## Core Concepts
//!
//! ### Combat Pipeline
//!
//! ```text
//! [Class] → [Strike] → mitigation → [Hit]
//! ```
//!
//! 1. The attacker's **class** builds a raw strike (attack, magic power,
//!    critical roll)
//! 2. The target's defense **mitigates** it (full for physical, half for magic)
//! 3. The result is applied to the target's health and reported as a **hit**
//!
//! Expected failures (defeated target, not enough mana) come back as
//! [`ActionOutcome`] values; nothing in normal gameplay returns an error.
//!
//! ## Example
//!
//! ```rust
//! use skirmish::*;
//! use rand::rngs::mock::StepRng;
//!
//! let mut merlin = Character::caster("Merlin");
//! let mut goblin = Character::new("Goblin", 60.0, 18.0, 7.0);
//! let mut rng = StepRng::new(0, 0);
//!
//! let outcome = merlin.attack_target(&mut goblin, &mut rng);
//! assert_eq!(outcome.damage(), 26.5); // 30 magic power - 7 / 2 defense
//!
//! merlin.gain_experience(250);
//! assert_eq!(merlin.level(), 3);
//! assert_eq!(merlin.mana(), Some(80.0));
//! ```
//!
//! ## Modules
//!
//! - [`character`] - The combat entity and all its operations
//! - [`class`] - Class tag, class state and level-up growth
//! - [`melee`], [`caster`], [`marksman`] - Class-private state and tuning
//! - [`combat`] - Strikes, mitigation and action outcomes
//! - [`profile`] - Starting stats per class, loadable from JSON
//! - [`snapshot`] - Read-only summaries for display layers
//! - [`character_id`] - Character identifier type
//! - [`error`] - Error types

pub mod caster;
pub mod character;
pub mod character_id;
pub mod class;
pub mod combat;
pub mod error;
pub mod marksman;
pub mod melee;
pub mod profile;
pub mod snapshot;

// Re-export main types for convenience
pub use character::Character;
pub use character_id::CharacterId;
pub use class::{Class, ClassKind, StatGrowth};
pub use combat::{ActionOutcome, Hit, Mitigation, Strike};
pub use error::CombatError;
pub use profile::{BaseStats, ClassProfiles};
pub use snapshot::{CharacterSnapshot, ClassDetail};

// Re-export class state types
pub use caster::CasterState;
pub use marksman::MarksmanState;
pub use melee::MeleeState;
