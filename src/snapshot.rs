//! Character snapshots.
//!
//! A [`CharacterSnapshot`] is the read-only view handed to display layers.
//! It is copyable, serializable and never fed back into combat logic.

use crate::character_id::CharacterId;
use crate::class::ClassKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Class-specific part of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum ClassDetail {
    Generic,
    Melee {
        defense_bonus_ratio: f64,
    },
    Caster {
        mana: f64,
        mana_max: f64,
        magic_power: f64,
    },
    Marksman {
        critical_chance: f64,
    },
}

impl ClassDetail {
    pub fn kind(&self) -> ClassKind {
        match self {
            ClassDetail::Generic => ClassKind::Generic,
            ClassDetail::Melee { .. } => ClassKind::Melee,
            ClassDetail::Caster { .. } => ClassKind::Caster,
            ClassDetail::Marksman { .. } => ClassKind::Marksman,
        }
    }
}

/// Point-in-time summary of a character.
///
/// # Examples
///
/// ```rust
/// use skirmish::Character;
///
/// let snapshot = Character::marksman("Legolas").describe();
/// assert_eq!(
///     snapshot.to_string(),
///     "[Legolas] Level: 1, Health: 90/90, Attack: 22, Defense: 10, XP: 0/100, Critical Chance: 20%"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub id: Option<CharacterId>,
    pub name: String,
    pub level: u32,
    pub health: f64,
    pub health_max: f64,
    pub attack: f64,
    pub defense: f64,
    pub experience: u32,
    pub experience_to_next_level: u32,
    pub detail: ClassDetail,
}

impl fmt::Display for CharacterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Level: {}, Health: {}/{}, Attack: {}, Defense: {}, XP: {}/{}",
            self.name,
            self.level,
            self.health,
            self.health_max,
            self.attack,
            self.defense,
            self.experience,
            self.experience_to_next_level
        )?;
        match &self.detail {
            ClassDetail::Generic => Ok(()),
            ClassDetail::Melee {
                defense_bonus_ratio,
            } => write!(f, ", Defense Bonus: {:.0}%", defense_bonus_ratio * 100.0),
            ClassDetail::Caster {
                mana,
                mana_max,
                magic_power,
            } => write!(f, ", Mana: {mana}/{mana_max}, Magic Power: {magic_power}"),
            ClassDetail::Marksman { critical_chance } => {
                write!(f, ", Critical Chance: {:.0}%", critical_chance * 100.0)
            }
        }
    }
}
