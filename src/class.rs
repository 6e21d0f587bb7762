//! Character classes.
//!
//! A character is either a plain [`Generic`](Class::Generic) combatant or one
//! of three specialised classes. Each class owns its private resource state
//! and decides two things:
//!
//! - the raw [`Strike`] of its basic attack
//! - the extra [`StatGrowth`] it gains on level-up
//!
//! Mitigation and health bookkeeping stay in [`combat`](crate::combat) and
//! [`Character`](crate::Character).

use crate::caster::CasterState;
use crate::combat::Strike;
use crate::marksman::MarksmanState;
use crate::melee::MeleeState;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fieldless tag naming a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Generic,
    Melee,
    Caster,
    Marksman,
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassKind::Generic => "Generic",
            ClassKind::Melee => "Melee",
            ClassKind::Caster => "Caster",
            ClassKind::Marksman => "Marksman",
        };
        f.write_str(name)
    }
}

/// Increase applied to the shared stat block on level-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatGrowth {
    pub health_max: f64,
    pub attack: f64,
    pub defense: f64,
}

impl StatGrowth {
    /// Growth every character receives, regardless of class.
    pub const BASE: StatGrowth = StatGrowth {
        health_max: 15.0,
        attack: 3.0,
        defense: 2.0,
    };
}

/// The class of a character together with its class-private state.
#[derive(Debug, Clone, PartialEq)]
pub enum Class {
    Generic,
    Melee(MeleeState),
    Caster(CasterState),
    Marksman(MarksmanState),
}

impl Class {
    /// The tag of this class.
    pub fn kind(&self) -> ClassKind {
        match self {
            Class::Generic => ClassKind::Generic,
            Class::Melee(_) => ClassKind::Melee,
            Class::Caster(_) => ClassKind::Caster,
            Class::Marksman(_) => ClassKind::Marksman,
        }
    }

    /// Build the strike of a basic attack.
    ///
    /// Only the Marksman consumes randomness; other classes leave `rng`
    /// untouched.
    pub(crate) fn basic_strike<R: Rng + ?Sized>(&self, attack: f64, rng: &mut R) -> Strike {
        match self {
            Class::Generic | Class::Melee(_) => Strike::physical(attack),
            Class::Caster(caster) => caster.magic_strike(),
            Class::Marksman(marksman) => marksman.basic_strike(attack, rng),
        }
    }

    /// Advance class-private state by one level and return the extra
    /// growth for the shared stat block.
    pub(crate) fn level_up(&mut self) -> StatGrowth {
        match self {
            Class::Generic => StatGrowth::default(),
            Class::Melee(melee) => melee.level_up(),
            Class::Caster(caster) => caster.level_up(),
            Class::Marksman(marksman) => marksman.level_up(),
        }
    }
}
