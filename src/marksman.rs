//! Marksman class state.

use crate::class::StatGrowth;
use crate::combat::Strike;
use rand::Rng;

/// Critical chance of a freshly created Marksman.
pub const CRITICAL_CHANCE_START: f64 = 0.20;

/// Critical chance never grows past this value through leveling.
pub const CRITICAL_CHANCE_CAP: f64 = 0.50;

/// Raw damage multiplier of a critical basic attack.
pub const BASIC_CRITICAL_MULTIPLIER: f64 = 1.5;

/// Precise shot tuning.
pub const PRECISE_SHOT_ATTACK_FACTOR: f64 = 1.2;
pub const PRECISE_SHOT_EXTRA_CHANCE: f64 = 0.20;
pub const PRECISE_SHOT_CRITICAL_MULTIPLIER: f64 = 1.8;

/// Private state of a Marksman character.
#[derive(Debug, Clone, PartialEq)]
pub struct MarksmanState {
    critical_chance: f64,
}

impl MarksmanState {
    pub fn new() -> Self {
        Self {
            critical_chance: CRITICAL_CHANCE_START,
        }
    }

    pub fn critical_chance(&self) -> f64 {
        self.critical_chance
    }

    pub(crate) fn basic_strike<R: Rng + ?Sized>(&self, attack: f64, rng: &mut R) -> Strike {
        Strike::physical(attack).with_critical_roll(
            rng,
            self.critical_chance,
            BASIC_CRITICAL_MULTIPLIER,
        )
    }

    pub(crate) fn precise_shot<R: Rng + ?Sized>(&self, attack: f64, rng: &mut R) -> Strike {
        Strike::physical(attack * PRECISE_SHOT_ATTACK_FACTOR).with_critical_roll(
            rng,
            self.critical_chance + PRECISE_SHOT_EXTRA_CHANCE,
            PRECISE_SHOT_CRITICAL_MULTIPLIER,
        )
    }

    pub(crate) fn level_up(&mut self) -> StatGrowth {
        self.critical_chance = (self.critical_chance + 0.02).min(CRITICAL_CHANCE_CAP);
        StatGrowth {
            health_max: 0.0,
            attack: 7.0,
            defense: 0.0,
        }
    }
}

impl Default for MarksmanState {
    fn default() -> Self {
        Self::new()
    }
}
