//! Caster class state.
//!
//! Casters attack with magic power instead of attack, and magic only has
//! to get through half of the target's defense. Mana is kept within
//! `[0, mana_max]` by every mutator in this module.

use crate::class::StatGrowth;
use crate::combat::Strike;

/// Mana cost of a fireball.
pub const FIREBALL_COST: f64 = 15.0;

const MANA_START: f64 = 50.0;
const MAGIC_POWER_START: f64 = 30.0;

/// Private state of a Caster character.
#[derive(Debug, Clone, PartialEq)]
pub struct CasterState {
    mana: f64,
    mana_max: f64,
    magic_power: f64,
}

impl CasterState {
    pub fn new() -> Self {
        Self {
            mana: MANA_START,
            mana_max: MANA_START,
            magic_power: MAGIC_POWER_START,
        }
    }

    pub fn mana(&self) -> f64 {
        self.mana
    }

    pub fn mana_max(&self) -> f64 {
        self.mana_max
    }

    pub fn magic_power(&self) -> f64 {
        self.magic_power
    }

    /// The unmitigated magic blow.
    pub(crate) fn magic_strike(&self) -> Strike {
        Strike::magical(self.magic_power)
    }

    /// Pay `cost` mana. Returns `false` and leaves mana untouched if the
    /// pool is too small.
    pub(crate) fn spend(&mut self, cost: f64) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana -= cost;
        true
    }

    /// Add mana, clamped to `mana_max`. Returns the new mana value.
    pub(crate) fn restore(&mut self, amount: f64) -> f64 {
        self.mana = (self.mana + amount).min(self.mana_max);
        self.mana
    }

    /// Fireball: the magic blow plus a flat, unmitigated `20 + 3 × level`
    /// bonus. Does not pay the cost.
    pub(crate) fn fireball(&self, level: u32) -> (Strike, f64) {
        let bonus = 20.0 + f64::from(level) * 3.0;
        (self.magic_strike(), bonus)
    }

    pub(crate) fn level_up(&mut self) -> StatGrowth {
        self.mana_max += 15.0;
        self.mana = self.mana_max;
        self.magic_power += 7.0;
        StatGrowth::default()
    }
}

impl Default for CasterState {
    fn default() -> Self {
        Self::new()
    }
}
