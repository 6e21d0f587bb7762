//! Melee class state.

use crate::class::StatGrowth;
use crate::combat::Strike;

/// Starting defense bonus ratio of a Melee character.
pub const DEFENSE_BONUS_START: f64 = 0.10;

/// Defense bonus ratio gained per level.
pub const DEFENSE_BONUS_PER_LEVEL: f64 = 0.01;

/// Private state of a Melee character.
#[derive(Debug, Clone, PartialEq)]
pub struct MeleeState {
    defense_bonus_ratio: f64,
}

impl MeleeState {
    pub fn new() -> Self {
        Self {
            defense_bonus_ratio: DEFENSE_BONUS_START,
        }
    }

    pub fn defense_bonus_ratio(&self) -> f64 {
        self.defense_bonus_ratio
    }

    /// Heavy strike: the physical blow of a basic attack plus a flat,
    /// unmitigated `10 + 2 × level` bonus.
    pub(crate) fn heavy_strike(attack: f64, level: u32) -> (Strike, f64) {
        let bonus = 10.0 + f64::from(level) * 2.0;
        (Strike::physical(attack), bonus)
    }

    pub(crate) fn level_up(&mut self) -> StatGrowth {
        self.defense_bonus_ratio += DEFENSE_BONUS_PER_LEVEL;
        StatGrowth {
            health_max: 30.0,
            attack: 0.0,
            defense: 5.0,
        }
    }
}

impl Default for MeleeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heavy_strike_bonus_scales_with_level() {
        let (strike, bonus) = MeleeState::heavy_strike(25.0, 1);
        assert_eq!(strike.raw, 25.0);
        assert_eq!(bonus, 12.0);

        let (_, bonus) = MeleeState::heavy_strike(25.0, 4);
        assert_eq!(bonus, 18.0);
    }

    #[test]
    fn test_level_up_raises_bonus_ratio() {
        let mut melee = MeleeState::new();
        let growth = melee.level_up();
        assert!((melee.defense_bonus_ratio() - 0.11).abs() < 1e-9);
        assert_eq!(growth.health_max, 30.0);
        assert_eq!(growth.defense, 5.0);
    }
}
