//! Combat resolution module.
//!
//! Every attack, basic or special, is built in two steps:
//!
//! ```text
//! [Strike] → mitigate → take_damage → [Hit]
//! ```
//!
//! 1. The attacker's class builds a [`Strike`]: raw damage, mitigation kind
//!    and whether it was a critical.
//! 2. [`resolve_strike`] subtracts the target's defense and applies the
//!    result to the target's health.
//!
//! Classes only decide the raw number; mitigation and application are shared.

use crate::character::Character;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a target's defense reduces incoming damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mitigation {
    /// Full defense is subtracted.
    Physical,
    /// Half of the defense is subtracted.
    Magical,
}

impl Mitigation {
    /// The portion of `defense` this mitigation subtracts.
    pub fn effective_defense(self, defense: f64) -> f64 {
        match self {
            Mitigation::Physical => defense,
            Mitigation::Magical => defense / 2.0,
        }
    }
}

/// Reduce `raw` damage by `defense` under the given mitigation.
///
/// Never returns a negative number.
///
/// # Examples
///
/// ```rust
/// use skirmish::combat::{mitigate, Mitigation};
///
/// assert_eq!(mitigate(25.0, 7.0, Mitigation::Physical), 18.0);
/// assert_eq!(mitigate(30.0, 7.0, Mitigation::Magical), 26.5);
/// assert_eq!(mitigate(10.0, 500.0, Mitigation::Physical), 0.0);
/// ```
pub fn mitigate(raw: f64, defense: f64, mitigation: Mitigation) -> f64 {
    let damage = raw - mitigation.effective_defense(defense);
    if damage > 0.0 {
        damage
    } else {
        0.0
    }
}

/// A blow that has been computed but not yet applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    /// Damage before the target's defense is taken into account.
    pub raw: f64,
    pub mitigation: Mitigation,
    pub critical: bool,
}

impl Strike {
    /// A non-critical physical strike.
    pub fn physical(raw: f64) -> Self {
        Self {
            raw,
            mitigation: Mitigation::Physical,
            critical: false,
        }
    }

    /// A non-critical magical strike.
    pub fn magical(raw: f64) -> Self {
        Self {
            raw,
            mitigation: Mitigation::Magical,
            critical: false,
        }
    }

    /// Roll for a critical: with probability `chance` the raw damage is
    /// multiplied by `multiplier` and the strike is flagged critical.
    pub fn with_critical_roll<R: Rng + ?Sized>(
        mut self,
        rng: &mut R,
        chance: f64,
        multiplier: f64,
    ) -> Self {
        if roll_below(rng, chance) {
            self.raw *= multiplier;
            self.critical = true;
        }
        self
    }

    /// Damage this strike deals to a target with the given defense.
    pub fn mitigated_against(&self, defense: f64) -> f64 {
        mitigate(self.raw, defense, self.mitigation)
    }
}

/// The result of a strike that landed on a living target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Damage before mitigation.
    pub raw: f64,
    /// Damage actually subtracted from the target's health budget.
    pub damage: f64,
    pub critical: bool,
    /// This hit took the target from alive to defeated.
    pub lethal: bool,
}

/// What happened when an action was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The action landed.
    Hit(Hit),
    /// The target was already defeated; nothing changed.
    TargetDefeated,
    /// The actor could not pay the mana cost; nothing changed.
    InsufficientMana { required: f64, available: f64 },
}

impl ActionOutcome {
    /// Whether the action changed any state.
    pub fn landed(&self) -> bool {
        matches!(self, ActionOutcome::Hit(_))
    }

    /// Damage dealt, or `0.0` if the action did not land.
    pub fn damage(&self) -> f64 {
        match self {
            ActionOutcome::Hit(hit) => hit.damage,
            _ => 0.0,
        }
    }

    /// The hit, if the action landed.
    pub fn hit(&self) -> Option<&Hit> {
        match self {
            ActionOutcome::Hit(hit) => Some(hit),
            _ => None,
        }
    }
}

/// Draw a uniform value in `[0, 1)` and compare it against `chance`.
///
/// A chance of `0.0` never succeeds and a chance of `1.0` or more
/// always does.
pub fn roll_below<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> bool {
    rng.gen::<f64>() < chance
}

/// Mitigate `strike` against `target` and apply it.
///
/// `bonus` is added after mitigation, so flat bonuses of the Melee and
/// Caster specials are never reduced by defense. Callers are responsible
/// for the alive gate; see [`Character::attack_target`].
pub(crate) fn resolve_strike(strike: Strike, bonus: f64, target: &mut Character) -> Hit {
    let damage = strike.mitigated_against(target.defense()) + bonus;
    let was_alive = target.is_alive();
    target.take_damage(damage);
    let lethal = was_alive && !target.is_alive();

    tracing::debug!(
        target = %target.name(),
        raw = strike.raw,
        damage,
        critical = strike.critical,
        lethal,
        "hit applied"
    );

    Hit {
        raw: strike.raw,
        damage,
        critical: strike.critical,
        lethal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_mitigation_floors_at_zero() {
        assert_eq!(mitigate(5.0, 100.0, Mitigation::Physical), 0.0);
        assert_eq!(mitigate(5.0, 100.0, Mitigation::Magical), 0.0);
    }

    #[test]
    fn test_magical_mitigation_halves_defense() {
        assert_eq!(mitigate(30.0, 15.0, Mitigation::Magical), 22.5);
        assert_eq!(mitigate(30.0, 15.0, Mitigation::Physical), 15.0);
    }

    #[test]
    fn test_roll_below_with_fixed_source() {
        let mut low = StepRng::new(0, 0);
        assert!(roll_below(&mut low, 0.2));
        assert!(!roll_below(&mut low, 0.0));

        let mut high = StepRng::new(u64::MAX, 0);
        assert!(!roll_below(&mut high, 0.5));
        assert!(roll_below(&mut high, 1.0));
    }

    #[test]
    fn test_critical_roll_multiplies_raw() {
        let mut rng = StepRng::new(0, 0);
        let strike = Strike::physical(20.0).with_critical_roll(&mut rng, 0.2, 1.5);
        assert!(strike.critical);
        assert_eq!(strike.raw, 30.0);

        let mut rng = StepRng::new(u64::MAX, 0);
        let strike = Strike::physical(20.0).with_critical_roll(&mut rng, 0.2, 1.5);
        assert!(!strike.critical);
        assert_eq!(strike.raw, 20.0);
    }

    #[test]
    fn test_resolve_strike_reports_lethal() {
        let mut target = Character::new("Dummy", 10.0, 0.0, 2.0);
        let hit = resolve_strike(Strike::physical(20.0), 0.0, &mut target);
        assert_eq!(hit.damage, 18.0);
        assert!(hit.lethal);
        assert_eq!(target.health(), 0.0);
    }

    #[test]
    fn test_outcome_helpers() {
        let outcome = ActionOutcome::InsufficientMana {
            required: 15.0,
            available: 10.0,
        };
        assert!(!outcome.landed());
        assert_eq!(outcome.damage(), 0.0);
        assert!(outcome.hit().is_none());
    }
}
