//! Character module.
//!
//! Provides [`Character`], the single combat entity type. A character owns
//! its vitals, combat stats, progression and its [`Class`]; the class decides
//! how basic attacks and special actions are built and what extra growth a
//! level-up brings.
//!
//! Invariants maintained by every mutator:
//!
//! - `0 <= health <= health_max`
//! - `experience < experience_to_next_level` once `gain_experience` returns
//! - `level >= 1` and never decreases
//! - `0 <= mana <= mana_max` for casters

use crate::caster::{CasterState, FIREBALL_COST};
use crate::character_id::CharacterId;
use crate::class::{Class, ClassKind, StatGrowth};
use crate::combat::{mitigate, resolve_strike, ActionOutcome, Mitigation};
use crate::error::CombatError;
use crate::marksman::MarksmanState;
use crate::melee::MeleeState;
use crate::profile::{BaseStats, ClassProfiles};
use crate::snapshot::{CharacterSnapshot, ClassDetail};
use rand::Rng;

/// Experience needed for the first level-up.
pub const FIRST_LEVEL_THRESHOLD: u32 = 100;

/// Experience progression of a character.
#[derive(Debug, Clone, PartialEq)]
struct Progression {
    level: u32,
    experience: u32,
    threshold: u32,
}

impl Progression {
    fn new() -> Self {
        Self {
            level: 1,
            experience: 0,
            threshold: FIRST_LEVEL_THRESHOLD,
        }
    }

    /// Consume one threshold's worth of experience if available.
    ///
    /// The threshold then grows by half, rounded down.
    fn take_level(&mut self) -> bool {
        if self.experience < self.threshold {
            return false;
        }
        self.experience -= self.threshold;
        self.threshold = self.threshold.saturating_add(self.threshold / 2);
        true
    }
}

/// A combat entity: a generic enemy or a Melee, Caster or Marksman hero.
///
/// # Examples
///
/// ```rust
/// use skirmish::Character;
/// use rand::rngs::mock::StepRng;
///
/// let arthur = Character::melee("Arthur");
/// let mut goblin = Character::new("Goblin", 60.0, 18.0, 7.0);
///
/// let outcome = arthur.attack_target(&mut goblin, &mut StepRng::new(0, 0));
/// assert_eq!(outcome.damage(), 18.0); // 25 attack - 7 defense
/// assert_eq!(goblin.health(), 42.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    id: Option<CharacterId>,
    name: String,
    health: f64,
    health_max: f64,
    attack: f64,
    defense: f64,
    progression: Progression,
    class: Class,
}

impl Character {
    /// Create a generic character with explicit stats at full health.
    ///
    /// Negative attack or defense is raised to zero. A non-positive or NaN
    /// health becomes `1.0`.
    pub fn new(name: impl Into<String>, health: f64, attack: f64, defense: f64) -> Self {
        Self::with_class(name, BaseStats::new(health, attack, defense), Class::Generic)
    }

    /// Create a Melee character with the stock profile.
    pub fn melee(name: impl Into<String>) -> Self {
        Self::melee_with(name, &ClassProfiles::MELEE)
    }

    /// Create a Melee character from a loaded profile.
    pub fn melee_with(name: impl Into<String>, stats: &BaseStats) -> Self {
        Self::with_class(name, *stats, Class::Melee(MeleeState::new()))
    }

    /// Create a Caster character with the stock profile.
    pub fn caster(name: impl Into<String>) -> Self {
        Self::caster_with(name, &ClassProfiles::CASTER)
    }

    /// Create a Caster character from a loaded profile.
    pub fn caster_with(name: impl Into<String>, stats: &BaseStats) -> Self {
        Self::with_class(name, *stats, Class::Caster(CasterState::new()))
    }

    /// Create a Marksman character with the stock profile.
    pub fn marksman(name: impl Into<String>) -> Self {
        Self::marksman_with(name, &ClassProfiles::MARKSMAN)
    }

    /// Create a Marksman character from a loaded profile.
    pub fn marksman_with(name: impl Into<String>, stats: &BaseStats) -> Self {
        Self::with_class(name, *stats, Class::Marksman(MarksmanState::new()))
    }

    fn with_class(name: impl Into<String>, stats: BaseStats, class: Class) -> Self {
        let health_max = if stats.health > 0.0 { stats.health } else { 1.0 };
        Self {
            id: None,
            name: name.into(),
            health: health_max,
            health_max,
            attack: non_negative(stats.attack),
            defense: non_negative(stats.defense),
            progression: Progression::new(),
            class,
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn id(&self) -> Option<&CharacterId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn health_max(&self) -> f64 {
        self.health_max
    }

    pub fn attack(&self) -> f64 {
        self.attack
    }

    pub fn defense(&self) -> f64 {
        self.defense
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn experience(&self) -> u32 {
        self.progression.experience
    }

    pub fn experience_to_next_level(&self) -> u32 {
        self.progression.threshold
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    pub fn class_kind(&self) -> ClassKind {
        self.class.kind()
    }

    /// `true` while health is above zero.
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Current mana, for casters.
    pub fn mana(&self) -> Option<f64> {
        self.caster_state().map(CasterState::mana)
    }

    /// Mana capacity, for casters.
    pub fn mana_max(&self) -> Option<f64> {
        self.caster_state().map(CasterState::mana_max)
    }

    /// Magic power, for casters.
    pub fn magic_power(&self) -> Option<f64> {
        self.caster_state().map(CasterState::magic_power)
    }

    /// Critical-hit chance, for marksmen.
    pub fn critical_chance(&self) -> Option<f64> {
        match &self.class {
            Class::Marksman(marksman) => Some(marksman.critical_chance()),
            _ => None,
        }
    }

    /// Defense bonus ratio, for melee characters.
    pub fn defense_bonus_ratio(&self) -> Option<f64> {
        match &self.class {
            Class::Melee(melee) => Some(melee.defense_bonus_ratio()),
            _ => None,
        }
    }

    fn caster_state(&self) -> Option<&CasterState> {
        match &self.class {
            Class::Caster(caster) => Some(caster),
            _ => None,
        }
    }

    // ---------------------------------------------------------------------
    // Identity
    // ---------------------------------------------------------------------

    /// Assign the character's id. Ids can only be assigned once.
    ///
    /// A second assignment is rejected with a warning and the original id
    /// is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skirmish::{Character, CharacterId};
    ///
    /// let mut hero = Character::caster("Merlin");
    /// hero.set_id("m-1").unwrap();
    /// assert!(hero.set_id("m-2").is_err());
    /// assert_eq!(hero.id(), Some(&CharacterId::from_str("m-1")));
    /// ```
    pub fn set_id(&mut self, id: impl Into<CharacterId>) -> Result<(), CombatError> {
        let id = id.into();
        match &self.id {
            None => {
                self.id = Some(id);
                Ok(())
            }
            Some(current) => {
                tracing::warn!(
                    name = %self.name,
                    current = %current,
                    attempted = %id,
                    "id already set; keeping the original"
                );
                Err(CombatError::IdAlreadySet {
                    name: self.name.clone(),
                    current: current.clone(),
                    attempted: id,
                })
            }
        }
    }

    // ---------------------------------------------------------------------
    // Vitals
    // ---------------------------------------------------------------------

    /// Subtract `amount` from health, stopping at zero.
    ///
    /// Negative amounts are ignored, so damage can never heal.
    pub fn take_damage(&mut self, amount: f64) {
        self.health = (self.health - non_negative(amount)).max(0.0);
    }

    /// Add `amount` to health, stopping at `health_max`.
    ///
    /// Healing works on a defeated character too and brings it back.
    pub fn heal(&mut self, amount: f64) {
        self.health = (self.health + non_negative(amount)).min(self.health_max);
    }

    // ---------------------------------------------------------------------
    // Combat
    // ---------------------------------------------------------------------

    /// Physical damage this character's attack stat would deal to `target`:
    /// `max(0, attack - target.defense)`.
    pub fn compute_damage(&self, target: &Character) -> f64 {
        mitigate(self.attack, target.defense, Mitigation::Physical)
    }

    /// Magic damage against `target`: `max(0, magic_power - target.defense / 2)`.
    pub fn compute_magic_damage(&self, target: &Character) -> Result<f64, CombatError> {
        let caster = self.caster_state().ok_or(CombatError::UnsupportedAction {
            class: self.class_kind(),
            action: "compute_magic_damage",
        })?;
        Ok(caster.magic_strike().mitigated_against(target.defense))
    }

    /// Basic attack.
    ///
    /// Every class goes through the same gate: a defeated target is left
    /// alone and the outcome is [`ActionOutcome::TargetDefeated`]. Generic
    /// and Melee characters strike with attack, Casters with magic power,
    /// and Marksmen roll for a critical using `rng`.
    pub fn attack_target<R: Rng + ?Sized>(
        &self,
        target: &mut Character,
        rng: &mut R,
    ) -> ActionOutcome {
        if !target.is_alive() {
            return self.target_defeated(target, "attack");
        }
        let strike = self.class.basic_strike(self.attack, rng);
        ActionOutcome::Hit(resolve_strike(strike, 0.0, target))
    }

    /// Melee special: a basic physical blow plus `10 + 2 × level` damage
    /// that ignores defense.
    pub fn heavy_strike(&self, target: &mut Character) -> Result<ActionOutcome, CombatError> {
        if !matches!(self.class, Class::Melee(_)) {
            return Err(self.unsupported("heavy_strike"));
        }
        if !target.is_alive() {
            return Ok(self.target_defeated(target, "heavy_strike"));
        }
        let (strike, bonus) = MeleeState::heavy_strike(self.attack, self.level());
        Ok(ActionOutcome::Hit(resolve_strike(strike, bonus, target)))
    }

    /// Caster special: costs [`FIREBALL_COST`] mana and deals magic damage
    /// plus `20 + 3 × level`.
    ///
    /// If the caster cannot pay, nothing changes and the outcome is
    /// [`ActionOutcome::InsufficientMana`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skirmish::{ActionOutcome, Character};
    ///
    /// let mut merlin = Character::caster("Merlin");
    /// let mut goblin = Character::new("Goblin", 200.0, 18.0, 8.0);
    ///
    /// // 30 magic power - 8 / 2 defense + 23 bonus
    /// let outcome = merlin.cast_fireball(&mut goblin).unwrap();
    /// assert_eq!(outcome.damage(), 49.0);
    /// assert_eq!(merlin.mana(), Some(35.0));
    /// ```
    pub fn cast_fireball(&mut self, target: &mut Character) -> Result<ActionOutcome, CombatError> {
        let level = self.progression.level;
        let caster = match &mut self.class {
            Class::Caster(caster) => caster,
            _ => return Err(self.unsupported("cast_fireball")),
        };
        if !target.is_alive() {
            tracing::debug!(
                actor = %self.name,
                target = %target.name,
                action = "cast_fireball",
                "target already defeated"
            );
            return Ok(ActionOutcome::TargetDefeated);
        }
        if !caster.spend(FIREBALL_COST) {
            tracing::debug!(
                actor = %self.name,
                required = FIREBALL_COST,
                available = caster.mana(),
                "cast_fireball: insufficient mana"
            );
            return Ok(ActionOutcome::InsufficientMana {
                required: FIREBALL_COST,
                available: caster.mana(),
            });
        }
        let (strike, bonus) = caster.fireball(level);
        Ok(ActionOutcome::Hit(resolve_strike(strike, bonus, target)))
    }

    /// Marksman special: `attack × 1.2`, critical with probability
    /// `critical_chance + 0.2` for `× 1.8`, then physical mitigation.
    pub fn precise_shot<R: Rng + ?Sized>(
        &self,
        target: &mut Character,
        rng: &mut R,
    ) -> Result<ActionOutcome, CombatError> {
        let marksman = match &self.class {
            Class::Marksman(marksman) => marksman,
            _ => return Err(self.unsupported("precise_shot")),
        };
        if !target.is_alive() {
            return Ok(self.target_defeated(target, "precise_shot"));
        }
        let strike = marksman.precise_shot(self.attack, rng);
        Ok(ActionOutcome::Hit(resolve_strike(strike, 0.0, target)))
    }

    /// Perform this character's class special against `target`.
    ///
    /// Generic characters have no special action.
    pub fn special_action<R: Rng + ?Sized>(
        &mut self,
        target: &mut Character,
        rng: &mut R,
    ) -> Result<ActionOutcome, CombatError> {
        match self.class {
            Class::Melee(_) => self.heavy_strike(target),
            Class::Caster(_) => self.cast_fireball(target),
            Class::Marksman(_) => self.precise_shot(target, rng),
            Class::Generic => Err(self.unsupported("special_action")),
        }
    }

    /// Refill mana by `amount`, clamped to `mana_max`. Returns the new
    /// mana value.
    pub fn restore_mana(&mut self, amount: f64) -> Result<f64, CombatError> {
        match &mut self.class {
            Class::Caster(caster) => Ok(caster.restore(non_negative(amount))),
            _ => Err(self.unsupported("restore_mana")),
        }
    }

    fn unsupported(&self, action: &'static str) -> CombatError {
        CombatError::UnsupportedAction {
            class: self.class_kind(),
            action,
        }
    }

    fn target_defeated(&self, target: &Character, action: &str) -> ActionOutcome {
        tracing::debug!(actor = %self.name, target = %target.name, action, "target already defeated");
        ActionOutcome::TargetDefeated
    }

    // ---------------------------------------------------------------------
    // Progression
    // ---------------------------------------------------------------------

    /// Add experience and level up as many times as it pays for.
    ///
    /// Returns the number of levels gained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skirmish::Character;
    ///
    /// let mut hero = Character::new("Hero", 100.0, 10.0, 5.0);
    /// assert_eq!(hero.gain_experience(250), 2);
    /// assert_eq!(hero.level(), 3);
    /// assert_eq!(hero.experience(), 0);
    /// assert_eq!(hero.experience_to_next_level(), 225);
    /// ```
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.progression.experience = self.progression.experience.saturating_add(amount);
        let mut gained = 0;
        while self.progression.take_level() {
            self.level_up();
            gained += 1;
        }
        gained
    }

    /// Advance one level: base growth plus the class's own growth, then
    /// restore health to the new maximum.
    pub fn level_up(&mut self) {
        self.progression.level += 1;
        let extra = self.class.level_up();
        self.grow(StatGrowth::BASE);
        self.grow(extra);
        self.health = self.health_max;

        tracing::info!(
            name = %self.name,
            class = %self.class_kind(),
            level = self.progression.level,
            "level up"
        );
    }

    fn grow(&mut self, growth: StatGrowth) {
        self.health_max += growth.health_max;
        self.attack += growth.attack;
        self.defense += growth.defense;
    }

    // ---------------------------------------------------------------------
    // Presentation
    // ---------------------------------------------------------------------

    /// Read-only snapshot for display layers.
    pub fn describe(&self) -> CharacterSnapshot {
        let detail = match &self.class {
            Class::Generic => ClassDetail::Generic,
            Class::Melee(melee) => ClassDetail::Melee {
                defense_bonus_ratio: melee.defense_bonus_ratio(),
            },
            Class::Caster(caster) => ClassDetail::Caster {
                mana: caster.mana(),
                mana_max: caster.mana_max(),
                magic_power: caster.magic_power(),
            },
            Class::Marksman(marksman) => ClassDetail::Marksman {
                critical_chance: marksman.critical_chance(),
            },
        };

        CharacterSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            level: self.progression.level,
            health: self.health,
            health_max: self.health_max,
            attack: self.attack,
            defense: self.defense,
            experience: self.progression.experience,
            experience_to_next_level: self.progression.threshold,
            detail,
        }
    }
}

/// Map negative and NaN inputs to zero.
fn non_negative(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}
