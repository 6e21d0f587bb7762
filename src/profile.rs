//! Class profiles.
//!
//! The starting stats of each class are data, not code. `ClassProfiles`
//! defaults to the stock values and can be loaded from JSON so a game can
//! rebalance classes without touching the combat rules.

use crate::error::CombatError;
use serde::{Deserialize, Serialize};

/// Starting vitals and combat stats of a character.
///
/// # Examples
///
/// ```rust
/// use skirmish::BaseStats;
///
/// let goblin = BaseStats::new(60.0, 18.0, 7.0);
/// assert!(goblin.validate("goblin").is_ok());
/// assert!(BaseStats::new(0.0, 18.0, 7.0).validate("ghost").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub health: f64,
    pub attack: f64,
    pub defense: f64,
}

impl BaseStats {
    pub const fn new(health: f64, attack: f64, defense: f64) -> Self {
        Self {
            health,
            attack,
            defense,
        }
    }

    /// Check that health is positive and attack and defense are not
    /// negative. `label` names the profile in the error message.
    pub fn validate(&self, label: &str) -> Result<(), CombatError> {
        if self.health.is_nan() || self.health <= 0.0 {
            return Err(CombatError::InvalidProfile(format!(
                "{label}.health must be > 0, got {}",
                self.health
            )));
        }
        if self.attack.is_nan() || self.attack < 0.0 {
            return Err(CombatError::InvalidProfile(format!(
                "{label}.attack must be >= 0, got {}",
                self.attack
            )));
        }
        if self.defense.is_nan() || self.defense < 0.0 {
            return Err(CombatError::InvalidProfile(format!(
                "{label}.defense must be >= 0, got {}",
                self.defense
            )));
        }
        Ok(())
    }
}

/// A class entry as written in a profile document; absent fields are
/// taken from the class's stock stats.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialStats {
    health: Option<f64>,
    attack: Option<f64>,
    defense: Option<f64>,
}

impl PartialStats {
    fn over(self, stock: BaseStats) -> BaseStats {
        BaseStats {
            health: self.health.unwrap_or(stock.health),
            attack: self.attack.unwrap_or(stock.attack),
            defense: self.defense.unwrap_or(stock.defense),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfilesDocument {
    melee: PartialStats,
    caster: PartialStats,
    marksman: PartialStats,
}

impl From<ProfilesDocument> for ClassProfiles {
    fn from(doc: ProfilesDocument) -> Self {
        Self {
            melee: doc.melee.over(Self::MELEE),
            caster: doc.caster.over(Self::CASTER),
            marksman: doc.marksman.over(Self::MARKSMAN),
        }
    }
}

/// Starting stats for every specialised class.
///
/// Classes or single fields missing from a JSON document keep their
/// stock values.
///
/// # Examples
///
/// ```rust
/// use skirmish::ClassProfiles;
///
/// let profiles = ClassProfiles::from_json(
///     r#"{ "caster": { "health": 95.0 } }"#,
/// ).unwrap();
///
/// assert_eq!(profiles.caster.health, 95.0);
/// assert_eq!(profiles.caster.attack, 10.0);
/// assert_eq!(profiles.melee, ClassProfiles::default().melee);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProfilesDocument")]
pub struct ClassProfiles {
    pub melee: BaseStats,
    pub caster: BaseStats,
    pub marksman: BaseStats,
}

impl ClassProfiles {
    pub const MELEE: BaseStats = BaseStats::new(120.0, 25.0, 15.0);
    pub const CASTER: BaseStats = BaseStats::new(80.0, 10.0, 8.0);
    pub const MARKSMAN: BaseStats = BaseStats::new(90.0, 22.0, 10.0);

    /// Parse profiles from a JSON document and validate every entry.
    pub fn from_json(json: &str) -> Result<Self, CombatError> {
        let profiles: ClassProfiles =
            serde_json::from_str(json).map_err(|e| CombatError::InvalidProfile(e.to_string()))?;
        profiles.validate()?;
        Ok(profiles)
    }

    /// Validate every profile.
    pub fn validate(&self) -> Result<(), CombatError> {
        self.melee.validate("melee")?;
        self.caster.validate("caster")?;
        self.marksman.validate("marksman")
    }
}

impl Default for ClassProfiles {
    fn default() -> Self {
        Self {
            melee: Self::MELEE,
            caster: Self::CASTER,
            marksman: Self::MARKSMAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let profiles = ClassProfiles::default();
        assert_eq!(profiles.melee, BaseStats::new(120.0, 25.0, 15.0));
        assert_eq!(profiles.caster, BaseStats::new(80.0, 10.0, 8.0));
        assert_eq!(profiles.marksman, BaseStats::new(90.0, 22.0, 10.0));
    }

    #[test]
    fn test_empty_document_is_default() {
        let profiles = ClassProfiles::from_json("{}").unwrap();
        assert_eq!(profiles, ClassProfiles::default());
    }

    #[test]
    fn test_partial_entry_fills_from_class_stock() {
        let profiles = ClassProfiles::from_json(
            r#"{ "caster": { "health": 95.0 }, "marksman": { "defense": 4.0 } }"#,
        )
        .unwrap();
        assert_eq!(profiles.caster, BaseStats::new(95.0, 10.0, 8.0));
        assert_eq!(profiles.marksman, BaseStats::new(90.0, 22.0, 4.0));
        assert_eq!(profiles.melee, ClassProfiles::MELEE);
    }

    #[test]
    fn test_serialized_profiles_load_back() {
        let json = serde_json::to_string(&ClassProfiles::default()).unwrap();
        assert_eq!(ClassProfiles::from_json(&json).unwrap(), ClassProfiles::default());
    }

    #[test]
    fn test_rejects_negative_defense() {
        let err = ClassProfiles::from_json(
            r#"{ "marksman": { "health": 90.0, "attack": 22.0, "defense": -1.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CombatError::InvalidProfile(msg) if msg.contains("marksman.defense")));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = ClassProfiles::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CombatError::InvalidProfile(_)));
    }
}
