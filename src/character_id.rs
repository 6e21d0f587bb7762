//! Character identifier module.
//!
//! Provides the `CharacterId` type, an interned string identifier
//! assigned to characters by whoever manages the roster.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Interned string identifier for characters.
///
/// Uses `Arc<str>` so that cloning an id into a snapshot or a log
/// line never reallocates.
///
/// # Examples
///
/// ```rust
/// use skirmish::CharacterId;
///
/// let a = CharacterId::from_str("hero-1");
/// let b: CharacterId = "hero-1".into();
/// let c: CharacterId = String::from("hero-1").into();
///
/// assert_eq!(a, b);
/// assert_eq!(a, c);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CharacterId(Arc<str>);

impl Serialize for CharacterId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CharacterId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CharacterId::from(s))
    }
}

impl CharacterId {
    /// Create a new `CharacterId` from a string slice.
    ///
    /// Roster managers usually derive ids from a save slot or spawn counter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skirmish::{Character, CharacterId};
    ///
    /// let mut goblin = Character::new("Goblin", 60.0, 18.0, 7.0);
    /// goblin.set_id(CharacterId::from_str(&format!("enemy-{}", 3))).unwrap();
    /// assert_eq!(goblin.id().map(CharacterId::as_str), Some("enemy-3"));
    /// ```
    pub fn from_str(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skirmish::CharacterId;
    ///
    /// let id: CharacterId = "hero-1".into();
    /// assert_eq!(id.as_str(), "hero-1");
    /// assert_eq!(id.to_string(), id.as_str());
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for CharacterId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
