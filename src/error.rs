//! Error types for the combat core.
//!
//! Expected gameplay outcomes (a defeated target, not enough mana) are
//! not errors; they are reported through [`ActionOutcome`](crate::ActionOutcome).
//! `CombatError` covers misuse of the API and bad configuration.

use crate::character_id::CharacterId;
use crate::class::ClassKind;
use thiserror::Error;

/// Errors raised by the combat core.
///
/// # Examples
///
/// ```rust
/// use skirmish::{CombatError, ClassKind};
///
/// let err = CombatError::UnsupportedAction {
///     class: ClassKind::Melee,
///     action: "cast_fireball",
/// };
/// assert_eq!(err.to_string(), "Melee characters cannot perform cast_fireball");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CombatError {
    /// The character already carries an id; the original is kept.
    #[error("Cannot change id of {name} from {current} to {attempted}: id already set")]
    IdAlreadySet {
        name: String,
        current: CharacterId,
        attempted: CharacterId,
    },

    /// A class-specific operation was invoked on a character of another class.
    #[error("{class} characters cannot perform {action}")]
    UnsupportedAction {
        class: ClassKind,
        action: &'static str,
    },

    /// A class profile failed to parse or holds out-of-range stats.
    #[error("Invalid class profile: {0}")]
    InvalidProfile(String),
}
