//! Game session record.
//!
//! A session owns the two pieces of state the oracle reads between rolls:
//! the chaos factor and the theme order shuffled when the game was created.
//! Storage is left to the caller; the record is plain serde data.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::chaos::ChaosFactor;
use crate::error::{OracleError, OracleResult};
use crate::theme::ThemeOrder;

/// Shortest allowed game name.
pub const MIN_GAME_NAME_LEN: usize = 3;

/// Longest allowed game name.
pub const MAX_GAME_NAME_LEN: usize = 32;

/// Names reserved by the front end.
pub const RESERVED_GAME_NAMES: &[&str] = &["current", "list"];

/// Trim a game name and collapse runs of spaces.
pub fn sanitize_game_name(name: &str) -> String {
    name.split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Check a game name: 3-32 ASCII letters, digits or spaces, not reserved.
///
/// The name is sanitized first; the sanitized form is returned.
pub fn validate_game_name(name: &str) -> OracleResult<String> {
    let name = sanitize_game_name(name);
    if name.is_empty() {
        return Err(OracleError::InvalidGameName(
            "game name cannot be empty".to_string(),
        ));
    }
    if name.len() < MIN_GAME_NAME_LEN {
        return Err(OracleError::InvalidGameName(format!(
            "game name must be at least {MIN_GAME_NAME_LEN} characters"
        )));
    }
    if name.len() > MAX_GAME_NAME_LEN {
        return Err(OracleError::InvalidGameName(format!(
            "game name cannot be longer than {MAX_GAME_NAME_LEN} characters"
        )));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        return Err(OracleError::InvalidGameName(
            "game name can only contain letters, numbers, and spaces".to_string(),
        ));
    }
    if RESERVED_GAME_NAMES
        .iter()
        .any(|reserved| name.eq_ignore_ascii_case(reserved))
    {
        return Err(OracleError::InvalidGameName(format!(
            "game cannot be named '{name}'"
        )));
    }
    Ok(name)
}

/// A game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Validated game name.
    pub name: String,
    /// Current chaos factor.
    pub chaos: ChaosFactor,
    /// Theme order, fixed for the life of the game.
    pub themes: ThemeOrder,
    /// When the game was created.
    pub created_at: DateTime<Utc>,
    /// When the chaos factor last changed.
    pub updated_at: DateTime<Utc>,
}

impl GameSession {
    /// Start a new game with a freshly shuffled theme order.
    pub fn new<R: Rng + ?Sized>(name: &str, chaos: ChaosFactor, rng: &mut R) -> OracleResult<Self> {
        let name = validate_game_name(name)?;
        let now = Utc::now();
        Ok(Self {
            name,
            chaos,
            themes: ThemeOrder::new(rng),
            created_at: now,
            updated_at: now,
        })
    }

    /// Close a scene: chaos drops if it went well for the player, rises if not.
    pub fn end_scene(&mut self, went_well: bool) {
        if went_well {
            self.chaos.decrease();
        } else {
            self.chaos.increase();
        }
        self.updated_at = Utc::now();
    }

    /// Set the chaos factor directly (clamped to 0-9).
    pub fn set_chaos(&mut self, value: i64) {
        self.chaos = ChaosFactor::new(value);
        self.updated_at = Utc::now();
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> OracleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> OracleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
