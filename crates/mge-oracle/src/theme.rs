//! Adventure themes and the per-session theme order.
//!
//! Each game session shuffles the five themes once. Plot point rolls then
//! pick a theme weighted by its position in that order: the first theme is
//! picked 40% of the time, the second 30%, the third 20%, and the last two
//! share the remaining 10%.

use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OracleError, OracleResult};

/// A narrative focus category for plot points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThemeType {
    /// Fights, chases and physical danger.
    Action,
    /// Suspense and looming threats.
    Tension,
    /// Secrets and investigation.
    Mystery,
    /// Relationships and negotiation.
    Social,
    /// The characters' own history and goals.
    Personal,
}

impl ThemeType {
    /// The five themes in their canonical order.
    pub const ALL: [Self; 5] = [
        Self::Action,
        Self::Tension,
        Self::Mystery,
        Self::Social,
        Self::Personal,
    ];

    /// Theme name as used in datasets and persisted orders.
    pub fn name(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Tension => "Tension",
            Self::Mystery => "Mystery",
            Self::Social => "Social",
            Self::Personal => "Personal",
        }
    }

    /// Position of this theme in `ThemeType::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ThemeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeType {
    type Err = OracleError;

    /// Case-insensitive exact match on the theme name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| OracleError::UnknownTheme(s.to_string()))
    }
}

/// Map a d10 roll (and a coin flip for a roll of 10) to a position 0-4.
pub fn position_for_roll(roll: u32, coin: bool) -> usize {
    match roll {
        0..=4 => 0,
        5..=7 => 1,
        8..=9 => 2,
        _ if coin => 3,
        _ => 4,
    }
}

/// A session's ordering of the five themes.
///
/// Always a permutation: every theme exactly once. Persisted as a
/// comma-joined list such as `Mystery,Action,Social,Tension,Personal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeOrder([ThemeType; 5]);

impl ThemeOrder {
    /// Shuffle the five themes into a new order.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut themes = ThemeType::ALL;
        themes.shuffle(rng);
        Self(themes)
    }

    /// Build an order from explicit themes, rejecting duplicates.
    pub fn from_themes(themes: [ThemeType; 5]) -> OracleResult<Self> {
        for (i, theme) in themes.iter().enumerate() {
            if themes[..i].contains(theme) {
                return Err(OracleError::InvalidThemeOrder {
                    input: join(&themes),
                    reason: format!("duplicate theme {theme}"),
                });
            }
        }
        Ok(Self(themes))
    }

    /// The themes in order, most favored first.
    pub fn themes(&self) -> &[ThemeType; 5] {
        &self.0
    }

    /// The theme at a position (0-4).
    pub fn at(&self, position: usize) -> Option<ThemeType> {
        self.0.get(position).copied()
    }

    /// Pick a theme weighted by position.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ThemeType {
        let roll: u32 = rng.random_range(1..=10);
        let coin = roll == 10 && rng.random_bool(0.5);
        let theme = self.0[position_for_roll(roll, coin)];
        debug!(roll, %theme, "theme sample");
        theme
    }
}

impl Default for ThemeOrder {
    fn default() -> Self {
        Self(ThemeType::ALL)
    }
}

fn join(themes: &[ThemeType]) -> String {
    themes
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(",")
}

impl std::fmt::Display for ThemeOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&join(&self.0))
    }
}

impl FromStr for ThemeOrder {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 5 {
            return Err(OracleError::InvalidThemeOrder {
                input: s.to_string(),
                reason: format!("expected 5 themes, got {}", parts.len()),
            });
        }
        let mut themes = ThemeType::ALL;
        for (slot, part) in themes.iter_mut().zip(parts) {
            *slot = part.parse()?;
        }
        Self::from_themes(themes)
    }
}

impl TryFrom<String> for ThemeOrder {
    type Error = OracleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeOrder> for String {
    fn from(order: ThemeOrder) -> Self {
        order.to_string()
    }
}
