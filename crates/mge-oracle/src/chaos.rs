//! Chaos factor tracking.
//!
//! The chaos factor (0-9) represents how volatile the story has become.
//! Higher chaos raises the fate chart thresholds, makes random events more
//! likely and lets the scene die disrupt more scenes.

use serde::{Deserialize, Serialize};

/// Lowest chaos factor.
pub const MIN_CHAOS: u32 = 0;

/// Highest chaos factor.
pub const MAX_CHAOS: u32 = 9;

/// Clamp a raw chaos value into `MIN_CHAOS..=MAX_CHAOS`.
pub fn clamp_chaos(value: i64) -> u32 {
    value.clamp(i64::from(MIN_CHAOS), i64::from(MAX_CHAOS)) as u32
}

/// The chaos factor, ranging from 0 (orderly) to 9 (chaotic).
///
/// Starts at 5 by default. Increases when scenes go badly for the player,
/// decreases when they go well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct ChaosFactor {
    value: u32,
}

impl ChaosFactor {
    /// Create a new chaos factor, clamped to 0-9.
    pub fn new(value: i64) -> Self {
        Self {
            value: clamp_chaos(value),
        }
    }

    /// Get the current chaos value.
    pub fn value(self) -> u32 {
        self.value
    }

    /// Increase chaos by 1 (max 9).
    pub fn increase(&mut self) {
        self.value = (self.value + 1).min(MAX_CHAOS);
    }

    /// Decrease chaos by 1 (min 0).
    pub fn decrease(&mut self) {
        self.value = self.value.saturating_sub(1);
    }
}

impl Default for ChaosFactor {
    fn default() -> Self {
        Self::new(5)
    }
}

impl From<i64> for ChaosFactor {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<ChaosFactor> for u32 {
    fn from(chaos: ChaosFactor) -> Self {
        chaos.value
    }
}

impl std::fmt::Display for ChaosFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
