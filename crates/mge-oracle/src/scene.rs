//! Scene checks for solo play.
//!
//! Before a scene is played the chaos die (d10) is rolled against the chaos
//! factor. A roll equal to the chaos factor interrupts the scene, a lower
//! roll alters it, and anything higher leaves it as expected. Altered scenes
//! are shaped with the scene adjustment table.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chaos::clamp_chaos;

/// How a scene plays out relative to the player's expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneType {
    /// The scene happens as the player expected.
    Expected,
    /// The scene deviates from the expectation.
    Altered,
    /// Something else entirely happens.
    Interrupt,
}

impl std::fmt::Display for SceneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expected => write!(f, "Expected"),
            Self::Altered => write!(f, "Altered"),
            Self::Interrupt => write!(f, "Interrupted"),
        }
    }
}

/// Result of rolling the chaos die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRoll {
    /// The d10 roll (1-10).
    pub roll: u32,
    /// The chaos factor after clamping.
    pub chaos: u32,
    /// The resulting scene type.
    pub scene_type: SceneType,
}

impl std::fmt::Display for SceneRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Scene (roll: {}, chaos: {})",
            self.scene_type, self.roll, self.chaos
        )
    }
}

/// Classify a chaos die roll.
pub fn classify_scene(roll: u32, chaos: u32) -> SceneType {
    if roll == chaos {
        SceneType::Interrupt
    } else if roll <= chaos {
        SceneType::Altered
    } else {
        SceneType::Expected
    }
}

/// Roll the chaos die (d10) for a new scene.
pub fn roll_scene<R: Rng + ?Sized>(chaos: u32, rng: &mut R) -> SceneRoll {
    let chaos = clamp_chaos(i64::from(chaos));
    let roll: u32 = rng.random_range(1..=10);
    let scene_type = classify_scene(roll, chaos);
    debug!(roll, chaos, %scene_type, "chaos die");
    SceneRoll {
        roll,
        chaos,
        scene_type,
    }
}

/// A single change to apply to an altered scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneAdjustment {
    /// Take a character out of the scene.
    RemoveCharacter,
    /// Put a new character into the scene.
    AddCharacter,
    /// Scale an activity down or drop it.
    ReduceActivity,
    /// Make an activity more intense.
    IncreaseActivity,
    /// Take an object out of the scene.
    RemoveObject,
    /// Put a new object into the scene.
    AddObject,
}

impl SceneAdjustment {
    /// All adjustments in table order (d6 faces 1-6).
    pub const ALL: [Self; 6] = [
        Self::RemoveCharacter,
        Self::AddCharacter,
        Self::ReduceActivity,
        Self::IncreaseActivity,
        Self::RemoveObject,
        Self::AddObject,
    ];

    /// Look up the adjustment for a roll of 1-6.
    pub fn from_roll(roll: u32) -> Option<Self> {
        let index = roll.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for SceneAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RemoveCharacter => write!(f, "Remove A Character"),
            Self::AddCharacter => write!(f, "Add A Character"),
            Self::ReduceActivity => write!(f, "Reduce/Remove An Activity"),
            Self::IncreaseActivity => write!(f, "Increase An Activity"),
            Self::RemoveObject => write!(f, "Remove An Object"),
            Self::AddObject => write!(f, "Add An Object"),
        }
    }
}

fn roll_single_adjustment<R: Rng + ?Sized>(rng: &mut R) -> SceneAdjustment {
    SceneAdjustment::ALL[rng.random_range(0..SceneAdjustment::ALL.len())]
}

/// Roll on the scene adjustment table.
///
/// A d10 of 1-6 gives that adjustment; 7-10 means two adjustments, each
/// rolled on a d6.
pub fn roll_adjustments<R: Rng + ?Sized>(rng: &mut R) -> Vec<SceneAdjustment> {
    let roll: u32 = rng.random_range(1..=10);
    let adjustments = match SceneAdjustment::from_roll(roll) {
        Some(adjustment) => vec![adjustment],
        None => vec![roll_single_adjustment(rng), roll_single_adjustment(rng)],
    };
    debug!(roll, ?adjustments, "scene adjustment");
    adjustments
}
