//! Configuration for an oracle.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chaos::clamp_chaos;
use crate::oracle::EventMode;

/// Configuration for an [`Oracle`](crate::Oracle).
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Chaos factor used when no game session supplies one (0-9).
    pub initial_chaos: u32,
    /// Whether random events carry meaning words.
    pub event_mode: EventMode,
    /// Plot point dataset to load instead of the bundled one.
    pub dataset: Option<PathBuf>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_chaos: 5,
            event_mode: EventMode::Meaning,
            dataset: None,
        }
    }
}

impl OracleConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial chaos factor (clamped to 0-9).
    pub fn with_chaos(mut self, chaos: i64) -> Self {
        self.initial_chaos = clamp_chaos(chaos);
        self
    }

    /// Set the event mode.
    pub fn with_event_mode(mut self, mode: EventMode) -> Self {
        self.event_mode = mode;
        self
    }

    /// Load plot points from a file instead of the bundled dataset.
    pub fn with_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset = Some(path.into());
        self
    }

    /// Build the random source described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
