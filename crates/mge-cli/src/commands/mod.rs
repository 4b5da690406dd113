pub mod ask;
pub mod chart;
pub mod event;
pub mod game;
pub mod plot;
pub mod scene;
pub mod themes;

use std::path::PathBuf;

use rand::rngs::StdRng;
use serde::Serialize;

use mge_oracle::chaos::clamp_chaos;
use mge_oracle::{EventMode, Oracle, OracleConfig};

use crate::store::GameStore;

/// Options shared by every subcommand.
pub struct Context {
    pub seed: Option<u64>,
    pub dataset: Option<PathBuf>,
    pub state_dir: PathBuf,
    pub json: bool,
    pub plain: bool,
}

impl Context {
    fn config(&self) -> OracleConfig {
        let mut config = OracleConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(path) = &self.dataset {
            config = config.with_dataset(path);
        }
        if self.plain {
            config = config.with_event_mode(EventMode::Plain);
        }
        config
    }

    /// Build the oracle and the random source for one invocation.
    fn oracle(&self) -> Result<(Oracle, StdRng), String> {
        let config = self.config();
        let oracle =
            Oracle::from_config(&config).map_err(|e| format!("failed to load oracle: {e}"))?;
        Ok((oracle, config.rng()))
    }

    fn store(&self) -> GameStore {
        GameStore::new(&self.state_dir)
    }

    /// Chaos from the flag, else from the named game, else the default.
    fn chaos(&self, chaos: Option<i64>, game: Option<&str>) -> Result<u32, String> {
        match (chaos, game) {
            (Some(value), _) => Ok(clamp_chaos(value)),
            (None, Some(name)) => Ok(self.store().load(name)?.chaos.value()),
            (None, None) => Ok(self.config().initial_chaos),
        }
    }
}

/// Print a value as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
