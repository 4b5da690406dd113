//! File-backed game storage: one pretty JSON file per game.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use mge_oracle::GameSession;
use mge_oracle::session::validate_game_name;

/// Games stored as `<dir>/<file stem>.json`.
pub struct GameStore {
    dir: PathBuf,
}

/// Turn a validated game name into a file stem: lowercase, spaces to hyphens.
fn file_stem(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

impl GameStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, String> {
        let name = validate_game_name(name).map_err(|e| e.to_string())?;
        Ok(self.dir.join(format!("{}.json", file_stem(&name))))
    }

    /// Save a new game, failing if one with the same name already exists.
    pub fn create(&self, game: &GameSession) -> Result<PathBuf, String> {
        let path = self.path_for(&game.name)?;
        if path.exists() {
            return Err(format!("game '{}' already exists", game.name));
        }
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("failed to create {}: {e}", self.dir.display()))?;
        write_game(&path, game)?;
        info!(name = %game.name, path = %path.display(), "created game");
        Ok(path)
    }

    /// Overwrite an existing game.
    pub fn save(&self, game: &GameSession) -> Result<(), String> {
        let path = self.path_for(&game.name)?;
        write_game(&path, game)?;
        debug!(name = %game.name, chaos = game.chaos.value(), "saved game");
        Ok(())
    }

    pub fn load(&self, name: &str) -> Result<GameSession, String> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(format!("no game named '{}'", name.trim()));
        }
        let json = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        GameSession::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
    }

    /// All readable games, sorted by name. Unreadable files are skipped.
    pub fn list(&self) -> Result<Vec<GameSession>, String> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.dir)
            .map_err(|e| format!("failed to read {}: {e}", self.dir.display()))?;

        let mut games: Vec<GameSession> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|p| match fs::read_to_string(&p) {
                Ok(json) => match GameSession::from_json(&json) {
                    Ok(game) => Some(game),
                    Err(e) => {
                        debug!(path = %p.display(), error = %e, "skipping unreadable game");
                        None
                    }
                },
                Err(_) => None,
            })
            .collect();
        games.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(games)
    }
}

fn write_game(path: &Path, game: &GameSession) -> Result<(), String> {
    let json = game.to_json().map_err(|e| e.to_string())?;
    fs::write(path, json).map_err(|e| format!("failed to write {}: {e}", path.display()))
}
