//! Error types for the oracle engine.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while resolving oracle questions or loading tables.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No odds tier matches the given name.
    #[error("unknown odds tier: {0}")]
    UnknownTier(String),

    /// More than one odds tier matches the given prefix.
    #[error("ambiguous odds tier '{input}': matches {candidates}")]
    AmbiguousTier {
        /// What the caller typed.
        input: String,
        /// Comma-separated list of matching tier names.
        candidates: String,
    },

    /// No theme matches the given name.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// A persisted theme order is not a permutation of the five themes.
    #[error("invalid theme order '{input}': {reason}")]
    InvalidThemeOrder {
        /// The persisted text.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A d100 roll outside 1-100 was passed to a table lookup.
    #[error("roll out of range (1-100): {roll} for {theme}")]
    RollOutOfRange {
        /// The offending roll.
        roll: i32,
        /// Theme name, or "meta" for the meta plot point table.
        theme: String,
    },

    /// No plot point row qualifies for the roll and theme.
    #[error("no plot point found for roll {roll} and theme {theme}")]
    NoPlotPoint {
        /// The roll that was looked up.
        roll: i32,
        /// The theme that was looked up.
        theme: String,
    },

    /// No meta plot point row qualifies for the roll.
    #[error("no meta plot point found for roll {0}")]
    NoMetaPlotPoint(i32),

    /// The plot point dataset could not be parsed or failed validation.
    #[error("invalid plot point dataset ({format} format): {reason}")]
    InvalidDataset {
        /// Which format was attempted ("primary", "legacy", or "primary+legacy").
        format: &'static str,
        /// Why the dataset was rejected.
        reason: String,
    },

    /// A game name failed validation.
    #[error("invalid game name: {0}")]
    InvalidGameName(String),

    /// Reading a dataset or session file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
