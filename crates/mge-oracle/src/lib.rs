//! Solo game-master emulator oracle.
//!
//! Answers yes/no questions on the fate chart, generates random events,
//! rolls the chaos die for scenes, keeps a per-session theme order, and
//! looks up plot points and meta plot points. Every random operation takes
//! the caller's random source.

pub mod chaos;
pub mod config;
pub mod engine;
pub mod error;
pub mod oracle;
pub mod plot;
pub mod scene;
pub mod session;
pub mod theme;

pub use chaos::ChaosFactor;
pub use config::OracleConfig;
pub use engine::{MetaRoll, Oracle, PlotRoll, SceneCheck};
pub use error::{OracleError, OracleResult};
pub use oracle::{EventMode, NarrativeEvent, OddsTier, OracleAnswer, RollOutcome};
pub use plot::{MetaPlotPoint, PlotPoint, PlotPointTable};
pub use scene::{SceneAdjustment, SceneRoll, SceneType};
pub use session::GameSession;
pub use theme::{ThemeOrder, ThemeType};
