//! Oracle system for solo play.
//!
//! Provides the fate chart for yes/no questions, random event generation,
//! and the word tables used to interpret events.

pub mod event;
pub mod fate_chart;
pub mod tables;

pub use event::{
    EventFocus, EventMeaning, EventMode, NarrativeEvent, generate_event, is_event_trigger,
    maybe_generate_event,
};
pub use fate_chart::{OddsTier, OracleAnswer, RollOutcome, consult_oracle, evaluate, fate_threshold};
