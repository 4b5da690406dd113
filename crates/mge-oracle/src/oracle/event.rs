//! Random event generation.
//!
//! A fate chart roll of 11, 22, ..., 99 whose tens digit does not exceed the
//! chaos factor triggers a random event. The event focus is rolled on a
//! weighted d100 table, then action and subject words are picked for the
//! player to interpret. In meaning mode the event also carries two extra
//! action words and two descriptors.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tables::{
    ACTION_WORDS, DESCRIPTOR_WORDS_1, DESCRIPTOR_WORDS_2, MEANING_ACTIONS_1, MEANING_ACTIONS_2,
    SUBJECT_WORDS, pick,
};

/// What a random event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventFocus {
    /// Something happens elsewhere that affects the story.
    Remote,
    /// An event that could go either way.
    Ambiguous,
    /// A new NPC enters the story.
    NewNpc,
    /// An NPC takes independent action.
    NpcAction,
    /// Something bad happens to an NPC.
    NpcNegative,
    /// Something good happens to an NPC.
    NpcPositive,
    /// An open thread advances.
    MoveTowardThread,
    /// An open thread is set back.
    MoveAwayFromThread,
    /// An open thread resolves.
    CloseThread,
    /// Something bad happens to the player character.
    PcNegative,
    /// Something good happens to the player character.
    PcPositive,
    /// The event builds on whatever is happening right now.
    CurrentContext,
}

/// Upper bound (inclusive) of each focus range on the d100, in table order.
const FOCUS_TABLE: [(u32, EventFocus); 12] = [
    (5, EventFocus::Remote),
    (10, EventFocus::Ambiguous),
    (20, EventFocus::NewNpc),
    (40, EventFocus::NpcAction),
    (45, EventFocus::NpcNegative),
    (50, EventFocus::NpcPositive),
    (55, EventFocus::MoveTowardThread),
    (65, EventFocus::MoveAwayFromThread),
    (70, EventFocus::CloseThread),
    (80, EventFocus::PcNegative),
    (85, EventFocus::PcPositive),
    (100, EventFocus::CurrentContext),
];

impl EventFocus {
    /// All focus categories in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        FOCUS_TABLE.iter().map(|(_, focus)| *focus)
    }

    /// Look up the focus for a d100 roll. Returns `None` outside 1-100.
    pub fn from_roll(roll: u32) -> Option<Self> {
        if roll == 0 {
            return None;
        }
        FOCUS_TABLE
            .iter()
            .find(|(upper, _)| roll <= *upper)
            .map(|(_, focus)| *focus)
    }

    /// The d100 sub-range this focus occupies.
    pub fn range(self) -> std::ops::RangeInclusive<u32> {
        let pos = FOCUS_TABLE
            .iter()
            .position(|(_, focus)| *focus == self)
            .unwrap_or_default();
        let low = if pos == 0 { 1 } else { FOCUS_TABLE[pos - 1].0 + 1 };
        low..=FOCUS_TABLE[pos].0
    }

    /// Display text used when rendering an event.
    pub fn text(self) -> &'static str {
        match self {
            Self::Remote => "Remote event",
            Self::Ambiguous => "Ambiguous event",
            Self::NewNpc => "New NPC",
            Self::NpcAction => "NPC Action",
            Self::NpcNegative => "NPC Negative",
            Self::NpcPositive => "NPC Positive",
            Self::MoveTowardThread => "Move Toward a Thread",
            Self::MoveAwayFromThread => "Move Away From a Thread",
            Self::CloseThread => "Close a Thread",
            Self::PcNegative => "PC Negative",
            Self::PcPositive => "PC Positive",
            Self::CurrentContext => "Current Context",
        }
    }
}

impl std::fmt::Display for EventFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Whether generated events carry extra meaning words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventMode {
    /// Focus, action and subject only.
    Plain,
    /// Also two meaning actions and two descriptors.
    #[default]
    Meaning,
}

/// Extra words that sharpen an event's interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeaning {
    /// Two action words, one from each meaning action table.
    pub actions: [String; 2],
    /// Two descriptors, one from each descriptor table.
    pub descriptors: [String; 2],
}

/// A generated random event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeEvent {
    /// What the event is about.
    pub focus: EventFocus,
    /// Action word.
    pub action: String,
    /// Subject word.
    pub subject: String,
    /// Optional meaning words.
    pub meaning: Option<EventMeaning>,
}

impl std::fmt::Display for NarrativeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} {}", self.focus, self.action, self.subject)?;
        if let Some(meaning) = &self.meaning {
            write!(
                f,
                " ({} {}, {} {})",
                meaning.descriptors[0],
                meaning.descriptors[1],
                meaning.actions[0],
                meaning.actions[1]
            )?;
        }
        Ok(())
    }
}

/// Check if a fate chart roll triggers a random event.
///
/// The roll must be a multiple of 11 in 1-100 whose tens digit is at most
/// the chaos factor. At chaos 0 nothing triggers.
pub fn is_event_trigger(roll: i32, chaos: u32) -> bool {
    (1..=100).contains(&roll) && roll % 11 == 0 && (roll / 11) as u32 <= chaos
}

/// Roll on the event focus table (d100).
pub fn roll_event_focus<R: Rng + ?Sized>(rng: &mut R) -> EventFocus {
    let roll: u32 = rng.random_range(1..=100);
    match EventFocus::from_roll(roll) {
        Some(focus) => focus,
        None => unreachable!("d100 roll {roll} outside focus table"),
    }
}

/// Roll the two meaning actions and two descriptors.
pub fn roll_meaning<R: Rng + ?Sized>(rng: &mut R) -> EventMeaning {
    EventMeaning {
        actions: [
            pick(MEANING_ACTIONS_1, rng).to_string(),
            pick(MEANING_ACTIONS_2, rng).to_string(),
        ],
        descriptors: [
            pick(DESCRIPTOR_WORDS_1, rng).to_string(),
            pick(DESCRIPTOR_WORDS_2, rng).to_string(),
        ],
    }
}

/// Generate a complete random event.
pub fn generate_event<R: Rng + ?Sized>(mode: EventMode, rng: &mut R) -> NarrativeEvent {
    let focus = roll_event_focus(rng);
    let action = pick(ACTION_WORDS, rng).to_string();
    let subject = pick(SUBJECT_WORDS, rng).to_string();
    let meaning = match mode {
        EventMode::Plain => None,
        EventMode::Meaning => Some(roll_meaning(rng)),
    };
    let event = NarrativeEvent {
        focus,
        action,
        subject,
        meaning,
    };
    debug!(%event, "random event");
    event
}

/// Generate an event only if the fate chart roll triggers one.
pub fn maybe_generate_event<R: Rng + ?Sized>(
    roll: i32,
    chaos: u32,
    mode: EventMode,
    rng: &mut R,
) -> Option<NarrativeEvent> {
    is_event_trigger(roll, chaos).then(|| generate_event(mode, rng))
}
