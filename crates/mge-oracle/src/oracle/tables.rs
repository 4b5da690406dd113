//! Word tables for random event interpretation.
//!
//! `ACTION_WORDS` and `SUBJECT_WORDS` give every event its core pair. The
//! two meaning action tables and two descriptor tables are compound tables:
//! one word is drawn from each half and read together.

use rand::Rng;

/// Action words for the core event pair.
pub const ACTION_WORDS: &[&str] = &[
    "Abandon", "Accuse", "Advance", "Alarm", "Ally", "Ambush", "Argue", "Arrest",
    "Assist", "Attack", "Bargain", "Befriend", "Betray", "Block", "Boast", "Break",
    "Bribe", "Capture", "Celebrate", "Challenge", "Change", "Chase", "Claim",
    "Collapse", "Command", "Conceal", "Confess", "Confront", "Corrupt", "Create",
    "Curse", "Deceive", "Defend", "Delay", "Demand", "Deny", "Desert", "Destroy",
    "Discover", "Disguise", "Dominate", "Escape", "Expose", "Fail", "Flee",
    "Follow", "Forgive", "Guard", "Guide", "Hide", "Hunt", "Ignore", "Imprison",
    "Inherit", "Inspire", "Investigate", "Invite", "Join", "Judge", "Kidnap",
    "Lose", "Lure", "Mislead", "Mourn", "Negotiate", "Neglect", "Observe",
    "Oppose", "Pursue", "Question", "Raid", "Rebel", "Recover", "Recruit",
    "Refuse", "Release", "Repair", "Rescue", "Reveal", "Reward", "Rob", "Sabotage",
    "Search", "Seize", "Separate", "Spy", "Steal", "Summon", "Surrender", "Test",
    "Threaten", "Trade", "Transform", "Trap", "Travel", "Trick", "Trust", "Unite",
    "Usurp", "Warn",
];

/// Subject words for the core event pair.
pub const SUBJECT_WORDS: &[&str] = &[
    "Advice", "Allies", "Ambition", "Animals", "Army", "Art", "Authority",
    "Balance", "Bloodline", "Border", "Bridge", "Burden", "Cargo", "Ceremony",
    "Child", "Community", "Contract", "Corruption", "Court", "Crime", "Curse",
    "Danger", "Debt", "Deception", "Disease", "Dreams", "Duty", "Enemies",
    "Environment", "Evidence", "Exile", "Faith", "Fame", "Family", "Fear",
    "Fire", "Food", "Fortune", "Freedom", "Friendship", "Gate", "Ghost", "Goals",
    "Gold", "Guild", "Guilt", "Harvest", "Heir", "History", "Home", "Honor",
    "Hope", "Hunger", "Ideas", "Illness", "Information", "Inheritance", "Journey",
    "Knowledge", "Land", "Law", "Leadership", "Legend", "Letter", "Lies", "Love",
    "Machine", "Magic", "Map", "Memory", "Message", "Military", "Mob", "Monster",
    "News", "Oath", "Outsider", "Pain", "Past", "Peace", "Plans", "Poison",
    "Power", "Prison", "Prophecy", "Relic", "Revenge", "Riches", "Rival", "Rumor",
    "Ruins", "Secret", "Shelter", "Storm", "Stranger", "Technology", "Treaty",
    "Vehicle", "Weapon", "Weather",
];

/// First half of the meaning action table.
pub const MEANING_ACTIONS_1: &[&str] = &[
    "Abandon", "Accompany", "Activate", "Agree", "Ambush", "Arrive", "Assist",
    "Attack", "Attain", "Bargain", "Befriend", "Bestow", "Betray", "Block",
    "Break", "Carry", "Celebrate", "Change", "Close", "Combine", "Communicate",
    "Conceal", "Continue", "Control", "Create", "Deceive", "Decrease", "Defend",
    "Delay", "Deny", "Depart", "Deposit", "Destroy", "Dispute", "Disrupt",
    "Distrust", "Divide", "Drop", "Escape", "Expose", "Fail", "Fight", "Flee",
    "Free", "Guide", "Harm", "Heal", "Hinder", "Imitate", "Imprison", "Increase",
    "Indulge", "Inform", "Inquire", "Inspect", "Invade", "Leave", "Lure",
    "Misuse", "Move", "Neglect", "Observe", "Open", "Oppose", "Overthrow",
    "Praise", "Proceed", "Protect", "Punish", "Pursue", "Recruit", "Refuse",
    "Release", "Relinquish", "Repair", "Repulse", "Return", "Reward", "Ruin",
    "Separate", "Start", "Stop", "Struggle", "Succeed", "Support", "Suppress",
    "Take", "Threaten", "Transform", "Trap", "Travel", "Triumph", "Truce",
    "Trust", "Use", "Usurp", "Waste",
];

/// Second half of the meaning action table.
pub const MEANING_ACTIONS_2: &[&str] = &[
    "Advantage", "Adversity", "Agreement", "Animal", "Attention", "Balance",
    "Battle", "Benefits", "Building", "Burden", "Bureaucracy", "Business",
    "Chaos", "Comfort", "Completion", "Conflict", "Cooperation", "Danger",
    "Defense", "Depletion", "Disadvantage", "Distraction", "Elements", "Emotion",
    "Enemy", "Energy", "Environment", "Expectation", "Exterior", "Extravagance",
    "Failure", "Fame", "Fear", "Freedom", "Friend", "Goal", "Group", "Health",
    "Hindrance", "Home", "Hope", "Idea", "Illness", "Illusion", "Individual",
    "Information", "Innocent", "Intellect", "Interior", "Investment",
    "Leadership", "Legal", "Location", "Military", "Misfortune", "Mundane",
    "Nature", "Needs", "News", "Normal", "Object", "Obscurity", "Official",
    "Opposition", "Outside", "Pain", "Path", "Peace", "People", "Personal",
    "Physical", "Plot", "Portal", "Possessions", "Poverty", "Power", "Prison",
    "Project", "Protection", "Reassurance", "Representative", "Riches", "Safety",
    "Strength", "Success", "Suffering", "Surprise", "Tactic", "Technology",
    "Tension", "Time", "Trial", "Value", "Vehicle", "Victory", "Vulnerability",
    "Weapon", "Weather", "Work", "Wound",
];

/// First half of the descriptor table (adverbs).
pub const DESCRIPTOR_WORDS_1: &[&str] = &[
    "Adventurously", "Aggressively", "Anxiously", "Awkwardly", "Beautifully",
    "Bleakly", "Boldly", "Bravely", "Busily", "Calmly", "Carefully",
    "Carelessly", "Cautiously", "Ceaselessly", "Cheerfully", "Combatively",
    "Coolly", "Crazily", "Curiously", "Dangerously", "Defiantly", "Deliberately",
    "Delicately", "Delightfully", "Dimly", "Efficiently", "Emotionally",
    "Energetically", "Enormously", "Enthusiastically", "Excitedly", "Fearfully",
    "Ferociously", "Fiercely", "Foolishly", "Fortunately", "Frantically",
    "Freely", "Frighteningly", "Fully", "Generously", "Gently", "Gladly",
    "Gracefully", "Gratefully", "Happily", "Hastily", "Healthily", "Helpfully",
    "Helplessly", "Hopelessly", "Innocently", "Intensely", "Interestingly",
    "Irritatingly", "Joyfully", "Kindly", "Lazily", "Lightly", "Loosely",
    "Loudly", "Lovingly", "Loyally", "Majestically", "Meaningfully",
    "Mechanically", "Mildly", "Miserably", "Mockingly", "Mysteriously",
    "Naturally", "Neatly", "Nicely", "Oddly", "Offensively", "Officially",
    "Partially", "Passively", "Peacefully", "Perfectly", "Playfully", "Politely",
    "Positively", "Powerfully", "Quaintly", "Quarrelsomely", "Quietly",
    "Roughly", "Rudely", "Ruthlessly", "Slowly", "Softly", "Strangely",
    "Swiftly", "Threateningly", "Timidly", "Very", "Violently", "Wildly",
    "Yieldingly",
];

/// Second half of the descriptor table (adjectives).
pub const DESCRIPTOR_WORDS_2: &[&str] = &[
    "Abnormal", "Amusing", "Artificial", "Average", "Beautiful", "Bizarre",
    "Boring", "Bright", "Broken", "Clean", "Cold", "Colorful", "Colorless",
    "Comforting", "Creepy", "Cute", "Damaged", "Dark", "Defeated", "Dirty",
    "Disagreeable", "Dry", "Dull", "Empty", "Enormous", "Extraordinary",
    "Extravagant", "Faded", "Familiar", "Fancy", "Feeble", "Festive", "Flawless",
    "Forlorn", "Fragile", "Fragrant", "Fresh", "Full", "Glorious", "Graceful",
    "Hard", "Harsh", "Healthy", "Heavy", "Historical", "Horrible", "Important",
    "Interesting", "Juvenile", "Lacking", "Large", "Lavish", "Lean", "Less",
    "Lethal", "Lively", "Lonely", "Lovely", "Magnificent", "Mature", "Messy",
    "Mighty", "Military", "Modern", "Mundane", "Mysterious", "Natural", "Normal",
    "Odd", "Old", "Pale", "Peaceful", "Petite", "Plain", "Poor", "Powerful",
    "Protective", "Quaint", "Rare", "Reassuring", "Remarkable", "Rotten", "Rough",
    "Ruined", "Rustic", "Scary", "Shocking", "Simple", "Small", "Smooth", "Soft",
    "Strong", "Stylish", "Unpleasant", "Valuable", "Vibrant", "Warm", "Watery",
    "Weak", "Young",
];

/// Pick one word uniformly from a non-empty table.
pub fn pick<R: Rng + ?Sized>(table: &'static [&'static str], rng: &mut R) -> &'static str {
    table[rng.random_range(0..table.len())]
}
