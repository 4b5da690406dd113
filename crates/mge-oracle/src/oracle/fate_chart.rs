//! Fate chart oracle for yes/no questions.
//!
//! The fate chart maps a combination of odds tier and chaos factor to a
//! percentile threshold. A d100 roll at or below the threshold is a "Yes";
//! the lowest fifth of the yes range is an Exceptional Yes and the top fifth
//! of the no range is an Exceptional No. Doubles that do not exceed the chaos
//! factor also trigger a random event.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::event::{EventMode, NarrativeEvent, generate_event, is_event_trigger};
use crate::chaos::{MAX_CHAOS, clamp_chaos};
use crate::error::{OracleError, OracleResult};

/// How likely the player thinks the answer is "Yes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OddsTier {
    /// Should not happen.
    Impossible,
    /// Almost never happens.
    NearlyImpossible,
    /// Very unlikely.
    VeryUnlikely,
    /// Unlikely.
    Unlikely,
    /// Even odds.
    FiftyFifty,
    /// Likely.
    Likely,
    /// Very likely.
    VeryLikely,
    /// Almost always happens.
    NearlyCertain,
    /// Should happen.
    Certain,
}

impl OddsTier {
    /// All tiers in order from least to most likely.
    pub const ALL: [Self; 9] = [
        Self::Impossible,
        Self::NearlyImpossible,
        Self::VeryUnlikely,
        Self::Unlikely,
        Self::FiftyFifty,
        Self::Likely,
        Self::VeryLikely,
        Self::NearlyCertain,
        Self::Certain,
    ];

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Impossible => "Impossible",
            Self::NearlyImpossible => "Nearly Impossible",
            Self::VeryUnlikely => "Very Unlikely",
            Self::Unlikely => "Unlikely",
            Self::FiftyFifty => "Fifty Fifty",
            Self::Likely => "Likely",
            Self::VeryLikely => "Very Likely",
            Self::NearlyCertain => "Nearly Certain",
            Self::Certain => "Certain",
        }
    }

    /// Resolve a user-supplied tier name.
    ///
    /// Case, spaces, dashes and underscores are ignored, and `50/50` is an
    /// alias for Fifty Fifty. Any unambiguous prefix of a canonical name is
    /// accepted. When a prefix matches several tiers, an exact match wins;
    /// otherwise the input is rejected as ambiguous.
    pub fn parse(input: &str) -> OracleResult<Self> {
        let key = normalize(input);
        if key.is_empty() {
            return Err(OracleError::UnknownTier(input.to_string()));
        }
        if key == "5050" {
            return Ok(Self::FiftyFifty);
        }

        let matches: Vec<Self> = Self::ALL
            .into_iter()
            .filter(|tier| normalize(tier.name()).starts_with(&key))
            .collect();

        match matches.as_slice() {
            [] => Err(OracleError::UnknownTier(input.to_string())),
            [only] => Ok(*only),
            many => many
                .iter()
                .copied()
                .find(|tier| normalize(tier.name()) == key)
                .ok_or_else(|| OracleError::AmbiguousTier {
                    input: input.to_string(),
                    candidates: many
                        .iter()
                        .map(|t| t.name())
                        .collect::<Vec<_>>()
                        .join(", "),
                }),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for OddsTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for OddsTier {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The oracle's answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OracleAnswer {
    /// Strong yes, beyond what was expected.
    ExceptionalYes,
    /// Affirmative.
    Yes,
    /// Negative.
    No,
    /// Strong no, worse than expected.
    ExceptionalNo,
}

impl std::fmt::Display for OracleAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExceptionalYes => write!(f, "Exceptional Yes"),
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
            Self::ExceptionalNo => write!(f, "Exceptional No"),
        }
    }
}

/// The full result of a fate chart consultation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The odds tier the question was asked at.
    pub tier: OddsTier,
    /// The chaos factor after clamping.
    pub chaos: u32,
    /// The "Yes" threshold from the fate chart (may be below 0 or above 100).
    pub threshold: i32,
    /// The d100 roll (1-100).
    pub roll: i32,
    /// The oracle's answer.
    pub answer: OracleAnswer,
    /// A random event, if the roll triggered one.
    pub event: Option<NarrativeEvent>,
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, chaos {}): roll {} vs {}",
            self.answer, self.tier, self.chaos, self.roll, self.threshold
        )
    }
}

/// Fate chart thresholds: `FATE_CHART[tier][MAX_CHAOS - chaos]`.
///
/// Column 0 is chaos 9, column 8 is chaos 1.
const FATE_CHART: [[i32; 9]; 9] = [
    // chaos: 9   8    7   6   5   4   3   2   1
    [50, 25, 15, 10, 5, 5, 0, 0, -20],      // Impossible
    [75, 50, 35, 25, 15, 10, 5, 5, 0],      // Nearly Impossible
    [85, 65, 50, 45, 25, 15, 10, 5, 5],     // Very Unlikely
    [90, 75, 55, 50, 35, 20, 15, 10, 5],    // Unlikely
    [95, 85, 75, 65, 50, 35, 25, 15, 10],   // Fifty Fifty
    [100, 95, 90, 85, 75, 55, 50, 35, 25],  // Likely
    [105, 95, 95, 90, 85, 75, 65, 50, 45],  // Very Likely
    [115, 100, 95, 95, 90, 80, 75, 55, 50], // Nearly Certain
    [125, 110, 95, 95, 90, 85, 80, 65, 55], // Certain
];

/// Look up the "Yes" threshold for a tier and chaos factor.
///
/// Chaos is clamped to 0-9. The chart has no separate chaos-0 column, so
/// chaos 0 shares the chaos-1 column.
pub fn fate_threshold(tier: OddsTier, chaos: u32) -> i32 {
    let chaos = clamp_chaos(i64::from(chaos));
    let column = ((MAX_CHAOS - chaos) as usize).min(FATE_CHART[0].len() - 1);
    FATE_CHART[tier.index()][column]
}

/// Upper bound (inclusive) of the Exceptional Yes range.
pub fn exceptional_yes_bound(threshold: i32) -> i32 {
    threshold / 5
}

/// Lower bound (inclusive) of the Exceptional No range.
pub fn exceptional_no_bound(threshold: i32) -> i32 {
    (100 - threshold) / 5 * 4 + threshold + 1
}

/// Classify a d100 roll against a threshold.
///
/// Pure integer arithmetic; thresholds outside 0-100 are not clamped.
pub fn evaluate(threshold: i32, roll: i32) -> OracleAnswer {
    if roll <= exceptional_yes_bound(threshold) {
        OracleAnswer::ExceptionalYes
    } else if roll <= threshold {
        OracleAnswer::Yes
    } else if roll >= exceptional_no_bound(threshold) {
        OracleAnswer::ExceptionalNo
    } else {
        OracleAnswer::No
    }
}

/// Ask the fate chart a yes/no question.
///
/// Rolls d100 once, classifies it, and generates a random event when the
/// roll is a double no greater than the chaos factor.
pub fn consult_oracle<R: Rng + ?Sized>(
    tier: OddsTier,
    chaos: u32,
    mode: EventMode,
    rng: &mut R,
) -> RollOutcome {
    let chaos = clamp_chaos(i64::from(chaos));
    let threshold = fate_threshold(tier, chaos);
    let roll: i32 = rng.random_range(1..=100);
    let answer = evaluate(threshold, roll);

    debug!(
        %tier,
        chaos,
        threshold,
        roll,
        exceptional_yes = exceptional_yes_bound(threshold),
        exceptional_no = exceptional_no_bound(threshold),
        %answer,
        "fate chart roll"
    );

    let event = if is_event_trigger(roll, chaos) {
        Some(generate_event(mode, rng))
    } else {
        None
    };

    RollOutcome {
        tier,
        chaos,
        threshold,
        roll,
        answer,
        event,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_tier_and_chaos_has_a_threshold() {
        for tier in OddsTier::ALL {
            for chaos in 0..=9 {
                let t = fate_threshold(tier, chaos);
                assert!((-20..=125).contains(&t), "{tier} chaos {chaos}: {t}");
            }
        }
    }

    #[test]
    fn column_zero_is_max_chaos() {
        assert_eq!(fate_threshold(OddsTier::Certain, 9), 125);
        assert_eq!(fate_threshold(OddsTier::Impossible, 9), 50);
        assert_eq!(fate_threshold(OddsTier::Impossible, 1), -20);
        assert_eq!(fate_threshold(OddsTier::FiftyFifty, 5), 50);
    }

    #[test]
    fn chaos_zero_shares_chaos_one_column() {
        for tier in OddsTier::ALL {
            assert_eq!(fate_threshold(tier, 0), fate_threshold(tier, 1));
        }
    }

    #[test]
    fn chaos_is_clamped() {
        assert_eq!(
            fate_threshold(OddsTier::Likely, 42),
            fate_threshold(OddsTier::Likely, 9)
        );
    }

    #[test]
    fn threshold_never_decreases_with_chaos() {
        for tier in OddsTier::ALL {
            let mut prev = i32::MIN;
            for chaos in 0..=9 {
                let t = fate_threshold(tier, chaos);
                assert!(t >= prev, "{tier} chaos {chaos}: {t} < {prev}");
                prev = t;
            }
        }
    }

    #[test]
    fn evaluate_known_rolls() {
        assert_eq!(evaluate(5, 82), OracleAnswer::ExceptionalNo);
        assert_eq!(evaluate(5, 81), OracleAnswer::No);
        assert_eq!(evaluate(-20, 77), OracleAnswer::ExceptionalNo);
        assert_eq!(evaluate(50, 91), OracleAnswer::ExceptionalNo);
        assert_eq!(evaluate(50, 10), OracleAnswer::ExceptionalYes);
        assert_eq!(evaluate(50, 11), OracleAnswer::Yes);
    }

    #[test]
    fn evaluate_negative_threshold_never_yes() {
        for roll in 1..=100 {
            let answer = evaluate(-20, roll);
            assert!(
                matches!(answer, OracleAnswer::No | OracleAnswer::ExceptionalNo),
                "roll {roll}: {answer}"
            );
        }
        assert_eq!(evaluate(-20, 76), OracleAnswer::No);
    }

    #[test]
    fn evaluate_threshold_above_hundred() {
        assert_eq!(exceptional_yes_bound(125), 25);
        assert_eq!(exceptional_no_bound(125), 106);
        assert_eq!(evaluate(125, 25), OracleAnswer::ExceptionalYes);
        assert_eq!(evaluate(125, 26), OracleAnswer::Yes);
        assert_eq!(evaluate(125, 100), OracleAnswer::Yes);
    }

    #[test]
    fn evaluate_zero_threshold() {
        assert_eq!(evaluate(0, 1), OracleAnswer::No);
        assert_eq!(exceptional_no_bound(0), 81);
        assert_eq!(evaluate(0, 80), OracleAnswer::No);
        assert_eq!(evaluate(0, 81), OracleAnswer::ExceptionalNo);
    }

    #[test]
    fn consult_oracle_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let r1 = consult_oracle(OddsTier::FiftyFifty, 5, EventMode::Meaning, &mut rng1);
        let r2 = consult_oracle(OddsTier::FiftyFifty, 5, EventMode::Meaning, &mut rng2);
        assert_eq!(r1.roll, r2.roll);
        assert_eq!(r1.answer, r2.answer);
    }

    #[test]
    fn consult_oracle_matches_evaluate() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            for tier in OddsTier::ALL {
                for chaos in 0..=9 {
                    let r = consult_oracle(tier, chaos, EventMode::Plain, &mut rng);
                    assert!((1..=100).contains(&r.roll));
                    assert_eq!(r.threshold, fate_threshold(tier, chaos));
                    assert_eq!(r.answer, evaluate(r.threshold, r.roll));
                    assert_eq!(r.event.is_some(), is_event_trigger(r.roll, chaos));
                }
            }
        }
    }

    #[test]
    fn chaos_zero_never_has_events() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let r = consult_oracle(OddsTier::Likely, 0, EventMode::Meaning, &mut rng);
            assert!(r.event.is_none());
        }
    }

    #[test]
    fn tier_parse_exact_and_prefix() {
        assert_eq!(OddsTier::parse("likely").unwrap(), OddsTier::Likely);
        assert_eq!(OddsTier::parse("CERTAIN").unwrap(), OddsTier::Certain);
        assert_eq!(OddsTier::parse("50/50").unwrap(), OddsTier::FiftyFifty);
        assert_eq!(OddsTier::parse("fifty").unwrap(), OddsTier::FiftyFifty);
        assert_eq!(OddsTier::parse("un").unwrap(), OddsTier::Unlikely);
        assert_eq!(
            OddsTier::parse("very-un").unwrap(),
            OddsTier::VeryUnlikely
        );
        assert_eq!(
            OddsTier::parse("nearly_c").unwrap(),
            OddsTier::NearlyCertain
        );
    }

    #[test]
    fn tier_parse_ambiguous_prefix() {
        let err = OddsTier::parse("very").unwrap_err();
        assert!(matches!(err, OracleError::AmbiguousTier { .. }));
        assert!(err.to_string().contains("Very Unlikely"));
        assert!(err.to_string().contains("Very Likely"));
        assert!(matches!(
            OddsTier::parse("nearly"),
            Err(OracleError::AmbiguousTier { .. })
        ));
    }

    #[test]
    fn tier_parse_rejects_unknown() {
        assert!(matches!(
            OddsTier::parse("maybe"),
            Err(OracleError::UnknownTier(_))
        ));
        assert!(matches!(
            OddsTier::parse("  "),
            Err(OracleError::UnknownTier(_))
        ));
    }

    #[test]
    fn tier_display_round_trips_through_parse() {
        for tier in OddsTier::ALL {
            assert_eq!(OddsTier::parse(&tier.to_string()).unwrap(), tier);
        }
    }

    #[test]
    fn oracle_answer_display() {
        assert_eq!(OracleAnswer::ExceptionalYes.to_string(), "Exceptional Yes");
        assert_eq!(OracleAnswer::ExceptionalNo.to_string(), "Exceptional No");
        assert_eq!(OracleAnswer::No.to_string(), "No");
    }
}
