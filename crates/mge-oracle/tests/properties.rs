//! Property-based tests for the mge oracle.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use mge_oracle::oracle::event::is_event_trigger;
use mge_oracle::oracle::fate_chart::{evaluate, exceptional_no_bound, exceptional_yes_bound};
use mge_oracle::plot::lookup_meta_plot_point;
use mge_oracle::scene::classify_scene;
use mge_oracle::{
    OddsTier, Oracle, OracleAnswer, OracleConfig, OracleError, PlotPointTable, SceneType,
    ThemeOrder, ThemeType,
};

fn tier_strategy() -> impl Strategy<Value = OddsTier> {
    prop::sample::select(OddsTier::ALL.to_vec())
}

fn theme_strategy() -> impl Strategy<Value = ThemeType> {
    prop::sample::select(ThemeType::ALL.to_vec())
}

proptest! {
    #[test]
    fn theme_order_is_always_a_permutation(seed in any::<u64>()) {
        let order = ThemeOrder::new(&mut StdRng::seed_from_u64(seed));
        let mut themes = *order.themes();
        themes.sort();
        prop_assert_eq!(themes, ThemeType::ALL);
    }

    #[test]
    fn theme_order_survives_persistence(seed in any::<u64>()) {
        let order = ThemeOrder::new(&mut StdRng::seed_from_u64(seed));
        let parsed: ThemeOrder = order.to_string().parse().unwrap();
        prop_assert_eq!(parsed, order);
    }

    #[test]
    fn evaluate_partitions_rolls(threshold in -20i32..=125, roll in 1i32..=100) {
        let answer = evaluate(threshold, roll);
        let expected = if roll <= exceptional_yes_bound(threshold) {
            OracleAnswer::ExceptionalYes
        } else if roll <= threshold {
            OracleAnswer::Yes
        } else if roll >= exceptional_no_bound(threshold) {
            OracleAnswer::ExceptionalNo
        } else {
            OracleAnswer::No
        };
        prop_assert_eq!(answer, expected);
        let yes = matches!(answer, OracleAnswer::Yes | OracleAnswer::ExceptionalYes);
        prop_assert_eq!(yes, roll <= threshold);
    }

    #[test]
    fn consult_outcome_is_consistent(tier in tier_strategy(), chaos in 0u32..=20, seed in any::<u64>()) {
        let oracle = Oracle::from_config(&OracleConfig::default()).unwrap();
        let outcome = oracle.ask(tier, chaos, &mut StdRng::seed_from_u64(seed));
        prop_assert!(outcome.chaos <= 9);
        prop_assert!((1..=100).contains(&outcome.roll));
        prop_assert_eq!(outcome.answer, evaluate(outcome.threshold, outcome.roll));
        prop_assert_eq!(outcome.event.is_some(), is_event_trigger(outcome.roll, outcome.chaos));
    }

    #[test]
    fn scene_classification_is_total(roll in 1u32..=10, chaos in 0u32..=9) {
        let first = classify_scene(roll, chaos);
        prop_assert_eq!(first, classify_scene(roll, chaos));
        prop_assert!(matches!(
            first,
            SceneType::Expected | SceneType::Altered | SceneType::Interrupt
        ));
        prop_assert_eq!(first == SceneType::Expected, roll > chaos);
    }

    #[test]
    fn plot_lookup_returns_first_qualifying_row(roll in 1i32..=100, theme in theme_strategy()) {
        let table = PlotPointTable::bundled().unwrap();
        let point = table.lookup(roll, theme).unwrap();
        prop_assert!(point.threshold(theme) >= roll as u32);
        let position = table.rows().iter().position(|row| row == point).unwrap();
        for earlier in &table.rows()[..position] {
            prop_assert!(!earlier.is_active(theme) || earlier.threshold(theme) < roll as u32);
        }
    }

    #[test]
    fn lookups_reject_rolls_outside_d100(
        roll in prop_oneof![i32::MIN..=0, 101..=i32::MAX],
        theme in theme_strategy(),
    ) {
        let table = PlotPointTable::bundled().unwrap();
        let is_out_of_range = matches!(
            table.lookup(roll, theme),
            Err(OracleError::RollOutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
        let meta_out_of_range = matches!(
            lookup_meta_plot_point(roll),
            Err(OracleError::RollOutOfRange { .. })
        );
        prop_assert!(meta_out_of_range);
    }
}

#[test]
fn every_plot_boundary_and_boundary_minus_one() {
    let table = PlotPointTable::bundled().unwrap();
    for theme in ThemeType::ALL {
        for row in table.rows().iter().filter(|row| row.is_active(theme)) {
            let bound = row.threshold(theme) as i32;
            assert_eq!(table.lookup(bound, theme).unwrap(), row, "{theme} {bound}");
            let below = table.lookup(bound - 1, theme);
            if bound > 1 {
                let below = below.unwrap();
                let previous_bound = table
                    .rows()
                    .iter()
                    .filter(|r| r.is_active(theme) && r.threshold(theme) < bound as u32)
                    .map(|r| r.threshold(theme))
                    .max();
                match previous_bound {
                    Some(prev) if prev == (bound - 1) as u32 => {
                        assert_eq!(below.threshold(theme), prev, "{theme} {bound}");
                    }
                    _ => assert_eq!(below, row, "{theme} {bound}"),
                }
            }
        }
    }
}

#[test]
fn event_triggers_at_documented_rolls() {
    assert!((1..=100).all(|roll| !is_event_trigger(roll, 0)));
    assert!(is_event_trigger(99, 9));
    assert!(is_event_trigger(11, 9));
    assert!(!is_event_trigger(100, 9));
}
