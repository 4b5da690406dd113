//! The oracle facade.
//!
//! `Oracle` holds the immutable plot point table and the event mode. It has
//! no other state: every call takes the caller's random source, so one
//! oracle can be shared across threads and sessions.

use rand::Rng;
use serde::Serialize;

use crate::config::OracleConfig;
use crate::error::OracleResult;
use crate::oracle::{EventMode, NarrativeEvent, OddsTier, RollOutcome, consult_oracle, generate_event};
use crate::plot::{MetaPlotPoint, PlotPoint, PlotPointTable, lookup_meta_plot_point};
use crate::scene::{SceneAdjustment, SceneRoll, SceneType, roll_adjustments, roll_scene};
use crate::theme::{ThemeOrder, ThemeType};

/// A chaos die roll together with what it implies for the scene.
#[derive(Debug, Clone, Serialize)]
pub struct SceneCheck {
    /// The chaos die roll and its classification.
    pub roll: SceneRoll,
    /// Adjustments to apply, for altered scenes.
    pub adjustments: Vec<SceneAdjustment>,
    /// The event that replaces the scene, for interrupts.
    pub event: Option<NarrativeEvent>,
}

/// A themed plot point roll.
#[derive(Debug, Clone, Serialize)]
pub struct PlotRoll {
    /// The theme that was used.
    pub theme: ThemeType,
    /// The d100 roll.
    pub roll: i32,
    /// The matching row.
    pub point: PlotPoint,
}

/// A meta plot point roll.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetaRoll {
    /// The d100 roll.
    pub roll: i32,
    /// The matching row.
    pub point: MetaPlotPoint,
}

/// Stateless oracle over the fixed tables and a loaded plot point dataset.
#[derive(Debug, Clone)]
pub struct Oracle {
    plots: PlotPointTable,
    event_mode: EventMode,
}

impl Oracle {
    /// Build an oracle from a config, loading its dataset once.
    pub fn from_config(config: &OracleConfig) -> OracleResult<Self> {
        let plots = match &config.dataset {
            Some(path) => PlotPointTable::load(path)?,
            None => PlotPointTable::bundled()?,
        };
        Ok(Self::new(plots, config.event_mode))
    }

    /// Build an oracle from an already loaded table.
    pub fn new(plots: PlotPointTable, event_mode: EventMode) -> Self {
        Self { plots, event_mode }
    }

    /// The plot point table.
    pub fn plots(&self) -> &PlotPointTable {
        &self.plots
    }

    /// Ask the fate chart a yes/no question.
    pub fn ask<R: Rng + ?Sized>(&self, tier: OddsTier, chaos: u32, rng: &mut R) -> RollOutcome {
        consult_oracle(tier, chaos, self.event_mode, rng)
    }

    /// Generate a random event unconditionally.
    pub fn event<R: Rng + ?Sized>(&self, rng: &mut R) -> NarrativeEvent {
        generate_event(self.event_mode, rng)
    }

    /// Roll the chaos die and resolve what it means for the scene.
    pub fn check_scene<R: Rng + ?Sized>(&self, chaos: u32, rng: &mut R) -> SceneCheck {
        let roll = roll_scene(chaos, rng);
        let (adjustments, event) = match roll.scene_type {
            SceneType::Expected => (Vec::new(), None),
            SceneType::Altered => (roll_adjustments(rng), None),
            SceneType::Interrupt => (Vec::new(), Some(self.event(rng))),
        };
        SceneCheck {
            roll,
            adjustments,
            event,
        }
    }

    /// Roll on the scene adjustment table.
    pub fn adjust_scene<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<SceneAdjustment> {
        roll_adjustments(rng)
    }

    /// Pick a theme from the session order, roll d100 and look up the plot point.
    pub fn plot_point<R: Rng + ?Sized>(
        &self,
        themes: &ThemeOrder,
        rng: &mut R,
    ) -> OracleResult<PlotRoll> {
        let theme = themes.sample(rng);
        self.plot_point_for(theme, rng)
    }

    /// Roll d100 and look up the plot point for a fixed theme.
    pub fn plot_point_for<R: Rng + ?Sized>(
        &self,
        theme: ThemeType,
        rng: &mut R,
    ) -> OracleResult<PlotRoll> {
        let roll: i32 = rng.random_range(1..=100);
        self.plot_point_at(theme, roll)
    }

    /// Look up the plot point for an explicit roll.
    pub fn plot_point_at(&self, theme: ThemeType, roll: i32) -> OracleResult<PlotRoll> {
        let point = self.plots.lookup(roll, theme)?.clone();
        Ok(PlotRoll { theme, roll, point })
    }

    /// Roll d100 on the meta plot point table.
    pub fn meta_plot_point<R: Rng + ?Sized>(&self, rng: &mut R) -> OracleResult<MetaRoll> {
        let roll: i32 = rng.random_range(1..=100);
        self.meta_plot_point_at(roll)
    }

    /// Look up the meta plot point for an explicit roll.
    pub fn meta_plot_point_at(&self, roll: i32) -> OracleResult<MetaRoll> {
        let point = *lookup_meta_plot_point(roll)?;
        Ok(MetaRoll { roll, point })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OracleError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn oracle() -> Oracle {
        Oracle::from_config(&OracleConfig::default()).unwrap()
    }

    #[test]
    fn oracle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Oracle>();
    }

    #[test]
    fn check_scene_attaches_consequences() {
        let oracle = oracle();
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen_interrupt = false;
        let mut seen_altered = false;
        for _ in 0..500 {
            let check = oracle.check_scene(6, &mut rng);
            match check.roll.scene_type {
                SceneType::Expected => {
                    assert!(check.adjustments.is_empty());
                    assert!(check.event.is_none());
                }
                SceneType::Altered => {
                    seen_altered = true;
                    assert!(matches!(check.adjustments.len(), 1 | 2));
                    assert!(check.event.is_none());
                }
                SceneType::Interrupt => {
                    seen_interrupt = true;
                    assert!(check.adjustments.is_empty());
                    assert!(check.event.is_some());
                }
            }
        }
        assert!(seen_altered && seen_interrupt);
    }

    #[test]
    fn plot_point_uses_sampled_theme() {
        let oracle = oracle();
        let themes = ThemeOrder::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let roll = oracle.plot_point(&themes, &mut rng).unwrap();
            assert!((1..=100).contains(&roll.roll));
            assert!(roll.point.is_active(roll.theme));
            assert!(roll.point.threshold(roll.theme) >= roll.roll as u32);
        }
    }

    #[test]
    fn plot_point_at_rejects_bad_roll() {
        let err = oracle().plot_point_at(ThemeType::Social, 0).unwrap_err();
        assert!(matches!(err, OracleError::RollOutOfRange { roll: 0, .. }));
    }

    #[test]
    fn meta_plot_point_rolls() {
        let oracle = oracle();
        let mut rng = StdRng::seed_from_u64(1);
        let roll = oracle.meta_plot_point(&mut rng).unwrap();
        assert!(roll.point.threshold >= roll.roll as u32);
        assert_eq!(oracle.meta_plot_point_at(18).unwrap().point.threshold, 18);
    }

    #[test]
    fn plain_mode_events_have_no_meaning() {
        let plots = PlotPointTable::bundled().unwrap();
        let oracle = Oracle::new(plots, EventMode::Plain);
        let mut rng = StdRng::seed_from_u64(2);
        assert!(oracle.event(&mut rng).meaning.is_none());
    }

    #[test]
    fn missing_dataset_fails_to_build() {
        let config = OracleConfig::default().with_dataset("/no/such/plots.json");
        assert!(matches!(Oracle::from_config(&config), Err(OracleError::Io(_))));
    }
}
