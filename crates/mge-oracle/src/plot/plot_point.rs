//! Themed plot point table.
//!
//! Each row carries an inclusive upper bound per theme (0 means the row is
//! not available for that theme). A d100 lookup returns the first row whose
//! bound for the theme is non-zero and at least the roll.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{OracleError, OracleResult};
use crate::theme::ThemeType;

/// Dataset compiled into the library.
const BUNDLED_DATASET: &str = include_str!("../../data/plot_points.json");

/// A single plot point row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Upper bound per theme, indexed like `ThemeType::ALL`. 0 = inactive.
    pub thresholds: [u32; 5],
    /// Prompt text.
    pub description: String,
}

impl PlotPoint {
    /// Upper bound for a theme, or 0 if the row is inactive for it.
    pub fn threshold(&self, theme: ThemeType) -> u32 {
        self.thresholds[theme.index()]
    }

    /// Whether the row can be rolled for a theme.
    pub fn is_active(&self, theme: ThemeType) -> bool {
        self.threshold(theme) != 0
    }
}

impl std::fmt::Display for PlotPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

/// Primary dataset record: `{ "text": ..., "ranges": { "Action": 8, ... } }`.
#[derive(Debug, Deserialize)]
struct RangeRecord {
    text: String,
    #[serde(default)]
    ranges: BTreeMap<String, u32>,
}

/// Legacy dataset wrapper: `{ "plot_point_chart": { "plot_points": [...] } }`.
#[derive(Debug, Deserialize)]
struct LegacyDocument {
    plot_point_chart: LegacyChart,
}

#[derive(Debug, Deserialize)]
struct LegacyChart {
    #[serde(default)]
    plot_points: Vec<LegacyRow>,
}

#[derive(Debug, Deserialize)]
struct LegacyRow {
    #[serde(rename = "Action", default)]
    action: u32,
    #[serde(rename = "Tension", default)]
    tension: u32,
    #[serde(rename = "Mystery", default)]
    mystery: u32,
    #[serde(rename = "Social", default)]
    social: u32,
    #[serde(rename = "Personal", default)]
    personal: u32,
    #[serde(rename = "Description")]
    description: String,
}

impl From<LegacyRow> for PlotPoint {
    fn from(row: LegacyRow) -> Self {
        Self {
            thresholds: [row.action, row.tension, row.mystery, row.social, row.personal],
            description: row.description,
        }
    }
}

impl TryFrom<RangeRecord> for PlotPoint {
    type Error = String;

    fn try_from(record: RangeRecord) -> Result<Self, Self::Error> {
        let mut thresholds = [0; 5];
        for (name, value) in record.ranges {
            let theme: ThemeType = name
                .parse()
                .map_err(|_| format!("unknown theme '{name}' in \"{}\"", record.text))?;
            thresholds[theme.index()] = value;
        }
        Ok(Self {
            thresholds,
            description: record.text,
        })
    }
}

/// The loaded plot point table.
///
/// Immutable once built; lookups borrow rows from it.
#[derive(Debug, Clone)]
pub struct PlotPointTable {
    rows: Vec<PlotPoint>,
}

impl PlotPointTable {
    /// The dataset that ships with the library.
    pub fn bundled() -> OracleResult<Self> {
        Self::from_json(BUNDLED_DATASET.as_bytes())
    }

    /// Read and parse a dataset file.
    pub fn load(path: impl AsRef<Path>) -> OracleResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let table = Self::from_json(&bytes)?;
        info!(path = %path.display(), rows = table.len(), "loaded plot point dataset");
        Ok(table)
    }

    /// Parse a dataset, trying the primary format first and the legacy
    /// wrapper second. The result is validated before it is returned.
    pub fn from_json(bytes: &[u8]) -> OracleResult<Self> {
        let (rows, format) = match serde_json::from_slice::<Vec<RangeRecord>>(bytes) {
            Ok(records) => {
                let rows = records
                    .into_iter()
                    .map(PlotPoint::try_from)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|reason| OracleError::InvalidDataset {
                        format: "primary",
                        reason,
                    })?;
                (rows, "primary")
            }
            Err(primary_err) => match serde_json::from_slice::<LegacyDocument>(bytes) {
                Ok(doc) if !doc.plot_point_chart.plot_points.is_empty() => {
                    warn!("plot point dataset uses the legacy plot_point_chart format");
                    let rows = doc
                        .plot_point_chart
                        .plot_points
                        .into_iter()
                        .map(PlotPoint::from)
                        .collect();
                    (rows, "legacy")
                }
                _ => {
                    return Err(OracleError::InvalidDataset {
                        format: "primary+legacy",
                        reason: primary_err.to_string(),
                    });
                }
            },
        };

        Self::from_rows(rows).map_err(|err| match err {
            OracleError::InvalidDataset { reason, .. } => {
                OracleError::InvalidDataset { format, reason }
            }
            other => other,
        })
    }

    /// Build a table from rows, checking the per-theme ordering.
    ///
    /// For every theme the active bounds must strictly increase and the last
    /// one must be 100.
    pub fn from_rows(rows: Vec<PlotPoint>) -> OracleResult<Self> {
        let invalid = |reason: String| OracleError::InvalidDataset {
            format: "rows",
            reason,
        };

        if rows.is_empty() {
            return Err(invalid("dataset has no rows".to_string()));
        }

        for theme in ThemeType::ALL {
            let mut last = 0;
            for row in rows.iter().filter(|row| row.is_active(theme)) {
                let bound = row.threshold(theme);
                if bound <= last || bound > 100 {
                    return Err(invalid(format!(
                        "{theme} bound {bound} after {last} at \"{}\"",
                        row.description
                    )));
                }
                last = bound;
            }
            if last != 100 {
                return Err(invalid(format!("{theme} ends at {last}, expected 100")));
            }
        }

        Ok(Self { rows })
    }

    /// All rows in table order.
    pub fn rows(&self) -> &[PlotPoint] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows. Never true for a validated table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the plot point for a d100 roll and theme.
    pub fn lookup(&self, roll: i32, theme: ThemeType) -> OracleResult<&PlotPoint> {
        if !(1..=100).contains(&roll) {
            return Err(OracleError::RollOutOfRange {
                roll,
                theme: theme.to_string(),
            });
        }
        let target = roll as u32;
        self.rows
            .iter()
            .find(|row| row.is_active(theme) && row.threshold(theme) >= target)
            .ok_or_else(|| OracleError::NoPlotPoint {
                roll,
                theme: theme.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PlotPointTable {
        PlotPointTable::bundled().unwrap()
    }

    fn title(point: &PlotPoint) -> &str {
        point.description.split(':').next().unwrap_or_default()
    }

    #[test]
    fn bundled_dataset_loads() {
        let t = table();
        assert!(t.len() > 1);
        let first = &t.rows()[0];
        assert_eq!(first.thresholds, [8; 5]);
        assert!(first.description.starts_with("CONCLUSION:"));
        let second = &t.rows()[1];
        assert_eq!(second.thresholds, [24; 5]);
        assert!(second.description.starts_with("NONE:"));
    }

    #[test]
    fn lookup_boundaries_shared_rows() {
        let t = table();
        for theme in ThemeType::ALL {
            assert_eq!(title(t.lookup(1, theme).unwrap()), "CONCLUSION");
            assert_eq!(title(t.lookup(8, theme).unwrap()), "CONCLUSION");
            assert_eq!(title(t.lookup(9, theme).unwrap()), "NONE");
            assert_eq!(title(t.lookup(24, theme).unwrap()), "NONE");
            assert_eq!(title(t.lookup(100, theme).unwrap()), "ESCALATION");
        }
    }

    #[test]
    fn lookup_skips_inactive_rows() {
        let t = table();
        // Mystery has no Ambush/Chase/Duel rows; 32 falls into Ticking Clock.
        assert_eq!(title(t.lookup(31, ThemeType::Mystery).unwrap()), "CHARACTER ACTION");
        assert_eq!(title(t.lookup(32, ThemeType::Mystery).unwrap()), "TICKING CLOCK");
        assert_eq!(title(t.lookup(44, ThemeType::Mystery).unwrap()), "HIDDEN CLUE");
        // Action: 58 is Desperate Defense, 59 skips to Trap Sprung.
        assert_eq!(title(t.lookup(58, ThemeType::Action).unwrap()), "DESPERATE DEFENSE");
        assert_eq!(title(t.lookup(59, ThemeType::Action).unwrap()), "TRAP SPRUNG");
    }

    #[test]
    fn lookup_rejects_out_of_range_rolls() {
        let t = table();
        for roll in [0, 101, -5] {
            let err = t.lookup(roll, ThemeType::Action).unwrap_err();
            assert!(matches!(err, OracleError::RollOutOfRange { .. }), "{roll}");
            assert!(err.to_string().contains(&roll.to_string()));
            assert!(err.to_string().contains("Action"));
        }
    }

    #[test]
    fn primary_format_with_missing_themes() {
        let json = br#"[
            {"text": "first", "ranges": {"Action": 50, "Tension": 100, "Mystery": 100, "Social": 100, "Personal": 100}},
            {"text": "second", "ranges": {"Action": 100}}
        ]"#;
        let t = PlotPointTable::from_json(json).unwrap();
        assert_eq!(t.lookup(50, ThemeType::Action).unwrap().description, "first");
        assert_eq!(t.lookup(51, ThemeType::Action).unwrap().description, "second");
        assert_eq!(t.lookup(90, ThemeType::Tension).unwrap().description, "first");
    }

    #[test]
    fn legacy_format_fallback() {
        let json = br#"{"plot_point_chart": {"plot_points": [
            {"Action": 40, "Tension": 0, "Mystery": 100, "Social": 100, "Personal": 100, "Description": "first"},
            {"Action": 100, "Tension": 100, "Description": "second"}
        ]}}"#;
        let t = PlotPointTable::from_json(json).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.lookup(17, ThemeType::Tension).unwrap().description, "second");
        assert_eq!(t.lookup(40, ThemeType::Action).unwrap().description, "first");
        assert_eq!(t.lookup(41, ThemeType::Action).unwrap().description, "second");
    }

    #[test]
    fn empty_legacy_document_is_rejected() {
        let json = br#"{"plot_point_chart": {"plot_points": []}}"#;
        let err = PlotPointTable::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            OracleError::InvalidDataset {
                format: "primary+legacy",
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = PlotPointTable::from_json(b"not json").unwrap_err();
        assert!(err.to_string().contains("primary+legacy"));
    }

    #[test]
    fn unknown_theme_key_is_rejected() {
        let json = br#"[{"text": "x", "ranges": {"Horror": 100}}]"#;
        let err = PlotPointTable::from_json(json).unwrap_err();
        assert!(matches!(err, OracleError::InvalidDataset { format: "primary", .. }));
        assert!(err.to_string().contains("Horror"));
    }

    #[test]
    fn validation_rejects_unordered_rows() {
        let mut rows: Vec<PlotPoint> = table().rows().to_vec();
        rows.swap(0, 1);
        let err = PlotPointTable::from_rows(rows).unwrap_err();
        assert!(err.to_string().contains("after 24"));
    }

    #[test]
    fn validation_rejects_table_not_ending_at_hundred() {
        let rows = vec![PlotPoint {
            thresholds: [100, 100, 100, 100, 90],
            description: "short".to_string(),
        }];
        let err = PlotPointTable::from_rows(rows).unwrap_err();
        assert!(err.to_string().contains("Personal ends at 90"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("plots.json");
        std::fs::write(&path, BUNDLED_DATASET).unwrap();
        let t = PlotPointTable::load(&path).unwrap();
        assert_eq!(t.len(), table().len());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = PlotPointTable::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, OracleError::Io(_)));
    }
}
