//! Meta plot points: structural changes to the characters and plotlines
//! lists, independent of theme.

use serde::Serialize;

use crate::error::{OracleError, OracleResult};

/// A single meta plot point row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetaPlotPoint {
    /// Inclusive upper bound of the d100 range.
    pub threshold: u32,
    /// Short name of the result.
    pub title: &'static str,
    /// What to do with the lists.
    pub text: &'static str,
}

impl std::fmt::Display for MetaPlotPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.text)
    }
}

/// The meta plot point table, in ascending threshold order.
pub const META_PLOT_POINTS: [MetaPlotPoint; 7] = [
    MetaPlotPoint {
        threshold: 18,
        title: "CHARACTER EXITS THE ADVENTURE",
        text: "Remove a non-player character from the characters list entirely. \
               With no non-player characters to remove, roll again.",
    },
    MetaPlotPoint {
        threshold: 27,
        title: "CHARACTER RETURNS",
        text: "A character who left the adventure comes back with a single listing. \
               If nobody has left, treat this as a new character.",
    },
    MetaPlotPoint {
        threshold: 36,
        title: "CHARACTER STEPS UP",
        text: "A character becomes more important and gains one more slot on the \
               characters list.",
    },
    MetaPlotPoint {
        threshold: 55,
        title: "CHARACTER STEPS DOWN",
        text: "A character becomes less important and loses one slot on the \
               characters list. Player characters never drop off the list this way.",
    },
    MetaPlotPoint {
        threshold: 73,
        title: "CHARACTER DOWNGRADE",
        text: "A character becomes much less important and loses two slots on the \
               characters list. Player characters never drop off the list this way.",
    },
    MetaPlotPoint {
        threshold: 82,
        title: "CHARACTER UPGRADE",
        text: "A character becomes much more important and gains two slots on the \
               characters list.",
    },
    MetaPlotPoint {
        threshold: 100,
        title: "PLOTLINE COMBO",
        text: "This turning point involves more than one plotline. Roll another \
               plotline and combine it with the first; a repeat means choose the \
               most logical one.",
    },
];

/// Find the meta plot point for a d100 roll.
pub fn lookup_meta_plot_point(roll: i32) -> OracleResult<&'static MetaPlotPoint> {
    if !(1..=100).contains(&roll) {
        return Err(OracleError::RollOutOfRange {
            roll,
            theme: "meta".to_string(),
        });
    }
    META_PLOT_POINTS
        .iter()
        .find(|point| roll as u32 <= point.threshold)
        .ok_or(OracleError::NoMetaPlotPoint(roll))
}
