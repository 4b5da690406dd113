//! Plot point tables.
//!
//! Themed plot points come from a JSON dataset loaded once per table;
//! meta plot points are a fixed table.

pub mod meta;
pub mod plot_point;

pub use meta::{META_PLOT_POINTS, MetaPlotPoint, lookup_meta_plot_point};
pub use plot_point::{PlotPoint, PlotPointTable};
