//! SVG chart rendering.
//!
//! Charts are written by hand as SVG strings:
//! - Line charts with a date axis (time series, trends, timelines)
//! - Horizontal bar charts (rankings)
//! - Placeholder panels when a query found no data
//!
//! Panels are arranged on a grid by [`Figure`].

pub mod bar;
pub mod figure;
pub mod line;
pub mod palette;
pub mod summary;

// Re-export main types
pub use bar::{Bar, BarChart};
pub use figure::{escape_xml, ChartConfig, Figure, Panel, Rect};
pub use line::{LineChart, LineSeries};
pub use summary::{generate_ranking_summary, generate_series_summary};
