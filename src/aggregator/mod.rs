//! Aggregation queries over the loaded dataset.
//!
//! This module turns dataset records into chart-ready data:
//! - Per-entity time series and moving-average smoothing
//! - Top-N rankings on the most common latest reporting date
//! - Continent filtering and latest-record lookup
//!
//! Every function is a pure query over borrowed records.

pub mod filter;
pub mod ranking;
pub mod series;

// Re-export main types and functions
pub use filter::{filter_by_continent, latest_record, population_of, timeline_entities};
pub use ranking::{latest_per_country, most_common_latest_date, top_n};
pub use series::{moving_average, population_share, series_for, smooth, SmoothedSeries};
