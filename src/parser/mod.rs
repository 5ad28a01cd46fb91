//! Dataset loading and schema definitions.
//!
//! This module handles:
//! - Reading the OWID CSV into typed records
//! - Metric identifiers and entity selection
//! - The immutable dataset and its country/continent listings
//! - Defining the JSON report schema

pub mod dataset;
pub mod metric;
pub mod owid_csv;
pub mod record;
pub mod schema;

// Re-export main types
pub use dataset::Dataset;
pub use metric::Metric;
pub use record::{Entity, Record};
pub use schema::{ChartReport, NamedSeries, RankedEntity, ReportKind, SeriesPoint};
