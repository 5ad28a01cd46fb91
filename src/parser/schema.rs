//! Output JSON schema definitions for chart data.
//!
//! This module defines the structure of JSON reports we write to disk
//! alongside each chart. Schema is versioned to allow future evolution.

use super::metric::Metric;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point of a time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A location and its value on the comparison date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntity {
    pub location: String,
    pub value: f64,
}

/// A labelled series as drawn on a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

/// Which view produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    TimeSeries,
    TopCountries,
    Vaccination,
    Trends,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartReport {
    /// Schema version for compatibility checking
    pub version: String,

    pub kind: ReportKind,

    /// Chart title as rendered
    pub title: String,

    /// Country, "World", or continent the chart is about
    pub subject: String,

    pub metric: Metric,

    /// Date the ranking was taken on (ranking views only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,

    /// Plotted series, raw data first
    #[serde(default)]
    pub series: Vec<NamedSeries>,

    /// Ranked bars, highest first
    #[serde(default)]
    pub ranking: Vec<RankedEntity>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

impl ChartReport {
    /// Start a report stamped with the current schema version and time
    pub fn new(
        kind: ReportKind,
        title: impl Into<String>,
        subject: impl Into<String>,
        metric: Metric,
    ) -> Self {
        Self {
            version: crate::utils::config::SCHEMA_VERSION.to_string(),
            kind,
            title: title.into(),
            subject: subject.into(),
            metric,
            reference_date: None,
            series: Vec::new(),
            ranking: Vec::new(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Whether the report carries anything to plot
    pub fn has_data(&self) -> bool {
        !self.ranking.is_empty() || self.series.iter().any(|s| !s.points.is_empty())
    }
}
