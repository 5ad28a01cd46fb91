//! Time series extraction and moving-average smoothing.
//!
//! A series is every non-missing observation of one metric for one entity,
//! ordered by date. Long series get a trailing moving average overlay.

use crate::parser::{Entity, Metric, Record, SeriesPoint};
use crate::utils::config::{SMOOTHING_MAX_WINDOW, SMOOTHING_MIN_POINTS};
use log::debug;

/// A smoothed series and the window that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedSeries {
    /// Number of samples averaged per point
    pub window: usize,

    /// Averaged points; the first `window - 1` input dates have no output
    pub points: Vec<SeriesPoint>,
}

impl SmoothedSeries {
    /// Legend label, e.g. "7-day Moving Average"
    pub fn label(&self) -> String {
        format!("{}-day Moving Average", self.window)
    }
}

/// Select one entity's observations of a metric
///
/// **Public** - main entry point for single-country charts
///
/// # Arguments
/// * `records` - Records to search (whole dataset or a filtered subset)
/// * `entity` - `Entity::World` or a location name
/// * `metric` - Column to extract
///
/// # Returns
/// Points ordered by date ascending with missing values dropped. An empty
/// vector means "no data" and is not an error.
pub fn series_for<'a, I>(records: I, entity: &Entity, metric: Metric) -> Vec<SeriesPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut points: Vec<SeriesPoint> = records
        .into_iter()
        .filter(|record| entity.matches(record))
        .filter_map(|record| {
            record
                .value(metric)
                .map(|value| SeriesPoint::new(record.date, value))
        })
        .collect();

    // Stable, so same-date rows keep file order
    points.sort_by_key(|point| point.date);

    debug!(
        "Series for {} / {}: {} points",
        entity,
        metric,
        points.len()
    );
    points
}

/// Window size used for a series of `len` points, if it gets smoothed at all
///
/// Series of 30 points or fewer are not smoothed. Longer ones use
/// `min(7, max(1, len / 10))`.
pub fn smoothing_window(len: usize) -> Option<usize> {
    if len <= SMOOTHING_MIN_POINTS {
        return None;
    }
    Some((len / 10).clamp(1, SMOOTHING_MAX_WINDOW))
}

/// Trailing simple moving average over a fixed window
///
/// Output point `i` is dated like input point `i + window - 1` and holds the
/// mean of the `window` values ending there. Dates without a full window are
/// left out rather than emitted as missing.
pub fn moving_average(series: &[SeriesPoint], window: usize) -> Vec<SeriesPoint> {
    if window == 0 || series.len() < window {
        return Vec::new();
    }

    series
        .windows(window)
        .map(|samples| {
            let sum: f64 = samples.iter().map(|p| p.value).sum();
            let last = samples[samples.len() - 1];
            SeriesPoint::new(last.date, sum / window as f64)
        })
        .collect()
}

/// Smooth a series for display, using the automatic window size
///
/// **Public** - called by the time series chart
///
/// # Returns
/// `None` when the series is too short to smooth
pub fn smooth(series: &[SeriesPoint]) -> Option<SmoothedSeries> {
    let window = smoothing_window(series.len())?;
    let points = moving_average(series, window);
    debug!("Smoothed {} points with window {}", series.len(), window);
    Some(SmoothedSeries { window, points })
}

/// Express a count series as a percentage of population
pub fn population_share(series: &[SeriesPoint], population: f64) -> Vec<SeriesPoint> {
    if population <= 0.0 {
        return Vec::new();
    }
    series
        .iter()
        .map(|p| SeriesPoint::new(p.date, p.value / population * 100.0))
        .collect()
}
