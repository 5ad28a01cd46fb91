//! CSV reader for the Our World in Data COVID-19 file.
//!
//! Handles:
//! - Header resolution (BOM-tolerant, whitespace-trimmed)
//! - Required identity columns
//! - Optional metric columns (absent ones read as missing)
//! - Date validation with line numbers

use super::metric::Metric;
use super::record::Record;
use crate::utils::config::DATASET_DOWNLOAD_URL;
use crate::utils::error::DatasetError;
use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 4] = ["iso_code", "continent", "location", "date"];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Column positions resolved from the header row
#[derive(Debug)]
struct ColumnLayout {
    iso_code: usize,
    continent: usize,
    location: usize,
    date: usize,
    metrics: Vec<(Metric, usize)>,
}

/// Read all records from a file on disk
///
/// **Public** - used by `Dataset::load`
pub fn read_records_from_path(path: &Path) -> Result<Vec<Record>, DatasetError> {
    info!("Loading dataset from: {}", path.display());

    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound {
                path: path.to_path_buf(),
                url: DATASET_DOWNLOAD_URL,
            }
        } else {
            DatasetError::Io(e)
        }
    })?;

    read_records(file)
}

/// Read all records from a CSV source
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `DatasetError::Csv` - malformed CSV structure
/// * `DatasetError::MissingColumn` - one of `iso_code`, `continent`, `location`, `date` is absent
/// * `DatasetError::InvalidDate` - a date is not ISO-8601
pub fn read_records<R: Read>(source: R) -> Result<Vec<Record>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let layout = resolve_layout(&headers)?;

    debug!(
        "Resolved {} of {} metric columns",
        layout.metrics.len(),
        Metric::COUNT
    );

    let mut records = Vec::new();
    let mut unparsable_cells = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header; CSV lines are 1-based
        let line = idx + 2;
        let row = result?;
        let (record, skipped) = parse_row(&row, &layout, line)?;
        unparsable_cells += skipped;
        records.push(record);
    }

    if unparsable_cells > 0 {
        warn!(
            "{} non-numeric metric cells were treated as missing",
            unparsable_cells
        );
    }

    info!("Loaded {} records", records.len());
    Ok(records)
}

/// Map header names to positions and check the identity columns exist
///
/// **Private** - internal helper for read_records
fn resolve_layout(headers: &StringRecord) -> Result<ColumnLayout, DatasetError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect();

    let required = |name: &str| {
        header_map
            .get(name)
            .copied()
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
    };

    let [iso_code, continent, location, date] = REQUIRED_COLUMNS;

    let metrics = Metric::ALL
        .iter()
        .filter_map(|m| header_map.get(m.as_str()).map(|&idx| (*m, idx)))
        .collect();

    Ok(ColumnLayout {
        iso_code: required(iso_code)?,
        continent: required(continent)?,
        location: required(location)?,
        date: required(date)?,
        metrics,
    })
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a BOM
    name.trim().trim_start_matches('\u{feff}').to_string()
}

/// Parse one CSV row; returns the record and the number of skipped cells
///
/// **Private** - internal helper for read_records
fn parse_row(
    row: &StringRecord,
    layout: &ColumnLayout,
    line: usize,
) -> Result<(Record, usize), DatasetError> {
    let cell = |idx: usize| row.get(idx).unwrap_or("");

    let raw_date = cell(layout.date);
    let date = parse_date(raw_date).ok_or_else(|| DatasetError::InvalidDate {
        line,
        value: raw_date.to_string(),
    })?;

    let continent = Some(cell(layout.continent)).filter(|c| !c.is_empty());
    let mut record = Record::new(
        cell(layout.iso_code),
        continent,
        cell(layout.location),
        date,
    );

    let mut skipped = 0;
    for &(metric, idx) in &layout.metrics {
        let raw = cell(idx);
        if raw.is_empty() {
            continue;
        }
        match raw.parse::<f64>() {
            Ok(value) => record.set_value(metric, Some(value)),
            Err(_) => skipped += 1,
        }
    }

    Ok((record, skipped))
}

/// Parse an ISO-8601 calendar date
///
/// A full `HH:MM:SS` time after `T` or a space is accepted and dropped;
/// anything else after the date is rejected.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|datetime| datetime.date())
}
