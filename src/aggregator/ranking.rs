//! Country rankings on a common reporting date.
//!
//! Locations stop reporting on different days, so comparisons are taken on
//! the date that the largest number of locations report as their latest.
//! Locations whose last report predates that date drop out of the ranking.

use crate::parser::{Metric, RankedEntity, Record};
use chrono::NaiveDate;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Latest reporting date of every location, keyed by location name
pub fn latest_date_per_location<'a, I>(records: I) -> BTreeMap<&'a str, NaiveDate>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut latest: BTreeMap<&'a str, NaiveDate> = BTreeMap::new();
    for record in records {
        latest
            .entry(record.location.as_str())
            .and_modify(|date| *date = (*date).max(record.date))
            .or_insert(record.date);
    }
    latest
}

/// The most frequent per-location latest date
///
/// Two passes: compute each location's own latest date, then take the mode
/// of those dates. Ties go to the date seen first when locations are
/// visited in ascending name order.
///
/// # Returns
/// `None` for an empty input
pub fn most_common_latest_date<'a, I>(records: I) -> Option<NaiveDate>
where
    I: IntoIterator<Item = &'a Record>,
{
    let latest = latest_date_per_location(records);

    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    let mut first_seen: Vec<NaiveDate> = Vec::new();
    for &date in latest.values() {
        let count = counts.entry(date).or_insert(0);
        if *count == 0 {
            first_seen.push(date);
        }
        *count += 1;
    }

    let mut best: Option<(NaiveDate, usize)> = None;
    for date in first_seen {
        let count = counts[&date];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((date, count));
        }
    }

    if let Some((date, count)) = best {
        debug!(
            "Most common latest date: {} ({} of {} locations)",
            date,
            count,
            latest.len()
        );
    }
    best.map(|(date, _)| date)
}

/// Rank locations by a metric on the most common latest date
///
/// **Public** - main entry point for the comparison chart
///
/// # Arguments
/// * `records` - Records to rank
/// * `metric` - Column to rank by
/// * `n` - Maximum number of entries returned
/// * `exclude_aggregates` - Leave out world, continent and income-group rows
///
/// # Returns
/// At most `n` entries sorted by value descending. Equal values keep their
/// input order. Rows missing the metric are skipped.
pub fn top_n<'a, I>(
    records: I,
    metric: Metric,
    n: usize,
    exclude_aggregates: bool,
) -> Vec<RankedEntity>
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();

    let Some(date) = most_common_latest_date(records.iter().copied()) else {
        return Vec::new();
    };

    let mut ranked: Vec<RankedEntity> = records
        .iter()
        .filter(|record| record.date == date)
        .filter(|record| !(exclude_aggregates && record.is_aggregate()))
        .filter_map(|record| to_ranked(record, metric))
        .collect();

    sort_descending(&mut ranked);
    ranked.truncate(n);

    debug!("Top {} by {} on {}: {} entries", n, metric, date, ranked.len());
    ranked
}

/// Rank countries by the value on their own most recent record
///
/// Unlike [`top_n`] there is no common date: each country contributes its
/// latest row, and countries whose latest row lacks the metric are skipped.
/// Aggregates are always excluded.
pub fn latest_per_country<'a, I>(records: I, metric: Metric, n: usize) -> Vec<RankedEntity>
where
    I: IntoIterator<Item = &'a Record>,
{
    // Location -> index into `order`, keeping first-appearance order
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut order: Vec<&'a Record> = Vec::new();

    for record in records.into_iter().filter(|r| !r.is_aggregate()) {
        match positions.get(record.location.as_str()) {
            Some(&idx) => {
                if record.date >= order[idx].date {
                    order[idx] = record;
                }
            }
            None => {
                positions.insert(record.location.as_str(), order.len());
                order.push(record);
            }
        }
    }

    let mut ranked: Vec<RankedEntity> = order
        .into_iter()
        .filter_map(|record| to_ranked(record, metric))
        .collect();

    sort_descending(&mut ranked);
    ranked.truncate(n);
    ranked
}

fn to_ranked(record: &Record, metric: Metric) -> Option<RankedEntity> {
    record.value(metric).map(|value| RankedEntity {
        location: record.location.clone(),
        value,
    })
}

fn sort_descending(ranked: &mut [RankedEntity]) {
    // sort_by is stable: ties keep encounter order
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
}
