//! Terminal renderings of chart data.

use crate::aggregator::SmoothedSeries;
use crate::parser::{RankedEntity, SeriesPoint};
use crate::utils::format::{format_grouped, format_long_date};

const BAR_WIDTH: usize = 40;

/// Ranking table with proportional bars, highest first
///
/// `format_value` renders each value, e.g. `format_count` or `format_percent`.
pub fn generate_ranking_summary(
    title: &str,
    ranking: &[RankedEntity],
    format_value: impl Fn(f64) -> String,
) -> String {
    let mut lines = Vec::new();
    lines.push(format!("  {}", title));
    lines.push(format!("  {}", "-".repeat(title.chars().count().max(20))));

    let max_value = ranking.iter().map(|r| r.value).fold(0.0_f64, f64::max);

    for (rank, entry) in ranking.iter().enumerate() {
        let filled = if max_value > 0.0 {
            ((entry.value.max(0.0) / max_value) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        lines.push(format!(
            "  {:>2}. {:<28} {:<width$} {:>16}",
            rank + 1,
            truncate_name(&entry.location, 28),
            "█".repeat(filled),
            format_value(entry.value),
            width = BAR_WIDTH
        ));
    }

    lines.join("\n")
}

/// Short description of a series: range, latest value and peak
pub fn generate_series_summary(
    label: &str,
    series: &[SeriesPoint],
    smoothed: Option<&SmoothedSeries>,
) -> String {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return format!("  {}: no data", label);
    };

    let mut lines = vec![
        format!("  {}", label),
        format!(
            "  Range:  {} to {} ({} points)",
            format_long_date(first.date),
            format_long_date(last.date),
            series.len()
        ),
        format!(
            "  Latest: {} on {}",
            format_grouped(last.value, 2),
            format_long_date(last.date)
        ),
    ];

    if let Some(peak) = series.iter().max_by(|a, b| a.value.total_cmp(&b.value)) {
        lines.push(format!(
            "  Peak:   {} on {}",
            format_grouped(peak.value, 2),
            format_long_date(peak.date)
        ));
    }

    if let Some((smoothed, point)) = smoothed.and_then(|s| s.points.last().map(|p| (s, p))) {
        lines.push(format!(
            "  {}: {}",
            smoothed.label(),
            format_grouped(point.value, 2)
        ));
    }

    lines.join("\n")
}

fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() > max_len {
        let kept: String = name.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        name.to_string()
    }
}
