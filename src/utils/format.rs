//! Human-readable labels and value formatting for display.
//!
//! Every chart title, axis label and statistics line goes through here so
//! the terminal output and the SVG charts agree on number formatting.

use crate::parser::Metric;
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Placeholder shown when a statistic has no value
pub const NOT_AVAILABLE: &str = "Data not available";

/// Turn a column identifier into a display label
///
/// Underscores become spaces, then every letter that follows a non-letter
/// is upper-cased and the rest lower-cased.
///
/// # Example
/// ```
/// use covid_tracker::utils::format::readable_label;
/// assert_eq!(readable_label("total_cases_per_million"), "Total Cases Per Million");
/// assert_eq!(readable_label("aged_65_older"), "Aged 65 Older");
/// ```
pub fn readable_label(id: &str) -> String {
    let mut label = String::with_capacity(id.len());
    let mut prev_is_letter = false;

    for c in id.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                label.extend(c.to_lowercase());
            } else {
                label.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            label.push(c);
            prev_is_letter = false;
        }
    }

    label
}

/// Format a number with thousands separators and a fixed number of decimals
///
/// `format_grouped(1234567.891, 2)` gives `"1,234,567.89"`.
pub fn format_grouped(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let factor = 10u64.pow(decimals);
    let scaled = (value.abs() * factor as f64).round() as u64;
    let whole = scaled / factor;
    let fraction = scaled % factor;

    let sign = if value < 0.0 && scaled > 0 { "-" } else { "" };
    let mut out = format!("{}{}", sign, whole.to_formatted_string(&Locale::en));
    if decimals > 0 {
        out.push_str(&format!(".{:0width$}", fraction, width = decimals as usize));
    }
    out
}

/// Format a headline statistic for the global summary
pub fn format_global_stat(metric: Metric, value: Option<f64>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };

    let id = metric.as_str();
    if id.ends_with("_rate") {
        format!("{:.2}", value)
    } else if id.contains("total") || id.contains("people") {
        format_grouped(value, 0)
    } else {
        format_grouped(value, 2)
    }
}

/// Format a per-country statistic (rates and per-capita values keep decimals)
pub fn format_country_stat(metric: Metric, value: f64) -> String {
    let id = metric.as_str();
    if id.contains("per_") || id.contains("_rate") {
        format!("{:.2}", value)
    } else {
        format_grouped(value, 0)
    }
}

/// Format a demographic or economic attribute with its unit
pub fn format_population_stat(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Population => format_grouped(value, 0),
        Metric::PopulationDensity => format!("{:.1} per km²", value),
        Metric::Aged65Older | Metric::Aged70Older => format!("{:.1}%", value),
        Metric::GdpPerCapita => format!("${}", format_grouped(value, 0)),
        Metric::LifeExpectancy => format!("{:.1} years", value),
        Metric::HumanDevelopmentIndex => format!("{:.3}", value),
        _ => format!("{}", value),
    }
}

/// Bar label for counts (`12,345`)
pub fn format_count(value: f64) -> String {
    format_grouped(value, 0)
}

/// Bar label for shares of population (`54.3%`)
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Long date used in "Latest data as of" lines, e.g. `March 09, 2023`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Short month label used on chart axes, e.g. `Mar 2023`
pub fn format_axis_date(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Compact axis tick for large magnitudes (`1.2M`, `350k`)
pub fn format_axis_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 10_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else if magnitude >= 100.0 || value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_rounds_fraction() {
        assert_eq!(format_grouped(2.346, 2), "2.35");
        assert_eq!(format_grouped(999.999, 2), "1,000.00");
        assert_eq!(format_grouped(-1234.4, 0), "-1,234");
    }

    #[test]
    fn label_keeps_digits() {
        assert_eq!(readable_label("aged_70_older"), "Aged 70 Older");
    }
}
