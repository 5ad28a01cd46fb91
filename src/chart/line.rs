//! Date-axis line charts.

use super::figure::{escape_xml, Rect};
use super::palette::{AXIS_GRAY, GRID_GRAY};
use crate::parser::SeriesPoint;
use crate::utils::format::{format_axis_date, format_axis_value};
use chrono::{Datelike, Months, NaiveDate};

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 34.0;
const MARGIN_BOTTOM: f64 = 64.0;
const MAX_X_TICKS: usize = 8;
const Y_TICKS: usize = 5;

/// One line on a chart
#[derive(Debug, Clone)]
pub struct LineSeries {
    pub label: String,
    pub color: String,
    pub stroke_width: f64,
    pub points: Vec<SeriesPoint>,
}

impl LineSeries {
    pub fn new(label: impl Into<String>, color: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            stroke_width: 2.0,
            points,
        }
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }
}

/// A line chart with a date x-axis
#[derive(Debug, Clone, Default)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<LineSeries>,
    /// Fixed y-range, e.g. `(0.0, 100.0)` for percentages
    pub y_range: Option<(f64, f64)>,
    pub show_legend: bool,
}

impl LineChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_series(mut self, series: LineSeries) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    /// Draw the chart inside `area`
    pub fn render(&self, area: Rect, out: &mut String) {
        let plot = Rect {
            x: area.x + MARGIN_LEFT,
            y: area.y + MARGIN_TOP,
            width: (area.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (area.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        };

        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="15" text-anchor="middle">{}</text>"#,
            area.x + area.width / 2.0,
            area.y + 22.0,
            escape_xml(&self.title)
        ));

        let Some(scale) = self.scale() else {
            return;
        };

        self.render_grid(&scale, plot, out);

        for series in self.series.iter().filter(|s| !s.points.is_empty()) {
            let coords: Vec<String> = series
                .points
                .iter()
                .map(|p| {
                    let (x, y) = scale.project(p, plot);
                    format!("{:.2},{:.2}", x, y)
                })
                .collect();
            out.push_str(&format!(
                r#"<polyline class="line" points="{}" fill="none" stroke="{}" stroke-width="{}"><title>{}</title></polyline>"#,
                coords.join(" "),
                series.color,
                series.stroke_width,
                escape_xml(&series.label)
            ));
        }

        self.render_axis_labels(area, plot, out);

        if self.show_legend {
            self.render_legend(plot, out);
        }
    }

    fn scale(&self) -> Option<Scale> {
        let points = self.series.iter().flat_map(|s| s.points.iter());

        let mut bounds: Option<(NaiveDate, NaiveDate, f64, f64)> = None;
        for p in points {
            bounds = Some(match bounds {
                None => (p.date, p.date, p.value, p.value),
                Some((d0, d1, v0, v1)) => (
                    d0.min(p.date),
                    d1.max(p.date),
                    v0.min(p.value),
                    v1.max(p.value),
                ),
            });
        }
        let (start, end, min_value, max_value) = bounds?;

        let (y_min, y_max) = match self.y_range {
            Some(range) => range,
            None => {
                // The axis always spans zero; headroom is 5% of that span
                let low = min_value.min(0.0);
                let top = max_value.max(0.0);
                let high = if top > low {
                    top + (top - low) * 0.05
                } else {
                    low + 1.0
                };
                (low, high)
            }
        };

        Some(Scale {
            start,
            span_days: (end - start).num_days().max(1) as f64,
            end,
            y_min,
            y_max,
        })
    }

    fn render_grid(&self, scale: &Scale, plot: Rect, out: &mut String) {
        // Horizontal gridlines with value ticks
        for i in 0..=Y_TICKS {
            let value = scale.y_min + (scale.y_max - scale.y_min) * i as f64 / Y_TICKS as f64;
            let y = scale.y_position(value, plot);
            out.push_str(&format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-dasharray="4 3"/>"#,
                plot.x,
                y,
                plot.x + plot.width,
                y,
                GRID_GRAY
            ));
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end" fill="{}">{}</text>"#,
                plot.x - 6.0,
                y + 4.0,
                AXIS_GRAY,
                format_axis_value(value)
            ));
        }

        // Vertical gridlines at month starts, labels rotated like the desktop charts
        for date in month_ticks(scale.start, scale.end, MAX_X_TICKS) {
            let x = scale.x_position(date, plot);
            out.push_str(&format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-dasharray="4 3"/>"#,
                x,
                plot.y,
                x,
                plot.y + plot.height,
                GRID_GRAY
            ));
            let label_y = plot.y + plot.height + 14.0;
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end" fill="{}" transform="rotate(-45 {:.2} {:.2})">{}</text>"#,
                x,
                label_y,
                AXIS_GRAY,
                x,
                label_y,
                format_axis_date(date)
            ));
        }

        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}"/>"#,
            plot.x, plot.y, plot.width, plot.height, AXIS_GRAY
        ));
    }

    fn render_axis_labels(&self, area: Rect, plot: Rect, out: &mut String) {
        if !self.x_label.is_empty() {
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="middle">{}</text>"#,
                plot.x + plot.width / 2.0,
                area.y + area.height - 6.0,
                escape_xml(&self.x_label)
            ));
        }
        if !self.y_label.is_empty() {
            let x = area.x + 14.0;
            let y = plot.y + plot.height / 2.0;
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="middle" transform="rotate(-90 {:.2} {:.2})">{}</text>"#,
                x,
                y,
                x,
                y,
                escape_xml(&self.y_label)
            ));
        }
    }

    fn render_legend(&self, plot: Rect, out: &mut String) {
        let entries: Vec<&LineSeries> = self.series.iter().filter(|s| !s.points.is_empty()).collect();
        for (i, series) in entries.iter().enumerate() {
            let y = plot.y + 10.0 + i as f64 * 18.0;
            out.push_str(&format!(
                r#"<rect x="{:.2}" y="{:.2}" width="14" height="4" fill="{}"/>"#,
                plot.x + 10.0,
                y,
                series.color
            ));
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="12">{}</text>"#,
                plot.x + 30.0,
                y + 6.0,
                escape_xml(&series.label)
            ));
        }
    }
}

/// Maps data coordinates onto a plot rectangle
struct Scale {
    start: NaiveDate,
    end: NaiveDate,
    span_days: f64,
    y_min: f64,
    y_max: f64,
}

impl Scale {
    fn x_position(&self, date: NaiveDate, plot: Rect) -> f64 {
        let offset = (date - self.start).num_days() as f64;
        plot.x + offset / self.span_days * plot.width
    }

    fn y_position(&self, value: f64, plot: Rect) -> f64 {
        let range = self.y_max - self.y_min;
        let ratio = if range > 0.0 {
            ((value - self.y_min) / range).clamp(0.0, 1.0)
        } else {
            0.0
        };
        plot.y + plot.height - ratio * plot.height
    }

    fn project(&self, point: &SeriesPoint, plot: Rect) -> (f64, f64) {
        (
            self.x_position(point.date, plot),
            self.y_position(point.value, plot),
        )
    }
}

/// First-of-month tick dates between `start` and `end`
///
/// The month step grows until at most `max_ticks` ticks remain.
pub fn month_ticks(start: NaiveDate, end: NaiveDate, max_ticks: usize) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(start.year(), start.month(), 1) else {
        return Vec::new();
    };
    let first = if first < start {
        match first.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => return Vec::new(),
        }
    } else {
        first
    };
    if first > end {
        return Vec::new();
    }

    let months_spanned = (end.year() - first.year()) * 12 + end.month() as i32 - first.month() as i32;
    let max_ticks = max_ticks.max(1) as i32;
    let step = (months_spanned / max_ticks + 1).max(1) as u32;

    let mut ticks = Vec::new();
    let mut current = first;
    while current <= end {
        ticks.push(current);
        match current.checked_add_months(Months::new(step)) {
            Some(next) => current = next,
            None => break,
        }
    }
    ticks
}
