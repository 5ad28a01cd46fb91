//! Horizontal bar charts for rankings.

use super::figure::{escape_xml, get_truncated_name, Rect};
use super::palette::{viridis, AXIS_GRAY, GRID_GRAY};
use crate::utils::format::format_axis_value;

const MARGIN_LEFT: f64 = 160.0;
const MARGIN_RIGHT: f64 = 80.0;
const MARGIN_TOP: f64 = 34.0;
const MARGIN_BOTTOM: f64 = 44.0;
const X_TICKS: usize = 5;

/// One bar with its pre-formatted value label
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub value_label: String,
}

/// Bars drawn top to bottom in the given order, so the highest goes first
#[derive(Debug, Clone, Default)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            bars,
        }
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

        if self.bars.is_empty() {
            return;
        }

        let max_value = self
            .bars
            .iter()
            .map(|b| b.value)
            .fold(0.0_f64, f64::max);
        let x_max = if max_value > 0.0 { max_value } else { 1.0 };
        let x_of = |value: f64| plot.x + (value.max(0.0) / x_max).min(1.0) * plot.width;

        // Vertical gridlines along the value axis
        for i in 0..=X_TICKS {
            let value = x_max * i as f64 / X_TICKS as f64;
            let x = x_of(value);
            out.push_str(&format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-dasharray="4 3"/>"#,
                x,
                plot.y,
                x,
                plot.y + plot.height,
                GRID_GRAY
            ));
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="middle" fill="{}">{}</text>"#,
                x,
                plot.y + plot.height + 14.0,
                AXIS_GRAY,
                format_axis_value(value)
            ));
        }

        let colors = viridis(self.bars.len());
        let slot = plot.height / self.bars.len() as f64;
        let bar_height = slot * 0.8;

        for (i, (bar, color)) in self.bars.iter().zip(colors.iter()).enumerate() {
            let y = plot.y + i as f64 * slot + (slot - bar_height) / 2.0;
            let end_x = x_of(bar.value);

            out.push_str(&format!(
                r#"<rect class="bar" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{}: {}</title></rect>"#,
                plot.x,
                y,
                end_x - plot.x,
                bar_height,
                color,
                escape_xml(&bar.label),
                escape_xml(&bar.value_label)
            ));

            if let Some(name) = get_truncated_name(&bar.label, MARGIN_LEFT - 10.0) {
                out.push_str(&format!(
                    r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="end" dominant-baseline="middle">{}</text>"#,
                    plot.x - 6.0,
                    y + bar_height / 2.0,
                    escape_xml(&name)
                ));
            }

            // Value label just past the bar end, offset by 1% of the axis
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="11" dominant-baseline="middle">{}</text>"#,
                end_x + plot.width * 0.01,
                y + bar_height / 2.0,
                escape_xml(&bar.value_label)
            ));
        }

        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"/>"#,
            plot.x,
            plot.y,
            plot.x,
            plot.y + plot.height,
            AXIS_GRAY
        ));

        if !self.x_label.is_empty() {
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="middle">{}</text>"#,
                plot.x + plot.width / 2.0,
                area.y + area.height - 8.0,
                escape_xml(&self.x_label)
            ));
        }
    }
}
