//! Figure layout: a titled SVG canvas split into a grid of panels.

use super::bar::BarChart;
use super::line::LineChart;
use super::palette::PLACEHOLDER_GRAY;
use crate::utils::error::ChartError;
use log::info;

const HEADER_HEIGHT: f64 = 40.0;

/// Figure configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "COVID-19 Global Data Tracker".to_string(),
            width: crate::utils::config::DEFAULT_CHART_WIDTH,
            height: crate::utils::config::DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Area of the canvas assigned to one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One cell of a figure
#[derive(Debug, Clone)]
pub enum Panel {
    Line(LineChart),
    Bar(BarChart),
    /// Shown instead of a chart when a query returned no data
    Placeholder(String),
}

impl Panel {
    fn render(&self, area: Rect, out: &mut String) {
        match self {
            Panel::Line(chart) => chart.render(area, out),
            Panel::Bar(chart) => chart.render(area, out),
            Panel::Placeholder(message) => render_placeholder(message, area, out),
        }
    }
}

/// A grid of panels rendered into one SVG document
#[derive(Debug, Clone)]
pub struct Figure {
    pub config: ChartConfig,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<Panel>,
}

impl Figure {
    /// A figure holding a single panel
    pub fn single(config: ChartConfig, panel: Panel) -> Self {
        Self {
            config,
            rows: 1,
            cols: 1,
            panels: vec![panel],
        }
    }

    /// A grid figure; panels fill row by row
    pub fn grid(config: ChartConfig, rows: usize, cols: usize, panels: Vec<Panel>) -> Self {
        Self {
            config,
            rows,
            cols,
            panels,
        }
    }

    /// Render the figure to an SVG string
    ///
    /// # Errors
    /// * `ChartError::EmptyFigure` - no panels, or a zero-sized grid
    /// * `ChartError::InvalidDimensions` - canvas too small to draw on
    pub fn render(&self) -> Result<String, ChartError> {
        if self.panels.is_empty() || self.rows == 0 || self.cols == 0 {
            return Err(ChartError::EmptyFigure);
        }

        let (width, height) = (self.config.width, self.config.height);
        if width < 200 || height < 150 {
            return Err(ChartError::InvalidDimensions { width, height });
        }

        info!(
            "Rendering figure '{}' with {} panels",
            self.config.title,
            self.panels.len()
        );

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            width, height, width, height
        ));
        svg.push_str(
            r#"<style>text { font-family: Arial, sans-serif; } .bar:hover, .line:hover { opacity: 0.8; }</style>"#,
        );
        svg.push_str(&format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            width, height
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="26" font-size="18" text-anchor="middle" font-weight="bold">{}</text>"#,
            width / 2,
            escape_xml(&self.config.title)
        ));

        let cell_width = width as f64 / self.cols as f64;
        let cell_height = (height as f64 - HEADER_HEIGHT) / self.rows as f64;

        for (i, panel) in self.panels.iter().take(self.rows * self.cols).enumerate() {
            let area = Rect {
                x: (i % self.cols) as f64 * cell_width,
                y: HEADER_HEIGHT + (i / self.cols) as f64 * cell_height,
                width: cell_width,
                height: cell_height,
            };
            panel.render(area, &mut svg);
        }

        svg.push_str("</svg>");

        info!("Figure rendered ({} bytes)", svg.len());
        Ok(svg)
    }
}

fn render_placeholder(message: &str, area: Rect, out: &mut String) {
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="16" text-anchor="middle" fill="{}">{}</text>"#,
        area.x + area.width / 2.0,
        area.y + area.height / 2.0,
        PLACEHOLDER_GRAY,
        escape_xml(message)
    ));
}

/// Escape text for use inside SVG elements and attributes
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Truncate a label to fit `width` pixels at roughly 7px per character
pub fn get_truncated_name(name: &str, width: f64) -> Option<String> {
    const MIN_LABEL_WIDTH: f64 = 20.0;
    const CHAR_WIDTH: f64 = 7.0;

    if width <= MIN_LABEL_WIDTH || name.is_empty() {
        return None;
    }

    let max_chars = (width / CHAR_WIDTH) as usize;
    let char_count = name.chars().count();
    if char_count > max_chars && max_chars > 3 {
        let kept: String = name.chars().take(max_chars - 3).collect();
        Some(format!("{}...", kept))
    } else {
        Some(name.to_string())
    }
}
