use crate::chart::ChartConfig;
use crate::parser::Metric;
use crate::utils::config::{ALL_CONTINENTS, DEFAULT_TOP_N, WORLD_LABEL};
use std::path::PathBuf;

/// Arguments for the graph command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GraphArgs {
    /// Country name, or "World" for the world aggregate
    pub country: String,

    /// Metric to plot
    pub metric: Metric,

    /// Rank the top countries instead of plotting one country over time
    pub compare: bool,

    /// Number of countries in the comparison
    pub top: usize,

    /// Output path for the SVG chart
    pub output_svg: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    pub chart_config: ChartConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            country: WORLD_LABEL.to_string(),
            metric: Metric::TotalCases,
            compare: false,
            top: DEFAULT_TOP_N,
            output_svg: PathBuf::from("chart.svg"),
            output_json: None,
            chart_config: ChartConfig::default(),
            print_summary: false,
        }
    }
}

/// Arguments for the country statistics command
#[derive(Debug, Clone)]
pub struct CountryStatsArgs {
    pub country: String,

    /// Output path for the 2x2 trends chart (optional)
    pub trends_svg: Option<PathBuf>,

    /// Output path for the trends report JSON (optional)
    pub trends_json: Option<PathBuf>,

    pub chart_config: ChartConfig,
}

impl Default for CountryStatsArgs {
    fn default() -> Self {
        Self {
            country: WORLD_LABEL.to_string(),
            trends_svg: None,
            trends_json: None,
            chart_config: ChartConfig::default().with_size(1000, 800),
        }
    }
}

/// Arguments for the vaccination dashboard command
#[derive(Debug, Clone)]
pub struct VaccinationArgs {
    /// Continent name, or "All"
    pub continent: String,

    /// One of the per-hundred vaccination metrics
    pub metric: Metric,

    pub output_svg: PathBuf,

    pub output_json: Option<PathBuf>,

    pub chart_config: ChartConfig,

    pub print_summary: bool,
}

impl Default for VaccinationArgs {
    fn default() -> Self {
        Self {
            continent: ALL_CONTINENTS.to_string(),
            metric: Metric::PeopleFullyVaccinatedPerHundred,
            output_svg: PathBuf::from("vaccination.svg"),
            output_json: None,
            chart_config: ChartConfig::default()
                .with_title("COVID-19 Vaccination Progress")
                .with_size(1000, 800),
            print_summary: false,
        }
    }
}
