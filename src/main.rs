//! COVID-19 Global Data Tracker CLI
//!
//! Charts and statistics from the Our World in Data COVID-19 dataset.
//! Renders SVG charts and prints summary panels to the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use covid_tracker::chart::ChartConfig;
use covid_tracker::commands::{
    display_version, execute_country_stats, execute_global_stats, execute_graph,
    execute_vaccination, list_continents, list_countries, list_metrics, validate_report_file,
    CountryStatsArgs, GraphArgs, VaccinationArgs,
};
use covid_tracker::parser::{Dataset, Metric};
use covid_tracker::utils::config::{
    ALL_CONTINENTS, DATA_PATH_ENV, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_DATA_FILE,
    DEFAULT_TOP_N, WORLD_LABEL,
};

/// COVID-19 Global Data Tracker - charts from the OWID dataset
#[derive(Parser, Debug)]
#[command(name = "covid-tracker")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Path to the OWID COVID-19 CSV file
    #[arg(short, long, global = true, env = DATA_PATH_ENV, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Plot a metric for one country, or compare the top countries
    Graph {
        /// Country name, or "World"
        #[arg(short, long, default_value = WORLD_LABEL)]
        country: String,

        /// Metric column (see `metrics`)
        #[arg(short, long, default_value = "total_cases")]
        metric: Metric,

        /// Rank the top countries instead of plotting a time series
        #[arg(long)]
        compare: bool,

        /// Number of countries in the comparison
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Output path for the SVG chart
        #[arg(short, long, default_value = "artifacts/chart.svg")]
        output: PathBuf,

        /// Output path for a JSON report of the plotted data
        #[arg(long)]
        json: Option<PathBuf>,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
        height: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Show the latest global statistics
    GlobalStats,

    /// Show the latest statistics for one country
    CountryStats {
        /// Country name, or "World"
        #[arg(short, long, default_value = WORLD_LABEL)]
        country: String,

        /// Output path for a 2x2 trends chart
        #[arg(long)]
        trends: Option<PathBuf>,

        /// Output path for a JSON report of the trend series
        #[arg(long)]
        trends_json: Option<PathBuf>,
    },

    /// Render the vaccination progress dashboard
    Vaccination {
        /// Continent name, or "All"
        #[arg(long, default_value = ALL_CONTINENTS)]
        continent: String,

        /// One of the per-hundred vaccination metrics
        #[arg(short, long, default_value = "people_fully_vaccinated_per_hundred")]
        metric: Metric,

        /// Output path for the SVG dashboard
        #[arg(short, long, default_value = "artifacts/vaccination.svg")]
        output: PathBuf,

        /// Output path for a JSON report of the plotted data
        #[arg(long)]
        json: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// List the selectable countries
    Countries,

    /// List the selectable continents
    Continents,

    /// List the selectable metrics
    Metrics,

    /// Validate a chart report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Commands that do not need the dataset
    match &cli.command {
        Commands::Metrics => {
            list_metrics();
            return Ok(());
        }
        Commands::Validate { file } => return validate_report_file(file.clone()),
        Commands::Version => {
            display_version();
            return Ok(());
        }
        _ => {}
    }

    // Loaded once; a failure here is reported once and ends the session
    let dataset = Dataset::load(&cli.data)
        .with_context(|| format!("Error loading data from {}", cli.data.display()))?;

    match cli.command {
        Commands::Graph {
            country,
            metric,
            compare,
            top,
            output,
            json,
            width,
            height,
            summary,
        } => {
            let args = GraphArgs {
                country,
                metric,
                compare,
                top,
                output_svg: output,
                output_json: json,
                chart_config: ChartConfig::new().with_size(width, height),
                print_summary: summary,
            };
            execute_graph(&dataset, &args)?;
        }

        Commands::GlobalStats => {
            execute_global_stats(&dataset)?;
        }

        Commands::CountryStats {
            country,
            trends,
            trends_json,
        } => {
            let args = CountryStatsArgs {
                country,
                trends_svg: trends,
                trends_json,
                ..CountryStatsArgs::default()
            };
            execute_country_stats(&dataset, &args)?;
        }

        Commands::Vaccination {
            continent,
            metric,
            output,
            json,
            summary,
        } => {
            let args = VaccinationArgs {
                continent,
                metric,
                output_svg: output,
                output_json: json,
                print_summary: summary,
                ..VaccinationArgs::default()
            };
            execute_vaccination(&dataset, &args)?;
        }

        Commands::Countries => list_countries(&dataset),

        Commands::Continents => list_continents(&dataset),

        Commands::Metrics | Commands::Validate { .. } | Commands::Version => {}
    }

    Ok(())
}
