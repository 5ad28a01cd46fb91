//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.
//! Selections (country, metric, continent) arrive as explicit arguments.

pub mod graph;
pub mod models;
pub mod stats;
pub mod utils;
pub mod vaccination;

// Re-export main command functions
pub use graph::{execute_graph, validate_graph_args};
pub use models::{CountryStatsArgs, GraphArgs, VaccinationArgs};
pub use stats::{
    build_trends_figure, execute_country_stats, execute_global_stats, render_country_stats,
    render_global_stats,
};
pub use utils::{display_version, list_continents, list_countries, list_metrics, validate_report_file};
pub use vaccination::{build_vaccination_dashboard, execute_vaccination, validate_vaccination_args};
