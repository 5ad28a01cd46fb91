use crate::output::read_report;
use crate::parser::{Dataset, Metric};
use crate::utils::config::{SCHEMA_VERSION, WORLD_LABEL};
use anyhow::Result;
use std::path::PathBuf;

/// Validate a chart report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Kind: {:?}", report.kind);
    println!("  Title: {}", report.title);
    println!("  Subject: {}", report.subject);
    println!("  Series: {}", report.series.len());
    println!("  Ranked Entries: {}", report.ranking.len());
    if let Some(date) = report.reference_date {
        println!("  Reference Date: {}", date);
    }

    Ok(())
}

/// Print the country choices, World first
pub fn list_countries(dataset: &Dataset) {
    println!("{}", WORLD_LABEL);
    for country in dataset.countries() {
        println!("{}", country);
    }
}

/// Print the continent choices, "All" first
pub fn list_continents(dataset: &Dataset) {
    println!("{}", crate::utils::config::ALL_CONTINENTS);
    for continent in dataset.continents() {
        println!("{}", continent);
    }
}

/// Print the metrics offered by each view
pub fn list_metrics() {
    println!("Chart metrics:");
    for metric in Metric::CHARTABLE {
        println!("  {:<40} {}", metric.as_str(), metric.label());
    }
    println!();
    println!("Vaccination metrics:");
    for metric in Metric::VACCINATION {
        println!("  {:<40} {}", metric.as_str(), metric.vaccination_title());
    }
}

/// Display version information
pub fn display_version() {
    println!("COVID-19 Global Data Tracker v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Charts and statistics from the Our World in Data COVID-19 dataset.");
}
