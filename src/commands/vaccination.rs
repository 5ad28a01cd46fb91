//! Vaccination progress dashboard.
//!
//! Two stacked panels: the top countries by their latest vaccination rate,
//! and the rate over time for the world and continents (or for one
//! continent and its leading countries).

use crate::aggregator::{filter_by_continent, latest_per_country, series_for, timeline_entities};
use crate::chart::palette::viridis;
use crate::chart::{generate_ranking_summary, Bar, BarChart, Figure, LineChart, LineSeries, Panel};
use crate::commands::models::VaccinationArgs;
use crate::output::{write_report, write_svg};
use crate::parser::{ChartReport, Dataset, Metric, NamedSeries, ReportKind};
use crate::utils::config::{ALL_CONTINENTS, TIMELINE_TOP_COUNTRIES, VACCINATION_TOP_N};
use crate::utils::format::format_percent;
use anyhow::{Context, Result};
use log::{debug, info, warn};

const SHARE_AXIS_LABEL: &str = "Percentage of Population (%)";

/// Execute the vaccination dashboard command
///
/// **Public** - main entry point called from main.rs
pub fn execute_vaccination(dataset: &Dataset, args: &VaccinationArgs) -> Result<ChartReport> {
    validate_vaccination_args(dataset, args)?;

    let (figure, report) = build_vaccination_dashboard(dataset, args);
    let svg = figure.render().context("Failed to render vaccination dashboard")?;

    write_svg(&svg, &args.output_svg).context("Failed to write vaccination SVG")?;
    info!("✓ Dashboard written to: {}", args.output_svg.display());

    if let Some(json_path) = &args.output_json {
        write_report(&report, json_path).context("Failed to write vaccination report")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    if args.print_summary && !report.ranking.is_empty() {
        println!(
            "{}",
            generate_ranking_summary(&report.title, &report.ranking, format_percent)
        );
    }

    Ok(report)
}

/// Build both dashboard panels and the matching report
///
/// **Public** - used by execute_vaccination and tests
pub fn build_vaccination_dashboard(
    dataset: &Dataset,
    args: &VaccinationArgs,
) -> (Figure, ChartReport) {
    let metric_title = args.metric.vaccination_title();
    let bar_title = format!("Top Countries by Vaccination Rate ({})", metric_title);

    let mut report = ChartReport::new(
        ReportKind::Vaccination,
        &bar_title,
        &args.continent,
        args.metric,
    );

    let subset = filter_by_continent(dataset.records(), &args.continent);
    let ranking = latest_per_country(subset.iter().copied(), args.metric, VACCINATION_TOP_N);
    debug!("Vaccination ranking has {} countries", ranking.len());

    let bar_panel = if ranking.is_empty() {
        warn!("No vaccination data for {}", args.continent);
        Panel::Placeholder("No vaccination data available".to_string())
    } else {
        let bars = ranking
            .iter()
            .map(|entry| Bar {
                label: entry.location.clone(),
                value: entry.value,
                value_label: format_percent(entry.value),
            })
            .collect();
        Panel::Bar(BarChart::new(bar_title, SHARE_AXIS_LABEL, bars))
    };

    let entities = timeline_entities(
        dataset.records(),
        &args.continent,
        &ranking,
        TIMELINE_TOP_COUNTRIES,
    );
    let colors = viridis(entities.len());

    let timeline_title = format!("Vaccination Progress Over Time ({})", metric_title);
    let mut timeline = LineChart::new(&timeline_title)
        .with_axis_labels("Date", SHARE_AXIS_LABEL)
        .with_legend();

    for (entity, color) in entities.iter().zip(colors) {
        let points = series_for(dataset.records(), entity, args.metric);
        if points.is_empty() {
            continue;
        }
        timeline = timeline.with_series(LineSeries::new(entity.name(), color, points.clone()));
        report.series.push(NamedSeries {
            label: entity.name().to_string(),
            points,
        });
    }

    let timeline_panel = if timeline.series.is_empty() {
        Panel::Placeholder("No timeline data available".to_string())
    } else {
        Panel::Line(timeline)
    };

    report.ranking = ranking;

    let figure = Figure::grid(
        args.chart_config.clone(),
        2,
        1,
        vec![bar_panel, timeline_panel],
    );
    (figure, report)
}

/// Validate vaccination arguments
///
/// **Public** - can be called before execute_vaccination for early validation
pub fn validate_vaccination_args(dataset: &Dataset, args: &VaccinationArgs) -> Result<()> {
    if !Metric::VACCINATION.contains(&args.metric) {
        let allowed: Vec<&str> = Metric::VACCINATION.iter().map(|m| m.as_str()).collect();
        anyhow::bail!(
            "{} is not a vaccination metric (expected one of: {})",
            args.metric,
            allowed.join(", ")
        );
    }

    if args.continent != ALL_CONTINENTS && !dataset.continents().contains(&args.continent) {
        warn!(
            "'{}' is not a continent in this dataset; the dashboard will be empty",
            args.continent
        );
    }

    Ok(())
}
