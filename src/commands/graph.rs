//! Graph command implementation.
//!
//! The graph command:
//! 1. Selects a country's series (or ranks the top countries)
//! 2. Smooths long series with a moving average
//! 3. Renders the chart
//! 4. Writes output files

use crate::aggregator::{most_common_latest_date, series_for, smooth, top_n};
use crate::chart::palette::{AVERAGE_RED, SERIES_BLUE};
use crate::chart::{
    generate_ranking_summary, generate_series_summary, Bar, BarChart, Figure, LineChart,
    LineSeries, Panel,
};
use crate::commands::models::GraphArgs;
use crate::output::{write_report, write_svg};
use crate::parser::{ChartReport, Dataset, Entity, NamedSeries, ReportKind};
use crate::utils::config::MAX_TOP_N;
use crate::utils::format::format_count;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the graph command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report describing what was plotted. A request with no matching data
/// still succeeds and produces a placeholder chart.
///
/// # Errors
/// * Invalid arguments
/// * Chart rendering or file write failures
pub fn execute_graph(dataset: &Dataset, args: &GraphArgs) -> Result<ChartReport> {
    let start_time = Instant::now();
    validate_graph_args(args)?;

    let (panel, report) = if args.compare {
        build_comparison(dataset, args)
    } else {
        build_time_series(dataset, args)
    };

    let svg = Figure::single(args.chart_config.clone(), panel)
        .render()
        .context("Failed to render chart")?;

    write_svg(&svg, &args.output_svg).context("Failed to write chart SVG")?;
    info!("✓ Chart written to: {}", args.output_svg.display());

    if let Some(json_path) = &args.output_json {
        write_report(&report, json_path).context("Failed to write chart report")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    println!(
        "Displaying data for: {} - {}",
        args.country,
        args.metric.label()
    );

    info!(
        "Graph completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(report)
}

/// Single entity over time, with a moving average once the series is long enough
///
/// **Private** - internal helper for execute_graph
fn build_time_series(dataset: &Dataset, args: &GraphArgs) -> (Panel, ChartReport) {
    let entity = Entity::from_name(&args.country);
    let label = args.metric.label();
    let title = format!("{} in {}", label, entity);

    let mut report = ChartReport::new(ReportKind::TimeSeries, &title, entity.name(), args.metric);

    let series = series_for(dataset.records(), &entity, args.metric);
    if series.is_empty() {
        warn!("No data for {} in {}", args.metric, entity);
        let message = format!("No data available for {} in {}", args.metric, entity);
        return (Panel::Placeholder(message), report);
    }

    let smoothed = smooth(&series);
    if args.print_summary {
        println!("{}", generate_series_summary(&title, &series, smoothed.as_ref()));
    }

    let mut chart = LineChart::new(&title)
        .with_axis_labels("Date", &label)
        .with_series(LineSeries::new(&label, SERIES_BLUE, series.clone()));

    report.series.push(NamedSeries {
        label: label.clone(),
        points: series,
    });

    if let Some(smoothed) = smoothed {
        debug!("Overlaying {}", smoothed.label());
        chart = chart
            .with_series(
                LineSeries::new(smoothed.label(), AVERAGE_RED, smoothed.points.clone())
                    .with_stroke_width(3.0),
            )
            .with_legend();
        report.series.push(NamedSeries {
            label: smoothed.label(),
            points: smoothed.points,
        });
    }

    (Panel::Line(chart), report)
}

/// Top countries on the most common latest reporting date
///
/// **Private** - internal helper for execute_graph
fn build_comparison(dataset: &Dataset, args: &GraphArgs) -> (Panel, ChartReport) {
    let label = args.metric.label();
    let title = format!("Top {} Countries by {}", args.top, label);

    let mut report = ChartReport::new(ReportKind::TopCountries, &title, "All", args.metric);
    report.reference_date = most_common_latest_date(dataset.records());

    let ranking = top_n(dataset.records(), args.metric, args.top, true);
    if ranking.is_empty() {
        warn!("No ranking data for {}", args.metric);
        let message = format!("No data available for {}", args.metric);
        return (Panel::Placeholder(message), report);
    }

    if args.print_summary {
        println!("{}", generate_ranking_summary(&title, &ranking, format_count));
    }

    let bars = ranking
        .iter()
        .map(|entry| Bar {
            label: entry.location.clone(),
            value: entry.value,
            value_label: format_count(entry.value),
        })
        .collect();

    report.ranking = ranking;
    (Panel::Bar(BarChart::new(title, label, bars)), report)
}

/// Validate graph arguments
///
/// **Public** - can be called before execute_graph for early validation
pub fn validate_graph_args(args: &GraphArgs) -> Result<()> {
    if args.country.trim().is_empty() {
        anyhow::bail!("Country cannot be empty");
    }

    if args.top == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    Ok(())
}
