//! Global and per-country statistics.
//!
//! Text panels are built as strings so they can be printed or inspected;
//! the country trends chart is an optional 2x2 SVG.

use crate::aggregator::{latest_record, population_of, population_share, series_for};
use crate::chart::palette::{AVERAGE_RED, SERIES_BLUE, TESTING_ORANGE, VACCINATION_GREEN};
use crate::chart::{ChartConfig, Figure, LineChart, LineSeries, Panel};
use crate::commands::models::CountryStatsArgs;
use crate::output::{write_report, write_svg};
use crate::parser::{ChartReport, Dataset, Entity, Metric, NamedSeries, Record, ReportKind};
use crate::utils::format::{
    format_country_stat, format_global_stat, format_long_date, format_population_stat,
    readable_label,
};
use anyhow::{Context, Result};
use log::{info, warn};

/// Print the global summary
pub fn execute_global_stats(dataset: &Dataset) -> Result<()> {
    println!("{}", render_global_stats(dataset));
    Ok(())
}

/// Headline figures from the world aggregate's latest record
pub fn render_global_stats(dataset: &Dataset) -> String {
    let Some(latest) = latest_record(dataset.records(), &Entity::World) else {
        warn!("Dataset has no world aggregate rows");
        return "No global data available".to_string();
    };

    let mut lines = vec![
        "Global COVID-19 Statistics".to_string(),
        format!("Latest data as of: {}", format_long_date(latest.date)),
        String::new(),
    ];

    for (label, metric) in Metric::GLOBAL_HEADLINES {
        lines.push(format!(
            "  {:<28} {}",
            label,
            format_global_stat(metric, latest.value(metric))
        ));
    }

    lines.join("\n")
}

/// Print a country's statistics and optionally write its trends chart
pub fn execute_country_stats(dataset: &Dataset, args: &CountryStatsArgs) -> Result<()> {
    if args.country.trim().is_empty() {
        anyhow::bail!("Country cannot be empty");
    }

    let entity = Entity::from_name(&args.country);
    println!("{}", render_country_stats(dataset, &entity));

    if args.trends_svg.is_none() && args.trends_json.is_none() {
        return Ok(());
    }

    let (figure, report) = build_trends_figure(dataset, &entity, args.chart_config.clone());

    if let Some(path) = &args.trends_svg {
        let svg = figure.render().context("Failed to render trends chart")?;
        write_svg(&svg, path).context("Failed to write trends SVG")?;
        info!("✓ Trends written to: {}", path.display());
    }

    if let Some(path) = &args.trends_json {
        write_report(&report, path).context("Failed to write trends report")?;
        info!("✓ Report written to: {}", path.display());
    }

    Ok(())
}

/// Current statistics by section, plus population data when available
pub fn render_country_stats(dataset: &Dataset, entity: &Entity) -> String {
    let Some(latest) = latest_record(dataset.records(), entity) else {
        warn!("No records for {}", entity);
        return format!("No data available for {}", entity);
    };

    let mut lines = vec![
        format!("COVID-19 Statistics for {}", entity),
        format!("Latest data as of: {}", format_long_date(latest.date)),
    ];

    lines.push(String::new());
    lines.push("Current Stats".to_string());
    lines.extend(render_sections(latest));

    if latest.value(Metric::Population).is_some() {
        lines.push(String::new());
        lines.push("Population Data".to_string());
        lines.extend(render_population(latest));
    }

    lines.join("\n")
}

fn render_sections(latest: &Record) -> Vec<String> {
    let mut lines = Vec::new();

    for (section, metrics) in Metric::COUNTRY_SECTIONS {
        lines.push(format!("  {}", section));
        let before = lines.len();

        for metric in metrics {
            if let Some(value) = latest.value(metric) {
                lines.push(format!(
                    "    {:<28} {:>18}",
                    format!("{}:", readable_label(metric.as_str())),
                    format_country_stat(metric, value)
                ));
            }
        }

        if lines.len() == before {
            lines.push("    No data available".to_string());
        }
    }

    lines
}

fn render_population(latest: &Record) -> Vec<String> {
    Metric::POPULATION_ATTRIBUTES
        .iter()
        .filter_map(|&(label, metric)| {
            latest.value(metric).map(|value| {
                format!(
                    "  {:<26} {}",
                    format!("{}:", label),
                    format_population_stat(metric, value)
                )
            })
        })
        .collect()
}

/// Four trend panels: cases, deaths, test positivity and full vaccination
///
/// The report holds one series per panel that had data, labelled with the
/// panel title.
///
/// **Public** - used by execute_country_stats and tests
pub fn build_trends_figure(
    dataset: &Dataset,
    entity: &Entity,
    config: ChartConfig,
) -> (Figure, ChartReport) {
    let records = dataset.records();
    let title = format!("Trends for {}", entity);
    let mut report = ChartReport::new(
        ReportKind::Trends,
        &title,
        entity.name(),
        Metric::NewCasesSmoothed,
    );

    let mut trend = |metric: Metric, label: &str, color: &str, empty: &str| {
        let series = series_for(records, entity, metric);
        if series.is_empty() {
            return Panel::Placeholder(empty.to_string());
        }
        report.series.push(NamedSeries {
            label: label.to_string(),
            points: series.clone(),
        });
        Panel::Line(LineChart::new(label).with_series(LineSeries::new(label, color, series)))
    };

    let cases = trend(
        Metric::NewCasesSmoothed,
        "New Cases (7-day avg)",
        SERIES_BLUE,
        "No cases data available",
    );
    let deaths = trend(
        Metric::NewDeathsSmoothed,
        "New Deaths (7-day avg)",
        AVERAGE_RED,
        "No deaths data available",
    );
    let testing = trend(
        Metric::PositiveRate,
        "Positive Test Rate",
        TESTING_ORANGE,
        "No testing data available",
    );

    let vaccinated = series_for(records, entity, Metric::PeopleFullyVaccinated);
    let vaccination = if vaccinated.is_empty() {
        Panel::Placeholder("No vaccination data available".to_string())
    } else {
        let (label, points, y_range) = match population_of(records, entity) {
            Some(population) if population > 0.0 => (
                "Fully Vaccinated (%)",
                population_share(&vaccinated, population),
                Some((0.0, 100.0)),
            ),
            _ => ("Fully Vaccinated (Count)", vaccinated, None),
        };
        report.series.push(NamedSeries {
            label: label.to_string(),
            points: points.clone(),
        });
        let mut chart =
            LineChart::new(label).with_series(LineSeries::new(label, VACCINATION_GREEN, points));
        if let Some((min, max)) = y_range {
            chart = chart.with_y_range(min, max);
        }
        Panel::Line(chart)
    };

    let config = config.with_title(title);
    let figure = Figure::grid(config, 2, 2, vec![cases, deaths, testing, vaccination]);
    (figure, report)
}
