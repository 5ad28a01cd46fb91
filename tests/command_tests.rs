use chrono::NaiveDate;
use covid_tracker::chart::ChartConfig;
use covid_tracker::commands::{
    build_trends_figure, build_vaccination_dashboard, execute_country_stats, execute_graph,
    execute_vaccination, render_country_stats, render_global_stats, validate_graph_args,
    validate_vaccination_args, CountryStatsArgs, GraphArgs, VaccinationArgs,
};
use covid_tracker::output::read_report;
use covid_tracker::parser::{Dataset, Entity, Metric, RankedEntity, ReportKind};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const COLUMNS: &str = "iso_code,continent,location,date,total_cases,new_cases,\
new_cases_smoothed,people_fully_vaccinated,people_fully_vaccinated_per_hundred,\
population,reproduction_rate";

const ROWS: &[&str] = &[
    "OWID_WRL,,World,2021-01-01,1000,10,,,0.5,8000000000,1.1",
    "OWID_WRL,,World,2021-01-02,1100,100,,,3.0,8000000000,1.05",
    "OWID_EUR,,Europe,2021-01-02,600,,,,,,",
    "OWID_HIC,,High income,2021-01-02,700,,,,,,",
    "DEU,Europe,Germany,2021-01-01,300,,,1000,1.2,83000000,",
    "DEU,Europe,Germany,2021-01-02,350,50,40,2000,2.4,83000000,",
    "FRA,Europe,France,2021-01-02,500,,,3000,4.5,67000000,",
    "AFG,Asia,Afghanistan,2021-01-02,100,,,,,40000000,",
    "JPN,Asia,Japan,2021-01-01,50,,,500,0.4,125000000,",
];

fn create_test_dataset() -> Dataset {
    let csv = format!("{}\n{}\n", COLUMNS, ROWS.join("\n"));
    Dataset::from_reader(csv.as_bytes()).unwrap()
}

fn ranked(location: &str, value: f64) -> RankedEntity {
    RankedEntity {
        location: location.to_string(),
        value,
    }
}

#[test]
fn test_graph_time_series_writes_files() {
    let dataset = create_test_dataset();
    let dir = tempdir().unwrap();
    let args = GraphArgs {
        country: "World".to_string(),
        metric: Metric::TotalCases,
        output_svg: dir.path().join("chart.svg"),
        output_json: Some(dir.path().join("chart.json")),
        ..GraphArgs::default()
    };

    let report = execute_graph(&dataset, &args).unwrap();

    assert_eq!(report.kind, ReportKind::TimeSeries);
    assert_eq!(report.subject, "World");
    // Two points are too few for a moving average
    assert_eq!(report.series.len(), 1);
    assert_eq!(report.series[0].points.len(), 2);

    let svg = std::fs::read_to_string(dir.path().join("chart.svg")).unwrap();
    assert!(svg.contains("Total Cases in World"));

    let saved = read_report(dir.path().join("chart.json")).unwrap();
    assert_eq!(saved.series, report.series);
}

#[test]
fn test_graph_unknown_country_renders_placeholder() {
    let dataset = create_test_dataset();
    let dir = tempdir().unwrap();
    let args = GraphArgs {
        country: "Atlantis".to_string(),
        output_svg: dir.path().join("chart.svg"),
        ..GraphArgs::default()
    };

    let report = execute_graph(&dataset, &args).unwrap();

    assert!(!report.has_data());
    let svg = std::fs::read_to_string(dir.path().join("chart.svg")).unwrap();
    assert!(svg.contains("No data available for total_cases in Atlantis"));
}

#[test]
fn test_graph_comparison_ranks_countries() {
    let dataset = create_test_dataset();
    let dir = tempdir().unwrap();
    let args = GraphArgs {
        compare: true,
        top: 2,
        output_svg: dir.path().join("top.svg"),
        ..GraphArgs::default()
    };

    let report = execute_graph(&dataset, &args).unwrap();

    assert_eq!(report.kind, ReportKind::TopCountries);
    assert_eq!(report.reference_date, NaiveDate::from_ymd_opt(2021, 1, 2));
    assert_eq!(
        report.ranking,
        vec![ranked("France", 500.0), ranked("Germany", 350.0)]
    );
}

#[test]
fn test_validate_graph_args() {
    let valid = GraphArgs::default();
    assert!(validate_graph_args(&valid).is_ok());

    let empty_country = GraphArgs {
        country: "  ".to_string(),
        ..GraphArgs::default()
    };
    assert!(validate_graph_args(&empty_country).is_err());

    let zero_top = GraphArgs {
        top: 0,
        ..GraphArgs::default()
    };
    assert!(validate_graph_args(&zero_top).is_err());

    let huge_top = GraphArgs {
        top: 10_000,
        ..GraphArgs::default()
    };
    assert!(validate_graph_args(&huge_top).is_err());
}

#[test]
fn test_global_stats() {
    let dataset = create_test_dataset();

    let text = render_global_stats(&dataset);

    assert!(text.contains("Latest data as of: January 02, 2021"));
    assert!(text.contains("1,100"));
    assert!(text.contains("1.05"));
    assert!(text.contains("Data not available"));
}

#[test]
fn test_global_stats_without_world_rows() {
    let csv = format!("{}\n{}\n", COLUMNS, ROWS[4]);
    let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

    assert_eq!(render_global_stats(&dataset), "No global data available");
}

#[test]
fn test_country_stats() {
    let dataset = create_test_dataset();

    let text = render_country_stats(&dataset, &Entity::Location("Germany".to_string()));

    assert!(text.contains("COVID-19 Statistics for Germany"));
    assert!(text.contains("Latest data as of: January 02, 2021"));
    assert!(text.contains("Total Cases:"));
    assert!(text.contains("350"));
    assert!(text.contains("Population Data"));
    assert!(text.contains("83,000,000"));
}

#[test]
fn test_country_stats_unknown_country() {
    let dataset = create_test_dataset();

    let text = render_country_stats(&dataset, &Entity::Location("Atlantis".to_string()));

    assert_eq!(text, "No data available for Atlantis");
}

#[test]
fn test_trends_figure_has_four_panels() {
    let dataset = create_test_dataset();

    let (figure, report) = build_trends_figure(
        &dataset,
        &Entity::Location("Germany".to_string()),
        ChartConfig::default(),
    );

    assert_eq!(figure.panels.len(), 4);
    assert_eq!(figure.config.title, "Trends for Germany");

    let svg = figure.render().unwrap();
    assert!(svg.contains("No deaths data available"));
    assert!(svg.contains("No testing data available"));
    assert!(svg.contains("Fully Vaccinated (%)"));

    assert_eq!(report.kind, ReportKind::Trends);
    assert_eq!(report.subject, "Germany");
    let labels: Vec<&str> = report.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["New Cases (7-day avg)", "Fully Vaccinated (%)"]);
}

#[test]
fn test_country_stats_writes_trends_report() {
    let dataset = create_test_dataset();
    let dir = tempdir().unwrap();
    let args = CountryStatsArgs {
        country: "Germany".to_string(),
        trends_svg: Some(dir.path().join("trends.svg")),
        trends_json: Some(dir.path().join("trends.json")),
        ..CountryStatsArgs::default()
    };

    execute_country_stats(&dataset, &args).unwrap();

    assert!(dir.path().join("trends.svg").exists());
    let report = read_report(dir.path().join("trends.json")).unwrap();
    assert_eq!(report.kind, ReportKind::Trends);
    assert_eq!(report.series.len(), 2);
    // 2000 of 83,000,000 people
    let share = report.series[1].points.last().unwrap().value;
    assert!((share - 2000.0 / 83_000_000.0 * 100.0).abs() < 1e-12);
}

#[test]
fn test_vaccination_dashboard_all() {
    let dataset = create_test_dataset();

    let (figure, report) = build_vaccination_dashboard(&dataset, &VaccinationArgs::default());

    assert_eq!(figure.panels.len(), 2);
    assert_eq!(
        report.ranking,
        vec![
            ranked("France", 4.5),
            ranked("Germany", 2.4),
            ranked("Japan", 0.4),
        ]
    );
    // Europe has no vaccination rows, so only the world line is drawn
    let labels: Vec<&str> = report.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["World"]);
}

#[test]
fn test_vaccination_dashboard_continent() {
    let dataset = create_test_dataset();
    let args = VaccinationArgs {
        continent: "Europe".to_string(),
        ..VaccinationArgs::default()
    };

    let (_, report) = build_vaccination_dashboard(&dataset, &args);

    assert_eq!(
        report.ranking,
        vec![ranked("France", 4.5), ranked("Germany", 2.4)]
    );
    let labels: Vec<&str> = report.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["France", "Germany"]);
}

#[test]
fn test_vaccination_empty_continent_renders_placeholders() {
    let dataset = create_test_dataset();
    let dir = tempdir().unwrap();
    let args = VaccinationArgs {
        continent: "Oceania".to_string(),
        output_svg: dir.path().join("vaccination.svg"),
        ..VaccinationArgs::default()
    };

    let report = execute_vaccination(&dataset, &args).unwrap();

    assert!(!report.has_data());
    let svg = std::fs::read_to_string(dir.path().join("vaccination.svg")).unwrap();
    assert!(svg.contains("No vaccination data available"));
    assert!(svg.contains("No timeline data available"));
}

#[test]
fn test_vaccination_rejects_non_vaccination_metric() {
    let dataset = create_test_dataset();
    let args = VaccinationArgs {
        metric: Metric::TotalCases,
        ..VaccinationArgs::default()
    };

    assert!(validate_vaccination_args(&dataset, &args).is_err());
}
