use chrono::NaiveDate;
use covid_tracker::output::{read_report, report_to_string, validate_path, write_report, write_svg};
use covid_tracker::parser::{ChartReport, Metric, NamedSeries, RankedEntity, ReportKind, SeriesPoint};
use covid_tracker::utils::config::SCHEMA_VERSION;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn create_test_report() -> ChartReport {
    let mut report = ChartReport::new(
        ReportKind::TopCountries,
        "Top 2 Countries by Total Cases",
        "All",
        Metric::TotalCases,
    );
    report.reference_date = NaiveDate::from_ymd_opt(2023, 3, 9);
    report.ranking = vec![
        RankedEntity {
            location: "United States".to_string(),
            value: 103_802_702.0,
        },
        RankedEntity {
            location: "India".to_string(),
            value: 44_690_738.0,
        },
    ];
    report
}

#[test]
fn test_write_and_read_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");
    let report = create_test_report();

    write_report(&report, &path).unwrap();
    assert!(path.exists());

    let loaded = read_report(&path).unwrap();
    assert_eq!(loaded.version, SCHEMA_VERSION);
    assert_eq!(loaded.kind, ReportKind::TopCountries);
    assert_eq!(loaded.metric, Metric::TotalCases);
    assert_eq!(loaded.reference_date, report.reference_date);
    assert_eq!(loaded.ranking, report.ranking);
}

#[test]
fn test_write_report_creates_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("report.json");

    write_report(&create_test_report(), &path).unwrap();

    assert!(path.exists());
}

#[test]
fn test_report_json_shape() {
    let mut report = ChartReport::new(
        ReportKind::TimeSeries,
        "Total Cases in Germany",
        "Germany",
        Metric::TotalCases,
    );
    report.series.push(NamedSeries {
        label: "Total Cases".to_string(),
        points: vec![SeriesPoint::new(
            NaiveDate::from_ymd_opt(2021, 1, 2).unwrap(),
            350.0,
        )],
    });

    let json = report_to_string(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["kind"], "time_series");
    assert_eq!(value["metric"], "total_cases");
    assert_eq!(value["series"][0]["points"][0]["date"], "2021-01-02");
    assert!(value.get("reference_date").is_none());
}

#[test]
fn test_read_report_rejects_invalid_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(read_report(&path).is_err());
}

#[test]
fn test_write_svg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.svg");
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"></svg>"#;

    write_svg(svg, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), svg);
}

#[test]
fn test_validate_path() {
    let dir = tempdir().unwrap();

    assert!(validate_path(&dir.path().join("chart.svg")).is_ok());
    assert!(validate_path(std::path::Path::new("")).is_err());
    assert!(validate_path(dir.path()).is_err());
}

#[test]
fn test_write_svg_into_directory_fails() {
    let dir = tempdir().unwrap();

    assert!(write_svg("<svg/>", dir.path()).is_err());
}
