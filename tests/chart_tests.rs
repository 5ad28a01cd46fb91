use chrono::NaiveDate;
use covid_tracker::chart::line::month_ticks;
use covid_tracker::chart::palette::viridis;
use covid_tracker::chart::{
    escape_xml, generate_ranking_summary, generate_series_summary, Bar, BarChart, ChartConfig,
    Figure, LineChart, LineSeries, Panel,
};
use covid_tracker::aggregator::smooth;
use covid_tracker::parser::{RankedEntity, SeriesPoint};
use covid_tracker::utils::error::ChartError;
use covid_tracker::utils::format::format_count;
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_series(len: u64) -> Vec<SeriesPoint> {
    (0..len)
        .map(|i| SeriesPoint::new(date(2021, 1, 1) + chrono::Days::new(i), (i * 10) as f64))
        .collect()
}

fn sample_bars() -> Vec<Bar> {
    vec![
        Bar {
            label: "France".to_string(),
            value: 500.0,
            value_label: "500".to_string(),
        },
        Bar {
            label: "Bosnia & Herzegovina".to_string(),
            value: 350.0,
            value_label: "350".to_string(),
        },
    ]
}

#[test]
fn test_line_chart_renders_polyline_and_legend() {
    let chart = LineChart::new("Total Cases in Germany")
        .with_axis_labels("Date", "Total Cases")
        .with_series(LineSeries::new("Total Cases", "#3498db", sample_series(60)))
        .with_series(LineSeries::new("6-day Moving Average", "#e74c3c", sample_series(55)))
        .with_legend();

    let svg = Figure::single(ChartConfig::default(), Panel::Line(chart))
        .render()
        .unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<polyline").count(), 2);
    assert!(svg.contains("Total Cases in Germany"));
    assert!(svg.contains("6-day Moving Average"));
}

#[test]
fn test_bar_chart_renders_one_rect_per_bar() {
    let chart = BarChart::new("Top 2 Countries by Total Cases", "Total Cases", sample_bars());

    let svg = Figure::single(ChartConfig::default(), Panel::Bar(chart))
        .render()
        .unwrap();

    assert_eq!(svg.matches(r#"class="bar""#).count(), 2);
    assert!(svg.contains("Bosnia &amp; Herzegovina"));
    assert!(!svg.contains("Bosnia & Herzegovina"));
}

#[test]
fn test_placeholder_panel() {
    let figure = Figure::single(
        ChartConfig::default(),
        Panel::Placeholder("No data available for total_cases in <Atlantis>".to_string()),
    );

    let svg = figure.render().unwrap();

    assert!(svg.contains("No data available for total_cases in &lt;Atlantis&gt;"));
    assert!(!svg.contains("<polyline"));
}

#[test]
fn test_grid_figure_renders_every_panel() {
    let panels = vec![
        Panel::Placeholder("No cases data available".to_string()),
        Panel::Placeholder("No deaths data available".to_string()),
        Panel::Placeholder("No testing data available".to_string()),
        Panel::Line(
            LineChart::new("Fully Vaccinated (%)")
                .with_series(LineSeries::new("Fully Vaccinated (%)", "#2ecc71", sample_series(10)))
                .with_y_range(0.0, 100.0),
        ),
    ];

    let svg = Figure::grid(ChartConfig::default().with_title("Trends for Germany"), 2, 2, panels)
        .render()
        .unwrap();

    assert!(svg.contains("Trends for Germany"));
    assert!(svg.contains("No cases data available"));
    assert!(svg.contains("No testing data available"));
    assert_eq!(svg.matches("<polyline").count(), 1);
}

fn polyline_y_values(svg: &str) -> Vec<f64> {
    let start = svg.find(r#"points=""#).unwrap() + r#"points=""#.len();
    let end = start + svg[start..].find('"').unwrap();
    svg[start..end]
        .split(' ')
        .map(|pair| pair.split(',').nth(1).unwrap().parse().unwrap())
        .collect()
}

#[test]
fn test_all_negative_series_is_not_clamped() {
    let points = vec![
        SeriesPoint::new(date(2021, 1, 1), -5.0),
        SeriesPoint::new(date(2021, 1, 2), -5.1),
        SeriesPoint::new(date(2021, 1, 3), -8.0),
    ];
    let chart = LineChart::new("New Cases").with_series(LineSeries::new("New Cases", "#3498db", points));

    let svg = Figure::single(ChartConfig::default(), Panel::Line(chart))
        .render()
        .unwrap();
    let ys = polyline_y_values(&svg);

    // Larger values sit higher on the canvas, so their y is smaller
    assert_eq!(ys.len(), 3);
    assert!(ys[0] < ys[1]);
    assert!(ys[1] < ys[2]);
}

#[test]
fn test_empty_figure_is_an_error() {
    let figure = Figure::grid(ChartConfig::default(), 1, 1, Vec::new());

    assert!(matches!(figure.render(), Err(ChartError::EmptyFigure)));
}

#[test]
fn test_tiny_canvas_is_an_error() {
    let figure = Figure::single(
        ChartConfig::default().with_size(100, 50),
        Panel::Placeholder("x".to_string()),
    );

    assert!(matches!(
        figure.render(),
        Err(ChartError::InvalidDimensions {
            width: 100,
            height: 50
        })
    ));
}

#[test]
fn test_escape_xml() {
    assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    assert_eq!(escape_xml("Côte d'Ivoire"), "Côte d&apos;Ivoire");
}

#[test]
fn test_month_ticks() {
    let ticks = month_ticks(date(2021, 1, 15), date(2021, 4, 20), 8);
    assert_eq!(ticks, vec![date(2021, 2, 1), date(2021, 3, 1), date(2021, 4, 1)]);

    let long = month_ticks(date(2020, 1, 1), date(2023, 12, 31), 8);
    assert!(long.len() <= 8);
    assert_eq!(long[0], date(2020, 1, 1));

    assert!(month_ticks(date(2021, 1, 2), date(2021, 1, 20), 8).is_empty());
}

#[test]
fn test_viridis_palette_is_distinct() {
    let colors = viridis(5);
    assert_eq!(colors.len(), 5);
    for pair in colors.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn test_ranking_summary() {
    let ranking = vec![
        RankedEntity {
            location: "France".to_string(),
            value: 1500.0,
        },
        RankedEntity {
            location: "Germany".to_string(),
            value: 750.0,
        },
    ];

    let summary = generate_ranking_summary("Top Countries", &ranking, format_count);

    assert!(summary.contains("Top Countries"));
    assert!(summary.contains(" 1. France"));
    assert!(summary.contains("1,500"));
    assert!(summary.contains(" 2. Germany"));
}

#[test]
fn test_series_summary() {
    let series = sample_series(40);
    let smoothed = smooth(&series);

    let summary = generate_series_summary("Total Cases", &series, smoothed.as_ref());

    assert!(summary.contains("40 points"));
    assert!(summary.contains("Peak:   390.00"));
    assert!(summary.contains("4-day Moving Average: 375.00"));

    assert_eq!(
        generate_series_summary("Total Cases", &[], None),
        "  Total Cases: no data"
    );
}
