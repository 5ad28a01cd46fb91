use chrono::NaiveDate;
use covid_tracker::parser::Metric;
use covid_tracker::utils::format::{
    format_axis_date, format_axis_value, format_count, format_country_stat, format_global_stat,
    format_grouped, format_long_date, format_percent, format_population_stat, readable_label,
    NOT_AVAILABLE,
};
use pretty_assertions::assert_eq;

#[test]
fn test_readable_label() {
    assert_eq!(readable_label("new_cases"), "New Cases");
    assert_eq!(
        readable_label("people_fully_vaccinated_per_hundred"),
        "People Fully Vaccinated Per Hundred"
    );
    assert_eq!(readable_label("gdp_per_capita"), "Gdp Per Capita");
    assert_eq!(readable_label("aged_65_older"), "Aged 65 Older");
    assert_eq!(readable_label(""), "");
}

#[test]
fn test_format_grouped() {
    assert_eq!(format_grouped(1_234_567.891, 2), "1,234,567.89");
    assert_eq!(format_grouped(676_609_955.0, 0), "676,609,955");
    assert_eq!(format_grouped(12.0, 0), "12");
    assert_eq!(format_grouped(0.0, 2), "0.00");
}

#[test]
fn test_global_stat_rules() {
    assert_eq!(
        format_global_stat(Metric::TotalCases, Some(676_609_955.0)),
        "676,609,955"
    );
    assert_eq!(
        format_global_stat(Metric::PeopleFullyVaccinated, Some(5_000_000.4)),
        "5,000,000"
    );
    assert_eq!(format_global_stat(Metric::ReproductionRate, Some(1.0512)), "1.05");
    assert_eq!(format_global_stat(Metric::NewCases, Some(1234.5)), "1,234.50");
    assert_eq!(format_global_stat(Metric::TotalDeaths, None), NOT_AVAILABLE);
}

#[test]
fn test_country_stat_rules() {
    assert_eq!(format_country_stat(Metric::TotalCases, 38_437_756.0), "38,437,756");
    assert_eq!(
        format_country_stat(Metric::TotalCasesPerMillion, 461_224.123),
        "461224.12"
    );
    assert_eq!(format_country_stat(Metric::PositiveRate, 0.2), "0.20");
}

#[test]
fn test_population_stat_units() {
    assert_eq!(
        format_population_stat(Metric::Population, 83_369_840.0),
        "83,369,840"
    );
    assert_eq!(
        format_population_stat(Metric::PopulationDensity, 237.016),
        "237.0 per km²"
    );
    assert_eq!(format_population_stat(Metric::Aged65Older, 21.453), "21.5%");
    assert_eq!(format_population_stat(Metric::GdpPerCapita, 45229.245), "$45,229");
    assert_eq!(
        format_population_stat(Metric::LifeExpectancy, 81.33),
        "81.3 years"
    );
    assert_eq!(
        format_population_stat(Metric::HumanDevelopmentIndex, 0.947),
        "0.947"
    );
}

#[test]
fn test_bar_labels() {
    assert_eq!(format_count(1500.0), "1,500");
    assert_eq!(format_percent(54.321), "54.3%");
}

#[test]
fn test_dates() {
    let date = NaiveDate::from_ymd_opt(2023, 3, 9).unwrap();
    assert_eq!(format_long_date(date), "March 09, 2023");
    assert_eq!(format_axis_date(date), "Mar 2023");
}

#[test]
fn test_axis_values() {
    assert_eq!(format_axis_value(2_500_000_000.0), "2.5B");
    assert_eq!(format_axis_value(1_200_000.0), "1.2M");
    assert_eq!(format_axis_value(350_000.0), "350k");
    assert_eq!(format_axis_value(250.0), "250");
    assert_eq!(format_axis_value(0.0), "0");
    assert_eq!(format_axis_value(2.5), "2.50");
}
