//! Metric identifiers for the numeric dataset columns.
//!
//! Columns are addressed through a closed enum instead of string lookups;
//! the string form is the exact OWID column header.

use crate::utils::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named numeric observation column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    // Cases
    TotalCases,
    NewCases,
    NewCasesSmoothed,
    TotalCasesPerMillion,
    NewCasesPerMillion,
    // Deaths
    TotalDeaths,
    NewDeaths,
    NewDeathsSmoothed,
    TotalDeathsPerMillion,
    NewDeathsPerMillion,
    ReproductionRate,
    // Hospitalizations
    IcuPatients,
    IcuPatientsPerMillion,
    HospPatients,
    HospPatientsPerMillion,
    // Testing
    TotalTests,
    NewTests,
    PositiveRate,
    TestsPerCase,
    // Vaccinations
    TotalVaccinations,
    PeopleVaccinated,
    PeopleFullyVaccinated,
    TotalBoosters,
    PeopleVaccinatedPerHundred,
    PeopleFullyVaccinatedPerHundred,
    TotalBoostersPerHundred,
    // Demographics and economy
    Population,
    PopulationDensity,
    MedianAge,
    Aged65Older,
    Aged70Older,
    GdpPerCapita,
    LifeExpectancy,
    HumanDevelopmentIndex,
}

impl Metric {
    /// Number of metric variants; sizes the per-record value table
    pub const COUNT: usize = 34;

    /// Every metric in declaration order
    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::TotalCases,
        Metric::NewCases,
        Metric::NewCasesSmoothed,
        Metric::TotalCasesPerMillion,
        Metric::NewCasesPerMillion,
        Metric::TotalDeaths,
        Metric::NewDeaths,
        Metric::NewDeathsSmoothed,
        Metric::TotalDeathsPerMillion,
        Metric::NewDeathsPerMillion,
        Metric::ReproductionRate,
        Metric::IcuPatients,
        Metric::IcuPatientsPerMillion,
        Metric::HospPatients,
        Metric::HospPatientsPerMillion,
        Metric::TotalTests,
        Metric::NewTests,
        Metric::PositiveRate,
        Metric::TestsPerCase,
        Metric::TotalVaccinations,
        Metric::PeopleVaccinated,
        Metric::PeopleFullyVaccinated,
        Metric::TotalBoosters,
        Metric::PeopleVaccinatedPerHundred,
        Metric::PeopleFullyVaccinatedPerHundred,
        Metric::TotalBoostersPerHundred,
        Metric::Population,
        Metric::PopulationDensity,
        Metric::MedianAge,
        Metric::Aged65Older,
        Metric::Aged70Older,
        Metric::GdpPerCapita,
        Metric::LifeExpectancy,
        Metric::HumanDevelopmentIndex,
    ];

    /// Metrics offered for single-country and top-N charts
    pub const CHARTABLE: [Metric; 15] = [
        Metric::TotalCases,
        Metric::NewCases,
        Metric::TotalDeaths,
        Metric::NewDeaths,
        Metric::TotalCasesPerMillion,
        Metric::NewCasesPerMillion,
        Metric::TotalDeathsPerMillion,
        Metric::NewDeathsPerMillion,
        Metric::IcuPatients,
        Metric::HospPatients,
        Metric::TotalVaccinations,
        Metric::PeopleVaccinated,
        Metric::PeopleFullyVaccinated,
        Metric::TotalBoosters,
        Metric::ReproductionRate,
    ];

    /// Metrics offered on the vaccination dashboard
    pub const VACCINATION: [Metric; 3] = [
        Metric::PeopleVaccinatedPerHundred,
        Metric::PeopleFullyVaccinatedPerHundred,
        Metric::TotalBoostersPerHundred,
    ];

    /// Headline figures for the global summary, with their display labels
    pub const GLOBAL_HEADLINES: [(&'static str, Metric); 7] = [
        ("Total Cases", Metric::TotalCases),
        ("Total Deaths", Metric::TotalDeaths),
        ("Cases per Million", Metric::TotalCasesPerMillion),
        ("Deaths per Million", Metric::TotalDeathsPerMillion),
        ("Total Vaccinations", Metric::TotalVaccinations),
        ("People Fully Vaccinated", Metric::PeopleFullyVaccinated),
        ("Current Reproduction Rate", Metric::ReproductionRate),
    ];

    /// Grouped sections of the country statistics panel
    pub const COUNTRY_SECTIONS: [(&'static str, [Metric; 4]); 5] = [
        (
            "Cases",
            [
                Metric::TotalCases,
                Metric::NewCases,
                Metric::TotalCasesPerMillion,
                Metric::NewCasesPerMillion,
            ],
        ),
        (
            "Deaths",
            [
                Metric::TotalDeaths,
                Metric::NewDeaths,
                Metric::TotalDeathsPerMillion,
                Metric::NewDeathsPerMillion,
            ],
        ),
        (
            "Hospitalizations",
            [
                Metric::IcuPatients,
                Metric::HospPatients,
                Metric::IcuPatientsPerMillion,
                Metric::HospPatientsPerMillion,
            ],
        ),
        (
            "Testing",
            [
                Metric::TotalTests,
                Metric::NewTests,
                Metric::PositiveRate,
                Metric::TestsPerCase,
            ],
        ),
        (
            "Vaccinations",
            [
                Metric::TotalVaccinations,
                Metric::PeopleVaccinated,
                Metric::PeopleFullyVaccinated,
                Metric::TotalBoosters,
            ],
        ),
    ];

    /// Demographic attributes for the population panel
    pub const POPULATION_ATTRIBUTES: [(&'static str, Metric); 8] = [
        ("Population", Metric::Population),
        ("Population Density", Metric::PopulationDensity),
        ("Median Age", Metric::MedianAge),
        ("Aged 65 Older", Metric::Aged65Older),
        ("Aged 70 Older", Metric::Aged70Older),
        ("GDP Per Capita", Metric::GdpPerCapita),
        ("Life Expectancy", Metric::LifeExpectancy),
        ("Human Development Index", Metric::HumanDevelopmentIndex),
    ];

    /// Exact column header in the dataset
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::TotalCases => "total_cases",
            Metric::NewCases => "new_cases",
            Metric::NewCasesSmoothed => "new_cases_smoothed",
            Metric::TotalCasesPerMillion => "total_cases_per_million",
            Metric::NewCasesPerMillion => "new_cases_per_million",
            Metric::TotalDeaths => "total_deaths",
            Metric::NewDeaths => "new_deaths",
            Metric::NewDeathsSmoothed => "new_deaths_smoothed",
            Metric::TotalDeathsPerMillion => "total_deaths_per_million",
            Metric::NewDeathsPerMillion => "new_deaths_per_million",
            Metric::ReproductionRate => "reproduction_rate",
            Metric::IcuPatients => "icu_patients",
            Metric::IcuPatientsPerMillion => "icu_patients_per_million",
            Metric::HospPatients => "hosp_patients",
            Metric::HospPatientsPerMillion => "hosp_patients_per_million",
            Metric::TotalTests => "total_tests",
            Metric::NewTests => "new_tests",
            Metric::PositiveRate => "positive_rate",
            Metric::TestsPerCase => "tests_per_case",
            Metric::TotalVaccinations => "total_vaccinations",
            Metric::PeopleVaccinated => "people_vaccinated",
            Metric::PeopleFullyVaccinated => "people_fully_vaccinated",
            Metric::TotalBoosters => "total_boosters",
            Metric::PeopleVaccinatedPerHundred => "people_vaccinated_per_hundred",
            Metric::PeopleFullyVaccinatedPerHundred => "people_fully_vaccinated_per_hundred",
            Metric::TotalBoostersPerHundred => "total_boosters_per_hundred",
            Metric::Population => "population",
            Metric::PopulationDensity => "population_density",
            Metric::MedianAge => "median_age",
            Metric::Aged65Older => "aged_65_older",
            Metric::Aged70Older => "aged_70_older",
            Metric::GdpPerCapita => "gdp_per_capita",
            Metric::LifeExpectancy => "life_expectancy",
            Metric::HumanDevelopmentIndex => "human_development_index",
        }
    }

    /// Position in the per-record value table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label, e.g. "Total Cases Per Million"
    pub fn label(self) -> String {
        crate::utils::format::readable_label(self.as_str())
    }

    /// Short title used on the vaccination dashboard
    pub fn vaccination_title(self) -> &'static str {
        match self {
            Metric::PeopleVaccinatedPerHundred => "At Least One Dose",
            Metric::PeopleFullyVaccinatedPerHundred => "Fully Vaccinated",
            _ => "Boosters",
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == id)
            .ok_or_else(|| QueryError::UnknownMetric(s.to_string()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_table_position() {
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(metric.index(), i);
        }
    }

    #[test]
    fn parses_every_column_name() {
        for metric in Metric::ALL {
            assert_eq!(metric.as_str().parse::<Metric>(), Ok(metric));
        }
    }
}
