//! Configuration and constants for the CLI.

/// Current chart report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default dataset file name, resolved relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "owid_covid_data.csv";

/// Environment variable that overrides the dataset path
pub const DATA_PATH_ENV: &str = "COVID_TRACKER_DATA";

/// Where the dataset can be downloaded when it is missing locally
pub const DATASET_DOWNLOAD_URL: &str = "https://covid.ourworldindata.org/data/owid-covid-data.csv";

// Aggregate entities (world, continents, income groups) share this iso_code prefix
pub const AGGREGATE_PREFIX: &str = "OWID_";
pub const WORLD_ISO_CODE: &str = "OWID_WRL";
pub const WORLD_LABEL: &str = "World";

/// Income-group aggregates, excluded from continent listings and timelines
pub const INCOME_GROUP_CODES: &[&str] = &["OWID_HIC", "OWID_UMC", "OWID_LMC", "OWID_LIC"];

/// Pseudo-continent meaning "no filter"
pub const ALL_CONTINENTS: &str = "All";

// Moving-average smoothing
pub const SMOOTHING_MIN_POINTS: usize = 30;
pub const SMOOTHING_MAX_WINDOW: usize = 7;

// Ranking sizes used by the charts
pub const DEFAULT_TOP_N: usize = 10;
pub const VACCINATION_TOP_N: usize = 15;
pub const TIMELINE_TOP_COUNTRIES: usize = 5;
pub const MAX_TOP_N: usize = 250;

// Figure dimensions in pixels
pub const DEFAULT_CHART_WIDTH: usize = 1000;
pub const DEFAULT_CHART_HEIGHT: usize = 600;
