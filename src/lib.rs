//! COVID-19 Global Data Tracker
//!
//! Loads the Our World in Data COVID-19 dataset and turns it into charts
//! and statistics: single-country time series with a moving average,
//! top-N country comparisons, vaccination dashboards and summary panels.
//!
//! This crate provides the core implementation for the
//! `covid-tracker` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! covid-tracker --data owid_covid_data.csv graph --country Germany --metric new_cases
//! covid-tracker --help
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
