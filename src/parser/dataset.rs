//! The immutable in-memory dataset.

use super::owid_csv;
use super::record::Record;
use crate::utils::error::DatasetError;
use log::debug;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

/// All records of the loaded file, in file order
///
/// Built once at startup and never mutated afterward, so any number of
/// queries may borrow it at the same time.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Load the dataset from a CSV file
    ///
    /// # Errors
    /// * `DatasetError::NotFound` - file does not exist
    /// * `DatasetError::MissingColumn` - an identity column is absent
    /// * `DatasetError::InvalidDate` - a date cell is not `YYYY-MM-DD`
    /// * `DatasetError::Empty` - the file has a header but no rows
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let records = owid_csv::read_records_from_path(path.as_ref())?;
        Self::from_records(records)
    }

    /// Load the dataset from any CSV source (used by tests)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let records = owid_csv::read_records(reader)?;
        Self::from_records(records)
    }

    /// Wrap already-built records
    pub fn from_records(records: Vec<Record>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        debug!("Dataset holds {} records", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted unique names of individual countries (aggregates excluded)
    pub fn countries(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| !r.is_aggregate())
            .map(|r| r.location.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Sorted unique names of continent aggregates
    ///
    /// Every aggregate except the world and the income groups counts.
    pub fn continents(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.is_aggregate() && !r.is_world() && !r.is_income_group())
            .map(|r| r.location.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
