//! Dataset rows and the entities they belong to.

use super::metric::Metric;
use crate::utils::config::{AGGREGATE_PREFIX, INCOME_GROUP_CODES, WORLD_ISO_CODE, WORLD_LABEL};
use chrono::NaiveDate;
use std::fmt;

/// One (location, date) observation
///
/// Metric values live in a fixed table indexed by [`Metric::index`]; a
/// `None` cell means the value is missing for this row.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub iso_code: String,
    pub continent: Option<String>,
    pub location: String,
    pub date: NaiveDate,
    values: [Option<f64>; Metric::COUNT],
}

impl Record {
    /// Create a record with every metric missing
    pub fn new(
        iso_code: impl Into<String>,
        continent: Option<&str>,
        location: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            iso_code: iso_code.into(),
            continent: continent.map(str::to_string),
            location: location.into(),
            date,
            values: [None; Metric::COUNT],
        }
    }

    /// Builder-style setter used by the loader and by tests
    pub fn with_value(mut self, metric: Metric, value: f64) -> Self {
        self.set_value(metric, Some(value));
        self
    }

    /// Store a metric value; non-finite values are treated as missing
    pub fn set_value(&mut self, metric: Metric, value: Option<f64>) {
        self.values[metric.index()] = value.filter(|v| v.is_finite());
    }

    /// Metric value, or `None` when missing
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.values[metric.index()]
    }

    /// World, continent or income-group rows rather than a single country
    pub fn is_aggregate(&self) -> bool {
        self.iso_code.starts_with(AGGREGATE_PREFIX)
    }

    pub fn is_income_group(&self) -> bool {
        INCOME_GROUP_CODES.contains(&self.iso_code.as_str())
    }

    pub fn is_world(&self) -> bool {
        self.iso_code == WORLD_ISO_CODE
    }
}

/// The subject of a query: the world aggregate or a named location
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entity {
    World,
    Location(String),
}

impl Entity {
    /// Interpret a user-supplied name; "World" selects the world aggregate
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name == WORLD_LABEL {
            Entity::World
        } else {
            Entity::Location(name.to_string())
        }
    }

    /// Whether a record belongs to this entity
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Entity::World => record.is_world(),
            Entity::Location(name) => record.location == *name,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::World => WORLD_LABEL,
            Entity::Location(name) => name,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
