//! Configuration for person construction and bookkeeping.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};

use crate::error::{Result, VaccinationError};

/// Environment variable overriding the reference year
pub const REFERENCE_YEAR_ENV: &str = "VACCINATION_REFERENCE_YEAR";

/// Configuration for person construction and bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonConfig {
    /// Year that ages are derived against; the current calendar year when unset
    pub reference_year: Option<i32>,
    /// Log allocation flag changes made through a collection
    pub log_allocation_changes: bool,
}

impl Default for PersonConfig {
    fn default() -> Self {
        Self {
            reference_year: None,
            log_allocation_changes: true,
        }
    }
}

impl PersonConfig {
    /// Parse a configuration from its JSON form
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a configuration from the environment
    ///
    /// Reads [`REFERENCE_YEAR_ENV`]; any other field keeps its default.
    /// A value that is set but is not valid Unicode or not a year is an error.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        match env::var(REFERENCE_YEAR_ENV) {
            Ok(value) => config.reference_year = Some(parse_year(&value)?),
            Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(value)) => {
                return Err(VaccinationError::config(format!(
                    "{REFERENCE_YEAR_ENV}={value:?} is not valid Unicode"
                )));
            }
        }
        Ok(config)
    }

    /// Set the reference year
    #[must_use]
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// The year ages are derived against
    #[must_use]
    pub fn resolve_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(current_year)
    }
}

/// The current calendar year in local time
#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}

fn parse_year(value: &str) -> Result<i32> {
    value.trim().parse::<i32>().map_err(|e| {
        VaccinationError::config(format!("{REFERENCE_YEAR_ENV}={value:?} is not a year: {e}"))
    })
}
