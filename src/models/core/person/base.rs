//! Core Person entity definition
//!
//! This module contains the base Person struct definition and its accessors.

use crate::config::{PersonConfig, current_year};
use crate::models::core::interval::AgeInterval;
use crate::models::core::person::allocation::AllocationStatus;
use crate::models::core::traits::EntityModel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A person taking part in vaccination allocation
///
/// The identifying fields are fixed at construction. `age` is derived once
/// from the reference year at that moment and is never recomputed, so a
/// `Person` built in December is a year behind one built in January.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    first: String,
    last: String,
    ssn: String,
    birthyear: i32,
    age: i32,
    #[serde(default)]
    pub(super) allocation: AllocationStatus,
    #[serde(default)]
    pub(super) interval: Option<Arc<AgeInterval>>,
}

impl Person {
    /// Create a new Person, deriving the age from the current calendar year
    #[must_use]
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
        ssn: impl Into<String>,
        birthyear: i32,
    ) -> Self {
        Self::with_reference_year(first, last, ssn, birthyear, current_year())
    }

    /// Create a new Person, deriving the age from the configured reference year
    #[must_use]
    pub fn with_config(
        first: impl Into<String>,
        last: impl Into<String>,
        ssn: impl Into<String>,
        birthyear: i32,
        config: &PersonConfig,
    ) -> Self {
        Self::with_reference_year(first, last, ssn, birthyear, config.resolve_year())
    }

    /// Create a new Person with age `reference_year - birthyear`
    ///
    /// Inputs are stored as given. A birth year after the reference year
    /// yields a negative age; a difference outside `i32` wraps around.
    #[must_use]
    pub fn with_reference_year(
        first: impl Into<String>,
        last: impl Into<String>,
        ssn: impl Into<String>,
        birthyear: i32,
        reference_year: i32,
    ) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            ssn: ssn.into(),
            birthyear,
            age: reference_year.wrapping_sub(birthyear),
            allocation: AllocationStatus::default(),
            interval: None,
        }
    }

    /// Given name
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Family name
    #[must_use]
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Social-security identifier
    #[must_use]
    pub fn ssn(&self) -> &str {
        &self.ssn
    }

    #[must_use]
    pub fn birthyear(&self) -> i32 {
        self.birthyear
    }

    /// Age derived at construction time
    #[must_use]
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Given and family name separated by a space
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Replace the associated age interval; `None` unsets it
    pub fn set_age_interval(&mut self, interval: Option<Arc<AgeInterval>>) {
        self.interval = interval;
    }

    /// The associated age interval, if one has been assigned
    #[must_use]
    pub fn age_interval(&self) -> Option<&Arc<AgeInterval>> {
        self.interval.as_ref()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.ssn, self.first, self.last)
    }
}

impl EntityModel for Person {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.ssn
    }

    fn key(&self) -> String {
        self.ssn.clone()
    }
}
