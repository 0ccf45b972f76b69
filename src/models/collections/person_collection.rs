//! Person collection implementation
//!
//! This module provides an SSN-keyed collection that owns persons and
//! changes their allocation state on behalf of callers.

use crate::config::PersonConfig;
use crate::error::{Result, VaccinationError};
use crate::models::collections::collection_traits::ModelCollection;
use crate::models::core::interval::AgeInterval;
use crate::models::core::person::{AllocationStatus, Person};
use crate::utils::logging::{log_allocation_change, log_warning};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

/// A collection of persons indexed by SSN
#[derive(Debug, Default)]
pub struct PersonCollection {
    /// Persons indexed by SSN
    persons: FxHashMap<String, Person>,
    config: PersonConfig,
}

impl PersonCollection {
    /// Create a new empty `PersonCollection`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty `PersonCollection` with the given configuration
    #[must_use]
    pub fn with_config(config: PersonConfig) -> Self {
        Self {
            persons: FxHashMap::default(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PersonConfig {
        &self.config
    }

    /// Construct a person against the configured reference year and add it
    pub fn register(
        &mut self,
        first: impl Into<String>,
        last: impl Into<String>,
        ssn: impl Into<String>,
        birthyear: i32,
    ) -> Result<()> {
        let person = Person::with_config(first, last, ssn, birthyear, &self.config);
        self.add(person)
    }

    #[must_use]
    pub fn contains(&self, ssn: &str) -> bool {
        self.persons.contains_key(ssn)
    }

    /// Get a mutable reference to the person with this SSN
    pub fn get_mut(&mut self, ssn: &str) -> Option<&mut Person> {
        self.persons.get_mut(ssn)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Iterate over all persons in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    /// Mark the person with this SSN as allocated
    pub fn mark_allocated(&mut self, ssn: &str) -> Result<()> {
        self.update_allocation(ssn, Person::mark_allocated)
    }

    /// Mark the person with this SSN as unallocated
    pub fn clear_allocated(&mut self, ssn: &str) -> Result<()> {
        self.update_allocation(ssn, Person::clear_allocated)
    }

    /// Replace the age interval of the person with this SSN
    pub fn assign_interval(&mut self, ssn: &str, interval: Option<Arc<AgeInterval>>) -> Result<()> {
        let person = self.lookup_mut(ssn)?;
        person.set_age_interval(interval);
        Ok(())
    }

    /// Persons currently holding a slot, ordered by SSN
    #[must_use]
    pub fn allocated(&self) -> Vec<&Person> {
        self.by_status(AllocationStatus::Allocated)
    }

    /// Persons still waiting for a slot, ordered by SSN
    #[must_use]
    pub fn unallocated(&self) -> Vec<&Person> {
        self.by_status(AllocationStatus::Unallocated)
    }

    /// Textual form of every person, ordered by SSN
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        self.sorted()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    fn by_status(&self, status: AllocationStatus) -> Vec<&Person> {
        self.sorted()
            .into_iter()
            .filter(|person| person.allocation_status() == status)
            .collect()
    }

    fn sorted(&self) -> Vec<&Person> {
        self.persons
            .values()
            .sorted_by(|a, b| a.ssn().cmp(b.ssn()))
            .collect_vec()
    }

    fn lookup_mut(&mut self, ssn: &str) -> Result<&mut Person> {
        match self.persons.get_mut(ssn) {
            Some(person) => Ok(person),
            None => {
                log_warning("No person registered with SSN", Some(ssn));
                Err(VaccinationError::UnknownSsn(ssn.to_string()))
            }
        }
    }

    fn update_allocation<F>(&mut self, ssn: &str, update: F) -> Result<()>
    where
        F: FnOnce(&mut Person),
    {
        let log_changes = self.config.log_allocation_changes;
        let person = self.lookup_mut(ssn)?;
        let previous = person.allocation_status();
        update(person);
        if log_changes {
            log_allocation_change(person, previous);
        }
        Ok(())
    }
}

impl ModelCollection<Person> for PersonCollection {
    fn add(&mut self, person: Person) -> Result<()> {
        if self.persons.contains_key(person.ssn()) {
            log_warning("Person already registered with SSN", Some(person.ssn()));
            return Err(VaccinationError::DuplicateSsn(person.ssn().to_string()));
        }
        self.persons.insert(person.ssn().to_string(), person);
        Ok(())
    }

    fn get<Q>(&self, id: &Q) -> Option<&Person>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.persons.get(id)
    }

    fn all(&self) -> Vec<&Person> {
        self.persons.values().collect()
    }

    fn filter<F>(&self, predicate: F) -> Vec<&Person>
    where
        F: Fn(&Person) -> bool,
    {
        self.persons
            .values()
            .filter(|person| predicate(person))
            .collect()
    }

    fn count(&self) -> usize {
        self.persons.len()
    }
}
