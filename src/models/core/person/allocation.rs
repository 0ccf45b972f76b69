//! Allocation state of a person
//!
//! A person is either waiting for a vaccination slot or holds one. Transitions
//! go both ways without restriction.

use crate::models::core::person::Person;
use serde::{Deserialize, Serialize};

/// Whether a person currently holds a vaccination slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    /// No slot assigned
    #[default]
    Unallocated,
    /// A slot has been assigned
    Allocated,
}

impl AllocationStatus {
    #[must_use]
    pub fn is_allocated(self) -> bool {
        self == Self::Allocated
    }
}

impl Person {
    /// Whether the person currently holds a slot
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.allocation.is_allocated()
    }

    #[must_use]
    pub fn allocation_status(&self) -> AllocationStatus {
        self.allocation
    }

    /// Mark the person as allocated; repeated calls have no further effect
    pub fn mark_allocated(&mut self) {
        self.allocation = AllocationStatus::Allocated;
    }

    /// Mark the person as unallocated; repeated calls have no further effect
    pub fn clear_allocated(&mut self) {
        self.allocation = AllocationStatus::Unallocated;
    }
}
