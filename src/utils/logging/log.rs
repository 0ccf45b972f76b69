//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use crate::models::core::person::{AllocationStatus, Person};

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `items` - Number of items processed
pub fn log_operation_complete(operation: &str, items: usize) {
    log::info!("Successfully {operation} {items} persons");
}

/// Log an allocation flag change for a person
pub fn log_allocation_change(person: &Person, previous: AllocationStatus) {
    let current = person.allocation_status();
    if previous == current {
        log::debug!("{} already {:?}", person.ssn(), current);
    } else {
        log::debug!("{} changed from {:?} to {:?}", person.ssn(), previous, current);
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `ssn` - Optional SSN related to the warning
pub fn log_warning(message: &str, ssn: Option<&str>) {
    if let Some(ssn) = ssn {
        log::warn!("{message}: {ssn}");
    } else {
        log::warn!("{message}");
    }
}
