//! Domain models for vaccination allocation bookkeeping
//!
//! This module contains the person record, the age interval it may be
//! associated with, and the collection that owns persons.

pub mod collections;
pub mod core;

// Re-export commonly used types
pub use self::collections::{ModelCollection, PersonCollection};
pub use self::core::{AgeInterval, AllocationStatus, EntityModel, Person};
