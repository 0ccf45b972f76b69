//! Core models module
//!
//! This module contains the fundamental model types that form the foundation
//! of the domain model hierarchy.

pub mod interval;
pub mod person;
pub mod traits;

pub use interval::AgeInterval;
pub use person::{AllocationStatus, Person};
pub use traits::*;
