//! A Rust library holding the person record used for vaccination allocation
//! bookkeeping: identity, derived age, allocation flag and age interval.

pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
pub use config::PersonConfig;
pub use error::{Result, VaccinationError};
pub use models::{AgeInterval, AllocationStatus, ModelCollection, Person, PersonCollection};
