//! Collections module
//!
//! This module contains collection types for managing groups of
//! domain models.

pub mod collection_traits;
pub mod person_collection;

pub use collection_traits::*;
pub use person_collection::PersonCollection;
