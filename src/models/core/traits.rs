//! Trait definitions for domain models
//!
//! This module defines the traits that domain models implement,
//! providing common interfaces for working with models.

use std::hash::Hash;

/// A trait that all domain models must implement.
///
/// The `EntityModel` trait provides identifier access for models
/// stored in collections.
pub trait EntityModel: Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;

    /// Create a unique key string representation of the identifier
    fn key(&self) -> String;
}
