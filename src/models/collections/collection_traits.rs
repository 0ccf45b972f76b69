//! Collection trait definitions for domain models
//!
//! This module defines the traits for collections of domain models,
//! providing common functionality for storing and querying model collections.

use crate::error::Result;
use crate::models::core::traits::EntityModel;
use std::borrow::Borrow;
use std::hash::Hash;

/// A trait for collections of models that can be queried and modified.
///
/// `ModelCollection` provides methods for storing, retrieving, and
/// filtering collections of models.
pub trait ModelCollection<T: EntityModel> {
    /// Add a model to the collection
    ///
    /// Fails if a model with the same identifier is already present.
    fn add(&mut self, model: T) -> Result<()>;

    /// Get a model by its identifier or any borrowed form of it
    fn get<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Get all models in the collection
    fn all(&self) -> Vec<&T>;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;
}
