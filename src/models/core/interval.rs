//! Age interval classification
//!
//! An `AgeInterval` is a bucket persons are associated with by an external
//! process. Only its bounds and textual form live here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open age range `[min, max)`, or `[min, +)` when open ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeInterval {
    min: u32,
    max: Option<u32>,
}

impl AgeInterval {
    /// Create a bounded interval
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Create an interval with no upper bound
    #[must_use]
    pub fn open_ended(min: u32) -> Self {
        Self { min, max: None }
    }

    /// Inclusive lower bound
    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Exclusive upper bound, `None` when open ended
    #[must_use]
    pub fn max(&self) -> Option<u32> {
        self.max
    }
}

impl fmt::Display for AgeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "[{},{})", self.min, max),
            None => write!(f, "[{},+)", self.min),
        }
    }
}
