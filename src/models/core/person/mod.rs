//! Person entity model
//!
//! This module defines the Person record used for vaccination allocation
//! bookkeeping.

pub use self::allocation::AllocationStatus;
pub use self::base::Person;

pub mod allocation; // Allocation flag and its transitions
pub mod base; // Struct definition, construction and accessors
pub mod serde; // JSON conversion
