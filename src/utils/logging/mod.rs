//! Logging utilities
//!
//! This module provides standardized log lines for bookkeeping operations.

pub mod log;

pub use self::log::{log_allocation_change, log_operation_complete, log_warning};
