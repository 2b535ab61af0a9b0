//! Error Types for Balance Reduction Failures
//!
//! ## Design Philosophy
//!
//! Every failure in the reduction pipeline is deterministic given its inputs:
//! there is no I/O during a sweep, so nothing is worth retrying. An error
//! aborts the current `synthesize`, `sample` or `reduce` call and reaches the
//! caller with enough context to fix the offending input.
//!
//! 1. **Copy Semantics**: Errors carry only numbers and `&'static str`, so they
//!    implement `Copy` and can be returned from hot loops without allocation.
//!
//! 2. **Actionable Information**: Each variant names the parameter (or row)
//!    that failed and the value that was rejected.
//!
//! ## Error Categories
//!
//! Variants fall into three kinds, exposed through [`BalanceError::kind`]:
//!
//! ### Domain
//! - `OutOfDomain`: an interpolation angle or sample time lies outside the
//!   data the signal was built from
//!
//! ### Configuration
//! - `InvalidParameter`: non-positive step, reversed sweep bounds, confidence
//!   outside (0, 100), non-finite inputs
//! - `LimitExceeded`: sampling rate or acquisition duration above the
//!   acquisition board's limits
//!
//! ### Data
//! - `MalformedDataset`: missing columns, non-finite cells, unsorted angles
//! - `InsufficientData`: too few rows or samples for the requested operation
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use aerobalance_core::{BalanceError, ErrorKind};
//!
//! fn describe(err: BalanceError) -> &'static str {
//!     match err.kind() {
//!         ErrorKind::Domain => "requested point outside the measured range",
//!         ErrorKind::Configuration => "fix the run parameters",
//!         ErrorKind::Data => "fix the historical dataset",
//!     }
//! }
//!
//! let err = BalanceError::LimitExceeded {
//!     parameter: "sampling_rate",
//!     value: 20_000.0,
//!     limit: 10_000.0,
//! };
//! assert_eq!(describe(err), "fix the run parameters");
//! ```

use thiserror_no_std::Error;

/// Result type for reduction operations
pub type BalanceResult<T> = Result<T, BalanceError>;

/// Broad classification of a [`BalanceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A requested angle or time falls outside the valid range
    Domain,
    /// Caller-supplied parameters are invalid or exceed limits
    Configuration,
    /// The historical dataset is malformed or too small
    Data,
}

/// Errors raised by synthesis, sampling and reduction
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BalanceError {
    /// Interpolation point outside the source data's range
    #[error("Value {value} outside domain [{min}, {max}]")]
    OutOfDomain {
        /// The requested angle or timestamp
        value: f64,
        /// Lowest value covered by the source data
        min: f64,
        /// Highest value covered by the source data
        max: f64,
    },

    /// Caller supplied an unusable parameter value
    #[error("Invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value
        value: f64,
        /// What the parameter must satisfy
        reason: &'static str,
    },

    /// Parameter exceeds a hard acquisition limit
    #[error("{parameter} = {value} exceeds limit {limit}")]
    LimitExceeded {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value
        value: f64,
        /// Maximum accepted value
        limit: f64,
    },

    /// Historical dataset has missing columns, bad cells or bad ordering
    #[error("Malformed dataset at row {row}: {reason}")]
    MalformedDataset {
        /// Zero-based row index in the source table
        row: usize,
        /// What is wrong with the row
        reason: &'static str,
    },

    /// Not enough rows or samples to proceed
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum count needed
        required: usize,
        /// Count actually available
        available: usize,
    },
}

impl BalanceError {
    /// Classify the error into its broad kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfDomain { .. } => ErrorKind::Domain,
            Self::InvalidParameter { .. } | Self::LimitExceeded { .. } => ErrorKind::Configuration,
            Self::MalformedDataset { .. } | Self::InsufficientData { .. } => ErrorKind::Data,
        }
    }

    /// True for domain errors
    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }

    /// True for configuration errors
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// True for dataset errors
    pub fn is_data(&self) -> bool {
        self.kind() == ErrorKind::Data
    }
}
