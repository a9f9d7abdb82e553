//! Error types for the shiftkit library.
//!
//! ## Key Components
//!
//! - [`InvalidArgument`]: Returned when a buffer operation receives an
//!   argument outside its contract (e.g. a negative trim length).
//! - [`ConfigError`]: Returned when per-cycle inputs describe an unusable
//!   configuration (e.g. a bounded register with a non-positive size).
//!
//! ## Example Usage
//!
//! ```
//! use shiftkit::ds::HistoryBuffer;
//! use shiftkit::error::InvalidArgument;
//!
//! let mut buffer = HistoryBuffer::new();
//! buffer.insert_front(1.0);
//!
//! let err: InvalidArgument = buffer.trim_to(-1).unwrap_err();
//! assert!(err.to_string().contains("max_size"));
//! assert_eq!(buffer.len(), 1);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvalidArgument
// ---------------------------------------------------------------------------

/// Error returned when an operation receives an argument it cannot accept.
///
/// Produced by [`HistoryBuffer::trim_to`](crate::ds::HistoryBuffer::trim_to)
/// for negative lengths. Carries a human-readable description of the
/// rejected argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument(String);

impl InvalidArgument {
    /// Creates a new `InvalidArgument` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvalidArgument {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when per-cycle inputs are invalid.
///
/// Produced by [`CycleInputs::validate`](crate::register::CycleInputs::validate).
/// The shift register itself never surfaces this to its caller; it resets
/// the buffer instead. Hosts can call `validate` up front to report the
/// problem in their own configuration layer.
///
/// # Example
///
/// ```
/// use shiftkit::register::CycleInputs;
///
/// let err = CycleInputs::bounded(1.0, 0).validate().unwrap_err();
/// assert!(err.to_string().contains("max_size"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
