//! Per-cycle shift register driving a [`HistoryBuffer`].
//!
//! A host engine calls [`ShiftRegister::run`] once per cycle with the four
//! inputs it resolved for that cycle. The register decides what to do with
//! its buffer and exposes the result through [`values`](ShiftRegister::values)
//! and [`count`](ShiftRegister::count).
//!
//! ## Decision Policy
//!
//! ```text
//!   run(inputs)
//!       │
//!       ├── clear?                         ──► buffer.clear()      → Cleared
//!       │
//!       ├── !infinite && max_size < 1 ?    ──► buffer.clear()      → InvalidBound
//!       │
//!       ├── buffer.insert_front(value)
//!       │
//!       ├── infinite?                      ──► (no trim)           → Inserted
//!       │
//!       └── buffer.trim_to(max_size)       ──► evicted == 0        → Inserted
//!                                              evicted  > 0        → Trimmed
//! ```
//!
//! The branches are checked in that order on every call. Nothing about the
//! inputs is remembered between calls: `clear` acts as a one-shot signal only
//! because the host supplies a fresh value each cycle, and `max_size` /
//! `infinite` are re-validated every time.
//!
//! ## Example Usage
//!
//! ```
//! use shiftkit::register::{CycleInputs, CycleOutcome, ShiftRegister};
//!
//! let mut reg = ShiftRegister::new();
//! for v in 1..=5 {
//!     reg.run(CycleInputs::bounded(v as f64, 3));
//! }
//! assert_eq!(reg.values(), vec![5.0, 4.0, 3.0]);
//! assert_eq!(reg.count(), 3);
//!
//! let outcome = reg.run(CycleInputs::bounded(6.0, 3).with_clear(true));
//! assert_eq!(outcome, CycleOutcome::Cleared);
//! assert_eq!(reg.count(), 0);
//! ```

use log::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ds::HistoryBuffer;
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The four values a host resolves for a single cycle.
///
/// Inputs are consumed by value; the register never keeps them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleInputs {
    /// Sample to shift in.
    pub value: f64,
    /// Maximum number of retained samples. Ignored when `infinite` is set.
    pub max_size: i64,
    /// Disables trimming; the history grows without bound.
    pub infinite: bool,
    /// Empties the history instead of inserting `value`.
    pub clear: bool,
}

impl CycleInputs {
    /// Inputs for a bounded register keeping at most `max_size` samples.
    pub fn bounded(value: f64, max_size: i64) -> Self {
        Self {
            value,
            max_size,
            infinite: false,
            clear: false,
        }
    }

    /// Inputs for an unbounded register.
    pub fn unbounded(value: f64) -> Self {
        Self {
            value,
            max_size: 0,
            infinite: true,
            clear: false,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_max_size(mut self, max_size: i64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Checks that the size bound is usable.
    ///
    /// A bounded register (`infinite == false`) needs `max_size >= 1`. The
    /// `clear` flag is not considered: a clearing cycle with a bad bound is
    /// still reported as invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the rejected bound.
    ///
    /// # Example
    ///
    /// ```
    /// use shiftkit::register::CycleInputs;
    ///
    /// assert!(CycleInputs::bounded(1.0, 1).validate().is_ok());
    /// assert!(CycleInputs::bounded(1.0, 0).validate().is_err());
    /// assert!(CycleInputs::unbounded(1.0).with_max_size(-5).validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.infinite && self.max_size < 1 {
            return Err(ConfigError::new(format!(
                "max_size must be >= 1 when bounded, got {}",
                self.max_size
            )));
        }
        Ok(())
    }
}

/// Branch taken by a single [`ShiftRegister::run`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CycleOutcome {
    /// `clear` was set; the history was emptied and nothing inserted.
    Cleared,
    /// The bound was invalid; the history was emptied and nothing inserted.
    InvalidBound,
    /// The value was inserted and nothing was discarded.
    Inserted,
    /// The value was inserted and `evicted` old samples were discarded.
    Trimmed { evicted: usize },
}

impl CycleOutcome {
    /// Returns `true` if this cycle shifted a value in.
    pub fn inserted(&self) -> bool {
        matches!(self, Self::Inserted | Self::Trimmed { .. })
    }
}

/// Source the register polls once per cycle for fresh inputs.
///
/// Any `FnMut() -> CycleInputs` closure is an `InputSource`.
pub trait InputSource {
    fn read_inputs(&mut self) -> CycleInputs;
}

impl<F> InputSource for F
where
    F: FnMut() -> CycleInputs,
{
    fn read_inputs(&mut self) -> CycleInputs {
        self()
    }
}

// ---------------------------------------------------------------------------
// ShiftRegister
// ---------------------------------------------------------------------------

/// Bounded most-recent-first history updated once per cycle.
///
/// Owns a single [`HistoryBuffer`] for its whole lifetime. Outputs are owned
/// copies; the live buffer is only reachable through a shared reference.
#[derive(Debug, Clone, Default)]
pub struct ShiftRegister {
    buffer: HistoryBuffer,
}

impl ShiftRegister {
    /// Creates a register with an empty history.
    pub fn new() -> Self {
        Self {
            buffer: HistoryBuffer::new(),
        }
    }

    /// Creates a register whose buffer is preallocated for `capacity`
    /// samples. Has no effect on behavior.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: HistoryBuffer::with_capacity(capacity),
        }
    }

    /// Runs one cycle with `inputs` and reports the branch taken.
    ///
    /// # Panics
    ///
    /// Panics if the buffer rejects the trim length. The bound check before
    /// insertion makes this unreachable; hitting it means the decision order
    /// was broken.
    pub fn run(&mut self, inputs: CycleInputs) -> CycleOutcome {
        if inputs.clear {
            trace!("clear signal: dropping {} values", self.buffer.len());
            self.buffer.clear();
            return CycleOutcome::Cleared;
        }

        if let Err(err) = inputs.validate() {
            warn!("resetting shift register: {err}");
            self.buffer.clear();
            return CycleOutcome::InvalidBound;
        }

        self.buffer.insert_front(inputs.value);
        if inputs.infinite {
            trace!("inserted {} (unbounded, len {})", inputs.value, self.buffer.len());
            return CycleOutcome::Inserted;
        }

        match self.buffer.trim_to(inputs.max_size) {
            Ok(0) => {
                trace!("inserted {} (len {})", inputs.value, self.buffer.len());
                CycleOutcome::Inserted
            },
            Ok(evicted) => {
                debug!(
                    "inserted {}; trimmed {} values to max_size {}",
                    inputs.value, evicted, inputs.max_size
                );
                CycleOutcome::Trimmed { evicted }
            },
            Err(err) => panic!("shift register invariant violated: {err}"),
        }
    }

    /// Polls `source` once and runs a cycle with what it returned.
    ///
    /// # Example
    ///
    /// ```
    /// use shiftkit::register::{CycleInputs, ShiftRegister};
    ///
    /// let mut reg = ShiftRegister::new();
    /// let mut next = 0.0;
    /// let mut source = || {
    ///     next += 1.0;
    ///     CycleInputs::bounded(next, 2)
    /// };
    ///
    /// for _ in 0..4 {
    ///     reg.run_from(&mut source);
    /// }
    /// assert_eq!(reg.values(), vec![4.0, 3.0]);
    /// ```
    pub fn run_from<S>(&mut self, source: &mut S) -> CycleOutcome
    where
        S: InputSource + ?Sized,
    {
        let inputs = source.read_inputs();
        self.run(inputs)
    }

    /// Returns an owned copy of the history, most recent first.
    pub fn values(&self) -> Vec<f64> {
        self.buffer.snapshot()
    }

    /// Returns the number of retained samples.
    pub fn count(&self) -> usize {
        self.buffer.len()
    }

    /// Read-only view of the underlying buffer.
    pub fn buffer(&self) -> &HistoryBuffer {
        &self.buffer
    }

    /// Empties the history outside the normal cycle path.
    pub(crate) fn reset(&mut self) {
        self.buffer.clear();
    }
}
