//! Counter introspection for supervisory tooling.
//!
//! Lets a host inspect or reset a [`ShiftRegister`] outside the normal cycle
//! path. The register reports a single counter, its current length, under
//! the fixed key [`COUNT_KEY`].
//!
//! Reading merges into a map the caller owns, so one map can collect
//! counters from several components:
//!
//! ```
//! use shiftkit::counter::{COUNT_KEY, CounterIntrospection, CounterMap};
//! use shiftkit::register::{CycleInputs, ShiftRegister};
//!
//! let mut reg = ShiftRegister::new();
//! for v in [1.0, 2.0, 3.0] {
//!     reg.run(CycleInputs::unbounded(v));
//! }
//!
//! let mut counters = CounterMap::default();
//! counters.insert("Uptime".to_string(), 120);
//! reg.read_counter(&mut counters);
//!
//! assert_eq!(counters[COUNT_KEY], 3);
//! assert_eq!(counters["Uptime"], 120);
//! ```

use rustc_hash::FxHashMap;

use crate::register::ShiftRegister;

/// Key under which the buffer length is reported.
pub const COUNT_KEY: &str = "Count";

/// Counter name to value, owned by the caller.
pub type CounterMap = FxHashMap<String, u64>;

/// Inspection and reset hooks for external supervisors.
pub trait CounterIntrospection {
    /// Resets all counters this component owns.
    fn reset_counter(&mut self);

    /// Writes this component's counters into `counters`, overwriting its own
    /// keys and leaving every other key alone.
    fn read_counter(&self, counters: &mut CounterMap);

    /// Restores counters from `counters`.
    fn write_counter(&mut self, counters: &CounterMap);

    /// Returns a fresh map holding only this component's counters.
    fn counters(&self) -> CounterMap {
        let mut counters = CounterMap::default();
        self.read_counter(&mut counters);
        counters
    }
}

impl CounterIntrospection for ShiftRegister {
    /// Empties the history, same as a clearing cycle.
    fn reset_counter(&mut self) {
        self.reset();
    }

    fn read_counter(&self, counters: &mut CounterMap) {
        counters.insert(COUNT_KEY.to_string(), self.count() as u64);
    }

    /// No-op: a register's length cannot be restored from outside.
    fn write_counter(&mut self, _counters: &CounterMap) {}
}
