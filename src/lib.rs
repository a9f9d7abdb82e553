//! shiftkit: a bounded most-recent-first history buffer driven by a
//! per-cycle shift register update rule.
//!
//! - [`ds::HistoryBuffer`]: ordered `f64` history with insert-at-front,
//!   trim-from-tail and clear.
//! - [`register::ShiftRegister`]: decides each cycle whether to clear,
//!   reject an invalid bound, insert, and trim.
//! - [`counter::CounterIntrospection`]: supervisory read/reset of the
//!   register's `"Count"` counter.
//!
//! ```
//! use shiftkit::prelude::*;
//!
//! let mut reg = ShiftRegister::new();
//! for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     reg.run(CycleInputs::bounded(v, 3));
//! }
//! assert_eq!(reg.values(), vec![5.0, 4.0, 3.0]);
//! assert_eq!(reg.counters()[COUNT_KEY], 3);
//! ```

pub mod counter;
pub mod ds;
pub mod error;
pub mod prelude;
pub mod register;
