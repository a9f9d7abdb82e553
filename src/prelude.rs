pub use crate::counter::{COUNT_KEY, CounterIntrospection, CounterMap};
pub use crate::ds::HistoryBuffer;
pub use crate::error::{ConfigError, InvalidArgument};
pub use crate::register::{CycleInputs, CycleOutcome, InputSource, ShiftRegister};
