#![no_main]

use libfuzzer_sys::fuzz_target;
use shiftkit::counter::{COUNT_KEY, CounterIntrospection};
use shiftkit::register::{CycleInputs, CycleOutcome, ShiftRegister};

// Fuzz arbitrary cycle sequences on ShiftRegister
//
// Each 3-byte chunk is one cycle: flags, signed bound, value. A Vec model
// runs alongside and must agree with the register after every cycle.
fuzz_target!(|data: &[u8]| {
    let mut reg = ShiftRegister::new();
    let mut model: Vec<f64> = Vec::new();

    for chunk in data.chunks_exact(3) {
        let flags = chunk[0];
        let inputs = CycleInputs {
            value: f64::from(chunk[2]),
            max_size: i64::from(chunk[1] as i8),
            infinite: flags & 0x01 != 0,
            clear: flags & 0x0e == 0x0e,
        };

        if flags & 0xf0 == 0xf0 {
            // Supervisory reset between cycles
            reg.reset_counter();
            model.clear();
        }

        let before = reg.count();
        let outcome = reg.run(inputs);

        if inputs.clear || (!inputs.infinite && inputs.max_size < 1) {
            model.clear();
            assert!(!outcome.inserted());
        } else {
            model.insert(0, inputs.value);
            if !inputs.infinite {
                model.truncate(inputs.max_size as usize);
            }
            assert!(outcome.inserted());
        }

        if let CycleOutcome::Trimmed { evicted } = outcome {
            assert_eq!(reg.count(), before + 1 - evicted);
        }

        assert_eq!(reg.values(), model);
        assert_eq!(reg.count(), model.len());
        assert_eq!(reg.counters()[COUNT_KEY], model.len() as u64);
        reg.buffer().debug_validate_invariants();
    }
});
