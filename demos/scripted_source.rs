use shiftkit::prelude::*;

/// Sine samples with a clear pulse every `period` cycles.
struct PulsedSine {
    tick: u32,
    period: u32,
    max_size: i64,
}

impl InputSource for PulsedSine {
    fn read_inputs(&mut self) -> CycleInputs {
        self.tick += 1;
        let value = (f64::from(self.tick) * 0.3).sin();
        CycleInputs::bounded(value, self.max_size).with_clear(self.tick % self.period == 0)
    }
}

fn main() {
    let mut source = PulsedSine {
        tick: 0,
        period: 7,
        max_size: 4,
    };
    let mut reg = ShiftRegister::with_capacity(5);

    for _ in 0..20 {
        let outcome = reg.run_from(&mut source);
        println!(
            "tick {:>2}: {:<24} count={}",
            source.tick,
            format!("{outcome:?}"),
            reg.count()
        );
    }
}
