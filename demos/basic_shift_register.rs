use shiftkit::prelude::*;

fn main() {
    // Keep the last 3 samples
    let mut reg = ShiftRegister::new();

    for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
        let outcome = reg.run(CycleInputs::bounded(v, 3));
        println!("shift in {v}: {outcome:?} -> {:?}", reg.values());
    }

    // One-shot clear: next cycle inserts again
    reg.run(CycleInputs::bounded(6.0, 3).with_clear(true));
    reg.run(CycleInputs::bounded(7.0, 3));
    println!("after clear: {:?}", reg.values());

    let counters = reg.counters();
    println!("{COUNT_KEY} = {}", counters[COUNT_KEY]);
}
