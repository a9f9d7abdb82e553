#![no_main]

use libfuzzer_sys::fuzz_target;
use shiftkit::ds::HistoryBuffer;

// Fuzz arbitrary operation sequences on HistoryBuffer
//
// Tests random sequences of insert_front, trim_to, clear and snapshot to
// find ordering or length bugs.
fuzz_target!(|data: &[u8]| {
    let mut buffer = HistoryBuffer::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 4;
        let arg = data[idx + 1];

        match op {
            0 => {
                let before = buffer.len();
                buffer.insert_front(f64::from(arg));
                assert_eq!(buffer.len(), before + 1);
                assert_eq!(buffer.most_recent(), Some(f64::from(arg)));
            }
            1 => {
                let n = i64::from(arg as i8);
                let before = buffer.snapshot();
                match buffer.trim_to(n) {
                    Ok(evicted) => {
                        let keep = (n as usize).min(before.len());
                        assert_eq!(evicted, before.len() - keep);
                        assert_eq!(buffer.snapshot(), before[..keep].to_vec());
                    }
                    Err(_) => {
                        assert!(n < 0);
                        assert_eq!(buffer.snapshot(), before);
                    }
                }
            }
            2 => {
                buffer.clear();
                assert!(buffer.is_empty());
            }
            3 => {
                let snap = buffer.snapshot();
                assert_eq!(snap.len(), buffer.len());
                assert!(snap.iter().copied().eq(buffer.iter()));
            }
            _ => unreachable!(),
        }

        buffer.debug_validate_invariants();
        idx += 2;
    }
});
