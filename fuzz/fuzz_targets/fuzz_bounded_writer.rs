//! Fuzz target: `BoundedWriter`
//!
//! The first byte sizes the backing buffer; the rest is split into writes.
//! Asserts that content never exceeds capacity, the terminator byte is
//! always in place, and nothing is written past the end of the buffer.
//!
//! cargo fuzz run fuzz_bounded_writer

#![no_main]

use libfuzzer_sys::fuzz_target;
use wifikeeper::output::BoundedWriter;

const GUARD: u8 = 0xA5;

fuzz_target!(|data: &[u8]| {
    let Some((&size, rest)) = data.split_first() else {
        return;
    };
    let size = usize::from(size % 64);

    // One guard byte past the writer's slice catches overruns.
    let mut backing = vec![GUARD; size + 1];
    let len = {
        let mut w = BoundedWriter::new(&mut backing[..size]);
        for chunk in rest.chunks(7) {
            if chunk[0] & 1 == 0 {
                w.write_bytes(chunk);
            } else {
                w.write_byte(chunk[0]);
            }
            if chunk[0] == 0xFF {
                w.clear();
            }
            assert!(w.len() <= size.saturating_sub(1));
            assert_eq!(w.len() + w.remaining(), size.saturating_sub(1));
        }
        w.len()
    };

    if size > 0 {
        assert_eq!(backing[len], 0, "terminator missing");
    }
    assert_eq!(backing[size], GUARD, "wrote past the end");
});
