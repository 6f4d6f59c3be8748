#![no_main]

use formbody::FormDecoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let decoder = FormDecoder::new("X-BOUNDARY");

    // Arbitrary bytes must decode to something or fail cleanly, never panic.
    let _ = decoder.decode(data);
});
