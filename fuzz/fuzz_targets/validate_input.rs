#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: the lightweight shape validator.
//
// The validator is a pure function over the raw string and must never
// panic, whatever the input shape — it runs before any structural
// guarantees hold.
fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = bcbp_types::validate(input);
    }
});
