#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full decoder entry point.
//
// Calls `BcbpDecoder::decode` on arbitrary input. Catches bugs in:
// - Header validation (format code, leg count, minimum length)
// - Per-leg mandatory block reads
// - Declared-size bookkeeping (open/consume/close across nesting)
// - Unique conditional and bag-tag consumption
// - Security block / trailing blob termination
fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = bcbp_decoder::BcbpDecoder::decode(input);
    }
});
