#![no_main]

use arbitrary::Arbitrary;
use bcbp_decoder::{BcbpDecoder, DecodeOptions};
use libfuzzer_sys::fuzz_target;

// Fuzz target: decoder under arbitrary option combinations.
//
// Content policies must never change what *parses* — only how parsed
// values are represented — so every option combination must keep the
// decoder panic-free and keep the leg structure identical to the
// default-options decode of the same input.
#[derive(Arbitrary, Debug)]
struct Input<'a> {
    trim_whitespace: bool,
    trim_leading_zeros: bool,
    empty_string_is_none: bool,
    lenient_bag_tag_padding: bool,
    data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let Ok(text) = std::str::from_utf8(input.data) else {
        return;
    };
    let options = DecodeOptions {
        trim_whitespace: input.trim_whitespace,
        trim_leading_zeros: input.trim_leading_zeros,
        empty_string_is_none: input.empty_string_is_none,
        trace: false,
        lenient_bag_tag_padding: input.lenient_bag_tag_padding,
    };
    let configured = BcbpDecoder::decode_with(text, &options);
    if !input.lenient_bag_tag_padding {
        // With the structural option fixed, every policy combination
        // accepts and rejects the same inputs.
        let default = BcbpDecoder::decode(text);
        assert_eq!(configured.is_ok(), default.is_ok());
        if let (Ok(a), Ok(b)) = (configured, default) {
            assert_eq!(a.legs.len(), b.legs.len());
        }
    }
});
