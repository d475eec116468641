//! Diagnostic-quality tests: the exact error messages callers see.
//!
//! The error Display output is part of the decoder's contract — it
//! carries the byte offset and expected-vs-actual counts needed to
//! find the wrong declared size without a debugger. Inline snapshots
//! pin the wording.

use bcbp_decoder::BcbpDecoder;
use bcbp_tests::{SINGLE_LEG, WITH_SECURITY, bag_tag_padding, bump_hex, two_leg, two_leg_sizes};
use insta::assert_snapshot;

#[test]
fn short_input_names_the_minimum() {
    let err = BcbpDecoder::decode("M1TOO SHORT").unwrap_err();
    assert_snapshot!(
        err.to_string(),
        @"not a boarding pass: truncated input at offset 0: needed 60 characters, 11 left"
    );
}

#[test]
fn unknown_format_code_names_the_character() {
    let input = SINGLE_LEG.replacen('M', "X", 1);
    let err = BcbpDecoder::decode(&input).unwrap_err();
    assert_snapshot!(
        err.to_string(),
        @"not a boarding pass: invalid format code 'X': expected 'M' or 'S'"
    );
}

#[test]
fn bag_tag_padding_names_the_leftover() {
    let err = BcbpDecoder::decode(&bag_tag_padding()).unwrap_err();
    assert_snapshot!(
        err.to_string(),
        @"unique conditional block has 2 trailing characters that are not a bag tag"
    );
}

#[test]
fn trailing_data_names_the_extra_count() {
    let input = format!("{WITH_SECURITY}ZZ");
    let err = BcbpDecoder::decode(&input).unwrap_err();
    assert_snapshot!(
        err.to_string(),
        @"unexpected data after security block (2 characters)"
    );
}

#[test]
fn leg_sub_block_overrun_names_leg_offset_and_budget() {
    // Declaring one extra character in leg 0's sub-block makes the
    // first trailing optional read (offset 114) breach the leg's
    // exhausted outer region.
    let mutated = bump_hex(&two_leg(), two_leg_sizes::LEG0_SUB, 1);
    let err = BcbpDecoder::decode(&mutated).unwrap_err();
    assert_snapshot!(
        err.to_string(),
        @"leg 0 conditional block is inconsistent: read of 1 at offset 114 exceeds open region budget (0 left)"
    );
}
