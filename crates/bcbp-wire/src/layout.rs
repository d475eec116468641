//! Fixed layout of the boarding-pass barcode string.
//!
//! The format is positional: a 23-character pass-level header, then one
//! 37-character mandatory block per flight leg, each ending in a 2-digit
//! hex size that declares how many conditional characters follow for that
//! leg. Width constants live here so the decoder and the lightweight
//! validator agree on a single source of truth.
//!
//! ```text
//! ┌────────┬───────┬──────────────────────────────────────────┐
//! │ Offset │ Width │ Field                                    │
//! ├────────┼───────┼──────────────────────────────────────────┤
//! │ 0      │ 1     │ Format code ('M', legacy 'S')            │
//! │ 1      │ 1     │ Number of legs encoded                   │
//! │ 2      │ 20    │ Passenger name (SURNAME/GIVEN)           │
//! │ 22     │ 1     │ Electronic ticket indicator              │
//! ├────────┼───────┼── repeated once per leg ─────────────────┤
//! │ +0     │ 7     │ Operating carrier PNR code               │
//! │ +7     │ 3     │ From city airport code                   │
//! │ +10    │ 3     │ To city airport code                     │
//! │ +13    │ 3     │ Operating carrier designator             │
//! │ +16    │ 5     │ Flight number                            │
//! │ +21    │ 3     │ Date of flight (Julian day-of-year)      │
//! │ +24    │ 1     │ Compartment code                         │
//! │ +25    │ 4     │ Seat number                              │
//! │ +29    │ 5     │ Check-in sequence number                 │
//! │ +34    │ 1     │ Passenger status                         │
//! │ +35    │ 2     │ Conditional block size (hex)             │
//! └────────┴───────┴──────────────────────────────────────────┘
//! ```

/// Width of the pass-level header (format, leg count, name, e-ticket).
pub const PASS_HEADER_LEN: usize = 23;

/// Width of one leg's mandatory block, conditional-size field included.
pub const LEG_MANDATORY_LEN: usize = 37;

/// Shortest possible pass: the header plus one leg's mandatory block.
pub const MIN_PASS_LEN: usize = PASS_HEADER_LEN + LEG_MANDATORY_LEN;

/// Sentinel opening the version/unique conditional block.
pub const VERSION_MARKER: char = '>';

/// Sentinel opening the trailing security block.
pub const SECURITY_MARKER: char = '^';

/// Width of one baggage tag licence plate number.
pub const BAG_TAG_LEN: usize = 13;

/// At most three bag tags: the licence plate field plus two
/// non-consecutive tag fields.
pub const MAX_BAG_TAGS: usize = 3;

/// Practical ceiling on the legs one pass can carry.
pub const MAX_LEGS: u8 = 4;

/// Mandatory field widths, in read order.
pub mod width {
    pub const FORMAT_CODE: usize = 1;
    pub const LEG_COUNT: usize = 1;
    pub const PASSENGER_NAME: usize = 20;
    pub const ETICKET_INDICATOR: usize = 1;

    pub const PNR: usize = 7;
    pub const CITY_CODE: usize = 3;
    pub const CARRIER: usize = 3;
    pub const FLIGHT_NUMBER: usize = 5;
    pub const JULIAN_DATE: usize = 3;
    pub const COMPARTMENT: usize = 1;
    pub const SEAT: usize = 4;
    pub const CHECK_IN_SEQUENCE: usize = 5;
    pub const PASSENGER_STATUS: usize = 1;
    pub const SIZE_FIELD: usize = 2;

    pub const VERSION_NUMBER: usize = 1;
    pub const PASSENGER_DESCRIPTION: usize = 1;
    pub const CHECK_IN_SOURCE: usize = 1;
    pub const ISSUANCE_SOURCE: usize = 1;
    pub const ISSUE_DATE: usize = 4;
    pub const DOCUMENT_TYPE: usize = 1;

    pub const AIRLINE_NUMERIC_CODE: usize = 3;
    pub const DOCUMENT_NUMBER: usize = 10;
    pub const SELECTEE: usize = 1;
    pub const INTERNATIONAL_DOC: usize = 1;
    pub const FREQUENT_FLYER_NUMBER: usize = 16;
    pub const ID_AD_INDICATOR: usize = 1;
    pub const FREE_BAGGAGE: usize = 3;
    pub const FAST_TRACK: usize = 1;

    pub const SECURITY_TYPE: usize = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_mandatory_widths_sum_to_block_len() {
        let sum = width::PNR
            + width::CITY_CODE * 2
            + width::CARRIER
            + width::FLIGHT_NUMBER
            + width::JULIAN_DATE
            + width::COMPARTMENT
            + width::SEAT
            + width::CHECK_IN_SEQUENCE
            + width::PASSENGER_STATUS
            + width::SIZE_FIELD;
        assert_eq!(sum, LEG_MANDATORY_LEN);
    }

    #[test]
    fn header_widths_sum_to_header_len() {
        let sum = width::FORMAT_CODE
            + width::LEG_COUNT
            + width::PASSENGER_NAME
            + width::ETICKET_INDICATOR;
        assert_eq!(sum, PASS_HEADER_LEN);
    }

    #[test]
    fn minimum_pass_is_sixty() {
        assert_eq!(MIN_PASS_LEN, 60);
    }
}
