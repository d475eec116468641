//! Lightweight pre-decode validation.
//!
//! A pure function over the raw barcode string that checks the cheap,
//! position-fixed properties — overall length, format code, leg-count
//! sanity, and the first leg's field shapes — without running the
//! structural decoder. Callers use it to reject obviously-malformed
//! input early, or to attach diagnostics alongside a structural error.
//! The decoder itself never depends on it.

use bcbp_wire::layout::{self, MAX_LEGS, MIN_PASS_LEN, width};

use crate::format::Format;

/// One problem found by [`validate`].
///
/// These are domain-shape findings ("this does not look like an airport
/// code"), deliberately independent of the structural scope bookkeeping
/// the decoder enforces.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    /// Shorter than the 60 mandatory characters every pass carries.
    #[error("input length {length} below the {min}-character minimum", min = MIN_PASS_LEN)]
    TooShort { length: usize },

    /// Contains bytes outside 7-bit ASCII.
    #[error("input contains non-ASCII data at offset {offset}")]
    NonAscii { offset: usize },

    /// Leading format code is not `M` or `S`.
    #[error("unknown format code {found:?}")]
    UnknownFormatCode { found: char },

    /// The leg-count character is not a digit.
    #[error("leg count {found:?} is not numeric")]
    LegCountNotNumeric { found: char },

    /// The leg count is zero or above the practical ceiling.
    #[error("leg count {count} outside 1..={max}", max = MAX_LEGS)]
    LegCountOutOfRange { count: u32 },

    /// An airport code field is not three letters.
    #[error("{field} airport code {code:?} is not three letters")]
    MalformedAirportCode { field: &'static str, code: String },

    /// The booking reference contains characters outside A–Z/0–9/space.
    #[error("booking reference {code:?} contains invalid characters")]
    MalformedBookingReference { code: String },

    /// The flight number field is not four digits plus an optional
    /// suffix.
    #[error("flight number {value:?} is not 4 digits plus optional suffix")]
    MalformedFlightNumber { value: String },

    /// The date-of-flight field is not a day-of-year in 1..=366.
    #[error("date of flight {value:?} is not a Julian day in 1..=366")]
    JulianDateOutOfRange { value: String },
}

/// Validate the raw input's shape without decoding it.
///
/// Returns every issue found (an empty vector means the input passed
/// the lightweight checks — not that a full decode will succeed).
/// Pure: reads the string, mutates nothing.
#[must_use]
pub fn validate(input: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(offset) = input.bytes().position(|b| !b.is_ascii()) {
        issues.push(ValidationIssue::NonAscii { offset });
        // Positional checks below assume byte == character offsets.
        return issues;
    }

    if input.len() < MIN_PASS_LEN {
        issues.push(ValidationIssue::TooShort {
            length: input.len(),
        });
    }

    let mut chars = input.chars();
    if let Some(format) = chars.next()
        && Format::from_char(format).is_err()
    {
        issues.push(ValidationIssue::UnknownFormatCode { found: format });
    }
    if let Some(count) = chars.next() {
        match count.to_digit(10) {
            None => issues.push(ValidationIssue::LegCountNotNumeric { found: count }),
            Some(n) if n == 0 || n > u32::from(MAX_LEGS) => {
                issues.push(ValidationIssue::LegCountOutOfRange { count: n });
            }
            Some(_) => {}
        }
    }

    if input.len() >= MIN_PASS_LEN {
        check_first_leg(input, &mut issues);
    }

    issues
}

/// Pattern checks on the first leg's fixed positions.
fn check_first_leg(input: &str, issues: &mut Vec<ValidationIssue>) {
    let leg = &input[layout::PASS_HEADER_LEN..MIN_PASS_LEN];

    let pnr = &leg[..width::PNR];
    if !pnr.bytes().all(|b| b.is_ascii_alphanumeric() || b == b' ') {
        issues.push(ValidationIssue::MalformedBookingReference {
            code: pnr.to_string(),
        });
    }

    let from = &leg[width::PNR..width::PNR + width::CITY_CODE];
    let to = &leg[width::PNR + width::CITY_CODE..width::PNR + 2 * width::CITY_CODE];
    for (field, code) in [("departure", from), ("arrival", to)] {
        if !code.bytes().all(|b| b.is_ascii_uppercase()) {
            issues.push(ValidationIssue::MalformedAirportCode {
                field,
                code: code.to_string(),
            });
        }
    }

    let flight_start = width::PNR + 2 * width::CITY_CODE + width::CARRIER;
    let flight = &leg[flight_start..flight_start + width::FLIGHT_NUMBER];
    let (digits, suffix) = flight.split_at(width::FLIGHT_NUMBER - 1);
    let suffix_ok = suffix
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b' ');
    if !digits.bytes().all(|b| b.is_ascii_digit()) || !suffix_ok {
        issues.push(ValidationIssue::MalformedFlightNumber {
            value: flight.to_string(),
        });
    }

    let date_start = flight_start + width::FLIGHT_NUMBER;
    let date = &leg[date_start..date_start + width::JULIAN_DATE];
    match date.parse::<u32>() {
        Ok(day) if (1..=366).contains(&day) => {}
        _ => issues.push(ValidationIssue::JulianDateOutOfRange {
            value: date.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "M1ACKERMANN/JUSTIN DAVEJKLEAJ MSYPHXAA 2819 014S008F0059 14A";

    #[test]
    fn clean_mandatory_block_has_no_issues() {
        assert!(validate(VALID).is_empty());
    }

    #[test]
    fn short_input_still_checks_the_prefix() {
        let issues = validate("X0");
        assert!(issues.contains(&ValidationIssue::TooShort { length: 2 }));
        assert!(issues.contains(&ValidationIssue::UnknownFormatCode { found: 'X' }));
        assert!(issues.contains(&ValidationIssue::LegCountOutOfRange { count: 0 }));
    }

    #[test]
    fn non_ascii_short_circuits() {
        let issues = validate("Mü");
        assert_eq!(issues, vec![ValidationIssue::NonAscii { offset: 1 }]);
    }

    #[test]
    fn lowercase_airport_code_flagged() {
        let mut pass = VALID.to_string();
        pass.replace_range(30..33, "msy");
        let issues = validate(&pass);
        assert!(issues.iter().any(|i| matches!(
            i,
            ValidationIssue::MalformedAirportCode { field: "departure", .. }
        )));
    }

    #[test]
    fn alpha_flight_number_flagged() {
        let mut pass = VALID.to_string();
        pass.replace_range(39..44, "ABCDE");
        let issues = validate(&pass);
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::MalformedFlightNumber { .. })));
    }

    #[test]
    fn zero_julian_date_flagged() {
        let mut pass = VALID.to_string();
        pass.replace_range(44..47, "000");
        let issues = validate(&pass);
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::JulianDateOutOfRange { .. })));
    }

    #[test]
    fn leg_count_not_numeric_flagged() {
        let issues = validate("MXACKERMANN/JUSTIN DAVEJKLEAJ MSYPHXAA 2819 014S008F0059 14A");
        assert_eq!(
            issues,
            vec![ValidationIssue::LegCountNotNumeric { found: 'X' }]
        );
    }
}
