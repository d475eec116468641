use crate::error::TypeError;

/// Day-of-year flight date (1–366), as encoded in the 3-digit Julian
/// date field.
///
/// Only the day number is kept — converting to a calendar date needs a
/// year this format does not carry, and is left to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct JulianDate(u16);

impl JulianDate {
    /// Validate a decoded day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidJulianDate`] outside `1..=366`.
    pub fn from_day(value: u32) -> Result<Self, TypeError> {
        if (1..=366).contains(&value) {
            Ok(Self(value as u16))
        } else {
            Err(TypeError::InvalidJulianDate { value })
        }
    }

    /// The day-of-year number.
    #[must_use]
    pub fn day(self) -> u16 {
        self.0
    }
}

/// One flight leg of a pass.
///
/// Every leg — the first included — is read by the same uniform
/// mandatory-block reader, then owns its conditional field group. Legs
/// appear in declaration order and the collection's length equals the
/// header's declared leg count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    /// Operating carrier PNR / booking reference (7-character field).
    pub operating_carrier_pnr: String,

    /// Departure city airport code.
    pub from_city: String,

    /// Arrival city airport code.
    pub to_city: String,

    /// Operating carrier designator.
    pub operating_carrier: String,

    /// Flight number (5-character field; numeric with an optional
    /// suffix letter).
    pub flight_number: String,

    /// Date of flight as day-of-year.
    pub date_of_flight: JulianDate,

    /// Compartment code character.
    pub compartment_code: char,

    /// Seat number. Absent on seat-at-gate passes.
    pub seat_number: Option<String>,

    /// Check-in sequence number (5-character field).
    pub check_in_sequence: String,

    /// Passenger status character.
    pub passenger_status: char,

    /// Declared size of this leg's conditional block, as decoded from
    /// the trailing 2-digit hex field of the mandatory block.
    pub conditional_size: usize,

    /// The leg's conditional field group.
    pub conditional: LegConditional,
}

/// Conditional fields of one leg.
///
/// Everything here lives inside the leg's declared-size block and is
/// legal to omit: a field is `None` when the declared sizes left no room
/// for it (or, under the empty-string-to-none policy, when it was
/// present but blank).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegConditional {
    /// Airline numeric code (3 digits).
    pub airline_numeric_code: Option<String>,

    /// Document form / serial number (10 characters).
    pub document_number: Option<String>,

    /// Selectee indicator.
    pub selectee: Option<String>,

    /// International documentation verification indicator.
    pub international_doc_verification: Option<String>,

    /// Marketing / ticketing carrier designator.
    pub marketing_carrier: Option<String>,

    /// Frequent flyer airline designator.
    pub frequent_flyer_airline: Option<String>,

    /// Frequent flyer number (16-character field).
    pub frequent_flyer_number: Option<String>,

    /// ID/AD (industry/agency discount) indicator.
    pub id_ad_indicator: Option<String>,

    /// Free baggage allowance.
    pub free_baggage_allowance: Option<String>,

    /// Fast track indicator.
    pub fast_track: Option<String>,

    /// Opaque airline-use blob filling whatever the leg's declared size
    /// left over after the structured fields.
    pub airline_use: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_date_accepts_year_bounds() {
        assert_eq!(JulianDate::from_day(1).unwrap().day(), 1);
        assert_eq!(JulianDate::from_day(366).unwrap().day(), 366);
    }

    #[test]
    fn julian_date_rejects_out_of_range() {
        assert!(matches!(
            JulianDate::from_day(0),
            Err(TypeError::InvalidJulianDate { value: 0 })
        ));
        assert!(matches!(
            JulianDate::from_day(367),
            Err(TypeError::InvalidJulianDate { value: 367 })
        ));
    }
}
