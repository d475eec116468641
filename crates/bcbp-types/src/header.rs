use bcbp_wire::layout::MAX_LEGS;

use crate::error::TypeError;
use crate::format::Format;

/// Pass-level header: the fields that appear exactly once, ahead of the
/// first leg's mandatory block.
///
/// Constructed once per decode and immutable after. The per-leg fields
/// (route, flight, seat, …) live on [`crate::Leg`] — every leg,
/// including the first, goes through the same reader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassHeader {
    /// Format code (`M`, legacy `S`).
    pub format: Format,

    /// Number of legs this pass declares. The decoded leg collection's
    /// length always equals this value.
    pub legs_encoded: u8,

    /// Passenger name from the fixed 20-character field, surname first,
    /// slash-delimited: `ACKERMANN/JUSTIN DAV`.
    pub passenger_name: String,

    /// Electronic ticket indicator character.
    pub electronic_ticket_indicator: char,
}

impl PassHeader {
    /// Validate a decoded leg count against the practical ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::LegCountOutOfRange`] for zero or for counts
    /// above [`MAX_LEGS`].
    pub fn validate_leg_count(count: u32) -> Result<u8, TypeError> {
        if count == 0 || count > u32::from(MAX_LEGS) {
            return Err(TypeError::LegCountOutOfRange {
                count,
                max: MAX_LEGS,
            });
        }
        Ok(count as u8)
    }

    /// Surname portion of the passenger name (before the `/`).
    ///
    /// Falls back to the whole name when no delimiter is present.
    #[must_use]
    pub fn surname(&self) -> &str {
        match self.passenger_name.split_once('/') {
            Some((surname, _)) => surname,
            None => &self.passenger_name,
        }
    }

    /// Given-name portion of the passenger name (after the `/`), if the
    /// delimiter is present.
    #[must_use]
    pub fn given_name(&self) -> Option<&str> {
        self.passenger_name.split_once('/').map(|(_, given)| given)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(name: &str) -> PassHeader {
        PassHeader {
            format: Format::Multiple,
            legs_encoded: 1,
            passenger_name: name.to_string(),
            electronic_ticket_indicator: 'E',
        }
    }

    #[test]
    fn name_splits_on_slash() {
        let h = header("ACKERMANN/JUSTIN DAV");
        assert_eq!(h.surname(), "ACKERMANN");
        assert_eq!(h.given_name(), Some("JUSTIN DAV"));
    }

    #[test]
    fn name_without_delimiter_is_all_surname() {
        let h = header("ACKERMANN");
        assert_eq!(h.surname(), "ACKERMANN");
        assert_eq!(h.given_name(), None);
    }

    #[test]
    fn leg_count_bounds() {
        assert_eq!(PassHeader::validate_leg_count(1).unwrap(), 1);
        assert_eq!(PassHeader::validate_leg_count(4).unwrap(), 4);
        assert!(matches!(
            PassHeader::validate_leg_count(0),
            Err(TypeError::LegCountOutOfRange { count: 0, .. })
        ));
        assert!(matches!(
            PassHeader::validate_leg_count(5),
            Err(TypeError::LegCountOutOfRange { count: 5, .. })
        ));
    }
}
