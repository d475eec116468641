use bcbp_types::format::Format;
use bcbp_types::header::PassHeader;
use bcbp_types::leg::{JulianDate, Leg, LegConditional};
use bcbp_types::pass::BoardingPass;
use bcbp_types::security::SecurityData;
use bcbp_types::unique::UniqueConditional;
use bcbp_wire::layout::{self, width};

use crate::error::DecodeError;
use crate::field_reader::FieldReader;
use crate::options::DecodeOptions;

/// Synchronous boarding-pass decoder — parses one complete barcode
/// string per call.
///
/// Decoding proceeds in three stages over a single forward pass, with
/// no backtracking and no state carried between calls:
///
///   1. **Header**: the 23 pass-level characters (format, leg count,
///      passenger name, e-ticket indicator). Failures here — and in the
///      first leg's mandatory block, the rest of the 60 characters every
///      pass opens with — are wrapped as
///      [`DecodeError::NotABoardingPass`].
///   2. **Legs**: one uniform mandatory block per declared leg, each
///      opening a declared-size conditional region. The first leg's
///      region additionally hosts the once-per-pass `>` block. Inside
///      each region, a nested sub-block carries the leg's structured
///      conditional fields; whatever the region has left afterwards is
///      the airline-use blob. Every region must close exactly
///      exhausted.
///   3. **Trailer**: with all regions closed, either a `^` security
///      block whose payload length is declared up front, or one opaque
///      trailing blob. The buffer must be consumed to completion —
///      leftover bytes mean a declared size upstream was wrong
///      ([`DecodeError::TrailingData`]).
///
/// The decode is a pure function of `(input, options)`: no I/O, no
/// shared mutable state, linear in the input length. Concurrent calls
/// on separate threads are safe by construction.
///
/// # Example
///
/// ```rust
/// use bcbp_decoder::BcbpDecoder;
///
/// let pass = BcbpDecoder::decode(
///     "M1DESMARAIS/LUC       EABC123 YULFRAAC 0834 326J001A0025 100",
/// )
/// .unwrap();
/// assert_eq!(pass.header.passenger_name, "DESMARAIS/LUC");
/// assert_eq!(pass.legs[0].from_city, "YUL");
/// assert_eq!(pass.legs[0].flight_number, "834");
/// ```
pub struct BcbpDecoder;

impl BcbpDecoder {
    /// Decode a barcode string with the default options.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::NotABoardingPass`] if the 60 mandatory
    ///   characters cannot be decoded — the input is not BCBP data.
    /// - [`DecodeError::UnexpectedVersionMarker`] if a non-empty
    ///   conditional region lacks its `>` block.
    /// - [`DecodeError::BagTagRemainder`] if the unique conditional
    ///   block ends in padding too short to be a bag tag.
    /// - [`DecodeError::LegConditionalInvalid`] if a leg's sub-block
    ///   disagrees with its declared size.
    /// - [`DecodeError::TrailingData`] if characters remain after the
    ///   security data.
    /// - [`DecodeError::Wire`] / [`DecodeError::Type`] for read-level
    ///   and value-level failures elsewhere in the pass.
    pub fn decode(input: &str) -> Result<BoardingPass, DecodeError> {
        Self::decode_with(input, &DecodeOptions::default())
    }

    /// Decode a barcode string with explicit options.
    ///
    /// # Errors
    ///
    /// As [`decode`](Self::decode).
    pub fn decode_with(input: &str, options: &DecodeOptions) -> Result<BoardingPass, DecodeError> {
        let mut reader = FieldReader::new(input, options.trace)?;

        if input.len() < layout::MIN_PASS_LEN {
            return Err(not_a_boarding_pass(
                bcbp_wire::WireError::TruncatedInput {
                    offset: 0,
                    requested: layout::MIN_PASS_LEN,
                    remaining: input.len(),
                }
                .into(),
            ));
        }

        // 1. Pass-level header.
        let header = Self::decode_header(&mut reader, options).map_err(not_a_boarding_pass)?;

        // 2. Legs, uniformly; leg 0 hosts the unique conditional block.
        let mut legs = Vec::with_capacity(usize::from(header.legs_encoded));
        let mut unique = None;
        for index in 0..usize::from(header.legs_encoded) {
            let mut leg = if index == 0 {
                Self::decode_leg_mandatory(&mut reader, options).map_err(not_a_boarding_pass)?
            } else {
                Self::decode_leg_mandatory(&mut reader, options)?
            };

            reader.open(leg.conditional_size);

            if index == 0 && reader.innermost_remaining().is_some_and(|n| n > 0) {
                unique = Some(Self::decode_unique(&mut reader, options)?);
            }
            if reader.innermost_remaining().is_some_and(|n| n > 0) {
                leg.conditional = Self::decode_leg_conditional(&mut reader, options, index)?;
            }
            if let Some(remainder) = reader.innermost_remaining()
                && remainder > 0
            {
                leg.conditional.airline_use =
                    options.optional_text(reader.text(remainder, "airline use")?);
            }
            reader.close()?;

            legs.push(leg);
        }

        // 3. Security block or trailing blob; the buffer must end here.
        let security = Self::decode_trailer(&mut reader)?;

        Ok(BoardingPass {
            header,
            unique,
            legs,
            security,
            raw: input.to_string(),
        })
    }

    /// The 23 pass-level characters.
    fn decode_header(
        reader: &mut FieldReader<'_>,
        options: &DecodeOptions,
    ) -> Result<PassHeader, DecodeError> {
        let format = Format::from_char(reader.char("format code")?)?;
        let count = reader.number(width::LEG_COUNT, "leg count")?;
        let legs_encoded = PassHeader::validate_leg_count(count)?;
        let passenger_name =
            options.clean_text(reader.text(width::PASSENGER_NAME, "passenger name")?);
        let electronic_ticket_indicator = reader.char("electronic ticket indicator")?;
        Ok(PassHeader {
            format,
            legs_encoded,
            passenger_name,
            electronic_ticket_indicator,
        })
    }

    /// One leg's 37 mandatory characters, conditional size included.
    ///
    /// The returned leg carries an empty conditional group; the caller
    /// opens the declared region and fills it in.
    fn decode_leg_mandatory(
        reader: &mut FieldReader<'_>,
        options: &DecodeOptions,
    ) -> Result<Leg, DecodeError> {
        let operating_carrier_pnr =
            options.clean_text(reader.text(width::PNR, "operating carrier PNR")?);
        let from_city = options.clean_text(reader.text(width::CITY_CODE, "from city")?);
        let to_city = options.clean_text(reader.text(width::CITY_CODE, "to city")?);
        let operating_carrier =
            options.clean_text(reader.text(width::CARRIER, "operating carrier")?);
        let flight_number =
            options.clean_numeric(reader.text(width::FLIGHT_NUMBER, "flight number")?);
        let date_of_flight =
            JulianDate::from_day(reader.number(width::JULIAN_DATE, "date of flight")?)?;
        let compartment_code = reader.char("compartment code")?;
        let seat_number = options.optional_numeric(reader.text(width::SEAT, "seat number")?);
        let check_in_sequence =
            options.clean_numeric(reader.text(width::CHECK_IN_SEQUENCE, "check-in sequence")?);
        let passenger_status = reader.char("passenger status")?;
        let conditional_size = reader.hex(width::SIZE_FIELD, "conditional size")?;
        Ok(Leg {
            operating_carrier_pnr,
            from_city,
            to_city,
            operating_carrier,
            flight_number,
            date_of_flight,
            compartment_code,
            seat_number,
            check_in_sequence,
            passenger_status,
            conditional_size,
            conditional: LegConditional::default(),
        })
    }

    /// The once-per-pass `>` block inside the first leg's region.
    fn decode_unique(
        reader: &mut FieldReader<'_>,
        options: &DecodeOptions,
    ) -> Result<UniqueConditional, DecodeError> {
        let marker_offset = reader.offset();
        let version_marker = reader.char("version marker")?;
        if version_marker != layout::VERSION_MARKER {
            return Err(DecodeError::UnexpectedVersionMarker {
                offset: marker_offset,
                found: version_marker,
            });
        }
        let version_number = reader.char("version number")?;

        // The nested size bounds only this block's payload,
        // independent of the enclosing leg region.
        let structured_size = reader.hex(width::SIZE_FIELD, "unique conditional size")?;
        reader.open(structured_size);

        let passenger_description =
            options.optional_text(reader.text(width::PASSENGER_DESCRIPTION, "passenger description")?);
        let check_in_source =
            options.optional_text(reader.text(width::CHECK_IN_SOURCE, "check-in source")?);
        let issuance_source =
            options.optional_text(reader.text(width::ISSUANCE_SOURCE, "issuance source")?);
        let issue_date = options.optional_text(reader.text(width::ISSUE_DATE, "issue date")?);
        let document_type =
            options.optional_text(reader.text(width::DOCUMENT_TYPE, "document type")?);
        let issuer_airline = options.optional_text(reader.text(width::CARRIER, "issuer airline")?);

        let mut bag_tags = Vec::new();
        while bag_tags.len() < layout::MAX_BAG_TAGS
            && reader
                .innermost_remaining()
                .is_some_and(|n| n >= layout::BAG_TAG_LEN)
        {
            if let Some(tag) = options.optional_text(reader.text(layout::BAG_TAG_LEN, "bag tag")?) {
                bag_tags.push(tag);
            }
        }

        if let Some(leftover) = reader.innermost_remaining()
            && leftover > 0
        {
            if options.lenient_bag_tag_padding {
                reader.text(leftover, "bag tag padding")?;
            } else {
                return Err(DecodeError::BagTagRemainder { leftover });
            }
        }
        reader.close()?;

        Ok(UniqueConditional {
            version_marker,
            version_number,
            structured_size,
            passenger_description,
            check_in_source,
            issuance_source,
            issue_date,
            document_type,
            issuer_airline,
            bag_tags,
        })
    }

    /// One leg's structured conditional sub-block.
    ///
    /// Any inconsistency between the sub-block's declared size and its
    /// contents surfaces as [`DecodeError::LegConditionalInvalid`] for
    /// this leg.
    fn decode_leg_conditional(
        reader: &mut FieldReader<'_>,
        options: &DecodeOptions,
        leg: usize,
    ) -> Result<LegConditional, DecodeError> {
        let sub_size = reader.hex(width::SIZE_FIELD, "leg conditional size")?;
        reader.open(sub_size);

        let mut fields = LegConditional::default();
        let outcome = Self::read_leg_conditional_fields(reader, options, &mut fields)
            .and_then(|()| reader.close());
        match outcome {
            Ok(()) => Ok(fields),
            Err(cause) => Err(DecodeError::LegConditionalInvalid { leg, cause }),
        }
    }

    fn read_leg_conditional_fields(
        reader: &mut FieldReader<'_>,
        options: &DecodeOptions,
        fields: &mut LegConditional,
    ) -> Result<(), bcbp_wire::WireError> {
        if reader.innermost_remaining() == Some(0) {
            // Declared-empty sub-block.
            return Ok(());
        }

        fields.airline_numeric_code = options.optional_text(reader.text(
            width::AIRLINE_NUMERIC_CODE,
            "airline numeric code",
        )?);
        fields.document_number =
            options.optional_text(reader.text(width::DOCUMENT_NUMBER, "document number")?);
        fields.selectee = options.optional_text(reader.text(width::SELECTEE, "selectee")?);
        fields.international_doc_verification = options.optional_text(reader.text(
            width::INTERNATIONAL_DOC,
            "international doc verification",
        )?);
        fields.marketing_carrier =
            options.optional_text(reader.text(width::CARRIER, "marketing carrier")?);
        fields.frequent_flyer_airline =
            options.optional_text(reader.text(width::CARRIER, "frequent flyer airline")?);
        fields.frequent_flyer_number = options.optional_text(reader.text(
            width::FREQUENT_FLYER_NUMBER,
            "frequent flyer number",
        )?);

        // Trailing optional fields: present only while the declared
        // size has room left, in fixed order.
        if reader.innermost_remaining().is_some_and(|n| n > 0) {
            fields.id_ad_indicator =
                options.optional_text(reader.text(width::ID_AD_INDICATOR, "ID/AD indicator")?);
        }
        if reader.innermost_remaining().is_some_and(|n| n > 0) {
            fields.free_baggage_allowance =
                options.optional_text(reader.text(width::FREE_BAGGAGE, "free baggage allowance")?);
        }
        if reader.innermost_remaining().is_some_and(|n| n > 0) {
            fields.fast_track = options.optional_text(reader.text(width::FAST_TRACK, "fast track")?);
        }
        Ok(())
    }

    /// The trailing security block, or whatever is left as one opaque
    /// blob. Consumes the buffer to completion either way.
    fn decode_trailer(reader: &mut FieldReader<'_>) -> Result<SecurityData, DecodeError> {
        if reader.at_end() {
            return Ok(SecurityData::default());
        }

        if reader.peek() == Some(layout::SECURITY_MARKER) {
            let marker = reader.char("security marker")?;
            let type_code = reader.char("security type")?;
            let declared_length = reader.hex(width::SIZE_FIELD, "security length")?;
            // Opaque: stored verbatim, content policies do not apply.
            let payload = reader.text(declared_length, "security data")?.to_string();
            if !reader.at_end() {
                return Err(DecodeError::TrailingData {
                    extra_bytes: reader.remaining_len(),
                });
            }
            return Ok(SecurityData {
                marker: Some(marker),
                type_code: Some(type_code),
                declared_length: Some(declared_length),
                payload: Some(payload),
            });
        }

        let blob = reader
            .text(reader.remaining_len(), "trailing blob")?
            .to_string();
        Ok(SecurityData {
            payload: Some(blob),
            ..SecurityData::default()
        })
    }
}

/// Wrap a mandatory-section failure so callers can tell "this is not
/// BCBP data" apart from a structural error inside a recognized pass.
fn not_a_boarding_pass(cause: DecodeError) -> DecodeError {
    match cause {
        already @ DecodeError::NotABoardingPass(_) => already,
        other => DecodeError::NotABoardingPass(Box::new(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcbp_types::TypeError;
    use bcbp_wire::WireError;

    /// The canonical minimal pass: one leg, empty conditional block.
    const MINIMAL: &str = "M1DESMARAIS/LUC       EABC123 YULFRAAC 0834 326J001A0025 100";

    #[test]
    fn minimal_pass_decodes() {
        let pass = BcbpDecoder::decode(MINIMAL).unwrap();
        assert_eq!(pass.header.format, Format::Multiple);
        assert_eq!(pass.header.legs_encoded, 1);
        assert_eq!(pass.header.passenger_name, "DESMARAIS/LUC");
        assert_eq!(pass.header.electronic_ticket_indicator, 'E');

        let leg = &pass.legs[0];
        assert_eq!(leg.operating_carrier_pnr, "ABC123");
        assert_eq!(leg.from_city, "YUL");
        assert_eq!(leg.to_city, "FRA");
        assert_eq!(leg.operating_carrier, "AC");
        assert_eq!(leg.flight_number, "834");
        assert_eq!(leg.date_of_flight.day(), 326);
        assert_eq!(leg.compartment_code, 'J');
        assert_eq!(leg.seat_number.as_deref(), Some("1A"));
        assert_eq!(leg.check_in_sequence, "25");
        assert_eq!(leg.passenger_status, '1');
        assert_eq!(leg.conditional_size, 0);
        assert_eq!(leg.conditional, LegConditional::default());

        assert!(pass.unique.is_none());
        assert!(pass.security.is_absent());
        assert_eq!(pass.raw, MINIMAL);
    }

    #[test]
    fn bad_format_code_is_not_a_boarding_pass() {
        let input = MINIMAL.replacen('M', "X", 1);
        let err = BcbpDecoder::decode(&input).unwrap_err();
        match err {
            DecodeError::NotABoardingPass(cause) => assert!(matches!(
                *cause,
                DecodeError::Type(TypeError::InvalidFormatCode { found: 'X' })
            )),
            other => panic!("expected NotABoardingPass, got {other:?}"),
        }
    }

    #[test]
    fn zero_leg_count_is_not_a_boarding_pass() {
        let input = MINIMAL.replacen("M1", "M0", 1);
        let err = BcbpDecoder::decode(&input).unwrap_err();
        match err {
            DecodeError::NotABoardingPass(cause) => assert!(matches!(
                *cause,
                DecodeError::Type(TypeError::LegCountOutOfRange { count: 0, .. })
            )),
            other => panic!("expected NotABoardingPass, got {other:?}"),
        }
    }

    #[test]
    fn short_input_is_not_a_boarding_pass() {
        let err = BcbpDecoder::decode("M1TOO SHORT").unwrap_err();
        match err {
            DecodeError::NotABoardingPass(cause) => assert!(matches!(
                *cause,
                DecodeError::Wire(WireError::TruncatedInput { requested: 60, .. })
            )),
            other => panic!("expected NotABoardingPass, got {other:?}"),
        }
    }

    #[test]
    fn non_ascii_input_is_an_encoding_error() {
        let err = BcbpDecoder::decode("M1Ü").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Wire(WireError::NonAsciiInput { offset: 2 })
        ));
    }

    #[test]
    fn missing_version_marker_is_reported_with_offset() {
        // Declare a 4-character conditional block that does not open
        // with '>'.
        let input = format!("{}X123", MINIMAL.replacen("25 100", "25 104", 1));
        let err = BcbpDecoder::decode(&input).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedVersionMarker {
                offset: 60,
                found: 'X',
            }
        ));
    }

    #[test]
    fn unmarked_trailing_bytes_become_an_opaque_blob() {
        let input = format!("{MINIMAL}EXTRA");
        let pass = BcbpDecoder::decode(&input).unwrap();
        assert_eq!(pass.security.marker, None);
        assert_eq!(pass.security.payload.as_deref(), Some("EXTRA"));
    }

    #[test]
    fn security_payload_shorter_than_declared_is_truncation() {
        let input = format!("{MINIMAL}^110SHORT");
        let err = BcbpDecoder::decode(&input).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Wire(WireError::TruncatedInput {
                requested: 16,
                remaining: 5,
                ..
            })
        ));
    }

    #[test]
    fn decode_is_pure_in_its_options() {
        let first = BcbpDecoder::decode(MINIMAL).unwrap();
        let second = BcbpDecoder::decode(MINIMAL).unwrap();
        assert_eq!(first, second);
    }
}
