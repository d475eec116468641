//! Shared reference fixtures for the integration suite and benches.
//!
//! Two kinds of fixture live here:
//!
//! - **Verbatim passes** captured from real-world barcodes
//!   ([`SINGLE_LEG`], [`WITH_SECURITY`]). Their declared sizes are part
//!   of the captured data.
//! - **Built passes** ([`two_leg`], [`bag_tag_padding`]) assembled from
//!   width-checked fields with every hex size computed from the content
//!   it declares, so the fixture is self-consistent by construction and
//!   a test can perturb exactly one size at a time.

/// Single-leg American Airlines pass: MSY→PHX, one bag tag, a
/// 3-character airline-use blob, no security data.
///
/// Layout: 60 mandatory characters, then a 0x4A-character conditional
/// region holding the `>` block (0x18-character payload) and the leg's
/// 0x29-character sub-block.
pub const SINGLE_LEG: &str = concat!(
    // format, leg count, passenger name, e-ticket indicator
    "M",
    "1",
    "ACKERMANN/JUSTIN DAV",
    "E",
    // leg 0 mandatory block
    "JKLEAJ ",
    "MSY",
    "PHX",
    "AA ",
    "2819 ",
    "014",
    "S",
    "008F",
    "0059 ",
    "1",
    "4A",
    // unique conditional: marker, version, size, 24-char payload
    ">",
    "3",
    "18",
    "   ",
    "0014",
    "B",
    "AA ",
    "0000000000000",
    // leg 0 sub-block: size, 37 fixed + ID/AD + free baggage
    "29",
    "001",
    "7484425657",
    "3",
    " ",
    "AA ",
    "AA ",
    "76UXK84         ",
    " ",
    "   ",
    // airline use
    "223",
);

/// [`SINGLE_LEG`] with a trailing security block: marker `^`, type `1`,
/// declared length 0x10, 16-character payload.
pub const WITH_SECURITY: &str = concat!(
    "M",
    "1",
    "ACKERMANN/JUSTIN DAV",
    "E",
    "JKLEAJ ",
    "MSY",
    "PHX",
    "AA ",
    "2819 ",
    "014",
    "S",
    "008F",
    "0059 ",
    "1",
    "4A",
    ">",
    "3",
    "18",
    "   ",
    "0014",
    "B",
    "AA ",
    "0000000000000",
    "29",
    "001",
    "7484425657",
    "3",
    " ",
    "AA ",
    "AA ",
    "76UXK84         ",
    " ",
    "   ",
    "223",
    "^",
    "1",
    "10",
    "MEQCIQCBpp8GegJb",
);

/// Offsets of the declared hex sizes inside [`two_leg`], for tests
/// that perturb one size at a time.
pub mod two_leg_sizes {
    /// Leg 0 conditional-block size (end of its mandatory block).
    pub const LEG0_CONDITIONAL: usize = 58;
    /// Unique conditional payload size (after `>` and the version).
    pub const UNIQUE: usize = 62;
    /// Leg 0 sub-block size.
    pub const LEG0_SUB: usize = 75;
    /// Leg 1 conditional-block size.
    pub const LEG1_CONDITIONAL: usize = 149;
    /// Leg 1 sub-block size.
    pub const LEG1_SUB: usize = 151;
}

/// Two-leg United itinerary SFO→DEN→ORD on one booking.
///
/// Leg 0 carries the `>` block (11-character payload, no bag tags) and
/// a full sub-block; leg 1 carries only a sub-block with a blank
/// frequent-flyer number. No airline-use remainder on either leg and
/// no security data, so every declared size is load-bearing: any ±1
/// perturbation must fail structurally.
#[must_use]
pub fn two_leg() -> String {
    let unique_payload = [
        field("0", 1),  // passenger description
        field("O", 1),  // check-in source
        field("O", 1),  // issuance source
        field("6100", 4), // issue date
        field("B", 1),  // document type
        field("UA", 3), // issuer airline
    ]
    .concat();
    let unique = format!(">6{:02X}{unique_payload}", unique_payload.len());

    let leg0_sub = leg_sub("016", "1234567890", "0", "1", "UA", "UA", "1234567890123456");
    let leg1_sub = leg_sub("016", "0987654321", "0", "1", "UA", "UA", "");

    let leg0_conditional = format!("{unique}{:02X}{leg0_sub}", leg0_sub.len());
    let leg1_conditional = format!("{:02X}{leg1_sub}", leg1_sub.len());

    let mut pass = String::new();
    pass.push_str("M2");
    pass.push_str(&field("DOE/JANE", 20));
    pass.push('E');
    pass.push_str(&leg_mandatory(
        "ABC123",
        "SFO",
        "DEN",
        "UA",
        "1234",
        "100",
        'Y',
        "012A",
        "0001",
        '1',
        leg0_conditional.len(),
    ));
    pass.push_str(&leg0_conditional);
    pass.push_str(&leg_mandatory(
        "ABC123",
        "DEN",
        "ORD",
        "UA",
        "0456",
        "100",
        'Y',
        "015C",
        "0002",
        '1',
        leg1_conditional.len(),
    ));
    pass.push_str(&leg1_conditional);
    pass
}

/// Single-leg pass whose `>` block payload ends in 2 characters of
/// padding — too short to be a bag tag. Decodes only under the lenient
/// padding option.
#[must_use]
pub fn bag_tag_padding() -> String {
    let unique_payload = format!(
        "{}XX",
        [
            field("0", 1),
            field("O", 1),
            field("O", 1),
            field("6100", 4),
            field("B", 1),
            field("UA", 3),
        ]
        .concat()
    );
    let unique = format!(">6{:02X}{unique_payload}", unique_payload.len());

    let mut pass = String::new();
    pass.push_str("M1");
    pass.push_str(&field("DOE/JANE", 20));
    pass.push('E');
    pass.push_str(&leg_mandatory(
        "ABC123",
        "SFO",
        "DEN",
        "UA",
        "1234",
        "100",
        'Y',
        "012A",
        "0001",
        '1',
        unique.len(),
    ));
    pass.push_str(&unique);
    pass
}

/// Rewrite the 2-digit hex size at `at` by `delta`.
#[must_use]
pub fn bump_hex(pass: &str, at: usize, delta: i32) -> String {
    let current = u32::from_str_radix(&pass[at..at + 2], 16).expect("fixture offset must be hex");
    let bumped = current
        .checked_add_signed(delta)
        .expect("bumped size must stay non-negative");
    format!("{}{bumped:02X}{}", &pass[..at], &pass[at + 2..])
}

// ── Builders ──────────────────────────────────────────────────────────────────

/// Left-justify `value` in a `width`-character space-padded field.
fn field(value: &str, width: usize) -> String {
    assert!(
        value.len() <= width,
        "fixture value {value:?} wider than {width}"
    );
    format!("{value:<width$}")
}

#[allow(clippy::too_many_arguments)]
fn leg_mandatory(
    pnr: &str,
    from: &str,
    to: &str,
    carrier: &str,
    flight: &str,
    date: &str,
    compartment: char,
    seat: &str,
    sequence: &str,
    status: char,
    conditional_len: usize,
) -> String {
    format!(
        "{}{}{}{}{}{}{compartment}{}{}{status}{conditional_len:02X}",
        field(pnr, 7),
        field(from, 3),
        field(to, 3),
        field(carrier, 3),
        field(flight, 5),
        field(date, 3),
        field(seat, 4),
        field(sequence, 5),
    )
}

fn leg_sub(
    airline_numeric: &str,
    document_number: &str,
    selectee: &str,
    international_doc: &str,
    marketing_carrier: &str,
    frequent_flyer_airline: &str,
    frequent_flyer_number: &str,
) -> String {
    [
        field(airline_numeric, 3),
        field(document_number, 10),
        field(selectee, 1),
        field(international_doc, 1),
        field(marketing_carrier, 3),
        field(frequent_flyer_airline, 3),
        field(frequent_flyer_number, 16),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_fixtures_have_expected_lengths() {
        assert_eq!(SINGLE_LEG.len(), 60 + 0x4A);
        assert_eq!(WITH_SECURITY.len(), SINGLE_LEG.len() + 4 + 0x10);
    }

    #[test]
    fn two_leg_size_offsets_point_at_hex_fields() {
        let pass = two_leg();
        assert_eq!(&pass[two_leg_sizes::LEG0_CONDITIONAL..60], "36");
        assert_eq!(&pass[two_leg_sizes::UNIQUE..64], "0B");
        assert_eq!(&pass[two_leg_sizes::LEG0_SUB..77], "25");
        assert_eq!(&pass[two_leg_sizes::LEG1_CONDITIONAL..151], "27");
        assert_eq!(&pass[two_leg_sizes::LEG1_SUB..153], "25");
        assert_eq!(pass.len(), 190);
    }

    #[test]
    fn bump_hex_rewrites_in_place() {
        let pass = two_leg();
        let bumped = bump_hex(&pass, two_leg_sizes::UNIQUE, 1);
        assert_eq!(&bumped[two_leg_sizes::UNIQUE..64], "0C");
        assert_eq!(bumped.len(), pass.len());
    }
}
