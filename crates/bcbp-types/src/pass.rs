use crate::header::PassHeader;
use crate::leg::Leg;
use crate::security::SecurityData;
use crate::unique::UniqueConditional;

/// A fully decoded boarding pass.
///
/// The aggregate the decoder returns: header, the once-per-pass
/// conditional block, the ordered legs, the trailing security block,
/// and a copy of the original barcode string (downstream consumers —
/// barcode regeneration in particular — need nothing else from the
/// decoder). Immutable value; the caller owns it outright.
///
/// ```text
/// ┌───────────────────────────────────────────────────────┐
/// │ BoardingPass                                          │
/// │   header:   PassHeader           ← format, legs, name │
/// │   unique:   Option<UniqueConditional> ← '>' block     │
/// │   legs:     Vec<Leg>             ← declaration order  │
/// │   security: SecurityData         ← '^' block or blob  │
/// │   raw:      String               ← original barcode   │
/// └───────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardingPass {
    /// Pass-level header fields.
    pub header: PassHeader,

    /// The once-per-pass conditional block, when the first leg's
    /// conditional region carried one.
    pub unique: Option<UniqueConditional>,

    /// Flight legs in declaration order. Always exactly
    /// `header.legs_encoded` entries on a successful decode.
    pub legs: Vec<Leg>,

    /// Trailing security block (possibly entirely absent).
    pub security: SecurityData,

    /// The original barcode string, byte for byte.
    pub raw: String,
}

impl BoardingPass {
    /// Number of decoded legs. Equals the header's declared count.
    #[must_use]
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// The original barcode string this pass was decoded from.
    #[must_use]
    pub fn barcode_string(&self) -> &str {
        &self.raw
    }
}
