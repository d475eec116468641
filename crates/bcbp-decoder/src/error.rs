use bcbp_types::TypeError;
use bcbp_wire::WireError;

/// Errors that can occur while decoding a boarding-pass string.
///
/// The decoder validates at three levels: character-level reads and
/// declared-size bookkeeping (`WireError`), semantic field values
/// (`TypeError`), and pipeline structure (the variants defined here).
/// Each variant captures enough context — byte offsets, remaining
/// counts, the leg involved — to tell which declared-size field
/// upstream was wrong.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── NotABoardingPass           ← failure inside the 60 mandatory chars
///   ├── UnexpectedVersionMarker    ← conditional block missing its '>'
///   ├── BagTagRemainder            ← unique block left non-tag padding
///   ├── LegConditionalInvalid      ← a leg's sub-block is inconsistent
///   ├── TrailingData               ← bytes left over after security data
///   ├── Type(TypeError)            ← from bcbp-types value validation
///   └── Wire(WireError)            ← from bcbp-wire reads and scopes
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Decoding failed inside the 60 mandatory characters.
    ///
    /// Callers should treat this as "the input is not BCBP data at
    /// all", distinct from a structural error partway through an
    /// otherwise-recognized pass. The cause pinpoints the field that
    /// failed.
    #[error("not a boarding pass: {0}")]
    NotABoardingPass(#[source] Box<DecodeError>),

    /// A non-empty conditional region did not open with the `>` marker.
    #[error("expected version marker '>' at offset {offset}, found {found:?}")]
    UnexpectedVersionMarker { offset: usize, found: char },

    /// The unique conditional block has trailing bytes too short to be
    /// a bag tag.
    ///
    /// Strict by default; [`crate::DecodeOptions::lenient_bag_tag_padding`]
    /// drains the padding instead.
    #[error("unique conditional block has {leftover} trailing characters that are not a bag tag")]
    BagTagRemainder { leftover: usize },

    /// A leg's conditional sub-block did not decode to exactly its
    /// declared size.
    #[error("leg {leg} conditional block is inconsistent: {cause}")]
    LegConditionalInvalid {
        leg: usize,
        #[source]
        cause: WireError,
    },

    /// Unconsumed characters remain after the security data.
    ///
    /// All declared sizes were internally consistent and yet the buffer
    /// did not end where they said it would — some size field upstream
    /// is wrong.
    #[error("unexpected data after security block ({extra_bytes} characters)")]
    TrailingData { extra_bytes: usize },

    /// A semantic field-value error from `bcbp-types`.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// A character-level read or declared-size bookkeeping error from
    /// `bcbp-wire`.
    #[error(transparent)]
    Wire(#[from] WireError),
}
