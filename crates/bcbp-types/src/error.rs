/// Errors from semantic validation of decoded field values.
///
/// These are higher-level than [`bcbp_wire::WireError`] — the characters
/// were read successfully, but their value is outside what the format
/// allows. The decoder wraps these transparently in its own error type.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The leading format code was neither `M` nor the legacy `S`.
    #[error("invalid format code {found:?}: expected 'M' or 'S'")]
    InvalidFormatCode { found: char },

    /// The declared leg count is zero or above the practical ceiling.
    ///
    /// A count outside this range means the input is not a boarding
    /// pass at all, not that a field inside one is wrong — rejecting it
    /// here also bounds the decoder's leg loop.
    #[error("leg count {count} outside 1..={max}")]
    LegCountOutOfRange { count: u32, max: u8 },

    /// A date-of-flight field is outside the day-of-year range.
    #[error("Julian date {value} outside 1..=366")]
    InvalidJulianDate { value: u32 },
}
