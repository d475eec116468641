/// Errors raised by the character-level reading layer.
///
/// Every variant carries the byte offset and the expected-vs-actual
/// counts needed to tell *which* declared size field upstream was wrong,
/// not merely that something failed.
///
/// ```text
///   WireError
///   ├── NonAsciiInput      ← buffer is not 7-bit text
///   ├── TruncatedInput     ← fixed-width read ran past end of buffer
///   ├── MalformedHex       ← 2-digit size field is not base-16
///   ├── MalformedNumber    ← numeric field is not base-10
///   ├── ScopeOverrun       ← read would exceed an open region's budget
///   ├── ScopeNotExhausted  ← region closed with bytes left over
///   └── NoOpenScope        ← close() with nothing open (decoder bug)
/// ```
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The input contains a byte outside the 7-bit range.
    ///
    /// The decoder requires plain ASCII so that byte offsets and
    /// character offsets coincide; this is checked once, up front.
    #[error("input is not 7-bit ASCII at offset {offset}")]
    NonAsciiInput { offset: usize },

    /// A fixed-width read ran past the end of the buffer.
    #[error("truncated input at offset {offset}: needed {requested} characters, {remaining} left")]
    TruncatedInput {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    /// A declared-size field was not valid base-16.
    #[error("malformed hex field {text:?} at offset {offset}")]
    MalformedHex { offset: usize, text: String },

    /// A numeric field was not valid base-10.
    #[error("malformed numeric field {text:?} at offset {offset}")]
    MalformedNumber { offset: usize, text: String },

    /// A read would consume more than an open region has left.
    ///
    /// Checked against *every* open region before anything is consumed,
    /// so a failed read leaves cursor and counters untouched.
    #[error("read of {requested} at offset {offset} exceeds open region budget ({remaining} left)")]
    ScopeOverrun {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    /// A declared-size region was closed with bytes still unconsumed.
    ///
    /// This is the single most important structural check in the
    /// decoder: it is the only signal that two declared sizes disagree.
    /// An under-consumed region here means some field width upstream was
    /// wrong and every subsequent field would have been misaligned.
    #[error("declared-size region closed with {remaining} characters unconsumed (expected 0)")]
    ScopeNotExhausted { remaining: usize },

    /// `close()` was called with no region open.
    #[error("attempted to close a region when none was open")]
    NoOpenScope,
}
