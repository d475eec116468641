use bcbp_wire::cursor::Cursor;
use bcbp_wire::error::WireError;
use bcbp_wire::scope::ScopeStack;

/// Cursor + scope-stack composite every field read goes through.
///
/// `FieldReader` wraps the raw [`Cursor`] so the decoder never reads
/// around the declared-size bookkeeping: a read first proves the buffer
/// holds the characters, then charges every open region's budget, and
/// only then consumes — all-or-nothing, so a rejected read leaves
/// cursor and counters aligned.
///
/// This is an internal implementation detail of the decoder — it is
/// not part of the public API.
///
/// # Usage pattern
///
/// ```text
///   let mut reader = FieldReader::new(input, false)?;
///   let size = reader.hex(2, "conditional size")?;
///   reader.open(size);
///   let field = reader.text(7, "operating carrier PNR")?;
///   ...
///   reader.close()?;
/// ```
pub struct FieldReader<'a> {
    cursor: Cursor<'a>,
    scopes: ScopeStack,
    trace: bool,
}

impl<'a> FieldReader<'a> {
    /// Create a reader positioned at offset 0 with no open region.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::NonAsciiInput`] if the buffer is not 7-bit
    /// text.
    pub fn new(input: &'a str, trace: bool) -> Result<Self, WireError> {
        Ok(Self {
            cursor: Cursor::new(input)?,
            scopes: ScopeStack::new(),
            trace,
        })
    }

    /// Read the next `n` characters as text.
    ///
    /// # Errors
    ///
    /// [`WireError::TruncatedInput`] if the buffer is short,
    /// [`WireError::ScopeOverrun`] if any open region's budget is;
    /// neither consumes anything.
    pub fn text(&mut self, n: usize, name: &'static str) -> Result<&'a str, WireError> {
        let offset = self.cursor.offset();
        let remaining = self.cursor.remaining();
        if remaining < n {
            return Err(WireError::TruncatedInput {
                offset,
                requested: n,
                remaining,
            });
        }
        self.scopes.consume(n, offset)?;
        let value = self.cursor.take(n)?;
        if self.trace {
            eprintln!(
                "bcbp: {name} [{offset}..{}] = {value:?} (depth {})",
                offset + n,
                self.scopes.depth()
            );
        }
        Ok(value)
    }

    /// Read a single character.
    ///
    /// # Errors
    ///
    /// Same as [`text`](Self::text).
    pub fn char(&mut self, name: &'static str) -> Result<char, WireError> {
        let value = self.text(1, name)?;
        Ok(value.bytes().next().unwrap_or(b' ') as char)
    }

    /// Read `n` characters as a base-16 size field.
    ///
    /// # Errors
    ///
    /// Read errors as [`text`](Self::text), plus
    /// [`WireError::MalformedHex`].
    pub fn hex(&mut self, n: usize, name: &'static str) -> Result<usize, WireError> {
        let offset = self.cursor.offset();
        let remaining = self.cursor.remaining();
        if remaining < n {
            return Err(WireError::TruncatedInput {
                offset,
                requested: n,
                remaining,
            });
        }
        self.scopes.consume(n, offset)?;
        let value = self.cursor.take_hex(n)?;
        if self.trace {
            eprintln!(
                "bcbp: {name} [{offset}..{}] = {value:#04X} (depth {})",
                offset + n,
                self.scopes.depth()
            );
        }
        Ok(value as usize)
    }

    /// Read `n` characters as a base-10 numeric field.
    ///
    /// # Errors
    ///
    /// Read errors as [`text`](Self::text), plus
    /// [`WireError::MalformedNumber`].
    pub fn number(&mut self, n: usize, name: &'static str) -> Result<u32, WireError> {
        let offset = self.cursor.offset();
        let remaining = self.cursor.remaining();
        if remaining < n {
            return Err(WireError::TruncatedInput {
                offset,
                requested: n,
                remaining,
            });
        }
        self.scopes.consume(n, offset)?;
        let value = self.cursor.take_number(n)?;
        if self.trace {
            eprintln!(
                "bcbp: {name} [{offset}..{}] = {value} (depth {})",
                offset + n,
                self.scopes.depth()
            );
        }
        Ok(value)
    }

    /// Open a declared-size region of `size` characters.
    pub fn open(&mut self, size: usize) {
        if self.trace {
            eprintln!(
                "bcbp: open region of {size} at offset {} (depth {})",
                self.cursor.offset(),
                self.scopes.depth() + 1
            );
        }
        self.scopes.open(size);
    }

    /// Close the innermost region, which must be exactly exhausted.
    ///
    /// # Errors
    ///
    /// [`WireError::ScopeNotExhausted`] or [`WireError::NoOpenScope`].
    pub fn close(&mut self) -> Result<(), WireError> {
        if self.trace {
            eprintln!(
                "bcbp: close region at offset {} (depth {})",
                self.cursor.offset(),
                self.scopes.depth()
            );
        }
        self.scopes.close()
    }

    /// Budget left in the innermost open region.
    #[must_use]
    pub fn innermost_remaining(&self) -> Option<usize> {
        self.scopes.innermost_remaining()
    }

    /// Look at the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.cursor.peek()
    }

    /// Current offset from the start of the buffer.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Unread characters left in the buffer.
    #[must_use]
    pub fn remaining_len(&self) -> usize {
        self.cursor.remaining()
    }

    /// Whether the buffer is fully consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.cursor.at_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_charge_every_open_region() {
        let mut reader = FieldReader::new("AB12CDEF", false).unwrap();
        reader.text(2, "prefix").unwrap();
        reader.open(6);
        reader.open(2);
        assert_eq!(reader.text(2, "inner").unwrap(), "12");
        reader.close().unwrap();
        assert_eq!(reader.innermost_remaining(), Some(4));
        reader.text(4, "rest").unwrap();
        reader.close().unwrap();
        assert!(reader.at_end());
    }

    #[test]
    fn overrun_leaves_state_untouched() {
        let mut reader = FieldReader::new("ABCDEF", false).unwrap();
        reader.open(2);
        let err = reader.text(3, "too wide").unwrap_err();
        assert!(matches!(err, WireError::ScopeOverrun { requested: 3, .. }));
        assert_eq!(reader.offset(), 0);
        assert_eq!(reader.innermost_remaining(), Some(2));
    }

    #[test]
    fn truncation_reported_before_scope_charge() {
        let mut reader = FieldReader::new("AB", false).unwrap();
        reader.open(10);
        let err = reader.text(5, "too long").unwrap_err();
        assert!(matches!(
            err,
            WireError::TruncatedInput {
                offset: 0,
                requested: 5,
                remaining: 2,
            }
        ));
        assert_eq!(reader.innermost_remaining(), Some(10));
    }

    #[test]
    fn hex_and_number_share_the_bookkeeping() {
        let mut reader = FieldReader::new("4A014", false).unwrap();
        reader.open(5);
        assert_eq!(reader.hex(2, "size").unwrap(), 0x4A);
        assert_eq!(reader.number(3, "date").unwrap(), 14);
        reader.close().unwrap();
    }

    #[test]
    fn close_with_budget_left_fails() {
        let mut reader = FieldReader::new("ABCD", false).unwrap();
        reader.open(4);
        reader.text(1, "only one").unwrap();
        assert!(matches!(
            reader.close(),
            Err(WireError::ScopeNotExhausted { remaining: 3 })
        ));
    }
}
