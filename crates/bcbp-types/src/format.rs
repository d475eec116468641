use crate::error::TypeError;

/// Pass-level format code, the first character of every pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `M` — the multi-leg format every current pass uses.
    Multiple,
    /// `S` — the legacy single-leg format, deprecated but still accepted.
    Single,
}

impl Format {
    /// Parse a format code character.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidFormatCode`] for anything other than
    /// `M` or `S`.
    pub fn from_char(c: char) -> Result<Self, TypeError> {
        match c {
            'M' => Ok(Self::Multiple),
            'S' => Ok(Self::Single),
            found => Err(TypeError::InvalidFormatCode { found }),
        }
    }

    /// The character this format is encoded as.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Multiple => 'M',
            Self::Single => 'S',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_roundtrip() {
        assert_eq!(Format::from_char('M').unwrap(), Format::Multiple);
        assert_eq!(Format::from_char('S').unwrap(), Format::Single);
        assert_eq!(Format::Multiple.as_char(), 'M');
        assert_eq!(Format::Single.as_char(), 'S');
    }

    #[test]
    fn unknown_code_carries_the_character() {
        let err = Format::from_char('X').unwrap_err();
        assert!(matches!(err, TypeError::InvalidFormatCode { found: 'X' }));
    }
}
