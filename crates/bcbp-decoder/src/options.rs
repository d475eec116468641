/// Per-call decoding configuration.
///
/// Passed immutably to every decode call — never stored on a shared
/// decoder instance — so two decodes on different threads can never
/// interfere through configuration. Content policies live here rather
/// than in the cursor: extraction is exact, post-processing is policy.
///
/// ```text
/// ┌─────────────────────────┬─────────┬───────────────────────────────┐
/// │ Option                  │ Default │ Effect                        │
/// ├─────────────────────────┼─────────┼───────────────────────────────┤
/// │ trim_whitespace         │ true    │ strip surrounding spaces from │
/// │                         │         │ every extracted field         │
/// │ trim_leading_zeros      │ true    │ strip leading zeros from      │
/// │                         │         │ flight number, seat, check-in │
/// │                         │         │ sequence                      │
/// │ empty_string_is_none    │ true    │ blank optional field → None   │
/// │ trace                   │ false   │ stderr log of every read      │
/// │ lenient_bag_tag_padding │ false   │ drain non-tag padding instead │
/// │                         │         │ of failing                    │
/// └─────────────────────────┴─────────┴───────────────────────────────┘
/// ```
///
/// The security payload is exempt from all content policies: it is
/// opaque, and its stored length must equal its declared length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Strip leading/trailing spaces from every extracted text field.
    pub trim_whitespace: bool,

    /// Strip leading zero digits from numeric-looking fields (flight
    /// number, seat, check-in sequence).
    pub trim_leading_zeros: bool,

    /// Map a blank optional field to `None` rather than `Some("")`.
    pub empty_string_is_none: bool,

    /// Log every field read, scope open, and scope close to stderr.
    /// Diagnostics only — parsed results are identical either way.
    pub trace: bool,

    /// Silently drain unique-conditional padding too short to be a bag
    /// tag instead of failing. Off by default: draining bytes defeats
    /// the exhaustion check's diagnostic value.
    pub lenient_bag_tag_padding: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            trim_leading_zeros: true,
            empty_string_is_none: true,
            trace: false,
            lenient_bag_tag_padding: false,
        }
    }
}

impl DecodeOptions {
    /// Apply the whitespace policy to an extracted text field.
    pub(crate) fn clean_text(&self, raw: &str) -> String {
        if self.trim_whitespace {
            raw.trim_matches(' ').to_string()
        } else {
            raw.to_string()
        }
    }

    /// Apply whitespace and leading-zero policies to a numeric-looking
    /// field.
    pub(crate) fn clean_numeric(&self, raw: &str) -> String {
        let trimmed = if self.trim_whitespace {
            raw.trim_matches(' ')
        } else {
            raw
        };
        if !self.trim_leading_zeros {
            return trimmed.to_string();
        }
        let stripped = trimmed.trim_start_matches('0');
        if stripped.is_empty() && !trimmed.is_empty() {
            // All zeros: keep one.
            "0".to_string()
        } else {
            stripped.to_string()
        }
    }

    /// Clean an optional text field and apply the empty-to-none policy.
    pub(crate) fn optional_text(&self, raw: &str) -> Option<String> {
        let cleaned = self.clean_text(raw);
        if cleaned.is_empty() && self.empty_string_is_none {
            None
        } else {
            Some(cleaned)
        }
    }

    /// Clean an optional numeric-looking field and apply the
    /// empty-to-none policy.
    pub(crate) fn optional_numeric(&self, raw: &str) -> Option<String> {
        let cleaned = self.clean_numeric(raw);
        if cleaned.is_empty() && self.empty_string_is_none {
            None
        } else {
            Some(cleaned)
        }
    }
}
