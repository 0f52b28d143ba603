use serde::Serialize;
use std::fmt;

/// A string that is truncated to at most `N` bytes on construction.
///
/// Application Insights rejects (or silently mangles) fields beyond documented length limits, so
/// every length-bounded wire field is represented with this newtype rather than truncating ad hoc
/// at each call site, following the teacher crate's own `LimitedLenString<N>` pattern in its
/// envelope model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LimitedLenString<const N: usize>(String);

impl<const N: usize> LimitedLenString<N> {
    /// Truncates `value` to `N` bytes (at a char boundary) and reports whether truncation
    /// happened, so the caller can produce the diagnostic required by the envelope's sanitization
    /// invariant.
    pub fn new_truncating(mut value: String) -> (Self, bool) {
        let truncated = truncate_at_char_boundary(&mut value, N);
        (Self(value), truncated)
    }
}

impl<const N: usize> fmt::Display for LimitedLenString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const N: usize> AsRef<str> for LimitedLenString<N> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> From<LimitedLenString<N>> for String {
    fn from(value: LimitedLenString<N>) -> Self {
        value.0
    }
}

/// Truncates `value` in place to at most `max_len` bytes, backing off to the nearest char
/// boundary. Returns whether the string was actually shortened.
pub(crate) fn truncate_at_char_boundary(value: &mut String, max_len: usize) -> bool {
    if value.len() <= max_len {
        return false;
    }
    let mut end = max_len;
    while end > 0 && !value.is_char_boundary(end) {
        end -= 1;
    }
    value.truncate(end);
    true
}

/// A string truncated to at most 40 bytes, e.g. an instrumentation key.
pub type LimitedLenString40 = LimitedLenString<40>;
/// A string truncated to at most 64 bytes, e.g. a sequence number.
pub type LimitedLenString64 = LimitedLenString<64>;
/// A string truncated to at most 150 bytes, e.g. a custom property key.
pub type LimitedLenString150 = LimitedLenString<150>;
/// A string truncated to at most 512 bytes, e.g. an event name.
pub type LimitedLenString512 = LimitedLenString<512>;
/// A string truncated to at most 1024 bytes, e.g. an envelope name.
pub type LimitedLenString1024 = LimitedLenString<1024>;
/// A string truncated to at most 8192 bytes, e.g. a custom property value.
pub type LimitedLenString8192 = LimitedLenString<8192>;
