//! Borrowed-or-owned string payloads.
//!
//! Mirrors the tokenizer specification's `allocated` flag — "pointer into
//! input" vs. "owned heap buffer" — as a proper discriminated union rather
//! than a manual tagged pointer. Strings borrowed from a
//! [`StrSource`](crate::source::StrSource) live as long as the
//! `next_token` call that produced them; callers that need one to outlive
//! that call should copy it out with [`JsonString::into_owned`].
use alloc::string::String;
use core::fmt;

/// A JSON string or object key, either borrowed directly from the input or
/// owned because it had to be decoded (an escape was present, or it
/// crossed a stream refill boundary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonString<'a> {
    /// Points directly into the original input; no copy was necessary.
    Borrowed(&'a str),
    /// Heap-allocated because the content had to be decoded or assembled
    /// piecemeal.
    Owned(String),
}

impl<'a> JsonString<'a> {
    /// Borrows the string as `&str` regardless of which variant it is.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            JsonString::Borrowed(s) => s,
            JsonString::Owned(s) => s.as_str(),
        }
    }

    /// Borrows the string as raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Transfers ownership of the string's bytes to the caller, allocating
    /// only if this was a borrowed variant. This is the `extract-string`
    /// operation from the tokenizer specification.
    #[must_use]
    pub fn into_owned(self) -> String {
        match self {
            JsonString::Borrowed(s) => String::from(s),
            JsonString::Owned(s) => s,
        }
    }

    /// `true` if this string was decoded into a fresh allocation rather
    /// than borrowed from the input.
    #[must_use]
    pub const fn is_owned(&self) -> bool {
        matches!(self, JsonString::Owned(_))
    }
}

impl fmt::Display for JsonString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> From<&'a str> for JsonString<'a> {
    fn from(s: &'a str) -> Self {
        JsonString::Borrowed(s)
    }
}

impl From<String> for JsonString<'_> {
    fn from(s: String) -> Self {
        JsonString::Owned(s)
    }
}
