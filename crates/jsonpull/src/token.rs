//! The emitted unit: [`Token`], [`TokenKind`], and [`TokenValue`].
use crate::error::ParserError;
use crate::string::JsonString;

/// The kind of one emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    StartObject,
    StartArray,
    EndObject,
    EndArray,
    String,
    Integer,
    Float,
    Bool,
    Null,
    EndOfInput,
    Error,
}

/// The scalar payload of a `String`, `Integer`, `Float`, or `Bool` token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue<'a> {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(JsonString<'a>),
}

/// One unit of the token stream.
///
/// `key` is present iff this token sits directly inside an object (not an
/// array, and not the outermost value) and is not itself a closing
/// bracket or end-of-input. `value` is populated only for scalar kinds.
/// `first` is `true` iff this is the first element inside its immediate
/// container, *and* for every closing bracket and `EndOfInput` — a
/// convenience for pretty-printers deciding whether to emit a separator.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub key: Option<JsonString<'a>>,
    pub value: Option<TokenValue<'a>>,
    pub first: bool,
    /// Populated iff `kind` is [`TokenKind::Error`].
    pub error: Option<ParserError>,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind, first: bool) -> Self {
        Self { kind, key: None, value: None, first, error: None }
    }

    pub(crate) fn with_key(mut self, key: Option<JsonString<'a>>) -> Self {
        self.key = key;
        self
    }

    pub(crate) fn with_value(mut self, value: TokenValue<'a>) -> Self {
        self.value = Some(value);
        self
    }

    pub(crate) fn error(err: ParserError) -> Self {
        Self { kind: TokenKind::Error, key: None, value: None, first: true, error: Some(err) }
    }

    /// `true` if this token reports an error (equivalent to `next`
    /// returning `false` in the language-neutral specification).
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error)
    }

    /// `true` once the document has been fully and successfully drained.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }
}
