//! Error types reported by the tokenizer.
//!
//! Every failing operation returns a [`ParserError`]: a stable [`ErrorKind`]
//! plus the `line`/`column` the scanner had reached when it gave up. Errors
//! are sticky for the lifetime of a [`crate::Tokenizer`] — once one is
//! produced, further calls are not meaningful and the tokenizer should be
//! dropped.
use alloc::string::String;

use thiserror::Error;

/// Stable error classification for every way tokenization can fail, each
/// carrying the context needed to render a precise message.
///
/// Variants match the error table in the tokenizer specification
/// one-for-one; `NO_ERROR` and the reserved-but-unused `INVALID_IDENT` from
/// the original design are intentionally absent (the former isn't an error,
/// the latter is never emitted — see `DESIGN.md`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The underlying byte source reported a read failure.
    #[error("read failure in byte source")]
    CantRead,
    /// An unrecognised structural byte, or an expected specific byte (such
    /// as `:`) was not found.
    #[error("unexpected character {0:?}, expected {1}")]
    UnknownToken(char, &'static str),
    /// A `skip` was attempted on a token that isn't a container start, or an
    /// operation was attempted on an iterator that has already errored.
    #[error("invalid arguments: {0}")]
    InvalidArgs(&'static str),
    /// A read returned zero bytes with no end-of-file and no error
    /// indicator.
    #[error("read returned no bytes and no end-of-file indicator")]
    UndefinedNextChar,
    /// UTF-8 validation failed: the DFA rejected a byte sequence, a `\u`
    /// escape was malformed, a surrogate was out of place, or a codepoint
    /// exceeded `U+10FFFF`.
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(String),
    /// A closing bracket had no matching opener, or end-of-input was
    /// reached with containers still open.
    #[error("unmatched {0}")]
    UnmatchedTokens(&'static str),
    /// Allocation failure for a scan buffer, the match stack, or the read
    /// buffer.
    #[error("out of memory")]
    Oom,
    /// Two values appeared in a container with no comma between them.
    #[error("expected a comma before the next value")]
    MissingComma,
    /// A string or identifier was never terminated, or an unquoted key was
    /// used in strict mode.
    #[error("missing closing quote")]
    MissingQuote,
    /// A malformed number, multiple top-level values, or a bad literal.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl ErrorKind {
    /// A short, stable label for this kind, independent of the dynamic
    /// message, for callers that want to `match` without string-comparing
    /// `Display` output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            ErrorKind::CantRead => "CANT_READ",
            ErrorKind::UnknownToken(..) => "UNKNOWN_TOK",
            ErrorKind::InvalidArgs(..) => "INVALID_ARGS",
            ErrorKind::UndefinedNextChar => "UNDEFINED_NEXT_CHAR",
            ErrorKind::InvalidUtf8(..) => "INVALID_UTF8",
            ErrorKind::UnmatchedTokens(..) => "UNMATCHED_TOKENS",
            ErrorKind::Oom => "OOM",
            ErrorKind::MissingComma => "MISSING_COMMA",
            ErrorKind::MissingQuote => "MISSING_QUOTE",
            ErrorKind::InvalidValue(..) => "INVALID_VALUE",
        }
    }
}

/// An error produced by the tokenizer, carrying its [`ErrorKind`] and the
/// position it occurred at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {line}:{column}")]
pub struct ParserError {
    kind: ErrorKind,
    /// 1-based line the scanner was on when the error was raised.
    pub line: usize,
    /// 1-based column the scanner was on when the error was raised.
    pub column: usize,
}

impl ParserError {
    pub(crate) fn new(kind: ErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// The stable error classification.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
