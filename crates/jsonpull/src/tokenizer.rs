//! The pull-driven tokenizer: the nesting state machine described by the
//! tokenizer specification's §4.4, plus the `skip` helper of §4.5.
use alloc::format;
use alloc::string::String;

use crate::error::{ErrorKind, ParserError};
use crate::options::{ParserMode, ParserOptions};
use crate::scan::{is_ascii_whitespace, scan_identifier, scan_literal, scan_number, scan_string};
use crate::source::ByteSource;
use crate::stack::{ContainerKind, MatchStack};
use crate::string::JsonString;
use crate::token::{Token, TokenKind, TokenValue};

#[cfg(feature = "std")]
use crate::source::ReadSource;

/// A pull-driven, incremental JSON tokenizer.
///
/// Created with [`Tokenizer::from_str`] (in-memory, eagerly UTF-8
/// validated) or, with the `std` feature, [`Tokenizer::from_reader`]
/// (chunked, validated as it reads). Drive it by repeatedly calling
/// [`next_token`](Self::next_token); descend into a `StartObject` /
/// `StartArray` by calling `next_token` again, or bypass it with
/// [`skip`](Self::skip).
///
/// # Examples
///
/// ```rust
/// use jsonpull::{Tokenizer, TokenKind};
///
/// let mut tok = Tokenizer::from_str(r#"{"a": [1, 2]}"#, Default::default());
/// assert_eq!(tok.next_token().kind, TokenKind::StartObject);
/// assert_eq!(tok.next_token().kind, TokenKind::StartArray);
/// tok.skip().unwrap();
/// assert_eq!(tok.next_token().kind, TokenKind::EndObject);
/// assert_eq!(tok.next_token().kind, TokenKind::EndOfInput);
/// ```
pub struct Tokenizer<S: ByteSource> {
    source: S,
    options: ParserOptions,
    line: usize,
    column: usize,
    depth: usize,
    stack: MatchStack,
    bootstrapped: bool,
    pending_open: Option<ContainerKind>,
    at_first_element: bool,
    poisoned: Option<ParserError>,
}

impl<'a> Tokenizer<crate::source::StrSource<'a>> {
    /// Opens a tokenizer over an in-memory `&str`. Since a Rust `&str` is
    /// already guaranteed to be valid UTF-8, this is infallible — unlike
    /// the `bytes`-accepting `open-string` in the language-neutral
    /// specification, which validates eagerly and can fail.
    #[must_use]
    pub fn from_str(src: &'a str, options: ParserOptions) -> Self {
        Self::new(crate::source::StrSource::new(src.as_bytes()), options)
    }

    /// Opens a tokenizer over a raw byte slice, eagerly validating it as
    /// UTF-8 first (the `open-string(src: bytes)` operation from the
    /// specification).
    pub fn from_slice(src: &'a [u8], options: ParserOptions) -> Result<Self, ParserError> {
        crate::utf8::validate(src)
            .map_err(|()| ParserError::new(ErrorKind::InvalidUtf8(String::from("invalid UTF-8")), 1, 0))?;
        Ok(Self::new(crate::source::StrSource::new(src), options))
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> Tokenizer<ReadSource<R>> {
    /// Opens a tokenizer over any [`std::io::Read`], refilling a
    /// `options.read_buffer_size`-byte buffer on demand. Construction
    /// itself cannot fail; the first read can, surfacing as `CantRead` or
    /// `InvalidUtf8` from the first [`next_token`](Tokenizer::next_token)
    /// call.
    #[must_use]
    pub fn from_reader(src: R, options: ParserOptions) -> Self {
        let chunk = options.read_buffer_size;
        Self::new(ReadSource::new(src, chunk), options)
    }
}

impl<S: ByteSource> Tokenizer<S> {
    fn new(source: S, options: ParserOptions) -> Self {
        let cap = options.initial_stack_capacity;
        Self {
            source,
            options,
            line: 1,
            column: 0,
            depth: 0,
            stack: MatchStack::with_capacity(cap),
            bootstrapped: false,
            pending_open: None,
            at_first_element: false,
            poisoned: None,
        }
    }

    /// The active tokenizer configuration.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Current container nesting depth (number of `Start-*` tokens
    /// emitted so far minus the number of `End-*` tokens emitted so far).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// 1-based line the tokenizer has reached.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// 1-based column the tokenizer has reached; resets to `0` on a
    /// newline, so the first character after one sits at column `1`.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    pub(crate) fn peek_byte(&mut self) -> Result<Option<u8>, ErrorKind> {
        self.source.peek()
    }

    pub(crate) fn advance_byte(&mut self) -> Result<Option<u8>, ErrorKind> {
        let b = self.source.peek()?;
        if let Some(byte) = b {
            self.source.bump();
            if byte == b'\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        Ok(b)
    }

    pub(crate) fn source_cursor(&self) -> usize {
        self.source.cursor()
    }

    pub(crate) fn source_supports_borrow(&self) -> bool {
        self.source.supports_borrow()
    }

    pub(crate) fn borrow_source(&self, start: usize, end: usize) -> Option<&str> {
        self.source.borrow(start, end)
    }

    fn skip_whitespace(&mut self) -> Result<(), ErrorKind> {
        loop {
            match self.peek_byte()? {
                Some(b) if is_ascii_whitespace(b) => {
                    self.advance_byte()?;
                }
                // No JSON value can start with a raw, unescaped non-ASCII
                // byte, so in `allow_unicode_whitespace` mode any non-ASCII
                // scalar encountered here must be Unicode whitespace or the
                // input is malformed either way; decode it fully and check.
                Some(b) if b >= 0x80 && self.options.allow_unicode_whitespace => {
                    let ch = self.decode_scalar(b)?;
                    if !ch.is_whitespace() {
                        return Err(ErrorKind::UnknownToken(ch, "a JSON value"));
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn decode_scalar(&mut self, lead: u8) -> Result<char, ErrorKind> {
        let len = if lead >= 0xF0 {
            4
        } else if lead >= 0xE0 {
            3
        } else {
            2
        };
        let mut bytes = [0u8; 4];
        bytes[0] = self.advance_byte()?.expect("peek just succeeded");
        for slot in bytes.iter_mut().take(len).skip(1) {
            *slot = self.advance_byte()?.ok_or(ErrorKind::UndefinedNextChar)?;
        }
        core::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| ErrorKind::InvalidUtf8(String::from("invalid UTF-8 scalar")))
    }

    fn expect_colon(&mut self) -> Result<(), ErrorKind> {
        match self.advance_byte()? {
            Some(b':') => Ok(()),
            Some(b) => Err(ErrorKind::UnknownToken(b as char, "':'")),
            None => Err(ErrorKind::InvalidValue(String::from(
                "expected ':' but found end of input",
            ))),
        }
    }

    fn parse_key(&mut self) -> Result<JsonString<'_>, ErrorKind> {
        let key = match self.peek_byte()? {
            Some(b'"') => {
                self.advance_byte()?;
                scan_string(self)?
            }
            _ if self.options.mode == ParserMode::Lenient => scan_identifier(self)?,
            _ => return Err(ErrorKind::MissingQuote),
        };
        self.skip_whitespace()?;
        self.expect_colon()?;
        self.skip_whitespace()?;
        Ok(key)
    }

    fn parse_value(&mut self, first: bool) -> Result<Token<'_>, ErrorKind> {
        let b = self.peek_byte()?.ok_or_else(|| {
            ErrorKind::InvalidValue(String::from("unexpected end of input, expected a value"))
        })?;

        let tok = match b {
            b'"' => {
                self.advance_byte()?;
                let s = scan_string(self)?;
                Token::new(TokenKind::String, first).with_value(TokenValue::Str(s))
            }
            b't' => {
                scan_literal(self, b"true")?;
                Token::new(TokenKind::Bool, first).with_value(TokenValue::Bool(true))
            }
            b'f' => {
                scan_literal(self, b"false")?;
                Token::new(TokenKind::Bool, first).with_value(TokenValue::Bool(false))
            }
            b'n' => {
                scan_literal(self, b"null")?;
                Token::new(TokenKind::Null, first)
            }
            b'{' => {
                self.pending_open = Some(ContainerKind::Object);
                Token::new(TokenKind::StartObject, first)
            }
            b'[' => {
                self.pending_open = Some(ContainerKind::Array);
                Token::new(TokenKind::StartArray, first)
            }
            b'0'..=b'9' | b'+' | b'-' | b'.' => {
                let v = scan_number(self)?;
                let kind = match v {
                    TokenValue::Int(_) => TokenKind::Integer,
                    TokenValue::Float(_) => TokenKind::Float,
                    TokenValue::Bool(_) | TokenValue::Str(_) => unreachable!("scan_number only returns Int/Float"),
                };
                Token::new(kind, first).with_value(v)
            }
            other => {
                return Err(ErrorKind::InvalidValue(format!(
                    "unexpected character {:?} where a value was expected",
                    other as char
                )));
            }
        };

        // Single-outer-value enforcement (§4.4 step 9): a scalar outer
        // value (stack empty, this is the only value) must be followed by
        // nothing but whitespace and end-of-input.
        if self.stack.is_empty() && !matches!(tok.kind, TokenKind::StartObject | TokenKind::StartArray) {
            self.skip_whitespace()?;
            if self.peek_byte()?.is_some() {
                return Err(ErrorKind::InvalidValue(String::from(
                    "unexpected trailing content after the top-level value",
                )));
            }
        }

        Ok(tok)
    }

    fn next_token_impl(&mut self) -> Result<Token<'_>, ErrorKind> {
        if let Some(err) = self.poisoned.clone() {
            return Ok(Token::error(err));
        }

        if !self.bootstrapped {
            self.bootstrapped = true;
            self.skip_whitespace()?;
            return self.parse_value(true);
        }

        if let Some(kind) = self.pending_open.take() {
            self.advance_byte()?; // the '{' / '[' itself
            self.stack.push(kind);
            self.depth += 1;
            self.at_first_element = true;
        }
        // Whitespace can precede a comma or closing bracket just as freely
        // as it can precede a value; skip it unconditionally before
        // inspecting the next byte below.
        self.skip_whitespace()?;

        let mut comma_consumed = false;
        if self.options.mode == ParserMode::Lenient && !self.at_first_element {
            if self.peek_byte()? == Some(b',') {
                self.advance_byte()?;
                self.skip_whitespace()?;
                comma_consumed = true;
            }
        }

        let b = self.peek_byte()?;
        if let Some(top) = self.stack.top() {
            if matches!(b, Some(b']') | Some(b'}')) {
                let this_closes = matches!(
                    (top, b),
                    (ContainerKind::Array, Some(b']')) | (ContainerKind::Object, Some(b'}'))
                );
                if !this_closes {
                    return Err(ErrorKind::UnmatchedTokens("closing bracket does not match its opener"));
                }
                self.advance_byte()?;
                self.stack.pop();
                self.depth -= 1;
                self.at_first_element = false;
                let kind = if matches!(top, ContainerKind::Array) {
                    TokenKind::EndArray
                } else {
                    TokenKind::EndObject
                };
                return Ok(Token::new(kind, true));
            }
        } else if matches!(b, Some(b']') | Some(b'}')) {
            return Err(ErrorKind::UnmatchedTokens("closing bracket with no matching opener"));
        }

        if b.is_none() {
            return if self.stack.is_empty() {
                Ok(Token::new(TokenKind::EndOfInput, true))
            } else {
                Err(ErrorKind::UnmatchedTokens("end of input with unclosed containers"))
            };
        }

        if !self.stack.is_empty() && !self.at_first_element && !comma_consumed {
            if self.peek_byte()? != Some(b',') {
                return Err(ErrorKind::MissingComma);
            }
            self.advance_byte()?;
            self.skip_whitespace()?;
        }

        let is_first = self.at_first_element;
        self.at_first_element = false;

        // `parse_key`'s return borrows `self` mutably; convert it to an
        // owned string right away so that borrow ends here, before
        // `parse_value` takes its own mutable borrow of `self` below.
        let key = if matches!(self.stack.top(), Some(ContainerKind::Object)) {
            Some(self.parse_key()?.into_owned())
        } else {
            None
        };

        let tok = self.parse_value(is_first)?;
        Ok(match key {
            Some(k) => tok.with_key(Some(JsonString::Owned(k))),
            None => tok,
        })
    }

    /// Pulls the next token. Never panics on malformed input: a failure is
    /// reported as a `TokenKind::Error` token carrying the
    /// [`ParserError`], not a `Result` — success is simply
    /// `!token.is_error()`, with `EndOfInput` counting as success.
    pub fn next_token(&mut self) -> Token<'_> {
        match self.next_token_impl() {
            Ok(tok) => tok,
            Err(kind) => {
                let err = ParserError::new(kind, self.line, self.column);
                #[cfg(any(test, feature = "fuzzing"))]
                assert!(!self.options.panic_on_error, "{err}");
                self.poisoned = Some(err.clone());
                Token::error(err)
            }
        }
    }

    /// Skips past the container whose `StartObject`/`StartArray` was the
    /// token most recently returned by [`next_token`](Self::next_token).
    /// Calling this at any other time is `InvalidArgs`.
    pub fn skip(&mut self) -> Result<(), ParserError> {
        let Some(kind) = self.pending_open else {
            return Err(ParserError::new(
                ErrorKind::InvalidArgs("skip is only valid directly after a StartObject/StartArray token"),
                self.line,
                self.column,
            ));
        };
        let start_depth = self.depth;
        let closing = if matches!(kind, ContainerKind::Array) { TokenKind::EndArray } else { TokenKind::EndObject };
        loop {
            let tok = self.next_token();
            if tok.is_error() {
                return Err(tok.error.expect("Error token always carries a ParserError"));
            }
            if tok.kind == closing && self.depth == start_depth {
                return Ok(());
            }
            if tok.is_end_of_input() {
                // Should be unreachable: an unclosed container surfaces as
                // UnmatchedTokens before EndOfInput is ever produced.
                return Err(ParserError::new(
                    ErrorKind::UnmatchedTokens("end of input while skipping a container"),
                    self.line,
                    self.column,
                ));
            }
        }
    }
}
