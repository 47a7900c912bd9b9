//! String body scanning: the closing-quote/escape/surrogate-pair machinery
//! shared by string values and (strict-mode) quoted object keys.
use alloc::format;
use alloc::string::String;

use crate::error::ErrorKind;
use crate::options::ParserMode;
use crate::source::ByteSource;
use crate::string::JsonString;
use crate::tokenizer::Tokenizer;

/// Scans a string body, given that the opening `"` has already been
/// consumed. Returns the decoded content, borrowed from the input when
/// possible (no escapes were encountered and the source supports
/// borrowing) or owned otherwise.
pub(crate) fn scan_string<'t, S: ByteSource>(
    tok: &'t mut Tokenizer<S>,
) -> Result<JsonString<'t>, ErrorKind> {
    let start = tok.source_cursor();
    let mut owned: Option<String> = if tok.source_supports_borrow() { None } else { Some(String::new()) };

    loop {
        let cursor_before = tok.source_cursor();
        let b = tok.peek_byte()?;
        match b {
            None => return Err(ErrorKind::MissingQuote),
            Some(b'"') => {
                tok.advance_byte()?;
                return Ok(match owned {
                    Some(s) => JsonString::Owned(s),
                    None => match tok.borrow_source(start, cursor_before) {
                        Some(s) => JsonString::Borrowed(s),
                        None => JsonString::Owned(String::from("")),
                    },
                });
            }
            Some(b'\\') => {
                let buf = owned.get_or_insert_with(|| {
                    tok.borrow_source(start, cursor_before).map(String::from).unwrap_or_default()
                });
                tok.advance_byte()?;
                scan_escape(tok, buf)?;
            }
            Some(raw) if raw < 0x20 || raw == 0x22 => {
                // 0x22 ('"') is handled above; any other byte below 0x20
                // inside a string is an unterminated string.
                return Err(ErrorKind::MissingQuote);
            }
            Some(_) => {
                if let Some(buf) = owned.as_mut() {
                    let byte = tok.advance_byte()?.expect("peek just succeeded");
                    if byte < 0x80 {
                        buf.push(byte as char);
                    } else {
                        copy_utf8_scalar(tok, byte, buf)?;
                    }
                } else {
                    tok.advance_byte()?;
                }
            }
        }
    }
}

/// Copies one (possibly multi-byte) UTF-8 scalar, whose lead byte has
/// already been consumed as `lead`, into `buf`.
fn copy_utf8_scalar<S: ByteSource>(
    tok: &mut Tokenizer<S>,
    lead: u8,
    buf: &mut String,
) -> Result<(), ErrorKind> {
    let len = if lead >= 0xF0 {
        4
    } else if lead >= 0xE0 {
        3
    } else {
        2
    };
    let mut bytes = [0u8; 4];
    bytes[0] = lead;
    for slot in bytes.iter_mut().take(len).skip(1) {
        let b = tok.advance_byte()?.ok_or(ErrorKind::MissingQuote)?;
        *slot = b;
    }
    let s = core::str::from_utf8(&bytes[..len])
        .map_err(|_| ErrorKind::InvalidUtf8(String::from("invalid UTF-8 in string body")))?;
    buf.push_str(s);
    Ok(())
}

/// Scans everything after a `\` has been consumed, appending the decoded
/// output to `buf`.
fn scan_escape<S: ByteSource>(tok: &mut Tokenizer<S>, buf: &mut String) -> Result<(), ErrorKind> {
    let c = tok.advance_byte()?.ok_or(ErrorKind::MissingQuote)?;
    match c {
        b'"' => buf.push('"'),
        b'\\' => buf.push('\\'),
        b'/' => buf.push('/'),
        b'b' => buf.push('\u{8}'),
        b'f' => buf.push('\u{c}'),
        b'n' => buf.push('\n'),
        b'r' => buf.push('\r'),
        b't' => buf.push('\t'),
        b'u' => {
            let cp = read_hex4(tok)?;
            let scalar = decode_utf16_escape(tok, cp)?;
            push_scalar(buf, scalar)?;
        }
        b'U' if tok.options().mode == ParserMode::Lenient => {
            let cp = read_hex_n(tok, 8)?;
            push_scalar(buf, cp)?;
        }
        other => {
            return Err(ErrorKind::InvalidValue(format!(
                "unknown escape sequence '\\{}'",
                other as char
            )));
        }
    }
    Ok(())
}

/// Handles the surrogate-pair logic for a `\uXXXX` escape whose first
/// codepoint has already been decoded as `first`.
fn decode_utf16_escape<S: ByteSource>(tok: &mut Tokenizer<S>, first: u32) -> Result<u32, ErrorKind> {
    if (0xD800..=0xDBFF).contains(&first) {
        // High surrogate: must be followed by `\u` and a low surrogate.
        if tok.advance_byte()? != Some(b'\\') {
            return Err(ErrorKind::InvalidUtf8(String::from(
                "high surrogate not followed by a second \\u escape",
            )));
        }
        if tok.advance_byte()? != Some(b'u') {
            return Err(ErrorKind::InvalidUtf8(String::from(
                "high surrogate not followed by a second \\u escape",
            )));
        }
        let low = read_hex4(tok)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(ErrorKind::InvalidUtf8(String::from(
                "high surrogate not followed by a low surrogate",
            )));
        }
        Ok(((first - 0xD800) * 0x400) + (low - 0xDC00) + 0x10000)
    } else if (0xDC00..=0xDFFF).contains(&first) {
        Err(ErrorKind::InvalidUtf8(String::from("lone low surrogate")))
    } else {
        Ok(first)
    }
}

fn push_scalar(buf: &mut String, scalar: u32) -> Result<(), ErrorKind> {
    if scalar > 0x10_FFFF {
        return Err(ErrorKind::InvalidUtf8(format!(
            "codepoint U+{scalar:X} exceeds U+10FFFF"
        )));
    }
    match char::from_u32(scalar) {
        Some(ch) => {
            buf.push(ch);
            Ok(())
        }
        None => Err(ErrorKind::InvalidUtf8(format!(
            "U+{scalar:X} is not a valid Unicode scalar value"
        ))),
    }
}

fn read_hex4<S: ByteSource>(tok: &mut Tokenizer<S>) -> Result<u32, ErrorKind> {
    read_hex_n(tok, 4)
}

fn read_hex_n<S: ByteSource>(tok: &mut Tokenizer<S>, n: usize) -> Result<u32, ErrorKind> {
    let mut value: u32 = 0;
    for _ in 0..n {
        let b = tok.advance_byte()?.ok_or(ErrorKind::MissingQuote)?;
        let digit = match b {
            b'0'..=b'9' => u32::from(b - b'0'),
            b'a'..=b'f' => u32::from(b - b'a' + 10),
            b'A'..=b'F' => u32::from(b - b'A' + 10),
            _ => {
                return Err(ErrorKind::InvalidValue(format!(
                    "expected hex digit, found {:?}",
                    b as char
                )));
            }
        };
        value = (value << 4) | digit;
    }
    Ok(value)
}
