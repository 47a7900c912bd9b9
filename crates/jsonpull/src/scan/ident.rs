//! Lenient-mode unquoted identifier keys: `{a: 1}` instead of `{"a": 1}`.
use alloc::string::String;

use crate::error::ErrorKind;
use crate::source::ByteSource;
use crate::string::JsonString;
use crate::tokenizer::Tokenizer;

/// Reads everything up to (but not including) the next `:`, then trims
/// trailing whitespace. An empty identifier (after trimming) is permitted
/// and yields a zero-length key. A newline before the `:` is found, or
/// running out of input first, is reported as [`ErrorKind::MissingQuote`]
/// — the reserved `INVALID_IDENT` kind is never emitted, matching the
/// current design (see `DESIGN.md`).
pub(crate) fn scan_identifier<'t, S: ByteSource>(
    tok: &'t mut Tokenizer<S>,
) -> Result<JsonString<'t>, ErrorKind> {
    let mut raw = String::new();
    loop {
        match tok.peek_byte()? {
            None => return Err(ErrorKind::MissingQuote),
            Some(b':') => break,
            Some(b'\n') => return Err(ErrorKind::MissingQuote),
            Some(b) => {
                if b < 0x80 {
                    raw.push(b as char);
                    tok.advance_byte()?;
                } else {
                    // Re-assemble the multi-byte scalar so identifiers can
                    // contain non-ASCII text.
                    let lead = tok.advance_byte()?.expect("peek just succeeded");
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
                        *slot = tok.advance_byte()?.ok_or(ErrorKind::MissingQuote)?;
                    }
                    let s = core::str::from_utf8(&bytes[..len]).map_err(|_| {
                        ErrorKind::InvalidUtf8(String::from("invalid UTF-8 in identifier"))
                    })?;
                    raw.push_str(s);
                }
            }
        }
    }
    let trimmed = raw.trim_end().len();
    raw.truncate(trimmed);
    Ok(JsonString::Owned(raw))
}
