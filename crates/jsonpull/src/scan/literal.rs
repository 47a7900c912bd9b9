//! `true` / `false` / `null` matching.
use alloc::format;

use super::is_value_terminator;
use crate::error::ErrorKind;
use crate::source::ByteSource;
use crate::tokenizer::Tokenizer;

/// Reads exactly the bytes of `true`, `false`, or `null`, given that the
/// first byte (`t`, `f`, or `n`) has already been peeked but not consumed.
/// Succeeds only if the byte immediately following the literal is
/// whitespace, `,`, a closing bracket, or end-of-input; anything else
/// (`trued`, `nul`, ...) is `InvalidValue`.
pub(crate) fn scan_literal<S: ByteSource>(
    tok: &mut Tokenizer<S>,
    expected: &'static [u8],
) -> Result<(), ErrorKind> {
    for &want in expected {
        match tok.advance_byte()? {
            Some(b) if b == want => {}
            Some(b) => {
                return Err(ErrorKind::InvalidValue(format!(
                    "unexpected character {:?} while matching {:?}",
                    b as char,
                    core::str::from_utf8(expected).unwrap_or("<literal>")
                )));
            }
            None => {
                return Err(ErrorKind::InvalidValue(format!(
                    "unexpected end of input while matching {:?}",
                    core::str::from_utf8(expected).unwrap_or("<literal>")
                )));
            }
        }
    }
    let next = tok.peek_byte()?;
    if is_value_terminator(next) {
        Ok(())
    } else {
        Err(ErrorKind::InvalidValue(format!(
            "unexpected character {:?} after literal",
            next.map(|b| b as char)
        )))
    }
}
