//! Number scanning: integer/float distinction, lenient `_` separators and
//! leading `+`, careful edge-case validation of `.` and exponent markers.
use alloc::format;
use alloc::string::String;

use super::is_value_terminator;
use crate::error::ErrorKind;
use crate::options::ParserMode;
use crate::source::ByteSource;
use crate::token::TokenValue;
use crate::tokenizer::Tokenizer;

/// Scans a JSON number given that its first byte (a digit, `+`, `-`, or
/// `.`) has already been peeked but not consumed. Returns the parsed
/// [`TokenValue::Int`] or [`TokenValue::Float`].
pub(crate) fn scan_number<S: ByteSource>(
    tok: &mut Tokenizer<S>,
) -> Result<TokenValue<'static>, ErrorKind> {
    let lenient = tok.options().mode == ParserMode::Lenient;
    let mut digits = String::new();

    let mut negative = false;
    match tok.peek_byte()? {
        Some(b'-') => {
            negative = true;
            tok.advance_byte()?;
        }
        Some(b'+') if lenient => {
            tok.advance_byte()?;
        }
        _ => {}
    }

    let mut seen_dot = false;
    let mut seen_exp = false;
    let mut seen_digit = false;
    let mut prev_was_underscore = false;
    let mut prev_was_exp_marker = false;

    loop {
        let b = tok.peek_byte()?;
        if is_value_terminator(b) {
            break;
        }
        let b = b.expect("terminator check already handled end-of-input");
        match b {
            b'0'..=b'9' => {
                digits.push(b as char);
                seen_digit = true;
                prev_was_underscore = false;
                prev_was_exp_marker = false;
                tok.advance_byte()?;
            }
            b'.' => {
                if seen_dot || seen_exp {
                    return Err(ErrorKind::InvalidValue(String::from(
                        "unexpected '.' in number",
                    )));
                }
                seen_dot = true;
                prev_was_underscore = false;
                prev_was_exp_marker = false;
                digits.push('.');
                tok.advance_byte()?;
            }
            b'e' | b'E' => {
                if seen_exp || !seen_digit {
                    return Err(ErrorKind::InvalidValue(String::from(
                        "unexpected exponent marker in number",
                    )));
                }
                seen_exp = true;
                prev_was_underscore = false;
                prev_was_exp_marker = true;
                digits.push(b as char);
                tok.advance_byte()?;
            }
            b'+' | b'-' => {
                if !prev_was_exp_marker {
                    return Err(ErrorKind::InvalidValue(format!(
                        "unexpected {:?} in number",
                        b as char
                    )));
                }
                prev_was_exp_marker = false;
                prev_was_underscore = false;
                digits.push(b as char);
                tok.advance_byte()?;
            }
            b'_' => {
                if prev_was_underscore || !seen_digit {
                    return Err(ErrorKind::InvalidValue(String::from(
                        "unexpected '_' separator in number",
                    )));
                }
                prev_was_underscore = true;
                tok.advance_byte()?;
            }
            other => {
                return Err(ErrorKind::InvalidValue(format!(
                    "unexpected character {:?} in number",
                    other as char
                )));
            }
        }
    }

    let digits_only: String = digits.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits_only.is_empty() {
        return Err(ErrorKind::InvalidValue(String::from("number has no digits")));
    }

    // RFC 8259 requires both an integer part before `.` and at least one
    // digit after it; the lenient leading-`.`/trailing-`.` extensions
    // (`.5`, `5.`) are only accepted in lenient mode.
    if !lenient && seen_dot {
        let dot = digits.find('.').expect("seen_dot implies a '.' is present");
        let before_ok = dot > 0 && digits.as_bytes()[dot - 1].is_ascii_digit();
        let after_ok = digits.as_bytes().get(dot + 1).is_some_and(u8::is_ascii_digit);
        if !before_ok || !after_ok {
            return Err(ErrorKind::InvalidValue(String::from(
                "strict mode requires digits on both sides of '.'",
            )));
        }
    }

    let mut text = String::with_capacity(digits.len() + 1);
    if negative {
        text.push('-');
    }
    text.push_str(&digits);

    if !seen_dot && !seen_exp {
        match text.parse::<i64>() {
            Ok(n) => Ok(TokenValue::Int(n)),
            // A numeral with no `.`/exponent that overflows i64 is still a
            // valid JSON number; downgrade to the nearest representable
            // float rather than erroring on otherwise-valid syntax.
            Err(_) => text
                .parse::<f64>()
                .map(TokenValue::Float)
                .map_err(|e| ErrorKind::InvalidValue(format!("invalid number: {e}"))),
        }
    } else {
        text.parse::<f64>()
            .map(TokenValue::Float)
            .map_err(|e| ErrorKind::InvalidValue(format!("invalid number: {e}")))
    }
}
