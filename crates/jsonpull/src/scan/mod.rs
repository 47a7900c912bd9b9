//! Lexical primitives shared by the tokenizer: whitespace skipping,
//! literal/number/string/identifier scanning.
//!
//! Each scanner operates directly on a [`Tokenizer`](crate::tokenizer::Tokenizer)
//! through its `peek_byte`/`advance_byte` primitives rather than owning any
//! state of its own: small, single-purpose units the state machine in
//! `tokenizer.rs` calls into at the right moment.
mod ident;
mod literal;
mod number;
mod strscan;

pub(crate) use ident::scan_identifier;
pub(crate) use literal::scan_literal;
pub(crate) use number::scan_number;
pub(crate) use strscan::scan_string;

/// The four ASCII whitespace bytes JSON recognizes.
pub(crate) fn is_ascii_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// A byte that may legally follow a scalar value: whitespace, a separator,
/// a closing bracket, or (via `None`) end-of-input.
pub(crate) fn is_value_terminator(b: Option<u8>) -> bool {
    match b {
        None => true,
        Some(b) => is_ascii_whitespace(b) || matches!(b, b',' | b'}' | b']'),
    }
}
