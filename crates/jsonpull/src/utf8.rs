//! Incremental UTF-8 validation.
//!
//! Implements Hoehrmann's byte-class + state-transition DFA so that
//! validation state can be carried across chunk boundaries: a multi-byte
//! codepoint split between two stream reads is still validated correctly,
//! one byte at a time, without buffering the whole codepoint first.

/// The DFA has accepted a complete, well-formed sequence so far.
pub(crate) const ACCEPT: u32 = 0;
/// The DFA has rejected the byte sequence. Sticky: once reached, every
/// subsequent byte keeps the state at `REJECT`.
pub(crate) const REJECT: u32 = 12;

#[rustfmt::skip]
static UTF8D: [u8; 364] = [
    // byte -> character class
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,
    7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,
    8,8,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,
    10,3,3,3,3,3,3,3,3,3,3,3,3,4,3,3,11,6,6,6,5,8,8,8,8,8,8,8,8,8,8,8,

    // state transitions, indexed by (state + class)
    0,12,24,36,60,96,84,12,12,12,48,72,
    12,12,12,12,12,12,12,12,12,12,12,12,
    12,0,12,12,12,12,12,0,12,0,12,12,
    12,24,12,12,12,12,12,24,12,24,12,12,
    12,12,12,12,12,12,12,24,12,12,12,12,
    12,24,12,12,12,12,12,24,12,24,12,12,
    12,12,12,12,12,12,12,36,12,36,12,12,
    12,36,12,12,12,12,12,36,12,36,12,12,
    12,36,12,12,12,12,12,12,12,12,12,12,
];

/// One step of the incremental UTF-8 DFA.
///
/// Returns the new state; [`ACCEPT`] means a complete codepoint just ended
/// on this byte, [`REJECT`] is sticky, anything else means "valid so far,
/// need more continuation bytes".
pub(crate) fn step(state: u32, byte: u8) -> u32 {
    let class = UTF8D[byte as usize] as u32;
    UTF8D[256 + (state + class) as usize] as u32
}

/// Validates a complete, already-assembled byte slice.
///
/// Returns `Ok(())` if `bytes` is well-formed UTF-8 and does not end
/// mid-codepoint; `Err(())` otherwise (mirrors `core::str::from_utf8`'s
/// pass/fail without the slicing API we don't need here).
pub(crate) fn validate(bytes: &[u8]) -> Result<(), ()> {
    let mut state = ACCEPT;
    for &b in bytes {
        state = step(state, b);
        if state == REJECT {
            return Err(());
        }
    }
    if state != ACCEPT { Err(()) } else { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ascii() {
        assert!(validate(b"hello world").is_ok());
    }

    #[test]
    fn accepts_multibyte() {
        assert!(validate("héllo wörld 👍".as_bytes()).is_ok());
    }

    #[test]
    fn rejects_lone_continuation() {
        assert!(validate(&[0x80]).is_err());
    }

    #[test]
    fn rejects_truncated_sequence() {
        // 0xF0 starts a 4-byte sequence; one continuation byte isn't enough.
        assert!(validate(&[0xF0, 0x90]).is_err());
    }

    #[test]
    fn rejects_overlong_encoding() {
        // Overlong encoding of '/' (0x2F) as two bytes.
        assert!(validate(&[0xC0, 0xAF]).is_err());
    }

    #[test]
    fn incremental_matches_batch() {
        let s = "a日本語b".as_bytes();
        let mut state = ACCEPT;
        for &b in s {
            state = step(state, b);
        }
        assert_eq!(state, ACCEPT);
    }
}
