//! Byte sources: the uniform interface the tokenizer reads through.
//!
//! Two implementations ship with the crate: [`StrSource`] over an in-memory
//! slice that is validated eagerly at construction, and (behind the `std`
//! feature) [`ReadSource`] over any [`std::io::Read`], which refills a
//! fixed-size buffer on demand and validates each refilled chunk as it
//! arrives. Position tracking (line/column) is *not* this module's job —
//! see [`crate::tokenizer::Tokenizer`], which owns those counters and only
//! advances them on `advance`, never on `peek`.
use crate::error::ErrorKind;

/// Minimal contract a byte source must satisfy: look at the next byte
/// without consuming it, or consume the byte most recently peeked.
pub trait ByteSource {
    /// Returns the next byte without consuming it, refilling internal
    /// buffers as needed. `Ok(None)` means end-of-input.
    fn peek(&mut self) -> Result<Option<u8>, ErrorKind>;

    /// Consumes the byte most recently returned by [`peek`](Self::peek).
    /// Calling this without a preceding successful `peek` is a logic error
    /// and may panic.
    fn bump(&mut self);

    /// Attempts to borrow `input[start..end]` directly from the source's
    /// backing storage as a `str`. Only sources that own the whole input
    /// up front (i.e. [`StrSource`]) can do this; sources that decode
    /// pieces over time must return `None` and let the caller fall back to
    /// an owned copy.
    fn borrow(&self, start: usize, end: usize) -> Option<&str>;

    /// Byte offset of the read cursor, for sources that support
    /// [`borrow`](Self::borrow). Sources that never support borrowing may
    /// leave this at `0`.
    fn cursor(&self) -> usize {
        0
    }

    /// Whether [`borrow`](Self::borrow) can ever return `Some` for this
    /// source. Lets the tokenizer decide, before scanning a string,
    /// whether to accumulate bytes eagerly (streaming sources) or scan
    /// optimistically and only start accumulating once an escape forces
    /// it (in-memory sources).
    fn supports_borrow(&self) -> bool {
        false
    }
}

/// A byte source over an in-memory, already-UTF-8-validated slice.
///
/// Scalar strings that don't contain an escape and don't cross... there is
/// no chunk boundary to cross here, so every unescaped string value can be
/// returned as a borrow straight into the original input.
#[derive(Debug, Clone, Copy)]
pub struct StrSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> StrSource<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl<'a> ByteSource for StrSource<'a> {
    fn peek(&mut self) -> Result<Option<u8>, ErrorKind> {
        Ok(self.bytes.get(self.pos).copied())
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn borrow(&self, start: usize, end: usize) -> Option<&str> {
        self.bytes.get(start..end).map(|s| {
            // Safety net: the whole slice was validated as UTF-8 at
            // construction time and `start`/`end` are always codepoint
            // boundaries produced by the lexer, so this never fails in
            // practice. We still go through the checked path rather than
            // `from_utf8_unchecked` since there is no hot loop here.
            core::str::from_utf8(s).expect("byte range is always a UTF-8 boundary")
        })
    }

    fn cursor(&self) -> usize {
        self.pos
    }

    fn supports_borrow(&self) -> bool {
        true
    }
}

#[cfg(feature = "std")]
mod read_source {
    use alloc::{string::String, vec::Vec, vec};
    use std::io::Read;

    use super::ByteSource;
    use crate::error::ErrorKind;
    use crate::utf8;

    /// A byte source that refills a fixed-size buffer from a
    /// [`std::io::Read`] on demand.
    ///
    /// UTF-8 is validated incrementally: each newly-read chunk is fed
    /// through the DFA, carrying state across refills so a codepoint split
    /// at a chunk boundary is still validated correctly. Reaching
    /// end-of-input mid-codepoint is rejected, matching the behavior of
    /// the eager, whole-slice validation [`super::StrSource`] performs.
    pub struct ReadSource<R> {
        reader: R,
        buf: Vec<u8>,
        filled: usize,
        pos: usize,
        eof: bool,
        utf8_state: u32,
    }

    impl<R: Read> ReadSource<R> {
        pub(crate) fn new(reader: R, chunk_size: usize) -> Self {
            Self {
                reader,
                buf: vec![0u8; chunk_size.max(1)],
                filled: 0,
                pos: 0,
                eof: false,
                utf8_state: utf8::ACCEPT,
            }
        }

        fn refill(&mut self) -> Result<(), ErrorKind> {
            debug_assert_eq!(self.pos, self.filled);
            if self.eof {
                return Ok(());
            }
            let n = self.reader.read(&mut self.buf).map_err(|_| ErrorKind::CantRead)?;
            if n == 0 {
                self.eof = true;
                if self.utf8_state != utf8::ACCEPT {
                    return Err(ErrorKind::InvalidUtf8(String::from(
                        "input ended in the middle of a UTF-8 sequence",
                    )));
                }
                return Ok(());
            }
            for &b in &self.buf[..n] {
                self.utf8_state = utf8::step(self.utf8_state, b);
                if self.utf8_state == utf8::REJECT {
                    return Err(ErrorKind::InvalidUtf8(String::from(
                        "invalid UTF-8 byte sequence",
                    )));
                }
            }
            self.filled = n;
            self.pos = 0;
            Ok(())
        }
    }

    impl<R: Read> ByteSource for ReadSource<R> {
        fn peek(&mut self) -> Result<Option<u8>, ErrorKind> {
            if self.pos >= self.filled {
                if self.eof {
                    return Ok(None);
                }
                self.refill()?;
                if self.pos >= self.filled {
                    return Ok(None);
                }
            }
            Ok(Some(self.buf[self.pos]))
        }

        fn bump(&mut self) {
            self.pos += 1;
        }

        fn borrow(&self, _start: usize, _end: usize) -> Option<&str> {
            None
        }
    }
}

#[cfg(feature = "std")]
pub use read_source::ReadSource;
