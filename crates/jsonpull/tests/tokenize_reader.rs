//! Confirms `ReadSource`, fed in arbitrarily small chunks, produces the
//! exact same token kind/key/value sequence as `StrSource` over the same
//! document — the chunk boundary must never be observable.
#![cfg(feature = "std")]

use std::io::Read;

use jsonpull::{ParserOptions, Tokenizer, TokenKind};

mod common;

/// A `Read` impl that hands back at most `chunk` bytes per call,
/// regardless of how much the caller's buffer could hold.
struct Throttled<'a> {
    remaining: &'a [u8],
    chunk: usize,
}

impl<'a> Read for Throttled<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.remaining.len());
        buf[..n].copy_from_slice(&self.remaining[..n]);
        self.remaining = &self.remaining[n..];
        Ok(n)
    }
}

fn summarize<S: jsonpull::ByteSource>(mut tok: Tokenizer<S>) -> String {
    let mut out = String::new();
    loop {
        let token = tok.next_token();
        out.push_str(&format!("{:?} key={:?} value={:?}\n", token.kind, token.key, token.value));
        if token.kind == TokenKind::Error || token.kind == TokenKind::EndOfInput {
            return out;
        }
    }
}

#[test]
fn read_source_matches_str_source_byte_for_byte_chunked() {
    let expected = summarize(Tokenizer::from_str(common::DOCUMENT, ParserOptions::default()));

    for chunk_size in [1usize, 3, 7, 64] {
        let reader = Throttled { remaining: common::DOCUMENT.as_bytes(), chunk: chunk_size };
        let got = summarize(Tokenizer::from_reader(reader, ParserOptions::default()));
        assert_eq!(got, expected, "mismatch at chunk_size={chunk_size}");
    }
}
