//! Integration coverage driving the public API exactly as a downstream
//! crate would: over `Tokenizer::from_str`, no access to crate internals.
use jsonpull::{ParserOptions, Tokenizer, TokenKind, TokenValue};

mod common;

#[test]
fn tokenizes_the_fixture_document_to_completion() {
    let mut tok = Tokenizer::from_str(common::DOCUMENT, ParserOptions::default());
    let mut object_starts = 0;
    let mut array_starts = 0;
    loop {
        let token = tok.next_token();
        match token.kind {
            TokenKind::StartObject => object_starts += 1,
            TokenKind::StartArray => array_starts += 1,
            TokenKind::Error => panic!("unexpected error: {:?}", token.error),
            TokenKind::EndOfInput => break,
            _ => {}
        }
    }
    assert_eq!(object_starts, 4); // root + meta + two user objects
    assert_eq!(array_starts, 1);
}

#[test]
fn from_slice_rejects_invalid_utf8() {
    let bytes = [b'"', 0xFF, b'"'];
    let result = Tokenizer::from_slice(&bytes, ParserOptions::default());
    assert!(result.is_err());
}

#[test]
fn from_slice_accepts_valid_utf8() {
    let bytes = "\"héllo\"".as_bytes();
    let mut tok = Tokenizer::from_slice(bytes, ParserOptions::default()).unwrap();
    let token = tok.next_token();
    assert_eq!(token.kind, TokenKind::String);
    match token.value.unwrap() {
        TokenValue::Str(s) => assert_eq!(s.as_str(), "héllo"),
        other => panic!("expected a string value, got {other:?}"),
    }
}
