use crate::options::ParserOptions;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

#[test]
fn manual_scalar() {
    let mut tok = Tokenizer::from_str("42", ParserOptions::default());
    let first = tok.next_token();
    assert_eq!(first.kind, TokenKind::Integer);
    assert!(first.first);
    let end = tok.next_token();
    assert!(end.is_end_of_input());
}

#[test]
fn manual_nested_object() {
    let mut tok = Tokenizer::from_str(r#"{"a": [1, 2]}"#, ParserOptions::default());
    assert_eq!(tok.next_token().kind, TokenKind::StartObject);
    assert_eq!(tok.next_token().kind, TokenKind::StartArray);
    assert_eq!(tok.next_token().kind, TokenKind::Integer);
    assert_eq!(tok.next_token().kind, TokenKind::Integer);
    assert_eq!(tok.next_token().kind, TokenKind::EndArray);
    assert_eq!(tok.next_token().kind, TokenKind::EndObject);
    assert!(tok.next_token().is_end_of_input());
}

#[test]
fn manual_skip_drains_container() {
    let mut tok = Tokenizer::from_str(r#"{"skip":[1,2,{"x":3}],"rest":4}"#, ParserOptions::default());
    assert_eq!(tok.next_token().kind, TokenKind::StartObject);
    let array_start = tok.next_token();
    assert_eq!(array_start.kind, TokenKind::StartArray);
    tok.skip().unwrap();
    let next = tok.next_token();
    assert_eq!(next.kind, TokenKind::Integer);
    assert_eq!(next.key.unwrap().as_str(), "rest");
    assert_eq!(tok.next_token().kind, TokenKind::EndObject);
    assert!(tok.next_token().is_end_of_input());
}

#[test]
fn manual_skip_requires_container_start() {
    let mut tok = Tokenizer::from_str("42", ParserOptions::default());
    tok.next_token();
    assert!(tok.skip().is_err());
}

#[test]
fn manual_depth_returns_to_zero() {
    let mut tok = Tokenizer::from_str("[[[1, 2], 3]]", ParserOptions::default());
    assert_eq!(tok.depth(), 0);
    loop {
        let token = tok.next_token();
        if token.is_end_of_input() {
            break;
        }
        assert!(!token.is_error());
    }
    assert_eq!(tok.depth(), 0);
}

#[test]
fn manual_depth_peaks_mid_document() {
    let mut tok = Tokenizer::from_str("[[1, 2]]", ParserOptions::default());
    tok.next_token(); // StartArray (outer)
    tok.next_token(); // StartArray (inner); outer '[' now consumed
    assert_eq!(tok.depth(), 1);
    tok.next_token(); // Integer(1); inner '[' now consumed
    assert_eq!(tok.depth(), 2);
}

#[test]
fn manual_sticky_error_repeats() {
    let mut tok = Tokenizer::from_str("[1, , 2]", ParserOptions::default());
    tok.next_token(); // StartArray
    tok.next_token(); // Integer(1)
    let first_err = tok.next_token();
    assert!(first_err.is_error());
    let second_err = tok.next_token();
    assert!(second_err.is_error());
    assert_eq!(first_err.error.unwrap().kind(), second_err.error.unwrap().kind());
}
