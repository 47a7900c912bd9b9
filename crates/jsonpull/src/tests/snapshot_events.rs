//! Snapshot of the exact token sequence emitted for a moderately complex
//! document, to catch unintended behavior changes as the tokenizer
//! evolves.
use insta::assert_snapshot;

use super::token_log;
use crate::options::ParserOptions;
use crate::tokenizer::Tokenizer;

#[test]
fn snapshot_complex_document() {
    let json = r#"{"users":[{"id":1,"name":"Ada"},{"id":2,"name":"Grace"}],"meta":{"count":2}}"#;
    let mut tok = Tokenizer::from_str(json, ParserOptions::default());
    let log = token_log(&mut tok);

    assert_snapshot!(log, @r###"
    Token { kind: StartObject, key: None, value: None, first: true, error: None }
    Token { kind: StartArray, key: Some(Owned("users")), value: None, first: true, error: None }
    Token { kind: StartObject, key: None, value: None, first: true, error: None }
    Token { kind: Integer, key: Some(Owned("id")), value: Some(Int(1)), first: true, error: None }
    Token { kind: String, key: Some(Owned("name")), value: Some(Str(Borrowed("Ada"))), first: false, error: None }
    Token { kind: EndObject, key: None, value: None, first: true, error: None }
    Token { kind: StartObject, key: None, value: None, first: false, error: None }
    Token { kind: Integer, key: Some(Owned("id")), value: Some(Int(2)), first: true, error: None }
    Token { kind: String, key: Some(Owned("name")), value: Some(Str(Borrowed("Grace"))), first: false, error: None }
    Token { kind: EndObject, key: None, value: None, first: true, error: None }
    Token { kind: EndArray, key: None, value: None, first: true, error: None }
    Token { kind: StartObject, key: Some(Owned("meta")), value: None, first: false, error: None }
    Token { kind: Integer, key: Some(Owned("count")), value: Some(Int(2)), first: true, error: None }
    Token { kind: EndObject, key: None, value: None, first: true, error: None }
    Token { kind: EndObject, key: None, value: None, first: true, error: None }
    Token { kind: EndOfInput, key: None, value: None, first: true, error: None }
    "###);
}

#[test]
fn snapshot_lenient_trailing_comma_and_unquoted_keys() {
    let json = r#"{a: [1, 2,], b: "ok",}"#;
    let mut tok = Tokenizer::from_str(json, ParserOptions::default());
    let log = token_log(&mut tok);

    assert_snapshot!(log, @r###"
    Token { kind: StartObject, key: None, value: None, first: true, error: None }
    Token { kind: StartArray, key: Some(Owned("a")), value: None, first: true, error: None }
    Token { kind: Integer, key: None, value: Some(Int(1)), first: true, error: None }
    Token { kind: Integer, key: None, value: Some(Int(2)), first: false, error: None }
    Token { kind: EndArray, key: None, value: None, first: true, error: None }
    Token { kind: String, key: Some(Owned("b")), value: Some(Str(Borrowed("ok"))), first: false, error: None }
    Token { kind: EndObject, key: None, value: None, first: true, error: None }
    Token { kind: EndOfInput, key: None, value: None, first: true, error: None }
    "###);
}
