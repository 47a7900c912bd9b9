//! Table-driven malformed-input coverage: each case must surface an
//! `Error` token with the documented [`ErrorKind`] label.
use alloc::string::String;

use rstest::rstest;

use crate::error::ErrorKind;
use crate::options::{ParserMode, ParserOptions};
use crate::tokenizer::Tokenizer;

fn first_error(input: &str, options: ParserOptions) -> ErrorKind {
    let mut tok = Tokenizer::from_str(input, options);
    loop {
        let token = tok.next_token();
        if let Some(err) = token.error {
            return err.kind().clone();
        }
        assert!(!token.is_end_of_input(), "{input:?} unexpectedly tokenized cleanly");
    }
}

fn strict() -> ParserOptions {
    ParserOptions { mode: ParserMode::Strict, ..Default::default() }
}

#[rstest]
#[case::trailing_comma_object("{\"a\":2,}", ErrorKind::MissingQuote)]
#[case::trailing_comma_array("[1,2,]", ErrorKind::InvalidValue(String::new()))]
#[case::unquoted_key("{a:1}", ErrorKind::MissingQuote)]
#[case::unterminated_string("\"abc", ErrorKind::MissingQuote)]
#[case::missing_comma("[1 2]", ErrorKind::MissingComma)]
#[case::unmatched_close("[1,2}", ErrorKind::UnmatchedTokens("closing bracket does not match its opener"))]
#[case::extra_close("[1]]", ErrorKind::UnmatchedTokens(""))]
#[case::bad_literal("tru", ErrorKind::InvalidValue(String::new()))]
#[case::leading_dot_strict(".5", ErrorKind::InvalidValue(String::new()))]
#[case::trailing_dot_strict("5.", ErrorKind::InvalidValue(String::new()))]
fn strict_mode_rejects(#[case] input: &str, #[case] expected: ErrorKind) {
    let got = first_error(input, strict());
    assert_eq!(got.label(), expected.label());
}

#[test]
fn lone_low_surrogate_is_rejected() {
    let got = first_error(r#""\ude00""#, ParserOptions::default());
    assert_eq!(got.label(), ErrorKind::InvalidUtf8(String::new()).label());
}

#[test]
fn unclosed_container_at_eof_is_unmatched() {
    let got = first_error("{\"a\":1", ParserOptions::default());
    assert_eq!(got.label(), ErrorKind::UnmatchedTokens("").label());
}

#[test]
fn double_comma_is_rejected_even_in_lenient_mode() {
    let got = first_error("[1,,2]", ParserOptions::default());
    assert_eq!(got.label(), ErrorKind::InvalidValue(String::new()).label());
}

#[test]
fn trailing_content_after_top_level_scalar_is_rejected() {
    let got = first_error("42 43", ParserOptions::default());
    assert_eq!(got.label(), ErrorKind::InvalidValue(String::new()).label());
}
