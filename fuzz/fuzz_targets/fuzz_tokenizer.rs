#![no_main]
use arbitrary::Arbitrary;
use jsonpull::{ParserMode, ParserOptions, Tokenizer};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

/// A depth-bounded `serde_json::Value` generator, so the fuzzer spends most
/// of its time on well-formed (but structurally varied) documents rather
/// than rejecting garbage bytes immediately.
#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        fn gen(u: &mut arbitrary::Unstructured<'_>, depth: u8) -> arbitrary::Result<Value> {
            let choices: u8 = if depth == 0 { 4 } else { 6 };
            let value = match u.int_in_range::<u8>(0..=choices - 1)? {
                0 => Value::Null,
                1 => Value::Bool(u.arbitrary()?),
                2 => {
                    let n: i64 = u.arbitrary()?;
                    Value::from(n)
                }
                3 => Value::String(u.arbitrary()?),
                4 => {
                    let len = u.int_in_range::<u8>(0..=4)?;
                    let mut items = Vec::new();
                    for _ in 0..len {
                        items.push(gen(u, depth - 1)?);
                    }
                    Value::Array(items)
                }
                _ => {
                    let len = u.int_in_range::<u8>(0..=4)?;
                    let mut map = Map::new();
                    for _ in 0..len {
                        let key: String = u.arbitrary()?;
                        map.insert(key, gen(u, depth - 1)?);
                    }
                    Value::Object(map)
                }
            };
            Ok(value)
        }
        gen(u, 4).map(ArbitraryValue)
    }
}

/// Drains a tokenizer to completion or the first error, asserting it never
/// panics regardless of what bytes it's fed.
fn drain(text: &str, mode: ParserMode) {
    let options = ParserOptions { mode, ..ParserOptions::default() };
    let mut tok = Tokenizer::from_str(text, options);
    loop {
        let token = tok.next_token();
        if token.is_error() || token.is_end_of_input() {
            return;
        }
    }
}

fuzz_target!(|data: &[u8]| {
    // Path 1: raw fuzzer bytes, lossily coerced to UTF-8. Exercises the
    // tokenizer's handling of arbitrary malformed input without ever
    // panicking, regardless of what garbage is thrown at it.
    let lossy = String::from_utf8_lossy(data);
    drain(&lossy, ParserMode::Lenient);
    drain(&lossy, ParserMode::Strict);

    // Path 2: an `Arbitrary`-generated, always-well-formed JSON value,
    // serialized by `serde_json` and re-tokenized. Every such document must
    // tokenize to completion without an `Error` token in strict mode.
    let mut u = arbitrary::Unstructured::new(data);
    if let Ok(ArbitraryValue(value)) = ArbitraryValue::arbitrary(&mut u) {
        let text = value.to_string();
        let mut tok = Tokenizer::from_str(
            &text,
            ParserOptions { mode: ParserMode::Strict, ..ParserOptions::default() },
        );
        loop {
            let token = tok.next_token();
            assert!(!token.is_error(), "well-formed document {text:?} failed to tokenize: {:?}", token.error);
            if token.is_end_of_input() {
                break;
            }
        }
    }
});
