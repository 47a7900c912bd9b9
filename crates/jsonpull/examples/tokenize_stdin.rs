//! Reads a JSON document from stdin and prints one line per token.
//!
//! ```bash
//! echo '{"a": [1, 2, 3]}' | cargo run -p jsonpull --example tokenize_stdin
//! ```
use std::io::{self, Read};

use jsonpull::{ParserOptions, Tokenizer};

fn main() {
    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {err}");
        std::process::exit(1);
    }

    let mut tok = Tokenizer::from_str(&input, ParserOptions::default());
    loop {
        let token = tok.next_token();
        println!(
            "{:?} depth={} first={} key={:?} value={:?}",
            token.kind,
            tok.depth(),
            token.first,
            token.key,
            token.value
        );
        if token.is_error() {
            eprintln!("error: {}", token.error.expect("Error token always carries a ParserError"));
            std::process::exit(1);
        }
        if token.is_end_of_input() {
            break;
        }
    }
}
