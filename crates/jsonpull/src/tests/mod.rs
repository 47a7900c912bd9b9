mod manual;
mod parse_bad;
mod snapshot_events;

use alloc::format;
use alloc::string::String;

use crate::source::ByteSource;
use crate::tokenizer::Tokenizer;

/// Drains a tokenizer, rendering one `Debug`-formatted line per token.
/// Stops after `EndOfInput` or `Error`, both of which are included.
pub(crate) fn token_log<S: ByteSource>(tok: &mut Tokenizer<S>) -> String {
    let mut out = String::new();
    loop {
        let token = tok.next_token();
        let done = token.is_error() || token.is_end_of_input();
        out.push_str(&format!("{token:?}\n"));
        if done {
            return out;
        }
    }
}
