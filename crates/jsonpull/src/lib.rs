//! A pull-style, incremental streaming JSON tokenizer.
//!
//! Unlike a DOM-building parser, [`Tokenizer`] never allocates a tree: each
//! call to [`Tokenizer::next_token`] advances one step and returns one
//! [`Token`], and the caller decides whether to descend into a container or
//! [`Tokenizer::skip`] past it. This makes it suitable for validating or
//! re-shaping documents too large to hold in memory at once, or for reading
//! only a handful of fields out of a much larger payload.
//!
//! ```rust
//! use jsonpull::{ParserOptions, Tokenizer, TokenKind};
//!
//! let mut tok = Tokenizer::from_str(r#"{"name": "ferris", "legs": 4}"#, ParserOptions::default());
//! loop {
//!     let token = tok.next_token();
//!     match token.kind {
//!         TokenKind::EndOfInput | TokenKind::Error => break,
//!         _ => {}
//!     }
//! }
//! ```
#![no_std]
#![warn(missing_docs)]
extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod options;
mod scan;
mod source;
mod stack;
mod string;
mod token;
mod tokenizer;
mod utf8;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParserError};
pub use options::{ParserMode, ParserOptions};
pub use source::{ByteSource, StrSource};
pub use string::JsonString;
pub use token::{Token, TokenKind, TokenValue};
pub use tokenizer::Tokenizer;

#[cfg(feature = "std")]
pub use source::ReadSource;
