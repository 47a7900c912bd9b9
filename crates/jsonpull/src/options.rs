#![allow(clippy::struct_excessive_bools)]

/// Which punctuation and lexical extensions the tokenizer accepts.
///
/// `Strict` follows RFC 8259 exactly. `Lenient` additionally accepts
/// trailing commas, unquoted identifier keys, `_` digit separators in
/// numbers, and a leading `+` on numbers.
///
/// # Default
///
/// [`ParserMode::Lenient`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserMode {
    /// RFC 8259 JSON: quoted keys only, no trailing commas, no numeric
    /// underscores, no leading `+`.
    Strict,
    /// RFC 8259 JSON plus trailing commas, unquoted identifier keys,
    /// numeric `_` separators, and a leading `+` on numbers.
    #[default]
    Lenient,
}

/// Configuration options for the streaming JSON tokenizer.
///
/// # Examples
///
/// ```rust
/// use jsonpull::{ParserMode, ParserOptions, Tokenizer};
///
/// let options = ParserOptions {
///     mode: ParserMode::Strict,
///     ..Default::default()
/// };
/// let mut tok = Tokenizer::from_str(r#"{"a": 1}"#, options);
/// ```
///
/// # Default
///
/// [`ParserMode::Lenient`], a 256-byte read buffer, and an initial match
/// stack capacity of 32.
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Strict (RFC 8259) or lenient (with trailing commas, unquoted keys,
    /// numeric underscores, and leading `+`) tokenization.
    ///
    /// # Default
    ///
    /// [`ParserMode::Lenient`]
    pub mode: ParserMode,

    /// Whether to allow any Unicode whitespace between tokens, rather than
    /// only the four ASCII whitespace characters defined by the JSON
    /// specification: space (U+0020), line feed (U+000A), carriage return
    /// (U+000D), and horizontal tab (U+0009).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// Chunk size used when refilling the read buffer for a stream byte
    /// source. Has no effect on a string byte source, which is addressed
    /// directly.
    ///
    /// # Default
    ///
    /// `256`
    pub read_buffer_size: usize,

    /// Initial capacity (in container-nesting entries) reserved for the
    /// match stack. The stack still grows by doubling past this point; it
    /// is a performance hint, not a hard limit.
    ///
    /// # Default
    ///
    /// `32`
    pub initial_stack_capacity: usize,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces on
    /// unexpected parse failures.
    pub panic_on_error: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            mode: ParserMode::Lenient,
            allow_unicode_whitespace: false,
            read_buffer_size: 256,
            initial_stack_capacity: 32,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}

impl ParserMode {
    /// `true` for [`ParserMode::Strict`].
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, ParserMode::Strict)
    }
}
