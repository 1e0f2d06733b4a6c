//! Line tokenization
//!
//! Splits a line into phrase tokens on a single-character delimiter.
//! Empty substrings (adjacent delimiters, or a delimiter at line start or
//! end) are silently dropped — they never count as phrases.

/// Splits lines into non-empty phrase tokens.
///
/// The returned iterator borrows from the input line and is consumed once;
/// re-tokenize the line if a second pass is needed. No escaping or quoting
/// is performed: the caller guarantees the delimiter never appears inside a
/// phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseTokenizer {
    delimiter: char,
}

impl Default for PhraseTokenizer {
    fn default() -> Self {
        Self::new('|')
    }
}

impl PhraseTokenizer {
    /// Create a tokenizer splitting on `delimiter`.
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// The delimiter this tokenizer splits on.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Lazily yield the non-empty phrase substrings of `line`.
    pub fn phrases<'l>(&self, line: &'l str) -> impl Iterator<Item = &'l str> {
        line.split(self.delimiter).filter(|p| !p.is_empty())
    }
}
