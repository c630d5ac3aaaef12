use std::io;

/// Lexicon loading errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LexiconError {
    /// Error in file IO.
    #[error("error reading lexicon: {0}")]
    IO(#[from] io::Error),

    /// A lexicon line has too few fields.
    #[error("line {line}: missing field: {value:?}")]
    MissingField { line: usize, value: String },

    /// A word class code is not one of `a`, `v`, `n`, or `r`.
    #[error("line {line}: unknown word class: {value:?}")]
    UnknownWordClass { line: usize, value: String },
}
