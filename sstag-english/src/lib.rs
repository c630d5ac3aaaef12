//! English tokenization, part-of-speech tagging, and lemmatization.
//!
//! This crate provides implementations of the `sstag` collaborator
//! traits for English text.

mod error;
pub use crate::error::LexiconError;

mod lemmatizer;
pub use crate::lemmatizer::MorphyLemmatizer;

mod lexicon;

mod tagger;
pub use crate::tagger::LexiconTagger;

mod tokenizer;
pub use crate::tokenizer::TreebankTokenizer;

use sstag::Annotator;

/// Annotator with the English tokenizer, tagger, and lemmatizer.
pub type EnglishAnnotator = Annotator<TreebankTokenizer, LexiconTagger, MorphyLemmatizer>;

/// Construct an annotator with the built-in English collaborators.
pub fn english_annotator() -> EnglishAnnotator {
    Annotator::new(
        TreebankTokenizer::new(),
        LexiconTagger::english(),
        MorphyLemmatizer::english(),
    )
}
