//! Sentence annotation.
//!
//! An `Annotator` combines three collaborators: a tokenizer, a
//! part-of-speech tagger, and a lemmatizer. Each collaborator is a
//! trait, so that implementations can be replaced independently. The
//! traits are implemented for closures with matching signatures.

use itertools::Itertools;

use crate::error::{AnnotateError, Stage};
use crate::io::Record;
use crate::token::{Instance, Token};
use crate::word_class::{word_class, WordClass};

/// Sentence tokenizer.
pub trait Tokenize {
    /// Split a sentence into words.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> Tokenize for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Part-of-speech tagger.
pub trait PosTag {
    /// Tag a sequence of words.
    ///
    /// Returns `(word, tag)` pairs. A well-behaved tagger returns one
    /// pair per word, in the same order.
    fn tag(&self, words: &[String]) -> Vec<(String, String)>;
}

impl<F> PosTag for F
where
    F: Fn(&[String]) -> Vec<(String, String)>,
{
    fn tag(&self, words: &[String]) -> Vec<(String, String)> {
        self(words)
    }
}

/// Lemmatizer.
pub trait Lemmatize {
    /// Get the lemma of a word.
    ///
    /// When `class` is `None`, no word class hint is available and the
    /// lemmatizer applies its default behavior.
    fn lemmatize(&self, word: &str, class: Option<WordClass>) -> String;
}

impl<F> Lemmatize for F
where
    F: Fn(&str, Option<WordClass>) -> String,
{
    fn lemmatize(&self, word: &str, class: Option<WordClass>) -> String {
        self(word, class)
    }
}

/// Sentence annotator.
pub struct Annotator<T, P, L> {
    tokenizer: T,
    tagger: P,
    lemmatizer: L,
}

impl<T, P, L> Annotator<T, P, L>
where
    T: Tokenize,
    P: PosTag,
    L: Lemmatize,
{
    pub fn new(tokenizer: T, tagger: P, lemmatizer: L) -> Self {
        Annotator {
            tokenizer,
            tagger,
            lemmatizer,
        }
    }

    /// Annotate a labeled sentence.
    ///
    /// The sentence is tokenized and tagged. Every word is then
    /// lemmatized, using the word class of its tag as a hint. Tags
    /// without a word class are lemmatized without hint.
    ///
    /// # Errors
    ///
    /// Returns `AnnotateError::LengthMismatch` when the tagger or the
    /// lemmatization step do not produce exactly one item per token.
    pub fn annotate(&self, id: usize, record: &Record) -> Result<Instance, AnnotateError> {
        let words = self.tokenizer.tokenize(record.sentence());

        let tagged = self.tagger.tag(&words);
        if tagged.len() != words.len() {
            return Err(AnnotateError::LengthMismatch {
                stage: Stage::Tagging,
                expected: words.len(),
                found: tagged.len(),
            });
        }

        let lemmas: Vec<String> = tagged
            .iter()
            .map(|(word, tag)| self.lemmatizer.lemmatize(word, word_class(tag)))
            .collect();
        if lemmas.len() != words.len() {
            return Err(AnnotateError::LengthMismatch {
                stage: Stage::Lemmatization,
                expected: words.len(),
                found: lemmas.len(),
            });
        }

        let mut instance = Instance::new(id, record.label());
        for ((form, tag), lemma) in tagged.into_iter().zip_eq(lemmas) {
            instance.push(Token::new(form, lemma, tag));
        }

        Ok(instance)
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Get the part-of-speech tagger.
    pub fn tagger(&self) -> &P {
        &self.tagger
    }

    /// Get the lemmatizer.
    pub fn lemmatizer(&self) -> &L {
        &self.lemmatizer
    }
}
