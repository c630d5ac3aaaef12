//! Tokens and instances.

use std::mem;
use std::slice;

/// An annotated token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    form: String,
    lemma: String,
    tag: String,
}

impl Token {
    /// Create a new token.
    pub fn new(form: impl Into<String>, lemma: impl Into<String>, tag: impl Into<String>) -> Token {
        Token {
            form: form.into(),
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }

    /// Get the word form or punctuation symbol.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Get the lemma of the word form.
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Get the fine-grained part-of-speech tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set the word form or punctuation symbol.
    ///
    /// Returns the form that is replaced.
    pub fn set_form(&mut self, form: impl Into<String>) -> String {
        mem::replace(&mut self.form, form.into())
    }

    /// Set the lemma of the word form.
    ///
    /// Returns the lemma that is replaced.
    pub fn set_lemma(&mut self, lemma: impl Into<String>) -> String {
        mem::replace(&mut self.lemma, lemma.into())
    }

    /// Set the fine-grained part-of-speech tag.
    ///
    /// Returns the tag that is replaced.
    pub fn set_tag(&mut self, tag: impl Into<String>) -> String {
        mem::replace(&mut self.tag, tag.into())
    }
}

/// A labeled, annotated sentence.
///
/// Each instance carries a 1-based running number within its split and
/// the sentence-level label. Token positions are 1-based as well: the
/// first pushed token has position 1.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Instance {
    id: usize,
    label: String,
    tokens: Vec<Token>,
}

impl Instance {
    /// Construct an instance without tokens.
    pub fn new(id: usize, label: impl Into<String>) -> Self {
        Instance {
            id,
            label: label.into(),
            tokens: Vec::new(),
        }
    }

    /// Get the instance number.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the sentence label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the sentence label.
    ///
    /// Returns the label that is replaced.
    pub fn set_label(&mut self, label: impl Into<String>) -> String {
        mem::replace(&mut self.label, label.into())
    }

    /// Add a token to the instance.
    ///
    /// Tokens should always be pushed in sentence order. Returns the
    /// 1-based position of the token.
    pub fn push(&mut self, token: Token) -> usize {
        self.tokens.push(token);
        self.tokens.len()
    }

    /// Get the token at a 1-based position.
    pub fn token(&self, position: usize) -> Option<&Token> {
        position
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
    }

    /// Get the tokens of the instance.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Get the tokens of the instance mutably.
    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Get an iterator over the tokens.
    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the instance has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a Instance {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
