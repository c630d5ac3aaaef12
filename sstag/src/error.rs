use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::split::Split;

/// Tagging error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A file could not be opened or created.
    #[error("cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error in file IO.
    #[error("error reading or writing data: {0}")]
    IO(#[from] io::Error),

    /// Input parsing error.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The collaborators disagree on the number of tokens.
    #[error(transparent)]
    Annotate(#[from] AnnotateError),
}

/// Parsing errors.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// An input line does not separate the label from the sentence.
    #[error("line {line}: no tab between label and sentence: {value:?}")]
    MissingLabelSeparator { line: usize, value: String },

    /// The split name is not one of train, dev, or test.
    #[error("unknown split: {value:?}")]
    UnknownSplit { value: String },

    /// A token line was found before any instance header.
    #[error("token line outside of an instance: {value:?}")]
    MissingHeader { value: String },

    /// A comment line is not a well-formed instance header.
    #[error("cannot parse instance header: {value:?}")]
    MalformedHeader { value: String },

    /// An instance header was found before the previous instance ended.
    #[error("instance header without preceding blank line: {value:?}")]
    UnexpectedHeader { value: String },

    /// An integer field could not be parsed as an integer.
    #[error("cannot parse as integer field: {value:?}")]
    ParseIntField { value: String },

    /// A token line has too few fields.
    #[error("{field} field is missing: {value:?}")]
    MissingField { field: &'static str, value: String },

    /// Token indices must be consecutive, starting at 1.
    #[error("expected token index {expected}, found {found}")]
    InconsistentIndex { expected: usize, found: usize },

    /// All tokens of an instance carry the instance label.
    #[error("token label {found:?} differs from instance label {expected:?}")]
    InconsistentLabel { expected: String, found: String },
}

/// Annotation stage that produced an inconsistent result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    Tagging,
    Lemmatization,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stage::Tagging => write!(f, "tagging"),
            Stage::Lemmatization => write!(f, "lemmatization"),
        }
    }
}

/// Annotation errors.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum AnnotateError {
    /// A collaborator returned a different number of items than there
    /// are tokens.
    #[error("{stage} produced {found} items for {expected} tokens")]
    LengthMismatch {
        stage: Stage,
        expected: usize,
        found: usize,
    },
}

/// Error while tagging a dataset split.
#[derive(Debug, Error)]
#[error("cannot tag {split} split: {source}")]
pub struct SplitError {
    pub split: Split,
    #[source]
    pub source: Error,
}
