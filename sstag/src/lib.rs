//! Tagging of labeled sentence datasets.
//!
//! Labeled sentences (`<label><TAB><sentence>`) are tokenized, tagged
//! and lemmatized, and written in a per-token column format:
//!
//! ```text
//! # instance 1
//! 1	The	The	DT	2
//! 2	cats	cat	NNS	2
//! ```

mod error;
pub use crate::error::{AnnotateError, Error, ParseError, SplitError, Stage};

pub mod annotate;
pub use crate::annotate::{Annotator, Lemmatize, PosTag, Tokenize};

pub mod display;

pub mod io;

pub mod pipeline;

mod split;
pub use crate::split::Split;

pub mod token;
pub use crate::token::{Instance, Token};

mod word_class;
pub use crate::word_class::{word_class, WordClass};
