use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ParseError;

/// Dataset split.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    /// All splits, in processing order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];

    /// Get the name of the split.
    pub fn name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Test => "test",
        }
    }

    /// Get the file name of the labeled sentences of this split.
    pub fn input_filename(self) -> String {
        format!("{}.5class.txt", self.name())
    }

    /// Get the file name of the tagged output of this split.
    pub fn output_filename(self) -> &'static str {
        self.name()
    }

    /// Get the path of the labeled sentences in `dir`.
    pub fn input_path(self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.input_filename())
    }

    /// Get the path of the tagged output in `dir`.
    pub fn output_path(self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.output_filename())
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Split {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Split::ALL
            .iter()
            .copied()
            .find(|split| split.name() == s)
            .ok_or_else(|| ParseError::UnknownSplit {
                value: s.to_owned(),
            })
    }
}
