use std::fmt;

use crate::token::Instance;

/// Column-format rendering of an instance.
///
/// The instance is rendered as a header line, one tab-separated line
/// per token (position, form, lemma, tag, label), and a blank line.
pub struct ColumnInstance<'a>(pub &'a Instance);

impl<'a> fmt::Display for ColumnInstance<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        writeln!(fmt, "# instance {}", self.0.id())?;

        for (idx, token) in self.0.iter().enumerate() {
            writeln!(
                fmt,
                "{}\t{}\t{}\t{}\t{}",
                idx + 1,
                token.form(),
                token.lemma(),
                token.tag(),
                self.0.label()
            )?;
        }

        writeln!(fmt)
    }
}
