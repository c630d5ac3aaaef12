use std::io::BufRead;

use sstag::WordClass;

use crate::error::LexiconError;

/// Read tab-separated lexicon entries with at least `n_fields` fields.
///
/// Returns the 1-based line number and fields of every entry. Blank
/// lines are skipped. Fields beyond `n_fields` are ignored.
pub(crate) fn read_entries<R>(
    read: R,
    n_fields: usize,
) -> Result<Vec<(usize, Vec<String>)>, LexiconError>
where
    R: BufRead,
{
    let mut entries = Vec::new();

    for (idx, line) in read.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<String> = line
            .split('\t')
            .take(n_fields)
            .map(str::to_owned)
            .collect();
        if fields.len() != n_fields || fields.iter().any(String::is_empty) {
            return Err(LexiconError::MissingField {
                line: idx + 1,
                value: line,
            });
        }

        entries.push((idx + 1, fields));
    }

    Ok(entries)
}

/// Parse a one-letter word class code.
pub(crate) fn parse_word_class(line: usize, code: &str) -> Result<WordClass, LexiconError> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => WordClass::from_code(c),
        _ => None,
    }
    .ok_or_else(|| LexiconError::UnknownWordClass {
        line,
        value: code.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use sstag::WordClass;

    use super::{parse_word_class, read_entries};
    use crate::error::LexiconError;

    #[test]
    fn reads_entries() {
        let entries = read_entries("a\tb\n\nc\td\textra\n".as_bytes(), 2).unwrap();
        assert_eq!(
            entries,
            vec![
                (1, vec!["a".to_owned(), "b".to_owned()]),
                (3, vec!["c".to_owned(), "d".to_owned()])
            ]
        );
    }

    #[test]
    fn rejects_short_entries() {
        match read_entries("a\tb\nc\n".as_bytes(), 2) {
            Err(LexiconError::MissingField { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "c");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn parses_word_class_codes() {
        assert_eq!(parse_word_class(1, "v").unwrap(), WordClass::Verb);
        assert!(matches!(
            parse_word_class(4, "vb"),
            Err(LexiconError::UnknownWordClass { line: 4, .. })
        ));
        assert!(parse_word_class(1, "x").is_err());
    }
}
