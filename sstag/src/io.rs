//! Readers and writers.
//!
//! Labeled sentences are read with `RecordReader`, one
//! `<label><TAB><sentence>` record per line. Annotated instances are
//! written in column format with `Writer` and can be read back with
//! `Reader`.

use std::io;

use crate::display::ColumnInstance;
use crate::error::{Error, ParseError};
use crate::token::{Instance, Token};

/// A labeled sentence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    label: String,
    sentence: String,
}

impl Record {
    pub fn new(label: impl Into<String>, sentence: impl Into<String>) -> Self {
        Record {
            label: label.into(),
            sentence: sentence.into(),
        }
    }

    /// Split a line on its first tab into a label and a sentence.
    ///
    /// Returns `None` if the line does not contain a tab.
    pub fn from_line(line: &str) -> Option<Self> {
        line.split_once('\t')
            .map(|(label, sentence)| Record::new(label, sentence))
    }

    /// Get the sentence label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the raw sentence text.
    pub fn sentence(&self) -> &str {
        &self.sentence
    }
}

/// A trait for objects that can read labeled sentences.
pub trait ReadRecord {
    /// Read a `Record` from this object.
    ///
    /// # Errors
    ///
    /// A call to `read_record` may generate an error to indicate that
    /// the operation could not be completed.
    fn read_record(&mut self) -> Result<Option<Record>, Error>;

    /// Get an iterator over the records in this reader.
    fn records(self) -> Records<Self>
    where
        Self: Sized,
    {
        Records { reader: self }
    }
}

/// A reader for labeled sentences.
///
/// Every line must separate the label from the sentence with a tab,
/// so an empty line is an error as well.
pub struct RecordReader<R> {
    read: R,
    line_no: usize,
}

impl<R: io::BufRead> RecordReader<R> {
    /// Construct a new reader from an object that implements the
    /// `io::BufRead` trait.
    pub fn new(read: R) -> RecordReader<R> {
        RecordReader { read, line_no: 0 }
    }
}

impl<R: io::BufRead> IntoIterator for RecordReader<R> {
    type Item = Result<Record, Error>;
    type IntoIter = Records<RecordReader<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

impl<R: io::BufRead> ReadRecord for RecordReader<R> {
    fn read_record(&mut self) -> Result<Option<Record>, Error> {
        let mut line = String::new();

        loop {
            line.clear();

            if self.read.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            self.line_no += 1;

            let line = trim_line_ending(&line);

            return match Record::from_line(line) {
                Some(record) => Ok(Some(record)),
                None => Err(ParseError::MissingLabelSeparator {
                    line: self.line_no,
                    value: line.to_owned(),
                }
                .into()),
            };
        }
    }
}

/// An iterator over the records in a `RecordReader`.
pub struct Records<R>
where
    R: ReadRecord,
{
    reader: R,
}

impl<R> Iterator for Records<R>
where
    R: ReadRecord,
{
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_record().transpose()
    }
}

/// A trait for objects that can read annotated `Instance`s.
pub trait ReadInstance {
    /// Read an `Instance` from this object.
    ///
    /// # Errors
    ///
    /// A call to `read_instance` may generate an error to indicate that
    /// the operation could not be completed.
    fn read_instance(&mut self) -> Result<Option<Instance>, Error>;

    /// Get an iterator over the instances in this reader.
    fn instances(self) -> Instances<Self>
    where
        Self: Sized,
    {
        Instances { reader: self }
    }
}

/// A reader for instances in column format.
///
/// The label of an instance without tokens cannot be recovered from the
/// column format; such instances are read with an empty label.
pub struct Reader<R> {
    read: R,
}

impl<R: io::BufRead> Reader<R> {
    /// Construct a new reader from an object that implements the
    /// `io::BufRead` trait.
    pub fn new(read: R) -> Reader<R> {
        Reader { read }
    }
}

impl<R: io::BufRead> IntoIterator for Reader<R> {
    type Item = Result<Instance, Error>;
    type IntoIter = Instances<Reader<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances()
    }
}

impl<R: io::BufRead> ReadInstance for Reader<R> {
    fn read_instance(&mut self) -> Result<Option<Instance>, Error> {
        let mut line = String::new();
        let mut instance: Option<Instance> = None;

        loop {
            line.clear();

            // End of reader.
            if self.read.read_line(&mut line)? == 0 {
                return Ok(instance);
            }

            let line = trim_line_ending(&line);

            // The blank line terminates an instance. Be robust against
            // multiple blank lines between instances.
            if line.trim().is_empty() {
                if instance.is_some() {
                    return Ok(instance);
                }

                continue;
            }

            if let Some(header) = line.strip_prefix('#') {
                if instance.is_some() {
                    return Err(ParseError::UnexpectedHeader {
                        value: line.to_owned(),
                    }
                    .into());
                }

                instance = Some(Instance::new(parse_header(header)?, String::new()));
                continue;
            }

            let instance = instance.as_mut().ok_or_else(|| ParseError::MissingHeader {
                value: line.to_owned(),
            })?;

            parse_token_line(instance, line)?;
        }
    }
}

fn parse_header(header: &str) -> Result<usize, ParseError> {
    let id = header
        .trim()
        .strip_prefix("instance")
        .ok_or_else(|| ParseError::MalformedHeader {
            value: format!("#{}", header),
        })?;

    parse_int_field(id.trim())
}

fn parse_token_line(instance: &mut Instance, line: &str) -> Result<(), ParseError> {
    let mut iter = line.split('\t');

    let position = parse_int_field(iter.next().unwrap_or_default())?;
    if position != instance.len() + 1 {
        return Err(ParseError::InconsistentIndex {
            expected: instance.len() + 1,
            found: position,
        });
    }

    let form = parse_field(iter.next(), "form", line)?;
    let lemma = parse_field(iter.next(), "lemma", line)?;
    let tag = parse_field(iter.next(), "tag", line)?;
    let label = parse_field(iter.next(), "label", line)?;

    if instance.is_empty() {
        instance.set_label(label);
    } else if instance.label() != label {
        return Err(ParseError::InconsistentLabel {
            expected: instance.label().to_owned(),
            found: label.to_owned(),
        });
    }

    instance.push(Token::new(form, lemma, tag));

    Ok(())
}

fn parse_field<'a>(
    field: Option<&'a str>,
    name: &'static str,
    line: &str,
) -> Result<&'a str, ParseError> {
    field.ok_or_else(|| ParseError::MissingField {
        field: name,
        value: line.to_owned(),
    })
}

fn parse_int_field(field: &str) -> Result<usize, ParseError> {
    field.parse().map_err(|_| ParseError::ParseIntField {
        value: field.to_owned(),
    })
}

fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(|c| c == '\n' || c == '\r')
}

/// An iterator over the instances in a `Reader`.
pub struct Instances<R>
where
    R: ReadInstance,
{
    reader: R,
}

impl<R> Iterator for Instances<R>
where
    R: ReadInstance,
{
    type Item = Result<Instance, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_instance().transpose()
    }
}

/// A trait for objects that can write annotated `Instance`s.
pub trait WriteInstance {
    /// Write an instance into this object.
    ///
    /// # Errors
    ///
    /// A call to `write_instance` may generate an error to indicate that
    /// the operation could not be completed.
    fn write_instance(&mut self, instance: &Instance) -> Result<(), Error>;
}

/// A writer for instances.
///
/// This writer will write instances to the embedded writer in column
/// format. Every instance is terminated by a blank line.
pub struct Writer<W> {
    write: W,
}

impl<W: io::Write> Writer<W> {
    /// Construct a new writer from an object that implements the
    /// `io::Write` trait.
    pub fn new(write: W) -> Writer<W> {
        Writer { write }
    }

    /// Borrow the embedded writer. Getting the underlying writer is often
    /// useful when the writer writes to a memory object.
    pub fn get_ref(&self) -> &W {
        &self.write
    }

    /// Unwrap the embedded writer.
    pub fn into_inner(self) -> W {
        self.write
    }
}

impl<W: io::Write> WriteInstance for Writer<W> {
    fn write_instance(&mut self, instance: &Instance) -> Result<(), Error> {
        write!(self.write, "{}", ColumnInstance(instance))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::{BufRead, Cursor, Read};
    use std::str;

    use super::{ReadInstance, ReadRecord, Reader, Record, RecordReader, WriteInstance, Writer};
    use crate::error::{Error, ParseError};
    use crate::tests::{read_instances, TEST_INSTANCES};

    static BASIC: &str = "testdata/basic.columns";

    static DOUBLE_NEWLINE: &str = "testdata/double-newline.columns";

    static RECORDS: &str = "testdata/basic.5class.txt";

    fn read_file(filename: &str) -> Result<String, Error> {
        let mut f = File::open(filename)?;
        let mut contents = String::new();
        f.read_to_string(&mut contents)?;
        Ok(contents)
    }

    fn string_reader(s: &str) -> Box<dyn BufRead> {
        Box::new(Cursor::new(s.as_bytes().to_owned()))
    }

    #[test]
    fn record_reader() {
        let data = read_file(RECORDS).unwrap();
        let records: Vec<_> = RecordReader::new(string_reader(&data))
            .records()
            .map(Result::unwrap)
            .collect();

        assert_eq!(
            records,
            vec![
                Record::new("2", "The cats are running fast ."),
                Record::new("4", "A joyous , moving film ."),
                Record::new("0", "Dull ."),
            ]
        );
    }

    #[test]
    fn record_reader_splits_on_first_tab() {
        let mut reader = RecordReader::new(string_reader("1\tleft\tright\r\n"));
        assert_eq!(
            reader.read_record().unwrap(),
            Some(Record::new("1", "left\tright"))
        );
        assert_eq!(reader.read_record().unwrap(), None);
    }

    #[test]
    #[should_panic(expected = "MissingLabelSeparator { line: 2, value: \"\" }")]
    fn record_reader_rejects_empty_line() {
        let mut reader = RecordReader::new(string_reader("3\tok\n\n4\tfine\n"));
        assert_eq!(reader.read_record().unwrap(), Some(Record::new("3", "ok")));
        reader.read_record().unwrap();
    }

    #[test]
    fn record_reader_reports_line_of_missing_tab() {
        let mut reader = RecordReader::new(string_reader("1\tfine\n2\tgood\nno tab here\n"));
        assert!(reader.read_record().is_ok());
        assert!(reader.read_record().is_ok());

        match reader.read_record() {
            Err(Error::Parse(err)) => assert_eq!(
                err,
                ParseError::MissingLabelSeparator {
                    line: 3,
                    value: "no tab here".to_string()
                }
            ),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn reader() {
        assert_eq!(*TEST_INSTANCES, read_instances(BASIC));
    }

    #[test]
    fn reader_robust() {
        assert_eq!(*TEST_INSTANCES, read_instances(DOUBLE_NEWLINE));
    }

    #[test]
    #[should_panic(expected = "MissingHeader")]
    fn reader_rejects_token_without_header() {
        let mut reader = Reader::new(string_reader("1\tgood\tgood\tJJ\t3\n"));
        reader.read_instance().unwrap();
    }

    #[test]
    #[should_panic(expected = "MalformedHeader")]
    fn reader_rejects_other_comments() {
        let mut reader = Reader::new(string_reader("# sent_id = 1\n"));
        reader.read_instance().unwrap();
    }

    #[test]
    #[should_panic(expected = "ParseIntField")]
    fn reader_rejects_non_numeric_instance() {
        let mut reader = Reader::new(string_reader("# instance one\n"));
        reader.read_instance().unwrap();
    }

    #[test]
    #[should_panic(expected = "UnexpectedHeader")]
    fn reader_rejects_missing_separator() {
        let mut reader = Reader::new(string_reader(
            "# instance 1\n1\ta\ta\tDT\t0\n# instance 2\n",
        ));
        reader.read_instance().unwrap();
    }

    #[test]
    #[should_panic(expected = "InconsistentIndex")]
    fn reader_rejects_skipped_position() {
        let mut reader = Reader::new(string_reader("# instance 1\n2\ta\ta\tDT\t0\n"));
        reader.read_instance().unwrap();
    }

    #[test]
    #[should_panic(expected = "InconsistentLabel")]
    fn reader_rejects_mixed_labels() {
        let mut reader = Reader::new(string_reader(
            "# instance 1\n1\ta\ta\tDT\t0\n2\tb\tb\tNN\t1\n",
        ));
        reader.read_instance().unwrap();
    }

    #[test]
    #[should_panic(expected = "MissingField")]
    fn reader_rejects_short_line() {
        let mut reader = Reader::new(string_reader("# instance 1\n1\ta\ta\tDT\n"));
        reader.read_instance().unwrap();
    }

    #[test]
    fn writer() {
        let output = Vec::new();
        let mut writer = Writer::new(output);

        for instance in &*TEST_INSTANCES {
            writer.write_instance(instance).unwrap();
        }

        assert_eq!(
            read_file(BASIC).unwrap(),
            str::from_utf8(writer.get_ref()).unwrap()
        );
    }
}
