//! Per-split tagging pipeline.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::annotate::{Annotator, Lemmatize, PosTag, Tokenize};
use crate::error::{Error, SplitError};
use crate::io::{ReadRecord, RecordReader, WriteInstance, Writer};
use crate::split::Split;

/// Statistics of a tagging run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Number of written instances.
    pub instances: usize,

    /// Number of written tokens.
    pub tokens: usize,
}

/// Annotate all records of a reader and write them as instances.
///
/// Instances are numbered from 1 in reading order. Processing stops at
/// the first error; instances that were written before the error are
/// not retracted.
pub fn process_records<R, W, T, P, L>(
    reader: R,
    writer: &mut W,
    annotator: &Annotator<T, P, L>,
) -> Result<Summary, Error>
where
    R: ReadRecord,
    W: WriteInstance,
    T: Tokenize,
    P: PosTag,
    L: Lemmatize,
{
    let mut summary = Summary::default();

    for record in reader.records() {
        let record = record?;
        let instance = annotator.annotate(summary.instances + 1, &record)?;
        writer.write_instance(&instance)?;

        summary.instances += 1;
        summary.tokens += instance.len();
    }

    Ok(summary)
}

/// Tag one split of the dataset stored in `dir`.
///
/// Reads `<split>.5class.txt` and writes `<split>`. The input is opened
/// before the output is created, so a missing input leaves no output
/// behind.
pub fn process_split<T, P, L>(
    dir: impl AsRef<Path>,
    split: Split,
    annotator: &Annotator<T, P, L>,
) -> Result<Summary, Error>
where
    T: Tokenize,
    P: PosTag,
    L: Lemmatize,
{
    let input_path = split.input_path(&dir);
    let output_path = split.output_path(&dir);

    debug!("Reading {}", input_path.display());
    let input = File::open(&input_path).map_err(|source| Error::Open {
        path: input_path.clone(),
        source,
    })?;
    let reader = RecordReader::new(BufReader::new(input));

    debug!("Writing {}", output_path.display());
    let output = File::create(&output_path).map_err(|source| Error::Open {
        path: output_path.clone(),
        source,
    })?;
    let mut writer = Writer::new(BufWriter::new(output));

    let summary = process_records(reader, &mut writer, annotator)?;
    writer.into_inner().flush()?;

    info!(
        "{}: tagged {} instances, {} tokens",
        split, summary.instances, summary.tokens
    );

    Ok(summary)
}

/// Tag the train, dev, and test splits of the dataset stored in `dir`.
///
/// Splits are processed in order. The first failing split aborts the
/// run, later splits are not processed.
pub fn process_splits<T, P, L>(
    dir: impl AsRef<Path>,
    annotator: &Annotator<T, P, L>,
) -> Result<Vec<(Split, Summary)>, SplitError>
where
    T: Tokenize,
    P: PosTag,
    L: Lemmatize,
{
    let dir = dir.as_ref();

    Split::ALL
        .iter()
        .map(|&split| {
            process_split(dir, split, annotator)
                .map(|summary| (split, summary))
                .map_err(|source| SplitError { split, source })
        })
        .collect()
}
