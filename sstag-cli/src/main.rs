//! Tag the train, dev, and test splits of a sentiment dataset.
//!
//! Usage:
//!   sstag [DIR]
//!
//! Reads `train.5class.txt`, `dev.5class.txt`, and `test.5class.txt`
//! from `DIR` (default: the current directory) and writes the tagged
//! splits to `train`, `dev`, and `test`.

use std::process;

use clap::{Arg, Command};
use log::error;
use sstag::pipeline::process_splits;
use sstag_english::english_annotator;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("sstag")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tag labeled sentences with positions, lemmas, and part-of-speech tags")
        .arg(
            Arg::new("dir")
                .help("Directory with the <split>.5class.txt files")
                .default_value(".")
                .index(1),
        )
        .get_matches();

    let dir = matches
        .get_one::<String>("dir")
        .expect("dir has a default value");

    let annotator = english_annotator();

    if let Err(err) = process_splits(dir, &annotator) {
        error!("{}", err);
        process::exit(1);
    }
}
