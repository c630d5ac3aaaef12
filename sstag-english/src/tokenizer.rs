//! Penn Treebank-style tokenization.

use std::borrow::Cow;
use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use sstag::Tokenize;

lazy_static! {
    static ref STARTING_QUOTES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r#"^""#).unwrap(), "``"),
        (Regex::new(r"(``)").unwrap(), " ${1} "),
        (Regex::new(r#"([ (\[{<])("|'')"#).unwrap(), "${1} `` "),
    ];
    static ref PUNCTUATION: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"([:,])([^\d])").unwrap(), " ${1} ${2}"),
        (Regex::new(r"([:,])$").unwrap(), " ${1} "),
        (Regex::new(r"\.\.\.").unwrap(), " ... "),
        (Regex::new(r"[;@#$%&]").unwrap(), " ${0} "),
        (
            Regex::new(r#"([^.])(\.)([\])}>"']*)\s*$"#).unwrap(),
            "${1} ${2}${3} "
        ),
        (Regex::new(r"[?!]").unwrap(), " ${0} "),
        (Regex::new(r"([^'])' ").unwrap(), "${1} ' "),
    ];
    static ref PARENS_BRACKETS: Regex = Regex::new(r"[\]\[(){}<>]").unwrap();
    static ref DOUBLE_DASHES: Regex = Regex::new(r"--").unwrap();
    static ref ENDING_QUOTES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r#"""#).unwrap(), " '' "),
        (Regex::new(r"(\S)('')").unwrap(), "${1} ${2} "),
        (
            Regex::new(r"([^' ])('[sS]|'[mM]|'[dD]|') ").unwrap(),
            "${1} ${2} "
        ),
        (
            Regex::new(r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ").unwrap(),
            "${1} ${2} "
        ),
    ];
    static ref CONTRACTIONS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(can)(not)\b").unwrap(),
        Regex::new(r"(?i)\b(d)('ye)\b").unwrap(),
        Regex::new(r"(?i)\b(gim)(me)\b").unwrap(),
        Regex::new(r"(?i)\b(gon)(na)\b").unwrap(),
        Regex::new(r"(?i)\b(got)(ta)\b").unwrap(),
        Regex::new(r"(?i)\b(lem)(me)\b").unwrap(),
        Regex::new(r"(?i)\b(more)('n)\b").unwrap(),
        Regex::new(r"(?i)\b(wan)(na)\s").unwrap(),
        Regex::new(r"(?i) ('t)(is)\b").unwrap(),
        Regex::new(r"(?i) ('t)(was)\b").unwrap(),
    ];
    static ref SENTENCE_END: Regex = Regex::new(r#"[.!?]+["')\]]*\s+"#).unwrap();
    static ref ABBREVIATIONS: HashSet<&'static str> = [
        "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "e.g", "i.e", "inc",
        "ltd", "co", "corp", "mt", "vol", "fig", "jan", "feb", "mar", "apr", "jun",
        "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ]
    .iter()
    .copied()
    .collect();
}

/// Treebank tokenizer.
///
/// The text is first split into sentences. Each sentence is then
/// tokenized using the Penn Treebank conventions: punctuation is split
/// off, double quotes become ``` `` ``` and `''`, and clitics such as
/// `n't` and `'s` are separate tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    pub fn new() -> Self {
        TreebankTokenizer
    }

    /// Split text into sentences.
    ///
    /// A sentence ends at a run of `.`, `!`, or `?` (possibly followed
    /// by closing quotes or brackets) that is followed by whitespace and
    /// a capitalized word, digit, or opening quote. Periods after common
    /// abbreviations and single-letter initials do not end a sentence.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for m in SENTENCE_END.find_iter(text) {
            if !starts_sentence(&text[m.end()..]) {
                continue;
            }

            let terminator = &text[m.start()..m.end()];
            if terminator.starts_with('.')
                && !terminator.starts_with("..")
                && is_abbreviation(&text[start..m.start()], &text[m.end()..])
            {
                continue;
            }

            let sentence = text[start..m.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = m.end();
        }

        let rest = text[start..].trim();
        if !rest.is_empty() {
            sentences.push(rest);
        }

        sentences
    }

    /// Tokenize a single sentence.
    pub fn tokenize_sentence(&self, sentence: &str) -> Vec<String> {
        let mut text = sentence.to_owned();

        for (re, replacement) in STARTING_QUOTES.iter() {
            text = replace(re, &text, replacement);
        }

        for (re, replacement) in PUNCTUATION.iter() {
            text = replace(re, &text, replacement);
        }

        text = replace(&PARENS_BRACKETS, &text, " ${0} ");
        text = replace(&DOUBLE_DASHES, &text, " -- ");

        let mut text = format!(" {} ", text);

        for (re, replacement) in ENDING_QUOTES.iter() {
            text = replace(re, &text, replacement);
        }

        for re in CONTRACTIONS.iter() {
            text = replace(re, &text, " ${1} ${2} ");
        }

        text.split_whitespace().map(str::to_owned).collect()
    }
}

impl Tokenize for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.split_sentences(text)
            .into_iter()
            .flat_map(|sentence| self.tokenize_sentence(sentence))
            .collect()
    }
}

fn replace(re: &Regex, text: &str, replacement: &str) -> String {
    match re.replace_all(text, replacement) {
        Cow::Borrowed(_) => text.to_owned(),
        Cow::Owned(replaced) => replaced,
    }
}

fn starts_sentence(rest: &str) -> bool {
    match rest.chars().next() {
        Some(c) => c.is_uppercase() || c.is_ascii_digit() || "\"'`([".contains(c),
        None => false,
    }
}

/// Check whether the text ends in an abbreviation or an initial.
///
/// *No.* is only an abbreviation when a number follows.
fn is_abbreviation(before_period: &str, after_period: &str) -> bool {
    let word = before_period
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }

    let word = word.to_lowercase();
    if word == "no" {
        return after_period.starts_with(|c: char| c.is_ascii_digit());
    }

    ABBREVIATIONS.contains(word.as_str())
}
