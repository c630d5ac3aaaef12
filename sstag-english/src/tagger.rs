//! Lexicon and rule-based part-of-speech tagging.

use std::collections::{HashMap, HashSet};
use std::io::BufRead;

use itertools::Itertools;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use sstag::PosTag;

use crate::error::LexiconError;
use crate::lexicon::read_entries;

static LEXICON: &str = include_str!("../data/lexicon.txt");

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"^[-+]?[0-9][0-9.,:/]*$").unwrap();
    static ref AUXILIARIES: HashSet<&'static str> = [
        "am", "is", "are", "was", "were", "be", "been", "being", "'s", "'re", "'m", "has",
        "have", "had", "having", "'ve",
    ]
    .iter()
    .copied()
    .collect();
    static ref COPULAS: HashSet<&'static str> = [
        "am", "is", "are", "was", "were", "be", "been", "being", "'s", "'re", "'m", "seem",
        "seems", "seemed", "become", "becomes", "became", "look", "looks", "looked", "feel",
        "feels", "felt", "sound", "sounds", "sounded", "remain", "remains", "remained",
    ]
    .iter()
    .copied()
    .collect();
    static ref ADVERBIAL: HashSet<&'static str> = [
        "fast", "hard", "late", "early", "long", "high", "low", "straight", "right", "wrong",
        "loud", "deep", "far", "close", "slow", "quick", "short",
    ]
    .iter()
    .copied()
    .collect();
}

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they"];

const THIRD_PERSON: &[&str] = &["he", "she", "it", "that", "which", "who"];

const CLITIC_HOSTS: &[&str] = &["that", "this", "here", "there", "what", "who"];

/// Suffix heuristics for unknown words: suffix, tag, and minimum word
/// length. The first matching suffix wins.
const SUFFIX_TAGS: &[(&str, &str, usize)] = &[
    ("ness", "NN", 6),
    ("ment", "NN", 6),
    ("tion", "NN", 6),
    ("sion", "NN", 6),
    ("ance", "NN", 6),
    ("ence", "NN", 6),
    ("ship", "NN", 6),
    ("hood", "NN", 6),
    ("ity", "NN", 5),
    ("ism", "NN", 5),
    ("ing", "VBG", 5),
    ("ed", "VBD", 4),
    ("ly", "RB", 4),
    ("ous", "JJ", 5),
    ("ful", "JJ", 5),
    ("ive", "JJ", 5),
    ("able", "JJ", 6),
    ("ible", "JJ", 6),
    ("less", "JJ", 6),
    ("ical", "JJ", 6),
    ("ish", "JJ", 5),
    ("ic", "JJ", 5),
    ("al", "JJ", 5),
    ("est", "JJS", 6),
];

/// Part-of-speech tagger using a lexicon and contextual rules.
///
/// Tagging is done in two passes. First, every word receives an initial
/// Penn Treebank tag: from the lexicon (first the word itself, then its
/// lower-cased form), as a number, as a proper noun when capitalized
/// within a sentence, or from its suffix. Then contextual rules correct
/// tags from left to right, e.g. *love* is a noun after a determiner
/// and a past participle after a form of *be* or *have*.
#[derive(Clone, Debug)]
pub struct LexiconTagger {
    lexicon: HashMap<String, String>,
}

impl LexiconTagger {
    /// Construct a tagger from a lexicon.
    ///
    /// The lexicon has one `<word><TAB><tag>` entry per line.
    pub fn from_reader<R>(read: R) -> Result<Self, LexiconError>
    where
        R: BufRead,
    {
        let lexicon: HashMap<String, String> = read_entries(read, 2)?
            .into_iter()
            .filter_map(|(_, entry)| entry.into_iter().collect_tuple())
            .collect();
        debug!("Read tagger lexicon with {} entries", lexicon.len());

        Ok(LexiconTagger { lexicon })
    }

    /// Construct a tagger with the built-in English lexicon.
    pub fn english() -> Self {
        Self::from_reader(LEXICON.as_bytes()).expect("Built-in tagger lexicon is malformed")
    }

    /// Get the number of lexicon entries.
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Tag a sequence of words.
    ///
    /// Returns one tag per word.
    pub fn tag_words(&self, words: &[String]) -> Vec<String> {
        let mut tags: Vec<String> = Vec::with_capacity(words.len());
        for word in words {
            let sentence_initial = tags
                .last()
                .map(|tag| [".", "``", ":"].contains(&tag.as_str()))
                .unwrap_or(true);
            tags.push(self.initial_tag(word, sentence_initial));
        }

        for idx in 1..words.len() {
            let prev = (words[idx - 1].as_str(), tags[idx - 1].as_str());
            let prev2 = idx
                .checked_sub(2)
                .map(|i| (words[i].as_str(), tags[i].as_str()));

            if let Some(tag) = contextual_tag(prev2, prev, &words[idx], &tags[idx]) {
                tags[idx] = tag.to_owned();
            }
        }

        tags
    }

    fn initial_tag(&self, word: &str, sentence_initial: bool) -> String {
        if let Some(tag) = self.lexicon.get(word) {
            return tag.clone();
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(&lower) {
            return tag.clone();
        }

        if NUMBER.is_match(word) {
            return "CD".to_owned();
        }

        if !word.chars().any(char::is_alphanumeric) {
            return "SYM".to_owned();
        }

        if !sentence_initial && word.chars().next().map_or(false, char::is_uppercase) {
            return "NNP".to_owned();
        }

        suffix_tag(&lower).to_owned()
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        LexiconTagger::english()
    }
}

impl PosTag for LexiconTagger {
    fn tag(&self, words: &[String]) -> Vec<(String, String)> {
        words
            .iter()
            .cloned()
            .zip_eq(self.tag_words(words))
            .collect()
    }
}

fn suffix_tag(word: &str) -> &'static str {
    if word.contains('-') && word.chars().any(char::is_alphabetic) {
        return "JJ";
    }

    for &(suffix, tag, min_len) in SUFFIX_TAGS {
        if word.len() >= min_len && word.ends_with(suffix) {
            return tag;
        }
    }

    if word.len() >= 4 && word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s))
    {
        return "NNS";
    }

    "NN"
}

/// Get the corrected tag of a word given the preceding words.
fn contextual_tag(
    prev2: Option<(&str, &str)>,
    prev: (&str, &str),
    word: &str,
    tag: &str,
) -> Option<&'static str> {
    let (prev_word, prev_tag) = prev;
    let prev_word = prev_word.to_lowercase();
    let prev_word = prev_word.as_str();

    match tag {
        // the love, a look
        "VB" | "VBP" if ["DT", "PRP$", "JJ", "POS"].contains(&prev_tag) => Some("NN"),
        "VBP" if ["TO", "MD"].contains(&prev_tag) => Some("VB"),
        "NN" if prev_tag == "MD" => Some("VB"),
        "VB" if SUBJECT_PRONOUNS.contains(&prev_word) || ["NNS", "NNPS"].contains(&prev_tag) => {
            Some("VBP")
        }
        // was made, has not finished
        "VBD"
            if AUXILIARIES.contains(prev_word)
                || (prev_tag == "RB"
                    && prev2.map_or(false, |(w, _)| {
                        AUXILIARIES.contains(w.to_lowercase().as_str())
                    })) =>
        {
            Some("VBN")
        }
        "NNS" if THIRD_PERSON.contains(&prev_word) => Some("VBZ"),
        // running fast, but: is fast
        "JJ" if prev_tag.starts_with("VB")
            && ADVERBIAL.contains(word.to_lowercase().as_str())
            && !COPULAS.contains(prev_word) =>
        {
            Some("RB")
        }
        "POS"
            if ["PRP", "EX", "WP", "WDT"].contains(&prev_tag)
                || CLITIC_HOSTS.contains(&prev_word) =>
        {
            Some("VBZ")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use sstag::PosTag;

    use super::LexiconTagger;

    fn tags(sentence: &str) -> Vec<String> {
        let words: Vec<String> = sentence.split(' ').map(str::to_owned).collect();
        LexiconTagger::english().tag_words(&words)
    }

    #[test]
    fn tags_example_sentence() {
        assert_eq!(
            tags("The cats are running fast ."),
            vec!["DT", "NNS", "VBP", "VBG", "RB", "."]
        );
    }

    #[test]
    fn adjective_after_copula_is_kept() {
        assert_eq!(tags("The movie is fast"), vec!["DT", "NN", "VBZ", "JJ"]);
    }

    #[test]
    fn present_tense_after_subject() {
        assert_eq!(tags("I love this movie"), vec!["PRP", "VBP", "DT", "NN"]);
        assert_eq!(
            tags("He wants to love it"),
            vec!["PRP", "VBZ", "TO", "VB", "PRP"]
        );
    }

    #[test]
    fn verb_after_determiner_is_noun() {
        assert_eq!(tags("a love story"), vec!["DT", "NN", "NN"]);
    }

    #[test]
    fn past_participle_after_auxiliary() {
        assert_eq!(
            tags("The film was made by Smith ."),
            vec!["DT", "NN", "VBD", "VBN", "IN", "NNP", "."]
        );
        assert_eq!(
            tags("it has never worked"),
            vec!["PRP", "VBZ", "RB", "VBN"]
        );
    }

    #[test]
    fn clitic_s() {
        assert_eq!(
            tags("It 's a joyous , unpredictable ride"),
            vec!["PRP", "VBZ", "DT", "JJ", ",", "JJ", "NN"]
        );
        assert_eq!(tags("the director 's cut"), vec!["DT", "NN", "POS", "NN"]);
    }

    #[test]
    fn unknown_words() {
        assert_eq!(
            tags("Spielberg delivers 3 thrilling , well-crafted episodes"),
            vec!["NN", "NNS", "CD", "VBG", ",", "JJ", "NNS"]
        );
        assert_eq!(tags("Loved it"), vec!["VBD", "PRP"]);
        assert_eq!(tags("* sadly"), vec!["SYM", "RB"]);
    }

    #[test]
    fn tag_returns_pairs() {
        let words = vec!["Dull".to_owned(), ".".to_owned()];
        assert_eq!(
            LexiconTagger::english().tag(&words),
            vec![
                ("Dull".to_owned(), "JJ".to_owned()),
                (".".to_owned(), ".".to_owned())
            ]
        );
    }

    #[test]
    fn custom_lexicon() {
        let tagger = LexiconTagger::from_reader("flick\tNN\nrad\tJJ\n".as_bytes()).unwrap();
        assert_eq!(tagger.lexicon_len(), 2);

        let words: Vec<String> = vec!["rad".into(), "flick".into(), "the".into()];
        assert_eq!(tagger.tag_words(&words), vec!["JJ", "NN", "NN"]);
    }

    #[test]
    fn builtin_lexicon_loads() {
        assert!(LexiconTagger::english().lexicon_len() > 300);
    }

    #[test]
    fn empty_input() {
        assert!(LexiconTagger::english().tag(&[]).is_empty());
    }
}
