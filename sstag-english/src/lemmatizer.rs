//! WordNet Morphy-style lemmatization.

use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use std::iter;

use log::debug;
use sstag::{Lemmatize, WordClass};

use crate::error::LexiconError;
use crate::lexicon::{parse_word_class, read_entries};

static EXCEPTIONS: &str = include_str!("../data/exceptions.txt");

static UNINFLECTED: &str = include_str!("../data/uninflected.txt");

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn detachment_rules(class: WordClass) -> &'static [(&'static str, &'static str)] {
    match class {
        WordClass::Noun => NOUN_RULES,
        WordClass::Verb => VERB_RULES,
        WordClass::Adjective => ADJECTIVE_RULES,
        WordClass::Adverb => &[],
    }
}

/// Morphy lemmatizer.
///
/// Lemmatization follows the WordNet Morphy algorithm. Irregular forms
/// are looked up in an exception list per word class. Regular forms are
/// reduced by detaching inflectional suffixes.
///
/// Morphy validates the candidate base forms against a dictionary. When
/// a base form lexicon is provided through `with_lexicon`, the shortest
/// candidate in the lexicon is the lemma. Without lexicon, the lemma is
/// guessed from spelling: doubled consonants are undoubled (*running*
/// → *run*) and a final *e* is restored after some stems (*making* →
/// *make*). Words in the uninflected list are never reduced.
///
/// Lookups are case-sensitive: words that are not entirely lower-case
/// are only lemmatized through the exception lists.
#[derive(Clone, Debug)]
pub struct MorphyLemmatizer {
    exceptions: HashMap<WordClass, HashMap<String, String>>,
    uninflected: HashSet<String>,
    lexicon: Option<HashMap<WordClass, HashSet<String>>>,
}

impl MorphyLemmatizer {
    /// Construct a lemmatizer from exception and uninflected word lists.
    ///
    /// Exceptions are lines of the form `<class><TAB><form><TAB><lemma>`,
    /// where the class is a one-letter WordNet code (`a`, `v`, `n`, `r`).
    /// The uninflected list has one word per line.
    pub fn new<E, U>(exceptions: E, uninflected: U) -> Result<Self, LexiconError>
    where
        E: BufRead,
        U: BufRead,
    {
        let mut exception_map: HashMap<WordClass, HashMap<String, String>> = HashMap::new();
        for (line, mut entry) in read_entries(exceptions, 3)? {
            let lemma = entry.pop().unwrap_or_default();
            let form = entry.pop().unwrap_or_default();
            let class = parse_word_class(line, &entry[0])?;
            exception_map.entry(class).or_default().insert(form, lemma);
        }

        let uninflected = read_entries(uninflected, 1)?
            .into_iter()
            .flat_map(|(_, entry)| entry)
            .collect();

        Ok(MorphyLemmatizer {
            exceptions: exception_map,
            uninflected,
            lexicon: None,
        })
    }

    /// Construct a lemmatizer with the built-in English word lists.
    pub fn english() -> Self {
        Self::new(EXCEPTIONS.as_bytes(), UNINFLECTED.as_bytes())
            .expect("Built-in lemmatizer word lists are malformed")
    }

    /// Validate lemmas against a lexicon of base forms.
    ///
    /// The lexicon has lines of the form `<class><TAB><lemma>`.
    pub fn with_lexicon<R>(mut self, read: R) -> Result<Self, LexiconError>
    where
        R: BufRead,
    {
        let mut lexicon: HashMap<WordClass, HashSet<String>> = HashMap::new();
        for (line, mut entry) in read_entries(read, 2)? {
            let lemma = entry.pop().unwrap_or_default();
            let class = parse_word_class(line, &entry[0])?;
            lexicon.entry(class).or_default().insert(lemma);
        }

        debug!(
            "Read lemma lexicon with {} entries",
            lexicon.values().map(HashSet::len).sum::<usize>()
        );
        self.lexicon = Some(lexicon);

        Ok(self)
    }

    /// Lemmatize a word of the given word class.
    pub fn lemmatize_class(&self, word: &str, class: WordClass) -> String {
        if let Some(lemma) = self.exceptions.get(&class).and_then(|e| e.get(word)) {
            return lemma.clone();
        }

        match &self.lexicon {
            Some(lexicon) => self.validated(word, class, lexicon),
            None => self.guess(word, class),
        }
    }

    fn validated(
        &self,
        word: &str,
        class: WordClass,
        lexicon: &HashMap<WordClass, HashSet<String>>,
    ) -> String {
        let known = match lexicon.get(&class) {
            Some(known) => known,
            None => return word.to_owned(),
        };

        iter::once(word.to_owned())
            .chain(
                detachment_rules(class)
                    .iter()
                    .filter_map(|(suffix, ending)| {
                        word.strip_suffix(suffix)
                            .map(|stem| format!("{}{}", stem, ending))
                    }),
            )
            .chain(iter::once(self.guess(word, class)))
            .filter(|form| known.contains(form))
            .min_by_key(String::len)
            .unwrap_or_else(|| word.to_owned())
    }

    fn guess(&self, word: &str, class: WordClass) -> String {
        if !is_inflectable(word) || self.uninflected.contains(word) {
            return word.to_owned();
        }

        let lemma = match class {
            WordClass::Noun => guess_noun(word),
            WordClass::Verb => guess_verb(word),
            WordClass::Adjective => guess_adjective(word),
            WordClass::Adverb => None,
        };

        lemma.unwrap_or_else(|| word.to_owned())
    }
}

impl Default for MorphyLemmatizer {
    fn default() -> Self {
        MorphyLemmatizer::english()
    }
}

impl Lemmatize for MorphyLemmatizer {
    /// Lemmatize a word, using the noun rules when no word class is given.
    fn lemmatize(&self, word: &str, class: Option<WordClass>) -> String {
        self.lemmatize_class(word, class.unwrap_or(WordClass::Noun))
    }
}

fn is_inflectable(word: &str) -> bool {
    word.len() > 2
        && word
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '-' || c == '\'')
}

fn is_vowel(c: u8) -> bool {
    b"aeiou".contains(&c)
}

fn has_vowel(stem: &str) -> bool {
    stem.bytes().any(is_vowel)
}

fn vowel_groups(stem: &str) -> usize {
    let bytes = stem.as_bytes();
    (0..bytes.len())
        .filter(|&i| is_vowel(bytes[i]) && (i == 0 || !is_vowel(bytes[i - 1])))
        .count()
}

fn ends_with_s_sound(word: &str) -> bool {
    ["ss", "us", "is"].iter().any(|suffix| word.ends_with(suffix))
}

fn guess_noun(word: &str) -> Option<String> {
    if ends_with_s_sound(word) {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return Some(format!("{}y", stem));
        }
    }

    if let Some(stem) = word.strip_suffix("es") {
        if ["ss", "ch", "sh", "x", "zz"]
            .iter()
            .any(|suffix| stem.ends_with(suffix))
        {
            return Some(stem.to_owned());
        }
    }

    word.strip_suffix('s')
        .filter(|stem| stem.len() >= 3 && has_vowel(stem))
        .map(str::to_owned)
}

fn guess_verb(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        if stem.len() >= 2 {
            return Some(format!("{}y", stem));
        }
    }

    if let Some(stem) = word.strip_suffix("ing") {
        return restore_stem(stem);
    }

    if let Some(stem) = word.strip_suffix("ed") {
        return restore_stem(stem);
    }

    if let Some(stem) = word.strip_suffix("es") {
        if ["ss", "ch", "sh", "x", "zz", "o"]
            .iter()
            .any(|suffix| stem.ends_with(suffix))
        {
            return Some(stem.to_owned());
        }
    }

    if ends_with_s_sound(word) {
        return None;
    }

    word.strip_suffix('s')
        .filter(|stem| stem.len() >= 2 && has_vowel(stem))
        .map(str::to_owned)
}

fn guess_adjective(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("iest").or_else(|| word.strip_suffix("ier")) {
        if stem.len() >= 2 {
            return Some(format!("{}y", stem));
        }
    }

    word.strip_suffix("est")
        .or_else(|| word.strip_suffix("er"))
        .filter(|stem| stem.len() >= 3)
        .and_then(restore_stem)
}

/// Restore the base form of a stem that lost its inflectional suffix.
fn restore_stem(stem: &str) -> Option<String> {
    if stem.len() < 2 || !has_vowel(stem) {
        return None;
    }

    let bytes = stem.as_bytes();
    let last = bytes[bytes.len() - 1];
    let penultimate = bytes[bytes.len() - 2];

    // Doubled final consonant: running -> run, stopped -> stop.
    if stem.len() >= 4 && last == penultimate && !is_vowel(last) && !b"lsz".contains(&last) {
        return Some(stem[..stem.len() - 1].to_owned());
    }

    if needs_final_e(stem) {
        Some(format!("{}e", stem))
    } else {
        Some(stem.to_owned())
    }
}

fn needs_final_e(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    let last = bytes[n - 1];
    let penultimate = bytes[n - 2];

    if b"vu".contains(&last)
        || (last == b'z' && penultimate != b'z')
        || (last == b'c' && penultimate != b'k')
        || stem.ends_with("dg")
    {
        return true;
    }

    // Single vowel followed by a consonant: making -> make, used -> use.
    !is_vowel(last)
        && !b"wxy".contains(&last)
        && is_vowel(penultimate)
        && (n == 2 || !is_vowel(bytes[n - 3]))
        && vowel_groups(stem) == 1
}
