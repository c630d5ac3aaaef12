use std::fmt;

/// Coarse word class, as used by WordNet.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum WordClass {
    Adjective,
    Verb,
    Noun,
    Adverb,
}

impl WordClass {
    /// Get the one-letter WordNet code of the word class.
    pub fn code(self) -> char {
        match self {
            WordClass::Adjective => 'a',
            WordClass::Verb => 'v',
            WordClass::Noun => 'n',
            WordClass::Adverb => 'r',
        }
    }

    /// Get the word class of a one-letter WordNet code.
    pub fn from_code(code: char) -> Option<WordClass> {
        match code {
            'a' => Some(WordClass::Adjective),
            'v' => Some(WordClass::Verb),
            'n' => Some(WordClass::Noun),
            'r' => Some(WordClass::Adverb),
            _ => None,
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Map a Penn Treebank tag to its coarse word class.
///
/// Tags starting with `J`, `V`, `N`, and `R` are adjectives, verbs,
/// nouns, and adverbs respectively. All other tags, including the empty
/// tag, have no word class.
pub fn word_class(tag: &str) -> Option<WordClass> {
    match tag.chars().next() {
        Some('J') => Some(WordClass::Adjective),
        Some('V') => Some(WordClass::Verb),
        Some('N') => Some(WordClass::Noun),
        Some('R') => Some(WordClass::Adverb),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashmap;

    use super::{word_class, WordClass};

    #[test]
    fn treebank_tags_map_to_word_classes() {
        let check = hashmap! {
            "JJ" => Some(WordClass::Adjective),
            "JJR" => Some(WordClass::Adjective),
            "JJS" => Some(WordClass::Adjective),
            "VB" => Some(WordClass::Verb),
            "VBG" => Some(WordClass::Verb),
            "VBZ" => Some(WordClass::Verb),
            "NN" => Some(WordClass::Noun),
            "NNPS" => Some(WordClass::Noun),
            "RB" => Some(WordClass::Adverb),
            "RBR" => Some(WordClass::Adverb),
            "RP" => Some(WordClass::Adverb),
            "DT" => None,
            "IN" => None,
            "PRP" => None,
            "WRB" => None,
            "." => None,
            "-LRB-" => None,
            "" => None,
        };

        for (tag, class) in check {
            assert_eq!(word_class(tag), class, "tag: {}", tag);
        }
    }

    #[test]
    fn only_first_character_is_significant() {
        assert_eq!(word_class("Nonsense"), Some(WordClass::Noun));
        assert_eq!(word_class("nn"), None);
        assert_eq!(word_class("Vanilla"), Some(WordClass::Verb));
    }

    #[test]
    fn word_class_codes() {
        let codes: String = [
            WordClass::Adjective,
            WordClass::Verb,
            WordClass::Noun,
            WordClass::Adverb,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(codes, "avnr");

        for c in codes.chars() {
            assert_eq!(WordClass::from_code(c).map(WordClass::code), Some(c));
        }

        assert_eq!(WordClass::from_code('s'), None);
    }
}
