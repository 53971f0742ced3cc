//! Static letter and whole-word contraction tables.
//!
//! Both tables are process-wide and immutable. Lookups are case-insensitive
//! exact matches; anything not listed is simply "not found".

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use braille_types::DotPattern;

const fn dots(numbers: &[u8]) -> DotPattern {
    DotPattern::from_dots(numbers)
}

/// Six-dot literary letters, indexed by `letter - 'a'`.
static LETTERS: [DotPattern; 26] = [
    dots(&[1]),             // a
    dots(&[1, 2]),          // b
    dots(&[1, 4]),          // c
    dots(&[1, 4, 5]),       // d
    dots(&[1, 5]),          // e
    dots(&[1, 2, 4]),       // f
    dots(&[1, 2, 4, 5]),    // g
    dots(&[1, 2, 5]),       // h
    dots(&[2, 4]),          // i
    dots(&[2, 4, 5]),       // j
    dots(&[1, 3]),          // k
    dots(&[1, 2, 3]),       // l
    dots(&[1, 3, 4]),       // m
    dots(&[1, 3, 4, 5]),    // n
    dots(&[1, 3, 5]),       // o
    dots(&[1, 2, 3, 4]),    // p
    dots(&[1, 2, 3, 4, 5]), // q
    dots(&[1, 2, 3, 5]),    // r
    dots(&[2, 3, 4]),       // s
    dots(&[2, 3, 4, 5]),    // t
    dots(&[1, 3, 6]),       // u
    dots(&[1, 2, 3, 6]),    // v
    dots(&[2, 4, 5, 6]),    // w
    dots(&[1, 3, 4, 6]),    // x
    dots(&[1, 3, 4, 5, 6]), // y
    dots(&[1, 3, 5, 6]),    // z
];

/// Whole-word signs. A small demonstration subset of Grade 2, not the full code.
static CONTRACTIONS: &[(&str, DotPattern)] = &[
    ("and", dots(&[1, 2, 3, 4, 6])),
    ("for", dots(&[1, 2, 3, 4, 5, 6])),
    ("of", dots(&[1, 2, 3, 5, 6])),
    ("the", dots(&[2, 3, 4, 6])),
    ("with", dots(&[2, 3, 4, 5, 6])),
    ("child", dots(&[1, 6])),
    ("shall", dots(&[1, 4, 6])),
    ("this", dots(&[1, 4, 5, 6])),
    ("which", dots(&[1, 5, 6])),
    ("out", dots(&[1, 2, 5, 6])),
    ("still", dots(&[3, 4])),
    // Alphabetic wordsigns share the cell of their letter.
    ("but", dots(&[1, 2])),
    ("can", dots(&[1, 4])),
    ("do", dots(&[1, 4, 5])),
    ("every", dots(&[1, 5])),
    ("from", dots(&[1, 2, 4])),
    ("go", dots(&[1, 2, 4, 5])),
    ("have", dots(&[1, 2, 5])),
    ("just", dots(&[2, 4, 5])),
    ("knowledge", dots(&[1, 3])),
    ("like", dots(&[1, 2, 3])),
    ("more", dots(&[1, 3, 4])),
    ("not", dots(&[1, 3, 4, 5])),
    ("people", dots(&[1, 2, 3, 4])),
    ("quite", dots(&[1, 2, 3, 4, 5])),
    ("rather", dots(&[1, 2, 3, 5])),
    ("so", dots(&[2, 3, 4])),
    ("that", dots(&[2, 3, 4, 5])),
    ("us", dots(&[1, 3, 6])),
    ("very", dots(&[1, 2, 3, 6])),
    ("will", dots(&[2, 4, 5, 6])),
    ("it", dots(&[1, 3, 4, 6])),
    ("you", dots(&[1, 3, 4, 5, 6])),
    ("as", dots(&[1, 3, 5, 6])),
];

static CONTRACTION_INDEX: LazyLock<HashMap<&'static str, DotPattern>> =
    LazyLock::new(|| CONTRACTIONS.iter().copied().collect());

/// A word that is known to be a key of the contraction table.
///
/// The only way to obtain one is a successful [`contraction`] lookup, so a
/// `ContractionWord` never names a partial or unknown word.
///
/// ```compile_fail
/// let forged = braille_engine::ContractionWord("zzz");
/// ```
///
/// ```
/// let word = braille_engine::lexicon::contraction("With").unwrap();
/// assert_eq!(word.as_str(), "with");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractionWord(&'static str);

impl ContractionWord {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }

    /// Bypass the lexicon. Only for exercising the resolver's miss path.
    #[cfg(test)]
    pub(crate) fn unchecked(word: &'static str) -> Self {
        Self(word)
    }
}

impl fmt::Display for ContractionWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Pattern for a single character. Unmapped characters yield the empty pattern.
#[must_use]
pub fn letter_pattern(c: char) -> DotPattern {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        LETTERS[usize::from(lower as u8 - b'a')]
    } else {
        // space and everything unmapped render as a blank cell
        DotPattern::EMPTY
    }
}

/// Whether `c` has a non-blank letter cell.
#[must_use]
pub fn is_mapped_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Look up a whole word in the contraction table.
#[must_use]
pub fn contraction(word: &str) -> Option<ContractionWord> {
    lookup(word).map(|(key, _)| ContractionWord(key))
}

/// Pattern of a whole-word contraction, if `word` is one.
#[must_use]
pub fn contraction_pattern(word: &str) -> Option<DotPattern> {
    lookup(word).map(|(_, pattern)| pattern)
}

/// Every contraction in table order.
pub fn contractions() -> impl Iterator<Item = (ContractionWord, DotPattern)> {
    CONTRACTIONS
        .iter()
        .map(|(word, pattern)| (ContractionWord(*word), *pattern))
}

fn lookup(word: &str) -> Option<(&'static str, DotPattern)> {
    let index = &*CONTRACTION_INDEX;
    if let Some((key, pattern)) = index.get_key_value(word) {
        return Some((*key, *pattern));
    }
    if word.chars().any(char::is_uppercase) {
        let lower = word.to_lowercase();
        return index
            .get_key_value(lower.as_str())
            .map(|(key, pattern)| (*key, *pattern));
    }
    None
}
