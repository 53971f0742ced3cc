//! Text to cells, end to end through the public API.

use braille_engine::lexicon::{contraction_pattern, contractions, letter_pattern};
use braille_engine::{DotPattern, Token, resolve, tokenize};

fn patterns(text: &str) -> Vec<String> {
    tokenize(text)
        .iter()
        .map(|token| resolve(*token).to_string())
        .collect()
}

#[test]
fn the_cat_tokens() {
    let seq = tokenize("the cat");
    let labels: Vec<String> = seq.iter().map(Token::label).collect();
    assert_eq!(labels, ["the", "space", "c", "a", "t", "space"]);
    assert!(seq.get(0).and_then(|t| t.contraction()).is_some());
}

#[test]
fn the_cat_patterns() {
    assert_eq!(
        patterns("the cat"),
        ["2-3-4-6", "none", "1-4", "1", "2-3-4-5", "none"]
    );
}

#[test]
fn every_word_ends_with_a_space_cell() {
    let seq = tokenize("and for of");
    assert_eq!(seq.len(), 6);
    assert_eq!(seq.word_count(), 3);
    for index in [1, 3, 5] {
        assert_eq!(seq.get(index), Some(Token::SPACE));
    }
}

#[test]
fn mixed_case_sentence() {
    assert_eq!(
        patterns("With THIS child"),
        [
            "2-3-4-5-6",
            "none",
            "1-4-5-6",
            "none",
            "1-6",
            "none"
        ]
    );
}

#[test]
fn no_text_no_cells() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("\t \n").is_empty());
}

#[test]
fn unmapped_characters_are_blank_cells() {
    let seq = tokenize("a1");
    let cells: Vec<DotPattern> = seq.iter().map(|t| resolve(*t)).collect();
    assert_eq!(
        cells,
        [DotPattern::from_dots(&[1]), DotPattern::EMPTY, DotPattern::EMPTY]
    );
}

#[test]
fn every_contraction_resolves_to_its_table_entry() {
    for (word, pattern) in contractions() {
        let seq = tokenize(word.as_str());
        assert_eq!(seq.len(), 2, "{word} should be a single cell");
        assert_eq!(resolve(seq.tokens()[0]), pattern);
        assert_eq!(contraction_pattern(word.as_str()), Some(pattern));
    }
}

#[test]
fn spelled_words_use_letter_cells() {
    let seq = tokenize("zebra");
    for (token, c) in seq.iter().zip("zebra".chars()) {
        assert_eq!(resolve(*token), letter_pattern(c));
    }
}

#[test]
fn unicode_rendering_of_letters() {
    let rendered: String = tokenize("abc")
        .iter()
        .map(|t| resolve(*t).to_unicode())
        .collect();
    assert_eq!(rendered, "⠁⠃⠉⠀");
}
