//! Token to dot pattern.

use braille_types::DotPattern;

use crate::lexicon;
use crate::tokenizer::Token;

/// Resolve a token to the pattern of its cell. Never fails.
///
/// A contraction that is missing from the lexicon can only come from a
/// tokenizer defect; it is logged and rendered blank.
#[must_use]
pub fn resolve(token: Token) -> DotPattern {
    match token {
        Token::Letter(c) => lexicon::letter_pattern(c),
        Token::Contraction(word) => lexicon::contraction_pattern(word.as_str()).unwrap_or_else(|| {
            tracing::warn!(word = %word, "contraction token is not in the lexicon");
            DotPattern::EMPTY
        }),
    }
}

#[cfg(test)]
mod tests {
    use braille_types::DotPattern;

    use super::resolve;
    use crate::lexicon::{self, ContractionWord};
    use crate::tokenizer::Token;

    #[test]
    fn letters_resolve_through_letter_table() {
        assert_eq!(resolve(Token::Letter('a')), DotPattern::from_dots(&[1]));
        assert_eq!(resolve(Token::Letter('t')), DotPattern::from_dots(&[2, 3, 4, 5]));
    }

    #[test]
    fn separator_and_unmapped_are_blank() {
        assert!(resolve(Token::SPACE).is_empty());
        assert!(resolve(Token::Letter('7')).is_empty());
        assert!(resolve(Token::Letter('.')).is_empty());
    }

    #[test]
    fn contractions_resolve_through_word_table() {
        let the = lexicon::contraction("the").unwrap();
        assert_eq!(
            resolve(Token::Contraction(the)),
            DotPattern::from_dots(&[2, 3, 4, 6])
        );
    }

    #[test]
    fn unknown_contraction_is_blank_not_fatal() {
        let bogus = ContractionWord::unchecked("zzz");
        assert!(resolve(Token::Contraction(bogus)).is_empty());
    }
}
