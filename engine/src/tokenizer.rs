//! Text to token sequence.
//!
//! Words are matched against the contraction table first; a word that is not a
//! contraction is spelled out one character at a time. Every word, the last one
//! included, is followed by a single space token.

use std::fmt;

use crate::lexicon::{self, ContractionWord};

/// One cell's worth of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A single character of a spelled-out word, or the word separator.
    Letter(char),
    /// A whole word replaced by its contraction cell.
    Contraction(ContractionWord),
}

impl Token {
    pub const SPACE: Token = Token::Letter(' ');

    #[must_use]
    pub fn is_separator(&self) -> bool {
        *self == Self::SPACE
    }

    #[must_use]
    pub fn contraction(&self) -> Option<ContractionWord> {
        match self {
            Token::Contraction(word) => Some(*word),
            Token::Letter(_) => None,
        }
    }

    /// Human-readable label for status lines. The separator reads as `space`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Token::Letter(' ') => "space".to_string(),
            Token::Letter(c) => c.to_string(),
            Token::Contraction(word) => word.as_str().to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Letter(c) => write!(f, "{c}"),
            Token::Contraction(word) => write!(f, "{word}"),
        }
    }
}

/// Tokens of one input string in reading order.
///
/// Built once by [`tokenize`] and never edited afterwards; new text produces a
/// new sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptionSequence {
    source: String,
    tokens: Vec<Token>,
}

impl TranscriptionSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The normalized text the sequence was built from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).copied()
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Number of words (each word ends with exactly one separator).
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_separator()).count()
    }
}

impl<'a> IntoIterator for &'a TranscriptionSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Lowercase, trim, and collapse whitespace runs into single spaces.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert text into its cell sequence.
///
/// Any whitespace separates words; empty runs are skipped. Input with no words
/// yields an empty sequence (no separator).
#[must_use]
pub fn tokenize(text: &str) -> TranscriptionSequence {
    let source = normalize(text);
    let mut sequence = TranscriptionSequence {
        source: String::new(),
        tokens: Vec::with_capacity(source.len() + 1),
    };

    for word in source.split(' ').filter(|w| !w.is_empty()) {
        if let Some(contraction) = lexicon::contraction(word) {
            sequence.push(Token::Contraction(contraction));
        } else {
            for c in word.chars() {
                sequence.push(Token::Letter(c));
            }
        }
        sequence.push(Token::SPACE);
    }

    sequence.source = source;
    sequence
}
