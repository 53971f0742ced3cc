//! Cursor over a transcription sequence.

use braille_types::DotPattern;

use crate::resolver::resolve;
use crate::tokenizer::{Token, TranscriptionSequence};

/// The cell under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub token: Token,
    pub pattern: DotPattern,
}

impl Cell {
    /// Shown when there is no text: a blank space cell.
    pub const PLACEHOLDER: Cell = Cell {
        token: Token::SPACE,
        pattern: DotPattern::EMPTY,
    };
}

/// Outcome of a `previous`/`next` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Moved(DotPattern),
    /// Already at the boundary; nothing changed.
    Stayed(DotPattern),
}

impl Movement {
    #[must_use]
    pub fn pattern(self) -> DotPattern {
        match self {
            Movement::Moved(pattern) | Movement::Stayed(pattern) => pattern,
        }
    }

    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, Movement::Moved(_))
    }
}

/// Holds the installed sequence and a clamped cursor into it.
///
/// The cursor is `0` for an empty sequence and otherwise always in
/// `0..sequence.len()`. It never wraps.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    sequence: TranscriptionSequence,
    cursor: usize,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sequence and rewind to the first cell.
    pub fn install(&mut self, sequence: TranscriptionSequence) -> DotPattern {
        self.sequence = sequence;
        self.cursor = 0;
        self.current().pattern
    }

    pub fn previous(&mut self) -> Movement {
        if self.cursor > 0 {
            self.cursor -= 1;
            Movement::Moved(self.current().pattern)
        } else {
            Movement::Stayed(self.current().pattern)
        }
    }

    pub fn next(&mut self) -> Movement {
        if self.cursor + 1 < self.sequence.len() {
            self.cursor += 1;
            Movement::Moved(self.current().pattern)
        } else {
            Movement::Stayed(self.current().pattern)
        }
    }

    #[must_use]
    pub fn current(&self) -> Cell {
        self.sequence
            .get(self.cursor)
            .map_or(Cell::PLACEHOLDER, |token| Cell {
                token,
                pattern: resolve(token),
            })
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// One-based cursor and sequence length, or `None` before any text is installed.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.is_empty()).then(|| (self.cursor + 1, self.len()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[must_use]
    pub fn sequence(&self) -> &TranscriptionSequence {
        &self.sequence
    }
}

#[cfg(test)]
mod tests {
    use braille_types::DotPattern;

    use super::{Cell, Movement, Navigator};
    use crate::tokenizer::{Token, tokenize};

    fn installed(text: &str) -> Navigator {
        let mut nav = Navigator::new();
        nav.install(tokenize(text));
        nav
    }

    #[test]
    fn empty_navigator_shows_placeholder() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), Cell::PLACEHOLDER);
        assert_eq!(nav.previous(), Movement::Stayed(DotPattern::EMPTY));
        assert_eq!(nav.next(), Movement::Stayed(DotPattern::EMPTY));
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn install_rewinds_cursor() {
        let mut nav = installed("ab");
        nav.next();
        assert_eq!(nav.cursor(), 1);
        let pattern = nav.install(tokenize("cd"));
        assert_eq!(nav.cursor(), 0);
        assert_eq!(pattern, DotPattern::from_dots(&[1, 4]));
    }

    #[test]
    fn previous_at_start_stays() {
        let mut nav = installed("ab");
        let a = DotPattern::from_dots(&[1]);
        assert_eq!(nav.previous(), Movement::Stayed(a));
        assert_eq!(nav.previous(), Movement::Stayed(a));
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn next_clamps_at_end() {
        // a, b, space
        let mut nav = installed("ab");
        assert!(nav.next().moved());
        assert!(nav.next().moved());
        assert_eq!(nav.cursor(), 2);
        assert_eq!(nav.next(), Movement::Stayed(DotPattern::EMPTY));
        assert_eq!(nav.next(), Movement::Stayed(DotPattern::EMPTY));
        assert_eq!(nav.cursor(), 2);
        assert_eq!(nav.current().token, Token::SPACE);
    }

    #[test]
    fn position_is_one_based() {
        let mut nav = Navigator::new();
        assert_eq!(nav.position(), None);
        nav.install(tokenize("so"));
        assert_eq!(nav.position(), Some((1, 2)));
        nav.next();
        assert_eq!(nav.position(), Some((2, 2)));
    }

    #[test]
    fn movement_reports_new_pattern() {
        let mut nav = installed("ab");
        assert_eq!(nav.next(), Movement::Moved(DotPattern::from_dots(&[1, 2])));
        assert_eq!(nav.previous(), Movement::Moved(DotPattern::from_dots(&[1])));
    }

    #[test]
    fn cursor_stays_in_bounds_under_any_walk() {
        let mut nav = installed("the quick fox");
        let steps = [true, true, false, true, true, true, true, true, true, true, true, true];
        for _ in 0..5 {
            for forward in steps {
                if forward {
                    nav.next();
                } else {
                    nav.previous();
                }
                assert!(nav.cursor() < nav.len());
            }
        }
        for _ in 0..50 {
            nav.previous();
            assert!(nav.cursor() < nav.len());
        }
        assert_eq!(nav.cursor(), 0);
    }
}
