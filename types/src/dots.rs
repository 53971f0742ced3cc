//! Dot numbers and six-dot cell patterns.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First codepoint of the Unicode Braille Patterns block (the blank cell).
const UNICODE_BRAILLE_BASE: u32 = 0x2800;

/// Bits 0..=5 are the only ones a pattern may carry.
const PATTERN_MASK: u8 = 0b0011_1111;

/// A raised-dot position inside a cell, numbered 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Dot(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dot number {0} is outside 1..=6")]
pub struct InvalidDot(pub u8);

impl Dot {
    /// Every dot, in numeric order.
    pub const ALL: [Dot; 6] = [Dot(1), Dot(2), Dot(3), Dot(4), Dot(5), Dot(6)];

    pub const fn new(number: u8) -> Result<Self, InvalidDot> {
        if number >= 1 && number <= 6 {
            Ok(Self(number))
        } else {
            Err(InvalidDot(number))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    const fn bit(self) -> u8 {
        1 << (self.0 - 1)
    }
}

impl TryFrom<u8> for Dot {
    type Error = InvalidDot;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Dot> for u8 {
    fn from(value: Dot) -> Self {
        value.0
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of raised dots of one cell.
///
/// Stored as a bitset where bit `n - 1` stands for dot `n`. The empty pattern is
/// a valid value: it renders as a blank cell (space or unmapped character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DotPattern(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pattern bits {0:#010b} reference dots outside 1..=6")]
pub struct InvalidPattern(pub u8);

impl DotPattern {
    pub const EMPTY: Self = Self(0);

    /// Build a pattern from literal dot numbers.
    ///
    /// Intended for static tables: an out-of-range number fails const evaluation.
    #[must_use]
    pub const fn from_dots(dots: &[u8]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < dots.len() {
            let n = dots[i];
            assert!(n >= 1 && n <= 6, "dot numbers must be within 1..=6");
            bits |= 1 << (n - 1);
            i += 1;
        }
        Self(bits)
    }

    pub const fn from_bits(bits: u8) -> Result<Self, InvalidPattern> {
        if bits & !PATTERN_MASK == 0 {
            Ok(Self(bits))
        } else {
            Err(InvalidPattern(bits))
        }
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn contains(self, dot: Dot) -> bool {
        self.0 & dot.bit() != 0
    }

    /// Add a dot. Returns `true` if it was not already present.
    pub fn insert(&mut self, dot: Dot) -> bool {
        let fresh = !self.contains(dot);
        self.0 |= dot.bit();
        fresh
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Iterate raised dots in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Dot> {
        Dot::ALL.into_iter().filter(move |dot| self.contains(*dot))
    }

    /// The matching character from the Unicode Braille Patterns block.
    ///
    /// Unicode assigns bit `n - 1` to dot `n`, the same layout as this bitset.
    #[must_use]
    pub fn to_unicode(self) -> char {
        char::from_u32(UNICODE_BRAILLE_BASE + u32::from(self.0)).unwrap_or('\u{2800}')
    }
}

impl TryFrom<u8> for DotPattern {
    type Error = InvalidPattern;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_bits(value)
    }
}

impl From<DotPattern> for u8 {
    fn from(value: DotPattern) -> Self {
        value.0
    }
}

impl FromIterator<Dot> for DotPattern {
    fn from_iter<I: IntoIterator<Item = Dot>>(iter: I) -> Self {
        let mut pattern = Self::EMPTY;
        for dot in iter {
            pattern.insert(dot);
        }
        pattern
    }
}

impl fmt::Display for DotPattern {
    /// Dot numbers joined with `-` (`1-4-5`), or `none` for a blank cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, dot) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{dot}")?;
        }
        Ok(())
    }
}
