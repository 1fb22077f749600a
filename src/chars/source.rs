//! String ↔ character stream conversion
//!
//! [`CharSource`] lazily turns a string into `Char`s, pairing each base
//! character with a following variation selector and ending with exactly one
//! sentinel. [`join`] turns a stream back into a string.

use super::codepoint::{is_variation_selector, CodePointTuple};
use super::unit::Char;
use std::iter::Peekable;
use std::str::Chars;

/// Lazy iterator over the characters of a string
///
/// # Example
///
/// ```
/// use jptrans_core::chars::CharSource;
///
/// let chars: Vec<_> = CharSource::new("葛\u{E0100}城").collect();
///
/// assert_eq!(chars.len(), 3);
/// assert_eq!(chars[0].atom().len(), 2);
/// assert_eq!(chars[1].offset(), 7);
/// assert!(chars[2].is_sentinel());
/// assert_eq!(chars[2].offset(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct CharSource<'a> {
    input: Peekable<Chars<'a>>,
    offset: usize,
    finished: bool,
}

impl<'a> CharSource<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.chars().peekable(),
            offset: 0,
            finished: false,
        }
    }
}

impl Iterator for CharSource<'_> {
    type Item = Char;

    fn next(&mut self) -> Option<Char> {
        if self.finished {
            return None;
        }

        let Some(base) = self.input.next() else {
            self.finished = true;
            return Some(Char::sentinel(self.offset));
        };

        // A selector binds to the base before it, never to another selector
        let selector = if is_variation_selector(base) {
            None
        } else {
            self.input.next_if(|&c| is_variation_selector(c))
        };

        let atom = CodePointTuple::new(base, selector);
        let c = Char::new(atom, self.offset);
        self.offset += atom.byte_len();
        Some(c)
    }
}

/// Build the character stream for a string
pub fn chars_of(input: &str) -> CharSource<'_> {
    CharSource::new(input)
}

/// Concatenate the atoms of a stream, stopping at the sentinel
pub fn join(chars: impl IntoIterator<Item = Char>) -> String {
    let mut out = String::new();
    for c in chars {
        if c.is_sentinel() {
            break;
        }
        c.atom().push_to(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_only_sentinel() {
        let chars: Vec<_> = chars_of("").collect();
        assert_eq!(chars.len(), 1);
        assert!(chars[0].is_sentinel());
        assert_eq!(chars[0].offset(), 0);
    }

    #[test]
    fn test_offsets_are_byte_offsets() {
        let chars: Vec<_> = chars_of("aか\u{20B9F}").collect();
        let offsets: Vec<_> = chars.iter().map(Char::offset).collect();
        assert_eq!(offsets, vec![0, 1, 4, 8]);
    }

    #[test]
    fn test_selectors_pair_with_base() {
        let chars: Vec<_> = chars_of("a\u{FE0F}\u{E0100}b").collect();
        assert_eq!(chars[0].atom(), CodePointTuple::pair('a', '\u{FE0F}'));
        // Second selector has no base left and stands alone
        assert_eq!(chars[1].atom(), CodePointTuple::single('\u{E0100}'));
        assert_eq!(chars[2].atom(), CodePointTuple::single('b'));
        assert!(chars[3].is_sentinel());
    }

    #[test]
    fn test_nothing_after_sentinel() {
        let mut source = chars_of("x");
        assert!(source.next().is_some());
        assert!(source.next().is_some_and(|c| c.is_sentinel()));
        assert!(source.next().is_none());
        assert!(source.next().is_none());
    }

    #[test]
    fn test_join_round_trip() {
        let input = "漢\u{E0100}字かな ABC";
        assert_eq!(join(chars_of(input)), input);
    }
}
