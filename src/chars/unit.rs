//! Char: one atom placed in an output stream, with its provenance
//!
//! Every stage emits `Char`s. A derived `Char` keeps a shared reference to the
//! `Char` it came from, so the chain can be walked back to the input.
//! Chains are append-only and acyclic: a `Char` can only be derived from one
//! that already exists.

use super::codepoint::CodePointTuple;
use std::rc::Rc;

/// A character unit in a transformation stream
#[derive(Debug, Clone, PartialEq)]
pub struct Char {
    atom: CodePointTuple,
    offset: usize,
    source: Option<Rc<Char>>,
}

impl Char {
    /// Create an input character with no provenance
    pub fn new(atom: CodePointTuple, offset: usize) -> Self {
        Self {
            atom,
            offset,
            source: None,
        }
    }

    /// Create the end-of-stream sentinel at the given offset
    pub fn sentinel(offset: usize) -> Self {
        Self::new(CodePointTuple::EMPTY, offset)
    }

    /// Create a character with a new atom, derived from `self`
    ///
    /// # Example
    ///
    /// ```
    /// use jptrans_core::chars::{Char, CodePointTuple};
    ///
    /// let ka = Char::new(CodePointTuple::single('か'), 0);
    /// let ga = ka.derive(CodePointTuple::single('が'), 0);
    ///
    /// assert!(ga.is_transliterated());
    /// assert_eq!(ga.source().map(|c| c.atom()), Some(CodePointTuple::single('か')));
    /// ```
    pub fn derive(self, atom: CodePointTuple, offset: usize) -> Char {
        Char {
            atom,
            offset,
            source: Some(Rc::new(self)),
        }
    }

    /// Re-emit the same atom at a new offset; the result's source is `self`
    pub fn with_offset(self, offset: usize) -> Char {
        let atom = self.atom;
        self.derive(atom, offset)
    }

    pub fn atom(&self) -> CodePointTuple {
        self.atom
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The character this one was derived from
    pub fn source(&self) -> Option<&Char> {
        self.source.as_deref()
    }

    /// True for the end-of-stream marker
    pub fn is_sentinel(&self) -> bool {
        self.atom.is_empty()
    }

    /// True if any link of the provenance chain changed the atom
    pub fn is_transliterated(&self) -> bool {
        let mut current = self;
        while let Some(source) = current.source() {
            if source.atom != current.atom {
                return true;
            }
            current = source;
        }
        false
    }

    /// The input character at the root of the provenance chain
    pub fn origin(&self) -> &Char {
        let mut current = self;
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }

    /// UTF-8 length of the atom
    pub fn byte_len(&self) -> usize {
        self.atom.byte_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(c: char) -> Char {
        Char::new(CodePointTuple::single(c), 0)
    }

    #[test]
    fn test_sentinel() {
        let s = Char::sentinel(12);
        assert!(s.is_sentinel());
        assert_eq!(s.offset(), 12);
        assert_eq!(s.byte_len(), 0);
        assert!(!ch('a').is_sentinel());
    }

    #[test]
    fn test_with_offset_is_not_transliteration() {
        let c = ch('a').with_offset(3).with_offset(5);
        assert_eq!(c.offset(), 5);
        assert_eq!(c.source().map(Char::offset), Some(3));
        assert!(!c.is_transliterated());
    }

    #[test]
    fn test_transliterated_anywhere_in_chain() {
        // a -> b, then re-stamped twice: still transliterated
        let c = ch('a')
            .derive(CodePointTuple::single('b'), 0)
            .with_offset(1)
            .with_offset(2);
        assert!(c.is_transliterated());
        assert_eq!(c.origin().atom(), CodePointTuple::single('a'));
    }

    #[test]
    fn test_mapping_back_to_same_atom_is_still_transliterated() {
        // a -> b -> a: an ancestor link differs
        let c = ch('a')
            .derive(CodePointTuple::single('b'), 0)
            .derive(CodePointTuple::single('a'), 0);
        assert!(c.is_transliterated());
    }

    #[test]
    fn test_input_char_is_not_transliterated() {
        assert!(!ch('x').is_transliterated());
        assert!(ch('x').source().is_none());
    }
}
