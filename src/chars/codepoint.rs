//! CodePointTuple: the atom every character unit carries
//!
//! An atom holds zero, one or two Unicode scalar values: a base character,
//! optionally followed by a variation selector. The empty atom is the
//! end-of-stream sentinel.
//!
//! # Properties
//!
//! - **Inline:** two `Option<char>` fields, 8 bytes, `Copy`. Hot ASCII and kana
//!   atoms cost nothing to create, so there is no separate intern table.
//! - **Ordered:** lexicographic over `(first, second)` with an absent value
//!   sorting before any scalar value.
//! - **Well-formed:** `second` is only ever present together with `first`.
//!
//! # Example
//!
//! ```
//! use jptrans_core::chars::CodePointTuple;
//!
//! let plain = CodePointTuple::single('辻');
//! let ivs = CodePointTuple::pair('辻', '\u{E0100}');
//!
//! assert!(plain < ivs);
//! assert_eq!(ivs.len(), 2);
//! assert!(CodePointTuple::EMPTY.is_empty());
//! ```

use std::fmt;

/// Zero, one or two scalar values treated as a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CodePointTuple {
    first: Option<char>,
    second: Option<char>,
}

impl CodePointTuple {
    /// The sentinel atom
    pub const EMPTY: CodePointTuple = CodePointTuple {
        first: None,
        second: None,
    };

    /// Atom holding a single scalar value
    pub const fn single(c: char) -> Self {
        Self {
            first: Some(c),
            second: None,
        }
    }

    /// Atom holding a base character and a second scalar (usually a selector)
    pub const fn pair(first: char, second: char) -> Self {
        Self {
            first: Some(first),
            second: Some(second),
        }
    }

    /// Build an atom from a base and an optional second scalar
    pub const fn new(first: char, second: Option<char>) -> Self {
        Self {
            first: Some(first),
            second,
        }
    }

    /// Build an atom from up to two scalars; `None` if there are more
    pub fn from_chars(chars: &[char]) -> Option<Self> {
        match *chars {
            [] => Some(Self::EMPTY),
            [a] => Some(Self::single(a)),
            [a, b] => Some(Self::pair(a, b)),
            _ => None,
        }
    }

    pub fn first(&self) -> Option<char> {
        self.first
    }

    pub fn second(&self) -> Option<char> {
        self.second
    }

    /// The sole scalar value, if this atom holds exactly one
    pub fn as_char(&self) -> Option<char> {
        match (self.first, self.second) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// Number of scalar values (0, 1 or 2)
    pub fn len(&self) -> usize {
        self.first.is_some() as usize + self.second.is_some() as usize
    }

    /// True for the sentinel
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Iterate over the scalar values
    pub fn chars(&self) -> impl Iterator<Item = char> {
        self.first.into_iter().chain(self.second)
    }

    /// Length of the UTF-8 encoding
    pub fn byte_len(&self) -> usize {
        self.chars().map(char::len_utf8).sum()
    }

    /// Append the UTF-8 encoding to `out`
    pub fn push_to(&self, out: &mut String) {
        out.extend(self.chars());
    }

    /// True if the atom carries a trailing variation selector
    pub fn has_selector(&self) -> bool {
        self.second.is_some_and(is_variation_selector)
    }

    /// The same atom without its second scalar
    pub fn base(&self) -> Self {
        Self {
            first: self.first,
            second: None,
        }
    }
}

impl From<char> for CodePointTuple {
    fn from(c: char) -> Self {
        Self::single(c)
    }
}

impl fmt::Display for CodePointTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Variation selectors: VS1–VS16 and VS17–VS256
pub fn is_variation_selector(c: char) -> bool {
    matches!(c as u32, 0xFE00..=0xFE0F | 0xE0100..=0xE01EF)
}

/// Split scalars into atoms, attaching each variation selector to the
/// scalar before it. A selector with nothing before it stands alone.
pub fn atoms_from_chars(chars: impl IntoIterator<Item = char>) -> Vec<CodePointTuple> {
    let mut atoms = Vec::new();
    let mut pending: Option<char> = None;

    for c in chars {
        match pending {
            Some(base) if is_variation_selector(c) && !is_variation_selector(base) => {
                atoms.push(CodePointTuple::pair(base, c));
                pending = None;
            }
            Some(base) => {
                atoms.push(CodePointTuple::single(base));
                pending = Some(c);
            }
            None => pending = Some(c),
        }
    }
    if let Some(base) = pending {
        atoms.push(CodePointTuple::single(base));
    }

    atoms
}
