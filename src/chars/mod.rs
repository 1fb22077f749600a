//! Character model
//!
//! - [`CodePointTuple`]: a base scalar value with an optional variation selector
//! - [`Char`]: an atom with its output offset and provenance chain
//! - [`CharSource`]: string → `Char` stream, terminated by a sentinel

mod codepoint;
mod source;
mod unit;

pub use codepoint::{atoms_from_chars, is_variation_selector, CodePointTuple};
pub use source::{chars_of, join, CharSource};
pub use unit::Char;
