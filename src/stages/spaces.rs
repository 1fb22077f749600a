//! Space normalization (`spaces`)
//!
//! Every space-like character becomes U+0020. Zero-width characters that
//! only look like spacing (MONGOLIAN VOWEL SEPARATOR, ZERO WIDTH NO-BREAK
//! SPACE) are removed.

use super::TableStage;
use crate::chars::CodePointTuple;
use crate::tables::MappingTable;
use std::sync::{Arc, OnceLock};

const SPACE_LIKE: [char; 18] = [
    '\u{00A0}', '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}',
    '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}', '\u{200A}', '\u{200B}', '\u{202F}',
    '\u{205F}', '\u{3000}', '\u{3164}', '\u{FFA0}',
];

const REMOVED: [char; 2] = ['\u{180E}', '\u{FEFF}'];

fn table() -> Arc<MappingTable> {
    static TABLE: OnceLock<Arc<MappingTable>> = OnceLock::new();
    TABLE
        .get_or_init(|| {
            let space = vec![CodePointTuple::single(' ')];
            let replaced = SPACE_LIKE
                .iter()
                .map(|&c| (CodePointTuple::single(c), space.clone()));
            let removed = REMOVED.iter().map(|&c| (CodePointTuple::single(c), vec![]));
            Arc::new(MappingTable::from_entries("spaces", replaced.chain(removed)))
        })
        .clone()
}

/// Build the `spaces` stage
pub fn spaces() -> TableStage {
    TableStage::new("spaces", table())
}
