//! Roman numeral symbols (`roman-numerals`)
//!
//! Ⅰ…Ⅿ (U+2160–U+216F) and ⅰ…ⅿ (U+2170–U+217F) are spelled out in ASCII
//! letters: Ⅻ → XII, ⅳ → iv.

use super::TableStage;
use crate::chars::CodePointTuple;
use crate::tables::MappingTable;
use std::sync::{Arc, OnceLock};

const UPPERCASE_FIRST: u32 = 0x2160;
const LOWERCASE_FIRST: u32 = 0x2170;

const NUMERALS: [&str; 16] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "L", "C", "D", "M",
];

fn table() -> Arc<MappingTable> {
    static TABLE: OnceLock<Arc<MappingTable>> = OnceLock::new();
    TABLE
        .get_or_init(|| {
            let mut table = MappingTable::new("roman-numerals");
            for (i, spelling) in (0u32..).zip(NUMERALS) {
                let upper = spelling.chars().map(CodePointTuple::single).collect();
                let lower = spelling
                    .chars()
                    .map(|c| CodePointTuple::single(c.to_ascii_lowercase()))
                    .collect();
                if let Some(c) = char::from_u32(UPPERCASE_FIRST + i) {
                    table.insert(CodePointTuple::single(c), upper);
                }
                if let Some(c) = char::from_u32(LOWERCASE_FIRST + i) {
                    table.insert(CodePointTuple::single(c), lower);
                }
            }
            Arc::new(table)
        })
        .clone()
}

/// Build the `roman-numerals` stage
pub fn roman_numerals() -> TableStage {
    TableStage::new("roman-numerals", table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{assert_stream_contract, run_stage, run_stage_str};

    #[test]
    fn test_uppercase() {
        let stage = roman_numerals();
        assert_eq!(run_stage_str(&stage, "Ⅰ"), "I");
        assert_eq!(run_stage_str(&stage, "Ⅻ"), "XII");
        assert_eq!(run_stage_str(&stage, "Ⅼ Ⅽ Ⅾ Ⅿ"), "L C D M");
    }

    #[test]
    fn test_lowercase() {
        let stage = roman_numerals();
        assert_eq!(run_stage_str(&stage, "ⅳ"), "iv");
        assert_eq!(run_stage_str(&stage, "ⅷ"), "viii");
        assert_eq!(run_stage_str(&stage, "ⅿ"), "m");
    }

    #[test]
    fn test_in_context() {
        assert_eq!(run_stage_str(&roman_numerals(), "第Ⅲ章"), "第III章");
    }

    #[test]
    fn test_expansion_offsets() {
        let out = run_stage(&roman_numerals(), "Ⅷa");
        assert_stream_contract(&out);
        assert_eq!(out.len(), 6);
        // All four letters trace back to the same numeral
        assert!(out[..4].iter().all(|c| c.origin().offset() == 0));
    }
}
