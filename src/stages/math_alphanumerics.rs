//! Mathematical alphanumeric symbols (`mathematical-alphanumerics`)
//!
//! Styled letters and digits from U+1D400–U+1D7FF (bold, italic, script,
//! fraktur, double-struck, sans-serif, monospace) fold to their plain
//! forms: 𝐀 → A, 𝝎 → ω, 𝟗 → 9.
//!
//! The block is laid out in runs: 13 Latin styles of 52 letters, 5 Greek
//! styles of 58 symbols and 5 digit styles of 10. Some Latin slots are
//! unassigned because the letter already existed elsewhere (ℎ, ℬ, ℭ, …).

use super::TableStage;
use crate::chars::CodePointTuple;
use crate::tables::MappingTable;
use std::sync::{Arc, OnceLock};

const LATIN_FIRST: u32 = 0x1D400;
const LATIN_STYLES: u32 = 13;
const LATIN_RUN: u32 = 52;

const GREEK_FIRST: u32 = 0x1D6A8;
const GREEK_STYLES: u32 = 5;
const GREEK: &str = "ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡϴΣΤΥΦΧΨΩ∇αβγδεζηθικλμνξοπρςστυφχψω∂ϵϑϰϕϱϖ";

const DIGIT_FIRST: u32 = 0x1D7CE;
const DIGIT_STYLES: u32 = 5;

/// Unassigned slots in the Latin runs
const LATIN_HOLES: [u32; 24] = [
    0x1D455, 0x1D49D, 0x1D4A0, 0x1D4A1, 0x1D4A3, 0x1D4A4, 0x1D4A7, 0x1D4A8, 0x1D4AD, 0x1D4BA,
    0x1D4BC, 0x1D4C4, 0x1D506, 0x1D50B, 0x1D50C, 0x1D515, 0x1D51D, 0x1D53A, 0x1D53F, 0x1D545,
    0x1D547, 0x1D548, 0x1D549, 0x1D551,
];

const SINGLES: [(u32, char); 4] = [
    (0x1D6A4, 'ı'),
    (0x1D6A5, 'ȷ'),
    (0x1D7CA, 'Ϝ'),
    (0x1D7CB, 'ϝ'),
];

fn latin_letter(index: u32) -> Option<char> {
    let base = if index < 26 { b'A' as u32 } else { b'a' as u32 - 26 };
    char::from_u32(base + index)
}

fn table() -> Arc<MappingTable> {
    static TABLE: OnceLock<Arc<MappingTable>> = OnceLock::new();
    TABLE
        .get_or_init(|| {
            let mut pairs: Vec<(u32, char)> = Vec::new();
            for style in 0..LATIN_STYLES {
                for index in 0..LATIN_RUN {
                    let code = LATIN_FIRST + style * LATIN_RUN + index;
                    if LATIN_HOLES.contains(&code) {
                        continue;
                    }
                    if let Some(letter) = latin_letter(index) {
                        pairs.push((code, letter));
                    }
                }
            }
            let greek_run = GREEK.chars().count() as u32;
            for style in 0..GREEK_STYLES {
                for (index, letter) in (0u32..).zip(GREEK.chars()) {
                    pairs.push((GREEK_FIRST + style * greek_run + index, letter));
                }
            }
            for style in 0..DIGIT_STYLES {
                for (index, digit) in (0u32..).zip('0'..='9') {
                    pairs.push((DIGIT_FIRST + style * 10 + index, digit));
                }
            }
            pairs.extend(SINGLES);

            let entries = pairs.into_iter().filter_map(|(code, plain)| {
                let styled = char::from_u32(code)?;
                Some((
                    CodePointTuple::single(styled),
                    vec![CodePointTuple::single(plain)],
                ))
            });
            Arc::new(MappingTable::from_entries(
                "mathematical-alphanumerics",
                entries,
            ))
        })
        .clone()
}

/// Build the `mathematical-alphanumerics` stage
pub fn mathematical_alphanumerics() -> TableStage {
    TableStage::new("mathematical-alphanumerics", table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::run_stage_str;

    #[test]
    fn test_latin_styles() {
        let stage = mathematical_alphanumerics();
        assert_eq!(run_stage_str(&stage, "𝐀𝐳"), "Az"); // bold
        assert_eq!(run_stage_str(&stage, "𝑥𝑦"), "xy"); // italic
        assert_eq!(run_stage_str(&stage, "𝔄𝔟"), "Ab"); // fraktur
        assert_eq!(run_stage_str(&stage, "𝕏"), "X"); // double-struck
        assert_eq!(run_stage_str(&stage, "𝚊𝚣"), "az"); // monospace
    }

    #[test]
    fn test_greek_and_digits() {
        let stage = mathematical_alphanumerics();
        assert_eq!(run_stage_str(&stage, "𝚨𝛀"), "ΑΩ");
        assert_eq!(run_stage_str(&stage, "𝛁𝛛"), "∇∂");
        assert_eq!(run_stage_str(&stage, "𝝎"), "ω");
        assert_eq!(run_stage_str(&stage, "𝟎𝟗𝟿"), "099");
    }

    #[test]
    fn test_singles() {
        let stage = mathematical_alphanumerics();
        assert_eq!(run_stage_str(&stage, "𝚤𝚥"), "ıȷ");
        assert_eq!(run_stage_str(&stage, "𝟊𝟋"), "Ϝϝ");
    }

    #[test]
    fn test_holes_are_not_mapped() {
        let table = mathematical_alphanumerics();
        for hole in LATIN_HOLES {
            let c = char::from_u32(hole).unwrap();
            assert!(!table.table().contains(&CodePointTuple::single(c)));
        }
        // Letterlike symbols outside the block are left alone
        assert_eq!(run_stage_str(&table, "ℎℬ"), "ℎℬ");
    }

    #[test]
    fn test_table_size() {
        let expected = 13 * 52 - 24 + 5 * 58 + 5 * 10 + 4;
        assert_eq!(mathematical_alphanumerics().table().len(), expected);
    }
}
