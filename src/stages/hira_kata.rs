//! Hiragana ↔ katakana swap (`hira-kata`)
//!
//! Plain, voiced, semi-voiced and small kana are swapped wherever both
//! scripts have the character. Katakana-only forms such as ヷ and
//! half-width katakana stay as they are.

use super::TableStage;
use crate::chars::CodePointTuple;
use crate::kana::{self, KanaForms};
use crate::tables::MappingTable;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Direction of the swap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HiraKataMode {
    #[default]
    HiraToKata,
    KataToHira,
}

/// Options for the hira-kata stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiraKataOptions {
    #[serde(default)]
    pub mode: HiraKataMode,
}

fn swap_pairs(from: &KanaForms, to: &KanaForms) -> Vec<(char, char)> {
    let mut pairs = vec![(from.base, to.base)];
    if let (Some(a), Some(b)) = (from.voiced, to.voiced) {
        pairs.push((a, b));
    }
    if let (Some(a), Some(b)) = (from.semivoiced, to.semivoiced) {
        pairs.push((a, b));
    }
    pairs
}

fn build(mode: HiraKataMode) -> MappingTable {
    let mut pairs = Vec::new();
    for entry in kana::KANA_TABLE {
        let (from, to) = match mode {
            HiraKataMode::HiraToKata => (&entry.hiragana, &entry.katakana),
            HiraKataMode::KataToHira => (&entry.katakana, &entry.hiragana),
        };
        pairs.extend(swap_pairs(from, to));
    }
    for entry in kana::SMALL_KANA_TABLE {
        pairs.push(match mode {
            HiraKataMode::HiraToKata => (entry.hiragana, entry.katakana),
            HiraKataMode::KataToHira => (entry.katakana, entry.hiragana),
        });
    }
    MappingTable::from_entries(
        "hira-kata",
        pairs
            .into_iter()
            .map(|(a, b)| (CodePointTuple::single(a), vec![CodePointTuple::single(b)])),
    )
}

fn table(mode: HiraKataMode) -> Arc<MappingTable> {
    static HIRA_TO_KATA: OnceLock<Arc<MappingTable>> = OnceLock::new();
    static KATA_TO_HIRA: OnceLock<Arc<MappingTable>> = OnceLock::new();
    let cell = match mode {
        HiraKataMode::HiraToKata => &HIRA_TO_KATA,
        HiraKataMode::KataToHira => &KATA_TO_HIRA,
    };
    cell.get_or_init(|| Arc::new(build(mode))).clone()
}

/// Build the `hira-kata` stage
pub fn hira_kata(options: &HiraKataOptions) -> TableStage {
    TableStage::new("hira-kata", table(options.mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::run_stage_str;

    fn to_kata(input: &str) -> String {
        run_stage_str(&hira_kata(&HiraKataOptions::default()), input)
    }

    fn to_hira(input: &str) -> String {
        let stage = hira_kata(&HiraKataOptions {
            mode: HiraKataMode::KataToHira,
        });
        run_stage_str(&stage, input)
    }

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(to_kata("ひらがな"), "ヒラガナ");
        assert_eq!(to_kata("ぱぴぷぺぽ"), "パピプペポ");
        assert_eq!(to_kata("ぁっゃゎゕゖ"), "ァッャヮヵヶ");
        assert_eq!(to_kata("ゔ"), "ヴ");
        assert_eq!(to_kata("ゐゑ"), "ヰヱ");
    }

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(to_hira("カタカナ"), "かたかな");
        assert_eq!(to_hira("ヴァイオリン"), "ゔぁいおりん");
        assert_eq!(to_hira("ヵヶ"), "ゕゖ");
    }

    #[test]
    fn test_katakana_only_forms_kept() {
        assert_eq!(to_hira("ヷヸヹヺ"), "ヷヸヹヺ");
        assert_eq!(to_hira("ｶﾀｶﾅ"), "ｶﾀｶﾅ");
        assert_eq!(to_hira("ー"), "ー");
    }

    #[test]
    fn test_other_text_untouched() {
        assert_eq!(to_kata("漢字とカナ"), "漢字トカナ");
    }

    #[test]
    fn test_mode_serialization() {
        let options: HiraKataOptions = serde_json::from_str(r#"{"mode":"kata-to-hira"}"#).unwrap();
        assert_eq!(options.mode, HiraKataMode::KataToHira);
        assert_eq!(
            serde_json::to_string(&HiraKataMode::HiraToKata).unwrap(),
            r#""hira-to-kata""#
        );
    }
}
