//! Hiragana / katakana / half-width katakana correspondence
//!
//! One row per kana with its voiced and semi-voiced forms. Several stages
//! derive their lookup tables from these rows: combining-mark composition,
//! iteration-mark voicing, hiragana↔katakana swapping and JIS X 0201 width
//! folding.

/// A kana together with its voiced and semi-voiced forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanaForms {
    pub base: char,
    pub voiced: Option<char>,
    pub semivoiced: Option<char>,
}

/// One row of the kana table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanaEntry {
    pub hiragana: KanaForms,
    pub katakana: KanaForms,
    /// Half-width katakana, where JIS X 0201 has one
    pub halfwidth: Option<char>,
}

/// Small kana: (hiragana, katakana, half-width)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmallKanaEntry {
    pub hiragana: char,
    pub katakana: char,
    pub halfwidth: Option<char>,
}

/// HALFWIDTH KATAKANA VOICED SOUND MARK
pub const HALFWIDTH_VOICED_MARK: char = '\u{FF9E}';
/// HALFWIDTH KATAKANA SEMI-VOICED SOUND MARK
pub const HALFWIDTH_SEMIVOICED_MARK: char = '\u{FF9F}';

impl KanaEntry {
    /// Half-width spelling of the voiced katakana, e.g. ｶﾞ
    pub fn halfwidth_voiced(&self) -> Option<[char; 2]> {
        self.katakana.voiced?;
        self.halfwidth.map(|hw| [hw, HALFWIDTH_VOICED_MARK])
    }

    /// Half-width spelling of the semi-voiced katakana, e.g. ﾊﾟ
    pub fn halfwidth_semivoiced(&self) -> Option<[char; 2]> {
        self.katakana.semivoiced?;
        self.halfwidth.map(|hw| [hw, HALFWIDTH_SEMIVOICED_MARK])
    }
}

const fn forms(base: char, voiced: Option<char>, semivoiced: Option<char>) -> KanaForms {
    KanaForms {
        base,
        voiced,
        semivoiced,
    }
}

const fn plain(hira: char, kata: char, hw: char) -> KanaEntry {
    KanaEntry {
        hiragana: forms(hira, None, None),
        katakana: forms(kata, None, None),
        halfwidth: Some(hw),
    }
}

const fn voiced(hira: char, kata: char, hw: char, hira_v: char, kata_v: char) -> KanaEntry {
    KanaEntry {
        hiragana: forms(hira, Some(hira_v), None),
        katakana: forms(kata, Some(kata_v), None),
        halfwidth: Some(hw),
    }
}

#[allow(clippy::too_many_arguments)]
const fn semivoiced(
    hira: char,
    kata: char,
    hw: char,
    hira_v: char,
    kata_v: char,
    hira_sv: char,
    kata_sv: char,
) -> KanaEntry {
    KanaEntry {
        hiragana: forms(hira, Some(hira_v), Some(hira_sv)),
        katakana: forms(kata, Some(kata_v), Some(kata_sv)),
        halfwidth: Some(hw),
    }
}

/// Rows where only the katakana has a voiced form (ヷヸヹヺ)
const fn katakana_voiced(hira: char, kata: char, hw: Option<char>, kata_v: char) -> KanaEntry {
    KanaEntry {
        hiragana: forms(hira, None, None),
        katakana: forms(kata, Some(kata_v), None),
        halfwidth: hw,
    }
}

/// The full-size kana rows
pub static KANA_TABLE: &[KanaEntry] = &[
    plain('あ', 'ア', 'ｱ'),
    plain('い', 'イ', 'ｲ'),
    voiced('う', 'ウ', 'ｳ', 'ゔ', 'ヴ'),
    plain('え', 'エ', 'ｴ'),
    plain('お', 'オ', 'ｵ'),
    voiced('か', 'カ', 'ｶ', 'が', 'ガ'),
    voiced('き', 'キ', 'ｷ', 'ぎ', 'ギ'),
    voiced('く', 'ク', 'ｸ', 'ぐ', 'グ'),
    voiced('け', 'ケ', 'ｹ', 'げ', 'ゲ'),
    voiced('こ', 'コ', 'ｺ', 'ご', 'ゴ'),
    voiced('さ', 'サ', 'ｻ', 'ざ', 'ザ'),
    voiced('し', 'シ', 'ｼ', 'じ', 'ジ'),
    voiced('す', 'ス', 'ｽ', 'ず', 'ズ'),
    voiced('せ', 'セ', 'ｾ', 'ぜ', 'ゼ'),
    voiced('そ', 'ソ', 'ｿ', 'ぞ', 'ゾ'),
    voiced('た', 'タ', 'ﾀ', 'だ', 'ダ'),
    voiced('ち', 'チ', 'ﾁ', 'ぢ', 'ヂ'),
    voiced('つ', 'ツ', 'ﾂ', 'づ', 'ヅ'),
    voiced('て', 'テ', 'ﾃ', 'で', 'デ'),
    voiced('と', 'ト', 'ﾄ', 'ど', 'ド'),
    plain('な', 'ナ', 'ﾅ'),
    plain('に', 'ニ', 'ﾆ'),
    plain('ぬ', 'ヌ', 'ﾇ'),
    plain('ね', 'ネ', 'ﾈ'),
    plain('の', 'ノ', 'ﾉ'),
    semivoiced('は', 'ハ', 'ﾊ', 'ば', 'バ', 'ぱ', 'パ'),
    semivoiced('ひ', 'ヒ', 'ﾋ', 'び', 'ビ', 'ぴ', 'ピ'),
    semivoiced('ふ', 'フ', 'ﾌ', 'ぶ', 'ブ', 'ぷ', 'プ'),
    semivoiced('へ', 'ヘ', 'ﾍ', 'べ', 'ベ', 'ぺ', 'ペ'),
    semivoiced('ほ', 'ホ', 'ﾎ', 'ぼ', 'ボ', 'ぽ', 'ポ'),
    plain('ま', 'マ', 'ﾏ'),
    plain('み', 'ミ', 'ﾐ'),
    plain('む', 'ム', 'ﾑ'),
    plain('め', 'メ', 'ﾒ'),
    plain('も', 'モ', 'ﾓ'),
    plain('や', 'ヤ', 'ﾔ'),
    plain('ゆ', 'ユ', 'ﾕ'),
    plain('よ', 'ヨ', 'ﾖ'),
    plain('ら', 'ラ', 'ﾗ'),
    plain('り', 'リ', 'ﾘ'),
    plain('る', 'ル', 'ﾙ'),
    plain('れ', 'レ', 'ﾚ'),
    plain('ろ', 'ロ', 'ﾛ'),
    katakana_voiced('わ', 'ワ', Some('ﾜ'), 'ヷ'),
    katakana_voiced('ゐ', 'ヰ', None, 'ヸ'),
    katakana_voiced('ゑ', 'ヱ', None, 'ヹ'),
    katakana_voiced('を', 'ヲ', Some('ｦ'), 'ヺ'),
    plain('ん', 'ン', 'ﾝ'),
];

/// The small kana rows
pub static SMALL_KANA_TABLE: &[SmallKanaEntry] = &[
    small('ぁ', 'ァ', Some('ｧ')),
    small('ぃ', 'ィ', Some('ｨ')),
    small('ぅ', 'ゥ', Some('ｩ')),
    small('ぇ', 'ェ', Some('ｪ')),
    small('ぉ', 'ォ', Some('ｫ')),
    small('っ', 'ッ', Some('ｯ')),
    small('ゃ', 'ャ', Some('ｬ')),
    small('ゅ', 'ュ', Some('ｭ')),
    small('ょ', 'ョ', Some('ｮ')),
    small('ゎ', 'ヮ', None),
    small('ゕ', 'ヵ', None),
    small('ゖ', 'ヶ', None),
];

const fn small(hiragana: char, katakana: char, halfwidth: Option<char>) -> SmallKanaEntry {
    SmallKanaEntry {
        hiragana,
        katakana,
        halfwidth,
    }
}

/// Iterate over both scripts' forms of every full-size row
pub fn all_forms() -> impl Iterator<Item = &'static KanaForms> {
    KANA_TABLE
        .iter()
        .flat_map(|entry| [&entry.hiragana, &entry.katakana])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halfwidth_code_points() {
        for entry in KANA_TABLE {
            if let Some(hw) = entry.halfwidth {
                assert!(
                    ('\u{FF66}'..='\u{FF9D}').contains(&hw),
                    "{} is not half-width katakana",
                    hw
                );
            }
        }
        for entry in SMALL_KANA_TABLE {
            if let Some(hw) = entry.halfwidth {
                assert!(('\u{FF67}'..='\u{FF6F}').contains(&hw));
            }
        }
    }

    #[test]
    fn test_scripts_are_consistent() {
        for entry in KANA_TABLE {
            assert!(('\u{3041}'..='\u{3096}').contains(&entry.hiragana.base));
            assert!(('\u{30A1}'..='\u{30FA}').contains(&entry.katakana.base));
            // Katakana is always hiragana + 0x60
            assert_eq!(
                entry.katakana.base as u32,
                entry.hiragana.base as u32 + 0x60
            );
        }
    }

    #[test]
    fn test_halfwidth_voiced_spelling() {
        let ka = KANA_TABLE.iter().find(|e| e.katakana.base == 'カ').unwrap();
        assert_eq!(ka.halfwidth_voiced(), Some(['ｶ', 'ﾞ']));
        assert_eq!(ka.halfwidth_semivoiced(), None);

        let ha = KANA_TABLE.iter().find(|e| e.katakana.base == 'ハ').unwrap();
        assert_eq!(ha.halfwidth_semivoiced(), Some(['ﾊ', 'ﾟ']));

        let wa = KANA_TABLE.iter().find(|e| e.katakana.base == 'ワ').unwrap();
        assert_eq!(wa.halfwidth_voiced(), Some(['ﾜ', 'ﾞ']));

        // ヸ has no half-width base to build on
        let wi = KANA_TABLE.iter().find(|e| e.katakana.base == 'ヰ').unwrap();
        assert_eq!(wi.halfwidth_voiced(), None);

        let u = KANA_TABLE.iter().find(|e| e.katakana.base == 'ウ').unwrap();
        assert_eq!(u.halfwidth_voiced(), Some(['ｳ', 'ﾞ']));
    }
}
