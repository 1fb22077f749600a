//! Width folding against JIS X 0201 (`jisx0201-and-alike`)
//!
//! Forward (`fullwidth_to_halfwidth`, the default) folds full-width ASCII
//! and katakana into the characters JIS X 0201 can encode: Ａ → A,
//! ガ → ｶﾞ. Reverse widens them again and, by default, recombines a
//! half-width base with a following ﾞ or ﾟ: ｶﾞ → ガ.
//!
//! The GL half covers ASCII. Its code points 0x5C and 0x7E are ambiguous
//! (yen sign or backslash, tilde or overline) and several `Option<bool>`
//! options pick the reading. Unset options resolve differently per
//! direction; see [`Jisx0201AndAlikeOptions::resolve`].

use crate::chars::{Char, CodePointTuple};
use crate::kana::{self, HALFWIDTH_SEMIVOICED_MARK, HALFWIDTH_VOICED_MARK};
use crate::stage::{CharStream, OffsetCounter, Stage, Substituted};
use crate::tables::MappingTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Options for the jisx0201-and-alike stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Jisx0201AndAlikeOptions {
    pub fullwidth_to_halfwidth: bool,
    pub convert_gl: bool,
    pub convert_gr: bool,
    /// Convert ゠ (U+30A0) ↔ `=`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_unsafe_specials: Option<bool>,
    /// Also fold hiragana to half-width katakana (forward only)
    pub convert_hiraganas: bool,
    pub combine_voiced_sound_marks: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u005c_as_yen_sign: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u005c_as_backslash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u007e_as_fullwidth_tilde: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u007e_as_wave_dash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u007e_as_overline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u007e_as_fullwidth_macron: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u00a5_as_yen_sign: Option<bool>,
}

impl Default for Jisx0201AndAlikeOptions {
    fn default() -> Self {
        Self {
            fullwidth_to_halfwidth: true,
            convert_gl: true,
            convert_gr: true,
            convert_unsafe_specials: None,
            convert_hiraganas: false,
            combine_voiced_sound_marks: true,
            u005c_as_yen_sign: None,
            u005c_as_backslash: None,
            u007e_as_fullwidth_tilde: None,
            u007e_as_wave_dash: None,
            u007e_as_overline: None,
            u007e_as_fullwidth_macron: None,
            u00a5_as_yen_sign: None,
        }
    }
}

/// The GL readings in effect once unset options are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GlReadings {
    unsafe_specials: bool,
    u005c_as_yen_sign: bool,
    u005c_as_backslash: bool,
    u007e_as_fullwidth_tilde: bool,
    u007e_as_wave_dash: bool,
    u007e_as_overline: bool,
    u007e_as_fullwidth_macron: bool,
    u00a5_as_yen_sign: bool,
}

impl Jisx0201AndAlikeOptions {
    /// Resolve the ambiguous readings for the configured direction
    ///
    /// Folding accepts every full-width spelling of 0x7E and reads ￥ as
    /// 0x5C unless ¥ was asked for. Widening picks a single spelling: ～ for
    /// 0x7E unless another reading is set, ￥ for both 0x5C and ¥ unless
    /// backslash is set.
    fn resolve(&self) -> GlReadings {
        if self.fullwidth_to_halfwidth {
            GlReadings {
                unsafe_specials: self.convert_unsafe_specials.unwrap_or(true),
                u005c_as_yen_sign: self
                    .u005c_as_yen_sign
                    .unwrap_or(self.u00a5_as_yen_sign.is_none()),
                u005c_as_backslash: self.u005c_as_backslash.unwrap_or(false),
                u007e_as_fullwidth_tilde: self.u007e_as_fullwidth_tilde.unwrap_or(true),
                u007e_as_wave_dash: self.u007e_as_wave_dash.unwrap_or(true),
                u007e_as_overline: self.u007e_as_overline.unwrap_or(false),
                u007e_as_fullwidth_macron: self.u007e_as_fullwidth_macron.unwrap_or(false),
                u00a5_as_yen_sign: self.u00a5_as_yen_sign.unwrap_or(false),
            }
        } else {
            let other_tilde = self.u007e_as_wave_dash.is_some()
                || self.u007e_as_overline.is_some()
                || self.u007e_as_fullwidth_macron.is_some();
            GlReadings {
                unsafe_specials: self.convert_unsafe_specials.unwrap_or(false),
                u005c_as_yen_sign: self
                    .u005c_as_yen_sign
                    .unwrap_or(self.u005c_as_backslash.is_none()),
                u005c_as_backslash: self.u005c_as_backslash.unwrap_or(false),
                u007e_as_fullwidth_tilde: self.u007e_as_fullwidth_tilde.unwrap_or(!other_tilde),
                u007e_as_wave_dash: self.u007e_as_wave_dash.unwrap_or(false),
                u007e_as_overline: self.u007e_as_overline.unwrap_or(false),
                u007e_as_fullwidth_macron: self.u007e_as_fullwidth_macron.unwrap_or(false),
                u00a5_as_yen_sign: self.u00a5_as_yen_sign.unwrap_or(true),
            }
        }
    }
}

/// (full-width, half-width) pairs of the GL half
fn gl_pairs(readings: &GlReadings) -> Vec<(char, char)> {
    let mut pairs = vec![('\u{3000}', ' ')];
    // FF01..FF5D ↔ 21..7D, except the two ambiguous positions
    for code in 0x21u32..=0x7D {
        if code == 0x5C {
            continue;
        }
        if let (Some(full), Some(half)) = (char::from_u32(code + 0xFEE0), char::from_u32(code)) {
            pairs.push((full, half));
        }
    }

    // Later readings win in the reverse direction
    let overrides = [
        (readings.u005c_as_yen_sign, '\u{FFE5}', '\\'),
        (readings.u005c_as_backslash, '\u{FF3C}', '\\'),
        (readings.u007e_as_fullwidth_tilde, '\u{FF5E}', '~'),
        (readings.u007e_as_wave_dash, '\u{301C}', '~'),
        (readings.u007e_as_overline, '\u{203E}', '~'),
        (readings.u007e_as_fullwidth_macron, '\u{FFE3}', '~'),
        (readings.u00a5_as_yen_sign, '\u{FFE5}', '\u{A5}'),
    ];
    pairs.extend(
        overrides
            .into_iter()
            .filter(|(enabled, _, _)| *enabled)
            .map(|(_, full, half)| (full, half)),
    );
    if readings.unsafe_specials {
        pairs.push(('\u{30A0}', '='));
    }
    pairs
}

/// (full-width, half-width) pairs of the GR half
fn gr_pairs() -> Vec<(char, char)> {
    let mut pairs = vec![
        ('\u{3002}', '\u{FF61}'),
        ('\u{300C}', '\u{FF62}'),
        ('\u{300D}', '\u{FF63}'),
        ('\u{3001}', '\u{FF64}'),
        ('\u{30FB}', '\u{FF65}'),
        ('\u{30FC}', '\u{FF70}'),
        ('\u{309B}', HALFWIDTH_VOICED_MARK),
        ('\u{309C}', HALFWIDTH_SEMIVOICED_MARK),
    ];
    for entry in kana::KANA_TABLE {
        if let Some(hw) = entry.halfwidth {
            pairs.push((entry.katakana.base, hw));
        }
    }
    for entry in kana::SMALL_KANA_TABLE {
        if let Some(hw) = entry.halfwidth {
            pairs.push((entry.katakana, hw));
        }
    }
    pairs
}

fn single(c: char) -> CodePointTuple {
    CodePointTuple::single(c)
}

fn build_forward(options: &Jisx0201AndAlikeOptions) -> MappingTable {
    let mut table = MappingTable::new("jisx0201-and-alike");
    let mut put = |from: char, to: &[char]| {
        table.insert(single(from), to.iter().copied().map(single).collect());
    };

    if options.convert_gl {
        for (full, half) in gl_pairs(&options.resolve()) {
            put(full, &[half]);
        }
    }
    if options.convert_gr {
        for (full, half) in gr_pairs() {
            put(full, &[half]);
        }
        put('\u{3099}', &[HALFWIDTH_VOICED_MARK]);
        put('\u{309A}', &[HALFWIDTH_SEMIVOICED_MARK]);
        for entry in kana::KANA_TABLE {
            if let (Some(voiced), Some(spelling)) =
                (entry.katakana.voiced, entry.halfwidth_voiced())
            {
                put(voiced, &spelling);
            }
            if let (Some(semivoiced), Some(spelling)) =
                (entry.katakana.semivoiced, entry.halfwidth_semivoiced())
            {
                put(semivoiced, &spelling);
            }
        }

        if options.convert_hiraganas {
            for entry in kana::KANA_TABLE {
                let Some(hw) = entry.halfwidth else { continue };
                put(entry.hiragana.base, &[hw]);
                if let Some(voiced) = entry.hiragana.voiced {
                    put(voiced, &[hw, HALFWIDTH_VOICED_MARK]);
                }
                if let Some(semivoiced) = entry.hiragana.semivoiced {
                    put(semivoiced, &[hw, HALFWIDTH_SEMIVOICED_MARK]);
                }
            }
            for entry in kana::SMALL_KANA_TABLE {
                if let Some(hw) = entry.halfwidth {
                    put(entry.hiragana, &[hw]);
                }
            }
        }
    }
    table
}

/// Half-width to full-width lookups
#[derive(Debug, Default)]
struct Widening {
    single: HashMap<char, char>,
    /// (base, mark) → combined full-width kana
    combined: HashMap<(char, char), char>,
}

fn build_reverse(options: &Jisx0201AndAlikeOptions) -> Widening {
    let mut widening = Widening::default();
    if options.convert_gl {
        for (full, half) in gl_pairs(&options.resolve()) {
            widening.single.insert(half, full);
        }
    }
    if options.convert_gr {
        for (full, half) in gr_pairs() {
            widening.single.insert(half, full);
        }
        if options.combine_voiced_sound_marks {
            for entry in kana::KANA_TABLE {
                let Some(hw) = entry.halfwidth else { continue };
                if let Some(voiced) = entry.katakana.voiced {
                    widening.combined.insert((hw, HALFWIDTH_VOICED_MARK), voiced);
                }
                if let Some(semivoiced) = entry.katakana.semivoiced {
                    widening.combined.insert((hw, HALFWIDTH_SEMIVOICED_MARK), semivoiced);
                }
            }
        }
    }
    widening
}

#[derive(Debug)]
enum Direction {
    Fold(MappingTable),
    Widen(Widening),
}

/// The `jisx0201-and-alike` stage
#[derive(Debug)]
pub struct Jisx0201AndAlike {
    direction: Direction,
}

impl Jisx0201AndAlike {
    pub fn new(options: &Jisx0201AndAlikeOptions) -> Self {
        let direction = if options.fullwidth_to_halfwidth {
            let table = build_forward(options);
            tracing::debug!("jisx0201-and-alike: {} folding entries", table.len());
            Direction::Fold(table)
        } else {
            let widening = build_reverse(options);
            tracing::debug!(
                "jisx0201-and-alike: {} widening entries, {} combinations",
                widening.single.len(),
                widening.combined.len()
            );
            Direction::Widen(widening)
        };
        Self { direction }
    }
}

impl Default for Jisx0201AndAlike {
    fn default() -> Self {
        Self::new(&Jisx0201AndAlikeOptions::default())
    }
}

impl Stage for Jisx0201AndAlike {
    fn name(&self) -> &'static str {
        "jisx0201-and-alike"
    }

    fn apply<'a>(&'a self, input: CharStream<'a>) -> CharStream<'a> {
        match &self.direction {
            Direction::Fold(table) => Box::new(Substituted::new(input, table)),
            Direction::Widen(widening) => Box::new(Widen {
                widening,
                input,
                pending: None,
                offset: OffsetCounter::default(),
                finished: false,
            }),
        }
    }
}

struct Widen<'a> {
    widening: &'a Widening,
    input: CharStream<'a>,
    pending: Option<Char>,
    offset: OffsetCounter,
    finished: bool,
}

impl Widen<'_> {
    fn widen(&mut self, c: Char) -> Char {
        match c.atom().as_char().and_then(|ch| self.widening.single.get(&ch)) {
            Some(&full) => self.offset.replace(c, single(full)),
            None => self.offset.pass(c),
        }
    }
}

impl Iterator for Widen<'_> {
    type Item = Char;

    fn next(&mut self) -> Option<Char> {
        if self.finished {
            return None;
        }
        let c = match self.pending.take() {
            Some(c) => c,
            None => self.input.next()?,
        };
        if c.is_sentinel() {
            self.finished = true;
            return Some(self.offset.finish(c));
        }

        if self.widening.combined.is_empty() {
            return Some(self.widen(c));
        }
        let Some(base) = c.atom().as_char() else {
            return Some(self.widen(c));
        };
        let Some(next) = self.input.next() else {
            return Some(self.widen(c));
        };
        let combined = next
            .atom()
            .as_char()
            .and_then(|mark| self.widening.combined.get(&(base, mark)));
        match combined {
            Some(&full) => Some(self.offset.replace(c, single(full))),
            None => {
                self.pending = Some(next);
                Some(self.widen(c))
            }
        }
    }
}
