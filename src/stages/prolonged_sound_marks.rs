//! Hyphen → prolonged sound mark normalization (`prolonged-sound-marks`)
//!
//! A hyphen-like character that follows a vowel-ended kana becomes the
//! prolonged sound mark of the kana's width: カトラリ- → カトラリー,
//! ｶ- → ｶｰ. With `replace_prolonged_marks_following_alnums`, a run of
//! hyphen-like characters after a letter or digit goes the other way and
//! becomes plain hyphens: 1ー－2 → 1--2.
//!
//! # State
//!
//! - `last`: classification of the most recent character that is not
//!   hyphen-like
//! - `queue`: output produced by a buffered hyphen run
//! - `pending`: the character read past the end of that run

use crate::chars::{Char, CodePointTuple};
use crate::stage::{CharStream, OffsetCounter, Stage};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const PROLONGED_SOUND_MARK: char = '\u{30FC}';
const HALFWIDTH_PROLONGED_SOUND_MARK: char = '\u{FF70}';
const HYPHEN_MINUS: char = '-';
const FULLWIDTH_HYPHEN_MINUS: char = '\u{FF0D}';

const HYPHEN_LIKE: [char; 8] = [
    '\u{002D}', // HYPHEN-MINUS
    '\u{2010}', // HYPHEN
    '\u{2014}', // EM DASH
    '\u{2015}', // HORIZONTAL BAR
    '\u{2212}', // MINUS SIGN
    '\u{FF0D}', // FULLWIDTH HYPHEN-MINUS
    '\u{FF70}', // HALFWIDTH KATAKANA-HIRAGANA PROLONGED SOUND MARK
    '\u{30FC}', // KATAKANA-HIRAGANA PROLONGED SOUND MARK
];

fn is_hyphen_like(atom: CodePointTuple) -> bool {
    atom.as_char().is_some_and(|c| HYPHEN_LIKE.contains(&c))
}

/// Script and property bits of a character
///
/// The top three bits hold the script, the low five bits the properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CharType(u8);

impl CharType {
    const OTHER: u8 = 0x00;
    const HIRAGANA: u8 = 0x20;
    const KATAKANA: u8 = 0x40;
    const ALPHABET: u8 = 0x60;
    const DIGIT: u8 = 0x80;
    const EITHER: u8 = 0xa0;
    const SCRIPT_MASK: u8 = 0xe0;

    const HALFWIDTH: u8 = 1 << 0;
    const VOWEL_ENDED: u8 = 1 << 1;
    const HATSUON: u8 = 1 << 2;
    const SOKUON: u8 = 1 << 3;
    const PROLONGED_SOUND_MARK: u8 = 1 << 4;

    fn of(atom: CodePointTuple) -> Self {
        let Some(c) = atom.first() else {
            return CharType(Self::OTHER);
        };
        let bits = match c {
            '0'..='9' => Self::DIGIT | Self::HALFWIDTH,
            '\u{FF10}'..='\u{FF19}' => Self::DIGIT,
            'A'..='Z' | 'a'..='z' => Self::ALPHABET | Self::HALFWIDTH,
            '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => Self::ALPHABET,
            '\u{FF70}' => Self::KATAKANA | Self::PROLONGED_SOUND_MARK | Self::HALFWIDTH,
            '\u{30FC}' => Self::EITHER | Self::PROLONGED_SOUND_MARK,
            'っ' => Self::HIRAGANA | Self::SOKUON,
            'ん' => Self::HIRAGANA | Self::HATSUON,
            'ッ' => Self::KATAKANA | Self::SOKUON,
            'ン' => Self::KATAKANA | Self::HATSUON,
            'ｯ' => Self::KATAKANA | Self::SOKUON | Self::HALFWIDTH,
            'ﾝ' => Self::KATAKANA | Self::HATSUON | Self::HALFWIDTH,
            '\u{3041}'..='\u{309C}' | '\u{309F}' => Self::HIRAGANA | Self::VOWEL_ENDED,
            '\u{30A1}'..='\u{30FA}' | '\u{30FD}'..='\u{30FF}' => {
                Self::KATAKANA | Self::VOWEL_ENDED
            }
            '\u{FF66}'..='\u{FF6F}' | '\u{FF71}'..='\u{FF9F}' => {
                Self::KATAKANA | Self::VOWEL_ENDED | Self::HALFWIDTH
            }
            _ => Self::OTHER,
        };
        CharType(bits)
    }

    fn has(self, flags: u8) -> bool {
        self.0 & flags != 0
    }

    fn is_halfwidth(self) -> bool {
        self.has(Self::HALFWIDTH)
    }

    fn is_alnum(self) -> bool {
        let script = self.0 & Self::SCRIPT_MASK;
        script == Self::ALPHABET || script == Self::DIGIT
    }
}

/// Options for the prolonged-sound-mark stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProlongedSoundMarksOptions {
    /// Leave hyphens that an earlier stage produced untouched
    pub skip_already_transliterated_chars: bool,
    /// Treat ん/ン/ﾝ as prolongable
    pub allow_prolonged_hatsuon: bool,
    /// Treat っ/ッ/ｯ as prolongable
    pub allow_prolonged_sokuon: bool,
    /// Turn hyphen runs after letters and digits into plain hyphens
    pub replace_prolonged_marks_following_alnums: bool,
}

/// The `prolonged-sound-marks` stage
#[derive(Debug, Clone)]
pub struct ProlongedSoundMarks {
    options: ProlongedSoundMarksOptions,
    prolongables: u8,
}

impl ProlongedSoundMarks {
    pub fn new(options: ProlongedSoundMarksOptions) -> Self {
        let mut prolongables = CharType::VOWEL_ENDED;
        if options.allow_prolonged_hatsuon {
            prolongables |= CharType::HATSUON;
        }
        if options.allow_prolonged_sokuon {
            prolongables |= CharType::SOKUON;
        }
        Self {
            options,
            prolongables,
        }
    }

    fn is_prolongable(&self, char_type: CharType) -> bool {
        // A prolonged sound mark is never prolonged again
        !char_type.has(CharType::PROLONGED_SOUND_MARK) && char_type.has(self.prolongables)
    }
}

impl Default for ProlongedSoundMarks {
    fn default() -> Self {
        Self::new(ProlongedSoundMarksOptions::default())
    }
}

impl Stage for ProlongedSoundMarks {
    fn name(&self) -> &'static str {
        "prolonged-sound-marks"
    }

    fn apply<'a>(&'a self, input: CharStream<'a>) -> CharStream<'a> {
        Box::new(Prolonging {
            stage: self,
            input,
            last: None,
            queue: VecDeque::new(),
            pending: None,
            offset: OffsetCounter::default(),
            finished: false,
        })
    }
}

struct Prolonging<'a> {
    stage: &'a ProlongedSoundMarks,
    input: CharStream<'a>,
    last: Option<CharType>,
    queue: VecDeque<Char>,
    pending: Option<Char>,
    offset: OffsetCounter,
    finished: bool,
}

impl Prolonging<'_> {
    fn hyphen(&mut self, c: Char) -> Char {
        let options = &self.stage.options;
        let eligible = !options.skip_already_transliterated_chars || !c.is_transliterated();
        let Some(last) = self.last.filter(|_| eligible) else {
            return self.offset.pass(c);
        };

        if self.stage.is_prolongable(last) {
            let mark = if last.is_halfwidth() {
                HALFWIDTH_PROLONGED_SOUND_MARK
            } else {
                PROLONGED_SOUND_MARK
            };
            return self.offset.replace(c, CodePointTuple::single(mark));
        }

        if options.replace_prolonged_marks_following_alnums && last.is_alnum() {
            return self.hyphen_run(c, last);
        }
        self.offset.pass(c)
    }

    /// Buffer every hyphen-like character after `first`, then emit the run
    /// as plain hyphens of the width of `before`
    ///
    /// Returns the output for `first`; the rest of the run is queued.
    fn hyphen_run(&mut self, first: Char, before: CharType) -> Char {
        let mut rest = Vec::new();
        while let Some(next) = self.input.next() {
            if next.is_sentinel() || !is_hyphen_like(next.atom()) {
                if !next.is_sentinel() {
                    self.last = Some(CharType::of(next.atom()));
                }
                self.pending = Some(next);
                break;
            }
            rest.push(next);
        }

        let keep = self.stage.options.skip_already_transliterated_chars
            && (first.is_transliterated() || rest.iter().any(Char::is_transliterated));
        let hyphen = CodePointTuple::single(if before.is_halfwidth() {
            HYPHEN_MINUS
        } else {
            FULLWIDTH_HYPHEN_MINUS
        });
        let offset = &mut self.offset;
        let mut emit = |c: Char| {
            if keep {
                offset.pass(c)
            } else {
                offset.replace(c, hyphen)
            }
        };
        let head = emit(first);
        self.queue.extend(rest.into_iter().map(emit));
        head
    }
}

impl Iterator for Prolonging<'_> {
    type Item = Char;

    fn next(&mut self) -> Option<Char> {
        if let Some(out) = self.queue.pop_front() {
            return Some(out);
        }
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
        if is_hyphen_like(c.atom()) {
            return Some(self.hyphen(c));
        }
        self.last = Some(CharType::of(c.atom()));
        Some(self.offset.pass(c))
    }
}
