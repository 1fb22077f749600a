//! Iteration-mark expansion (`japanese-iteration-marks`)
//!
//! Replaces ゝゞ〱〲 (hiragana), ヽヾ〳〴 (katakana) and 々 (kanji) with the
//! character they repeat:
//!
//! - さゝ → ささ, 時々 → 時時
//! - がゝ → がか: the unvoiced mark drops the voicing
//! - かゞ → かが: the voiced mark adds it, where the kana has a voiced form
//!
//! Only the first mark of a run expands (さゝゝ → ささゝ). Hatsuon, sokuon
//! and semi-voiced kana never expand, and neither does half-width katakana.

use crate::chars::{Char, CodePointTuple};
use crate::kana;
use crate::stage::{CharStream, OffsetCounter, Stage};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Hiragana,
    Katakana,
}

/// Classification of a character an iteration mark may refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Kanji,
    Plain(Script),
    Voiced(Script),
    SemiVoiced,
    Hatsuon,
    Sokuon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Kana { script: Script, voiced: bool },
    Kanji,
}

impl Mark {
    fn of(atom: CodePointTuple) -> Option<Self> {
        let kana = |script, voiced| Some(Mark::Kana { script, voiced });
        match atom.as_char()? {
            '\u{309D}' | '\u{3031}' => kana(Script::Hiragana, false),
            '\u{309E}' | '\u{3032}' => kana(Script::Hiragana, true),
            '\u{30FD}' | '\u{3033}' => kana(Script::Katakana, false),
            '\u{30FE}' | '\u{3034}' => kana(Script::Katakana, true),
            '\u{3005}' => Some(Mark::Kanji),
            _ => None,
        }
    }
}

/// Voicing pairs of one script
#[derive(Debug, Default)]
struct Voicing {
    voice: HashMap<char, char>,
    unvoice: HashMap<char, char>,
}

impl Voicing {
    fn insert(&mut self, base: char, voiced: char) {
        self.voice.insert(base, voiced);
        self.unvoice.insert(voiced, base);
    }
}

fn voicing(script: Script) -> &'static Voicing {
    static HIRAGANA: OnceLock<Voicing> = OnceLock::new();
    static KATAKANA: OnceLock<Voicing> = OnceLock::new();

    // Rows whose hiragana has a voiced form: the k, s, t and h rows, plus
    // う/ウ. Iteration marks never voice う into ゔ.
    let voiced_rows = || {
        kana::KANA_TABLE
            .iter()
            .filter(|entry| entry.hiragana.voiced.is_some())
    };
    match script {
        Script::Hiragana => HIRAGANA.get_or_init(|| {
            let mut table = Voicing::default();
            for entry in voiced_rows().filter(|entry| entry.hiragana.base != 'う') {
                if let Some(voiced) = entry.hiragana.voiced {
                    table.insert(entry.hiragana.base, voiced);
                }
            }
            table
        }),
        Script::Katakana => KATAKANA.get_or_init(|| {
            let mut table = Voicing::default();
            for entry in voiced_rows() {
                if let Some(voiced) = entry.katakana.voiced {
                    table.insert(entry.katakana.base, voiced);
                }
            }
            table
        }),
    }
}

fn is_kanji(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{20000}'..='\u{2A6DF}'
            | '\u{2A700}'..='\u{2B73F}'
            | '\u{2B740}'..='\u{2B81F}'
            | '\u{2B820}'..='\u{2CEAF}'
            | '\u{2CEB0}'..='\u{2EBEF}'
            | '\u{30000}'..='\u{3134F}'
    )
}

fn classify(atom: CodePointTuple) -> Option<Class> {
    let c = atom.first()?;
    if is_kanji(c) {
        return Some(Class::Kanji);
    }
    let script = match c {
        '\u{3041}'..='\u{3096}' => Script::Hiragana,
        '\u{30A1}'..='\u{30FA}' => Script::Katakana,
        _ => return None,
    };
    let class = match c {
        'ぱ' | 'ぴ' | 'ぷ' | 'ぺ' | 'ぽ' | 'パ' | 'ピ' | 'プ' | 'ペ' | 'ポ' => {
            Class::SemiVoiced
        }
        'ん' | 'ン' => Class::Hatsuon,
        'っ' | 'ッ' => Class::Sokuon,
        _ if voicing(script).unvoice.contains_key(&c) => Class::Voiced(script),
        _ => Class::Plain(script),
    };
    Some(class)
}

/// The last character a mark may repeat
#[derive(Debug, Clone, Copy)]
struct Reference {
    atom: CodePointTuple,
    class: Class,
}

impl Reference {
    /// What `mark` expands to after this character, if anything
    fn expand(&self, mark: Mark) -> Option<CodePointTuple> {
        match (mark, self.class) {
            (Mark::Kanji, Class::Kanji) => Some(self.atom),
            (Mark::Kana { script, voiced }, Class::Plain(s)) if s == script => {
                if voiced {
                    self.lookup(&voicing(script).voice)
                } else {
                    Some(self.atom)
                }
            }
            (Mark::Kana { script, voiced }, Class::Voiced(s)) if s == script => {
                if voiced {
                    Some(self.atom)
                } else {
                    self.lookup(&voicing(script).unvoice)
                }
            }
            _ => None,
        }
    }

    fn lookup(&self, table: &HashMap<char, char>) -> Option<CodePointTuple> {
        let c = self.atom.as_char()?;
        table.get(&c).copied().map(CodePointTuple::single)
    }
}

/// The `japanese-iteration-marks` stage
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseIterationMarks;

impl JapaneseIterationMarks {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for JapaneseIterationMarks {
    fn name(&self) -> &'static str {
        "japanese-iteration-marks"
    }

    fn apply<'a>(&'a self, input: CharStream<'a>) -> CharStream<'a> {
        Box::new(Expanding {
            input,
            reference: None,
            after_mark: false,
            offset: OffsetCounter::default(),
            finished: false,
        })
    }
}

struct Expanding<'a> {
    input: CharStream<'a>,
    reference: Option<Reference>,
    after_mark: bool,
    offset: OffsetCounter,
    finished: bool,
}

impl Iterator for Expanding<'_> {
    type Item = Char;

    fn next(&mut self) -> Option<Char> {
        if self.finished {
            return None;
        }
        let c = self.input.next()?;
        if c.is_sentinel() {
            self.finished = true;
            return Some(self.offset.finish(c));
        }

        let atom = c.atom();
        let Some(mark) = Mark::of(atom) else {
            self.reference = classify(atom).map(|class| Reference { atom, class });
            self.after_mark = false;
            return Some(self.offset.pass(c));
        };

        let expansion = if self.after_mark {
            None
        } else {
            self.reference.and_then(|r| r.expand(mark))
        };
        self.after_mark = true;
        Some(match expansion {
            Some(repeated) => self.offset.replace(c, repeated),
            None => self.offset.pass(c),
        })
    }
}
