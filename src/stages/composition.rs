//! Combining-mark composition (`hira-kata-composition`)
//!
//! Folds a kana followed by a voiced or semi-voiced sound mark into the
//! precomposed character: か + U+3099 → が, ハ + U+309A → パ. The iteration
//! marks compose too (ゝ + U+3099 → ゞ).
//!
//! # Algorithm
//!
//! A single pending slot holds a character read past the one being emitted.
//! When the current character has a composed form, the next character is
//! pulled; if it is a matching sound mark the pair is emitted as one
//! character (source = the base) and the mark is dropped, otherwise the base
//! is emitted and the pulled character waits in the slot for the next call.
//! Only one composition step happens per base.

use crate::chars::{Char, CodePointTuple};
use crate::kana;
use crate::stage::{CharStream, OffsetCounter, Stage};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

const COMBINING_VOICED_MARK: char = '\u{3099}';
const COMBINING_SEMIVOICED_MARK: char = '\u{309A}';
const VOICED_MARK: char = '\u{309B}';
const SEMIVOICED_MARK: char = '\u{309C}';

/// Iteration marks and their voiced counterparts
const ITERATION_MARK_PAIRS: [(char, char); 4] = [
    ('\u{309D}', '\u{309E}'), // ゝ ゞ
    ('\u{30FD}', '\u{30FE}'), // ヽ ヾ
    ('\u{3031}', '\u{3032}'), // 〱 〲
    ('\u{3033}', '\u{3034}'), // 〳 〴
];

/// Options for the composition stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiraKataCompositionOptions {
    /// Also compose the spacing marks ゛ (U+309B) and ゜ (U+309C)
    #[serde(default)]
    pub compose_non_combining_marks: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Voiced,
    SemiVoiced,
}

/// Composed forms of a base character
#[derive(Debug, Clone, Copy, Default)]
struct Composed {
    voiced: Option<char>,
    semivoiced: Option<char>,
}

fn composition_table() -> &'static HashMap<char, Composed> {
    static TABLE: OnceLock<HashMap<char, Composed>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        for forms in kana::all_forms() {
            if forms.voiced.is_some() || forms.semivoiced.is_some() {
                table.insert(
                    forms.base,
                    Composed {
                        voiced: forms.voiced,
                        semivoiced: forms.semivoiced,
                    },
                );
            }
        }
        for (mark, voiced) in ITERATION_MARK_PAIRS {
            table.insert(
                mark,
                Composed {
                    voiced: Some(voiced),
                    semivoiced: None,
                },
            );
        }
        table
    })
}

/// The `hira-kata-composition` stage
#[derive(Debug, Clone, Default)]
pub struct HiraKataComposition {
    options: HiraKataCompositionOptions,
}

impl HiraKataComposition {
    pub fn new(options: HiraKataCompositionOptions) -> Self {
        Self { options }
    }

    fn mark_of(&self, atom: CodePointTuple) -> Option<Mark> {
        match atom.as_char()? {
            COMBINING_VOICED_MARK => Some(Mark::Voiced),
            COMBINING_SEMIVOICED_MARK => Some(Mark::SemiVoiced),
            VOICED_MARK if self.options.compose_non_combining_marks => Some(Mark::Voiced),
            SEMIVOICED_MARK if self.options.compose_non_combining_marks => Some(Mark::SemiVoiced),
            _ => None,
        }
    }
}

impl Stage for HiraKataComposition {
    fn name(&self) -> &'static str {
        "hira-kata-composition"
    }

    fn apply<'a>(&'a self, input: CharStream<'a>) -> CharStream<'a> {
        Box::new(Composing {
            stage: self,
            input,
            pending: None,
            offset: OffsetCounter::default(),
            finished: false,
        })
    }
}

struct Composing<'a> {
    stage: &'a HiraKataComposition,
    input: CharStream<'a>,
    pending: Option<Char>,
    offset: OffsetCounter,
    finished: bool,
}

impl Iterator for Composing<'_> {
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

        let Some(composed) = c
            .atom()
            .as_char()
            .and_then(|base| composition_table().get(&base))
        else {
            return Some(self.offset.pass(c));
        };
        let Some(next) = self.input.next() else {
            return Some(self.offset.pass(c));
        };

        let target = match self.stage.mark_of(next.atom()) {
            Some(Mark::Voiced) => composed.voiced,
            Some(Mark::SemiVoiced) => composed.semivoiced,
            None => None,
        };
        match target {
            Some(target) => Some(self.offset.replace(c, CodePointTuple::single(target))),
            None => {
                self.pending = Some(next);
                Some(self.offset.pass(c))
            }
        }
    }
}
