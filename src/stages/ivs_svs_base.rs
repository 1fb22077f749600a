//! Variation-sequence marking and stripping (`ivs-svs-base`)
//!
//! In `ivs-or-svs` mode a bare kanji is replaced by the variation sequence
//! recorded for it (葛 → 葛󠄀), preferring the standardized sequence when
//! `prefer_svs` is set and the record has one. Sequences already present in
//! the input are left as they are. In `base` mode a variation sequence is
//! replaced by its base character in the chosen charset, or simply loses its
//! selector under `drop_selectors_altogether`.

use crate::chars::{Char, CodePointTuple};
use crate::error::Result;
use crate::stage::{CharStream, OffsetCounter, Stage};
use crate::tables::{IvsSvsTable, TableSet};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IvsSvsMode {
    /// Base character → variation sequence
    #[default]
    IvsOrSvs,
    /// Variation sequence → base character
    Base,
}

/// Which JIS edition's glyph a base character stands for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    #[serde(rename = "unijis-90")]
    Unijis90,
    #[default]
    #[serde(rename = "unijis-2004")]
    Unijis2004,
}

/// Options for the ivs-svs-base stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IvsSvsBaseOptions {
    pub mode: IvsSvsMode,
    pub charset: Charset,
    /// `ivs-or-svs` only: emit the SVS when the record has one
    pub prefer_svs: bool,
    /// `base` only: strip every selector without consulting the table
    pub drop_selectors_altogether: bool,
}

/// The `ivs-svs-base` stage
#[derive(Debug, Clone)]
pub struct IvsSvsBase {
    options: IvsSvsBaseOptions,
    table: Arc<IvsSvsTable>,
}

impl IvsSvsBase {
    pub fn new(options: &IvsSvsBaseOptions, tables: &TableSet) -> Result<Self> {
        Ok(Self {
            options: options.clone(),
            table: tables.require_ivs_svs("ivs-svs-base")?,
        })
    }

    fn unijis_90(&self) -> bool {
        self.options.charset == Charset::Unijis90
    }

    /// Replacement for `atom`, if any
    fn convert(&self, atom: CodePointTuple) -> Option<CodePointTuple> {
        match self.options.mode {
            IvsSvsMode::IvsOrSvs => {
                // Keyed on the bare base; existing sequences pass through
                let record = self.table.by_base(&atom, self.unijis_90())?;
                let sequence = match record.svs {
                    Some(svs) if self.options.prefer_svs => svs,
                    _ => record.ivs,
                };
                (sequence != atom).then_some(sequence)
            }
            IvsSvsMode::Base => {
                if self.options.drop_selectors_altogether && atom.has_selector() {
                    return Some(atom.base());
                }
                let base = self.table.by_sequence(&atom).and_then(|record| {
                    if self.unijis_90() {
                        record.base90
                    } else {
                        record.base2004
                    }
                });
                base.map(CodePointTuple::single)
            }
        }
    }
}

impl Stage for IvsSvsBase {
    fn name(&self) -> &'static str {
        "ivs-svs-base"
    }

    fn apply<'a>(&'a self, input: CharStream<'a>) -> CharStream<'a> {
        let mut offset = OffsetCounter::default();
        let mut finished = false;
        Box::new(input.map_while(move |c: Char| {
            if finished {
                return None;
            }
            if c.is_sentinel() {
                finished = true;
                return Some(offset.finish(c));
            }
            Some(match self.convert(c.atom()) {
                Some(atom) => offset.replace(c, atom),
                None => offset.pass(c),
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransliterationError;
    use crate::stage::{assert_stream_contract, run_stage, run_stage_str};
    use crate::tables::IvsSvsRecord;

    const IVS: char = '\u{E0100}';

    fn tables() -> TableSet {
        let mut tables = TableSet::new();
        tables.insert_ivs_svs(IvsSvsTable::new(vec![
            IvsSvsRecord {
                ivs: CodePointTuple::pair('葛', IVS),
                svs: None,
                base90: Some('葛'),
                base2004: Some('葛'),
            },
            IvsSvsRecord {
                ivs: CodePointTuple::pair('辻', '\u{E0101}'),
                svs: Some(CodePointTuple::pair('辻', '\u{FE00}')),
                base90: None,
                base2004: Some('辻'),
            },
            IvsSvsRecord {
                ivs: CodePointTuple::pair('邉', '\u{E0102}'),
                svs: None,
                base90: Some('邊'),
                base2004: Some('邊'),
            },
        ]));
        tables
    }

    fn stage(options: IvsSvsBaseOptions) -> IvsSvsBase {
        IvsSvsBase::new(&options, &tables()).unwrap()
    }

    #[test]
    fn test_adds_sequences() {
        let stage = stage(IvsSvsBaseOptions::default());
        assert_eq!(run_stage_str(&stage, "葛飾"), "葛\u{E0100}飾");
        assert_eq!(run_stage_str(&stage, "辻"), "辻\u{E0101}");
    }

    #[test]
    fn test_prefer_svs() {
        let stage = stage(IvsSvsBaseOptions {
            prefer_svs: true,
            ..Default::default()
        });
        assert_eq!(run_stage_str(&stage, "辻"), "辻\u{FE00}");
        // No SVS recorded: fall back to the IVS
        assert_eq!(run_stage_str(&stage, "葛"), "葛\u{E0100}");
    }

    #[test]
    fn test_existing_sequences_pass_through() {
        let plain = stage(IvsSvsBaseOptions::default());
        assert_eq!(run_stage_str(&plain, "辻\u{FE00}"), "辻\u{FE00}");
        assert_eq!(run_stage_str(&plain, "邉\u{E0102}"), "邉\u{E0102}");

        let svs = stage(IvsSvsBaseOptions {
            prefer_svs: true,
            ..Default::default()
        });
        assert_eq!(run_stage_str(&svs, "辻\u{E0101}"), "辻\u{E0101}");

        let out = run_stage(&plain, "辻\u{FE00}");
        assert!(!out[0].is_transliterated());
    }

    #[test]
    fn test_charset_selects_base_index() {
        let stage = stage(IvsSvsBaseOptions {
            charset: Charset::Unijis90,
            ..Default::default()
        });
        // 辻 has no JIS90 base
        assert_eq!(run_stage_str(&stage, "辻葛"), "辻葛\u{E0100}");
    }

    #[test]
    fn test_strips_sequences() {
        let stage = stage(IvsSvsBaseOptions {
            mode: IvsSvsMode::Base,
            ..Default::default()
        });
        assert_eq!(run_stage_str(&stage, "葛\u{E0100}飾"), "葛飾");
        assert_eq!(run_stage_str(&stage, "辻\u{FE00}"), "辻");
        // Unknown sequences stay
        assert_eq!(run_stage_str(&stage, "飾\u{E0100}"), "飾\u{E0100}");
    }

    #[test]
    fn test_strip_respects_charset() {
        let stage = stage(IvsSvsBaseOptions {
            mode: IvsSvsMode::Base,
            charset: Charset::Unijis90,
            ..Default::default()
        });
        assert_eq!(run_stage_str(&stage, "辻\u{E0101}"), "辻\u{E0101}");
    }

    #[test]
    fn test_drop_selectors_altogether() {
        let stage = stage(IvsSvsBaseOptions {
            mode: IvsSvsMode::Base,
            charset: Charset::Unijis90,
            drop_selectors_altogether: true,
            ..Default::default()
        });
        assert_eq!(run_stage_str(&stage, "辻\u{E0101}飾\u{FE01}"), "辻飾");
        assert_eq!(run_stage_str(&stage, "飾"), "飾");
    }

    #[test]
    fn test_drop_selectors_skips_table_base() {
        let by_table = stage(IvsSvsBaseOptions {
            mode: IvsSvsMode::Base,
            ..Default::default()
        });
        assert_eq!(run_stage_str(&by_table, "邉\u{E0102}"), "邊");

        let dropping = stage(IvsSvsBaseOptions {
            mode: IvsSvsMode::Base,
            drop_selectors_altogether: true,
            ..Default::default()
        });
        assert_eq!(run_stage_str(&dropping, "邉\u{E0102}"), "邉");
        assert_eq!(run_stage_str(&dropping, "邊"), "邊");
    }

    #[test]
    fn test_missing_table() {
        let err = IvsSvsBase::new(&IvsSvsBaseOptions::default(), &TableSet::new()).unwrap_err();
        assert!(matches!(err, TransliterationError::MissingTable { .. }));
    }

    #[test]
    fn test_offsets_and_provenance() {
        let stage = stage(IvsSvsBaseOptions::default());
        let out = run_stage(&stage, "葛x");
        assert_stream_contract(&out);
        assert_eq!(out[1].offset(), 7);
        assert!(out[0].is_transliterated());
        assert!(!out[1].is_transliterated());
    }

    #[test]
    fn test_options_from_json() {
        let options: IvsSvsBaseOptions =
            serde_json::from_str(r#"{"mode": "base", "charset": "unijis-90"}"#).unwrap();
        assert_eq!(options.mode, IvsSvsMode::Base);
        assert_eq!(options.charset, Charset::Unijis90);
        assert!(!options.drop_selectors_altogether);
    }
}
