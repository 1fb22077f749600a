//! String-in, string-out facade over a pipeline
//!
//! # Examples
//!
//! ```rust
//! use jptrans_core::{transliterate, TransliterationRecipe};
//!
//! let recipe = TransliterationRecipe {
//!     replace_japanese_iteration_marks: true,
//!     replace_spaces: true,
//!     ..Default::default()
//! };
//! assert_eq!(transliterate("時々\u{3000}いすゞ", &recipe).unwrap(), "時時 いすず");
//! ```

use crate::chars::Char;
use crate::error::{Result, TransliterationError};
use crate::recipe::TransliterationRecipe;
use crate::registry::{build_pipeline, StageConfig};
use crate::stage::Pipeline;
use crate::tables::TableSet;

/// A ready-to-run pipeline
///
/// Construction does all the checking; [`Transliterator::transliterate`]
/// cannot fail. A transliterator holds no per-run state and can be shared
/// between threads.
#[derive(Debug)]
pub struct Transliterator {
    pipeline: Pipeline,
}

impl Transliterator {
    /// Build from a recipe, for recipes that need no tables
    pub fn from_recipe(recipe: &TransliterationRecipe) -> Result<Self> {
        Self::from_recipe_with_tables(recipe, &TableSet::new())
    }

    pub fn from_recipe_with_tables(
        recipe: &TransliterationRecipe,
        tables: &TableSet,
    ) -> Result<Self> {
        let configs = recipe.build()?;
        Self::from_configs_with_tables(&configs, tables)
    }

    /// Build from an explicit, ordered stage list
    pub fn from_configs(configs: &[StageConfig]) -> Result<Self> {
        Self::from_configs_with_tables(configs, &TableSet::new())
    }

    pub fn from_configs_with_tables(configs: &[StageConfig], tables: &TableSet) -> Result<Self> {
        if configs.is_empty() {
            return Err(TransliterationError::EmptyPipeline);
        }
        let pipeline = build_pipeline(configs, tables)?;
        tracing::debug!("transliterator ready with {} stages", pipeline.len());
        Ok(Self { pipeline })
    }

    /// Build from one stage
    pub fn single(config: StageConfig) -> Result<Self> {
        Self::from_configs(&[config])
    }

    pub fn single_with_tables(config: StageConfig, tables: &TableSet) -> Result<Self> {
        Self::from_configs_with_tables(&[config], tables)
    }

    pub fn transliterate(&self, input: &str) -> String {
        self.pipeline.run(input)
    }

    /// Transform `input` and keep the characters, sentinel included
    ///
    /// Each character's [`Char::origin`] is the input character it came from.
    pub fn transliterate_chars(&self, input: &str) -> Vec<Char> {
        self.pipeline.run_chars(input)
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.stage_names()
    }
}

/// Build a transliterator for `recipe` and run it once
pub fn transliterate(input: &str, recipe: &TransliterationRecipe) -> Result<String> {
    Ok(Transliterator::from_recipe(recipe)?.transliterate(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::CodePointTuple;
    use crate::recipe::{
        CircledOrSquared, HiraKataConversion, RemoveIvsSvs, ReplaceHyphens, ToFullwidth,
        ToHalfwidth,
    };
    use crate::registry::StageOptions;
    use crate::stage::assert_stream_contract;
    use crate::stages::{HyphensVariant, ProlongedSoundMarksOptions};
    use crate::tables::{IvsSvsTable, MappingTable};
    use proptest::prelude::*;

    fn stage(name: &str) -> Transliterator {
        Transliterator::single(StageConfig::new(name)).unwrap()
    }

    /// Every stage that needs no tables, with default options
    fn table_free() -> Transliterator {
        let configs: Vec<_> = [
            "hira-kata-composition",
            "japanese-iteration-marks",
            "prolonged-sound-marks",
            "circled-or-squared",
            "ideographic-annotations",
            "radicals",
            "spaces",
            "mathematical-alphanumerics",
            "roman-numerals",
            "jisx0201-and-alike",
            "hira-kata",
        ]
        .into_iter()
        .map(StageConfig::new)
        .collect();
        Transliterator::from_configs(&configs).unwrap()
    }

    /// Every recipe option on (half-width direction), over empty data tables
    fn everything_on() -> Transliterator {
        let mut tables = TableSet::new();
        tables.insert_mapping(MappingTable::new("kanji-old-new"));
        tables.insert_mapping(MappingTable::new("combined"));
        for variant in [
            HyphensVariant::Ascii,
            HyphensVariant::Jisx0201,
            HyphensVariant::Jisx0208_90,
            HyphensVariant::Jisx0208_90Windows,
            HyphensVariant::Jisx0208Verbatim,
        ] {
            tables.insert_mapping(MappingTable::new(variant.table_name()));
        }
        tables.insert_ivs_svs(IvsSvsTable::new(Vec::new()));

        let recipe = TransliterationRecipe {
            kanji_old_new: true,
            replace_suspicious_hyphens_to_prolonged_sound_marks: true,
            replace_circled_or_squared_characters: CircledOrSquared::On,
            replace_combined_characters: true,
            replace_ideographic_annotations: true,
            replace_radicals: true,
            replace_spaces: true,
            replace_hyphens: ReplaceHyphens::On,
            replace_mathematical_alphanumerics: true,
            replace_roman_numerals: true,
            combine_decomposed_hiraganas_and_katakanas: true,
            to_fullwidth: ToFullwidth::Off,
            hira_kata: HiraKataConversion::KataToHira,
            replace_japanese_iteration_marks: true,
            to_halfwidth: ToHalfwidth::On,
            remove_ivs_svs: RemoveIvsSvs::DropAllSelectors,
            ..Default::default()
        };
        Transliterator::from_recipe_with_tables(&recipe, &tables).unwrap()
    }

    #[test]
    fn test_everything_on_leaves_plain_text_alone() {
        let t = everything_on();
        assert_eq!(t.stage_names().len(), 16);
        assert_eq!(t.transliterate("abc XYZ 123 漢字"), "abc XYZ 123 漢字");
        assert_eq!(t.transliterate("ひらがな、です。"), "ひらがな、です。");
    }

    #[test]
    fn test_empty_pipeline_is_rejected() {
        let err = Transliterator::from_configs(&[]).unwrap_err();
        assert!(matches!(err, TransliterationError::EmptyPipeline));

        let err = Transliterator::from_recipe(&TransliterationRecipe::default()).unwrap_err();
        assert!(matches!(err, TransliterationError::EmptyPipeline));
    }

    #[test]
    fn test_construction_errors_surface() {
        let recipe = TransliterationRecipe {
            kanji_old_new: true,
            ..Default::default()
        };
        let err = Transliterator::from_recipe(&recipe).unwrap_err();
        assert!(matches!(err, TransliterationError::MissingTable { .. }));

        let recipe = TransliterationRecipe {
            to_fullwidth: ToFullwidth::On,
            to_halfwidth: ToHalfwidth::On,
            ..Default::default()
        };
        assert!(transliterate("x", &recipe).is_err());
    }

    #[test]
    fn test_iteration_mark_examples() {
        let t = stage("japanese-iteration-marks");
        assert_eq!(t.transliterate("さゝ"), "ささ");
        assert_eq!(t.transliterate("がゝ"), "がか");
        assert_eq!(t.transliterate("がゞ"), "がが");
        assert_eq!(t.transliterate("んゝ"), "んゝ");
        assert_eq!(t.transliterate("さゝゝ"), "ささゝ");
    }

    #[test]
    fn test_prolonged_mark_examples() {
        let t = stage("prolonged-sound-marks");
        assert_eq!(t.transliterate("イ\u{FF0D}ハ"), "イ\u{30FC}ハ");
        assert_eq!(t.transliterate("カトラリ\u{002D}"), "カトラリ\u{30FC}");

        let t = Transliterator::single(
            StageOptions::ProlongedSoundMarks(ProlongedSoundMarksOptions {
                replace_prolonged_marks_following_alnums: true,
                ..Default::default()
            })
            .into(),
        )
        .unwrap();
        assert_eq!(t.transliterate("1\u{30FC}\u{FF0D}2"), "1--2");
    }

    #[test]
    fn test_width_then_script_swap() {
        let recipe = TransliterationRecipe {
            to_fullwidth: ToFullwidth::On,
            hira_kata: HiraKataConversion::KataToHira,
            ..Default::default()
        };
        let t = Transliterator::from_recipe(&recipe).unwrap();
        assert_eq!(t.stage_names(), vec!["jisx0201-and-alike", "hira-kata"]);
        // ｶﾞ is widened to ガ first, so the swap sees a full-width kana
        assert_eq!(t.transliterate("ｶﾞｲﾄﾞ ABC"), "がいど\u{3000}ＡＢＣ");
    }

    #[test]
    fn test_recipe_with_tables() {
        let mut tables = TableSet::new();
        tables.insert_mapping(MappingTable::from_entries(
            "combined",
            [(
                CodePointTuple::single('㍻'),
                vec![CodePointTuple::single('平'), CodePointTuple::single('成')],
            )],
        ));
        let recipe = TransliterationRecipe {
            replace_combined_characters: true,
            replace_roman_numerals: true,
            ..Default::default()
        };
        let t = Transliterator::from_recipe_with_tables(&recipe, &tables).unwrap();
        assert_eq!(t.transliterate("㍻Ⅻ年"), "平成XII年");
    }

    #[test]
    fn test_chars_expose_provenance() {
        let t = table_free();
        let out = t.transliterate_chars("Ⅻx");
        assert_stream_contract(&out);
        assert_eq!(out.len(), 5);
        for c in &out[..3] {
            assert_eq!(c.origin().atom(), CodePointTuple::single('Ⅻ'));
            assert!(c.is_transliterated());
        }
        assert!(!out[3].is_transliterated());
        assert_eq!(out[3].origin().offset(), 3);
    }

    #[test]
    fn test_transliterator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transliterator>();
    }

    proptest! {
        #[test]
        fn prop_offsets_are_contiguous(s in "\\PC{0,40}") {
            let out = table_free().transliterate_chars(&s);
            assert_stream_contract(&out);
        }

        #[test]
        fn prop_sentinel_ends_every_stream(s in "\\PC{0,40}") {
            let out = table_free().transliterate_chars(&s);
            prop_assert_eq!(out.iter().filter(|c| c.is_sentinel()).count(), 1);
            prop_assert!(out.last().map_or(false, |c| c.is_sentinel()));
        }

        #[test]
        fn prop_origins_point_into_input(s in "\\PC{0,40}") {
            for c in table_free().transliterate_chars(&s) {
                let origin = c.origin();
                if origin.is_sentinel() {
                    prop_assert_eq!(origin.offset(), s.len());
                } else {
                    let rest = &s[origin.offset()..];
                    prop_assert!(rest.starts_with(&origin.atom().to_string()));
                }
            }
        }

        #[test]
        fn prop_unmapped_text_round_trips(s in "[a-zA-Z0-9 漢字]{0,40}") {
            prop_assert_eq!(table_free().transliterate(&s), s);
        }

        #[test]
        fn prop_full_recipe_keeps_unmapped_text(
            s in "[a-zA-Z0-9 .,:;!?()\\[\\]ぁ-ゖ一-龥、。「」]{0,60}"
        ) {
            prop_assert_eq!(everything_on().transliterate(&s), s);
        }
    }
}
