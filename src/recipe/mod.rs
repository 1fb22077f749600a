//! Recipes: option toggles compiled into an ordered stage list
//!
//! A [`TransliterationRecipe`] names what should happen to the text; it does
//! not say in which order. [`TransliterationRecipe::build`] places each
//! requested stage at the head, in the middle or at the tail of the pipeline
//! so that stages with ordering constraints always end up correct:
//!
//! - `kanji-old-new` runs between an IVS/SVS expansion at the head and a
//!   selector strip at the tail
//! - composition of decomposed kana runs at the head, before anything that
//!   looks at whole kana
//! - width conversion runs at the tail, before the hiragana ↔ katakana swap
//!
//! # Examples
//!
//! ```rust
//! use jptrans_core::recipe::{ToHalfwidth, TransliterationRecipe};
//!
//! let recipe = TransliterationRecipe {
//!     replace_spaces: true,
//!     to_halfwidth: ToHalfwidth::HankakuKana,
//!     ..Default::default()
//! };
//! let names: Vec<String> = recipe.build().unwrap().into_iter().map(|c| c.name).collect();
//! assert_eq!(names, vec!["spaces", "jisx0201-and-alike"]);
//! ```

pub mod builder;
pub mod options;

pub use builder::{Placement, StageListBuilder};
pub use options::{
    CircledOrSquared, HiraKataConversion, RemoveIvsSvs, ReplaceHyphens, ToFullwidth, ToHalfwidth,
};

use crate::error::{Result, TransliterationError};
use crate::registry::{StageConfig, StageOptions};
use crate::stages::{
    Charset, CircledOrSquaredOptions, HiraKataCompositionOptions, HiraKataOptions,
    HyphensOptions, IvsSvsBaseOptions, IvsSvsMode, Jisx0201AndAlikeOptions,
    ProlongedSoundMarksOptions,
};
use serde::{Deserialize, Serialize};

/// What to normalize, independent of order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransliterationRecipe {
    /// 舊字體 → 旧字体
    pub kanji_old_new: bool,
    /// スーパ- → スーパー, and 1ー2 → 1-2
    pub replace_suspicious_hyphens_to_prolonged_sound_marks: bool,
    /// ① → (1), 🄰 → [A]
    pub replace_circled_or_squared_characters: CircledOrSquared,
    /// ㍻ → 平成
    pub replace_combined_characters: bool,
    /// ㆖ → 上
    pub replace_ideographic_annotations: bool,
    /// ⾔ → 言
    pub replace_radicals: bool,
    /// U+3000 → U+0020
    pub replace_spaces: bool,
    pub replace_hyphens: ReplaceHyphens,
    /// 𝐀 → A
    pub replace_mathematical_alphanumerics: bool,
    /// Ⅻ → XII
    pub replace_roman_numerals: bool,
    /// か + U+3099 → が
    pub combine_decomposed_hiraganas_and_katakanas: bool,
    pub to_fullwidth: ToFullwidth,
    pub hira_kata: HiraKataConversion,
    /// 時々 → 時時
    pub replace_japanese_iteration_marks: bool,
    pub to_halfwidth: ToHalfwidth,
    pub remove_ivs_svs: RemoveIvsSvs,
    /// Charset assumed by the IVS/SVS stages
    pub charset: Charset,
}

impl TransliterationRecipe {
    /// Parse a recipe from JSON; absent fields are off
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Report every pair of options that cannot be combined
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.to_fullwidth != ToFullwidth::Off && self.to_halfwidth != ToHalfwidth::Off {
            errors.push("to_fullwidth and to_halfwidth are mutually exclusive");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(TransliterationError::ConflictingOptions(errors.join("; ")))
        }
    }

    /// Compile the recipe into an ordered list of stage configs
    pub fn build(&self) -> Result<Vec<StageConfig>> {
        self.validate()?;

        let mut list = StageListBuilder::new();
        self.assemble(&mut list);
        let configs = list.build();

        tracing::debug!(
            "recipe compiled to [{}]",
            configs
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(configs)
    }

    /// Place every enabled option; the order of the steps matters
    fn assemble(&self, list: &mut StageListBuilder) {
        if self.kanji_old_new {
            self.ivs_svs_round_trip(list, false);
            list.insert_middle(StageConfig::new("kanji-old-new"), false);
        }
        if self.replace_suspicious_hyphens_to_prolonged_sound_marks {
            let options = ProlongedSoundMarksOptions {
                replace_prolonged_marks_following_alnums: true,
                ..Default::default()
            };
            list.insert_middle(StageOptions::ProlongedSoundMarks(options).into(), false);
        }
        if self.replace_circled_or_squared_characters != CircledOrSquared::Off {
            let options = CircledOrSquaredOptions {
                include_emojis: self.replace_circled_or_squared_characters
                    != CircledOrSquared::ExceptEmojis,
                ..Default::default()
            };
            list.insert_middle(StageOptions::CircledOrSquared(options).into(), false);
        }
        if self.replace_combined_characters {
            list.insert_middle(StageConfig::new("combined"), false);
        }
        if self.replace_ideographic_annotations {
            list.insert_middle(StageConfig::new("ideographic-annotations"), false);
        }
        if self.replace_radicals {
            list.insert_middle(StageConfig::new("radicals"), false);
        }
        if self.replace_spaces {
            list.insert_middle(StageConfig::new("spaces"), false);
        }
        match &self.replace_hyphens {
            ReplaceHyphens::Off => {}
            ReplaceHyphens::On => {
                let options = HyphensOptions::default();
                list.insert_middle(StageOptions::Hyphens(options).into(), false);
            }
            ReplaceHyphens::Precedence(precedence) => {
                let options = HyphensOptions {
                    precedence: precedence.clone(),
                };
                list.insert_middle(StageOptions::Hyphens(options).into(), false);
            }
        }
        if self.replace_mathematical_alphanumerics {
            list.insert_middle(StageConfig::new("mathematical-alphanumerics"), false);
        }
        if self.replace_roman_numerals {
            list.insert_middle(StageConfig::new("roman-numerals"), false);
        }
        if self.combine_decomposed_hiraganas_and_katakanas {
            list.insert_head(composition(), false);
        }
        if self.to_fullwidth != ToFullwidth::Off {
            let options = Jisx0201AndAlikeOptions {
                fullwidth_to_halfwidth: false,
                u005c_as_yen_sign: Some(self.to_fullwidth == ToFullwidth::U005cAsYenSign),
                ..Default::default()
            };
            list.insert_tail(StageOptions::Jisx0201AndAlike(options).into(), false);
        }
        if let Some(mode) = self.hira_kata.mode() {
            let options = HiraKataOptions { mode };
            list.insert_tail(StageOptions::HiraKata(options).into(), false);
        }
        if self.replace_japanese_iteration_marks {
            list.insert_head(composition(), false);
            list.insert_middle(StageConfig::new("japanese-iteration-marks"), false);
        }
        if self.to_halfwidth != ToHalfwidth::Off {
            let options = Jisx0201AndAlikeOptions {
                fullwidth_to_halfwidth: true,
                convert_gl: true,
                convert_gr: self.to_halfwidth == ToHalfwidth::HankakuKana,
                ..Default::default()
            };
            list.insert_tail(StageOptions::Jisx0201AndAlike(options).into(), false);
        }
        if self.remove_ivs_svs != RemoveIvsSvs::Off {
            self.ivs_svs_round_trip(list, self.remove_ivs_svs == RemoveIvsSvs::DropAllSelectors);
        }
    }

    /// Normalize to variation sequences first, strip them last
    fn ivs_svs_round_trip(&self, list: &mut StageListBuilder, drop_selectors_altogether: bool) {
        let expand = IvsSvsBaseOptions {
            mode: IvsSvsMode::IvsOrSvs,
            charset: self.charset,
            ..Default::default()
        };
        let strip = IvsSvsBaseOptions {
            mode: IvsSvsMode::Base,
            charset: self.charset,
            drop_selectors_altogether,
            ..Default::default()
        };
        list.insert_head(StageOptions::IvsSvsBase(expand).into(), true);
        list.insert_tail(StageOptions::IvsSvsBase(strip).into(), true);
    }
}

fn composition() -> StageConfig {
    StageOptions::HiraKataComposition(HiraKataCompositionOptions {
        compose_non_combining_marks: true,
    })
    .into()
}
