//! Stage registry
//!
//! Resolves a [`StageConfig`] (a stage name plus optional options) into a
//! runnable stage. The set of stages is closed, so resolution is a single
//! `match` on the name.
//!
//! # Examples
//!
//! ```rust
//! use jptrans_core::registry::{build_stage, StageConfig, StageOptions};
//! use jptrans_core::stage::Stage;
//! use jptrans_core::stages::{HiraKataMode, HiraKataOptions};
//! use jptrans_core::tables::TableSet;
//!
//! let config = StageConfig::from(StageOptions::HiraKata(HiraKataOptions {
//!     mode: HiraKataMode::KataToHira,
//! }));
//! let stage = build_stage(&config, &TableSet::new()).unwrap();
//! assert_eq!(stage.name(), "hira-kata");
//! ```

use crate::error::{Result, TransliterationError};
use crate::stage::{Pipeline, Stage};
use crate::stages::{
    circled_or_squared, combined, hira_kata, ideographic_annotations, kanji_old_new,
    mathematical_alphanumerics, radicals, roman_numerals, spaces, CircledOrSquaredOptions,
    HiraKataComposition, HiraKataCompositionOptions, HiraKataOptions, Hyphens, HyphensOptions,
    IvsSvsBase, IvsSvsBaseOptions, JapaneseIterationMarks, Jisx0201AndAlike,
    Jisx0201AndAlikeOptions, ProlongedSoundMarks, ProlongedSoundMarksOptions,
};
use crate::tables::TableSet;
use serde::{Deserialize, Serialize};

/// Every registered stage name
pub const STAGE_NAMES: &[&str] = &[
    "circled-or-squared",
    "combined",
    "hira-kata",
    "hira-kata-composition",
    "hyphens",
    "ideographic-annotations",
    "ivs-svs-base",
    "japanese-iteration-marks",
    "jisx0201-and-alike",
    "kanji-old-new",
    "mathematical-alphanumerics",
    "prolonged-sound-marks",
    "radicals",
    "roman-numerals",
    "spaces",
];

/// Options of the stages that take any, tagged by stage name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StageOptions {
    HiraKataComposition(HiraKataCompositionOptions),
    ProlongedSoundMarks(ProlongedSoundMarksOptions),
    HiraKata(HiraKataOptions),
    CircledOrSquared(CircledOrSquaredOptions),
    Jisx0201AndAlike(Jisx0201AndAlikeOptions),
    Hyphens(HyphensOptions),
    IvsSvsBase(IvsSvsBaseOptions),
}

impl StageOptions {
    /// Name of the stage these options belong to
    pub fn kind(&self) -> &'static str {
        match self {
            StageOptions::HiraKataComposition(_) => "hira-kata-composition",
            StageOptions::ProlongedSoundMarks(_) => "prolonged-sound-marks",
            StageOptions::HiraKata(_) => "hira-kata",
            StageOptions::CircledOrSquared(_) => "circled-or-squared",
            StageOptions::Jisx0201AndAlike(_) => "jisx0201-and-alike",
            StageOptions::Hyphens(_) => "hyphens",
            StageOptions::IvsSvsBase(_) => "ivs-svs-base",
        }
    }
}

/// A stage name with optional options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<StageOptions>,
}

impl StageConfig {
    /// Config for `name` with default options
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
        }
    }

    pub fn with_options(name: impl Into<String>, options: StageOptions) -> Self {
        Self {
            name: name.into(),
            options: Some(options),
        }
    }
}

impl From<StageOptions> for StageConfig {
    fn from(options: StageOptions) -> Self {
        Self::with_options(options.kind(), options)
    }
}

fn mismatch(
    config: &StageConfig,
    expected: &'static str,
    provided: &StageOptions,
) -> TransliterationError {
    TransliterationError::OptionsMismatch {
        stage: config.name.clone(),
        expected,
        provided: provided.kind(),
    }
}

/// The options of `config`, or their defaults when none were given
fn options_of<T: Clone + Default>(
    config: &StageConfig,
    expected: &'static str,
    pick: fn(&StageOptions) -> Option<&T>,
) -> Result<T> {
    match &config.options {
        None => Ok(T::default()),
        Some(options) => pick(options)
            .cloned()
            .ok_or_else(|| mismatch(config, expected, options)),
    }
}

/// Reject options given to a stage that takes none
fn no_options(config: &StageConfig) -> Result<()> {
    match &config.options {
        None => Ok(()),
        Some(options) => Err(mismatch(config, "no options", options)),
    }
}

/// Resolve one stage
pub fn build_stage(config: &StageConfig, tables: &TableSet) -> Result<Box<dyn Stage>> {
    tracing::debug!("resolving stage {}", config.name);
    let stage: Box<dyn Stage> = match config.name.as_str() {
        "hira-kata-composition" => {
            let options: HiraKataCompositionOptions =
                options_of(config, "hira-kata-composition", |o| match o {
                    StageOptions::HiraKataComposition(o) => Some(o),
                    _ => None,
                })?;
            Box::new(HiraKataComposition::new(options))
        }
        "japanese-iteration-marks" => {
            no_options(config)?;
            Box::new(JapaneseIterationMarks::new())
        }
        "prolonged-sound-marks" => {
            let options: ProlongedSoundMarksOptions =
                options_of(config, "prolonged-sound-marks", |o| match o {
                    StageOptions::ProlongedSoundMarks(o) => Some(o),
                    _ => None,
                })?;
            Box::new(ProlongedSoundMarks::new(options))
        }
        "hira-kata" => {
            let options: HiraKataOptions = options_of(config, "hira-kata", |o| match o {
                StageOptions::HiraKata(o) => Some(o),
                _ => None,
            })?;
            Box::new(hira_kata(&options))
        }
        "circled-or-squared" => {
            let options: CircledOrSquaredOptions =
                options_of(config, "circled-or-squared", |o| match o {
                    StageOptions::CircledOrSquared(o) => Some(o),
                    _ => None,
                })?;
            Box::new(circled_or_squared(&options))
        }
        "jisx0201-and-alike" => {
            let options: Jisx0201AndAlikeOptions =
                options_of(config, "jisx0201-and-alike", |o| match o {
                    StageOptions::Jisx0201AndAlike(o) => Some(o),
                    _ => None,
                })?;
            Box::new(Jisx0201AndAlike::new(&options))
        }
        "hyphens" => {
            let options: HyphensOptions = options_of(config, "hyphens", |o| match o {
                StageOptions::Hyphens(o) => Some(o),
                _ => None,
            })?;
            Box::new(Hyphens::new(&options, tables)?)
        }
        "ivs-svs-base" => {
            let options: IvsSvsBaseOptions = options_of(config, "ivs-svs-base", |o| match o {
                StageOptions::IvsSvsBase(o) => Some(o),
                _ => None,
            })?;
            Box::new(IvsSvsBase::new(&options, tables)?)
        }
        "spaces" => {
            no_options(config)?;
            Box::new(spaces())
        }
        "ideographic-annotations" => {
            no_options(config)?;
            Box::new(ideographic_annotations())
        }
        "roman-numerals" => {
            no_options(config)?;
            Box::new(roman_numerals())
        }
        "radicals" => {
            no_options(config)?;
            Box::new(radicals())
        }
        "mathematical-alphanumerics" => {
            no_options(config)?;
            Box::new(mathematical_alphanumerics())
        }
        "kanji-old-new" => {
            no_options(config)?;
            Box::new(kanji_old_new(tables)?)
        }
        "combined" => {
            no_options(config)?;
            Box::new(combined(tables)?)
        }
        _ => {
            return Err(TransliterationError::UnknownStage {
                name: config.name.clone(),
            })
        }
    };
    Ok(stage)
}

/// Resolve every config, in order, into one pipeline
pub fn build_pipeline(configs: &[StageConfig], tables: &TableSet) -> Result<Pipeline> {
    let stages = configs
        .iter()
        .map(|config| build_stage(config, tables))
        .collect::<Result<Vec<_>>>()?;
    Ok(Pipeline::new(stages))
}
