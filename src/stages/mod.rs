//! Every registered transformation stage
//!
//! Stateful stages (`hira-kata-composition`, `japanese-iteration-marks`,
//! `prolonged-sound-marks`, `ivs-svs-base` and the widening direction of
//! `jisx0201-and-alike`) carry their own iterator. The rest are per-atom
//! lookups over a [`MappingTable`](crate::tables::MappingTable) and share
//! [`TableStage`].

pub mod circled_or_squared;
pub mod composition;
pub mod hira_kata;
pub mod hyphens;
pub mod ideographic_annotations;
pub mod iteration_marks;
pub mod ivs_svs_base;
pub mod jisx0201;
pub mod math_alphanumerics;
pub mod prolonged_sound_marks;
pub mod radicals;
pub mod roman_numerals;
pub mod spaces;
pub mod table;

pub use circled_or_squared::{circled_or_squared, CircledOrSquaredOptions};
pub use composition::{HiraKataComposition, HiraKataCompositionOptions};
pub use hira_kata::{hira_kata, HiraKataMode, HiraKataOptions};
pub use hyphens::{Hyphens, HyphensOptions, HyphensVariant};
pub use ideographic_annotations::ideographic_annotations;
pub use iteration_marks::JapaneseIterationMarks;
pub use ivs_svs_base::{Charset, IvsSvsBase, IvsSvsBaseOptions, IvsSvsMode};
pub use jisx0201::{Jisx0201AndAlike, Jisx0201AndAlikeOptions};
pub use math_alphanumerics::mathematical_alphanumerics;
pub use prolonged_sound_marks::{ProlongedSoundMarks, ProlongedSoundMarksOptions};
pub use radicals::radicals;
pub use roman_numerals::roman_numerals;
pub use spaces::spaces;
pub use table::{combined, kanji_old_new, TableStage};
