//! jptrans Core - Japanese text transliteration pipeline
//!
//! Rewrites Unicode text into an equivalent normalized form: old ↔ new
//! kanji, hiragana ↔ katakana, full ↔ half width, hyphen unification,
//! variation sequences, combining-mark composition, iteration marks and
//! more. It implements:
//! - A character model with byte offsets and provenance back to the input
//! - Lazy, composable transformation stages
//! - A registry resolving stage names and options into stages
//! - Recipes that place requested stages in a correct order
//! - A big-endian table format for the table-driven stages
//!
//! # Examples
//!
//! ```rust
//! use jptrans_core::{Transliterator, TransliterationRecipe};
//! use jptrans_core::recipe::{HiraKataConversion, ToFullwidth};
//!
//! let recipe = TransliterationRecipe {
//!     to_fullwidth: ToFullwidth::On,
//!     hira_kata: HiraKataConversion::KataToHira,
//!     ..Default::default()
//! };
//! let t = Transliterator::from_recipe(&recipe).unwrap();
//! assert_eq!(t.transliterate("ｶﾀｶﾅ"), "かたかな");
//! ```

pub mod chars;
pub mod error;
pub mod kana;
pub mod recipe;
pub mod registry;
pub mod stage;
pub mod stages;
pub mod tables;
pub mod transliterator;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use chars::{Char, CodePointTuple};
pub use error::{Result, TransliterationError};
pub use recipe::TransliterationRecipe;
pub use registry::{StageConfig, StageOptions};
pub use stage::{Pipeline, Stage};
pub use tables::TableSet;
pub use transliterator::{transliterate, Transliterator};
