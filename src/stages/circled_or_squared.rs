//! Circled and squared characters (`circled-or-squared`)
//!
//! Enclosed digits, letters and ideographs are spelled out through a
//! template: ① → (1), ㉑ → (21), ㊙ → (秘), 🄰 → [A].
//!
//! # Options
//!
//! - `template_for_circled` / `template_for_squared`: `?` is replaced by the
//!   enclosed text. Defaults are `(?)` and `[?]`.
//! - `include_emojis`: also rewrite the characters that have emoji
//!   presentation (Ⓜ, 🅰, 🅱, 🅾, 🅿)

use super::TableStage;
use crate::chars::{atoms_from_chars, CodePointTuple};
use crate::tables::MappingTable;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

const CIRCLED_IDEOGRAPHS: &str =
    "一二三四五六七八九十月火水木金土日株有社名特財祝労秘男女適優印注項休写正上中下左右医宗学監企資協夜";

const EMOJI: [char; 5] = ['\u{24C2}', '\u{1F170}', '\u{1F171}', '\u{1F17E}', '\u{1F17F}'];

/// Options for the circled-or-squared stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircledOrSquaredOptions {
    pub template_for_circled: String,
    pub template_for_squared: String,
    pub include_emojis: bool,
}

impl Default for CircledOrSquaredOptions {
    fn default() -> Self {
        Self {
            template_for_circled: "(?)".to_string(),
            template_for_squared: "[?]".to_string(),
            include_emojis: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Enclosure {
    Circle,
    Square,
}

#[derive(Debug, Clone)]
struct Record {
    code: char,
    rendering: String,
    enclosure: Enclosure,
}

fn run(first: u32, renderings: impl IntoIterator<Item = String>, enclosure: Enclosure) -> Vec<Record> {
    (first..)
        .filter_map(char::from_u32)
        .zip(renderings)
        .map(|(code, rendering)| Record {
            code,
            rendering,
            enclosure,
        })
        .collect()
}

fn records() -> &'static [Record] {
    static RECORDS: OnceLock<Vec<Record>> = OnceLock::new();
    RECORDS.get_or_init(|| {
        let numbers = |range: std::ops::RangeInclusive<u32>| range.map(|n| n.to_string());
        let letters = |range: std::ops::RangeInclusive<char>| range.map(String::from);

        let mut records = Vec::new();
        records.extend(run(0x2460, numbers(1..=20), Enclosure::Circle));
        records.extend(run(0x3251, numbers(21..=35), Enclosure::Circle));
        records.extend(run(0x32B1, numbers(36..=50), Enclosure::Circle));
        records.extend(run(0x24B6, letters('A'..='Z'), Enclosure::Circle));
        records.extend(run(0x24D0, letters('a'..='z'), Enclosure::Circle));
        records.extend(run(
            0x3280,
            CIRCLED_IDEOGRAPHS.chars().map(String::from),
            Enclosure::Circle,
        ));
        records.extend(run(0x1F130, letters('A'..='Z'), Enclosure::Square));
        records.extend(run(0x1F170, letters('A'..='Z'), Enclosure::Square));
        records
    })
}

/// Build the `circled-or-squared` stage
pub fn circled_or_squared(options: &CircledOrSquaredOptions) -> TableStage {
    let entries = records()
        .iter()
        .filter(|record| options.include_emojis || !EMOJI.contains(&record.code))
        .map(|record| {
            let template = match record.enclosure {
                Enclosure::Circle => &options.template_for_circled,
                Enclosure::Square => &options.template_for_squared,
            };
            let rendered = template.replace('?', &record.rendering);
            (
                CodePointTuple::single(record.code),
                atoms_from_chars(rendered.chars()),
            )
        });
    let table = MappingTable::from_entries("circled-or-squared", entries);
    TableStage::new("circled-or-squared", Arc::new(table))
}
