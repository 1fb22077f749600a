//! Kanbun annotation marks (`ideographic-annotations`)
//!
//! U+3192–U+319F (㆒, ㆖, ㆙, …) become the ideographs they annotate with.

use super::TableStage;
use crate::chars::CodePointTuple;
use crate::tables::MappingTable;
use std::sync::{Arc, OnceLock};

const FIRST: u32 = 0x3192;
const IDEOGRAPHS: &str = "一二三四上中下甲乙丙丁天地人";

fn table() -> Arc<MappingTable> {
    static TABLE: OnceLock<Arc<MappingTable>> = OnceLock::new();
    TABLE
        .get_or_init(|| {
            let entries = (FIRST..)
                .filter_map(char::from_u32)
                .zip(IDEOGRAPHS.chars())
                .map(|(mark, ideograph)| {
                    (
                        CodePointTuple::single(mark),
                        vec![CodePointTuple::single(ideograph)],
                    )
                });
            Arc::new(MappingTable::from_entries("ideographic-annotations", entries))
        })
        .clone()
}

/// Build the `ideographic-annotations` stage
pub fn ideographic_annotations() -> TableStage {
    TableStage::new("ideographic-annotations", table())
}
