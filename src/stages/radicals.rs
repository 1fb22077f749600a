//! CJK radicals (`radicals`)
//!
//! The Kangxi radicals block (U+2F00–U+2FD5) and the two CJK radical
//! supplement characters with compatibility mappings fold to the unified
//! ideographs they are drawn from: ⼀ → 一, ⾦ → 金.

use super::TableStage;
use crate::chars::CodePointTuple;
use crate::tables::MappingTable;
use std::sync::{Arc, OnceLock};

const KANGXI_FIRST: u32 = 0x2F00;

/// Unified ideograph for each Kangxi radical, in code point order
const KANGXI: &str = concat!(
    "一丨丶丿乙亅二亠人儿入八冂冖冫几凵刀力勹匕匚匸十卜卩厂厶又口囗土士夂夊夕大女子宀寸小尢尸屮山巛",
    "工己巾干幺广廴廾弋弓彐彡彳心戈戶手支攴文斗斤方无日曰月木欠止歹殳毋比毛氏气水火爪父爻爿片牙牛犬",
    "玄玉瓜瓦甘生用田疋疒癶白皮皿目矛矢石示禸禾穴立竹米糸缶网羊羽老而耒耳聿肉臣自至臼舌舛舟艮色艸虍",
    "虫血行衣襾見角言谷豆豕豸貝赤走足身車辛辰辵邑酉釆里金長門阜隶隹雨靑非面革韋韭音頁風飛食首香馬骨",
    "高髟鬥鬯鬲鬼魚鳥鹵鹿麥麻黃黍黑黹黽鼎鼓鼠鼻齊齒龍龜龠",
);

const SUPPLEMENT: [(char, char); 2] = [('\u{2E9F}', '母'), ('\u{2EF3}', '龟')];

fn table() -> Arc<MappingTable> {
    static TABLE: OnceLock<Arc<MappingTable>> = OnceLock::new();
    TABLE
        .get_or_init(|| {
            let kangxi = (KANGXI_FIRST..)
                .filter_map(char::from_u32)
                .zip(KANGXI.chars());
            let entries = kangxi.chain(SUPPLEMENT).map(|(radical, ideograph)| {
                (
                    CodePointTuple::single(radical),
                    vec![CodePointTuple::single(ideograph)],
                )
            });
            Arc::new(MappingTable::from_entries("radicals", entries))
        })
        .clone()
}

/// Build the `radicals` stage
pub fn radicals() -> TableStage {
    TableStage::new("radicals", table())
}
