//! Multi-valued recipe switches

use crate::stages::{HiraKataMode, HyphensVariant};
use serde::{Deserialize, Serialize};

/// `replace_circled_or_squared_characters`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CircledOrSquared {
    #[default]
    Off,
    On,
    /// Leave the emoji-presentation forms alone
    ExceptEmojis,
}

/// `replace_hyphens`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplaceHyphens {
    #[default]
    Off,
    /// Default precedence
    On,
    Precedence(Vec<HyphensVariant>),
}

/// `to_fullwidth`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToFullwidth {
    #[default]
    Off,
    On,
    /// Widen `\` to ￥ rather than leaving it alone
    #[serde(rename = "u005c-as-yen-sign")]
    U005cAsYenSign,
}

/// `to_halfwidth`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToHalfwidth {
    #[default]
    Off,
    /// ASCII only
    On,
    /// Katakana as well
    HankakuKana,
}

/// `hira_kata`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HiraKataConversion {
    #[default]
    Off,
    HiraToKata,
    KataToHira,
}

impl HiraKataConversion {
    pub fn mode(self) -> Option<HiraKataMode> {
        match self {
            HiraKataConversion::Off => None,
            HiraKataConversion::HiraToKata => Some(HiraKataMode::HiraToKata),
            HiraKataConversion::KataToHira => Some(HiraKataMode::KataToHira),
        }
    }
}

/// `remove_ivs_svs`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoveIvsSvs {
    #[default]
    Off,
    On,
    /// Also strip selectors the table does not know
    DropAllSelectors,
}
