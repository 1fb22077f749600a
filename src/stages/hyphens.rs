//! Hyphen-family unification (`hyphens`)
//!
//! Dashes, minus signs and prolonged marks are rewritten to the spelling a
//! target character set uses for them. Each variant is a `hyphens-<variant>`
//! table in the [`TableSet`]; the variants are tried in precedence order and
//! the first one holding the character decides.

use crate::chars::CodePointTuple;
use crate::error::Result;
use crate::stage::{CharStream, Stage, Substitute, Substituted};
use crate::tables::{MappingTable, TableSet};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Target spelling of a hyphen-like character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HyphensVariant {
    Ascii,
    Jisx0201,
    #[serde(rename = "jisx0208-90")]
    Jisx0208_90,
    #[serde(rename = "jisx0208-90-windows")]
    Jisx0208_90Windows,
    Jisx0208Verbatim,
}

impl HyphensVariant {
    /// Name of the table holding this variant
    pub fn table_name(self) -> &'static str {
        match self {
            HyphensVariant::Ascii => "hyphens-ascii",
            HyphensVariant::Jisx0201 => "hyphens-jisx0201",
            HyphensVariant::Jisx0208_90 => "hyphens-jisx0208-90",
            HyphensVariant::Jisx0208_90Windows => "hyphens-jisx0208-90-windows",
            HyphensVariant::Jisx0208Verbatim => "hyphens-jisx0208-verbatim",
        }
    }
}

impl fmt::Display for HyphensVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.table_name();
        f.write_str(name.strip_prefix("hyphens-").unwrap_or(name))
    }
}

/// Options for the hyphens stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyphensOptions {
    pub precedence: Vec<HyphensVariant>,
}

impl Default for HyphensOptions {
    fn default() -> Self {
        Self {
            precedence: vec![HyphensVariant::Jisx0208_90Windows, HyphensVariant::Jisx0201],
        }
    }
}

/// The `hyphens` stage
#[derive(Debug)]
pub struct Hyphens {
    tables: Vec<Arc<MappingTable>>,
}

impl Hyphens {
    /// Resolve every variant of `options` against `tables`
    pub fn new(options: &HyphensOptions, tables: &TableSet) -> Result<Self> {
        let tables = options
            .precedence
            .iter()
            .map(|variant| tables.require_mapping("hyphens", variant.table_name()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { tables })
    }
}

impl Substitute for Hyphens {
    fn substitute(&self, atom: CodePointTuple) -> Option<Cow<'_, [CodePointTuple]>> {
        self.tables
            .iter()
            .find_map(|table| table.get(&atom))
            .map(Cow::Borrowed)
    }
}

impl Stage for Hyphens {
    fn name(&self) -> &'static str {
        "hyphens"
    }

    fn apply<'a>(&'a self, input: CharStream<'a>) -> CharStream<'a> {
        Box::new(Substituted::new(input, self))
    }
}
