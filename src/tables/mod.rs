//! Lookup tables for table-driven stages
//!
//! Stages such as `spaces` or `radicals` compute their tables from Unicode
//! structure. The rest (`kanji-old-new`, `combined`, `ivs-svs-base` and the
//! `hyphens-*` variants) read them from a [`TableSet`], which is filled by
//! hand or from a directory of `<name>.data` files.
//!
//! # Example
//!
//! ```
//! use jptrans_core::chars::CodePointTuple;
//! use jptrans_core::tables::{MappingTable, TableSet};
//!
//! let mut old_new = MappingTable::new("kanji-old-new");
//! old_new.insert(CodePointTuple::single('舊'), vec![CodePointTuple::single('旧')]);
//!
//! let mut tables = TableSet::new();
//! tables.insert_mapping(old_new);
//! assert!(tables.mapping("kanji-old-new").is_some());
//! ```

pub mod binary;

use crate::chars::CodePointTuple;
use crate::error::{Result, TransliterationError};
use crate::stage::Substitute;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Table names understood by [`TableSet::load_dir`] and their layouts
const KNOWN_TABLES: &[(&str, Layout)] = &[
    ("kanji-old-new", Layout::Pair),
    ("combined", Layout::Sequence),
    ("ivs-svs-base", Layout::IvsSvs),
    ("hyphens-ascii", Layout::Sequence),
    ("hyphens-jisx0201", Layout::Sequence),
    ("hyphens-jisx0208-90", Layout::Sequence),
    ("hyphens-jisx0208-90-windows", Layout::Sequence),
    ("hyphens-jisx0208-verbatim", Layout::Sequence),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Pair,
    Sequence,
    IvsSvs,
}

/// Ordered atom → replacement map
///
/// An empty replacement removes the character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    name: String,
    entries: BTreeMap<CodePointTuple, Vec<CodePointTuple>>,
}

impl MappingTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Build a table from `(key, replacement)` pairs; later pairs win
    pub fn from_entries(
        name: impl Into<String>,
        entries: impl IntoIterator<Item = (CodePointTuple, Vec<CodePointTuple>)>,
    ) -> Self {
        Self {
            name: name.into(),
            entries: entries.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert(&mut self, key: CodePointTuple, replacement: Vec<CodePointTuple>) {
        self.entries.insert(key, replacement);
    }

    pub fn get(&self, key: &CodePointTuple) -> Option<&[CodePointTuple]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &CodePointTuple) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&CodePointTuple, &[CodePointTuple])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl Substitute for MappingTable {
    fn substitute(&self, atom: CodePointTuple) -> Option<Cow<'_, [CodePointTuple]>> {
        self.get(&atom).map(Cow::Borrowed)
    }
}

/// One row of the variation-sequence table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IvsSvsRecord {
    /// Ideographic variation sequence
    pub ivs: CodePointTuple,
    /// Standardized variation sequence for the same glyph, if any
    pub svs: Option<CodePointTuple>,
    /// Base character in JIS X 0208:1990 terms
    pub base90: Option<char>,
    /// Base character in JIS X 0213:2004 terms
    pub base2004: Option<char>,
}

/// Variation-sequence records with the indexes built from them
#[derive(Debug, Clone, Default)]
pub struct IvsSvsTable {
    records: Vec<IvsSvsRecord>,
    by_base90: HashMap<CodePointTuple, usize>,
    by_base2004: HashMap<CodePointTuple, usize>,
    by_sequence: HashMap<CodePointTuple, usize>,
}

impl IvsSvsTable {
    pub fn new(records: Vec<IvsSvsRecord>) -> Self {
        let mut by_base90 = HashMap::new();
        let mut by_base2004 = HashMap::new();
        let mut by_sequence = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            by_sequence.insert(record.ivs, i);
            if let Some(svs) = record.svs {
                by_sequence.entry(svs).or_insert(i);
            }
            // The first record claims a base character
            if let Some(base) = record.base90 {
                by_base90.entry(CodePointTuple::single(base)).or_insert(i);
            }
            if let Some(base) = record.base2004 {
                by_base2004.entry(CodePointTuple::single(base)).or_insert(i);
            }
        }
        Self {
            records,
            by_base90,
            by_base2004,
            by_sequence,
        }
    }

    pub fn records(&self) -> &[IvsSvsRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record whose base character (in the given charset) is `atom`
    pub fn by_base(&self, atom: &CodePointTuple, unijis_90: bool) -> Option<&IvsSvsRecord> {
        let index = if unijis_90 {
            &self.by_base90
        } else {
            &self.by_base2004
        };
        index.get(atom).map(|&i| &self.records[i])
    }

    /// Record whose IVS or SVS is `atom`
    pub fn by_sequence(&self, atom: &CodePointTuple) -> Option<&IvsSvsRecord> {
        self.by_sequence.get(atom).map(|&i| &self.records[i])
    }
}

/// Named tables available to stage construction
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    mappings: HashMap<String, Arc<MappingTable>>,
    ivs_svs: Option<Arc<IvsSvsTable>>,
}

impl TableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping table under its own name, replacing any previous one
    pub fn insert_mapping(&mut self, table: MappingTable) {
        self.mappings
            .insert(table.name().to_string(), Arc::new(table));
    }

    pub fn insert_ivs_svs(&mut self, table: IvsSvsTable) {
        self.ivs_svs = Some(Arc::new(table));
    }

    pub fn mapping(&self, name: &str) -> Option<Arc<MappingTable>> {
        self.mappings.get(name).cloned()
    }

    pub fn ivs_svs(&self) -> Option<Arc<IvsSvsTable>> {
        self.ivs_svs.clone()
    }

    /// Look up a mapping table that `stage` cannot run without
    pub fn require_mapping(&self, stage: &str, name: &str) -> Result<Arc<MappingTable>> {
        self.mapping(name)
            .ok_or_else(|| TransliterationError::MissingTable {
                stage: stage.to_string(),
                table: name.to_string(),
            })
    }

    /// Look up the variation-sequence table for `stage`
    pub fn require_ivs_svs(&self, stage: &str) -> Result<Arc<IvsSvsTable>> {
        self.ivs_svs()
            .ok_or_else(|| TransliterationError::MissingTable {
                stage: stage.to_string(),
                table: "ivs-svs-base".to_string(),
            })
    }

    /// Decode one table by name
    ///
    /// # Arguments
    ///
    /// * `name` - One of the known table names; it selects the record layout
    /// * `bytes` - The table's records
    pub fn load_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let Some(layout) = layout_of(name) else {
            return Err(TransliterationError::MalformedTable {
                table: name.to_string(),
                reason: "unknown table name".to_string(),
            });
        };
        match layout {
            Layout::Pair => self.insert_mapping(binary::read_pair_table(name, bytes)?),
            Layout::Sequence => self.insert_mapping(binary::read_sequence_table(name, bytes)?),
            Layout::IvsSvs => self.insert_ivs_svs(binary::read_ivs_svs_table(name, bytes)?),
        }
        Ok(())
    }

    /// Load every `<name>.data` file in `dir` whose name is a known table
    ///
    /// Other `.data` files are skipped with a warning; files with other
    /// extensions are ignored.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut tables = Self::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("data") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if layout_of(name).is_none() {
                tracing::warn!("skipping unknown table file {}", path.display());
                continue;
            }
            let bytes = fs::read(&path)?;
            tables.load_bytes(name, &bytes)?;
            tracing::debug!("loaded table {} from {}", name, path.display());
        }
        Ok(tables)
    }
}

fn layout_of(name: &str) -> Option<Layout> {
    KNOWN_TABLES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, layout)| layout)
}
